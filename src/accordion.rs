//! FAQ accordion: at most one item of a group open at a time.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// A group of `len` items, all closed.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    #[must_use]
    pub fn open_item(self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// An item's question was activated. Re-activating the open item closes
    /// it; any other item opens and closes the rest.
    pub fn activate(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return self.open;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
        self.open
    }
}

#[cfg(feature = "hydrate")]
pub use binding::install;

#[cfg(feature = "hydrate")]
mod binding {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::Accordion;
    use crate::config::SiteConfig;
    use crate::consts::ACTIVE_CLASS;
    use crate::dom;
    use crate::error::SiteError;

    pub fn install(config: &SiteConfig) -> Result<(), SiteError> {
        let document = dom::document()?;
        let items = Rc::new(dom::query_all(&document, &config.markup.faq_item_selector)?);
        let state = Rc::new(Cell::new(Accordion::new(items.len())));

        for (index, item) in items.iter().enumerate() {
            let Some(question) = item.query_selector(&config.markup.faq_question_selector)? else {
                continue;
            };
            let items = Rc::clone(&items);
            let state = Rc::clone(&state);
            dom::listen(&question, "click", move |_| {
                let mut accordion = state.get();
                accordion.activate(index);
                state.set(accordion);
                for (i, item) in items.iter().enumerate() {
                    dom::report("faq", dom::set_class(item, ACTIVE_CLASS, accordion.is_open(i)));
                }
            })?;
        }
        Ok(())
    }
}
