//! Mobile navigation menu: a single open/closed flag per menu instance.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Toggle control activated.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A navigation link inside the menu was activated.
    pub fn close(&mut self) -> bool {
        self.open = false;
        self.open
    }

    /// A pointer interaction anywhere in the document. Closes the menu unless
    /// it landed inside the menu or its toggle control.
    pub fn pointer(&mut self, inside_menu: bool, inside_toggle: bool) -> bool {
        if !inside_menu && !inside_toggle {
            self.open = false;
        }
        self.open
    }
}

#[cfg(feature = "hydrate")]
pub use binding::install;

#[cfg(feature = "hydrate")]
mod binding {
    use std::cell::Cell;
    use std::rc::Rc;

    use web_sys::Element;

    use super::MenuState;
    use crate::config::SiteConfig;
    use crate::consts::ACTIVE_CLASS;
    use crate::dom;
    use crate::error::SiteError;

    #[derive(Clone)]
    struct Menu {
        state: Rc<Cell<MenuState>>,
        toggle: Element,
        links: Element,
    }

    impl Menu {
        fn update(&self, f: impl FnOnce(&mut MenuState) -> bool) {
            let mut state = self.state.get();
            let open = f(&mut state);
            self.state.set(state);
            dom::report("menu", self.render(open));
        }

        fn render(&self, open: bool) -> Result<(), SiteError> {
            dom::set_class(&self.toggle, ACTIVE_CLASS, open)?;
            dom::set_class(&self.links, ACTIVE_CLASS, open)
        }
    }

    pub fn install(config: &SiteConfig) -> Result<(), SiteError> {
        let document = dom::document()?;
        let markup = &config.markup;
        let (Some(toggle), Some(links)) = (
            document.get_element_by_id(&markup.menu_toggle_id),
            document.get_element_by_id(&markup.nav_links_id),
        ) else {
            log::debug!("mobile menu markup missing; menu disabled");
            return Ok(());
        };
        let menu = Menu { state: Rc::new(Cell::new(MenuState::default())), toggle, links };

        let on_toggle = menu.clone();
        dom::listen(&menu.toggle, "click", move |_| on_toggle.update(MenuState::toggle))?;

        for link in dom::query_all_in(&menu.links, &markup.nav_link_selector)? {
            let on_link = menu.clone();
            dom::listen(&link, "click", move |_| on_link.update(MenuState::close))?;
        }

        let on_document = menu.clone();
        dom::listen(&document, "click", move |event| {
            let inside_menu = dom::event_within(&event, &on_document.links);
            let inside_toggle = dom::event_within(&event, &on_document.toggle);
            on_document.update(|state| state.pointer(inside_menu, inside_toggle));
        })?;

        Ok(())
    }
}
