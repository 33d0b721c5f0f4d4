//! Copy-to-clipboard button for the code sample panel.
//!
//! On success the button briefly shows a checkmark. [`CopyFeedback`] tracks
//! the markup to restore and makes sure only the most recent confirmation's
//! timer restores it.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    original: Option<String>,
    generation: u64,
}

impl CopyFeedback {
    #[must_use]
    pub fn is_confirming(&self) -> bool {
        self.original.is_some()
    }

    /// Start (or extend) the success state. `current_markup` is kept only
    /// when not already confirming, so the checkmark never becomes the
    /// markup to restore. Returns the generation the revert timer must pass.
    pub fn confirm(&mut self, current_markup: &str) -> u64 {
        if self.original.is_none() {
            self.original = Some(current_markup.to_owned());
        }
        self.generation += 1;
        self.generation
    }

    /// Markup to restore when `generation` is still the latest confirmation.
    pub fn revert(&mut self, generation: u64) -> Option<String> {
        if generation != self.generation {
            return None;
        }
        self.original.take()
    }
}

#[cfg(feature = "hydrate")]
pub use binding::install;

#[cfg(feature = "hydrate")]
mod binding {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use js_sys::Reflect;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Clipboard, Element, HtmlDocument, HtmlElement, HtmlTextAreaElement};

    use super::CopyFeedback;
    use crate::config::SiteConfig;
    use crate::consts::{CHECKMARK_SVG, SUCCESS_COLOR};
    use crate::dom;
    use crate::error::SiteError;

    #[derive(Clone)]
    struct CopyButton {
        button: HtmlElement,
        source: Element,
        feedback: Rc<RefCell<CopyFeedback>>,
        feedback_ms: u32,
    }

    impl CopyButton {
        async fn copy(self) {
            let text = self.source.text_content().unwrap_or_default();
            match write_clipboard(&text).await {
                Ok(()) => dom::report("copy", self.confirm()),
                Err(err) => {
                    log::error!("copy failed: {err}");
                    if let Err(err) = fallback_copy(&text) {
                        log::error!("fallback copy failed: {err}");
                    }
                }
            }
        }

        fn confirm(&self) -> Result<(), SiteError> {
            let generation = self.feedback.borrow_mut().confirm(&self.button.inner_html());
            self.button.set_inner_html(CHECKMARK_SVG);
            dom::set_style(&self.button, "color", SUCCESS_COLOR)?;

            let this = self.clone();
            Timeout::new(self.feedback_ms, move || {
                let restore = this.feedback.borrow_mut().revert(generation);
                if let Some(markup) = restore {
                    this.button.set_inner_html(&markup);
                    dom::report("copy", dom::set_style(&this.button, "color", ""));
                }
            })
            .forget();
            Ok(())
        }
    }

    async fn write_clipboard(text: &str) -> Result<(), SiteError> {
        let navigator = dom::window()?.navigator();
        let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(SiteError::ClipboardUnavailable);
        }
        let clipboard: Clipboard = clipboard.unchecked_into();
        JsFuture::from(clipboard.write_text(text)).await?;
        Ok(())
    }

    /// Select-and-copy through a temporary textarea for browsers without the
    /// async Clipboard API.
    fn fallback_copy(text: &str) -> Result<(), SiteError> {
        let document = dom::document()?;
        let body = dom::body(&document)?;
        let textarea: HtmlTextAreaElement = document.create_element("textarea")?.unchecked_into();
        textarea.set_value(text);
        body.append_child(&textarea)?;
        textarea.select();
        let copied = document.unchecked_ref::<HtmlDocument>().exec_command("copy");
        body.remove_child(&textarea)?;
        if !copied? {
            log::warn!("fallback copy was refused by the browser");
        }
        Ok(())
    }

    pub fn install(config: &SiteConfig) -> Result<(), SiteError> {
        let document = dom::document()?;
        let markup = &config.markup;
        let button = document.query_selector(&markup.copy_button_selector)?.as_ref().and_then(dom::html);
        let (Some(button), Some(source)) = (button, document.get_element_by_id(&markup.demo_code_id)) else {
            log::debug!("copy button or demo output missing; copy disabled");
            return Ok(());
        };

        let copy = CopyButton {
            button,
            source,
            feedback: Rc::new(RefCell::new(CopyFeedback::default())),
            feedback_ms: config.effects.copy_feedback_ms,
        };
        let target = copy.button.clone();
        dom::listen(&target, "click", move |_| {
            wasm_bindgen_futures::spawn_local(copy.clone().copy());
        })?;
        Ok(())
    }
}
