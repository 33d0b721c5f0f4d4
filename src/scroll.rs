//! In-page anchor scrolling and the scroll-dependent header shadow.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{HEADER_SHADOW, NO_SHADOW};

/// Selector to look up for an in-page anchor `href`, or `None` when the
/// click should keep its default behavior (bare `#`, other URLs).
#[must_use]
pub fn anchor_selector(href: &str) -> Option<&str> {
    (href.starts_with('#') && href != "#").then_some(href)
}

/// What an in-page anchor click should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorAction {
    /// Cancel default navigation and scroll to the target.
    Intercept,
    /// Leave the click to the browser.
    PassThrough,
}

impl AnchorAction {
    /// Only a fragment link whose target element exists is intercepted.
    #[must_use]
    pub fn for_click(href: &str, target_exists: bool) -> Self {
        if anchor_selector(href).is_some() && target_exists { Self::Intercept } else { Self::PassThrough }
    }
}

/// Document offset to scroll to so the target clears the fixed header.
#[must_use]
pub fn scroll_target(element_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    element_top + page_offset - header_offset
}

/// Header `box-shadow` value for a vertical scroll offset.
#[must_use]
pub fn header_shadow(scroll_y: f64, threshold: f64) -> &'static str {
    if scroll_y > threshold { HEADER_SHADOW } else { NO_SHADOW }
}

/// Coalesces bursts of scroll events into at most one pending animation
/// frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// The scheduled frame ran (or could not be scheduled).
    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self.pending
    }
}

#[cfg(feature = "hydrate")]
pub use binding::{install_anchors, install_header};

#[cfg(feature = "hydrate")]
mod binding {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Event, HtmlElement, ScrollBehavior, ScrollToOptions};

    use super::{AnchorAction, FrameGate, anchor_selector, header_shadow, scroll_target};
    use crate::config::SiteConfig;
    use crate::dom;
    use crate::error::SiteError;

    /// Intercept in-page anchor clicks whose target exists and scroll to it.
    pub fn install_anchors(config: &SiteConfig) -> Result<(), SiteError> {
        let document = dom::document()?;
        let header_offset = config.scroll.header_offset;
        for anchor in dom::query_all(&document, &config.markup.anchor_selector)? {
            let target = anchor.clone();
            dom::listen(&anchor, "click", move |event| {
                let href = target.get_attribute("href").unwrap_or_default();
                dom::report("scroll", scroll_to_anchor(&event, &href, header_offset));
            })?;
        }
        Ok(())
    }

    fn scroll_to_anchor(event: &Event, href: &str, header_offset: f64) -> Result<(), SiteError> {
        let Some(selector) = anchor_selector(href) else {
            return Ok(());
        };
        let window = dom::window()?;
        let document = dom::document()?;
        let target = match document.query_selector(selector) {
            Ok(target) => target,
            Err(_) => {
                log::debug!("anchor {selector:?} is not a valid selector");
                None
            }
        };
        let (AnchorAction::Intercept, Some(target)) = (AnchorAction::for_click(href, target.is_some()), target) else {
            return Ok(());
        };
        event.prevent_default();
        let top = scroll_target(target.get_bounding_client_rect().top(), window.page_y_offset()?, header_offset);
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }

    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// Keep the header shadow in sync with the scroll offset, writing at most
    /// once per animation frame.
    pub fn install_header(config: &SiteConfig) -> Result<(), SiteError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let Some(header) = document.get_element_by_id(&config.markup.header_id).as_ref().and_then(dom::html) else {
            log::debug!("header missing; scroll shadow disabled");
            return Ok(());
        };
        let threshold = config.scroll.shadow_threshold;
        let gate = Rc::new(Cell::new(FrameGate::default()));

        dom::listen(&window, "scroll", move |_| {
            let mut state = gate.get();
            let schedule = state.request();
            gate.set(state);
            if schedule {
                if let Err(err) = request_update(&header, &gate, threshold) {
                    log::error!("header: {err}");
                    let mut state = gate.get();
                    state.complete();
                    gate.set(state);
                }
            }
        })
    }

    fn request_update(header: &HtmlElement, gate: &Rc<Cell<FrameGate>>, threshold: f64) -> Result<(), SiteError> {
        let window = dom::window()?;
        let holder: FrameCallback = Rc::new(RefCell::new(None));
        let holder_for_cb = Rc::clone(&holder);
        let header = header.clone();
        let gate = Rc::clone(gate);
        let callback = Closure::wrap(Box::new(move |_ts: f64| {
            let mut state = gate.get();
            state.complete();
            gate.set(state);
            let applied = dom::window()
                .and_then(|w| w.scroll_y().map_err(SiteError::from))
                .and_then(|y| dom::set_style(&header, "box-shadow", header_shadow(y, threshold)));
            dom::report("header", applied);
            holder_for_cb.borrow_mut().take();
        }) as Box<dyn FnMut(f64)>);

        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        *holder.borrow_mut() = Some(callback);
        Ok(())
    }
}
