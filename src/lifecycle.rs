//! Page lifecycle: when each group of components is installed.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM module may start before or after `DOMContentLoaded` and `load`
//! have fired. A phase the document has already reached runs immediately;
//! otherwise it waits for its event. Component install failures are logged
//! and never stop the remaining components.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

/// `document.readyState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// DOM parsed; interactive components are wired.
    Ready,
    /// All resources loaded; decorative effects start.
    Load,
}

impl Phase {
    /// Event that signals this phase.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Ready => "DOMContentLoaded",
            Self::Load => "load",
        }
    }
}

impl ReadyState {
    /// Whether `phase`'s event has already fired.
    #[must_use]
    pub fn has_reached(self, phase: Phase) -> bool {
        match phase {
            Phase::Ready => self != Self::Loading,
            Phase::Load => self == Self::Complete,
        }
    }
}

#[cfg(feature = "hydrate")]
pub use binding::start;

#[cfg(feature = "hydrate")]
mod binding {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::wasm_bindgen;
    use web_sys::{ErrorEvent, EventTarget};

    use super::{Phase, ReadyState};
    use crate::config::{self, SiteConfig};
    use crate::error::SiteError;
    use crate::{accordion, api, clipboard, dom, effects, menu, scroll, tabs, theme, typewriter};

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();

        let loaded = dom::document().and_then(|document| config::load_from_document(&document));
        let (config, config_error) = match loaded {
            Ok(config) => (config, None),
            Err(err) => (SiteConfig::default(), Some(err)),
        };
        if let Err(err) = console_log::init_with_level(config.log_level()) {
            log::warn!("console logger not installed: {err}");
        }
        if let Some(err) = config_error {
            log::warn!("using default site config: {err}");
        }

        dom::report("errors", install_error_logger());

        let config = Rc::new(config);
        let ready_config = Rc::clone(&config);
        dom::report("lifecycle", on_phase(Phase::Ready, move || ready(&ready_config)));
        dom::report("lifecycle", on_phase(Phase::Load, move || load(&config)));
    }

    fn ready(config: &SiteConfig) {
        match theme::install(config) {
            Ok(handle) => dom::report("api", api::install(config, handle)),
            Err(err) => log::error!("theme: {err}"),
        }
        dom::report("menu", menu::install(config));
        dom::report("tabs", tabs::install(config));
        dom::report("copy", clipboard::install(config));
        dom::report("scroll", scroll::install_anchors(config));
        dom::report("header", scroll::install_header(config));
        dom::report("faq", accordion::install(config));
        log::debug!("ready phase installed");
    }

    fn load(config: &SiteConfig) {
        dom::report("page", effects::mark_loaded());
        dom::report("parallax", effects::install_parallax(config));
        dom::report("cards", effects::install_cards(config));
        dom::report("score", effects::install_score_reveal(config));
        dom::report("typewriter", typewriter::start(config));
        log::debug!("load phase installed");
    }

    fn ready_state() -> Result<ReadyState, SiteError> {
        Ok(match dom::document()?.ready_state().as_str() {
            "interactive" => ReadyState::Interactive,
            "complete" => ReadyState::Complete,
            _ => ReadyState::Loading,
        })
    }

    /// Run `run` once `phase` has been reached.
    fn on_phase(phase: Phase, run: impl FnOnce() + 'static) -> Result<(), SiteError> {
        if ready_state()?.has_reached(phase) {
            run();
            return Ok(());
        }
        let target: EventTarget = match phase {
            Phase::Ready => dom::document()?.into(),
            Phase::Load => dom::window()?.into(),
        };
        let mut pending = Some(run);
        dom::listen(&target, phase.event_name(), move |_| {
            if let Some(run) = pending.take() {
                run();
            }
        })
    }

    /// Route uncaught page errors to the log; other components keep running.
    fn install_error_logger() -> Result<(), SiteError> {
        dom::listen(&dom::window()?.into(), "error", |event| {
            let message = event.dyn_ref::<ErrorEvent>().map(ErrorEvent::message).unwrap_or_default();
            log::error!("page error: {message}");
        })
    }
}
