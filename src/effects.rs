//! Decorative effects started once the page has fully loaded: fade in,
//! card hover lift, hero parallax, and the score reveal.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

/// Card pointer transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardHover {
    Enter,
    Leave,
}

impl CardHover {
    /// The card `transform` for this transition, given the configured lift.
    #[must_use]
    pub fn transform(self, lift: &str) -> &str {
        match self {
            Self::Enter => lift,
            Self::Leave => "",
        }
    }

    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::Enter => "mouseenter",
            Self::Leave => "mouseleave",
        }
    }
}

/// Hero `background-position-y` for a scroll offset.
#[must_use]
pub fn parallax_offset(scroll_y: f64, rate: f64) -> String {
    format!("{}px", scroll_y * rate)
}

#[cfg(feature = "hydrate")]
pub use binding::{install_cards, install_parallax, install_score_reveal, mark_loaded};

#[cfg(feature = "hydrate")]
mod binding {
    use std::cell::Cell;

    use js_sys::{Array, Reflect};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{CardHover, parallax_offset};
    use crate::config::SiteConfig;
    use crate::consts::{ANIMATE_CLASS, LOADED_CLASS, PAGE_FADE_TRANSITION};
    use crate::dom;
    use crate::error::SiteError;
    use crate::timing::Throttle;

    /// Fade the body in and flag it as loaded.
    pub fn mark_loaded() -> Result<(), SiteError> {
        let body = dom::body(&dom::document()?)?;
        dom::set_class(&body, LOADED_CLASS, true)?;
        dom::set_style(&body, "opacity", "1")?;
        dom::set_style(&body, "transition", PAGE_FADE_TRANSITION)
    }

    pub fn install_cards(config: &SiteConfig) -> Result<(), SiteError> {
        let document = dom::document()?;
        for card in dom::query_all(&document, &config.markup.card_selector)? {
            let Some(card) = dom::html(&card) else {
                continue;
            };
            for hover in [CardHover::Enter, CardHover::Leave] {
                let target = card.clone();
                let value = hover.transform(&config.effects.card_lift).to_owned();
                dom::listen(&card, hover.event_name(), move |_| {
                    dom::report("cards", dom::set_style(&target, "transform", &value));
                })?;
            }
        }
        Ok(())
    }

    pub fn install_parallax(config: &SiteConfig) -> Result<(), SiteError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let Some(hero) = document.query_selector(&config.markup.hero_selector)?.as_ref().and_then(dom::html) else {
            log::debug!("hero missing; parallax disabled");
            return Ok(());
        };
        let rate = config.scroll.parallax_rate;
        let throttle = Cell::new(Throttle::new(config.scroll.parallax_throttle_ms));

        dom::listen(&window, "scroll", move |_| {
            let mut gate = throttle.get();
            let pass = gate.try_pass(js_sys::Date::now());
            throttle.set(gate);
            if !pass {
                return;
            }
            let applied = dom::window()
                .and_then(|w| w.scroll_y().map_err(SiteError::from))
                .and_then(|y| dom::set_style(&hero, "background-position-y", &parallax_offset(y, rate)));
            dom::report("parallax", applied);
        })
    }

    /// Add the animate class to each score element the first time it is
    /// sufficiently visible.
    pub fn install_score_reveal(config: &SiteConfig) -> Result<(), SiteError> {
        let window = dom::window()?;
        if !Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))? {
            log::debug!("IntersectionObserver unsupported; score reveal disabled");
            return Ok(());
        }
        let document = dom::document()?;
        let scores = dom::query_all(&document, &config.markup.score_selector)?;
        if scores.is_empty() {
            return Ok(());
        }

        let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                dom::report("score", dom::set_class(&target, ANIMATE_CLASS, true));
                observer.unobserve(&target);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.effects.score_threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        callback.forget();
        for score in &scores {
            observer.observe(score);
        }
        Ok(())
    }
}
