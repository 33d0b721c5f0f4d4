//! Light/dark theme preference.
//!
//! The resolved theme is stored (best effort) under a single key and mirrored
//! as a class on the `<html>` element. Without a stored preference the theme
//! follows the system `prefers-color-scheme` query, including live changes.
//!
//! TRADE-OFFS
//! ==========
//! Persistence goes through [`PreferenceStore`] so storage can be missing or
//! failing without affecting the in-page theme; the browser binding falls
//! back to [`MemoryStore`] when `localStorage` is unavailable.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme implied by the system color-scheme preference.
    #[must_use]
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(SiteError::UnknownTheme(other.to_owned())),
        }
    }
}

/// Key/value slot holding the raw persisted preference.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str) -> Result<(), SiteError>;
}

/// Non-persistent store; used in tests and when `localStorage` is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_value(value: &str) -> Self {
        Self { value: Some(value.to_owned()) }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) -> Result<(), SiteError> {
        self.value = Some(value.to_owned());
        Ok(())
    }
}

pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
    theme: Theme,
    /// Set by any user choice, even when the store failed to save it.
    explicit: bool,
}

impl ThemeController {
    /// Resolve the initial theme: stored preference, then system, then light.
    pub fn new(store: Box<dyn PreferenceStore>, system_prefers_dark: bool) -> Self {
        let stored = stored_theme(store.as_ref());
        let theme = stored.unwrap_or_else(|| Theme::from_system(system_prefers_dark));
        Self { store, theme, explicit: stored.is_some() }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the user has explicitly chosen a theme.
    #[must_use]
    pub fn has_explicit_preference(&self) -> bool {
        self.explicit
    }

    /// Apply and persist `theme`. A failed save only costs persistence.
    pub fn set(&mut self, theme: Theme) -> Theme {
        self.theme = theme;
        self.explicit = true;
        if let Err(err) = self.store.save(theme.as_str()) {
            log::warn!("theme preference not persisted: {err}");
        }
        theme
    }

    /// Set from an untrusted name; anything but `light`/`dark` is ignored.
    pub fn set_named(&mut self, name: &str) -> Option<Theme> {
        match name.parse::<Theme>() {
            Ok(theme) => Some(self.set(theme)),
            Err(err) => {
                log::debug!("set theme ignored: {err}");
                None
            }
        }
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled())
    }

    /// Follow a system preference change unless the user chose explicitly.
    ///
    /// Returns the theme to apply, or `None` when the change is ignored.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.has_explicit_preference() {
            return None;
        }
        self.theme = Theme::from_system(prefers_dark);
        Some(self.theme)
    }
}

fn stored_theme(store: &dyn PreferenceStore) -> Option<Theme> {
    let raw = store.load()?;
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(err) => {
            log::debug!("ignoring stored theme: {err}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
pub use binding::{ThemeHandle, install};

#[cfg(feature = "hydrate")]
mod binding {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlElement, MediaQueryListEvent, Storage};

    use super::{MemoryStore, PreferenceStore, Theme, ThemeController};
    use crate::config::SiteConfig;
    use crate::consts::{DARK_SCHEME_QUERY, THEME_TRANSITION};
    use crate::dom;
    use crate::error::SiteError;

    struct LocalStore {
        storage: Storage,
        key: String,
    }

    impl PreferenceStore for LocalStore {
        fn load(&self) -> Option<String> {
            self.storage.get_item(&self.key).unwrap_or_default()
        }

        fn save(&mut self, value: &str) -> Result<(), SiteError> {
            self.storage.set_item(&self.key, value)?;
            Ok(())
        }
    }

    /// Shared handle to the page's theme, driven by the toggle button, the
    /// system preference listener, and the public API.
    #[derive(Clone)]
    pub struct ThemeHandle {
        controller: Rc<RefCell<ThemeController>>,
        root: Element,
        body: Option<HtmlElement>,
        transition_ms: u32,
    }

    impl ThemeHandle {
        pub fn toggle(&self) {
            let theme = self.controller.borrow_mut().toggle();
            dom::report("theme", self.apply(theme));
            dom::report("theme", self.flash_transition());
        }

        pub fn set_named(&self, name: &str) {
            let applied = self.controller.borrow_mut().set_named(name);
            if let Some(theme) = applied {
                dom::report("theme", self.apply(theme));
            }
        }

        fn apply(&self, theme: Theme) -> Result<(), SiteError> {
            dom::set_class(&self.root, theme.toggled().as_str(), false)?;
            dom::set_class(&self.root, theme.as_str(), true)?;
            log::debug!("theme applied: {theme}");
            Ok(())
        }

        fn flash_transition(&self) -> Result<(), SiteError> {
            let Some(body) = self.body.clone() else {
                return Ok(());
            };
            dom::set_style(&body, "transition", THEME_TRANSITION)?;
            Timeout::new(self.transition_ms, move || {
                dom::report("theme", dom::set_style(&body, "transition", ""));
            })
            .forget();
            Ok(())
        }
    }

    /// Resolve and apply the initial theme, then wire the toggle button and
    /// the system preference listener.
    pub fn install(config: &SiteConfig) -> Result<ThemeHandle, SiteError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let root = document.document_element().ok_or(SiteError::NoDocument)?;

        let store: Box<dyn PreferenceStore> = match window.local_storage() {
            Ok(Some(storage)) => Box::new(LocalStore { storage, key: config.theme.storage_key.clone() }),
            _ => {
                log::warn!("localStorage unavailable; theme preference will not persist");
                Box::new(MemoryStore::default())
            }
        };
        let media = window.match_media(DARK_SCHEME_QUERY).unwrap_or_default();
        let system_dark = media.as_ref().is_some_and(web_sys::MediaQueryList::matches);

        let handle = ThemeHandle {
            controller: Rc::new(RefCell::new(ThemeController::new(store, system_dark))),
            root,
            body: document.body(),
            transition_ms: config.theme.transition_ms,
        };
        let initial = handle.controller.borrow().theme();
        handle.apply(initial)?;

        if let Some(toggle) = document.get_element_by_id(&config.markup.theme_toggle_id) {
            let on_click = handle.clone();
            dom::listen(&toggle, "click", move |_| on_click.toggle())?;
        } else {
            log::debug!("theme toggle missing; button disabled");
        }

        if let Some(media) = media {
            let on_change = handle.clone();
            dom::listen(&media, "change", move |event| {
                let Some(event) = event.dyn_ref::<MediaQueryListEvent>() else {
                    return;
                };
                let next = on_change.controller.borrow_mut().system_changed(event.matches());
                if let Some(theme) = next {
                    dom::report("theme", on_change.apply(theme));
                }
            })?;
        }

        Ok(handle)
    }
}
