//! Public page API: `window.<namespace>.setTheme(value)` and
//! `window.<namespace>.toggleTheme()`.

use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::config::SiteConfig;
use crate::dom;
use crate::error::SiteError;
use crate::theme::ThemeHandle;

/// Attach the API object to `window`. Both functions drive the same theme
/// handle as the toggle button.
pub fn install(config: &SiteConfig, theme: ThemeHandle) -> Result<(), SiteError> {
    let api = Object::new();

    let for_set = theme.clone();
    let set_theme = Closure::wrap(Box::new(move |value: JsValue| match value.as_string() {
        Some(name) => for_set.set_named(&name),
        None => log::debug!("setTheme ignored non-string value"),
    }) as Box<dyn FnMut(JsValue)>);
    Reflect::set(&api, &JsValue::from_str("setTheme"), set_theme.as_ref())?;
    set_theme.forget();

    let toggle_theme = Closure::wrap(Box::new(move || theme.toggle()) as Box<dyn FnMut()>);
    Reflect::set(&api, &JsValue::from_str("toggleTheme"), toggle_theme.as_ref())?;
    toggle_theme.forget();

    Reflect::set(&dom::window()?.into(), &JsValue::from_str(&config.namespace), &api)?;
    log::debug!("page api exposed as window.{}", config.namespace);
    Ok(())
}
