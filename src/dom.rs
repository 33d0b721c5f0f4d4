//! Thin `web-sys` helpers shared by the component bindings.
//!
//! Every helper converts `JsValue` failures into [`SiteError`] so bindings can
//! use `?`. Listener closures are leaked with `forget`: they live as long as
//! the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Node, NodeList, Window};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement, SiteError> {
    document.body().ok_or(SiteError::NoDocument)
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), SiteError> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// All elements matching `selector` under `document`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// All elements matching `selector` under `root`, in document order.
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, SiteError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Downcast to `HtmlElement`, which carries the `style` declaration.
pub fn html(element: &Element) -> Option<HtmlElement> {
    element.dyn_ref::<HtmlElement>().cloned()
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), SiteError> {
    element.class_list().toggle_with_force(class, on)?;
    Ok(())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), SiteError> {
    element.style().set_property(property, value)?;
    Ok(())
}

/// Whether the event's target sits inside `container` (inclusive).
pub fn event_within(event: &Event, container: &Element) -> bool {
    event
        .target()
        .is_some_and(|target| target.dyn_ref::<Node>().is_some_and(|node| container.contains(Some(node))))
}

/// Log a failed component operation without interrupting its caller.
pub fn report(component: &str, result: Result<(), SiteError>) {
    if let Err(err) = result {
        log::error!("{component}: {err}");
    }
}
