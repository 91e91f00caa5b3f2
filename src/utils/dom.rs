//! DOM and Web API utility functions.
//!
//! Provides typed, fallible access to the browser APIs the behaviors use.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{
    Document, Event, EventTarget, HtmlElement, HtmlInputElement, Window,
};

use crate::core::BehaviorError;

/// Get the browser window object.
#[inline]
pub fn window() -> Result<Window, BehaviorError> {
    web_sys::window().ok_or(BehaviorError::NoWindow)
}

/// Get the current document.
#[inline]
pub fn document() -> Result<Document, BehaviorError> {
    window()?.document().ok_or(BehaviorError::NoDocument)
}

/// First element matching `selector`, cast to `T`.
///
/// Returns `Ok(None)` when nothing matches or the match is not a `T`.
pub fn query<T: JsCast>(
    document: &Document,
    selector: &str,
) -> Result<Option<T>, BehaviorError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|element| element.dyn_into::<T>().ok()))
}

/// Every `HtmlElement` matching `selector`, in document order.
pub fn query_all_html(
    document: &Document,
    selector: &str,
) -> Result<Vec<HtmlElement>, BehaviorError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Current value of the input with the given id, or empty if it is missing.
pub fn input_value(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Inline `display` value of an element (empty when unset).
pub fn display_of(element: &HtmlElement) -> String {
    element
        .style()
        .get_property_value("display")
        .unwrap_or_default()
}

/// Set an inline style property.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), BehaviorError> {
    element.style().set_property(property, value)?;
    Ok(())
}

/// Attach an event listener that lives for the rest of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), BehaviorError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners are never removed
    closure.forget();
    Ok(())
}

/// Run `f` once the document has been parsed.
///
/// Runs immediately if parsing already finished, otherwise on
/// `DOMContentLoaded`.
pub fn on_ready<F>(document: &Document, f: F) -> Result<(), BehaviorError>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let mut f = Some(f);
    listen(document, "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    })
}
