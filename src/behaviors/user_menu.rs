//! User account dropdown.
//!
//! The trigger toggles the dropdown and stops the click from bubbling; any
//! click that does reach the document closes it. The dropdown is looked up on
//! every click and its inline `display` is the only state.

use web_sys::{Document, Element, HtmlElement};

use crate::config::LOG_PREFIX;
use crate::config::user_menu::{BUTTON_SELECTOR, DROPDOWN_SELECTOR};
use crate::core::{BehaviorError, Visibility};
use crate::utils::dom;

/// Bind the trigger and the document-wide close handler.
///
/// Returns `false` (and binds nothing) when the page has no user button.
pub fn bind(document: &Document) -> Result<bool, BehaviorError> {
    let Some(button) = dom::query::<Element>(document, BUTTON_SELECTOR)? else {
        return Ok(false);
    };

    let doc = document.clone();
    dom::listen(&button, "click", move |event| {
        event.stop_propagation();
        if let Err(e) = toggle_dropdown(&doc) {
            web_sys::console::warn_1(&format!("{LOG_PREFIX} dropdown toggle failed: {e}").into());
        }
    })?;

    let doc = document.clone();
    dom::listen(document, "click", move |_| {
        if let Err(e) = hide_dropdown(&doc) {
            web_sys::console::warn_1(&format!("{LOG_PREFIX} dropdown close failed: {e}").into());
        }
    })?;

    Ok(true)
}

/// Flip the dropdown between shown and hidden.
///
/// Returns the new visibility, or `None` if there is no dropdown.
pub fn toggle_dropdown(document: &Document) -> Result<Option<Visibility>, BehaviorError> {
    let Some(dropdown) = dom::query::<HtmlElement>(document, DROPDOWN_SELECTOR)? else {
        return Ok(None);
    };
    let next = Visibility::from_display(&dom::display_of(&dropdown)).toggled();
    dom::set_style(&dropdown, "display", next.as_display())?;
    Ok(Some(next))
}

/// Hide the dropdown if there is one.
pub fn hide_dropdown(document: &Document) -> Result<(), BehaviorError> {
    if let Some(dropdown) = dom::query::<HtmlElement>(document, DROPDOWN_SELECTOR)? {
        dom::set_style(&dropdown, "display", Visibility::Hidden.as_display())?;
    }
    Ok(())
}
