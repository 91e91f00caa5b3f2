//! Stylesheet injection.

use web_sys::Document;

use crate::config::{KEYFRAMES_CSS, STYLE_ELEMENT_ID};
use crate::core::BehaviorError;

/// Append the exit-animation keyframes to `<head>`.
///
/// Returns `false` if a previous call already injected them.
pub fn inject_keyframes(document: &Document) -> Result<bool, BehaviorError> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(false);
    }
    let head = document.head().ok_or(BehaviorError::NoHead)?;
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(KEYFRAMES_CSS));
    head.append_child(&style)?;
    Ok(true)
}
