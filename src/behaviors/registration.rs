//! Registration form password checks.
//!
//! Advisory only: the server still validates. A failing check cancels the
//! submit event and shows a blocking message; the user has to submit again.

use web_sys::{Document, Event, HtmlFormElement};

use crate::config::PageConfig;
use crate::config::registration::{CONFIRM_PASSWORD_ID, FORM_SELECTOR, PASSWORD_ID};
use crate::core::{BehaviorError, RegistrationCheck};
use crate::utils::dom;

/// Shows validation messages to the user.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Native blocking `window.alert` dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialog;

impl Notifier for BrowserDialog {
    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Bind the password checks to the registration form.
///
/// Returns `false` when the page has no registration form.
pub fn bind<N>(
    document: &Document,
    config: &PageConfig,
    notifier: N,
) -> Result<bool, BehaviorError>
where
    N: Notifier + 'static,
{
    let Some(form) = dom::query::<HtmlFormElement>(document, FORM_SELECTOR)? else {
        return Ok(false);
    };

    let document = document.clone();
    let config = config.clone();
    dom::listen(&form, "submit", move |event: Event| {
        let password = dom::input_value(&document, PASSWORD_ID);
        let confirmation = dom::input_value(&document, CONFIRM_PASSWORD_ID);
        let check = RegistrationCheck::evaluate(&password, &confirmation, config.min_password_len);

        if !check.blocks_submit() {
            return;
        }

        event.prevent_default();
        let too_short = config.too_short_text();
        for message in check.messages(&config.mismatch_message, &too_short) {
            notifier.notify(message);
        }
    })?;

    Ok(true)
}
