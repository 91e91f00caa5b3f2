//! Page behaviors and their installation.
//!
//! Each behavior binds independently; a failure in one is logged and the
//! others are still installed.
//!
//! - [`alerts`] - auto-dismiss alert banners
//! - [`registration`] - password checks on the registration form
//! - [`user_menu`] - user account dropdown toggle
//! - [`styles`] - keyframes used by the alert exit animation

pub mod alerts;
pub mod registration;
pub mod styles;
pub mod user_menu;

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::Document;

use crate::config::{CONFIG_ELEMENT_ID, LOG_PREFIX, PageConfig};
use crate::core::BehaviorError;
use crate::utils::dom;
use registration::{BrowserDialog, Notifier};

/// Read the page's override block, falling back to defaults.
pub fn page_config(document: &Document) -> PageConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return PageConfig::default();
    };
    let text = element.text_content().unwrap_or_default();
    PageConfig::from_json(&text).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("{LOG_PREFIX} {e}; using defaults").into());
        PageConfig::default()
    })
}

/// Install every behavior on the current page, reading its override block
/// and showing validation messages as native dialogs.
#[wasm_bindgen]
pub fn install() {
    console_error_panic_hook::set_once();

    let result = dom::document()
        .map(|document| page_config(&document))
        .and_then(|config| install_with(config, BrowserDialog));

    if let Err(e) = result {
        log_failure("install", &e);
    }
}

/// Install every behavior on the current document.
///
/// The stylesheet is injected immediately; the behaviors bind once the
/// document is ready.
pub fn install_with<N>(config: PageConfig, notifier: N) -> Result<(), BehaviorError>
where
    N: Notifier + 'static,
{
    let document = dom::document()?;

    if let Err(e) = styles::inject_keyframes(&document) {
        log_failure("stylesheet", &e);
    }

    let doc = document.clone();
    dom::on_ready(&document, move || {
        match alerts::schedule_dismissals(&doc, &config) {
            Ok(count) => web_sys::console::debug_1(
                &format!("{LOG_PREFIX} {count} alert(s) scheduled for dismissal").into(),
            ),
            Err(e) => log_failure("alerts", &e),
        }

        match registration::bind(&doc, &config, notifier) {
            Ok(bound) => log_bound("registration form", bound),
            Err(e) => log_failure("registration form", &e),
        }

        match user_menu::bind(&doc) {
            Ok(bound) => log_bound("user menu", bound),
            Err(e) => log_failure("user menu", &e),
        }
    })
}

fn log_bound(behavior: &str, bound: bool) {
    let state = if bound { "bound" } else { "not present" };
    web_sys::console::debug_1(&format!("{LOG_PREFIX} {behavior} {state}").into());
}

fn log_failure(behavior: &str, error: &BehaviorError) {
    web_sys::console::error_1(&format!("{LOG_PREFIX} {behavior}: {error}").into());
}
