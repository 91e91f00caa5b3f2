//! Alert auto-dismiss.
//!
//! Every alert present when the page becomes ready gets its own timer: after
//! the dismiss delay it starts the exit animation, and once the animation has
//! run it is removed from the document. Alerts closed by hand in the meantime
//! are not tracked; removing a detached element does nothing.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement};

use crate::config::{LOG_PREFIX, PageConfig, alerts::SELECTOR};
use crate::core::{BehaviorError, exit_animation};
use crate::utils::dom;

/// Schedule the dismissal of every alert on the page.
///
/// Returns the number of alerts scheduled.
pub fn schedule_dismissals(
    document: &Document,
    config: &PageConfig,
) -> Result<usize, BehaviorError> {
    let alerts = dom::query_all_html(document, SELECTOR)?;
    let animation = exit_animation(config.exit_animation_ms);
    let count = alerts.len();

    for alert in alerts {
        spawn_local(dismiss(
            alert,
            config.dismiss_delay_ms,
            config.exit_animation_ms,
            animation.clone(),
        ));
    }

    Ok(count)
}

async fn dismiss(alert: HtmlElement, delay_ms: u32, animation_ms: u32, animation: String) {
    TimeoutFuture::new(delay_ms).await;

    if let Err(e) = dom::set_style(&alert, "animation", &animation) {
        web_sys::console::warn_1(&format!("{LOG_PREFIX} alert animation failed: {e}").into());
    }

    TimeoutFuture::new(animation_ms).await;
    alert.remove();
}
