//! Exit animation applied to alerts before removal.

use crate::config::alerts::{EXIT_ANIMATION_EASING, EXIT_ANIMATION_NAME};

/// Value for the inline `animation` property, e.g. `slideOutRight 0.3s ease`.
pub fn exit_animation(duration_ms: u32) -> String {
    format!(
        "{} {}s {}",
        EXIT_ANIMATION_NAME,
        format_seconds(duration_ms),
        EXIT_ANIMATION_EASING
    )
}

/// Milliseconds as CSS seconds without trailing zeros (300 -> "0.3").
fn format_seconds(ms: u32) -> String {
    let secs = format!("{}.{:03}", ms / 1000, ms % 1000);
    secs.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_exit_animation() {
        assert_eq!(exit_animation(300), "slideOutRight 0.3s ease");
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0), "0");
        assert_eq!(format_seconds(1000), "1");
        assert_eq!(format_seconds(1250), "1.25");
        assert_eq!(format_seconds(5), "0.005");
    }
}
