//! Page behavior configuration.
//!
//! Centralizes the selectors, delays, messages and stylesheet used by the
//! behaviors. The tunable subset is exposed through [`PageConfig`], which a
//! page may override with a JSON block.

use serde::Deserialize;

use crate::core::error::BehaviorError;

// =============================================================================
// Logging
// =============================================================================

/// Prefix for every console message emitted by this crate.
pub const LOG_PREFIX: &str = "[aula-ui]";

// =============================================================================
// Alert Configuration
// =============================================================================

/// Alert banners and their exit animation.
pub mod alerts {
    /// Selector matching every dismissible alert banner.
    pub const SELECTOR: &str = ".alert";
    /// Delay before an alert starts leaving (milliseconds).
    pub const DISMISS_DELAY_MS: u32 = 5000;
    /// Duration of the exit animation (milliseconds).
    pub const EXIT_ANIMATION_MS: u32 = 300;
    /// Keyframes name used for the exit animation.
    pub const EXIT_ANIMATION_NAME: &str = "slideOutRight";
    /// Timing function of the exit animation.
    pub const EXIT_ANIMATION_EASING: &str = "ease";
}

// =============================================================================
// Stylesheet
// =============================================================================

/// Id of the injected `<style>` element.
pub const STYLE_ELEMENT_ID: &str = "aula-ui-keyframes";

/// Keyframes injected into `<head>` at load time.
pub const KEYFRAMES_CSS: &str = "
    @keyframes slideOutRight {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(100%); opacity: 0; }
    }
";

// =============================================================================
// Registration Form
// =============================================================================

/// Registration form selectors and password rules.
pub mod registration {
    /// Selector for the registration form (matched on its action URL).
    pub const FORM_SELECTOR: &str = r#"form[action*="registro"]"#;
    /// Id of the password input.
    pub const PASSWORD_ID: &str = "password";
    /// Id of the confirmation input.
    pub const CONFIRM_PASSWORD_ID: &str = "confirmar_password";
    /// Minimum password length, in UTF-16 code units.
    pub const MIN_PASSWORD_LEN: usize = 6;
    /// Shown when the confirmation differs from the password.
    pub const MISMATCH_MESSAGE: &str = "Las contraseñas no coinciden";
    /// Shown when the password is too short. `{min}` becomes the minimum length.
    pub const TOO_SHORT_MESSAGE: &str = "La contraseña debe tener al menos {min} caracteres";
    /// Placeholder in the too-short message.
    pub const MIN_PLACEHOLDER: &str = "{min}";
}

// =============================================================================
// User Menu
// =============================================================================

/// User account menu selectors.
pub mod user_menu {
    /// Trigger that opens and closes the dropdown.
    pub const BUTTON_SELECTOR: &str = ".user-button";
    /// Dropdown panel with the account links.
    pub const DROPDOWN_SELECTOR: &str = ".user-dropdown";
}

// =============================================================================
// Runtime Overrides
// =============================================================================

/// Id of the optional `<script type="application/json">` override block.
pub const CONFIG_ELEMENT_ID: &str = "aula-ui-config";

/// Tunable settings, read once when the behaviors are installed.
///
/// Every field falls back to its compile-time default, so a page only needs
/// to name the values it changes:
///
/// ```html
/// <script type="application/json" id="aula-ui-config">
///   { "dismiss_delay_ms": 8000 }
/// </script>
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub dismiss_delay_ms: u32,
    pub exit_animation_ms: u32,
    pub min_password_len: usize,
    pub mismatch_message: String,
    pub too_short_message: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            dismiss_delay_ms: alerts::DISMISS_DELAY_MS,
            exit_animation_ms: alerts::EXIT_ANIMATION_MS,
            min_password_len: registration::MIN_PASSWORD_LEN,
            mismatch_message: registration::MISMATCH_MESSAGE.to_string(),
            too_short_message: registration::TOO_SHORT_MESSAGE.to_string(),
        }
    }
}

impl PageConfig {
    /// Parse an override block. Blank input yields the defaults.
    pub fn from_json(text: &str) -> Result<Self, BehaviorError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(text).map_err(|e| BehaviorError::Config(e.to_string()))
    }

    /// Too-short message with the configured minimum filled in.
    pub fn too_short_text(&self) -> String {
        self.too_short_message
            .replace(registration::MIN_PLACEHOLDER, &self.min_password_len.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PageConfig::default();
        assert_eq!(config.dismiss_delay_ms, 5000);
        assert_eq!(config.exit_animation_ms, 300);
        assert_eq!(config.min_password_len, 6);
        assert_eq!(config.mismatch_message, "Las contraseñas no coinciden");
        assert_eq!(
            config.too_short_text(),
            "La contraseña debe tener al menos 6 caracteres"
        );
    }

    #[test]
    fn test_too_short_text_follows_min_len() {
        let config = PageConfig::from_json(r#"{ "min_password_len": 8 }"#).unwrap();
        assert_eq!(
            config.too_short_text(),
            "La contraseña debe tener al menos 8 caracteres"
        );
    }

    #[test]
    fn test_custom_too_short_message() {
        let config = PageConfig::from_json(
            r#"{ "min_password_len": 10, "too_short_message": "Mínimo {min}" }"#,
        )
        .unwrap();
        assert_eq!(config.too_short_text(), "Mínimo 10");

        let fixed = PageConfig::from_json(r#"{ "too_short_message": "Muy corta" }"#).unwrap();
        assert_eq!(fixed.too_short_text(), "Muy corta");
    }

    #[test]
    fn test_partial_override() {
        let config = PageConfig::from_json(r#"{ "dismiss_delay_ms": 8000 }"#).unwrap();
        assert_eq!(config.dismiss_delay_ms, 8000);
        assert_eq!(config.exit_animation_ms, alerts::EXIT_ANIMATION_MS);
        assert_eq!(config.too_short_message, registration::TOO_SHORT_MESSAGE);
        assert_eq!(config.min_password_len, registration::MIN_PASSWORD_LEN);
    }

    #[test]
    fn test_blank_is_default() {
        assert_eq!(PageConfig::from_json("  \n").unwrap(), PageConfig::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = PageConfig::from_json("{ dismiss_delay_ms: ").unwrap_err();
        assert!(matches!(err, BehaviorError::Config(_)));
    }

    #[test]
    fn test_wrong_type_rejected() {
        assert!(PageConfig::from_json(r#"{ "min_password_len": "six" }"#).is_err());
    }
}
