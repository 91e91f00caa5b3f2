//! Visibility flag for toggled panels.
//!
//! The flag has no storage of its own: it is read from and written back to
//! the element's inline `display` style every time.

/// Inline `display` value of a shown panel.
pub const DISPLAY_SHOWN: &str = "block";
/// Inline `display` value of a hidden panel.
pub const DISPLAY_HIDDEN: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    /// Only an explicit `block` counts as shown; an unset style is hidden.
    pub fn from_display(display: &str) -> Self {
        if display.trim() == DISPLAY_SHOWN {
            Self::Shown
        } else {
            Self::Hidden
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Shown => Self::Hidden,
            Self::Hidden => Self::Shown,
        }
    }

    pub fn as_display(self) -> &'static str {
        match self {
            Self::Shown => DISPLAY_SHOWN,
            Self::Hidden => DISPLAY_HIDDEN,
        }
    }
}
