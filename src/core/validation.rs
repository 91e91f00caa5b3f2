//! Password rules for the registration form.

/// Outcome of checking one registration submit attempt.
///
/// Both rules are always evaluated; either failure blocks the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistrationCheck {
    /// Password and confirmation differ.
    pub mismatch: bool,
    /// Password is shorter than the minimum length.
    pub too_short: bool,
}

impl RegistrationCheck {
    /// Evaluate both rules.
    ///
    /// Length is counted in UTF-16 code units, the way the browser reports
    /// an input's length.
    pub fn evaluate(password: &str, confirmation: &str, min_len: usize) -> Self {
        Self {
            mismatch: password != confirmation,
            too_short: password.encode_utf16().count() < min_len,
        }
    }

    /// Whether the submission must be cancelled.
    pub fn blocks_submit(&self) -> bool {
        self.mismatch || self.too_short
    }

    /// Messages to show, mismatch first.
    pub fn messages<'a>(
        &self,
        mismatch_message: &'a str,
        too_short_message: &'a str,
    ) -> impl Iterator<Item = &'a str> {
        let mismatch = self.mismatch.then_some(mismatch_message);
        let too_short = self.too_short.then_some(too_short_message);
        mismatch.into_iter().chain(too_short)
    }
}
