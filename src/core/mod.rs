//! Target-independent logic behind the page behaviors.
//!
//! Nothing here touches the DOM, so it is unit tested natively:
//! - [`RegistrationCheck`] - password rules for the registration form
//! - [`Visibility`] - shown/hidden flag of the user dropdown
//! - [`exit_animation`] - inline animation value for leaving alerts

mod animation;
pub mod error;
mod validation;
mod visibility;

pub use animation::exit_animation;
pub use error::BehaviorError;
pub use validation::RegistrationCheck;
pub use visibility::Visibility;
