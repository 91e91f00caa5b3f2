//! Client-side behaviors for the course site's server-rendered pages.
//!
//! Loaded as a WebAssembly module, [`install`] wires up:
//! - auto-dismissing alert banners
//! - password confirmation checks on the registration form
//! - the user account dropdown
//!
//! Pure logic lives in [`core`] and is testable off the browser; the DOM
//! wiring lives in [`behaviors`].

pub mod behaviors;
pub mod config;
pub mod core;
pub mod utils;

pub use behaviors::{install, install_with};
