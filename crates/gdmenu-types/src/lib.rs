//! Foundation types for the gdmenu folder browser.
//!
//! Platform-agnostic pieces shared by every gdmenu crate: colors and the
//! draw backend trait, per-frame input controls, configuration, and the
//! error type.

pub mod backend;
pub mod color;
pub mod config;
pub mod error;
pub mod input;
