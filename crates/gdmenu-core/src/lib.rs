//! gdmenu folder browser core.
//!
//! Paginated, hierarchical title list for the console launcher menu:
//! cursor and window arithmetic, typematic input gating, folder traversal
//! with cursor restore, the popup mode machine, and the two-trigger
//! "go back" gesture. Drawing, launching, and popups are reached through
//! traits so the core has zero platform dependencies.

// Re-exports from gdmenu-types (foundation types and traits).
pub use gdmenu_types::backend;
pub use gdmenu_types::color;
pub use gdmenu_types::config;
pub use gdmenu_types::error;
pub use gdmenu_types::input;

pub mod browser;
pub mod catalog;
pub mod combo;
pub mod folders;
pub mod launch;
pub mod modal;
pub mod popup;
pub mod render;
pub mod repeat;
pub mod theme;
pub mod viewport;

#[cfg(test)]
pub(crate) mod test_utils;
