//! Error types for gdmenu.

use std::io;

/// Errors produced by gdmenu collaborators and loaders.
///
/// The navigation core never fails on its own; these come from catalog
/// switching, launching, drawing, and configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("config error: {0}")]
    Config(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("launch error: {0}")]
    Launch(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("script error: {0}")]
    Script(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let e = MenuError::Config("page_size must be at least 1".into());
        assert_eq!(format!("{e}"), "config error: page_size must be at least 1");
    }

    #[test]
    fn catalog_error_display() {
        let e = MenuError::Catalog("unknown folder 9".into());
        assert_eq!(format!("{e}"), "catalog error: unknown folder 9");
    }

    #[test]
    fn launch_error_display() {
        let e = MenuError::Launch("disc tray open".into());
        assert_eq!(format!("{e}"), "launch error: disc tray open");
    }

    #[test]
    fn backend_error_display() {
        let e = MenuError::Backend("texture missing".into());
        assert_eq!(format!("{e}"), "backend error: texture missing");
    }

    #[test]
    fn script_error_display() {
        let e = MenuError::Script("unknown control 'Z'".into());
        assert_eq!(format!("{e}"), "script error: unknown control 'Z'");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: MenuError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: MenuError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: MenuError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }
}
