//! Error types for the portfolio page

use thiserror::Error;

/// Main error type for portfolio page setup.
///
/// Nothing at runtime surfaces an error: stale timer and observer callbacks
/// are silent no-ops. These variants only cover startup (config loading)
/// and reveal registration.
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// General I/O error (reading the config file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for `PageConfig`
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Config value out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A reveal target id was registered twice
    #[error("Reveal target already registered: {0}")]
    DuplicateReveal(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::DuplicateReveal("about-header".to_string());
        assert_eq!(
            format!("{}", err),
            "Reveal target already registered: about-header"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: PortfolioError = json_err.into();
        assert!(matches!(err, PortfolioError::ConfigParse(_)));
    }
}
