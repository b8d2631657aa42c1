//! Negotiation error types.
//!
//! Only two conditions are genuine errors for the tables themselves:
//!
//! - **Not found**: a suite or fault identifier that the registry does not define
//! - **Invalid argument**: a suite group token outside the closed set
//!
//! Everything else that looks like a failure (an unrecognized preference
//! token, an empty selection, an unmapped fault) is a normal outcome and is
//! reported as an empty list or `false`. The remaining variants cover the
//! configuration layer.

use thiserror::Error;

/// Negotiation errors.
#[derive(Error, Debug)]
pub enum NegotiationError {
    /// Suite identifier is not in the registry.
    #[error("Unknown cipher suite: 0x{0:04X}")]
    SuiteNotFound(u16),

    /// Fault identifier is not in the registry.
    #[error("Unknown fault: {0}")]
    FaultNotFound(u16),

    /// Caller supplied a value outside a closed enumeration.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error reading a config file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NegotiationError {
    /// True for the lookup-miss variants.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            NegotiationError::SuiteNotFound(_) | NegotiationError::FaultNotFound(_)
        )
    }
}

/// Result type alias for negotiation operations
pub type Result<T> = std::result::Result<T, NegotiationError>;

impl From<toml::de::Error> for NegotiationError {
    fn from(err: toml::de::Error) -> Self {
        NegotiationError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suite_not_found_display() {
        let err = NegotiationError::SuiteNotFound(0x00FF);
        assert_eq!(err.to_string(), "Unknown cipher suite: 0x00FF");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_argument_is_not_lookup_miss() {
        let err = NegotiationError::InvalidArgument("bogus".to_string());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Invalid argument: bogus");
    }

    #[test]
    fn test_toml_error_maps_to_config() {
        let err: NegotiationError = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        assert!(matches!(err, NegotiationError::Config(_)));
    }

    #[test]
    fn test_io_error_converts() {
        let err: NegotiationError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "absent").into();
        assert!(matches!(err, NegotiationError::Io(_)));
        assert!(!err.is_not_found());
    }
}
