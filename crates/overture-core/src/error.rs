//! Error types for Overture

use thiserror::Error;

/// Main error type for Overture operations
#[derive(Error, Debug)]
pub enum IntroError {
    /// Configuration value is degenerate (zero duration, empty message list, ...)
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The sequence has already advanced; the operation is meaningless now
    #[error("Sequence already advanced")]
    AlreadyAdvanced,

    /// A referenced presentation target is absent
    #[error("Missing target: {0}")]
    MissingTarget(String),
}

/// Result type alias using IntroError
pub type IntroResult<T> = Result<T, IntroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IntroError::MissingTarget("particle-host".to_string());
        assert_eq!(format!("{}", err), "Missing target: particle-host");
    }

    #[test]
    fn test_invalid_config_display() {
        let err = IntroError::InvalidConfig("total_duration is zero".to_string());
        assert_eq!(format!("{}", err), "Invalid config: total_duration is zero");
    }
}
