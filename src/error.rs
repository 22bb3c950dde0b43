//! Error types for the rent proration service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the calculator and the configuration loader can raise.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the rent proration service.
///
/// The calculator only ever returns [`EngineError::InvalidMonthFormat`] or
/// [`EngineError::InvalidDateRange`]; the remaining variants come from
/// loading server configuration at startup.
///
/// # Example
///
/// ```
/// use rent_proration::error::EngineError;
///
/// let error = EngineError::InvalidMonthFormat {
///     value: "2024-13".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid month format '2024-13': use YYYY-MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The target month could not be parsed as `YYYY-MM` or is out of range.
    #[error("Invalid month format '{value}': use YYYY-MM")]
    InvalidMonthFormat {
        /// The rejected month string.
        value: String,
    },

    /// The occupancy start date falls after its end date.
    #[error("Start date {start_date} must not be after end date {end_date}")]
    InvalidDateRange {
        /// The occupancy start date.
        start_date: NaiveDate,
        /// The occupancy end date.
        end_date: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value (usually from the environment) was unusable.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidConfigValue {
        /// The configuration key or environment variable.
        key: String,
        /// A description of what was wrong with the value.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_month_format_displays_value() {
        let error = EngineError::InvalidMonthFormat {
            value: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid month format 'abc': use YYYY-MM");
    }

    #[test]
    fn test_invalid_date_range_displays_both_dates() {
        let error = EngineError::InvalidDateRange {
            start_date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Start date 2024-02-10 must not be after end date 2024-02-01"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/server.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/server.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_value_displays_key_and_message() {
        let error = EngineError::InvalidConfigValue {
            key: "PORT".to_string(),
            message: "not a port number".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value for 'PORT': not a port number"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_month() -> EngineResult<()> {
            Err(EngineError::InvalidMonthFormat {
                value: "2024-00".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_month()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(EngineError::InvalidMonthFormat { .. })
        ));
    }
}
