//! Custom error types for `geoinfo` report generation.
//!
//! Report generation recovers locally from malformed features and missing
//! collaborator data, so these errors only cover caller misuse and failures
//! coming back from collaborators.

use geoinfo_common::TopologyError;
use thiserror::Error;

/// Main error type for report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Topology could not be resolved
    #[error(transparent)]
    Topology(#[from] TopologyError),

    /// Report options are invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An explicit record index is past the end of the table
    #[error("Record {index} is out of range (table has {count} records)")]
    RecordOutOfRange {
        /// The requested index
        index: usize,
        /// Number of records in the table
        count: usize,
    },

    /// Failure reported by a collaborator, passed through unchanged
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Configuration errors.
///
/// These errors occur when report options are invalid.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid option value
    #[error("Invalid {option} option: {message}")]
    InvalidOption {
        /// The option name
        option: String,
        /// Why it's invalid
        message: String,
    },
}

/// Type alias for Results using `ReportError`.
pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    /// Get a user-friendly error message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Topology(e) => format!("Geometry error: {e}"),
            Self::Config(e) => format!("Configuration error: {e}"),
            Self::RecordOutOfRange { index, count } => {
                format!("Cannot show record {index}: the table only has {count} records.")
            },
            Self::Other(e) => format!("Error: {e}"),
        }
    }

    /// Get recovery suggestions if available.
    #[must_use]
    pub fn recovery_suggestion(&self) -> Option<String> {
        match self {
            Self::Topology(TopologyError::MissingTopology) => {
                Some("Attach the dataset's arc collection before summarizing.".to_string())
            },
            Self::RecordOutOfRange { count, .. } if *count > 0 => Some(format!(
                "Choose a record index between 0 and {}.",
                count - 1
            )),
            Self::Config(_) => {
                Some("Check the report options and try again.".to_string())
            },
            _ => None,
        }
    }

    /// Check if this error is potentially recoverable.
    ///
    /// Recoverable errors can be fixed by retrying with different options.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Config(_) | Self::RecordOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_out_of_range_message() {
        let err = ReportError::RecordOutOfRange { index: 5, count: 3 };
        assert_eq!(err.to_string(), "Record 5 is out of range (table has 3 records)");
        assert_eq!(
            err.recovery_suggestion().as_deref(),
            Some("Choose a record index between 0 and 2.")
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_record_out_of_range_on_empty_table_has_no_suggestion() {
        let err = ReportError::RecordOutOfRange { index: 0, count: 0 };
        assert!(err.recovery_suggestion().is_none());
    }

    #[test]
    fn test_topology_error_is_transparent() {
        let err = ReportError::from(TopologyError::MissingTopology);
        assert_eq!(
            err.to_string(),
            "Shape references arcs but the dataset has no arc topology"
        );
        assert!(err.user_message().starts_with("Geometry error: "));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_config_error_message() {
        let err = ReportError::from(ConfigError::InvalidOption {
            option: "target_marker".to_string(),
            message: "must not contain line breaks".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Invalid target_marker option: must not contain line breaks"
        );
        assert_eq!(
            err.user_message(),
            "Configuration error: Invalid target_marker option: must not contain line breaks"
        );
    }

    #[test]
    fn test_other_error_passes_through() {
        let err = ReportError::from(anyhow::anyhow!("table backend unavailable"));
        assert_eq!(err.to_string(), "table backend unavailable");
        assert!(err.recovery_suggestion().is_none());
    }
}
