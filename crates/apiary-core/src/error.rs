//! Error types for apiary-core

use thiserror::Error;

/// Result type alias for apiary-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in apiary-core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// One or more required parameters were absent from the arguments.
    #[error("{}", describe_missing(.missing))]
    MissingParameters {
        /// Names of the missing parameters, in declaration order.
        missing: Vec<String>,
    },

    /// A parameter value cannot be placed in its path segment.
    #[error("Invalid value for parameter {name}: {reason}")]
    InvalidParameter {
        /// The offending parameter.
        name: String,
        /// What is wrong with the value.
        reason: String,
    },

    /// Two descriptors in one registry share a name.
    #[error("Duplicate endpoint name: {name}")]
    DuplicateEndpoint {
        /// The repeated endpoint name.
        name: String,
    },
}

impl Error {
    /// Creates a missing-parameters error from a list of names.
    pub fn missing<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Error::MissingParameters {
            missing: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an invalid-parameter error.
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if the caller's arguments caused this error.
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            Error::MissingParameters { .. } | Error::InvalidParameter { .. }
        )
    }
}

fn describe_missing(missing: &[String]) -> String {
    match missing {
        [single] => format!("Missing required parameter: {single}"),
        many => format!("Missing required parameters: {}", many.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_missing_display() {
        let err = Error::missing(["code"]);
        assert_eq!(err.to_string(), "Missing required parameter: code");
        assert!(err.is_parameter_error());
    }

    #[test]
    fn test_multiple_missing_display() {
        let err = Error::missing(["id", "code"]);
        assert_eq!(err.to_string(), "Missing required parameters: id, code");
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = Error::invalid("id", "dot segments are not allowed");
        assert_eq!(
            err.to_string(),
            "Invalid value for parameter id: dot segments are not allowed"
        );
        assert!(err.is_parameter_error());
    }

    #[test]
    fn test_duplicate_endpoint_display() {
        let err = Error::DuplicateEndpoint {
            name: "httpbin_uuid".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate endpoint name: httpbin_uuid");
        assert!(!err.is_parameter_error());
    }

    #[test]
    fn test_error_implements_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
