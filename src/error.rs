//! Error types for event data processing.
//!
//! All errors implement the `std::error::Error` trait and carry structured
//! context. The fallible surface of this crate is small by design:
//!
//! - **File Errors**: reading or writing the settings file
//! - **Parse Errors**: event data or settings deserialization failures
//! - **Store Errors**: failures raised by custom [`SettingsStore`] backends
//!
//! Ranking and time formatting never error; malformed values fall back to
//! documented sentinels instead (see [`crate::standings`] and
//! [`crate::race_time`]).
//!
//! [`SettingsStore`]: crate::settings::SettingsStore
//!
//! ## Helper Constructors
//!
//! ```rust
//! use flightline::EventError;
//! use std::path::PathBuf;
//!
//! let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
//! let file_error = EventError::file_error(PathBuf::from("/path/to/settings.yaml"), io_err);
//!
//! let parse_error = EventError::parse_error("RaceDetail deserialization", "missing field `ID`");
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for event data operations.
pub type Result<T, E = EventError> = std::result::Result<T, E>;

/// Main error type for event data operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EventError {
    #[error("Settings file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("Settings store error: {reason}")]
    Store {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl EventError {
    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        EventError::File { path, source }
    }

    /// Helper constructor for parse errors.
    pub fn parse_error(context: impl Into<String>, details: impl Into<String>) -> Self {
        EventError::Parse { context: context.into(), details: details.into() }
    }

    /// Helper constructor for store errors.
    pub fn store_error(reason: impl Into<String>) -> Self {
        EventError::Store { reason: reason.into(), source: None }
    }

    /// Helper constructor for store errors with source.
    pub fn store_error_with_source(
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        EventError::Store { reason: reason.into(), source: Some(source) }
    }
}

impl From<std::io::Error> for EventError {
    fn from(err: std::io::Error) -> Self {
        EventError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn error_conversions_work_for_all_generated_variants(reason in ".*") {
                // Test From<std::io::Error> conversion
                let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, reason.clone());
                let converted: EventError = io_err.into();
                match converted {
                    EventError::File { source, .. } => {
                        prop_assert_eq!(source.to_string(), reason.clone());
                    }
                    _ => prop_assert!(false, "Expected File error from io::Error conversion"),
                }

                let store_err = EventError::store_error(reason.clone());
                prop_assert!(!store_err.to_string().is_empty());
            }

            #[test]
            fn error_messages_format_correctly_with_arbitrary_context(
                context in "\\w+",
                details in ".*",
                reason in ".*"
            ) {
                // Property: Error messages contain their context
                let parse_error = EventError::parse_error(context.clone(), details.clone());
                let parse_msg = parse_error.to_string();
                prop_assert!(parse_msg.contains(&context));
                prop_assert!(parse_msg.contains(&details));

                let store_error = EventError::store_error(reason.clone());
                prop_assert!(store_error.to_string().contains(&reason));
            }

            #[test]
            fn error_source_chaining_preserves_information(base_message in ".*") {
                let base: Box<dyn std::error::Error + Send + Sync> =
                    Box::new(std::io::Error::other(base_message.clone()));
                let top = EventError::store_error_with_source("settings backend", base);

                let source = std::error::Error::source(&top);
                prop_assert!(source.is_some());
                prop_assert!(source.unwrap().to_string().contains(&base_message));
            }
        }
    }

    #[test]
    fn error_constructors_validation() {
        let file_error = EventError::file_error(
            PathBuf::from("/test"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "test"),
        );
        assert!(matches!(file_error, EventError::File { .. }));

        let parse_error = EventError::parse_error("test", "details");
        assert!(matches!(parse_error, EventError::Parse { .. }));

        let store_error = EventError::store_error("test");
        assert!(matches!(store_error, EventError::Store { .. }));
    }

    #[test]
    fn error_traits_validation() {
        // Compile-time check: EventError must be Send + Sync + 'static
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<EventError>();

        let error = EventError::store_error("test");
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn from_conversions_work() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test file");
        let event_err: EventError = io_err.into();

        match event_err {
            EventError::File { source, .. } => {
                assert_eq!(source.to_string(), "test file");
            }
            _ => panic!("Expected File error variant"),
        }
    }
}
