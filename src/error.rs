use std::fmt;

use thiserror::Error;

use crate::core::provider::ChangeAction;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No hosted zone matches {0}")]
    ZoneNotFound(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Registrar error ({context}): {source}")]
    Registrar {
        context: String,
        #[source]
        source: BoxError,
    },

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Batch(#[from] BatchError),
}

impl Error {
    pub fn registrar(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Error::Registrar {
            context: context.into(),
            source: source.into(),
        }
    }
}

/// A single entry of a change batch that could not be applied.
#[derive(Debug)]
pub struct ChangeFailure {
    pub action: ChangeAction,
    /// `name (TYPE)` of the endpoint that failed.
    pub endpoint: String,
    pub error: Error,
}

impl fmt::Display for ChangeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.action, self.endpoint, self.error)
    }
}

/// Aggregate of every failed entry in one apply pass.
#[derive(Debug)]
pub struct BatchError {
    pub attempted: usize,
    pub failures: Vec<ChangeFailure>,
}

impl std::error::Error for BatchError {}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} changes failed",
            self.failures.len(),
            self.attempted
        )?;
        for (i, failure) in self.failures.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{failure}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_error_display_lists_failures() {
        let err = Error::from(BatchError {
            attempted: 3,
            failures: vec![
                ChangeFailure {
                    action: ChangeAction::Create,
                    endpoint: "new.example.com (A)".into(),
                    error: Error::ZoneNotFound("new.example.com".into()),
                },
                ChangeFailure {
                    action: ChangeAction::Delete,
                    endpoint: "old.example.com (TXT)".into(),
                    error: Error::RecordNotFound("old.example.com (TXT)".into()),
                },
            ],
        });
        assert_eq!(
            err.to_string(),
            "2 of 3 changes failed: create new.example.com (A): No hosted zone matches new.example.com; \
             delete old.example.com (TXT): Record not found: old.example.com (TXT)"
        );
    }

    #[test]
    fn test_registrar_error_keeps_source() {
        let err = Error::registrar("list zones", "boom");
        assert_eq!(err.to_string(), "Registrar error (list zones): boom");
        assert!(std::error::Error::source(&err).is_some());
    }
}
