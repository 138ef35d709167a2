use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoursetagError {
    #[error("Course CSV not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Invalid pattern for rule '{label}': {source}")]
    InvalidPattern {
        label: String,
        #[source]
        source: regex::Error,
    },

    #[error(
        "Fuzzy matching was requested but this build has no fuzzy support. \
         Rebuild with `--features fuzzy` or pass --disable-fuzzy."
    )]
    FuzzyUnavailable,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoursetagError {
    /// Configuration errors are raised before any record is processed.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            CoursetagError::InputNotFound(_)
                | CoursetagError::MissingColumns(_)
                | CoursetagError::InvalidPattern { .. }
                | CoursetagError::FuzzyUnavailable
                | CoursetagError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CoursetagError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_lists_names() {
        let err = CoursetagError::MissingColumns(vec!["title".into(), "description".into()]);
        assert_eq!(err.to_string(), "Missing required columns: title, description");
        assert!(err.is_configuration());
    }

    #[test]
    fn test_fuzzy_unavailable_names_remediation() {
        let err = CoursetagError::FuzzyUnavailable;
        assert!(err.to_string().contains("--disable-fuzzy"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_io_is_not_configuration() {
        let err: CoursetagError = std::io::Error::other("disk full").into();
        assert!(!err.is_configuration());
    }
}
