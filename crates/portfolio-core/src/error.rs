//! Error types for the portfolio gallery

use thiserror::Error;

use crate::types::ProjectId;

/// Main error type for catalog and startup operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// Reading a catalog file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share the same id
    #[error("Duplicate project id: {0}")]
    DuplicateId(ProjectId),

    /// A record failed validation
    #[error("Invalid project {id}: {reason}")]
    InvalidRecord { id: ProjectId, reason: String },

    /// The tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GalleryError::DuplicateId(ProjectId(3));
        assert_eq!(format!("{}", err), "Duplicate project id: 3");

        let err = GalleryError::InvalidRecord {
            id: ProjectId(7),
            reason: "title is blank".to_string(),
        };
        assert_eq!(format!("{}", err), "Invalid project 7: title is blank");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GalleryError = io_err.into();
        assert!(matches!(err, GalleryError::Io(_)));
    }
}
