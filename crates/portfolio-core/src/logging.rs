//! Tracing subscriber setup.
//!
//! Console output on stderr through `tracing_subscriber::fmt`, filtered by an explicit
//! directive string or `RUST_LOG`, falling back to [`DEFAULT_FILTER`].

use tracing_subscriber::EnvFilter;

use crate::error::{GalleryError, GalleryResult};

pub const DEFAULT_FILTER: &str = "info";

/// Build the filter: explicit directives win over `RUST_LOG`.
pub fn build_filter(directives: Option<&str>) -> GalleryResult<EnvFilter> {
    match directives {
        Some(d) => EnvFilter::try_new(d).map_err(|e| GalleryError::Logging(e.to_string())),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(directives: Option<&str>) -> GalleryResult<()> {
    let filter = build_filter(directives)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| GalleryError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_directives_parse() {
        let filter = build_filter(Some("portfolio=debug,warn")).unwrap();
        assert!(filter.to_string().contains("portfolio=debug"));
    }

    #[test]
    fn test_invalid_directives_rejected() {
        let err = build_filter(Some("portfolio=notalevel")).unwrap_err();
        assert!(matches!(err, GalleryError::Logging(_)));
    }

    #[test]
    fn test_second_init_fails() {
        let _ = init(Some("warn"));
        assert!(init(Some("warn")).is_err());
    }
}
