//! Startup configuration: where the catalog comes from and window defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use portfolio_core::{Catalog, GalleryResult};

pub const DEFAULT_WINDOW_WIDTH: f64 = 1200.0;
pub const DEFAULT_WINDOW_HEIGHT: f64 = 900.0;

/// Where the gallery's catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A JSON catalog file, re-readable at runtime
    File(PathBuf),
    /// The built-in reference catalog
    Reference,
}

impl CatalogSource {
    /// An explicit path wins; otherwise the default file is used if it exists.
    pub fn resolve(explicit: Option<PathBuf>, default_path: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            return CatalogSource::File(path);
        }
        match default_path {
            Some(path) if path.is_file() => CatalogSource::File(path),
            _ => CatalogSource::Reference,
        }
    }

    pub fn load(&self) -> GalleryResult<Catalog> {
        match self {
            CatalogSource::File(path) => Catalog::load(path),
            CatalogSource::Reference => Ok(Catalog::reference()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            CatalogSource::File(path) => Some(path),
            CatalogSource::Reference => None,
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Reference => write!(f, "built-in catalog"),
        }
    }
}

/// `<config dir>/portfolio/catalog.json`, e.g. `~/.config/portfolio/catalog.json` on Linux.
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("portfolio").join("catalog.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_wins() {
        let source = CatalogSource::resolve(
            Some(PathBuf::from("/tmp/mine.json")),
            Some(PathBuf::from("/tmp/default.json")),
        );
        assert_eq!(source, CatalogSource::File(PathBuf::from("/tmp/mine.json")));
    }

    #[test]
    fn existing_default_file_is_used() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "[]").unwrap();

        let source = CatalogSource::resolve(None, Some(path.clone()));
        assert_eq!(source.path(), Some(path.as_path()));
        assert!(source.load().unwrap().is_empty());
    }

    #[test]
    fn missing_default_falls_back_to_reference() {
        let dir = TempDir::new().unwrap();
        let source = CatalogSource::resolve(None, Some(dir.path().join("nope.json")));
        assert_eq!(source, CatalogSource::Reference);
        assert_eq!(source.load().unwrap(), Catalog::reference());
        assert_eq!(source.to_string(), "built-in catalog");
    }
}
