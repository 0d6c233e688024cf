//! Which catalog the process runs with.

use std::{env, path::PathBuf};

use tracing::{debug, warn};

use crate::{catalog::Catalog, error::CatalogError};

/// Environment variable naming a catalog file to use instead of the bundled one.
pub const CATALOG_ENV_KEY: &str = "TC_MESSAGES_CATALOG";

/// Load the catalog from `path_override`, else from [`CATALOG_ENV_KEY`], else
/// the bundled catalog.
pub fn load_catalog(path_override: Option<PathBuf>) -> Result<Catalog, CatalogError> {
    let path = path_override.or_else(|| {
        env::var_os(CATALOG_ENV_KEY).filter(|value| !value.is_empty()).map(PathBuf::from)
    });

    let result = match &path {
        Some(path) => {
            debug!(path = %path.display(), "loading message catalog from file");
            Catalog::from_path(path)
        }
        None => Catalog::bundled(),
    };
    if let Err(err) = &result {
        warn!(origin = %err.origin(), error = %err, "message catalog could not be loaded");
    }
    result
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::key::LookupKey;

    #[test]
    fn explicit_path_wins() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"{"akamai": {"fallback": "custom fallback"}}"#).unwrap();

        let catalog = load_catalog(Some(path)).unwrap();
        assert_eq!(catalog.resolve(&LookupKey::global("initEdgeRc")), "custom fallback");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_catalog(Some(path.clone())).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }), "unexpected error: {err:?}");
        assert_eq!(err.origin(), path.display().to_string());
    }
}
