use std::{io, path::PathBuf};

use serde_json::Error as JsonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read message catalog {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse message catalog {origin}")]
    Parse {
        origin: String,
        #[source]
        source: JsonError,
    },

    #[error("message catalog {origin} must be a JSON object at the top level")]
    NotAnObject { origin: String },

    #[error("message catalog {origin} has no '{key}' string")]
    MissingFallback { origin: String, key: String },
}

impl CatalogError {
    /// Where the failing catalog came from: a file path or `bundled`.
    pub fn origin(&self) -> String {
        match self {
            CatalogError::Read { path, .. } => path.display().to_string(),
            CatalogError::Parse { origin, .. }
            | CatalogError::NotAnObject { origin }
            | CatalogError::MissingFallback { origin, .. } => origin.clone(),
        }
    }
}
