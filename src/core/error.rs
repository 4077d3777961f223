//! WP-008: Error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wochenplaner operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the immediate caller. None are fatal to the process.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON serialize error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required recipe field was empty on add.
    #[error("required field '{0}' is empty")]
    MissingField(&'static str),

    #[error("recipe '{0}' already exists")]
    DuplicateRecipe(String),

    /// Delete of a name that is not in the catalog.
    #[error("recipe '{0}' does not exist")]
    RecipeNotFound(String),

    #[error("{0}")]
    UnknownCategory(String),

    /// Config failed validation; the individual problems were reported.
    #[error("{0} validation error(s)")]
    Validation(usize),

    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wp008_messages() {
        assert_eq!(
            Error::MissingField("Gericht").to_string(),
            "required field 'Gericht' is empty"
        );
        assert_eq!(
            Error::RecipeNotFound("Suppe".to_string()).to_string(),
            "recipe 'Suppe' does not exist"
        );
        assert_eq!(Error::Validation(2).to_string(), "2 validation error(s)");
    }

    #[test]
    fn test_wp008_io_includes_path() {
        let e = Error::io(
            "/nowhere/rezepte.csv",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let msg = e.to_string();
        assert!(msg.contains("/nowhere/rezepte.csv"));
        assert!(msg.contains("gone"));
    }
}
