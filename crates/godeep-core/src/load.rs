//! Loading type environments from disk.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::env::TypeEnvironment;

/// File looked up when the loader is pointed at a directory.
pub const ENVIRONMENT_FILE: &str = "godeep.json";

/// Errors raised while loading or building a type environment.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid environment JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("reference to unknown package {0:?}")]
    UnknownPackage(String),

    #[error("reference to unknown type {package}.{name}")]
    UnknownType { package: String, name: String },

    #[error("type {package}.{name} declared twice")]
    DuplicateType { package: String, name: String },

    #[error("invalid recursive type {package}.{name}")]
    InvalidRecursiveType { package: String, name: String },
}

/// Produces the type environment for a package path.
pub trait EnvironmentLoader {
    fn load(&self, path: &Path) -> Result<TypeEnvironment, LoadError>;
}

/// Reads the JSON environment description.
///
/// `path` may name the JSON file itself, a directory holding
/// [`ENVIRONMENT_FILE`], or `-` for standard input.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonLoader;

impl EnvironmentLoader for JsonLoader {
    fn load(&self, path: &Path) -> Result<TypeEnvironment, LoadError> {
        let text = if path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            buf
        } else {
            let file = if path.is_dir() {
                path.join(ENVIRONMENT_FILE)
            } else {
                path.to_path_buf()
            };
            fs::read_to_string(&file).map_err(|source| LoadError::Io { path: file, source })?
        };

        TypeEnvironment::from_json(&text)
    }
}
