//! Deep-copy method generator for Go types.
//!
//! This crate turns a loaded type environment into Go source:
//! - `resolve` - requested names to target-package types
//! - `walk` - per-kind traversal emitting copy statements
//! - `reuse` - detection and calling of existing copy methods
//! - `imports` - alias assignment for foreign packages
//! - `render` - Go type expressions
//! - `format` - canonical layout or external `gofmt`

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
mod emitter;
pub mod format;
mod imports;
mod render;
mod request;
mod resolve;
mod reuse;
mod walk;

#[cfg(test)]
mod emitter_tests;
#[cfg(test)]
mod render_tests;
#[cfg(test)]
pub mod test_utils;

use std::path::{Path, PathBuf};

use godeep_core::{EnvironmentLoader, LoadError, TypeEnvironment};

pub use config::{Config, DEFAULT_METHOD_NAME};
pub use emitter::Emitter;
pub use format::{Canonical, FormatError, Gofmt, SourceFormatter};
pub use imports::{ImportTable, derived_alias};
pub use render::render_type;
pub use request::{Request, SkipSet, pair_requests};
pub use resolve::locate_type;
pub use reuse::{CopyMethod, find_copy_method};

/// Errors that can occur during generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid invocation (no type requested, no package path).
    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("no package found")]
    NoPackage,

    #[error("type {name:?} not found in package {package:?}")]
    TypeNotFound { package: String, name: String },

    /// The assembled source could not be formatted; `text` is what was produced.
    #[error("formatting generated code: {message}")]
    Formatting { message: String, text: String },

    #[error("writing {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Generate the formatted copy-method file for `requests`.
pub fn generate(
    env: &TypeEnvironment,
    requests: &[Request],
    config: Config,
    formatter: &dyn SourceFormatter,
) -> Result<String> {
    Emitter::new(env, config)?.emit(requests, formatter)
}

/// Load the environment at `path` and generate for `requests`.
pub fn run(
    loader: &dyn EnvironmentLoader,
    path: &Path,
    requests: &[Request],
    config: Config,
    formatter: &dyn SourceFormatter,
) -> Result<String> {
    if requests.is_empty() {
        return Err(Error::Config("no type given".to_string()));
    }

    let env = loader.load(path)?;
    if env.is_empty() {
        return Err(Error::NoPackage);
    }

    generate(&env, requests, config, formatter)
}
