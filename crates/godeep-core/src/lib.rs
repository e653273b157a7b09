#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for godeep type information.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the environment JSON (`json`)
//! - **Analysis layer**: arena-indexed types with identity and lookup queries (`env`)

mod env;
mod json;
mod load;
mod types;


pub use env::TypeEnvironment;
pub use load::{ENVIRONMENT_FILE, EnvironmentLoader, JsonLoader, LoadError};
pub use types::{
    ChanDir, Field, InterfaceMethod, Method, NamedId, NamedType, Package, PackageId, Signature,
    Type, TypeId, is_exported,
};
