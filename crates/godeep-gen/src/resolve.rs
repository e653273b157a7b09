//! Requested type names to named types of the target package.

use godeep_core::{NamedId, PackageId, TypeEnvironment};

use crate::{Error, Result};

/// Find a type declared in the target package.
///
/// Accepts a bare identifier or one qualified with the target package name
/// (`shop.Cart`).
pub fn locate_type(env: &TypeEnvironment, name: &str) -> Result<NamedId> {
    let target = env.target().ok_or(Error::NoPackage)?;

    let ident = match name.split_once('.') {
        Some((package, ident)) if package == target.name => ident,
        Some(_) => {
            return Err(Error::TypeNotFound {
                package: target.name.clone(),
                name: name.to_string(),
            });
        }
        None => name,
    };

    env.declared_in(PackageId::TARGET)
        .find(|&id| env.named(id).name == ident)
        .ok_or_else(|| Error::TypeNotFound {
            package: target.name.clone(),
            name: name.to_string(),
        })
}
