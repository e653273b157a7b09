//! Reuse of existing copy methods.
//!
//! A named type is copied by calling its own method when it declares exactly
//! one method with the configured name, taking no parameters and returning a
//! single value whose pointer-stripped type is the receiver type.

use godeep_core::{NamedId, PackageId, TypeEnvironment, is_exported};

use crate::emitter::Emitter;
use crate::walk::{Site, bare};

/// A callable copy method and the shape of its result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyMethod {
    pub name: String,
    pub returns_pointer: bool,
}

/// Look up a reusable copy method declared on `id`.
pub fn find_copy_method(env: &TypeEnvironment, id: NamedId, name: &str) -> Option<CopyMethod> {
    let named = env.named(id);
    if named.package != PackageId::TARGET && !is_exported(name) {
        return None;
    }

    let mut candidates = named.methods.iter().filter(|m| m.name == name);
    let method = candidates.next()?;
    if candidates.next().is_some() {
        return None;
    }

    let signature = &method.signature;
    if !signature.params.is_empty() || signature.results.len() != 1 {
        return None;
    }

    let (result, returns_pointer) = env.strip_pointer(signature.results[0]);
    if !env.identical(result, named.ty) {
        return None;
    }

    Some(CopyMethod {
        name: method.name.clone(),
        returns_pointer,
    })
}

impl Emitter<'_> {
    /// Copy method usable for a nested occurrence of `id`.
    ///
    /// Besides methods declared in the environment, a type that is generated
    /// in this run and is already being expanded (a cycle) is copied through
    /// the method this run emits for it.
    pub(crate) fn reusable(&self, id: NamedId) -> Option<CopyMethod> {
        if let Some(method) = find_copy_method(self.env, id, &self.config.method_name) {
            return Some(method);
        }

        if self.expanding.contains(&id) && self.generated.contains(&id) {
            return Some(CopyMethod {
                name: self.config.method_name.clone(),
                returns_pointer: self.config.pointer_receiver,
            });
        }

        None
    }

    /// Assign `site.sink` from a method call on `site.source`, adjusting
    /// between value and pointer shapes.
    pub(crate) fn emit_reuse_call(&mut self, site: &Site, method: &CopyMethod, pointer_sink: bool) {
        let call = format!("{}.{}()", site.source, method.name);
        let sink = bare(&site.sink);

        tracing::debug!(path = %site.path, method = %method.name, "reusing copy method");

        match (pointer_sink, method.returns_pointer) {
            (true, true) | (false, false) => self.line(format!("{sink} = {call}")),
            (true, false) => {
                self.line("{");
                self.line(format!("retV := {call}"));
                self.line(format!("{sink} = &retV"));
                self.line("}");
            }
            (false, true) => {
                self.line("{");
                self.line(format!("retV := {call}"));
                self.line(format!("{sink} = *retV"));
                self.line("}");
            }
        }
    }
}
