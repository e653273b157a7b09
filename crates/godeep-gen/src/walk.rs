//! Type-graph traversal: one arm per type kind, each appending Go statements
//! that finish the copy started by the shallow assignment of the receiver.

use godeep_core::{PackageId, Type, TypeId};

use crate::emitter::Emitter;

/// Source and sink expressions for the value being copied, with its
/// selector path relative to the receiver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Site {
    pub source: String,
    pub sink: String,
    pub path: String,
    /// Inside a type declared outside the target package: unexported fields
    /// are unreachable.
    pub foreign: bool,
}

impl Site {
    pub fn root(source: &str, sink: &str) -> Self {
        Self {
            source: source.to_string(),
            sink: sink.to_string(),
            path: String::new(),
            foreign: false,
        }
    }

    fn field(&self, name: &str) -> Self {
        let path = if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{name}", self.path)
        };
        Self {
            source: select(&self.source, name),
            sink: select(&self.sink, name),
            path,
            foreign: self.foreign,
        }
    }

    fn element_path(&self) -> String {
        format!("{}[i]", self.path)
    }

    fn entry_path(&self) -> String {
        format!("{}[k]", self.path)
    }

    fn element(&self, var: &str) -> Self {
        Self {
            source: format!("{}[{var}]", self.source),
            sink: format!("{}[{var}]", self.sink),
            path: self.element_path(),
            foreign: self.foreign,
        }
    }

    fn deref(&self) -> Self {
        Self {
            source: format!("(*{})", self.source),
            sink: format!("(*{})", self.sink),
            path: self.path.clone(),
            foreign: self.foreign,
        }
    }

    /// Entry of a map being ranged over, copied into a local.
    fn entry(&self, source: &str, sink: &str) -> Self {
        Self {
            source: source.to_string(),
            sink: sink.to_string(),
            path: self.entry_path(),
            foreign: self.foreign,
        }
    }
}

fn deref_inner(expr: &str) -> Option<&str> {
    expr.strip_prefix("(*")?.strip_suffix(')')
}

/// Field selection. Go dereferences pointers implicitly, so `(*x).F` is `x.F`.
fn select(expr: &str, name: &str) -> String {
    match deref_inner(expr) {
        Some(inner) => format!("{inner}.{name}"),
        None => format!("{expr}.{name}"),
    }
}

/// An expression in operand position, where `(*x)` needs no parentheses.
pub(crate) fn bare(expr: &str) -> String {
    match deref_inner(expr) {
        Some(inner) => format!("*{inner}"),
        None => expr.to_string(),
    }
}

/// Loop variable unique to the current nesting depth: `i`, `i1`, `i2`, ...
fn scoped(name: &str, depth: usize) -> String {
    if depth == 0 {
        name.to_string()
    } else {
        format!("{name}{depth}")
    }
}

impl Emitter<'_> {
    pub(crate) fn walk(&mut self, ty: TypeId, site: &Site, initial: bool) {
        let env = self.env;

        match env.ty(ty) {
            Type::Named(id) => {
                let named = env.named(*id);
                let mut site = site.clone();
                site.foreign = named.package != PackageId::TARGET;

                if !initial {
                    if let Some(method) = self.reusable(*id) {
                        self.emit_reuse_call(&site, &method, false);
                        return;
                    }
                    if self.expanding.contains(id) {
                        tracing::warn!(
                            ty = %named.name,
                            kind = env.ty(named.underlying).kind_name(),
                            path = %site.path,
                            "recursive type without a copy method, leaving shallow copy"
                        );
                        return;
                    }
                }

                self.expanding.push(*id);
                self.walk(named.underlying, &site, initial);
                self.expanding.pop();
            }
            Type::Struct(fields) => {
                for field in fields {
                    // Blank fields cannot be selected.
                    if field.name == "_" || (site.foreign && !field.exported) {
                        continue;
                    }
                    let field_site = site.field(&field.name);
                    if self.skips.contains(&field_site.path) {
                        tracing::debug!(path = %field_site.path, "skipping field");
                        continue;
                    }
                    self.walk(field.ty, &field_site, false);
                }
            }
            Type::Slice(elem) => self.walk_slice(*elem, site),
            Type::Array { elem, .. } => {
                let Some((var, body)) = self.element_body(*elem, site) else {
                    return;
                };
                if body.is_empty() {
                    return;
                }
                self.line(format!("for {var} := range {} {{", bare(&site.source)));
                self.output.push_str(&body);
                self.line("}");
            }
            Type::Pointer(elem) => self.walk_pointer(*elem, site, initial),
            Type::Chan { elem, .. } => {
                let elem = self.type_expr(*elem);
                let source = bare(&site.source);
                self.line(format!("if {source} != nil {{"));
                self.line(format!(
                    "{} = make(chan {elem}, cap({source}))",
                    bare(&site.sink)
                ));
                self.line("}");
            }
            Type::Map { key, value } => self.walk_map(*key, *value, site),
            Type::Interface(_) | Type::Func(_) | Type::Basic(_) => {}
        }
    }

    fn walk_slice(&mut self, elem: TypeId, site: &Site) {
        let elem_ty = self.type_expr(elem);
        let source = bare(&site.source);
        let sink = bare(&site.sink);

        self.line(format!("if {source} != nil {{"));
        self.line(format!("{sink} = make([]{elem_ty}, len({source}))"));
        self.line(format!("copy({sink}, {source})"));

        if let Some((var, body)) = self.element_body(elem, site) {
            if !body.is_empty() {
                self.line(format!("for {var} := range {source} {{"));
                self.output.push_str(&body);
                self.line("}");
            }
        }

        self.line("}");
    }

    /// Statements copying one element, or `None` when the element path is skipped.
    fn element_body(&mut self, elem: TypeId, site: &Site) -> Option<(String, String)> {
        if self.skips.contains(&site.element_path()) {
            tracing::debug!(path = %site.element_path(), "skipping elements");
            return None;
        }

        let var = scoped("i", self.depth);
        let element = site.element(&var);
        self.depth += 1;
        let body = self.capture(|e| e.walk(elem, &element, false));
        self.depth -= 1;
        Some((var, body))
    }

    fn walk_pointer(&mut self, elem: TypeId, site: &Site, initial: bool) {
        let source = bare(&site.source);
        self.line(format!("if {source} != nil {{"));

        let method = match self.env.ty(elem) {
            Type::Named(id) if !initial => self.reusable(*id),
            _ => None,
        };

        match method {
            Some(method) => self.emit_reuse_call(site, &method, true),
            None => {
                let elem_ty = self.type_expr(elem);
                self.line(format!("{} = new({elem_ty})", bare(&site.sink)));
                self.line(format!("*{} = *{}", site.sink, site.source));
                self.walk(elem, &site.deref(), false);
            }
        }

        self.line("}");
    }

    fn walk_map(&mut self, key: TypeId, value: TypeId, site: &Site) {
        let key_ty = self.type_expr(key);
        let value_ty = self.type_expr(value);
        let source = bare(&site.source);

        let k = scoped("k", self.depth);
        let v = scoped("v", self.depth);

        self.line(format!("if {source} != nil {{"));
        self.line(format!(
            "{} = make(map[{key_ty}]{value_ty}, len({source}))",
            bare(&site.sink)
        ));
        self.line(format!("for {k}, {v} := range {source} {{"));

        let (key_sink, value_sink) = if self.skips.contains(&site.entry_path()) {
            tracing::debug!(path = %site.entry_path(), "skipping map contents");
            (k, v)
        } else {
            let key_site = site.entry(&k, &scoped("cpk", self.depth));
            let value_site = site.entry(&v, &scoped("cpv", self.depth));

            self.depth += 1;
            let key_body = self.capture(|e| e.walk(key, &key_site, false));
            let value_body = self.capture(|e| e.walk(value, &value_site, false));
            self.depth -= 1;

            (
                self.entry_copy(&key_site, key_body),
                self.entry_copy(&value_site, value_body),
            )
        };

        self.line(format!("{}[{key_sink}] = {value_sink}", site.sink));
        self.line("}");
        self.line("}");
    }

    /// Expression to insert for a map key or value: the ranged variable when
    /// nothing needs copying, otherwise a shallow local finished by `body`.
    fn entry_copy(&mut self, site: &Site, body: String) -> String {
        if body.is_empty() {
            return site.source.clone();
        }
        self.line(format!("{} := {}", site.sink, site.source));
        self.output.push_str(&body);
        site.sink.clone()
    }
}
