//! The queryable type environment.

use indexmap::IndexMap;

use crate::LoadError;
use crate::types::{Method, NamedId, NamedType, Package, PackageId, Type, TypeId};

/// Packages, their declared types and every type expression reachable from
/// them. Package 0 is the package code is generated into.
#[derive(Clone, Debug, Default)]
pub struct TypeEnvironment {
    packages: Vec<Package>,
    types: Vec<Type>,
    named: Vec<NamedType>,
    /// Declaration order is preserved so lookups scan like the source does.
    index: IndexMap<(PackageId, String), NamedId>,
}

// ============================================================================
// Construction
// ============================================================================

impl TypeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_package(&mut self, name: impl Into<String>, path: impl Into<String>) -> PackageId {
        let id = PackageId(self.packages.len() as u32);
        self.packages.push(Package {
            name: name.into(),
            path: path.into(),
        });
        id
    }

    pub fn add_type(&mut self, ty: Type) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(ty);
        id
    }

    /// Declare a named type. Its underlying type is set later with [`define`](Self::define),
    /// which allows declarations to refer to each other in any order.
    pub fn declare(&mut self, package: PackageId, name: &str) -> Result<NamedId, LoadError> {
        let key = (package, name.to_string());
        if self.index.contains_key(&key) {
            return Err(LoadError::DuplicateType {
                package: self.packages[package.0 as usize].path.clone(),
                name: name.to_string(),
            });
        }

        let id = NamedId(self.named.len() as u32);
        let ty = self.add_type(Type::Named(id));
        self.named.push(NamedType {
            name: name.to_string(),
            package,
            underlying: ty,
            methods: Vec::new(),
            ty,
        });
        self.index.insert(key, id);
        Ok(id)
    }

    pub fn define(&mut self, id: NamedId, underlying: TypeId) {
        self.named[id.0 as usize].underlying = underlying;
    }

    pub fn add_method(&mut self, id: NamedId, method: Method) {
        self.named[id.0 as usize].methods.push(method);
    }

    /// Resolve `type A B` chains so every underlying type is structural.
    pub fn finish(mut self) -> Result<Self, LoadError> {
        for i in 0..self.named.len() {
            let start = NamedId(i as u32);
            let mut current = self.named[i].underlying;
            let mut seen = vec![start];

            while let Type::Named(next) = &self.types[current.0 as usize] {
                let next = *next;
                if seen.contains(&next) {
                    let named = &self.named[i];
                    return Err(LoadError::InvalidRecursiveType {
                        package: self.packages[named.package.0 as usize].path.clone(),
                        name: named.name.clone(),
                    });
                }
                seen.push(next);
                current = self.named[next.0 as usize].underlying;
            }

            self.named[i].underlying = current;
        }
        Ok(self)
    }
}

// ============================================================================
// Queries
// ============================================================================

impl TypeEnvironment {
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn package(&self, id: PackageId) -> &Package {
        &self.packages[id.0 as usize]
    }

    /// The package being generated into.
    pub fn target(&self) -> Option<&Package> {
        self.packages.first()
    }

    pub fn package_by_path(&self, path: &str) -> Option<PackageId> {
        self.packages
            .iter()
            .position(|p| p.path == path)
            .map(|i| PackageId(i as u32))
    }

    pub fn ty(&self, id: TypeId) -> &Type {
        &self.types[id.0 as usize]
    }

    pub fn named(&self, id: NamedId) -> &NamedType {
        &self.named[id.0 as usize]
    }

    /// Named types declared in `package`, in declaration order.
    pub fn declared_in(&self, package: PackageId) -> impl Iterator<Item = NamedId> + '_ {
        self.index
            .iter()
            .filter(move |((pkg, _), _)| *pkg == package)
            .map(|(_, id)| *id)
    }

    pub fn lookup(&self, package: PackageId, name: &str) -> Option<NamedId> {
        self.index.get(&(package, name.to_string())).copied()
    }

    /// Remove one level of pointer, reporting whether one was removed.
    pub fn strip_pointer(&self, id: TypeId) -> (TypeId, bool) {
        match self.ty(id) {
            Type::Pointer(elem) => (*elem, true),
            _ => (id, false),
        }
    }

    /// Go type identity: named types are identical only to themselves,
    /// everything else compares structurally.
    pub fn identical(&self, a: TypeId, b: TypeId) -> bool {
        if a == b {
            return true;
        }

        match (self.ty(a), self.ty(b)) {
            (Type::Named(x), Type::Named(y)) => x == y,
            (Type::Basic(x), Type::Basic(y)) => x == y,
            (Type::Slice(x), Type::Slice(y)) | (Type::Pointer(x), Type::Pointer(y)) => {
                self.identical(*x, *y)
            }
            (Type::Array { len: n, elem: x }, Type::Array { len: m, elem: y }) => {
                n == m && self.identical(*x, *y)
            }
            (Type::Map { key: k1, value: v1 }, Type::Map { key: k2, value: v2 }) => {
                self.identical(*k1, *k2) && self.identical(*v1, *v2)
            }
            (Type::Chan { dir: d1, elem: x }, Type::Chan { dir: d2, elem: y }) => {
                d1 == d2 && self.identical(*x, *y)
            }
            (Type::Struct(f1), Type::Struct(f2)) => {
                f1.len() == f2.len()
                    && f1.iter().zip(f2).all(|(x, y)| {
                        x.name == y.name
                            && x.embedded == y.embedded
                            && x.tag == y.tag
                            && self.identical(x.ty, y.ty)
                    })
            }
            (Type::Func(s1), Type::Func(s2)) => self.identical_signatures(s1, s2),
            (Type::Interface(m1), Type::Interface(m2)) => {
                if m1.len() != m2.len() {
                    return false;
                }
                let mut m1: Vec<_> = m1.iter().collect();
                let mut m2: Vec<_> = m2.iter().collect();
                m1.sort_by(|x, y| x.name.cmp(&y.name));
                m2.sort_by(|x, y| x.name.cmp(&y.name));
                m1.iter().zip(&m2).all(|(x, y)| {
                    x.name == y.name && self.identical_signatures(&x.signature, &y.signature)
                })
            }
            _ => false,
        }
    }

    fn identical_signatures(&self, a: &crate::Signature, b: &crate::Signature) -> bool {
        a.variadic == b.variadic
            && a.params.len() == b.params.len()
            && a.results.len() == b.results.len()
            && a.params.iter().zip(&b.params).all(|(x, y)| self.identical(*x, *y))
            && a.results.iter().zip(&b.results).all(|(x, y)| self.identical(*x, *y))
    }
}
