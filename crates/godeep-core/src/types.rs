//! Type descriptions.
//!
//! Types live in an arena owned by [`TypeEnvironment`](crate::TypeEnvironment)
//! and refer to each other through [`TypeId`]. Named types get a separate
//! table ([`NamedId`]) so self-referential declarations need no boxing.

/// Index into the environment's type arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(pub u32);

/// Index into the environment's named type table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamedId(pub u32);

/// Index into the environment's package list. Package 0 is the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageId(pub u32);

impl PackageId {
    pub const TARGET: PackageId = PackageId(0);
}

/// Channel direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ChanDir {
    #[default]
    Both,
    Send,
    Recv,
}

/// A type, one variant per kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Type {
    Named(NamedId),
    Struct(Vec<Field>),
    Slice(TypeId),
    Array { len: u64, elem: TypeId },
    Pointer(TypeId),
    Map { key: TypeId, value: TypeId },
    Chan { dir: ChanDir, elem: TypeId },
    Interface(Vec<InterfaceMethod>),
    Func(Signature),
    /// Predeclared type such as `int`, `string` or `unsafe.Pointer`.
    Basic(String),
}

impl Type {
    /// Short kind label, used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Type::Named(_) => "named",
            Type::Struct(_) => "struct",
            Type::Slice(_) => "slice",
            Type::Array { .. } => "array",
            Type::Pointer(_) => "pointer",
            Type::Map { .. } => "map",
            Type::Chan { .. } => "chan",
            Type::Interface(_) => "interface",
            Type::Func(_) => "func",
            Type::Basic(_) => "basic",
        }
    }
}

/// A struct field. Fields keep their declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeId,
    pub exported: bool,
    pub embedded: bool,
    pub tag: Option<String>,
}

/// A method declared on a named type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub pointer_receiver: bool,
    pub signature: Signature,
}

/// A method listed in an interface type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceMethod {
    pub name: String,
    pub signature: Signature,
}

/// Function signature. When `variadic` is set the last parameter is a slice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Signature {
    pub params: Vec<TypeId>,
    pub results: Vec<TypeId>,
    pub variadic: bool,
}

/// A declared (defined) type.
#[derive(Clone, Debug)]
pub struct NamedType {
    pub name: String,
    pub package: PackageId,
    /// Never itself a `Type::Named` once the environment is built.
    pub underlying: TypeId,
    pub methods: Vec<Method>,
    /// The arena entry `Type::Named(self)`.
    pub ty: TypeId,
}

/// A loaded package.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub path: String,
}

/// Go exports identifiers starting with an upper-case letter.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
