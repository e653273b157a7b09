//! JSON deserialization for type environment descriptions.
//!
//! Type expressions are internally tagged by `kind`. Named references carry
//! the import path of the declaring package; when omitted they resolve to
//! the package the reference appears in.

use serde::Deserialize;

use crate::LoadError;
use crate::env::TypeEnvironment;
use crate::types::{
    ChanDir, Field, InterfaceMethod, Method, PackageId, Signature, Type, TypeId, is_exported,
};

impl TypeEnvironment {
    /// Parse an environment from its JSON description.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw: RawEnvironment = serde_json::from_str(json).map_err(LoadError::Json)?;
        raw.build()
    }
}

#[derive(Debug, Deserialize)]
struct RawEnvironment {
    packages: Vec<RawPackage>,
}

#[derive(Debug, Deserialize)]
struct RawPackage {
    name: String,
    path: String,
    #[serde(default)]
    types: Vec<RawDecl>,
}

#[derive(Debug, Deserialize)]
struct RawDecl {
    name: String,
    #[serde(rename = "type")]
    ty: RawType,
    #[serde(default)]
    methods: Vec<RawMethod>,
}

#[derive(Debug, Deserialize)]
struct RawMethod {
    name: String,
    #[serde(default)]
    pointer_receiver: bool,
    #[serde(flatten)]
    signature: RawSignature,
}

#[derive(Debug, Default, Deserialize)]
struct RawSignature {
    #[serde(default)]
    params: Vec<RawType>,
    #[serde(default)]
    results: Vec<RawType>,
    #[serde(default)]
    variadic: bool,
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    ty: RawType,
    #[serde(default)]
    embedded: bool,
    #[serde(default)]
    tag: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawInterfaceMethod {
    name: String,
    #[serde(flatten)]
    signature: RawSignature,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawChanDir {
    #[default]
    Both,
    Send,
    Recv,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RawType {
    Basic {
        name: String,
    },
    Named {
        #[serde(default)]
        package: Option<String>,
        name: String,
    },
    Struct {
        #[serde(default)]
        fields: Vec<RawField>,
    },
    Slice {
        elem: Box<RawType>,
    },
    Array {
        len: u64,
        elem: Box<RawType>,
    },
    Pointer {
        elem: Box<RawType>,
    },
    Map {
        key: Box<RawType>,
        value: Box<RawType>,
    },
    Chan {
        #[serde(default)]
        dir: RawChanDir,
        elem: Box<RawType>,
    },
    Interface {
        #[serde(default)]
        methods: Vec<RawInterfaceMethod>,
    },
    Func {
        #[serde(default)]
        params: Vec<RawType>,
        #[serde(default)]
        results: Vec<RawType>,
        #[serde(default)]
        variadic: bool,
    },
}

impl RawEnvironment {
    fn build(self) -> Result<TypeEnvironment, LoadError> {
        let mut env = TypeEnvironment::new();

        let package_ids: Vec<PackageId> = self
            .packages
            .iter()
            .map(|p| env.add_package(&p.name, &p.path))
            .collect();

        // Declare first so definitions can reference types declared later.
        let mut declared = Vec::new();
        for (pkg, raw) in package_ids.iter().zip(&self.packages) {
            for decl in &raw.types {
                declared.push(env.declare(*pkg, &decl.name)?);
            }
        }

        let decls = package_ids
            .iter()
            .zip(self.packages)
            .flat_map(|(pkg, raw)| raw.types.into_iter().map(move |d| (*pkg, d)));

        for (named, (pkg, decl)) in declared.into_iter().zip(decls) {
            let underlying = convert(&mut env, pkg, decl.ty)?;
            env.define(named, underlying);

            for method in decl.methods {
                let signature = convert_signature(&mut env, pkg, method.signature)?;
                env.add_method(
                    named,
                    Method {
                        name: method.name,
                        pointer_receiver: method.pointer_receiver,
                        signature,
                    },
                );
            }
        }

        env.finish()
    }
}

fn convert(env: &mut TypeEnvironment, pkg: PackageId, raw: RawType) -> Result<TypeId, LoadError> {
    let ty = match raw {
        RawType::Basic { name } => Type::Basic(name),
        RawType::Named { package, name } => {
            let owner = match package {
                Some(path) => env
                    .package_by_path(&path)
                    .ok_or(LoadError::UnknownPackage(path))?,
                None => pkg,
            };
            let Some(named) = env.lookup(owner, &name) else {
                return Err(LoadError::UnknownType {
                    package: env.package(owner).path.clone(),
                    name,
                });
            };
            return Ok(env.named(named).ty);
        }
        RawType::Struct { fields } => {
            let mut converted = Vec::with_capacity(fields.len());
            for field in fields {
                let ty = convert(env, pkg, field.ty)?;
                converted.push(Field {
                    exported: is_exported(&field.name),
                    name: field.name,
                    ty,
                    embedded: field.embedded,
                    tag: field.tag,
                });
            }
            Type::Struct(converted)
        }
        RawType::Slice { elem } => Type::Slice(convert(env, pkg, *elem)?),
        RawType::Array { len, elem } => Type::Array {
            len,
            elem: convert(env, pkg, *elem)?,
        },
        RawType::Pointer { elem } => Type::Pointer(convert(env, pkg, *elem)?),
        RawType::Map { key, value } => Type::Map {
            key: convert(env, pkg, *key)?,
            value: convert(env, pkg, *value)?,
        },
        RawType::Chan { dir, elem } => Type::Chan {
            dir: match dir {
                RawChanDir::Both => ChanDir::Both,
                RawChanDir::Send => ChanDir::Send,
                RawChanDir::Recv => ChanDir::Recv,
            },
            elem: convert(env, pkg, *elem)?,
        },
        RawType::Interface { methods } => {
            let mut converted = Vec::with_capacity(methods.len());
            for method in methods {
                converted.push(InterfaceMethod {
                    name: method.name,
                    signature: convert_signature(env, pkg, method.signature)?,
                });
            }
            Type::Interface(converted)
        }
        RawType::Func {
            params,
            results,
            variadic,
        } => {
            let signature = RawSignature {
                params,
                results,
                variadic,
            };
            Type::Func(convert_signature(env, pkg, signature)?)
        }
    };

    Ok(env.add_type(ty))
}

fn convert_signature(
    env: &mut TypeEnvironment,
    pkg: PackageId,
    raw: RawSignature,
) -> Result<Signature, LoadError> {
    let params = raw
        .params
        .into_iter()
        .map(|t| convert(env, pkg, t))
        .collect::<Result<Vec<_>, _>>()?;
    let results = raw
        .results
        .into_iter()
        .map(|t| convert(env, pkg, t))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Signature {
        params,
        results,
        variadic: raw.variadic,
    })
}
