//! Go syntax for type expressions.

use godeep_core::{ChanDir, PackageId, Signature, Type, TypeEnvironment, TypeId};

use crate::imports::ImportTable;

/// Render `ty` as it is written inside the target package, recording an
/// import for every foreign named type it mentions.
pub fn render_type(env: &TypeEnvironment, ty: TypeId, imports: &mut ImportTable) -> String {
    let mut out = String::new();
    write_type(env, ty, imports, &mut out);
    out
}

fn write_type(env: &TypeEnvironment, ty: TypeId, imports: &mut ImportTable, out: &mut String) {
    match env.ty(ty) {
        Type::Named(id) => {
            let named = env.named(*id);
            if named.package != PackageId::TARGET {
                let package = env.package(named.package);
                out.push_str(&imports.qualify(&package.name, &package.path));
                out.push('.');
            }
            out.push_str(&named.name);
        }
        Type::Basic(name) => match name.split_once('.') {
            // unsafe.Pointer and friends
            Some((package, rest)) => {
                out.push_str(&imports.qualify(package, package));
                out.push('.');
                out.push_str(rest);
            }
            None => out.push_str(name),
        },
        Type::Slice(elem) => {
            out.push_str("[]");
            write_type(env, *elem, imports, out);
        }
        Type::Array { len, elem } => {
            out.push_str(&format!("[{len}]"));
            write_type(env, *elem, imports, out);
        }
        Type::Pointer(elem) => {
            out.push('*');
            write_type(env, *elem, imports, out);
        }
        Type::Map { key, value } => {
            out.push_str("map[");
            write_type(env, *key, imports, out);
            out.push(']');
            write_type(env, *value, imports, out);
        }
        Type::Chan { dir, elem } => {
            let nested_recv = matches!(
                env.ty(*elem),
                Type::Chan {
                    dir: ChanDir::Recv,
                    ..
                }
            );
            match dir {
                ChanDir::Both => out.push_str("chan "),
                ChanDir::Send => out.push_str("chan<- "),
                ChanDir::Recv => out.push_str("<-chan "),
            }
            // `chan <-chan T` would parse as `chan<- chan T`.
            if nested_recv && *dir == ChanDir::Both {
                out.push('(');
                write_type(env, *elem, imports, out);
                out.push(')');
            } else {
                write_type(env, *elem, imports, out);
            }
        }
        Type::Struct(fields) => {
            if fields.is_empty() {
                out.push_str("struct{}");
                return;
            }
            out.push_str("struct{ ");
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    out.push_str("; ");
                }
                if !field.embedded {
                    out.push_str(&field.name);
                    out.push(' ');
                }
                write_type(env, field.ty, imports, out);
                if let Some(tag) = &field.tag {
                    out.push(' ');
                    out.push_str(&quote_tag(tag));
                }
            }
            out.push_str(" }");
        }
        Type::Interface(methods) => {
            if methods.is_empty() {
                out.push_str("interface{}");
                return;
            }
            out.push_str("interface{ ");
            for (i, method) in methods.iter().enumerate() {
                if i > 0 {
                    out.push_str("; ");
                }
                out.push_str(&method.name);
                write_signature(env, &method.signature, imports, out);
            }
            out.push_str(" }");
        }
        Type::Func(signature) => {
            out.push_str("func");
            write_signature(env, signature, imports, out);
        }
    }
}

fn write_signature(
    env: &TypeEnvironment,
    signature: &Signature,
    imports: &mut ImportTable,
    out: &mut String,
) {
    out.push('(');
    let last = signature.params.len().saturating_sub(1);
    for (i, param) in signature.params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        match env.ty(*param) {
            Type::Slice(elem) if signature.variadic && i == last => {
                out.push_str("...");
                write_type(env, *elem, imports, out);
            }
            _ => write_type(env, *param, imports, out),
        }
    }
    out.push(')');

    match signature.results.as_slice() {
        [] => {}
        [single] => {
            out.push(' ');
            write_type(env, *single, imports, out);
        }
        results => {
            out.push_str(" (");
            for (i, result) in results.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_type(env, *result, imports, out);
            }
            out.push(')');
        }
    }
}

fn quote_tag(tag: &str) -> String {
    if tag.contains('`') {
        format!("{tag:?}")
    } else {
        format!("`{tag}`")
    }
}
