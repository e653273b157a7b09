use godeep_core::{ChanDir, Field, InterfaceMethod, Signature, Type, TypeEnvironment, TypeId};

use crate::{ImportTable, render_type};

fn basic(env: &mut TypeEnvironment, name: &str) -> TypeId {
    env.add_type(Type::Basic(name.into()))
}

fn render(env: &TypeEnvironment, ty: TypeId) -> String {
    render_type(env, ty, &mut ImportTable::new("shop"))
}

#[test]
fn composite_types() {
    let mut env = TypeEnvironment::new();
    env.add_package("shop", "example.com/shop");
    let int = basic(&mut env, "int");
    let string = basic(&mut env, "string");
    let slice = env.add_type(Type::Slice(int));
    let array = env.add_type(Type::Array { len: 4, elem: slice });
    let pointer = env.add_type(Type::Pointer(array));
    let map = env.add_type(Type::Map {
        key: string,
        value: pointer,
    });

    assert_eq!(render(&env, slice), "[]int");
    assert_eq!(render(&env, array), "[4][]int");
    assert_eq!(render(&env, map), "map[string]*[4][]int");
}

#[test]
fn channel_directions() {
    let mut env = TypeEnvironment::new();
    env.add_package("shop", "example.com/shop");
    let int = basic(&mut env, "int");
    let send = env.add_type(Type::Chan {
        dir: ChanDir::Send,
        elem: int,
    });
    let recv = env.add_type(Type::Chan {
        dir: ChanDir::Recv,
        elem: int,
    });
    let of_recv = env.add_type(Type::Chan {
        dir: ChanDir::Both,
        elem: recv,
    });

    assert_eq!(render(&env, send), "chan<- int");
    assert_eq!(render(&env, recv), "<-chan int");
    assert_eq!(render(&env, of_recv), "chan (<-chan int)");
}

#[test]
fn struct_interface_and_func_literals() {
    let mut env = TypeEnvironment::new();
    env.add_package("shop", "example.com/shop");
    let int = basic(&mut env, "int");
    let string = basic(&mut env, "string");
    let error = basic(&mut env, "error");
    let strings = env.add_type(Type::Slice(string));

    let empty = env.add_type(Type::Struct(Vec::new()));
    let fields = env.add_type(Type::Struct(vec![
        Field {
            name: "ID".into(),
            ty: int,
            exported: true,
            embedded: false,
            tag: Some("json:\"id\"".into()),
        },
        Field {
            name: "error".into(),
            ty: error,
            exported: false,
            embedded: true,
            tag: None,
        },
    ]));
    let variadic = Signature {
        params: vec![int, strings],
        results: vec![int, error],
        variadic: true,
    };
    let func = env.add_type(Type::Func(variadic));
    let iface = env.add_type(Type::Interface(vec![InterfaceMethod {
        name: "Len".into(),
        signature: Signature {
            params: Vec::new(),
            results: vec![int],
            variadic: false,
        },
    }]));
    let any = env.add_type(Type::Interface(Vec::new()));

    assert_eq!(render(&env, empty), "struct{}");
    assert_eq!(render(&env, fields), "struct{ ID int `json:\"id\"`; error }");
    assert_eq!(render(&env, func), "func(int, ...string) (int, error)");
    assert_eq!(render(&env, iface), "interface{ Len() int }");
    assert_eq!(render(&env, any), "interface{}");
}

#[test]
fn foreign_named_types_are_qualified_and_imported() {
    let mut env = TypeEnvironment::new();
    let shop = env.add_package("shop", "example.com/shop");
    let money = env.add_package("money", "example.com/money");
    let local = env.declare(shop, "Cart").unwrap();
    let amount = env.declare(money, "Amount").unwrap();
    let int = basic(&mut env, "int");
    env.define(local, int);
    env.define(amount, int);
    let env = env.finish().unwrap();

    let mut imports = ImportTable::new("shop");
    let local_ty = env.named(local).ty;
    let amount_ty = env.named(amount).ty;
    assert_eq!(render_type(&env, local_ty, &mut imports), "Cart");
    assert!(imports.is_empty());
    assert_eq!(render_type(&env, amount_ty, &mut imports), "money.Amount");
    assert_eq!(imports.iter().collect::<Vec<_>>(), [("example.com/money", "money")]);
}

#[test]
fn qualified_basic_names_import_their_package() {
    let mut env = TypeEnvironment::new();
    env.add_package("shop", "example.com/shop");
    let pointer = basic(&mut env, "unsafe.Pointer");

    let mut imports = ImportTable::new("shop");
    assert_eq!(render_type(&env, pointer, &mut imports), "unsafe.Pointer");
    assert_eq!(imports.iter().collect::<Vec<_>>(), [("unsafe", "unsafe")]);
}
