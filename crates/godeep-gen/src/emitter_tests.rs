use indoc::indoc;

use crate::test_utils::{environment, generate_go, show_tabs};
use crate::{Canonical, Config, Error, FormatError, Request, SkipSet, SourceFormatter, generate};

const SHOP: &str = indoc! {r#"
    {
      "packages": [
        { "name": "shop", "path": "example.com/shop", "types": [
          { "name": "Item", "type": { "kind": "struct", "fields": [
            { "name": "Name", "type": { "kind": "basic", "name": "string" } },
            { "name": "Tags", "type": { "kind": "slice", "elem": { "kind": "basic", "name": "string" } } }
          ]}},
          { "name": "Cart", "type": { "kind": "struct", "fields": [
            { "name": "Items", "type": { "kind": "slice", "elem": { "kind": "named", "name": "Item" } } },
            { "name": "Index", "type": { "kind": "map",
              "key": { "kind": "basic", "name": "string" },
              "value": { "kind": "pointer", "elem": { "kind": "named", "name": "Item" } } } }
          ]}},
          { "name": "Point", "type": { "kind": "struct", "fields": [
            { "name": "X", "type": { "kind": "basic", "name": "int" } },
            { "name": "Y", "type": { "kind": "basic", "name": "int" } }
          ]}}
        ]}
      ]
    }
"#};

#[test]
fn cart_value_receiver() {
    let output = generate_go(SHOP, &["Cart"], Config::new());

    insta::assert_snapshot!(show_tabs(&output), @r#"
    // Code generated by godeep; DO NOT EDIT.

    package shop

    // DeepCopy generates a deep copy of Cart
    func (o Cart) DeepCopy() Cart {
        cp := o
        if o.Items != nil {
            cp.Items = make([]Item, len(o.Items))
            copy(cp.Items, o.Items)
            for i := range o.Items {
                if o.Items[i].Tags != nil {
                    cp.Items[i].Tags = make([]string, len(o.Items[i].Tags))
                    copy(cp.Items[i].Tags, o.Items[i].Tags)
                }
            }
        }
        if o.Index != nil {
            cp.Index = make(map[string]*Item, len(o.Index))
            for k, v := range o.Index {
                cpv := v
                if v != nil {
                    cpv = new(Item)
                    *cpv = *v
                    if v.Tags != nil {
                        cpv.Tags = make([]string, len(v.Tags))
                        copy(cpv.Tags, v.Tags)
                    }
                }
                cp.Index[k] = cpv
            }
        }
        return cp
    }
    "#);
}

#[test]
fn plain_values_only_get_shallow_copy() {
    let output = generate_go(SHOP, &["Point"], Config::new().pointer_receiver(true));

    insta::assert_snapshot!(show_tabs(&output), @r#"
    // Code generated by godeep; DO NOT EDIT.

    package shop

    // DeepCopy generates a deep copy of *Point
    func (o *Point) DeepCopy() *Point {
        cp := *o
        return &cp
    }
    "#);
}

#[test]
fn pointer_receiver_selects_through_receiver() {
    let output = generate_go(SHOP, &["Item"], Config::new().pointer_receiver(true));

    assert!(output.contains("func (o *Item) DeepCopy() *Item {"));
    assert!(output.contains("\tcp := *o\n"));
    assert!(output.contains("\tif o.Tags != nil {\n"));
    assert!(output.contains("\t\tcp.Tags = make([]string, len(o.Tags))\n"));
    assert!(output.contains("\treturn &cp\n"));
}

#[test]
fn functions_follow_request_order() {
    let output = generate_go(SHOP, &["Point", "Cart", "Item"], Config::new());

    let point = output.find("func (o Point)").unwrap();
    let cart = output.find("func (o Cart)").unwrap();
    let item = output.find("func (o Item)").unwrap();
    assert!(point < cart && cart < item);
    assert!(output.contains("}\n\n// DeepCopy generates a deep copy of Cart\n"));
    assert!(output.ends_with("}\n"));
}

#[test]
fn method_name_and_invocation_are_configurable() {
    let config = Config::new()
        .method_name("Clone")
        .invocation("godeep -t Point ./shop");
    let output = generate_go(SHOP, &["Point"], config);

    assert!(output.starts_with("// Code generated by godeep -t Point ./shop; DO NOT EDIT.\n"));
    assert!(output.contains("// Clone generates a deep copy of Point\n"));
    assert!(output.contains("func (o Point) Clone() Point {"));
}

#[test]
fn qualified_request_name() {
    let output = generate_go(SHOP, &["shop.Point"], Config::new());
    assert!(output.contains("func (o Point) DeepCopy() Point {"));
}

#[test]
fn skipped_selectors_emit_nothing_for_subtree() {
    let env = environment(SHOP);
    let requests = [Request::new("Cart").with_skips(SkipSet::parse("Items[i].Tags,Index"))];
    let output = generate(&env, &requests, Config::new(), &Canonical).unwrap();

    assert!(output.contains("copy(cp.Items, o.Items)"));
    assert!(!output.contains("Tags"));
    assert!(!output.contains("o.Index"));
}

#[test]
fn skipped_map_contents_insert_entries_directly() {
    let env = environment(SHOP);
    let requests = [Request::new("Cart").with_skips(SkipSet::parse("Index[k]"))];
    let output = generate(&env, &requests, Config::new(), &Canonical).unwrap();

    assert!(output.contains("cp.Index = make(map[string]*Item, len(o.Index))"));
    assert!(output.contains("\t\t\tcp.Index[k] = v\n"));
    assert!(!output.contains("cpv"));
}

#[test]
fn output_is_deterministic() {
    let first = generate_go(SHOP, &["Cart", "Item"], Config::new());
    let second = generate_go(SHOP, &["Cart", "Item"], Config::new());
    assert_eq!(first, second);
}

#[test]
fn unknown_type_fails_before_emitting() {
    let env = environment(SHOP);
    let requests = [Request::new("Point"), Request::new("Missing")];
    let err = generate(&env, &requests, Config::new(), &Canonical).unwrap_err();

    assert!(matches!(
        &err,
        Error::TypeNotFound { package, name } if package == "shop" && name == "Missing"
    ));
    assert_eq!(err.to_string(), r#"type "Missing" not found in package "shop""#);
}

#[test]
fn empty_environment_has_no_package() {
    let env = environment(r#"{ "packages": [] }"#);
    let err = generate(&env, &[Request::new("Cart")], Config::new(), &Canonical).unwrap_err();
    assert!(matches!(err, Error::NoPackage));
}

struct Rejecting;

impl SourceFormatter for Rejecting {
    fn format(&self, _source: &str) -> Result<String, FormatError> {
        Err(FormatError::new("rejected"))
    }
}

#[test]
fn formatting_failure_keeps_unformatted_text() {
    let env = environment(SHOP);
    let err = generate(&env, &[Request::new("Point")], Config::new(), &Rejecting).unwrap_err();

    let Error::Formatting { message, text } = err else {
        panic!("expected formatting error");
    };
    assert_eq!(message, "rejected");
    assert!(text.starts_with("// Code generated by godeep; DO NOT EDIT.\n\npackage shop\n\n"));
    assert!(text.contains("func (o Point) DeepCopy() Point {\ncp := o\nreturn cp\n}\n"));
}

const FOREIGN: &str = indoc! {r#"
    {
      "packages": [
        { "name": "shop", "path": "example.com/shop", "types": [
          { "name": "Order", "type": { "kind": "struct", "fields": [
            { "name": "A", "type": { "kind": "slice",
              "elem": { "kind": "named", "package": "example.com/b/util", "name": "Tag" } } },
            { "name": "B", "type": { "kind": "slice",
              "elem": { "kind": "named", "package": "example.com/a/util", "name": "Tag" } } },
            { "name": "Price", "type": { "kind": "named", "package": "example.com/money", "name": "Amount" } },
            { "name": "Home", "type": { "kind": "pointer",
              "elem": { "kind": "named", "package": "example.com/other/shop", "name": "Store" } } }
          ]}}
        ]},
        { "name": "util", "path": "example.com/b/util", "types": [
          { "name": "Tag", "type": { "kind": "basic", "name": "string" } }
        ]},
        { "name": "util", "path": "example.com/a/util", "types": [
          { "name": "Tag", "type": { "kind": "basic", "name": "string" } }
        ]},
        { "name": "money", "path": "example.com/money", "types": [
          { "name": "Amount", "type": { "kind": "struct", "fields": [
            { "name": "Parts", "type": { "kind": "slice", "elem": { "kind": "basic", "name": "int" } } },
            { "name": "history", "type": { "kind": "slice", "elem": { "kind": "basic", "name": "int" } } }
          ]}}
        ]},
        { "name": "shop", "path": "example.com/other/shop", "types": [
          { "name": "Store", "type": { "kind": "struct" } }
        ]}
      ]
    }
"#};

#[test]
fn foreign_packages_get_distinct_sorted_imports() {
    let output = generate_go(FOREIGN, &["Order"], Config::new());

    insta::assert_snapshot!(show_tabs(&output), @r#"
    // Code generated by godeep; DO NOT EDIT.

    package shop

    import (
        example_com_a_util "example.com/a/util"
        "example.com/b/util"
        example_com_other_shop "example.com/other/shop"
    )

    // DeepCopy generates a deep copy of Order
    func (o Order) DeepCopy() Order {
        cp := o
        if o.A != nil {
            cp.A = make([]util.Tag, len(o.A))
            copy(cp.A, o.A)
        }
        if o.B != nil {
            cp.B = make([]example_com_a_util.Tag, len(o.B))
            copy(cp.B, o.B)
        }
        if o.Price.Parts != nil {
            cp.Price.Parts = make([]int, len(o.Price.Parts))
            copy(cp.Price.Parts, o.Price.Parts)
        }
        if o.Home != nil {
            cp.Home = new(example_com_other_shop.Store)
            *cp.Home = *o.Home
        }
        return cp
    }
    "#);
}

#[test]
fn unexported_fields_of_foreign_types_are_not_touched() {
    let output = generate_go(FOREIGN, &["Order"], Config::new());
    assert!(!output.contains("history"));
    // money.Amount is only traversed, never named, so no import is needed.
    assert!(!output.contains("example.com/money"));
}
