use indoc::indoc;

use super::{Canonical, SourceFormatter};

fn format(source: &str) -> String {
    Canonical.format(source).unwrap()
}

fn error(source: &str) -> String {
    Canonical.format(source).unwrap_err().message
}

#[test]
fn indents_by_nesting_with_tabs() {
    let source = indoc! {"
        func f() {
        if x {
        y()
        } else {
        z()
        }
        }
    "};

    assert_eq!(
        format(source),
        "func f() {\n\tif x {\n\t\ty()\n\t} else {\n\t\tz()\n\t}\n}\n"
    );
}

#[test]
fn only_first_open_delimiter_on_a_line_indents() {
    let source = "x := foo(bar{\na: 1,\n})\n";
    assert_eq!(format(source), "x := foo(bar{\n\ta: 1,\n})\n");
}

#[test]
fn collapses_spaces_and_blank_lines() {
    let source = "\n\npackage   p\n\n\n\nfunc  f()   {\n\n   return  \n\n}\n\n\n";
    assert_eq!(format(source), "package p\n\nfunc f() {\n\treturn\n}\n");
}

#[test]
fn literals_and_comments_are_kept_verbatim() {
    let source = "x := \"a  {  b\"   // keep  { this   \ny := `raw\n  (text`\nz := '}'\n";
    assert_eq!(
        format(source),
        "x := \"a  {  b\" // keep  { this\ny := `raw\n  (text`\nz := '}'\n"
    );
}

#[test]
fn import_block_is_indented() {
    let source = "import (\n\"a\"\nb \"x/b\"\n)\n";
    assert_eq!(format(source), "import (\n\t\"a\"\n\tb \"x/b\"\n)\n");
}

#[test]
fn unbalanced_delimiters_are_rejected() {
    assert_eq!(error("func f() {\n"), "line 1: unclosed `{`");
    assert_eq!(error("x\n}\n"), "line 2: unexpected `}`");
    assert_eq!(error("f(]\n"), "line 1: `]` does not match `(` on line 1");
}

#[test]
fn malformed_literals_are_rejected() {
    assert_eq!(error("x := \"open\ny := 1\n"), "line 1: invalid token");
    assert_eq!(error("a\nb := @\n"), "line 2: invalid token");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(format(""), "");
    assert_eq!(format("\n\n"), "");
}

#[test]
fn one_line_type_literals_are_kept() {
    let source = "var x   []struct{ X int; Y *int }\n";
    assert_eq!(format(source), "var x []struct{ X int; Y *int }\n");
}
