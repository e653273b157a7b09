use super::lexer::{TokenKind, lex, line_of};

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn comments_win_over_operators() {
    use TokenKind::*;
    assert_eq!(kinds("a // b"), [Ident, Whitespace, LineComment]);
    assert_eq!(
        kinds("a /* b */ / c"),
        [Ident, Whitespace, BlockComment, Whitespace, Slash, Whitespace, Ident]
    );
    assert_eq!(kinds("x /= 2"), [Ident, Whitespace, Slash, Whitespace, Number]);
}

#[test]
fn go_literals() {
    use TokenKind::*;
    assert_eq!(
        kinds(r#""a\"b" `c` '\'' 0x1F 1.5e3"#),
        [String, Whitespace, RawString, Whitespace, Rune, Whitespace, Number, Whitespace, Number]
    );
}

#[test]
fn operators_run_together() {
    use TokenKind::*;
    assert_eq!(
        kinds("a := *b..."),
        [Ident, Whitespace, Operator, Whitespace, Operator, Ident, Operator]
    );
    assert_eq!(kinds("<-chan"), [Operator, Ident]);
}

#[test]
fn unterminated_literal_reports_offset() {
    let err = lex("ok\n\"never closed").unwrap_err();
    assert_eq!(err.offset, 3);
    assert_eq!(line_of("ok\n\"never closed", err.offset), 2);
}
