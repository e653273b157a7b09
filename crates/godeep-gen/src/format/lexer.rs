//! Go token scanner used by the canonical formatter.
//!
//! Only as much of Go's lexical grammar as layout needs: delimiters, comments,
//! literals, and everything else as opaque words and operator runs.

use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r#""(?:[^"\\\n]|\\.)*""#)]
    String,

    #[regex(r"`[^`]*`")]
    RawString,

    #[regex(r"'(?:[^'\\\n]|\\.)*'")]
    Rune,

    #[regex(r"[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*")]
    Ident,

    #[regex(r"[0-9][0-9a-zA-Z_.]*")]
    Number,

    /// Division, kept apart from the operator run so `//` and `/*` start comments
    #[token("/")]
    #[token("/=")]
    Slash,

    #[regex(r"[+\-*%&|^<>=!:.,;~]+")]
    Operator,

    #[regex(r"[ \t\r]+")]
    Whitespace,

    #[token("\n")]
    Newline,
}

impl TokenKind {
    pub fn is_open(self) -> bool {
        matches!(self, Self::ParenOpen | Self::BracketOpen | Self::BraceOpen)
    }

    pub fn is_close(self) -> bool {
        matches!(self, Self::ParenClose | Self::BracketClose | Self::BraceClose)
    }

    /// Opener matched by this closer.
    pub fn opener(self) -> Option<Self> {
        match self {
            Self::ParenClose => Some(Self::ParenOpen),
            Self::BracketClose => Some(Self::BracketOpen),
            Self::BraceClose => Some(Self::BraceOpen),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

/// Scanning failure at a byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidToken {
    pub offset: usize,
}

/// Tokenize `source`, failing on the first character no Go token starts with
/// (including unterminated literals and comments).
pub fn lex(source: &str) -> Result<Vec<Token>, InvalidToken> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => tokens.push(Token { kind, span }),
            Err(()) => return Err(InvalidToken { offset: span.start }),
        }
    }

    Ok(tokens)
}

/// 1-based line of a byte offset.
pub fn line_of(source: &str, offset: usize) -> usize {
    source[..offset.min(source.len())].matches('\n').count() + 1
}
