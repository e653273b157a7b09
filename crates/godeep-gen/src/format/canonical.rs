//! Built-in formatter producing gofmt-style layout for generated code.

use super::lexer::{InvalidToken, Token, TokenKind, lex, line_of};
use super::{FormatError, SourceFormatter};

/// Re-indents with tabs by delimiter nesting, collapses runs of spaces and
/// blank lines, and rejects unbalanced delimiters or malformed literals.
///
/// Only the first opener left unclosed on a line adds an indentation level,
/// so `foo(bar{` indents its body once.
///
/// Line breaks are never added. Anonymous struct and interface literals with
/// several members keep their one-line `struct{ X int; Y *int }` form, which
/// `gofmt` would expand and align; use [`super::Gofmt`] when that matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct Canonical;

impl SourceFormatter for Canonical {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let tokens = lex(source).map_err(|InvalidToken { offset }| {
            FormatError::new(format!(
                "line {}: invalid token",
                line_of(source, offset)
            ))
        })?;
        Layout::new(source).run(&tokens)
    }
}

struct Open {
    kind: TokenKind,
    offset: usize,
    indents: bool,
}

struct Layout<'s> {
    source: &'s str,
    stack: Vec<Open>,
    lines: Vec<String>,

    line: String,
    /// Indentation fixed by the first token that is not a closer
    indent: Option<usize>,
    /// Lowest stack height reached on the current line
    low: usize,
    pending_space: bool,
}

impl<'s> Layout<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            stack: Vec::new(),
            lines: Vec::new(),
            line: String::new(),
            indent: None,
            low: 0,
            pending_space: false,
        }
    }

    fn run(mut self, tokens: &[Token]) -> Result<String, FormatError> {
        let source = self.source;
        for token in tokens {
            let text = &source[token.span.clone()];
            match token.kind {
                TokenKind::Whitespace => self.pending_space = !self.line.is_empty(),
                TokenKind::Newline => self.end_line(),
                TokenKind::LineComment => {
                    self.indent.get_or_insert(self.depth());
                    self.push(text.trim_end());
                }
                kind if kind.is_close() => {
                    self.close(kind, token.span.start)?;
                    self.push(text);
                }
                kind => {
                    self.indent.get_or_insert(self.depth());
                    self.push(text);
                    if kind.is_open() {
                        self.stack.push(Open {
                            kind,
                            offset: token.span.start,
                            indents: false,
                        });
                    }
                }
            }
        }
        self.end_line();

        if let Some(open) = self.stack.first() {
            return Err(FormatError::new(format!(
                "line {}: unclosed {}",
                line_of(self.source, open.offset),
                describe(open.kind)
            )));
        }

        Ok(self.finish())
    }

    fn depth(&self) -> usize {
        self.stack.iter().filter(|o| o.indents).count()
    }

    fn push(&mut self, text: &str) {
        if self.pending_space {
            self.line.push(' ');
            self.pending_space = false;
        }
        // Block comments may span lines; their text is kept as written.
        self.line.push_str(text);
    }

    fn close(&mut self, kind: TokenKind, offset: usize) -> Result<(), FormatError> {
        let line = line_of(self.source, offset);
        let Some(open) = self.stack.pop() else {
            return Err(FormatError::new(format!(
                "line {line}: unexpected {}",
                describe(kind)
            )));
        };
        if kind.opener() != Some(open.kind) {
            return Err(FormatError::new(format!(
                "line {line}: {} does not match {} on line {}",
                describe(kind),
                describe(open.kind),
                line_of(self.source, open.offset)
            )));
        }
        self.low = self.low.min(self.stack.len());
        Ok(())
    }

    fn end_line(&mut self) {
        let text = std::mem::take(&mut self.line);
        let indent = self.indent.take().unwrap_or_else(|| self.depth());

        if let Some(first) = self.stack.get_mut(self.low) {
            first.indents = true;
        }
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{text}", "\t".repeat(indent)));
        }

        self.low = self.stack.len();
        self.pending_space = false;
    }

    fn finish(self) -> String {
        let mut out = String::new();
        let mut previous: Option<&str> = None;
        let mut blank = false;

        for line in &self.lines {
            if line.is_empty() {
                blank = previous.is_some();
                continue;
            }
            let trimmed = line.trim_start_matches('\t');
            let after_open = previous.is_some_and(|p| p.ends_with(['{', '(', '[']));
            let before_close = trimmed.starts_with(['}', ')', ']']);
            if blank && !after_open && !before_close {
                out.push('\n');
            }
            out.push_str(line);
            out.push('\n');
            previous = Some(line);
            blank = false;
        }

        out
    }
}

fn describe(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::ParenOpen => "`(`",
        TokenKind::ParenClose => "`)`",
        TokenKind::BracketOpen => "`[`",
        TokenKind::BracketClose => "`]`",
        TokenKind::BraceOpen => "`{`",
        TokenKind::BraceClose => "`}`",
        _ => "token",
    }
}
