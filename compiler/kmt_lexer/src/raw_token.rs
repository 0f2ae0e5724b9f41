//! Raw Token Definition
//!
//! The logos-derived tokenizer output, before line/column tracking and
//! conversion to [`kmt_ir::TokenKind`].

use logos::{Lexer, Logos};

/// Whether a string literal found its closing quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StringEnd {
    Terminated,
    Unterminated,
}

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"\s+")]
pub(crate) enum RawToken {
    #[token("var")]
    Var,
    #[token("out")]
    Out,
    #[token("print")]
    Print,
    #[token("map")]
    Map,
    #[token("reduce")]
    Reduce,

    #[token("->")]
    Arrow,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token("=")]
    Eq,

    /// Digits with at most one `.`; `1.` is a number, `.5` is not.
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,

    #[token("\"", lex_string)]
    String(StringEnd),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Scan a string body after the opening quote.
///
/// A backslash consumes the following character, whatever it is. Without a
/// closing quote the token runs to end of input.
fn lex_string(lex: &mut Lexer<'_, RawToken>) -> StringEnd {
    let rest = lex.remainder();
    let mut chars = rest.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                if chars.next().is_none() {
                    break;
                }
            }
            '"' => {
                lex.bump(i + 1);
                return StringEnd::Terminated;
            }
            _ => {}
        }
    }
    lex.bump(rest.len());
    StringEnd::Unterminated
}
