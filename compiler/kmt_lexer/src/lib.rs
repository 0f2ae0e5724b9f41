//! Lexer for kmt using logos.
//!
//! [`lex`] makes one pass over the source and returns every token it could
//! recognise together with the problems it found. Lexing never stops early:
//! an unexpected character is reported and skipped, an unterminated string
//! still becomes a `String` token running to end of input.
//!
//! The token stream always ends in exactly one zero-length `Eof` token, which
//! is what the parser and any highlighter rely on.

mod lex_error;
mod line_tracker;
mod raw_token;

use kmt_diagnostic::Diagnostic;
use kmt_ir::{Keyword, Operator, SourceSpan, Symbol, Token, TokenKind, TokenList};
use logos::Logos;

pub use lex_error::{LexError, LexErrorKind};

use line_tracker::LineTracker;
use raw_token::{RawToken, StringEnd};

/// Tokens plus lexical diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct LexOutput<'src> {
    pub tokens: TokenList<'src>,
    pub diagnostics: Vec<Diagnostic>,
}

impl LexOutput<'_> {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Lex source code into a [`TokenList`].
pub fn lex(source: &str) -> LexOutput<'_> {
    let mut tokens = TokenList::new(source);
    let mut errors = Vec::new();

    if u32::try_from(source.len()).is_err() {
        errors.push(LexError::new(LexErrorKind::SourceTooLarge, SourceSpan::DUMMY));
        tokens.push(Token::new(TokenKind::Eof, SourceSpan::DUMMY));
        return finish(tokens, &errors);
    }

    let mut positions = LineTracker::new(source);
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let range = logos.span();
        let (line, column) = positions.advance_to(range.start);
        let span = SourceSpan::new(
            range.start as u32,
            (range.end - range.start) as u32,
            line,
            column,
        );

        match token_result {
            Ok(RawToken::String(end)) => {
                if end == StringEnd::Unterminated {
                    errors.push(LexError::new(LexErrorKind::UnterminatedString, span));
                }
                tokens.push(Token::new(TokenKind::String, span));
            }
            Ok(raw) => tokens.push(Token::new(convert_token(raw), span)),
            Err(()) => {
                // Spans that split a multi-byte character belong to an
                // error already reported at the character's first byte.
                if let Some(c) = source.get(range.start..).and_then(|s| s.chars().next()) {
                    let span = SourceSpan::new(span.start, c.len_utf8() as u32, line, column);
                    errors.push(LexError::new(LexErrorKind::UnexpectedCharacter(c), span));
                }
            }
        }
    }

    let (line, column) = positions.advance_to(source.len());
    tokens.push(Token::new(
        TokenKind::Eof,
        SourceSpan::point(source.len() as u32, line, column),
    ));

    finish(tokens, &errors)
}

fn finish<'src>(tokens: TokenList<'src>, errors: &[LexError]) -> LexOutput<'src> {
    LexOutput {
        tokens,
        diagnostics: errors.iter().map(LexError::to_diagnostic).collect(),
    }
}

/// Convert a raw token to a [`TokenKind`]. Strings are handled by the caller.
fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Var => TokenKind::Keyword(Keyword::Var),
        RawToken::Out => TokenKind::Keyword(Keyword::Out),
        RawToken::Print => TokenKind::Keyword(Keyword::Print),
        RawToken::Map => TokenKind::Keyword(Keyword::Map),
        RawToken::Reduce => TokenKind::Keyword(Keyword::Reduce),

        RawToken::Arrow => TokenKind::Arrow,

        RawToken::Plus => TokenKind::Operator(Operator::Plus),
        RawToken::Minus => TokenKind::Operator(Operator::Minus),
        RawToken::Star => TokenKind::Operator(Operator::Star),
        RawToken::Slash => TokenKind::Operator(Operator::Slash),
        RawToken::Caret => TokenKind::Operator(Operator::Caret),

        RawToken::LParen => TokenKind::Symbol(Symbol::LParen),
        RawToken::RParen => TokenKind::Symbol(Symbol::RParen),
        RawToken::LBrace => TokenKind::Symbol(Symbol::LBrace),
        RawToken::RBrace => TokenKind::Symbol(Symbol::RBrace),
        RawToken::Comma => TokenKind::Symbol(Symbol::Comma),
        RawToken::Eq => TokenKind::Symbol(Symbol::Eq),

        RawToken::Number => TokenKind::Number,
        RawToken::String(_) => TokenKind::String,
        RawToken::Ident => TokenKind::Identifier,
    }
}
