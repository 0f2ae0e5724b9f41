//! Error recovery for the parser.
//!
//! Token sets with O(1) membership and synchronization to the next statement
//! boundary after a syntax error.

use kmt_ir::{Keyword, Operator, Symbol, TokenKind};

use crate::cursor::Cursor;

/// A set of token kinds as a bitset, one bit per distinct kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u32);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u32 << tag(kind)))
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u32 << tag(kind))) != 0
    }
}

/// Bit index for a token kind. Payload variants get one bit per payload.
const fn tag(kind: TokenKind) -> u32 {
    match kind {
        TokenKind::Identifier => 0,
        TokenKind::Number => 1,
        TokenKind::String => 2,
        TokenKind::Arrow => 3,
        TokenKind::Eof => 4,
        TokenKind::Keyword(kw) => {
            5 + match kw {
                Keyword::Var => 0,
                Keyword::Out => 1,
                Keyword::Print => 2,
                Keyword::Map => 3,
                Keyword::Reduce => 4,
            }
        }
        TokenKind::Symbol(sym) => {
            10 + match sym {
                Symbol::LParen => 0,
                Symbol::RParen => 1,
                Symbol::LBrace => 2,
                Symbol::RBrace => 3,
                Symbol::Comma => 4,
                Symbol::Eq => 5,
            }
        }
        TokenKind::Operator(op) => {
            16 + match op {
                Operator::Plus => 0,
                Operator::Minus => 1,
                Operator::Star => 2,
                Operator::Slash => 3,
                Operator::Caret => 4,
            }
        }
    }
}

/// Tokens that begin a statement, plus end of input.
pub const STMT_BOUNDARY: TokenSet = TokenSet::EMPTY
    .with(TokenKind::Keyword(Keyword::Var))
    .with(TokenKind::Keyword(Keyword::Out))
    .with(TokenKind::Keyword(Keyword::Print))
    .with(TokenKind::Eof);

/// Advance until the current token is in `recovery`.
///
/// Returns the number of tokens skipped.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> usize {
    let mut skipped = 0;
    while !recovery.contains(cursor.current_kind()) && !cursor.is_at_end() {
        cursor.advance();
        skipped += 1;
    }
    skipped
}
