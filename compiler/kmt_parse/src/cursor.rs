//! Token cursor for navigating the token stream.

use kmt_diagnostic::ErrorCode;
use kmt_ir::{Keyword, SourceSpan, Token, TokenKind, TokenList};

use crate::ParseError;

/// Position in a token list.
///
/// Invariant: the position always indexes a token, and the last token is the
/// only `Eof`, so `current` never runs off the end.
pub struct Cursor<'a> {
    tokens: &'a TokenList<'a>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList<'a>) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current position, for progress checks.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        // An empty list (never produced by the lexer) reads as Eof.
        static EOF: Token = Token::new(TokenKind::Eof, SourceSpan::DUMMY);
        let tokens: &'a TokenList<'a> = self.tokens;
        tokens.get(self.pos).unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> SourceSpan {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> SourceSpan {
        if self.pos > 0 {
            self.tokens
                .get(self.pos - 1)
                .map_or(SourceSpan::DUMMY, |t| t.span)
        } else {
            SourceSpan::DUMMY
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        self.check(TokenKind::Keyword(keyword))
    }

    /// Consume the current token. Eof is never consumed.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume a token of `kind` or fail at the current token.
    pub fn expect(
        &mut self,
        kind: TokenKind,
        code: ErrorCode,
        message: &'static str,
    ) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(code, message))
        }
    }

    /// An error located at the current token.
    #[cold]
    pub fn error(&self, code: ErrorCode, message: &'static str) -> ParseError {
        ParseError::new(code, message, self.current_span())
    }

    /// Source text of `token`.
    #[inline]
    pub fn text(&self, token: &Token) -> &'a str {
        self.tokens.text(token)
    }
}
