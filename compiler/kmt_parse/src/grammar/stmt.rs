//! Statement parsing.

use kmt_diagnostic::ErrorCode;
use kmt_ir::{Keyword, Stmt, StmtKind, Symbol, TokenKind};

use crate::escape::unescape_string;
use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Keyword(Keyword::Var) => {
                self.cursor.advance();
                self.parse_var()
            }
            TokenKind::Keyword(Keyword::Out) => {
                let keyword = self.cursor.advance().span;
                let expr = self.parse_expr()?;
                let span = keyword.merge(expr.span);
                Ok(Stmt::new(StmtKind::Out(expr), span))
            }
            TokenKind::Keyword(Keyword::Print) => {
                self.cursor.advance();
                let token = self.cursor.expect(
                    TokenKind::String,
                    ErrorCode::E1005,
                    "Expected string literal after 'print'",
                )?;
                let text = unescape_string(self.cursor.text(token));
                Ok(Stmt::new(StmtKind::Print(text), token.span))
            }
            _ => Err(self.cursor.error(ErrorCode::E1001, "Expected statement")),
        }
    }

    /// `var` already consumed. The statement span starts at the name.
    fn parse_var(&mut self) -> Result<Stmt, ParseError> {
        let name = self.cursor.expect(
            TokenKind::Identifier,
            ErrorCode::E1004,
            "Expected identifier after 'var'",
        )?;
        self.cursor.expect(
            TokenKind::Symbol(Symbol::Eq),
            ErrorCode::E1003,
            "Expected '=' after variable name",
        )?;
        let init = self.parse_expr()?;
        let span = name.span.merge(init.span);
        Ok(Stmt::new(
            StmtKind::Var {
                name: self.cursor.text(name).to_string(),
                init,
            },
            span,
        ))
    }
}
