//! Expression parsing.

use kmt_diagnostic::ErrorCode;
use kmt_ir::{BinaryOp, Expr, ExprKind, Keyword, Operator, SourceSpan, Symbol, TokenKind, UnaryOp};
use kmt_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

/// Minimum precedence for the operand of unary minus; above every binary
/// operator.
const UNARY_OPERAND_PRECEDENCE: u8 = 4;

impl Parser<'_> {
    /// Parse a full expression.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr_with(0)
    }

    /// Precedence climbing: fold binary operators binding at least as
    /// tightly as `min_precedence`.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input cannot
    /// overflow the native stack.
    fn parse_expr_with(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            let mut left = self.parse_prefix()?;

            while let Some(op) = self.match_binary_op() {
                let precedence = op.precedence();
                if precedence < min_precedence {
                    break;
                }
                self.cursor.advance();
                let next_min = if op.is_right_assoc() {
                    precedence
                } else {
                    precedence + 1
                };
                let right = self.parse_expr_with(next_min)?;
                let span = left.span.merge(right.span);
                left = Expr::new(
                    ExprKind::Binary {
                        left: Box::new(left),
                        op,
                        right: Box::new(right),
                    },
                    span,
                );
            }

            Ok(left)
        })
    }

    fn match_binary_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Operator(op) => Some(BinaryOp::from(op)),
            _ => None,
        }
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        if let Some(minus) = self.cursor.eat(TokenKind::Operator(Operator::Minus)) {
            let operand = self.parse_expr_with(UNARY_OPERAND_PRECEDENCE)?;
            let span = minus.span.merge(operand.span);
            return Ok(Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Neg,
                    operand: Box::new(operand),
                },
                span,
            ));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Number => {
                self.cursor.advance();
                let text = self.cursor.text(token);
                Ok(Expr::new(
                    ExprKind::Number {
                        text: text.to_string(),
                        is_int: !text.contains('.'),
                    },
                    token.span,
                ))
            }
            TokenKind::Identifier => {
                self.cursor.advance();
                Ok(Expr::new(
                    ExprKind::Ident(self.cursor.text(token).to_string()),
                    token.span,
                ))
            }
            TokenKind::Symbol(Symbol::LParen) => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                let close = self.cursor.expect(
                    TokenKind::Symbol(Symbol::RParen),
                    ErrorCode::E1003,
                    "Expected ')' after expression",
                )?;
                Ok(Expr::new(
                    ExprKind::Group(Box::new(inner)),
                    token.span.merge(close.span),
                ))
            }
            TokenKind::Symbol(Symbol::LBrace) => {
                self.cursor.advance();
                self.parse_sequence(token.span)
            }
            TokenKind::Keyword(Keyword::Map) => {
                self.cursor.advance();
                self.parse_map(token.span)
            }
            TokenKind::Keyword(Keyword::Reduce) => {
                self.cursor.advance();
                self.parse_reduce(token.span)
            }
            _ => Err(self.cursor.error(ErrorCode::E1002, "Expected expression")),
        }
    }

    /// `{ start, end }` after the `{`. The span ends at `end`, not the brace.
    fn parse_sequence(&mut self, open: SourceSpan) -> Result<Expr, ParseError> {
        let start = self.parse_expr()?;
        self.cursor.expect(
            TokenKind::Symbol(Symbol::Comma),
            ErrorCode::E1003,
            "Expected ',' in sequence literal",
        )?;
        let end = self.parse_expr()?;
        self.cursor.expect(
            TokenKind::Symbol(Symbol::RBrace),
            ErrorCode::E1003,
            "Expected '}' after sequence literal",
        )?;
        let span = open.merge(end.span);
        Ok(Expr::new(
            ExprKind::Sequence {
                start: Box::new(start),
                end: Box::new(end),
            },
            span,
        ))
    }

    /// `map( seq , param -> body )` after the keyword.
    fn parse_map(&mut self, keyword: SourceSpan) -> Result<Expr, ParseError> {
        self.cursor.expect(
            TokenKind::Symbol(Symbol::LParen),
            ErrorCode::E1003,
            "Expected '(' after map",
        )?;
        let sequence = self.parse_expr()?;
        self.cursor.expect(
            TokenKind::Symbol(Symbol::Comma),
            ErrorCode::E1003,
            "Expected ',' after map sequence",
        )?;
        let param = self.cursor.expect(
            TokenKind::Identifier,
            ErrorCode::E1004,
            "Expected identifier in map lambda",
        )?;
        self.cursor.expect(
            TokenKind::Arrow,
            ErrorCode::E1003,
            "Expected '->' in map lambda",
        )?;
        let body = self.parse_expr()?;
        self.cursor.expect(
            TokenKind::Symbol(Symbol::RParen),
            ErrorCode::E1003,
            "Expected ')' after map",
        )?;
        let span = keyword.merge(body.span);
        Ok(Expr::new(
            ExprKind::Map {
                sequence: Box::new(sequence),
                param: self.cursor.text(param).to_string(),
                body: Box::new(body),
            },
            span,
        ))
    }

    /// `reduce( seq , neutral , acc elem -> body )` after the keyword.
    fn parse_reduce(&mut self, keyword: SourceSpan) -> Result<Expr, ParseError> {
        self.cursor.expect(
            TokenKind::Symbol(Symbol::LParen),
            ErrorCode::E1003,
            "Expected '(' after reduce",
        )?;
        let sequence = self.parse_expr()?;
        self.cursor.expect(
            TokenKind::Symbol(Symbol::Comma),
            ErrorCode::E1003,
            "Expected ',' after reduce sequence",
        )?;
        let neutral = self.parse_expr()?;
        self.cursor.expect(
            TokenKind::Symbol(Symbol::Comma),
            ErrorCode::E1003,
            "Expected ',' after neutral element",
        )?;
        let accumulator = self.cursor.expect(
            TokenKind::Identifier,
            ErrorCode::E1004,
            "Expected accumulator identifier in reduce lambda",
        )?;
        let element = self.cursor.expect(
            TokenKind::Identifier,
            ErrorCode::E1004,
            "Expected element identifier in reduce lambda",
        )?;
        self.cursor.expect(
            TokenKind::Arrow,
            ErrorCode::E1003,
            "Expected '->' in reduce lambda",
        )?;
        let body = self.parse_expr()?;
        self.cursor.expect(
            TokenKind::Symbol(Symbol::RParen),
            ErrorCode::E1003,
            "Expected ')' after reduce",
        )?;
        let span = keyword.merge(body.span);
        Ok(Expr::new(
            ExprKind::Reduce {
                sequence: Box::new(sequence),
                neutral: Box::new(neutral),
                accumulator: self.cursor.text(accumulator).to_string(),
                element: self.cursor.text(element).to_string(),
                body: Box::new(body),
            },
            span,
        ))
    }
}
