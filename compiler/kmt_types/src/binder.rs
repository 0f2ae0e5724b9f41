//! The binder: resolves names, parses literals, assigns types.
//!
//! Every failing step records exactly one diagnostic and returns
//! `Err(ErrorGuaranteed)`, so a dropped expression is always explained.
//! The first failure aborts the enclosing expression; operands are bound
//! left to right. Later statements still bind.

use kmt_diagnostic::{Diagnostic, ErrorCode, ErrorGuaranteed};
use kmt_ir::{BinaryOp, Expr, ExprKind, Program, SourceSpan, Stmt, StmtKind};
use kmt_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::bound::{BoundExpr, BoundExprKind, BoundProgram, BoundStmt, BoundStmtKind, Literal};
use crate::env::TypeEnv;
use crate::{NumberType, Type};

type BindResult<T> = Result<T, ErrorGuaranteed>;

#[derive(Default)]
pub(crate) struct Binder {
    diagnostics: Vec<Diagnostic>,
}

impl Binder {
    pub(crate) fn bind_program(mut self, program: &Program) -> (BoundProgram, Vec<Diagnostic>) {
        let mut globals = FxHashMap::default();
        let mut statements = Vec::with_capacity(program.statements.len());
        for stmt in &program.statements {
            if let Ok(bound) = self.bind_stmt(stmt, &mut globals) {
                statements.push(bound);
            }
        }
        (
            BoundProgram {
                statements,
                globals,
            },
            self.diagnostics,
        )
    }

    fn bind_stmt(
        &mut self,
        stmt: &Stmt,
        globals: &mut FxHashMap<String, Type>,
    ) -> BindResult<BoundStmt> {
        let kind = match &stmt.kind {
            StmtKind::Var { name, init } => {
                // Bound before insertion: the initializer cannot see its own name.
                let init = self.bind_expr(init, &TypeEnv::Globals(globals))?;
                globals.insert(name.clone(), init.ty);
                BoundStmtKind::Var {
                    name: name.clone(),
                    init,
                }
            }
            StmtKind::Out(expr) => {
                BoundStmtKind::Out(self.bind_expr(expr, &TypeEnv::Globals(globals))?)
            }
            StmtKind::Print(text) => BoundStmtKind::Print(text.clone()),
        };
        Ok(BoundStmt {
            kind,
            span: stmt.span,
        })
    }

    fn error(
        &mut self,
        code: ErrorCode,
        message: impl Into<String>,
        span: SourceSpan,
    ) -> ErrorGuaranteed {
        ErrorGuaranteed::emit(
            &mut self.diagnostics,
            Diagnostic::error(code).with_message(message).with_span(span),
        )
    }

    fn bind_expr(&mut self, expr: &Expr, env: &TypeEnv<'_>) -> BindResult<BoundExpr> {
        ensure_sufficient_stack(|| self.bind_expr_inner(expr, env))
    }

    fn bind_expr_inner(&mut self, expr: &Expr, env: &TypeEnv<'_>) -> BindResult<BoundExpr> {
        let span = expr.span;
        match &expr.kind {
            ExprKind::Number { text, is_int } => self.bind_literal(text, *is_int, span),

            ExprKind::Ident(name) => match env.lookup(name) {
                Some(ty) => Ok(BoundExpr::new(BoundExprKind::Variable(name.clone()), ty, span)),
                None => Err(self.error(
                    ErrorCode::E2001,
                    format!("Undefined variable '{name}'"),
                    span,
                )),
            },

            ExprKind::Group(inner) => self.bind_expr(inner, env),

            ExprKind::Unary { op, operand } => {
                let operand = self.bind_expr(operand, env)?;
                let ty = self.require_number(
                    &operand,
                    format!("Unary '{}' expects a number", op.symbol()),
                )?;
                Ok(BoundExpr::new(
                    BoundExprKind::Unary {
                        op: *op,
                        operand: Box::new(operand),
                    },
                    Type::Number(ty),
                    span,
                ))
            }

            ExprKind::Binary { left, op, right } => self.bind_binary(left, *op, right, span, env),

            ExprKind::Sequence { start, end } => {
                let start = self.bind_expr(start, env)?;
                let end = self.bind_expr(end, env)?;
                if start.ty != Type::INT || end.ty != Type::INT {
                    return Err(self.error(
                        ErrorCode::E2003,
                        "Sequence bounds must be integers",
                        span,
                    ));
                }
                Ok(BoundExpr::new(
                    BoundExprKind::Sequence {
                        start: Box::new(start),
                        end: Box::new(end),
                    },
                    Type::Sequence(NumberType::Int),
                    span,
                ))
            }

            ExprKind::Map {
                sequence,
                param,
                body,
            } => {
                let seq_span = sequence.span;
                let sequence = self.bind_expr(sequence, env)?;
                let Some(element) = sequence.ty.element() else {
                    return Err(self.error(ErrorCode::E2004, "map expects a sequence", seq_span));
                };
                let body = self.bind_expr(body, &TypeEnv::map_lambda(param, element))?;
                let body_ty = self.require_lambda_number(&body, "map lambda must return a number")?;
                Ok(BoundExpr::new(
                    BoundExprKind::Map {
                        sequence: Box::new(sequence),
                        param: param.clone(),
                        body: Box::new(body),
                    },
                    Type::Sequence(body_ty),
                    span,
                ))
            }

            ExprKind::Reduce {
                sequence,
                neutral,
                accumulator,
                element,
                body,
            } => {
                let seq_span = sequence.span;
                let sequence = self.bind_expr(sequence, env)?;
                let Some(element_ty) = sequence.ty.element() else {
                    return Err(self.error(ErrorCode::E2004, "reduce expects a sequence", seq_span));
                };
                let neutral = self.bind_expr(neutral, env)?;
                let Some(neutral_ty) = neutral.ty.as_number() else {
                    return Err(self.error(
                        ErrorCode::E2005,
                        "reduce neutral element must be a number",
                        neutral.span,
                    ));
                };

                let lambda_env =
                    TypeEnv::reduce_lambda(accumulator, neutral_ty, element, element_ty);
                let body = self.bind_expr(body, &lambda_env)?;
                let body_ty =
                    self.require_lambda_number(&body, "reduce lambda must return a number")?;
                let result_ty = self.reduce_result_type(neutral_ty, body_ty, body.span)?;

                Ok(BoundExpr::new(
                    BoundExprKind::Reduce {
                        sequence: Box::new(sequence),
                        neutral: Box::new(neutral),
                        accumulator: accumulator.clone(),
                        element: element.clone(),
                        body: Box::new(body),
                    },
                    Type::Number(result_ty),
                    span,
                ))
            }
        }
    }

    fn bind_binary(
        &mut self,
        left: &Expr,
        op: BinaryOp,
        right: &Expr,
        span: SourceSpan,
        env: &TypeEnv<'_>,
    ) -> BindResult<BoundExpr> {
        let left = self.bind_expr(left, env)?;
        let right = self.bind_expr(right, env)?;

        let message = format!("Operator '{op}' expects numbers");
        let left_ty = self.require_number(&left, message.clone())?;
        let right_ty = self.require_number(&right, message)?;

        let ty = if op.always_real() {
            NumberType::Double
        } else {
            left_ty.merge(right_ty)
        };
        Ok(BoundExpr::new(
            BoundExprKind::Binary {
                left: Box::new(left),
                op,
                right: Box::new(right),
            },
            Type::Number(ty),
            span,
        ))
    }

    fn bind_literal(&mut self, text: &str, is_int: bool, span: SourceSpan) -> BindResult<BoundExpr> {
        let literal = if is_int {
            match text.parse::<i64>() {
                Ok(value) => Literal::Int(value),
                Err(_) => {
                    return Err(self.error(ErrorCode::E2007, "Integer literal is out of range", span))
                }
            }
        } else {
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Literal::Double(value),
                _ => return Err(self.error(ErrorCode::E2007, "Real literal is out of range", span)),
            }
        };
        Ok(BoundExpr::new(
            BoundExprKind::Literal(literal),
            Type::Number(literal.ty()),
            span,
        ))
    }

    /// Operand check for unary and binary operators.
    fn require_number(&mut self, expr: &BoundExpr, message: String) -> BindResult<NumberType> {
        match expr.ty.as_number() {
            Some(ty) => Ok(ty),
            None => Err(self.error(ErrorCode::E2002, message, expr.span)),
        }
    }

    /// Result check for lambda bodies.
    fn require_lambda_number(&mut self, body: &BoundExpr, message: &str) -> BindResult<NumberType> {
        match body.ty.as_number() {
            Some(ty) => Ok(ty),
            None => Err(self.error(ErrorCode::E2005, message, body.span)),
        }
    }

    /// Type of a reduce: Double if either side is Double, else the shared type.
    fn reduce_result_type(
        &mut self,
        accumulator: NumberType,
        body: NumberType,
        body_span: SourceSpan,
    ) -> BindResult<NumberType> {
        if accumulator == NumberType::Double || body == NumberType::Double {
            Ok(NumberType::Double)
        } else if accumulator == body {
            Ok(accumulator)
        } else {
            Err(self.error(
                ErrorCode::E2006,
                "reduce lambda result must match accumulator type",
                body_span,
            ))
        }
    }
}
