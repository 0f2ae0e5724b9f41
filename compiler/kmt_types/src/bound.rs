//! Typed tree produced by the binder.
//!
//! Mirrors [`kmt_ir::ast`] except that every expression carries its [`Type`],
//! literals are already parsed, and parenthesised groups are gone: a bound
//! group is just its inner expression.

use kmt_ir::{BinaryOp, SourceSpan, UnaryOp};
use rustc_hash::FxHashMap;

use crate::{NumberType, Type};

/// A parsed numeric literal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Literal {
    Int(i64),
    Double(f64),
}

impl Literal {
    pub fn ty(self) -> NumberType {
        match self {
            Literal::Int(_) => NumberType::Int,
            Literal::Double(_) => NumberType::Double,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoundExpr {
    pub kind: BoundExprKind,
    pub ty: Type,
    pub span: SourceSpan,
}

impl BoundExpr {
    pub fn new(kind: BoundExprKind, ty: Type, span: SourceSpan) -> Self {
        BoundExpr { kind, ty, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BoundExprKind {
    Literal(Literal),
    Variable(String),
    Unary {
        op: UnaryOp,
        operand: Box<BoundExpr>,
    },
    Binary {
        left: Box<BoundExpr>,
        op: BinaryOp,
        right: Box<BoundExpr>,
    },
    Sequence {
        start: Box<BoundExpr>,
        end: Box<BoundExpr>,
    },
    Map {
        sequence: Box<BoundExpr>,
        param: String,
        body: Box<BoundExpr>,
    },
    Reduce {
        sequence: Box<BoundExpr>,
        neutral: Box<BoundExpr>,
        accumulator: String,
        element: String,
        body: Box<BoundExpr>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoundStmt {
    pub kind: BoundStmtKind,
    pub span: SourceSpan,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BoundStmtKind {
    Var { name: String, init: BoundExpr },
    Out(BoundExpr),
    Print(String),
}

/// Statements that bound successfully, plus the final type of every global.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundProgram {
    pub statements: Vec<BoundStmt>,
    pub globals: FxHashMap<String, Type>,
}
