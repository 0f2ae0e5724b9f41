//! Untyped syntax tree.
//!
//! Produced by the parser, consumed by the binder. Every node owns its span.
//! The tree holds no references into the source, so it outlives the token
//! list it was built from and is `Send + Sync`.

use std::fmt;

use crate::{Operator, SourceSpan};

/// Binary arithmetic operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    /// Binding strength. Higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
            BinaryOp::Pow => 3,
        }
    }

    pub const fn is_right_assoc(self) -> bool {
        matches!(self, BinaryOp::Pow)
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }

    /// `/` and `^` always produce a real.
    pub const fn always_real(self) -> bool {
        matches!(self, BinaryOp::Div | BinaryOp::Pow)
    }
}

impl From<Operator> for BinaryOp {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Plus => BinaryOp::Add,
            Operator::Minus => BinaryOp::Sub,
            Operator::Star => BinaryOp::Mul,
            Operator::Slash => BinaryOp::Div,
            Operator::Caret => BinaryOp::Pow,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Neg,
}

impl UnaryOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: SourceSpan,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: SourceSpan) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// Numeric literal as written. `is_int` is false when the text has a `.`.
    Number { text: String, is_int: bool },
    Ident(String),
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// `( expr )`, kept so spans cover the parentheses.
    Group(Box<Expr>),
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    /// `{ start, end }`, inclusive on both ends.
    Sequence { start: Box<Expr>, end: Box<Expr> },
    /// `map(sequence, param -> body)`
    Map {
        sequence: Box<Expr>,
        param: String,
        body: Box<Expr>,
    },
    /// `reduce(sequence, neutral, accumulator element -> body)`
    Reduce {
        sequence: Box<Expr>,
        neutral: Box<Expr>,
        accumulator: String,
        element: String,
        body: Box<Expr>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: SourceSpan,
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: SourceSpan) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `var name = init`
    Var { name: String, init: Expr },
    /// `out expr`
    Out(Expr),
    /// `print "text"`, already unescaped.
    Print(String),
}

/// A parsed source file: statements in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
