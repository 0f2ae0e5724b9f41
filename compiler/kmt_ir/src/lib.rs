//! kmt IR - shared front-end data structures.
//!
//! This crate holds everything the later stages agree on:
//! - [`SourceSpan`]: byte range plus the 1-based line/column of its start
//! - [`Token`], [`TokenKind`] and [`TokenList`]: lexer output
//! - [`ast`]: the untyped syntax tree produced by the parser
//!
//! All types are plain owned values with no back-references, so a finished
//! tree is `Send + Sync` and can be read from many threads at once.

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;

pub use ast::{BinaryOp, Expr, ExprKind, Program, Stmt, StmtKind, UnaryOp};
pub use span::SourceSpan;
pub use token::{Keyword, Operator, Symbol, Token, TokenKind, TokenList};
