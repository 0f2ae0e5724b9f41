//! Grammar rules.
//!
//! ```text
//! program   := statement*
//! statement := "var" IDENT "=" expr | "out" expr | "print" STRING
//! expr      := prefix (BINOP expr)*          precedence climbing
//! prefix    := "-" expr@4 | primary
//! primary   := NUMBER | IDENT | "(" expr ")" | "{" expr "," expr "}"
//!            | "map" "(" expr "," IDENT "->" expr ")"
//!            | "reduce" "(" expr "," expr "," IDENT IDENT "->" expr ")"
//! ```
//!
//! Binary precedence: `+ -` 1, `* /` 2, `^` 3. Only `^` is right
//! associative. The operand of unary minus is parsed at precedence 4, so it
//! binds tighter than every binary operator: `-a^b` is `(-a)^b`.

mod expr;
mod stmt;
