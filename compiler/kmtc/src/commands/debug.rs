//! Debug commands: `lex` and `parse` for inspecting the front end.

use kmt_ir::{Expr, ExprKind, Stmt, StmtKind};

use super::{read_file, CliError};

/// Print the token stream of a file.
pub fn lex_file(path: &str) -> Result<(), CliError> {
    let source = read_file(path)?;
    let lexed = kmt_lexer::lex(&source);

    println!("Tokens for '{}' ({} tokens):", path, lexed.tokens.len());
    for token in &lexed.tokens {
        println!(
            "  {} {:?} @ {}",
            token.kind,
            lexed.tokens.text(token),
            token.span
        );
    }
    print_errors(&lexed.diagnostics);
    Ok(())
}

/// Print the parsed statements of a file as s-expressions.
pub fn parse_file(path: &str) -> Result<(), CliError> {
    let source = read_file(path)?;
    let lexed = kmt_lexer::lex(&source);
    let parsed = kmt_parse::parse(&lexed.tokens);

    println!("Parse result for '{path}':");
    println!("  Statements: {}", parsed.program.statements.len());
    println!("  Errors: {}", parsed.diagnostics.len());
    if !parsed.program.is_empty() {
        println!();
        for stmt in &parsed.program.statements {
            println!("  {} @ {}", render_stmt(stmt), stmt.span);
        }
    }
    print_errors(&parsed.diagnostics);
    Ok(())
}

fn print_errors(diagnostics: &[kmt_diagnostic::Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    println!();
    println!("Errors:");
    for diag in diagnostics {
        println!("  {}: {}", diag.span, diag.message);
    }
}

pub(crate) fn render_stmt(stmt: &Stmt) -> String {
    match &stmt.kind {
        StmtKind::Var { name, init } => format!("(var {name} {})", render_expr(init)),
        StmtKind::Out(expr) => format!("(out {})", render_expr(expr)),
        StmtKind::Print(text) => format!("(print {text:?})"),
    }
}

pub(crate) fn render_expr(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Number { text, .. } => text.clone(),
        ExprKind::Ident(name) => name.clone(),
        ExprKind::Unary { op, operand } => format!("({} {})", op.symbol(), render_expr(operand)),
        ExprKind::Group(inner) => render_expr(inner),
        ExprKind::Binary { left, op, right } => {
            format!("({op} {} {})", render_expr(left), render_expr(right))
        }
        ExprKind::Sequence { start, end } => {
            format!("{{{} {}}}", render_expr(start), render_expr(end))
        }
        ExprKind::Map {
            sequence,
            param,
            body,
        } => format!(
            "(map {} ({param}) {})",
            render_expr(sequence),
            render_expr(body)
        ),
        ExprKind::Reduce {
            sequence,
            neutral,
            accumulator,
            element,
            body,
        } => format!(
            "(reduce {} {} ({accumulator} {element}) {})",
            render_expr(sequence),
            render_expr(neutral),
            render_expr(body)
        ),
    }
}
