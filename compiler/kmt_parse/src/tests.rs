use super::*;
use kmt_diagnostic::ErrorCode;
use kmt_ir::{Expr, ExprKind, SourceSpan, StmtKind};
use pretty_assertions::assert_eq;

fn parse_source(source: &str) -> ParseOutput {
    let lexed = kmt_lexer::lex(source);
    assert!(lexed.diagnostics.is_empty(), "{:?}", lexed.diagnostics);
    parse(&lexed.tokens)
}

/// Compact rendering of an expression tree for structural assertions.
fn sexp(expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::Number { text, .. } => text.clone(),
        ExprKind::Ident(name) => name.clone(),
        ExprKind::Unary { operand, .. } => format!("(neg {})", sexp(operand)),
        ExprKind::Group(inner) => format!("(group {})", sexp(inner)),
        ExprKind::Binary { left, op, right } => {
            format!("({op} {} {})", sexp(left), sexp(right))
        }
        ExprKind::Sequence { start, end } => format!("{{{} {}}}", sexp(start), sexp(end)),
        ExprKind::Map {
            sequence,
            param,
            body,
        } => format!("(map {} {param} {})", sexp(sequence), sexp(body)),
        ExprKind::Reduce {
            sequence,
            neutral,
            accumulator,
            element,
            body,
        } => format!(
            "(reduce {} {} {accumulator} {element} {})",
            sexp(sequence),
            sexp(neutral),
            sexp(body)
        ),
    }
}

fn out_expr(source: &str) -> Expr {
    let output = parse_source(source);
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
    match output.program.statements.into_iter().next().map(|s| s.kind) {
        Some(StmtKind::Out(expr)) => expr,
        other => panic!("expected out statement, got {other:?}"),
    }
}

fn messages(source: &str) -> Vec<String> {
    parse_source(source)
        .diagnostics
        .into_iter()
        .map(|d| d.message)
        .collect()
}

// --- Precedence and associativity ---

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(sexp(&out_expr("out 1 + 2 * 3")), "(+ 1 (* 2 3))");
    assert_eq!(sexp(&out_expr("out 1 * 2 + 3")), "(+ (* 1 2) 3)");
}

#[test]
fn test_left_associative() {
    assert_eq!(sexp(&out_expr("out 1 - 2 - 3")), "(- (- 1 2) 3)");
    assert_eq!(sexp(&out_expr("out 8 / 4 / 2")), "(/ (/ 8 4) 2)");
}

#[test]
fn test_pow_is_right_associative() {
    assert_eq!(sexp(&out_expr("out 2 ^ 3 ^ 2")), "(^ 2 (^ 3 2))");
    assert_eq!(sexp(&out_expr("out 2 * 3 ^ 2")), "(* 2 (^ 3 2))");
}

#[test]
fn test_unary_binds_tighter_than_pow() {
    assert_eq!(sexp(&out_expr("out -a ^ b")), "(^ (neg a) b)");
    assert_eq!(sexp(&out_expr("out - -1")), "(neg (neg 1))");
    assert_eq!(sexp(&out_expr("out 1 - -2")), "(- 1 (neg 2))");
}

#[test]
fn test_groups_override_precedence() {
    assert_eq!(
        sexp(&out_expr("out (1 + 2) * 3")),
        "(* (group (+ 1 2)) 3)"
    );
}

#[test]
fn test_number_literal_kind() {
    let expr = out_expr("out 2.50");
    assert_eq!(
        expr.kind,
        ExprKind::Number {
            text: "2.50".into(),
            is_int: false
        }
    );
    let expr = out_expr("out 7");
    assert_eq!(
        expr.kind,
        ExprKind::Number {
            text: "7".into(),
            is_int: true
        }
    );
}

#[test]
fn test_map_and_reduce() {
    assert_eq!(
        sexp(&out_expr("out map({1, n}, i -> i * 2)")),
        "(map {1 n} i (* i 2))"
    );
    assert_eq!(
        sexp(&out_expr("out reduce(s, 0, acc x -> acc + x)")),
        "(reduce s 0 acc x (+ acc x))"
    );
}

// --- Statements ---

#[test]
fn test_statements_in_order() {
    let output = parse_source("var x = 1\nout x\nprint \"done\\n\"");
    assert!(output.diagnostics.is_empty());
    let kinds: Vec<_> = output.program.statements.iter().map(|s| &s.kind).collect();
    assert!(matches!(kinds[0], StmtKind::Var { name, .. } if name == "x"));
    assert!(matches!(kinds[1], StmtKind::Out(_)));
    assert_eq!(kinds[2], &StmtKind::Print("done\n".to_string()));
}

#[test]
fn test_empty_program() {
    let output = parse_source("  \n ");
    assert!(output.program.is_empty());
    assert!(!output.has_errors());
}

// --- Spans ---

#[test]
fn test_statement_spans() {
    let output = parse_source("var abc = 1 + 2\nout 3");
    let spans: Vec<_> = output.program.statements.iter().map(|s| s.span).collect();
    // var: name..expr
    assert_eq!(spans[0], SourceSpan::new(4, 11, 1, 5));
    // out: keyword..expr
    assert_eq!(spans[1], SourceSpan::new(16, 5, 2, 1));
}

#[test]
fn test_print_span_is_string_token() {
    let output = parse_source("print \"hi\"");
    assert_eq!(output.program.statements[0].span, SourceSpan::new(6, 4, 1, 7));
}

#[test]
fn test_expression_spans() {
    // group covers the parentheses
    assert_eq!(out_expr("out (1)").span, SourceSpan::new(4, 3, 1, 5));
    // sequence ends at the end expression, not the brace
    assert_eq!(out_expr("out {1, 3}").span, SourceSpan::new(4, 5, 1, 5));
    // map ends at the body
    assert_eq!(
        out_expr("out map(s, i -> i)").span,
        SourceSpan::new(4, 13, 1, 5)
    );
    // unary starts at the minus
    assert_eq!(out_expr("out -x").span, SourceSpan::new(4, 2, 1, 5));
}

// --- Errors ---

#[test]
fn test_statement_errors() {
    assert_eq!(messages("1"), vec!["Expected statement"]);
    assert_eq!(messages("var 1 = 2"), vec!["Expected identifier after 'var'"]);
    assert_eq!(messages("var x 2"), vec!["Expected '=' after variable name"]);
    assert_eq!(messages("print 1"), vec!["Expected string literal after 'print'"]);
    assert_eq!(messages("out"), vec!["Expected expression"]);
}

#[test]
fn test_expression_errors() {
    assert_eq!(messages("out (1"), vec!["Expected ')' after expression"]);
    assert_eq!(messages("out {1 2}"), vec!["Expected ',' in sequence literal"]);
    assert_eq!(messages("out {1, 2"), vec!["Expected '}' after sequence literal"]);
}

#[test]
fn test_map_errors() {
    assert_eq!(messages("out map s"), vec!["Expected '(' after map"]);
    assert_eq!(messages("out map(s i -> i)"), vec!["Expected ',' after map sequence"]);
    assert_eq!(messages("out map(s, 1 -> i)"), vec!["Expected identifier in map lambda"]);
    assert_eq!(messages("out map(s, i i)"), vec!["Expected '->' in map lambda"]);
    assert_eq!(messages("out map(s, i -> i"), vec!["Expected ')' after map"]);
}

#[test]
fn test_reduce_errors() {
    assert_eq!(messages("out reduce s"), vec!["Expected '(' after reduce"]);
    assert_eq!(
        messages("out reduce(s 0, a b -> a)"),
        vec!["Expected ',' after reduce sequence"]
    );
    assert_eq!(
        messages("out reduce(s, 0 a b -> a)"),
        vec!["Expected ',' after neutral element"]
    );
    assert_eq!(
        messages("out reduce(s, 0, 1 b -> a)"),
        vec!["Expected accumulator identifier in reduce lambda"]
    );
    assert_eq!(
        messages("out reduce(s, 0, a -> a)"),
        vec!["Expected element identifier in reduce lambda"]
    );
    assert_eq!(
        messages("out reduce(s, 0, a b a)"),
        vec!["Expected '->' in reduce lambda"]
    );
    assert_eq!(
        messages("out reduce(s, 0, a b -> a"),
        vec!["Expected ')' after reduce"]
    );
}

#[test]
fn test_error_located_at_current_token() {
    let output = parse_source("var x = 1 +\nout 2");
    assert_eq!(output.diagnostics.len(), 1);
    let diag = &output.diagnostics[0];
    assert_eq!(diag.code, ErrorCode::E1002);
    // the `out` keyword on line 2
    assert_eq!(diag.span, SourceSpan::new(12, 3, 2, 1));
}

#[test]
fn test_error_at_eof() {
    let output = parse_source("out 1 *");
    assert_eq!(output.diagnostics[0].span, SourceSpan::point(7, 1, 8));
}

#[test]
fn test_error_codes() {
    let codes = |source: &str| -> Vec<ErrorCode> {
        parse_source(source)
            .diagnostics
            .into_iter()
            .map(|d| d.code)
            .collect()
    };
    assert_eq!(codes("1"), vec![ErrorCode::E1001]);
    assert_eq!(codes("out )"), vec![ErrorCode::E1002]);
    assert_eq!(codes("out (1"), vec![ErrorCode::E1003]);
    assert_eq!(codes("var = 1"), vec![ErrorCode::E1004]);
    assert_eq!(codes("print x"), vec![ErrorCode::E1005]);
}

// --- Recovery ---

#[test]
fn test_recovers_at_next_statement() {
    let output = parse_source("var = 1 2 3\nout 2\nout (\nprint \"ok\"");
    assert_eq!(
        output
            .diagnostics
            .iter()
            .map(|d| d.message.as_str())
            .collect::<Vec<_>>(),
        vec!["Expected identifier after 'var'", "Expected expression"]
    );
    assert_eq!(output.program.statements.len(), 2);
    assert!(matches!(output.program.statements[0].kind, StmtKind::Out(_)));
    assert!(matches!(
        output.program.statements[1].kind,
        StmtKind::Print(_)
    ));
}

#[test]
fn test_one_diagnostic_per_broken_statement() {
    let output = parse_source("out ) ) )\nout 1");
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.program.statements.len(), 1);
}

#[test]
fn test_keyword_mid_expression_starts_new_statement() {
    // The failed `out` stops at the second `out`, which then parses.
    let output = parse_source("out out 1");
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(output.program.statements.len(), 1);
}

// --- Stack safety ---

#[test]
fn test_deeply_nested_groups() {
    let depth = 2_000;
    let source = format!("out {}1{}", "(".repeat(depth), ")".repeat(depth));
    let output = parse_source(&source);
    assert!(output.diagnostics.is_empty());
    assert_eq!(output.program.statements.len(), 1);
}

#[test]
fn test_long_negation_chain() {
    let depth = 2_000;
    let source = format!("out {}1", "-".repeat(depth));
    let output = parse_source(&source);
    assert!(output.diagnostics.is_empty());
}
