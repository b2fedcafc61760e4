use tora::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{lexer::TokenStream, parser::core::parse_expression},
    parse,
};

fn expr_of(src: &str) -> Expr {
    parse_expression(&mut TokenStream::new(src)).unwrap_or_else(|e| panic!("Parsing failed: {e}"))
}

fn statements_of(src: &str) -> Vec<Expr> {
    match parse(src) {
        Ok(Some(Expr::Prog { statements, .. })) => statements,
        Ok(other) => panic!("Expected a program, got {other:?}"),
        Err(e) => panic!("Parsing failed: {e}"),
    }
}

fn error_of(src: &str) -> ParseError {
    parse(src).expect_err("Source parsed but was expected to fail")
}

fn num(value: f64) -> Expr {
    Expr::Numeric { value, line: 1 }
}

fn var(name: &str) -> Expr {
    Expr::Variable { name: name.to_string(),
                     line: 1 }
}

fn binary(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
    Expr::Binary { op,
                   left: Box::new(left),
                   right: Box::new(right),
                   line: 1 }
}

fn negate(expr: Expr) -> Expr {
    Expr::NegativeUnary { expr: Box::new(expr),
                          line: 1 }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(expr_of("1 + 2 * 3"),
               binary(BinaryOperator::Add,
                      num(1.0),
                      binary(BinaryOperator::Mul, num(2.0), num(3.0))));
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(expr_of("1 - 2 - 3"),
               binary(BinaryOperator::Sub,
                      binary(BinaryOperator::Sub, num(1.0), num(2.0)),
                      num(3.0)));
}

#[test]
fn logical_operators_bind_loosest() {
    let expr = expr_of("a < b || c && d");

    let Expr::Binary { op: BinaryOperator::Or,
                       left,
                       right,
                       .. } = expr
    else {
        panic!("expected '||' at the root");
    };
    assert!(matches!(*left, Expr::Binary { op: BinaryOperator::Less, .. }));
    assert!(matches!(*right, Expr::Binary { op: BinaryOperator::And, .. }));
}

#[test]
fn negation_wraps_only_the_left_operand() {
    assert_eq!(expr_of("-1 + 1"),
               binary(BinaryOperator::Add, negate(num(1.0)), num(1.0)));
    assert_eq!(expr_of("-(1 + 1)"),
               negate(binary(BinaryOperator::Add, num(1.0), num(1.0))));
    assert_eq!(expr_of("-1 - 2 - 3"),
               binary(BinaryOperator::Sub,
                      binary(BinaryOperator::Sub, negate(num(1.0)), num(2.0)),
                      num(3.0)));
}

#[test]
fn assignment_has_the_lowest_precedence() {
    let Expr::Assign { target, value, .. } = expr_of("x = 1 + 2") else {
        panic!("expected an assignment");
    };
    assert_eq!(*target, var("x"));
    assert!(matches!(*value, Expr::Binary { op: BinaryOperator::Add, .. }));
}

#[test]
fn call_arguments_allow_a_trailing_comma() {
    let Expr::Call { callee, arguments, .. } = expr_of("f(1, 2,)") else {
        panic!("expected a call");
    };
    assert_eq!(*callee, var("f"));
    assert_eq!(arguments, vec![num(1.0), num(2.0)]);
}

#[test]
fn array_entries_get_positional_keys() {
    let Expr::Array { entries, .. } = expr_of(r#"["k": 1, 2]"#) else {
        panic!("expected an array literal");
    };
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].key,
               Expr::String { value: "k".to_string(),
                              line:  1, });
    assert_eq!(entries[1].key, num(1.0));
    assert_eq!(entries[1].value, num(2.0));
}

#[test]
fn if_with_else_branch() {
    let Expr::IfThenElse { condition,
                           else_branch,
                           .. } = expr_of("if a b else c")
    else {
        panic!("expected an if");
    };
    assert_eq!(*condition, var("a"));
    assert_eq!(else_branch.map(|branch| *branch), Some(var("c")));
}

#[test]
fn named_function_literal() {
    let Expr::Lambda(lambda) = expr_of("func add(a, b) a + b") else {
        panic!("expected a function literal");
    };
    assert_eq!(lambda.name.as_deref(), Some("add"));
    assert_eq!(lambda.params, vec!["a".to_string(), "b".to_string()]);
    assert!(matches!(lambda.body, Expr::Binary { op: BinaryOperator::Add, .. }));
}

#[test]
fn braced_function_body_is_a_block() {
    let Expr::Call { callee, .. } = expr_of("func(x) { x }(1)") else {
        panic!("expected the function literal to be called");
    };
    assert!(matches!(*callee, Expr::Lambda(ref lambda) if matches!(lambda.body, Expr::Prog { .. })));
}

#[test]
fn bare_return_returns_false() {
    let Expr::Prog { statements, .. } = expr_of("{ return }") else {
        panic!("expected a block");
    };
    assert_eq!(statements,
               vec![Expr::Return { value: Box::new(Expr::Boolean { value: false,
                                                                   line:  1, }),
                                   line:  1, }]);
}

#[test]
fn semicolons_are_optional() {
    assert_eq!(statements_of("a b; c").len(), 3);
    assert_eq!(parse("").unwrap(), None);
}

#[test]
fn statements_record_their_line() {
    let statements = statements_of("a = 1\n\nb = 2");

    assert_eq!(statements[0].line(), 1);
    assert_eq!(statements[1].line(), 3);
}

#[test]
fn reports_malformed_input() {
    assert!(matches!(error_of("(1 + 2"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(error_of("[1 2]"), ParseError::Expected { .. }));
    assert!(matches!(error_of(")"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(error_of("func (1) 2"), ParseError::Expected { .. }));
    assert!(matches!(error_of("x = 1 $"), ParseError::Lex(_)));
}

#[test]
fn errors_carry_line_and_column() {
    let error = error_of("x = 1\ny = [1 2]");

    assert_eq!((error.line(), error.column()), (2, 8));
}
