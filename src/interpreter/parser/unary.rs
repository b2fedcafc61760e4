use crate::{
    ast::Expr,
    interpreter::{
        lexer::TokenStream,
        parser::{
            binary::parse_binary,
            core::{ParseResult, parse_atom, parse_suffix},
        },
    },
};

/// Parses a leading `-` and the expression it prefixes.
///
/// The negation binds to the operand's first atom only, and binary operators
/// after it are climbed with the negated atom as their left-most operand.
/// `-1 + 1` therefore means `(-1) + 1`, while an explicitly parenthesized
/// operand such as `-(1 + 1)` is negated as a whole. The climb takes the rest
/// of the expression, so `2 * -3 + 1` multiplies by `(-3) + 1`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `-` operator.
///
/// # Example
/// ```
/// use tora::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::TokenStream, parser::core::parse_expression},
/// };
///
/// let expr = parse_expression(&mut TokenStream::new("-1 + 1")).unwrap();
/// let Expr::Binary { op, left, .. } = expr else { panic!("expected a binary node") };
/// assert_eq!(op, BinaryOperator::Add);
/// assert!(matches!(*left, Expr::NegativeUnary { .. }));
///
/// let expr = parse_expression(&mut TokenStream::new("-(1 + 1)")).unwrap();
/// assert!(matches!(expr, Expr::NegativeUnary { .. }));
/// ```
pub fn parse_negation(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let line = tokens.next().transpose()?.map_or(0, |spanned| spanned.line);
    let operand = parse_atom(tokens)?;
    let negated = Expr::NegativeUnary { expr: Box::new(operand),
                                        line };

    let expr = parse_binary(tokens, negated, 0)?;
    parse_suffix(tokens, expr)
}
