use crate::{
    ast::{ASSIGN_PRECEDENCE, BinaryOperator, Expr},
    interpreter::{
        lexer::{Spanned, Token, TokenStream},
        parser::core::{ParseResult, parse_atom},
    },
};

/// Operator recognized by the climbing loop.
#[derive(Clone, Copy)]
enum Climb {
    Assign,
    Binary(BinaryOperator),
}

impl Climb {
    fn from_symbol(symbol: &str) -> Option<Self> {
        if symbol == "=" {
            return Some(Self::Assign);
        }
        BinaryOperator::from_symbol(symbol).map(Self::Binary)
    }

    const fn precedence(self) -> u8 {
        match self {
            Self::Assign => ASSIGN_PRECEDENCE,
            Self::Binary(op) => op.precedence(),
        }
    }
}

/// Climbs binary operators to the right of `left`.
///
/// While the next token is an operator binding tighter than `min_precedence`,
/// it is consumed, its right operand is parsed at the operator's own
/// precedence, and the two sides are combined into a new left operand. `=`
/// combines into an [`Expr::Assign`], everything else into an
/// [`Expr::Binary`]. Operators of equal precedence therefore associate to
/// the left.
///
/// Operator runs that name no operator stop the climb; the caller then sees
/// them as the next token.
///
/// # Parameters
/// - `tokens`: Token stream positioned after `left`.
/// - `left`: Already parsed left operand.
/// - `min_precedence`: Operators must bind strictly tighter than this.
///
/// # Example
/// ```
/// use tora::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::TokenStream, parser::core::parse_expression},
/// };
///
/// let expr = parse_expression(&mut TokenStream::new("1 + 2 * 3")).unwrap();
/// let Expr::Binary { op, right, .. } = expr else { panic!("expected a binary node") };
/// assert_eq!(op, BinaryOperator::Add);
/// assert!(matches!(*right, Expr::Binary { op: BinaryOperator::Mul, .. }));
/// ```
pub fn parse_binary(tokens: &mut TokenStream<'_>,
                    left: Expr,
                    min_precedence: u8)
                    -> ParseResult<Expr> {
    let operator = match tokens.peek()? {
        Some(Spanned { token: Token::Operator(symbol),
                       .. }) => Climb::from_symbol(symbol),
        _ => None,
    };
    let Some(operator) = operator else {
        return Ok(left);
    };
    if operator.precedence() <= min_precedence {
        return Ok(left);
    }

    let line = tokens.next().transpose()?.map_or(left.line(), |spanned| spanned.line);
    let right_atom = parse_atom(tokens)?;
    let right = parse_binary(tokens, right_atom, operator.precedence())?;

    let combined = match operator {
        Climb::Assign => Expr::Assign { target: Box::new(left),
                                        value: Box::new(right),
                                        line },
        Climb::Binary(op) => Expr::Binary { op,
                                            left: Box::new(left),
                                            right: Box::new(right),
                                            line },
    };

    parse_binary(tokens, combined, min_precedence)
}
