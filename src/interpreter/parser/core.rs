use std::rc::Rc;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Keyword, Spanned, Token, TokenStream},
        parser::{
            binary::parse_binary,
            block::{parse_array, parse_block},
            statement::{parse_if, parse_lambda, parse_return, parse_while},
            unary::parse_negation,
            utils::{end_of_input, expect_punctuation, is_punctuation, parse_delimited,
                    skip_punctuation},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// Statements are parsed until the input is exhausted, each optionally
/// followed by `;`. The statements are collected into a single
/// [`Expr::Prog`].
///
/// Grammar: `program := (expression ";"?)*`
///
/// # Returns
/// `Some(Expr::Prog)` or `None` if the source contains no statements.
///
/// # Example
/// ```
/// use tora::{
///     ast::Expr,
///     interpreter::{lexer::TokenStream, parser::core::parse_program},
/// };
///
/// let program = parse_program(&mut TokenStream::new("a = 1; b = 2")).unwrap();
/// assert!(matches!(program, Some(Expr::Prog { ref statements, .. }) if statements.len() == 2));
///
/// assert_eq!(parse_program(&mut TokenStream::new("# nothing here")).unwrap(), None);
/// ```
pub fn parse_program(tokens: &mut TokenStream<'_>) -> ParseResult<Option<Expr>> {
    let mut statements = Vec::new();

    while !tokens.at_end()? {
        statements.push(parse_expression(tokens)?);
        skip_punctuation(tokens, ';')?;
    }

    if statements.is_empty() {
        return Ok(None);
    }
    Ok(Some(Expr::Prog { statements,
                         line: 1 }))
}

/// Parses a full expression.
///
/// An atom is parsed first, then binary operators are climbed starting from
/// the loosest precedence, and finally a call or index suffix may follow the
/// combined expression.
///
/// Grammar: `expression := suffix(binary(atom, 0))`
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let atom = parse_atom(tokens)?;
    let expr = parse_binary(tokens, atom, 0)?;
    parse_suffix(tokens, expr)
}

/// Parses a primary expression followed by an optional call or index suffix.
///
/// This is the operand parser of the binary climbing loop.
pub fn parse_atom(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let primary = parse_primary(tokens)?;
    parse_suffix(tokens, primary)
}

/// Dispatches on the leading token of a primary expression.
///
/// # Errors
/// - `UnexpectedToken` if the token cannot start an expression.
/// - `UnexpectedEndOfInput` if the input is exhausted.
fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let Some(next) = tokens.peek()?.cloned() else {
        return Err(end_of_input(tokens, "an expression"));
    };
    let Spanned { token, line, column } = next;

    match token {
        Token::Punctuation('(') => {
            tokens.next().transpose()?;
            let inner = parse_expression(tokens)?;
            expect_punctuation(tokens, ')')?;
            Ok(inner)
        },
        Token::Punctuation('{') => parse_block(tokens),
        Token::Punctuation('[') => parse_array(tokens),
        Token::Operator(op) if op == "-" => parse_negation(tokens),
        Token::Keyword(keyword) => {
            tokens.next().transpose()?;
            match keyword {
                Keyword::If => parse_if(tokens, line),
                Keyword::While => parse_while(tokens, line),
                Keyword::Func => {
                    parse_lambda(tokens, line).map(|lambda| Expr::Lambda(Rc::new(lambda)))
                },
                Keyword::Return => parse_return(tokens, line),
                Keyword::True => Ok(Expr::Boolean { value: true,
                                                    line }),
                Keyword::False => Ok(Expr::Boolean { value: false,
                                                     line }),
                Keyword::Else => Err(ParseError::UnexpectedToken { token: Token::Keyword(keyword).to_string(),
                                                                   line,
                                                                   column }),
            }
        },
        Token::Variable(name) => {
            tokens.next().transpose()?;
            Ok(Expr::Variable { name, line })
        },
        Token::Numeric(value) => {
            tokens.next().transpose()?;
            Ok(Expr::Numeric { value, line })
        },
        Token::String(value) => {
            tokens.next().transpose()?;
            Ok(Expr::String { value, line })
        },
        other => Err(ParseError::UnexpectedToken { token: other.to_string(),
                                                   line,
                                                   column }),
    }
}

/// Wraps `expr` in a call or a chain of indexes if one follows.
///
/// A `(` produces a single [`Expr::Call`]. A `[` starts one or more chained
/// `[index]` suffixes, nested left to right so that `a[0][1]` indexes the
/// result of `a[0]`.
///
/// # Example
/// ```
/// use tora::{
///     ast::Expr,
///     interpreter::{lexer::TokenStream, parser::core::parse_expression},
/// };
///
/// let expr = parse_expression(&mut TokenStream::new("grid[1][2]")).unwrap();
/// let Expr::ArrayIndex { array, .. } = expr else { panic!("expected an index") };
/// assert!(matches!(*array, Expr::ArrayIndex { .. }));
/// ```
pub fn parse_suffix(tokens: &mut TokenStream<'_>, expr: Expr) -> ParseResult<Expr> {
    let line = expr.line();

    if is_punctuation(tokens, '(')? {
        let arguments = parse_delimited(tokens, ('(', ')', ','), parse_expression)?;
        return Ok(Expr::Call { callee: Box::new(expr),
                               arguments,
                               line });
    }

    let mut expr = expr;
    while skip_punctuation(tokens, '[')? {
        let index = parse_expression(tokens)?;
        expect_punctuation(tokens, ']')?;
        expr = Expr::ArrayIndex { array: Box::new(expr),
                                  index: Box::new(index),
                                  line };
    }
    Ok(expr)
}
