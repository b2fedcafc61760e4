use crate::{
    ast::{Expr, Lambda},
    interpreter::{
        lexer::{Keyword, Spanned, Token, TokenStream},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{is_punctuation, parse_delimited, parse_identifier},
        },
    },
};

/// Parses an `if` expression with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if <condition> <then_expr>
///     if <condition> <then_expr> else <else_expr>
/// ```
/// Chained `else if` needs no special handling since the else branch is an
/// ordinary expression.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
///
/// # Returns
/// An `Expr::IfThenElse` node representing the full conditional expression.
pub fn parse_if(tokens: &mut TokenStream<'_>, line: usize) -> ParseResult<Expr> {
    let condition = parse_expression(tokens)?;
    let then_branch = parse_expression(tokens)?;

    let else_branch = match tokens.peek()? {
        Some(Spanned { token: Token::Keyword(Keyword::Else),
                       .. }) => {
            tokens.next().transpose()?;
            Some(Box::new(parse_expression(tokens)?))
        },
        _ => None,
    };

    Ok(Expr::IfThenElse { condition: Box::new(condition),
                          then_branch: Box::new(then_branch),
                          else_branch,
                          line })
}

/// Parses a `while` loop.
///
/// Syntax: `while <condition> <body>`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `while` keyword.
/// - `line`: Line number of the `while` token.
pub fn parse_while(tokens: &mut TokenStream<'_>, line: usize) -> ParseResult<Expr> {
    let condition = parse_expression(tokens)?;
    let body = parse_expression(tokens)?;

    Ok(Expr::While { condition: Box::new(condition),
                     body: Box::new(body),
                     line })
}

/// Parses a function literal.
///
/// Syntax: `func [name] ( [param ("," param)*] ) <body>`
///
/// A body that opens with `{` is taken as a bare block, so a call suffix
/// written right after it, as in `func(){ ... }()`, applies to the function
/// rather than to the block.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `func` keyword.
/// - `line`: Line number of the `func` token.
///
/// # Errors
/// - `Expected` if the parameter list is not made of identifiers.
/// - Propagates any errors from body parsing.
///
/// # Example
/// ```
/// use tora::{
///     ast::Expr,
///     interpreter::{lexer::TokenStream, parser::core::parse_expression},
/// };
///
/// let expr = parse_expression(&mut TokenStream::new("func add(a, b) { a + b }")).unwrap();
/// let Expr::Lambda(lambda) = expr else { panic!("expected a lambda") };
/// assert_eq!(lambda.name.as_deref(), Some("add"));
/// assert_eq!(lambda.params, ["a", "b"]);
/// ```
pub fn parse_lambda(tokens: &mut TokenStream<'_>, line: usize) -> ParseResult<Lambda> {
    let name = match tokens.peek()? {
        Some(Spanned { token: Token::Variable(_),
                       .. }) => Some(parse_identifier(tokens)?),
        _ => None,
    };

    let params = parse_delimited(tokens, ('(', ')', ','), parse_identifier)?;

    let body = if is_punctuation(tokens, '{')? {
        parse_block(tokens)?
    } else {
        parse_expression(tokens)?
    };

    Ok(Lambda { name,
                params,
                body,
                line })
}

/// Parses a `return` expression.
///
/// A bare `return`, followed by `;`, `}` or the end of input, returns
/// `false`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `return` keyword.
/// - `line`: Line number of the `return` token.
pub fn parse_return(tokens: &mut TokenStream<'_>, line: usize) -> ParseResult<Expr> {
    let bare = match tokens.peek()? {
        None => true,
        Some(Spanned { token: Token::Punctuation(c),
                       .. }) => matches!(c, ';' | '}'),
        Some(_) => false,
    };

    let value = if bare {
        Expr::Boolean { value: false,
                        line }
    } else {
        parse_expression(tokens)?
    };

    Ok(Expr::Return { value: Box::new(value),
                      line })
}
