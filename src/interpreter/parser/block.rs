use crate::{
    ast::{ArrayEntry, Expr},
    interpreter::{
        lexer::TokenStream,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{end_of_input, expect_punctuation, parse_delimited, skip_punctuation},
        },
    },
};

/// Parses a block expression delimited by braces.
///
/// A block consists of zero or more statements, each optionally followed by
/// `;`. Blocks do not open a new scope; they only group statements.
///
/// Grammar: `block := "{" (expression ";"?)* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// An `Expr::Prog` containing all parsed statements.
pub fn parse_block(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let line = expect_punctuation(tokens, '{')?.line;
    let mut statements = Vec::new();

    loop {
        if tokens.at_end()? {
            return Err(end_of_input(tokens, "punctuation '}'"));
        }
        if skip_punctuation(tokens, '}')? {
            break;
        }
        statements.push(parse_expression(tokens)?);
        skip_punctuation(tokens, ';')?;
    }

    Ok(Expr::Prog { statements, line })
}

/// Parses an array literal.
///
/// Entries are separated by `,`. An entry is either `value`, keyed by its
/// position among the entries, or `key : value`.
///
/// Grammar: `array := "[" (entry ("," entry)*)? ","? "]"`, `entry := expression
/// (":" expression)?`
///
/// # Example
/// ```
/// use tora::{
///     ast::Expr,
///     interpreter::{lexer::TokenStream, parser::core::parse_expression},
/// };
///
/// let expr = parse_expression(&mut TokenStream::new(r#"[10, "k": 5, 30]"#)).unwrap();
/// let Expr::Array { entries, .. } = expr else { panic!("expected an array") };
/// assert!(matches!(entries[0].key, Expr::Numeric { value: 0.0, .. }));
/// assert!(matches!(entries[1].key, Expr::String { ref value, .. } if value == "k"));
/// assert!(matches!(entries[2].key, Expr::Numeric { value: 2.0, .. }));
/// ```
pub fn parse_array(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let line = tokens.peek()?.map_or(0, |spanned| spanned.line);
    let raw = parse_delimited(tokens, ('[', ']', ','), parse_entry)?;

    let entries = raw.into_iter()
                     .enumerate()
                     .map(|(position, (first, second))| match second {
                         Some(value) => ArrayEntry { key: first, value },
                         None => ArrayEntry { key:   position_key(position, first.line()),
                                              value: first, },
                     })
                     .collect();

    Ok(Expr::Array { entries, line })
}

/// Parses `expression` or `expression : expression`.
fn parse_entry(tokens: &mut TokenStream<'_>) -> ParseResult<(Expr, Option<Expr>)> {
    let first = parse_expression(tokens)?;
    if skip_punctuation(tokens, ':')? {
        return Ok((first, Some(parse_expression(tokens)?)));
    }
    Ok((first, None))
}

#[allow(clippy::cast_precision_loss)]
fn position_key(position: usize, line: usize) -> Expr {
    Expr::Numeric { value: position as f64,
                    line }
}
