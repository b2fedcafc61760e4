use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token, TokenStream},
        parser::core::ParseResult,
    },
};

/// Reports whether the next token is the punctuation `c`, without consuming
/// it.
pub(in crate::interpreter::parser) fn is_punctuation(tokens: &mut TokenStream<'_>,
                                                     c: char)
                                                     -> ParseResult<bool> {
    Ok(matches!(tokens.peek()?, Some(Spanned { token: Token::Punctuation(p), .. }) if *p == c))
}

/// Consumes the next token if it is the punctuation `c`.
///
/// # Returns
/// `true` if a token was consumed.
pub(in crate::interpreter::parser) fn skip_punctuation(tokens: &mut TokenStream<'_>,
                                                       c: char)
                                                       -> ParseResult<bool> {
    if is_punctuation(tokens, c)? {
        tokens.next().transpose()?;
        return Ok(true);
    }
    Ok(false)
}

/// Consumes the next token, which must be the punctuation `c`.
///
/// # Errors
/// - `Expected` if another token is found.
/// - `UnexpectedEndOfInput` if the input ends first.
pub(in crate::interpreter::parser) fn expect_punctuation(tokens: &mut TokenStream<'_>,
                                                         c: char)
                                                         -> ParseResult<Spanned> {
    let expected = format!("punctuation '{c}'");
    let spanned = next_token(tokens, &expected)?;
    if spanned.token == Token::Punctuation(c) {
        Ok(spanned)
    } else {
        Err(expected_error(expected, &spanned))
    }
}

/// Consumes and returns the next token.
///
/// # Errors
/// `UnexpectedEndOfInput` naming `expected` if the input is exhausted.
pub(in crate::interpreter::parser) fn next_token(tokens: &mut TokenStream<'_>,
                                                 expected: &str)
                                                 -> ParseResult<Spanned> {
    match tokens.next().transpose()? {
        Some(spanned) => Ok(spanned),
        None => Err(end_of_input(tokens, expected)),
    }
}

/// Builds an end-of-input error located at the current stream position.
pub(in crate::interpreter::parser) fn end_of_input(tokens: &TokenStream<'_>,
                                                   expected: &str)
                                                   -> ParseError {
    let (line, column) = tokens.position();
    ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                       line,
                                       column }
}

/// Builds an "expected X, found Y" error located at `found`.
pub(in crate::interpreter::parser) fn expected_error(expected: String,
                                                     found: &Spanned)
                                                     -> ParseError {
    ParseError::Expected { expected,
                           found: found.token.to_string(),
                           line: found.line,
                           column: found.column }
}

/// Parses a delimited list such as `(a, b, c)`.
///
/// The opening punctuation is consumed first. Items are separated by
/// `separator`; a separator right before the closing punctuation is accepted.
/// An immediately encountered closing punctuation produces an empty list.
///
/// Grammar (simplified): `list := open (item (separator item)*)? separator? close`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening punctuation.
/// - `open`, `close`, `separator`: The delimiting punctuation characters.
/// - `parse_item`: Function used to parse each list element.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an item is followed by anything but the separator or closing token,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_delimited<T>(
    tokens: &mut TokenStream<'_>,
    (open, close, separator): (char, char, char),
    parse_item: impl Fn(&mut TokenStream<'_>) -> ParseResult<T>)
    -> ParseResult<Vec<T>> {
    expect_punctuation(tokens, open)?;

    let mut items = Vec::new();
    loop {
        if tokens.at_end()? {
            return Err(end_of_input(tokens, &format!("punctuation '{close}'")));
        }
        if skip_punctuation(tokens, close)? {
            break;
        }

        items.push(parse_item(tokens)?);

        if skip_punctuation(tokens, close)? {
            break;
        }
        let spanned = next_token(tokens, &format!("punctuation '{close}'"))?;
        if spanned.token != Token::Punctuation(separator) {
            return Err(expected_error(format!("'{separator}' or '{close}'"), &spanned));
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Variable`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier(tokens: &mut TokenStream<'_>)
                                                       -> ParseResult<String> {
    match next_token(tokens, "identifier")? {
        Spanned { token: Token::Variable(name),
                  .. } => Ok(name),
        other => Err(expected_error("identifier".to_string(), &other)),
    }
}
