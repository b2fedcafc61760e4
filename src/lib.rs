//! # tora
//!
//! tora is an interpreter for TORA, a small dynamically typed scripting
//! language, written in Rust. It lexes, parses and evaluates scripts with
//! support for numbers, strings, booleans, shared associative arrays,
//! first-class functions, `if`/`while` control flow and a handful of builtin
//! functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::Context, lexer::TokenStream, parser::core::parse_program,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression types for all language constructs, statements
///   included.
/// - Attaches the source line to every node for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a script.
/// Every error carries the line it was raised on so that it can be reported
/// to the user together with the file name.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Wraps the per-phase errors in a single crate-level [`error::Error`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scopes, evaluation and value
/// representations to provide a complete runtime for TORA scripts.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment, evaluator,
///   and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
///
/// This module provides the number formatting and parsing routines the
/// language's string conversions are defined in terms of.
pub mod util;

/// Parses a whole source string into a program.
///
/// # Returns
/// `Some(Expr::Prog)` holding one expression per top-level statement, or
/// `None` if the source contains no statements.
///
/// # Example
/// ```
/// use tora::{ast::Expr, parse};
///
/// let program = parse("x = 1; y = x + 2").unwrap();
/// assert!(matches!(program, Some(Expr::Prog { .. })));
///
/// assert!(parse("x = (1").is_err());
/// ```
pub fn parse(source: &str) -> Result<Option<Expr>, ParseError> {
    parse_program(&mut TokenStream::new(source))
}

/// Parses and evaluates a script, writing its output to stdout.
///
/// # Returns
/// The value of the last top-level statement, or of a top-level `return`.
///
/// # Errors
/// Returns the first lexing, parsing or evaluation error. Nothing is evaluated
/// if the script does not parse.
///
/// # Examples
/// ```
/// use tora::{interpreter::value::core::Value, run};
///
/// let result = run("x = 2 + 2; x * 10").unwrap();
/// assert_eq!(result, Some(Value::Numeric(40.0)));
///
/// // `if` conditions must be booleans.
/// assert!(run("if 1 { 2 }").is_err());
/// ```
pub fn run(source: &str) -> Result<Option<Value>, Error> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_with_output(source, &mut handle)
}

/// Parses and evaluates a script, writing its output to `output`.
///
/// # Example
/// ```
/// use tora::run_with_output;
///
/// let mut output = Vec::new();
/// run_with_output(r#"print("a"); println(1 < 2)"#, &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "atrue\n");
/// ```
pub fn run_with_output(source: &str, output: &mut dyn Write) -> Result<Option<Value>, Error> {
    let Some(program) = parse(source)? else {
        return Ok(None);
    };

    let mut context = Context::new(output);
    Ok(context.run(&program)?)
}
