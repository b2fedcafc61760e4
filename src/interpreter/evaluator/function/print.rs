use std::io::Write;

use crate::{
    error::InterpreterError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
};

/// Writes a string to the output without a trailing newline.
///
/// Accepts exactly one argument. Arguments that are not strings are ignored
/// and nothing is written.
///
/// # Returns
/// No value.
///
/// # Example
/// ```
/// use tora::interpreter::{evaluator::function::print::print, value::core::Value};
///
/// let mut out = Vec::new();
/// print(&[Value::from("hi")], &mut out, 1).unwrap();
/// print(&[Value::Numeric(1.0)], &mut out, 1).unwrap();
///
/// assert_eq!(out, b"hi");
/// ```
pub fn print(args: &[Value], out: &mut dyn Write, line: usize) -> EvalResult<Option<Value>> {
    check_arity("print", args, 1, line)?;

    if let Value::String(s) = &args[0] {
        write!(out, "{s}").map_err(|e| output_error(&e, line))?;
    }
    Ok(None)
}

/// Writes the string representation of any value followed by a newline.
///
/// # Returns
/// No value.
///
/// # Example
/// ```
/// use tora::interpreter::{evaluator::function::print::println, value::core::Value};
///
/// let mut out = Vec::new();
/// println(&[Value::Numeric(1.5)], &mut out, 1).unwrap();
/// println(&[Value::Boolean(true)], &mut out, 1).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "1.500000\ntrue\n");
/// ```
pub fn println(args: &[Value], out: &mut dyn Write, line: usize) -> EvalResult<Option<Value>> {
    check_arity("println", args, 1, line)?;

    writeln!(out, "{}", args[0]).map_err(|e| output_error(&e, line))?;
    Ok(None)
}

fn output_error(e: &std::io::Error, line: usize) -> InterpreterError {
    InterpreterError::Output { details: e.to_string(),
                               line }
}
