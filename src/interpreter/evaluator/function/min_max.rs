use crate::interpreter::{
    evaluator::{core::EvalResult, utils::check_arity},
    value::core::Value,
};

/// Computes the minimum or maximum of two numeric values.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`. As with C's `fmin`/`fmax`, a NaN argument is ignored in favor of
/// the other one. Any non-numeric argument produces an `ExpectedNumber` error.
///
/// # Parameters
/// - `name`: Either `"min"` or `"max"`.
/// - `args`: Slice containing exactly two arguments.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use tora::interpreter::{evaluator::function::min_max::min_max, value::core::Value};
///
/// let r = min_max("min", &[Value::Numeric(3.0), Value::Numeric(7.0)], 1).unwrap();
/// assert_eq!(r, Value::Numeric(3.0));
///
/// let r = min_max("max", &[Value::Numeric(f64::NAN), Value::Numeric(1.0)], 1).unwrap();
/// assert_eq!(r, Value::Numeric(1.0));
/// ```
pub fn min_max(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity(name, args, 2, line)?;

    let left = args[0].as_numeric(line)?;
    let right = args[1].as_numeric(line)?;

    let value = if name == "min" {
        libm::fmin(left, right)
    } else {
        libm::fmax(left, right)
    };

    Ok(Value::Numeric(value))
}
