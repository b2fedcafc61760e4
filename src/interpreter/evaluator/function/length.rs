use crate::{
    error::InterpreterError,
    interpreter::{
        evaluator::{core::EvalResult, utils::check_arity},
        value::core::Value,
    },
    util::num::count_to_f64_checked,
};

/// Returns the number of key/value pairs in an array.
///
/// # Errors
/// `ExpectedArray` if the argument is not an array.
///
/// # Example
/// ```
/// use tora::interpreter::{
///     evaluator::function::length::length,
///     value::{array::ArrayValue, core::Value},
/// };
///
/// let mut array = ArrayValue::default();
/// array.push_pair(Value::Numeric(0.0), Value::from("a"));
///
/// assert_eq!(length(&[array.into()], 1).unwrap(), Value::Numeric(1.0));
/// assert!(length(&[Value::from("abc")], 1).is_err());
/// ```
pub fn length(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("length", args, 1, line)?;

    let count = args[0].as_array(line)?.borrow().len();
    let count = count_to_f64_checked(count,
                                     InterpreterError::TypeError { details:
                                                                       "array too large to count".to_string(),
                                                                   line })?;
    Ok(Value::Numeric(count))
}
