use crate::interpreter::{
    evaluator::{core::EvalResult, utils::check_arity},
    value::core::Value,
};

/// Applies a one-argument C math function to a numeric value.
///
/// The generated functions accept exactly one argument. Non-numeric
/// arguments produce an `ExpectedNumber` error.
///
/// # Parameters
/// - `args`: Slice containing one argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed number.
///
/// # Example
/// ```
/// use tora::interpreter::{evaluator::function::builtin::round, value::core::Value};
///
/// assert_eq!(round(&[Value::Numeric(2.5)], 1).unwrap(), Value::Numeric(3.0));
/// assert_eq!(round(&[Value::Numeric(-2.5)], 1).unwrap(), Value::Numeric(-3.0));
/// ```
macro_rules! libm_builtin {
    ($fname:ident, $libm_fn:path) => {
        pub fn $fname(args: &[Value], line: usize) -> EvalResult<Value> {
            check_arity(stringify!($fname), args, 1, line)?;

            Ok(Value::Numeric($libm_fn(args[0].as_numeric(line)?)))
        }
    };
}

libm_builtin!(sin, libm::sin);
libm_builtin!(cos, libm::cos);
libm_builtin!(tan, libm::tan);
libm_builtin!(atan, libm::atan);
libm_builtin!(log, libm::log);
libm_builtin!(exp, libm::exp);
libm_builtin!(round, libm::round);
