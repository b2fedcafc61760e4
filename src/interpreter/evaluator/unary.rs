use crate::{
    error::InterpreterError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Negates a numeric value.
    ///
    /// # Parameters
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The negated number, or `ExpectedNumber` for any other type.
    ///
    /// # Example
    /// ```
    /// use tora::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let v = Context::eval_negation(&Value::Numeric(5.0), 1).unwrap();
    /// assert_eq!(v, Value::Numeric(-5.0));
    ///
    /// assert!(Context::eval_negation(&Value::from("5"), 1).is_err());
    /// ```
    pub fn eval_negation(value: &Value, line: usize) -> EvalResult<Value> {
        match value {
            Value::Numeric(n) => Ok(Value::Numeric(-n)),
            _ => Err(InterpreterError::ExpectedNumber { line }),
        }
    }
}
