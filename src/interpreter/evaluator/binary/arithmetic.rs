use crate::{
    ast::BinaryOperator,
    error::InterpreterError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::atof,
};

impl Context<'_> {
    /// Evaluates `+`.
    ///
    /// - A string on the left concatenates the right operand's string
    ///   representation.
    /// - Two numbers are added.
    /// - A number plus a string adds the string's numeric prefix, or 0 if it
    ///   has none.
    ///
    /// Any other pairing is a type error.
    ///
    /// # Example
    /// ```
    /// use tora::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let joined = Context::eval_add(&Value::from("x"), &Value::Numeric(5.0), 1).unwrap();
    /// assert_eq!(joined, Value::from("x5.000000"));
    ///
    /// let sum = Context::eval_add(&Value::Numeric(5.0), &Value::from("2"), 1).unwrap();
    /// assert_eq!(sum, Value::Numeric(7.0));
    ///
    /// assert!(Context::eval_add(&Value::Boolean(true), &Value::Numeric(1.0), 1).is_err());
    /// ```
    pub fn eval_add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match (left, right) {
            (Value::String(s), other) => Ok(Value::String(format!("{s}{other}"))),
            (Value::Numeric(a), Value::Numeric(b)) => Ok(Value::Numeric(a + b)),
            (Value::Numeric(a), Value::String(s)) => Ok(Value::Numeric(a + atof(s))),
            _ => Err(type_error(BinaryOperator::Add, left, right, line)),
        }
    }

    /// Evaluates `-`, `*`, `/` and `%` on two numbers.
    ///
    /// Division follows IEEE-754, so dividing by zero yields an infinity or
    /// NaN rather than an error. `%` is the C `fmod` remainder, whose sign
    /// follows the dividend.
    ///
    /// # Example
    /// ```
    /// use tora::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let r = Context::eval_arithmetic(BinaryOperator::Mod,
    ///                                  &Value::Numeric(-7.0),
    ///                                  &Value::Numeric(3.0),
    ///                                  1).unwrap();
    /// assert_eq!(r, Value::Numeric(-1.0));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Div, Mod, Mul, Sub};

        let (Value::Numeric(a), Value::Numeric(b)) = (left, right) else {
            return Err(type_error(op, left, right, line));
        };

        Ok(Value::Numeric(match op {
                              Sub => a - b,
                              Mul => a * b,
                              Div => a / b,
                              Mod => libm::fmod(*a, *b),
                              _ => unreachable!("eval_arithmetic used with {op}"),
                          }))
    }
}

/// Builds the error for an operator applied to unsupported operand types.
pub(crate) fn type_error(op: BinaryOperator,
                         left: &Value,
                         right: &Value,
                         line: usize)
                         -> InterpreterError {
    InterpreterError::TypeError { details: format!("Cannot use {op} on {} and {}",
                                                   left.type_name(),
                                                   right.type_name()),
                                  line }
}
