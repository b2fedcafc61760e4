use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::arithmetic::type_error,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` use the type-aware equality of
    /// [`Value::loosely_equals`], so values of different types are simply
    /// unequal. The ordering operators require two numbers.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use tora::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Numeric(3.0);
    /// let b = Value::Numeric(5.0);
    /// let result = Context::eval_comparison(BinaryOperator::Less, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    ///
    /// let result = Context::eval_comparison(BinaryOperator::Equal, &a, &Value::from("3"), 1);
    /// assert_eq!(result.unwrap(), Value::Boolean(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        if let Equal | NotEqual = op {
            let equal = left.loosely_equals(right);
            return Ok(Value::Boolean(if op == Equal { equal } else { !equal }));
        }

        let (Value::Numeric(a), Value::Numeric(b)) = (left, right) else {
            return Err(type_error(op, left, right, line));
        };

        Ok(Value::Boolean(match op {
                              Less => a < b,
                              Greater => a > b,
                              LessEqual => a <= b,
                              GreaterEqual => a >= b,
                              _ => unreachable!("eval_comparison used with {op}"),
                          }))
    }
}
