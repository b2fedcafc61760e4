use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context<'_> {
    /// Evaluates a logical operation.
    ///
    /// Each operand counts as true only if it is exactly the boolean `true`;
    /// any other value, of any type, counts as false. This never fails.
    ///
    /// # Parameters
    /// - `op`: `And` or `Or`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use tora::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let a = Value::Boolean(true);
    /// let b = Value::Numeric(1.0);
    ///
    /// assert_eq!(Context::eval_logic(BinaryOperator::And, &a, &b), Value::Boolean(false));
    /// assert_eq!(Context::eval_logic(BinaryOperator::Or, &a, &b), Value::Boolean(true));
    /// ```
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        match op {
            BinaryOperator::And => Value::Boolean(left.is_true() && right.is_true()),
            BinaryOperator::Or => Value::Boolean(left.is_true() || right.is_true()),
            _ => unreachable!("eval_logic used with {op}"),
        }
    }
}
