use crate::{
    ast::Expr,
    error::InterpreterError,
    interpreter::{
        environment::Env,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates `expr` for its value, ignoring any `return` signal.
    pub(crate) fn eval_value(&mut self, expr: &Expr, env: &Env) -> EvalResult<Option<Value>> {
        Ok(self.eval(expr, env)?.into_value())
    }

    /// Evaluates `expr` in a position that needs a value.
    ///
    /// # Errors
    /// - `UndefinedVariable` if `expr` is a variable that is not bound.
    /// - `MissingValue` if any other expression yields nothing.
    pub(crate) fn eval_required(&mut self, expr: &Expr, env: &Env) -> EvalResult<Value> {
        self.eval_value(expr, env)?.ok_or_else(|| missing_value(expr))
    }

    /// Evaluates a loop or branch condition, which must be a boolean.
    ///
    /// # Errors
    /// `ExpectedBoolean` for any other type.
    pub(crate) fn eval_condition(&mut self, expr: &Expr, env: &Env) -> EvalResult<bool> {
        match self.eval_required(expr, env)? {
            Value::Boolean(b) => Ok(b),
            _ => Err(InterpreterError::ExpectedBoolean { line: expr.line() }),
        }
    }
}

/// Builds the error for an expression that produced no value.
fn missing_value(expr: &Expr) -> InterpreterError {
    match expr {
        Expr::Variable { name, line } => InterpreterError::UndefinedVariable { name: name.clone(),
                                                                               line: *line, },
        other => InterpreterError::MissingValue { line: other.line() },
    }
}

/// Ensures that a builtin received exactly the expected number of
/// arguments.
///
/// # Parameters
/// - `name`: Name of the builtin, for the error message.
/// - `args`: The argument slice.
/// - `expected`: Required number of arguments.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// - `Ok(())` if the count matches.
/// - `Err(InterpreterError::ArgumentCountMismatch)` otherwise.
///
/// # Example
/// ```
/// use tora::interpreter::{evaluator::utils::check_arity, value::core::Value};
///
/// assert!(check_arity("sin", &[Value::Numeric(1.0)], 1, 3).is_ok());
/// assert!(check_arity("min", &[Value::Numeric(1.0)], 2, 3).is_err());
/// ```
pub fn check_arity<T>(name: &str, args: &[T], expected: usize, line: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(InterpreterError::ArgumentCountMismatch { name: name.to_string(),
                                                      expected,
                                                      found: args.len(),
                                                      line })
    }
}
