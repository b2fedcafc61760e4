use crate::{
    ast::{ArrayEntry, Expr},
    error::InterpreterError,
    interpreter::{
        environment::Env,
        evaluator::core::{Context, EvalResult, Flow},
        value::array::{ArrayRef, ArrayValue},
    },
};

impl Context<'_> {
    /// Evaluates an array literal into a fresh shared array.
    ///
    /// Keys and values are evaluated eagerly, in entry order, so the
    /// resulting array holds no reference to the scope it was built in.
    /// Duplicate keys are kept; lookups see the first one.
    pub(crate) fn eval_array_literal(&mut self,
                                     entries: &[ArrayEntry],
                                     env: &Env)
                                     -> EvalResult<Flow> {
        let mut array = ArrayValue::default();
        for entry in entries {
            let key = self.eval_required(&entry.key, env)?;
            let value = self.eval_required(&entry.value, env)?;
            array.push_pair(key, value);
        }
        Ok(Flow::value(array.into()))
    }

    /// Evaluates `array[index]`.
    ///
    /// # Returns
    /// The value of the first pair whose key equals the index, or no value
    /// when there is none. Any index type is accepted; one that cannot
    /// equal a key, such as a boolean, simply finds nothing.
    ///
    /// # Errors
    /// - `UndefinedArray` if `array` is a variable that is not bound.
    /// - `ExpectedArray` if it does not evaluate to an array.
    pub(crate) fn eval_array_index(&mut self,
                                   array: &Expr,
                                   index: &Expr,
                                   line: usize,
                                   env: &Env)
                                   -> EvalResult<Flow> {
        let array = self.resolve_array(array, line, env)?;
        let key = self.eval_required(index, env)?;
        let value = array.borrow().get(&key);
        Ok(Flow::Next(value))
    }

    /// Resolves the array an indexing expression operates on.
    ///
    /// A bare variable is looked up directly so that a missing name reports
    /// `UndefinedArray`; anything else is evaluated.
    pub(crate) fn resolve_array(&mut self,
                                array: &Expr,
                                line: usize,
                                env: &Env)
                                -> EvalResult<ArrayRef> {
        let value = match array {
            Expr::Variable { name, line } => {
                env.lookup(name, true)
                   .ok_or_else(|| InterpreterError::UndefinedArray { name: name.clone(),
                                                                     line: *line, })?
            },
            other => self.eval_required(other, env)?,
        };
        value.as_array(line)
    }
}
