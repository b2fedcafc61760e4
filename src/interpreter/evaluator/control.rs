use crate::{
    ast::Expr,
    interpreter::{
        environment::Env,
        evaluator::core::{Context, EvalResult, Flow},
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates the statements of a block in order, in the same scope.
    ///
    /// A `return` stops the block immediately and is passed on.
    ///
    /// # Returns
    /// The value of the last statement, or `false` when the block is empty
    /// or its last statement yields nothing.
    pub(crate) fn eval_prog(&mut self, statements: &[Expr], env: &Env) -> EvalResult<Flow> {
        let mut last = None;
        for statement in statements {
            match self.eval(statement, env)? {
                Flow::Return(value) => return Ok(Flow::Return(value)),
                Flow::Next(value) => last = value,
            }
        }
        Ok(Flow::value(last.unwrap_or(Value::Boolean(false))))
    }

    /// Evaluates a `while` loop.
    ///
    /// The condition is re-evaluated before every iteration and must be a
    /// boolean. A `return` in the body ends the loop and is passed on.
    ///
    /// # Returns
    /// `false` once the condition turns false.
    pub(crate) fn eval_while(&mut self,
                             condition: &Expr,
                             body: &Expr,
                             env: &Env)
                             -> EvalResult<Flow> {
        while self.eval_condition(condition, env)? {
            if let flow @ Flow::Return(_) = self.eval(body, env)? {
                return Ok(flow);
            }
        }
        Ok(Flow::value(Value::Boolean(false)))
    }

    /// Evaluates an `if` expression.
    ///
    /// # Returns
    /// The outcome of the branch taken, or `false` when the condition is false
    /// and there is no else branch.
    pub(crate) fn eval_if(&mut self,
                          condition: &Expr,
                          then_branch: &Expr,
                          else_branch: Option<&Expr>,
                          env: &Env)
                          -> EvalResult<Flow> {
        if self.eval_condition(condition, env)? {
            return self.eval(then_branch, env);
        }
        match else_branch {
            Some(branch) => self.eval(branch, env),
            None => Ok(Flow::value(Value::Boolean(false))),
        }
    }
}
