use std::{io::Write, rc::Rc};

use log::{debug, info};

use crate::{
    ast::{Expr, Lambda},
    error::InterpreterError,
    interpreter::{environment::Env, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `InterpreterError` describing the failure.
pub type EvalResult<T> = Result<T, InterpreterError>;

/// Outcome of evaluating one node.
///
/// `Return` travels up through blocks, loops, conditionals and calls until
/// it reaches the top of the program or a position that needs an operand
/// value, where only the value is kept. Both variants may carry no value,
/// for example after reading an undefined variable.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Evaluation finished normally.
    Next(Option<Value>),
    /// A `return` was executed.
    Return(Option<Value>),
}

impl Flow {
    /// Shorthand for a normal completion with a value.
    #[must_use]
    pub const fn value(value: Value) -> Self {
        Self::Next(Some(value))
    }

    /// Drops the control-flow information and keeps the value.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Next(value) | Self::Return(value) => value,
        }
    }
}

/// Stores the runtime evaluation context.
///
/// This struct holds the root scope of the program and the sink builtins
/// write program output to.
///
/// ## Usage
///
/// `Context` is created once per program run. Scopes are threaded through
/// [`Context::eval`] explicitly, since every call evaluates its body in a
/// fresh scope chained to the caller's.
///
/// # Example
/// ```
/// use tora::interpreter::{
///     evaluator::core::Context, lexer::TokenStream, parser::core::parse_program,
///     value::core::Value,
/// };
///
/// let program = parse_program(&mut TokenStream::new("x = 2; println(x * 3); x"))
///     .unwrap()
///     .unwrap();
///
/// let mut output = Vec::new();
/// let mut context = Context::new(&mut output);
/// let result = context.run(&program).unwrap();
///
/// assert_eq!(result, Some(Value::Numeric(2.0)));
/// assert_eq!(String::from_utf8(output).unwrap(), "6.000000\n");
/// ```
pub struct Context<'out> {
    /// Root scope of the program.
    pub globals: Env,
    output:      &'out mut dyn Write,
}

impl<'out> Context<'out> {
    /// Creates a context with an empty root scope that writes program output
    /// to `output`.
    pub fn new(output: &'out mut dyn Write) -> Self {
        Self { globals: Env::root(),
               output }
    }

    /// Evaluates a whole program in the root scope.
    ///
    /// A `return` at the top level stops the program; its value becomes the
    /// program's result.
    ///
    /// # Returns
    /// The value of the program, or `None` when it yields nothing.
    pub fn run(&mut self, program: &Expr) -> EvalResult<Option<Value>> {
        info!("evaluating program");
        let globals = self.globals.clone();
        let result = self.eval(program, &globals)?.into_value();
        self.output
            .flush()
            .map_err(|e| InterpreterError::Output { details: e.to_string(),
                                                    line:    program.line(), })?;
        info!("program finished");
        Ok(result)
    }

    /// Evaluates an expression in scope `env`.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Scope used for variable lookup and definition.
    ///
    /// # Returns
    /// A [`Flow`] carrying the value, if any, and whether a `return` was hit.
    pub fn eval(&mut self, expr: &Expr, env: &Env) -> EvalResult<Flow> {
        match expr {
            Expr::String { value, .. } => Ok(Flow::value(Value::String(value.clone()))),
            Expr::Numeric { value, .. } => Ok(Flow::value(Value::Numeric(*value))),
            Expr::Boolean { value, .. } => Ok(Flow::value(Value::Boolean(*value))),
            Expr::Variable { name, .. } => Ok(Flow::Next(env.lookup(name, true))),
            Expr::Array { entries, .. } => self.eval_array_literal(entries, env),
            Expr::ArrayIndex { array, index, line } => {
                self.eval_array_index(array, index, *line, env)
            },
            Expr::Assign { target, value, line } => self.eval_assign(target, value, *line, env),
            Expr::Binary { op,
                           left,
                           right,
                           line, } => {
                let left = self.eval_required(left, env)?;
                let right = self.eval_required(right, env)?;
                Self::eval_binary(*op, &left, &right, *line).map(Flow::value)
            },
            Expr::NegativeUnary { expr, line } => {
                let value = self.eval_required(expr, env)?;
                Self::eval_negation(&value, *line).map(Flow::value)
            },
            Expr::Lambda(lambda) => Ok(Self::eval_lambda(lambda, env)),
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line, env),
            Expr::While { condition, body, .. } => self.eval_while(condition, body, env),
            Expr::IfThenElse { condition,
                               then_branch,
                               else_branch,
                               .. } => {
                self.eval_if(condition, then_branch, else_branch.as_deref(), env)
            },
            Expr::Prog { statements, .. } => self.eval_prog(statements, env),
            Expr::Return { value, .. } => Ok(Flow::Return(self.eval(value, env)?.into_value())),
        }
    }

    /// Evaluates a function literal.
    ///
    /// A named function binds itself in the current scope as a side effect,
    /// so `func f() {...}` works as a declaration.
    fn eval_lambda(lambda: &Rc<Lambda>, env: &Env) -> Flow {
        let value = Value::Lambda(Rc::clone(lambda));
        if let Some(name) = &lambda.name {
            debug!("binding function '{name}'");
            env.define(name, value.clone(), true);
        }
        Flow::value(value)
    }

    /// Evaluates an assignment.
    ///
    /// A variable target is rebound in the nearest scope that already holds
    /// it, or created in the current scope. An array index target mutates the
    /// shared array in place; the assignment then yields the whole array so
    /// that its identity is kept.
    ///
    /// # Errors
    /// - `InvalidAssignmentTarget` for any other target.
    /// - `UndefinedArray` or `ExpectedArray` if the indexed array does not
    ///   resolve.
    fn eval_assign(&mut self,
                   target: &Expr,
                   value: &Expr,
                   line: usize,
                   env: &Env)
                   -> EvalResult<Flow> {
        match target {
            Expr::Variable { name, .. } => {
                let value = self.eval_required(value, env)?;
                env.define(name, value.clone(), false);
                Ok(Flow::value(value))
            },
            Expr::ArrayIndex { array,
                               index,
                               line: index_line, } => {
                let value = self.eval_required(value, env)?;
                let array = self.resolve_array(array, *index_line, env)?;
                let key = self.eval_required(index, env)?;
                array.borrow_mut().set(key, value);
                Ok(Flow::value(Value::Array(array)))
            },
            _ => Err(InterpreterError::InvalidAssignmentTarget { line }),
        }
    }

    /// Gives builtins access to the program output sink.
    pub(crate) fn output(&mut self) -> &mut dyn Write {
        &mut *self.output
    }
}
