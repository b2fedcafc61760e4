use std::{io::Write, rc::Rc};

use log::debug;

use crate::{
    ast::{Expr, Lambda},
    interpreter::{
        environment::Env,
        evaluator::{
            core::{Context, EvalResult, Flow},
            function::{builtin, length, min_max, print},
            utils::check_arity,
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values, the program
/// output sink and the line number. It returns an optional value wrapped in
/// `EvalResult`.
type BuiltinFn = fn(&[Value], &mut dyn Write, usize) -> EvalResult<Option<Value>>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"     => { arity: 1, func: |args, _, line| builtin::sin(args, line).map(Some) },
    "cos"     => { arity: 1, func: |args, _, line| builtin::cos(args, line).map(Some) },
    "tan"     => { arity: 1, func: |args, _, line| builtin::tan(args, line).map(Some) },
    "atan"    => { arity: 1, func: |args, _, line| builtin::atan(args, line).map(Some) },
    "log"     => { arity: 1, func: |args, _, line| builtin::log(args, line).map(Some) },
    "exp"     => { arity: 1, func: |args, _, line| builtin::exp(args, line).map(Some) },
    "round"   => { arity: 1, func: |args, _, line| builtin::round(args, line).map(Some) },
    "min"     => { arity: 2, func: |args, _, line| min_max::min_max("min", args, line).map(Some) },
    "max"     => { arity: 2, func: |args, _, line| min_max::min_max("max", args, line).map(Some) },
    "length"  => { arity: 1, func: |args, _, line| length::length(args, line).map(Some) },
    "print"   => { arity: 1, func: print::print },
    "println" => { arity: 1, func: print::println },
}

impl Context<'_> {
    /// Evaluates a function call.
    ///
    /// The callee is evaluated first. A function value is invoked with the
    /// arguments evaluated in the caller's scope. Otherwise, if the callee is
    /// a bare name, the builtin with that name is dispatched.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line number for error reporting.
    /// - `env`: The caller's scope.
    ///
    /// # Returns
    /// The call's value. A callee that resolves to neither a function nor a
    /// builtin yields no value.
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            arguments: &[Expr],
                            line: usize,
                            env: &Env)
                            -> EvalResult<Flow> {
        if let Some(Value::Lambda(lambda)) = self.eval_value(callee, env)? {
            let args = self.eval_arguments(arguments, env)?;
            return self.call_lambda(&lambda, args, line, env);
        }

        let Expr::Variable { name, .. } = callee else {
            return Ok(Flow::Next(None));
        };
        let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) else {
            debug!("no function named '{name}' on line {line}");
            return Ok(Flow::Next(None));
        };

        let args = self.eval_arguments(arguments, env)?;
        check_arity(builtin.name, &args, builtin.arity, line)?;
        debug!("calling builtin '{name}'");
        (builtin.func)(&args, self.output(), line).map(Flow::Next)
    }

    /// Invokes a function value.
    ///
    /// A new scope is chained to the caller's scope, each parameter is bound
    /// locally in it, and the body is evaluated there. A `return` inside the
    /// body is handed back unchanged, so a call used as a statement passes
    /// the signal on to the caller's block.
    ///
    /// # Errors
    /// `ArgumentCountMismatch` if the number of arguments differs from the
    /// number of parameters.
    fn call_lambda(&mut self,
                   lambda: &Rc<Lambda>,
                   args: Vec<Value>,
                   line: usize,
                   env: &Env)
                   -> EvalResult<Flow> {
        check_arity(lambda.display_name(), &args, lambda.params.len(), line)?;

        let scope = env.child();
        for (param, arg) in lambda.params.iter().zip(args) {
            scope.define(param, arg, true);
        }

        debug!("calling '{}' at depth {}", lambda.display_name(), scope.depth());
        self.eval(&lambda.body, &scope)
    }

    fn eval_arguments(&mut self, arguments: &[Expr], env: &Env) -> EvalResult<Vec<Value>> {
        arguments.iter()
                 .map(|arg| self.eval_required(arg, env))
                 .collect()
    }
}
