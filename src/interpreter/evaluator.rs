/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparisons and the logical
/// operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context, the control-flow
/// signal and assignment.
pub mod core;

/// Array evaluation.
///
/// Builds array literals and resolves indexing expressions.
pub mod array;

/// Control-flow evaluation.
///
/// Evaluates blocks, loops and conditionals, and propagates `return`.
pub mod control;

/// Utility functions for evaluation.
///
/// Provides helpers and reusable routines shared by evaluation logic.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;
