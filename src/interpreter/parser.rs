/// Core parsing entry points.
///
/// Contains the program and expression entry points, atom dispatch and the
/// call/index suffix handling.
pub mod core;

/// Unary negation.
///
/// Parses a leading `-` and applies the negation precedence fixup.
pub mod unary;

/// Binary operator climbing.
///
/// Resolves binary operators and assignment by precedence climbing.
pub mod binary;

/// Bracketed literals.
///
/// Parses `{ ... }` blocks and `[ ... ]` array literals.
pub mod block;

/// Utility functions for the parser.
///
/// Provides token expectation helpers and the delimited-list parser.
pub mod utils;

/// Keyword constructs.
///
/// Implements `if`, `while`, `func` and `return`.
pub mod statement;
