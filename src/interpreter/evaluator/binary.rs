/// Operator dispatch.
///
/// Routes each binary operator to its handler.
pub mod core;
/// Arithmetic and string concatenation.
///
/// Implements `+ - * / %`.
pub mod arithmetic;
/// Relational and equality comparisons.
///
/// Implements `< > <= >= == !=`.
pub mod comparison;
/// Logical operators.
///
/// Implements `&&` and `||`.
pub mod logic;
