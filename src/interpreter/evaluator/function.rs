/// Built-in math function implementations.
///
/// Contains the one-argument numeric functions backed by the C math library.
pub mod builtin;
/// `min` and `max` function implementations.
///
/// Returns the smaller or larger of two numbers.
pub mod min_max;
/// The `length` function implementation.
///
/// Counts the pairs of an array.
pub mod length;
/// The `print` and `println` function implementations.
///
/// Write values to the program output.
pub mod print;

pub mod core;
