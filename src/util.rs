/// Numeric text helpers.
///
/// This module provides the C-compatible number formatting and parsing that
/// the language's string conversions are defined in terms of, plus a lossless
/// conversion from element counts to `f64`.
pub mod num;
