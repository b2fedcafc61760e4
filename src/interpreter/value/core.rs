use std::{fmt, rc::Rc};

use crate::{
    ast::Lambda,
    error::InterpreterError,
    interpreter::{
        evaluator::core::EvalResult,
        value::array::{ArrayRef, ArrayValue},
    },
    util::num::format_fixed,
};

/// Represents a runtime value in the interpreter.
///
/// Scalars are copied on assignment. Arrays and functions are shared by
/// reference: assigning them to another name creates an alias.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string.
    String(String),
    /// A numeric value (double precision floating-point).
    Numeric(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators and required by `if` and
    /// `while` conditions.
    Boolean(bool),
    /// A shared array of key/value pairs.
    Array(ArrayRef),
    /// A function value.
    Lambda(Rc<Lambda>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Numeric(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<ArrayValue> for Value {
    fn from(v: ArrayValue) -> Self {
        Self::Array(v.into_ref())
    }
}

impl Value {
    /// Name of the value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Numeric(_) => "numeric",
            Self::Boolean(_) => "boolean",
            Self::Array(_) => "array",
            Self::Lambda(_) => "function",
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is numeric.
    /// - `Err(InterpreterError::ExpectedNumber)`: Otherwise.
    pub const fn as_numeric(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Numeric(n) => Ok(*n),
            _ => Err(InterpreterError::ExpectedNumber { line }),
        }
    }

    /// Returns the shared array handle, or an error if the value is not an
    /// array.
    pub fn as_array(&self, line: usize) -> EvalResult<ArrayRef> {
        match self {
            Self::Array(array) => Ok(Rc::clone(array)),
            _ => Err(InterpreterError::ExpectedArray { line }),
        }
    }

    /// Reports whether the value is exactly the boolean `true`.
    ///
    /// There is no implicit truthiness: any other value, `1` and `"true"`
    /// included, counts as false.
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::Boolean(true))
    }

    /// Type-aware equality used by `==`, `!=` and array key lookup.
    ///
    /// Only numbers compare with numbers and strings with strings, by value.
    /// Every other pairing is unequal, booleans and arrays included, even
    /// when both sides are the same value. This is not an error.
    ///
    /// # Example
    /// ```
    /// use tora::interpreter::value::core::Value;
    ///
    /// assert!(Value::Numeric(1.0).loosely_equals(&Value::Numeric(1.0)));
    /// assert!(Value::from("a").loosely_equals(&Value::from("a")));
    /// assert!(!Value::Numeric(1.0).loosely_equals(&Value::from("1")));
    /// assert!(!Value::Boolean(true).loosely_equals(&Value::Boolean(true)));
    /// ```
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn loosely_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Numeric(a), Self::Numeric(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}

/// The string representation shared by `println` and string concatenation.
///
/// Numbers use six fixed decimals, booleans print as `true`/`false`, arrays
/// as `ARRAY [len:N]` and functions as `???`. Strings print verbatim.
///
/// # Example
/// ```
/// use tora::interpreter::value::{array::ArrayValue, core::Value};
///
/// assert_eq!(Value::Numeric(5.0).to_string(), "5.000000");
/// assert_eq!(Value::Boolean(false).to_string(), "false");
/// assert_eq!(Value::from(ArrayValue::default()).to_string(), "ARRAY [len:0]");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s}"),
            Self::Numeric(n) => write!(f, "{}", format_fixed(*n)),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Array(array) => write!(f, "ARRAY [len:{}]", array.borrow().len()),
            Self::Lambda(_) => write!(f, "???"),
        }
    }
}
