#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum InterpreterError {
    /// The left side of `=` is neither a variable nor an array index.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Read of a variable that is not bound anywhere in the scope chain, in a
    /// position that needs a value.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Indexing through a variable that is not bound.
    UndefinedArray {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression that yields nothing was used where a value is needed.
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to operands of incompatible types.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric value was expected, but not found.
    ExpectedNumber {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A boolean value was expected, but not found.
    ExpectedBoolean {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An array value was expected, but not found.
    ExpectedArray {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function was called with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the function, or `<lambda>` for anonymous ones.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Writing program output failed.
    Output {
        /// Description of the underlying I/O failure.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl InterpreterError {
    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidAssignmentTarget { line }
            | Self::UndefinedVariable { line, .. }
            | Self::UndefinedArray { line, .. }
            | Self::MissingValue { line }
            | Self::TypeError { line, .. }
            | Self::ExpectedNumber { line }
            | Self::ExpectedBoolean { line }
            | Self::ExpectedArray { line }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::Output { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for InterpreterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAssignmentTarget { line } => write!(f,
                                                             "Error on line {line}: Invalid assignment target, expected a variable or an array index."),

            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable: {name}.")
            },

            Self::UndefinedArray { name, line } => {
                write!(f, "Error on line {line}: Undefined array: {name}.")
            },

            Self::MissingValue { line } => {
                write!(f, "Error on line {line}: Expression did not produce a value.")
            },

            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },

            Self::ExpectedNumber { line } => {
                write!(f, "Error on line {line}: Expected a numeric value.")
            },

            Self::ExpectedBoolean { line } => {
                write!(f, "Error on line {line}: Expected a boolean value.")
            },

            Self::ExpectedArray { line } => write!(f, "Error on line {line}: Expected an array."),

            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: {name} expects {expected} argument(s), but {found} were given."),

            Self::Output { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for InterpreterError {}
