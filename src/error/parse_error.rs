use crate::error::LexError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer could not classify a character.
    Lex(LexError),
    /// A specific token was required but another one was found.
    Expected {
        /// Description of the token that was required.
        expected: String,
        /// The token encountered instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The column where the offending token starts.
        column:   usize,
    },
    /// Found a token that cannot start an expression.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column where the offending token starts.
        column: usize,
    },
    /// Reached the end of input while a construct was still open.
    UnexpectedEndOfInput {
        /// Description of what the parser was waiting for.
        expected: String,
        /// The source line where the input ended.
        line:     usize,
        /// The column where the input ended.
        column:   usize,
    },
}

impl ParseError {
    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line,
            Self::Expected { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. } => *line,
        }
    }

    /// Returns the column the error was reported on.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Lex(e) => e.column,
            Self::Expected { column, .. }
            | Self::UnexpectedToken { column, .. }
            | Self::UnexpectedEndOfInput { column, .. } => *column,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),

            Self::Expected { expected,
                             found,
                             line,
                             column, } => write!(f,
                                                 "Error on line {line}, column {column}: Expected {expected}, found {found}."),

            Self::UnexpectedToken { token, line, column } => {
                write!(f, "Error on line {line}, column {column}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { expected,
                                         line,
                                         column, } => write!(f,
                                                             "Error on line {line}, column {column}: Unexpected end of input, expected {expected}."),
        }
    }
}

impl std::error::Error for ParseError {}
