/// Lexical errors.
///
/// Raised by the lexer when it meets a character that does not start any
/// token of the language.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree:
/// missing punctuation, unexpected tokens and premature end of input.
pub mod parse_error;
/// Interpreter errors.
///
/// Contains all error types that can be raised during evaluation, such as type
/// mismatches, invalid assignment targets or undefined arrays.
pub mod interpreter_error;

pub use interpreter_error::InterpreterError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure that stops a TORA program.
///
/// Lexical errors surface as [`ParseError::Lex`], since the lexer is only ever
/// driven by the parser.
#[derive(Debug)]
pub enum Error {
    /// The source text could not be turned into a syntax tree.
    Parse(ParseError),
    /// Evaluation of the syntax tree failed.
    Interpreter(InterpreterError),
}

impl Error {
    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::Interpreter(e) => e.line(),
        }
    }

    /// Returns the name of the phase that failed, as shown to the user.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Parse(_) => "Parser",
            Self::Interpreter(_) => "Interpreter",
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Parse(ParseError::Lex(e))
    }
}

impl From<InterpreterError> for Error {
    fn from(e: InterpreterError) -> Self {
        Self::Interpreter(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Interpreter(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}
