/// A character that no token of the language can start with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// The offending character.
    pub character: char,
    /// The source line where the character was found.
    pub line:      usize,
    /// The 1-based column of the character within its line.
    pub column:    usize,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error on line {}, column {}: Invalid character '{}'.",
               self.line, self.column, self.character)
    }
}

impl std::error::Error for LexError {}
