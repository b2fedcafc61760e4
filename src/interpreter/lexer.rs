use std::fmt;

use log::trace;
use logos::Logos;

use crate::error::LexError;

/// Reserved words of the language.
///
/// An identifier run that matches one of these exactly is classified as a
/// keyword instead of a variable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// `if`
    If,
    /// `else`
    Else,
    /// `func`
    Func,
    /// `true`
    True,
    /// `false`
    False,
    /// `while`
    While,
    /// `return`
    Return,
}

impl Keyword {
    /// Returns the keyword as written in source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Else => "else",
            Self::Func => "func",
            Self::True => "true",
            Self::False => "false",
            Self::While => "while",
            Self::Return => "return",
        }
    }
}

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// String literal such as `"hello"`. A backslash copies the following
    /// character verbatim, so `"\n"` holds the letter `n`.
    #[token("\"", lex_string)]
    String(String),
    /// Numeric literal such as `42`, `3.14` or `1.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_numeric)]
    Numeric(f64),
    /// One of `, ; : ( ) { } [ ]`.
    #[regex(r"[,;:(){}\[\]]", |lex| lex.slice().chars().next())]
    Punctuation(char),
    /// A maximal run of operator characters such as `<=` or `&&`.
    #[regex(r"[+\-*/%=&|<>!]+", |lex| lex.slice().to_string())]
    Operator(String),
    /// Reserved word.
    #[token("if", |_| Keyword::If)]
    #[token("else", |_| Keyword::Else)]
    #[token("func", |_| Keyword::Func)]
    #[token("true", |_| Keyword::True)]
    #[token("false", |_| Keyword::False)]
    #[token("while", |_| Keyword::While)]
    #[token("return", |_| Keyword::Return)]
    Keyword(Keyword),
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Variable(String),
    /// `# Comments` run to the end of the line.
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line      += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "string {s:?}"),
            Self::Numeric(n) => write!(f, "numeric {n}"),
            Self::Punctuation(c) => write!(f, "punctuation '{c}'"),
            Self::Operator(op) => write!(f, "operator '{op}'"),
            Self::Keyword(k) => write!(f, "keyword '{}'", k.as_str()),
            Self::Variable(name) => write!(f, "variable '{name}'"),
            Self::Comment | Self::NewLine | Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset where that line begins,
/// from which token columns are derived.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
    /// Newlines seen inside the last string literal, with the offset of the
    /// line after the last one. Applied once the literal's own position has
    /// been recorded.
    pub deferred:   Option<(usize, usize)>,
}

impl LexerExtras {
    fn apply_deferred(&mut self) {
        if let Some((newlines, line_start)) = self.deferred.take() {
            self.line += newlines;
            self.line_start = line_start;
        }
    }
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0,
               deferred:   None, }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which makes logos report an
///   error.
fn parse_numeric(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Reads the body of a string literal after its opening quote.
///
/// The literal ends at the next unescaped `"`. A missing closing quote makes
/// the literal run to the end of the input. Newlines inside the literal keep
/// the line counter in sync.
fn lex_string(lex: &mut logos::Lexer<Token>) -> String {
    let body_start = lex.span().end;
    let rest = lex.remainder();

    let mut text = String::new();
    let mut escaped = false;
    let mut consumed = rest.len();
    let mut newlines = 0;
    let mut last_newline = None;

    for (offset, c) in rest.char_indices() {
        if c == '\n' {
            newlines += 1;
            last_newline = Some(offset);
        }
        if escaped {
            text.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            consumed = offset + 1;
            break;
        } else {
            text.push(c);
        }
    }

    lex.bump(consumed);
    if let Some(offset) = last_newline {
        lex.extras.deferred = Some((newlines, body_start + offset + 1));
    }

    text
}

/// A token together with the position where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    /// The token itself.
    pub token:  Token,
    /// 1-based line of the first character.
    pub line:   usize,
    /// 1-based column of the first character.
    pub column: usize,
}

impl fmt::Display for Spanned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}\t{}", self.line, self.column, self.token)
    }
}

/// Lazy token stream with a single slot of look-ahead.
///
/// Tokens are produced on demand from the underlying logos lexer. `peek`
/// fills the look-ahead slot without consuming it; iterating takes the slot
/// first.
///
/// # Example
/// ```
/// use tora::interpreter::lexer::{Token, TokenStream};
///
/// let mut tokens = TokenStream::new("x = 1");
/// assert_eq!(tokens.peek().unwrap().map(|t| t.token.clone()),
///            Some(Token::Variable("x".to_string())));
/// assert_eq!(tokens.count(), 3);
/// ```
pub struct TokenStream<'source> {
    lexer:  logos::Lexer<'source, Token>,
    peeked: Option<Spanned>,
}

impl<'source> TokenStream<'source> {
    /// Creates a stream over `source`, positioned before the first token.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { lexer:  Token::lexer_with_extras(source, LexerExtras::default()),
               peeked: None, }
    }

    /// Returns the next token without consuming it, or `None` at end of input.
    ///
    /// # Errors
    /// Returns a [`LexError`] if the next character cannot start a token.
    pub fn peek(&mut self) -> Result<Option<&Spanned>, LexError> {
        if self.peeked.is_none() {
            self.peeked = self.read()?;
        }
        Ok(self.peeked.as_ref())
    }

    /// Reports whether every token has been consumed.
    ///
    /// # Errors
    /// Returns a [`LexError`] if the next character cannot start a token.
    pub fn at_end(&mut self) -> Result<bool, LexError> {
        Ok(self.peek()?.is_none())
    }

    /// Returns the line and column just past the last token read, used to
    /// locate end-of-input errors.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        if let Some(peeked) = &self.peeked {
            return (peeked.line, peeked.column);
        }
        (self.lexer.extras.line, self.column_of(self.lexer.span().end))
    }

    fn column_of(&self, offset: usize) -> usize {
        let line_start = self.lexer.extras.line_start.min(offset);
        self.lexer.source()[line_start..offset].chars().count() + 1
    }

    fn read(&mut self) -> Result<Option<Spanned>, LexError> {
        let Some(result) = self.lexer.next() else {
            return Ok(None);
        };
        let start = self.lexer.span().start;
        let line = self.lexer.extras.line;
        let column = self.column_of(start);
        self.lexer.extras.apply_deferred();

        match result {
            Ok(token) => {
                trace!("{line}:{column} {token}");
                Ok(Some(Spanned { token,
                                  line,
                                  column }))
            },
            Err(()) => {
                let character = self.lexer.slice().chars().next().unwrap_or('\0');
                Err(LexError { character,
                               line,
                               column })
            },
        }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Result<Spanned, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.peeked.take() {
            return Some(Ok(token));
        }
        self.read().transpose()
    }
}

/// Lexes a whole source text into positioned tokens.
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Example
/// ```
/// use tora::interpreter::lexer::{Keyword, Token, tokenize};
///
/// let tokens = tokenize("while (x) # loop\n  x").unwrap();
/// assert_eq!(tokens[0].token, Token::Keyword(Keyword::While));
/// assert_eq!(tokens[1].token, Token::Punctuation('('));
/// assert_eq!(tokens.last().map(|t| (t.line, t.column)), Some((2, 3)));
///
/// assert!(tokenize("x = 1 @ 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, LexError> {
    TokenStream::new(source).collect()
}
