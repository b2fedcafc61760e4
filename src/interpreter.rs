/// The environment module implements the chain of variable scopes.
///
/// A scope holds name/value bindings and a link to its parent. The program
/// runs in a root scope and every call evaluates its body in a fresh child
/// scope of the caller's.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, performs
/// arithmetic and logical operations, manages variable state, and produces
/// results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, arrays and control flow.
/// - Reports runtime errors such as type mismatches or undefined names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, punctuation, and keywords. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer on demand and constructs an AST
/// that represents the syntactic structure of the program.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Resolves operator precedence by precedence climbing.
/// - Validates correct grammar and syntax, reporting errors with location info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values a script can compute with: numbers,
/// strings, booleans, shared arrays and functions. It also provides the
/// conversions and equality rules the evaluator relies on.
pub mod value;
