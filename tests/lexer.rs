use tora::interpreter::lexer::{Keyword, Spanned, Token, tokenize};

fn tokens_of(src: &str) -> Vec<Token> {
    tokenize(src).unwrap_or_else(|e| panic!("Lexing failed: {e}"))
                 .into_iter()
                 .map(|spanned| spanned.token)
                 .collect()
}

fn var(name: &str) -> Token {
    Token::Variable(name.to_string())
}

fn op(symbol: &str) -> Token {
    Token::Operator(symbol.to_string())
}

#[test]
fn classifies_tokens() {
    assert_eq!(tokens_of(r#"x = 3.5 + "hi";"#),
               vec![var("x"),
                    op("="),
                    Token::Numeric(3.5),
                    op("+"),
                    Token::String("hi".to_string()),
                    Token::Punctuation(';')]);
}

#[test]
fn operators_are_maximal_runs() {
    assert_eq!(tokens_of("a<=-b"), vec![var("a"), op("<=-"), var("b")]);
    assert_eq!(tokens_of("a && !b"), vec![var("a"), op("&&"), op("!"), var("b")]);
}

#[test]
fn keywords_need_an_exact_match() {
    assert_eq!(tokens_of("if iffy else func_ true"),
               vec![Token::Keyword(Keyword::If),
                    var("iffy"),
                    Token::Keyword(Keyword::Else),
                    var("func_"),
                    Token::Keyword(Keyword::True)]);
}

#[test]
fn numbers_may_end_with_a_dot() {
    assert_eq!(tokens_of("1. 42"), vec![Token::Numeric(1.0), Token::Numeric(42.0)]);

    let error = tokenize("1.2.3").unwrap_err();
    assert_eq!(error.character, '.');
    assert_eq!((error.line, error.column), (1, 4));
}

#[test]
fn string_escapes_copy_the_next_character() {
    assert_eq!(tokens_of(r#""a\"b\\c\n""#), vec![Token::String(r#"a"b\cn"#.to_string())]);
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    assert_eq!(tokens_of(r#"x = "abc"#), vec![var("x"), op("="), Token::String("abc".to_string())]);
}

#[test]
fn comments_and_whitespace_are_skipped() {
    assert_eq!(tokens_of("a # comment ( [\r\n\tb"), vec![var("a"), var("b")]);
}

#[test]
fn tracks_lines_and_columns() {
    let tokens = tokenize("a\n  # c\n   b").unwrap();

    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[1].line, tokens[1].column), (3, 4));
}

#[test]
fn multi_line_strings_keep_their_start_position() {
    let tokens = tokenize("\"a\nb\" c").unwrap();

    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!(tokens[0].token, Token::String("a\nb".to_string()));
    assert_eq!((tokens[1].line, tokens[1].column), (2, 4));
}

#[test]
fn invalid_characters_are_reported() {
    let error = tokenize("x = 1\n  @").unwrap_err();

    assert_eq!(error.to_string(), "Error on line 2, column 3: Invalid character '@'.");
}

#[test]
fn spanned_tokens_display_position_and_kind() {
    let spanned = Spanned { token:  Token::Keyword(Keyword::While),
                            line:   2,
                            column: 5, };

    assert_eq!(spanned.to_string(), "2:5\tkeyword 'while'");
    assert_eq!(Token::String("s".to_string()).to_string(), "string \"s\"");
    assert_eq!(Token::Punctuation('(').to_string(), "punctuation '('");
}
