//! Integration tests for the CSS tokenizer.

use wren_css::{CssError, CssToken, CssTokenizer};

/// Helper to tokenize a CSS string and return the tokens.
fn tokenize(input: &str) -> Vec<CssToken> {
    let mut tokenizer = CssTokenizer::new(input);
    tokenizer.run().unwrap();
    tokenizer.into_tokens()
}

fn ident(value: &str) -> CssToken {
    CssToken::Ident(value.to_string())
}

#[test]
fn test_empty_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \n\t ").is_empty());
}

#[test]
fn test_simple_rule() {
    assert_eq!(
        tokenize("p { color: red; }"),
        vec![
            ident("p"),
            CssToken::OpenCurly,
            ident("color"),
            CssToken::Colon,
            ident("red"),
            CssToken::SemiColon,
            CssToken::CloseCurly,
        ]
    );
}

#[test]
fn test_punctuation() {
    assert_eq!(
        tokenize("(),.:;{}"),
        vec![
            CssToken::OpenParenthesis,
            CssToken::CloseParenthesis,
            CssToken::Delim(','),
            CssToken::Delim('.'),
            CssToken::Colon,
            CssToken::SemiColon,
            CssToken::OpenCurly,
            CssToken::CloseCurly,
        ]
    );
}

#[test]
fn test_id_and_class_selectors() {
    assert_eq!(
        tokenize("#main .note"),
        vec![
            CssToken::HashToken("#main".to_string()),
            CssToken::Delim('.'),
            ident("note"),
        ]
    );
}

#[test]
fn test_hash_color_value() {
    assert_eq!(
        tokenize("color:#ff00ff"),
        vec![
            ident("color"),
            CssToken::Colon,
            CssToken::HashToken("#ff00ff".to_string()),
        ]
    );
}

#[test]
fn test_identifiers_with_hyphens_and_underscores() {
    assert_eq!(
        tokenize("background-color _private -webkit-box"),
        vec![ident("background-color"), ident("_private"), ident("-webkit-box")]
    );
}

#[test]
fn test_strings() {
    assert_eq!(
        tokenize(r#""double" 'single'"#),
        vec![
            CssToken::StringToken("double".to_string()),
            CssToken::StringToken("single".to_string()),
        ]
    );
}

#[test]
fn test_string_ends_only_at_matching_quote() {
    assert_eq!(
        tokenize(r#""it's""#),
        vec![CssToken::StringToken("it's".to_string())]
    );
}

#[test]
fn test_unterminated_string_runs_to_end() {
    assert_eq!(
        tokenize("'abc"),
        vec![CssToken::StringToken("abc".to_string())]
    );
}

#[test]
fn test_numbers() {
    assert_eq!(tokenize("42"), vec![CssToken::Number(42.0)]);
    assert_eq!(tokenize("1.5"), vec![CssToken::Number(1.5)]);
    assert_eq!(
        tokenize("10px"),
        vec![CssToken::Number(10.0), ident("px")]
    );
}

#[test]
fn test_number_absorbs_extra_dots() {
    let tokens = tokenize("1.2.3;");
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        CssToken::Number(value) => assert!((value - 1.23).abs() < 1e-9),
        other => panic!("expected a number, got {other}"),
    }
    assert_eq!(tokens[1], CssToken::SemiColon);
}

#[test]
fn test_at_keyword() {
    assert_eq!(
        tokenize("@media screen"),
        vec![CssToken::AtKeyword("media".to_string()), ident("screen")]
    );
}

#[test]
fn test_short_at_sign_is_delim() {
    assert_eq!(
        tokenize("@ab"),
        vec![CssToken::Delim('@'), ident("ab")]
    );
}

#[test]
fn test_unsupported_character_is_an_error() {
    let mut tokenizer = CssTokenizer::new("p > a");
    assert_eq!(
        tokenizer.run(),
        Err(CssError::UnsupportedCharacter {
            ch: '>',
            position: 2
        })
    );
    // Tokens before the error are kept.
    assert_eq!(tokenizer.tokens(), &[ident("p")]);
}
