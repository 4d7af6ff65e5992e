//! Integration tests for the HTML tokenizer.

use wren_dom::Attribute;
use wren_html::{HtmlToken, HtmlTokenizer};

/// Helper to tokenize a string and return every token, Eof included.
fn tokenize(input: &str) -> Vec<HtmlToken> {
    HtmlTokenizer::new(input).collect()
}

fn chars(text: &str) -> Vec<HtmlToken> {
    text.chars().map(HtmlToken::Char).collect()
}

fn start_tag(tag: &str) -> HtmlToken {
    HtmlToken::StartTag {
        tag: tag.to_string(),
        self_closing: false,
        attributes: Vec::new(),
    }
}

fn end_tag(tag: &str) -> HtmlToken {
    HtmlToken::EndTag {
        tag: tag.to_string(),
    }
}

fn attr(name: &str, value: &str) -> Attribute {
    Attribute {
        name: name.to_string(),
        value: value.to_string(),
    }
}

/// Tokenize `html` whose first token is a raw text start tag, switching the
/// tokenizer the way the tree builder does.
fn tokenize_raw_text(html: &str) -> (HtmlToken, Vec<HtmlToken>) {
    let mut tokenizer = HtmlTokenizer::new(html);
    let first = tokenizer.next().unwrap();
    tokenizer.switch_to_script_data();
    (first, tokenizer.collect())
}

#[test]
fn test_empty_input_yields_single_eof() {
    let mut tokenizer = HtmlTokenizer::new("");
    assert_eq!(tokenizer.next(), Some(HtmlToken::Eof));
    assert_eq!(tokenizer.next(), None);
    assert_eq!(tokenizer.next(), None);
}

#[test]
fn test_paragraph_token_sequence() {
    let mut expected = vec![start_tag("p")];
    expected.extend(chars("hoge"));
    expected.push(end_tag("p"));
    expected.push(HtmlToken::Eof);

    assert_eq!(tokenize("<p>hoge</p>"), expected);
}

#[test]
fn test_plain_text() {
    let tokens = tokenize("Hello");
    assert_eq!(tokens.len(), 6); // 5 chars + EOF
    assert_eq!(tokens[0], HtmlToken::Char('H'));
    assert_eq!(tokens[4], HtmlToken::Char('o'));
    assert!(tokens[5].is_eof());
}

#[test]
fn test_attribute_quoting_styles() {
    let tokens = tokenize(r#"<a href="x" class='y' id=z disabled>"#);
    assert_eq!(
        tokens[0],
        HtmlToken::StartTag {
            tag: "a".to_string(),
            self_closing: false,
            attributes: vec![
                attr("href", "x"),
                attr("class", "y"),
                attr("id", "z"),
                attr("disabled", ""),
            ],
        }
    );
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_tag_and_attribute_names_are_lowercased() {
    let tokens = tokenize(r#"<DIV CLASS="Mixed">"#);
    match &tokens[0] {
        HtmlToken::StartTag {
            tag, attributes, ..
        } => {
            assert_eq!(tag, "div");
            assert_eq!(attributes, &vec![attr("class", "Mixed")]);
        }
        other => panic!("Expected StartTag token, got {other:?}"),
    }
}

#[test]
fn test_self_closing_start_tag() {
    let tokens = tokenize("<br/>");
    assert_eq!(
        tokens[0],
        HtmlToken::StartTag {
            tag: "br".to_string(),
            self_closing: true,
            attributes: Vec::new(),
        }
    );
}

#[test]
fn test_self_closing_after_attribute() {
    let tokens = tokenize(r#"<img src="a.png"/>"#);
    assert_eq!(
        tokens[0],
        HtmlToken::StartTag {
            tag: "img".to_string(),
            self_closing: true,
            attributes: vec![attr("src", "a.png")],
        }
    );
}

#[test]
fn test_end_tag_attributes_are_dropped() {
    let tokens = tokenize(r#"</p class="x">"#);
    assert_eq!(tokens, vec![end_tag("p"), HtmlToken::Eof]);
}

#[test]
fn test_character_references_stay_literal() {
    assert_eq!(tokenize("&amp;")[..5], chars("&amp;")[..]);
}

#[test]
fn test_stray_less_than_sign_is_text() {
    let mut expected = chars("a < b");
    expected.push(HtmlToken::Eof);
    assert_eq!(tokenize("a < b"), expected);
}

#[test]
fn test_empty_end_tag_is_ignored() {
    let mut expected = chars("ab");
    expected.push(HtmlToken::Eof);
    assert_eq!(tokenize("a</>b"), expected);
}

#[test]
fn test_doctype_and_comments_are_skipped() {
    assert_eq!(
        tokenize("<!DOCTYPE html><p>"),
        vec![start_tag("p"), HtmlToken::Eof]
    );
    assert_eq!(
        tokenize("<!-- note -->x"),
        vec![HtmlToken::Char('x'), HtmlToken::Eof]
    );
}

#[test]
fn test_eof_inside_tag_discards_tag() {
    assert_eq!(tokenize(r#"<div class="a"#), vec![HtmlToken::Eof]);
    assert_eq!(tokenize("<div"), vec![HtmlToken::Eof]);
}

#[test]
fn test_eof_after_less_than_sign() {
    assert_eq!(
        tokenize("a<"),
        vec![HtmlToken::Char('a'), HtmlToken::Char('<'), HtmlToken::Eof]
    );
}

// ========== script data ==========

#[test]
fn test_script_data_keeps_less_than_as_text() {
    let (first, rest) = tokenize_raw_text("<script>if (a<b) {}</script>");
    assert_eq!(first, start_tag("script"));

    let mut expected = chars("if (a<b) {}");
    expected.push(end_tag("script"));
    expected.push(HtmlToken::Eof);
    assert_eq!(rest, expected);
}

#[test]
fn test_script_data_rejected_end_tag_is_reemitted() {
    let (_, rest) = tokenize_raw_text("<style>a</b>c</style>");

    let mut expected = chars("a</b>c");
    expected.push(end_tag("style"));
    expected.push(HtmlToken::Eof);
    assert_eq!(rest, expected);
}

#[test]
fn test_script_data_end_tag_is_case_insensitive() {
    let (_, rest) = tokenize_raw_text("<script>x</SCRIPT>");
    assert_eq!(
        rest,
        vec![HtmlToken::Char('x'), end_tag("script"), HtmlToken::Eof]
    );
}

#[test]
fn test_script_data_unterminated_end_tag_at_eof() {
    let (_, rest) = tokenize_raw_text("<script>x</scr");

    let mut expected = chars("x</scr");
    expected.push(HtmlToken::Eof);
    assert_eq!(rest, expected);
}

#[test]
fn test_script_data_slash_without_letter() {
    let (_, rest) = tokenize_raw_text("<script>1</2</script>");

    let mut expected = chars("1</2");
    expected.push(end_tag("script"));
    expected.push(HtmlToken::Eof);
    assert_eq!(rest, expected);
}
