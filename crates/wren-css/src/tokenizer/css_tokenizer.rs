use crate::error::CssError;

use super::token::CssToken;

/// [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms)
///
/// Eager tokenizer: [`run`](Self::run) materializes the whole token list,
/// which can then be borrowed or moved out.
///
/// ```
/// use wren_css::{CssToken, CssTokenizer};
///
/// let mut tokenizer = CssTokenizer::new("p { color: red; }");
/// tokenizer.run().unwrap();
/// assert_eq!(tokenizer.tokens()[0], CssToken::Ident("p".to_string()));
/// ```
pub struct CssTokenizer {
    /// The input string being tokenized
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Collected tokens
    tokens: Vec<CssToken>,
}

impl CssTokenizer {
    /// Create a new CSS tokenizer with the given input.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into().chars().collect(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// Consume tokens until the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`CssError::UnsupportedCharacter`] for a code point that
    /// starts no token. Tokens before it stay collected.
    pub fn run(&mut self) -> Result<(), CssError> {
        while let Some(token) = self.consume_token()? {
            self.tokens.push(token);
        }
        Ok(())
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<CssToken> {
        self.tokens
    }

    /// Return a reference to the collected tokens.
    #[must_use]
    pub fn tokens(&self) -> &[CssToken] {
        &self.tokens
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    ///
    /// Returns `None` at end of input.
    fn consume_token(&mut self) -> Result<Option<CssToken>, CssError> {
        loop {
            // "Consume the next input code point."
            let Some(c) = self.consume() else {
                return Ok(None);
            };

            let token = match c {
                // "whitespace" - skipped, no token is emitted.
                c if c.is_ascii_whitespace() => continue,
                '(' => CssToken::OpenParenthesis,
                ')' => CssToken::CloseParenthesis,
                ',' | '.' => CssToken::Delim(c),
                ':' => CssToken::Colon,
                ';' => CssToken::SemiColon,
                '{' => CssToken::OpenCurly,
                '}' => CssToken::CloseCurly,
                // "U+0022 QUOTATION MARK (")" / "U+0027 APOSTROPHE (')"
                '"' | '\'' => CssToken::StringToken(self.consume_string_token(c)),
                // "U+0023 NUMBER SIGN (#)": the value keeps the '#'.
                '#' => CssToken::HashToken(self.consume_ident_sequence(c)),
                // No negative numbers: '-' always starts an identifier.
                '-' => CssToken::Ident(self.consume_ident_sequence(c)),
                // "U+0040 COMMERCIAL AT (@)"
                '@' => {
                    if self.would_start_at_keyword() {
                        let Some(first) = self.consume() else {
                            return Ok(None);
                        };
                        CssToken::AtKeyword(self.consume_ident_sequence(first))
                    } else {
                        CssToken::Delim('@')
                    }
                }
                c if c.is_ascii_digit() => CssToken::Number(self.consume_number(c)),
                c if c.is_ascii_alphabetic() || c == '_' => {
                    CssToken::Ident(self.consume_ident_sequence(c))
                }
                c => {
                    return Err(CssError::UnsupportedCharacter {
                        ch: c,
                        position: self.position - 1,
                    });
                }
            };
            return Ok(Some(token));
        }
    }

    /// [§ 4.3.5 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    ///
    /// An unterminated string ends at end of input with what was read.
    fn consume_string_token(&mut self, ending_code_point: char) -> String {
        let mut value = String::new();
        while let Some(c) = self.consume() {
            if c == ending_code_point {
                break;
            }
            value.push(c);
        }
        value
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    ///
    /// `first` has already been consumed and starts the result.
    fn consume_ident_sequence(&mut self, first: char) -> String {
        let mut value = String::from(first);
        while let Some(c) = self.peek() {
            if !is_ident_code_point(c) {
                break;
            }
            value.push(c);
            self.position += 1;
        }
        value
    }

    /// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    ///
    /// Digits with an optional fractional part. No sign, no exponent. Every
    /// `.` inside the number is consumed; only the first one starts the
    /// fraction, so `1.2.3` reads as `1.23`.
    fn consume_number(&mut self, first: char) -> f64 {
        let mut value = f64::from(first.to_digit(10).unwrap_or(0));
        let mut fraction_place: Option<f64> = None;

        while let Some(c) = self.peek() {
            if let Some(digit) = c.to_digit(10) {
                let digit = f64::from(digit);
                match fraction_place {
                    Some(place) => {
                        value += digit * place;
                        fraction_place = Some(place * 0.1);
                    }
                    None => value = value * 10.0 + digit,
                }
            } else if c == '.' {
                if fraction_place.is_none() {
                    fraction_place = Some(0.1);
                }
            } else {
                break;
            }
            self.position += 1;
        }
        value
    }

    /// An `@` starts an at-keyword only when followed by a letter and two
    /// more letters or digits.
    fn would_start_at_keyword(&self) -> bool {
        matches!(
            (self.peek_at(0), self.peek_at(1), self.peek_at(2)),
            (Some(a), Some(b), Some(c))
                if a.is_ascii_alphabetic() && b.is_ascii_alphanumeric() && c.is_ascii_alphanumeric()
        )
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#ident-code-point)
///
/// Restricted to ASCII letters, digits, `-` and `_`.
const fn is_ident_code_point(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
