//! Helper functions for the HTML tokenizer.
//!
//! [§ 13.2.5 Tokenization](https://html.spec.whatwg.org/multipage/parsing.html#tokenization)
//!
//! - State transitions ("Switch to", "Reconsume in")
//! - Input handling ("Consume the next input character")
//! - Token emission ("Emit the current token")

use wren_common::warning::warn_once;

use super::html_tokenizer::{HtmlTokenizer, TokenizerState};
use super::token::HtmlToken;

// =============================================================================
// State Transition Helpers
// =============================================================================

impl HtmlTokenizer {
    /// "Switch to the X state"
    ///
    /// The next character will be consumed on the next step.
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// The same character will be processed again in the new state.
    pub(super) const fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.reconsume = true;
        self.state = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl HtmlTokenizer {
    /// "Consume the next input character"
    ///
    /// Returns None once the input is exhausted.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    /// [§ 13.2.5.1](https://html.spec.whatwg.org/multipage/parsing.html#data-state)
    ///
    /// "U+0009 CHARACTER TABULATION (tab), U+000A LINE FEED (LF),
    /// U+000C FORM FEED (FF), U+0020 SPACE"
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        matches!(input_char, ' ' | '\t' | '\n' | '\x0C')
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl HtmlTokenizer {
    /// "Emit the current tag token."
    pub(super) fn emit_token(&mut self) {
        if let Some(token) = self.current_token.take() {
            if let HtmlToken::StartTag { ref tag, .. } = token {
                self.last_start_tag_name = Some(tag.clone());
            }
            self.token_stream.push_back(token);
        }
    }

    /// "Emit the current input character as a character token."
    pub(super) fn emit_character_token(&mut self, c: char) {
        self.token_stream.push_back(HtmlToken::Char(c));
    }

    /// "Emit an end-of-file token."
    ///
    /// Only the first call has an effect.
    pub(super) fn emit_eof_token(&mut self) {
        if !self.at_eof {
            self.current_token = None;
            self.token_stream.push_back(HtmlToken::Eof);
            self.at_eof = true;
        }
    }

    /// [§ 13.2.5.17 Script data end tag name state](https://html.spec.whatwg.org/multipage/parsing.html#script-data-end-tag-name-state)
    ///
    /// "An appropriate end tag token is an end tag token whose tag name matches
    /// the tag name of the last start tag to have been emitted from this
    /// tokenizer, if any."
    pub(super) fn is_appropriate_end_tag_token(&self) -> bool {
        if let (Some(last_start_tag), Some(HtmlToken::EndTag { tag })) =
            (&self.last_start_tag_name, &self.current_token)
        {
            return tag == last_start_tag;
        }
        false
    }

    /// "Emit a U+003C LESS-THAN SIGN character token, a U+002F SOLIDUS
    /// character token, and a character token for each of the characters in
    /// the temporary buffer."
    ///
    /// The characters are staged in the temporary buffer and drained one per
    /// step by the temporary buffer state.
    pub(super) fn flush_end_tag_candidate(&mut self) {
        self.temporary_buffer.insert_str(0, "</");
        self.current_token = None;
        self.reconsume_in(TokenizerState::TemporaryBuffer);
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl HtmlTokenizer {
    /// [§ 13.2.2 Parse errors](https://html.spec.whatwg.org/multipage/parsing.html#parse-errors)
    ///
    /// Parse errors are not fatal; the tokenizer recovers and continues.
    pub(super) fn log_parse_error(&self, what: &str) {
        let pos = self.current_pos;
        let state = &self.state;
        warn_once(
            "HTML Tokenizer",
            &format!("{what} in {state} state at position {pos}"),
        );
    }
}
