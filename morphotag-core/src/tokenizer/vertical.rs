//! Line-based tokenizer
//!
//! Every non-empty line is one token; one or more empty lines end a sentence.
//! A `\r` right before the `\n` is not part of the token.

use crate::traits::SentenceTokenizer;
use crate::types::TokenRange;

/// Tokenizer for vertical (one token per line) text
#[derive(Debug, Default, Clone)]
pub struct VerticalTokenizer {
    text: String,
    cursor: usize,
}

impl VerticalTokenizer {
    /// Create a tokenizer with empty text
    pub fn new() -> Self {
        Self::default()
    }
}

impl SentenceTokenizer for VerticalTokenizer {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.cursor = 0;
    }

    fn next_sentence(&mut self, forms: &mut Vec<String>, ranges: &mut Vec<TokenRange>) -> bool {
        forms.clear();
        ranges.clear();

        let len = self.text.len();
        while self.cursor < len {
            let start = self.cursor;
            let line_end = self.text[start..]
                .find('\n')
                .map_or(len, |offset| start + offset);
            self.cursor = if line_end < len { line_end + 1 } else { len };

            let content_end = if self.text[start..line_end].ends_with('\r') {
                line_end - 1
            } else {
                line_end
            };

            if content_end == start {
                if !forms.is_empty() {
                    return true;
                }
                continue;
            }

            forms.push(self.text[start..content_end].to_string());
            ranges.push(TokenRange::new(start, content_end - start));
        }

        !forms.is_empty()
    }

    fn name(&self) -> &'static str {
        "vertical"
    }
}
