//! Table-driven tokenizer with sentence splitting
//!
//! Tokens are, in order of precedence:
//! 1. a match of one of the table's special patterns (URLs, e-mail addresses)
//! 2. a word: alphanumeric characters, optionally joined by joiner characters
//!    (`co-op`, `don't`) or, between digits, decimal separators (`3.14`)
//! 3. a run of terminator characters (`.`, `...`, `?!`)
//! 4. any other single character
//!
//! A sentence ends after a terminator run that is followed by whitespace,
//! unless the table treats the preceding word as an abbreviation or initial,
//! or the next word starts lowercase and the table lets lowercase continue.
//! Closing brackets and quotes right after the terminator stay in the
//! sentence. An empty line always ends a sentence.

use super::rules::TokenizerRules;
use crate::traits::SentenceTokenizer;
use crate::types::TokenRange;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Word,
    Terminator,
    Other,
}

/// Pending decision after a terminator run
#[derive(Debug, Clone, Copy)]
struct PendingBreak {
    /// Terminator was a single "." after an abbreviation or initial
    suppressed: bool,
}

/// Rule-based tokenizer for the `generic`, `czech` and `english` variants
#[derive(Debug)]
pub struct RuleTokenizer {
    rules: Arc<TokenizerRules>,
    text: String,
    cursor: usize,
}

impl RuleTokenizer {
    /// Create a tokenizer over a compiled rule table
    pub fn new(rules: Arc<TokenizerRules>) -> Self {
        Self {
            rules,
            text: String::new(),
            cursor: 0,
        }
    }

    /// Skip whitespace from `pos`, returning the new position and the number
    /// of line breaks crossed
    fn skip_whitespace(&self, pos: usize) -> (usize, usize) {
        let mut newlines = 0;
        for (offset, ch) in self.text[pos..].char_indices() {
            if !ch.is_whitespace() {
                return (pos + offset, newlines);
            }
            if ch == '\n' {
                newlines += 1;
            }
        }
        (self.text.len(), newlines)
    }

    /// Scan one token starting at `pos` (which must not be whitespace)
    fn scan_token(&self, pos: usize) -> (usize, TokenClass) {
        let rest = &self.text[pos..];

        if let Some(len) = self.rules.match_pattern(rest) {
            return (pos + len, TokenClass::Word);
        }

        let mut chars = rest.char_indices().peekable();
        let Some((_, first)) = chars.next() else {
            return (pos, TokenClass::Other);
        };

        if first.is_alphanumeric() {
            let mut end = first.len_utf8();
            let mut numeric = first.is_numeric();
            while let Some(&(offset, ch)) = chars.peek() {
                if ch.is_alphanumeric() {
                    numeric &= ch.is_numeric();
                    end = offset + ch.len_utf8();
                    chars.next();
                    continue;
                }
                let joins_word = self.rules.is_joiner(ch);
                let joins_number = numeric && self.rules.is_decimal_separator(ch);
                if !(joins_word || joins_number) {
                    break;
                }
                let after = rest[offset + ch.len_utf8()..].chars().next();
                let continues = match after {
                    Some(next) if joins_word && next.is_alphanumeric() => true,
                    Some(next) if joins_number && next.is_numeric() => true,
                    _ => false,
                };
                if !continues {
                    break;
                }
                chars.next();
            }
            return (pos + end, TokenClass::Word);
        }

        if self.rules.is_terminator(first) {
            let mut end = first.len_utf8();
            for (offset, ch) in chars {
                if !self.rules.is_terminator(ch) {
                    break;
                }
                end = offset + ch.len_utf8();
            }
            return (pos + end, TokenClass::Terminator);
        }

        (pos + first.len_utf8(), TokenClass::Other)
    }

    /// Whether the last pushed word suppresses a break on a following "."
    fn suppresses_break(&self, previous: Option<&str>, terminator: &str) -> bool {
        if terminator != "." {
            return false;
        }
        let Some(word) = previous else {
            return false;
        };
        if self.rules.is_abbreviation(word) {
            return true;
        }
        let mut chars = word.chars();
        self.rules.initials()
            && matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
    }

    fn push(&self, forms: &mut Vec<String>, ranges: &mut Vec<TokenRange>, start: usize, end: usize) {
        forms.push(self.rules.normalize(&self.text[start..end]));
        ranges.push(TokenRange::new(start, end - start));
    }
}

impl SentenceTokenizer for RuleTokenizer {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.cursor = 0;
    }

    fn next_sentence(&mut self, forms: &mut Vec<String>, ranges: &mut Vec<TokenRange>) -> bool {
        forms.clear();
        ranges.clear();

        let mut pending: Option<PendingBreak> = None;
        let mut last_word: Option<(usize, usize)> = None;

        loop {
            let (pos, newlines) = self.skip_whitespace(self.cursor);
            let spaced = pos > self.cursor;

            if pos >= self.text.len() {
                self.cursor = self.text.len();
                return !forms.is_empty();
            }
            if newlines >= 2 && !forms.is_empty() {
                self.cursor = pos;
                return true;
            }

            let (end, class) = self.scan_token(pos);
            let first = self.text[pos..end].chars().next();

            if let Some(state) = pending {
                let closer = !spaced && first.is_some_and(|c| self.rules.is_closer(c));
                if class == TokenClass::Terminator || closer {
                    // Stays attached to the sentence that is about to end
                } else if !spaced || state.suppressed {
                    pending = None;
                } else if self.rules.lowercase_continues()
                    && class == TokenClass::Word
                    && first.is_some_and(char::is_lowercase)
                {
                    pending = None;
                } else {
                    self.cursor = pos;
                    return true;
                }
            }

            self.push(forms, ranges, pos, end);
            self.cursor = end;

            match class {
                TokenClass::Terminator => {
                    if pending.is_none() {
                        let previous = last_word.map(|(s, e)| &self.text[s..e]);
                        pending = Some(PendingBreak {
                            suppressed: self.suppresses_break(previous, &self.text[pos..end]),
                        });
                    }
                    last_word = None;
                }
                TokenClass::Word => last_word = Some((pos, end)),
                TokenClass::Other => {
                    if pending.is_none() {
                        last_word = None;
                    }
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        self.rules.kind().name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{rules::rules_for, TokenizerKind};

    fn tokenize(kind: TokenizerKind, text: &str) -> Vec<Vec<String>> {
        let mut tokenizer = RuleTokenizer::new(rules_for(kind).unwrap());
        tokenizer.set_text(text);
        let mut forms = Vec::new();
        let mut ranges = Vec::new();
        let mut out = Vec::new();
        while tokenizer.next_sentence(&mut forms, &mut ranges) {
            assert_eq!(forms.len(), ranges.len());
            out.push(forms.clone());
        }
        out
    }

    #[test]
    fn test_czech_two_sentences() {
        assert_eq!(
            tokenize(TokenizerKind::Czech, "Je zima. Bude sněžit."),
            vec![vec!["Je", "zima", "."], vec!["Bude", "sněžit", "."]]
        );
    }

    #[test]
    fn test_generic_single_sentence() {
        assert_eq!(
            tokenize(TokenizerKind::Generic, "foo bar baz"),
            vec![vec!["foo", "bar", "baz"]]
        );
    }

    #[test]
    fn test_czech_abbreviation_does_not_split() {
        assert_eq!(
            tokenize(TokenizerKind::Czech, "Přišel např. Novák. Odešel."),
            vec![
                vec!["Přišel", "např", ".", "Novák", "."],
                vec!["Odešel", "."]
            ]
        );
    }

    #[test]
    fn test_initials_do_not_split() {
        assert_eq!(
            tokenize(TokenizerKind::English, "J. Smith left. He was tired."),
            vec![
                vec!["J", ".", "Smith", "left", "."],
                vec!["He", "was", "tired", "."]
            ]
        );
    }

    #[test]
    fn test_generic_splits_after_any_dot() {
        assert_eq!(
            tokenize(TokenizerKind::Generic, "Dr. Who"),
            vec![vec!["Dr", "."], vec!["Who"]]
        );
    }

    #[test]
    fn test_lowercase_continues() {
        assert_eq!(
            tokenize(TokenizerKind::Czech, "Bylo to atd. a pak nic."),
            vec![vec!["Bylo", "to", "atd", ".", "a", "pak", "nic", "."]]
        );
        assert_eq!(
            tokenize(TokenizerKind::Czech, "Ano... a co dál?"),
            vec![vec!["Ano", "...", "a", "co", "dál", "?"]]
        );
    }

    #[test]
    fn test_terminator_runs_and_closers() {
        assert_eq!(
            tokenize(TokenizerKind::Generic, "(Really?!) Yes."),
            vec![vec!["(", "Really", "?!", ")"], vec!["Yes", "."]]
        );
    }

    #[test]
    fn test_decimal_numbers() {
        assert_eq!(
            tokenize(TokenizerKind::Czech, "Stojí 3,50 Kč."),
            vec![vec!["Stojí", "3,50", "Kč", "."]]
        );
        assert_eq!(
            tokenize(TokenizerKind::English, "Pi is 3.14. Yes."),
            vec![vec!["Pi", "is", "3.14", "."], vec!["Yes", "."]]
        );
    }

    #[test]
    fn test_hyphenated_and_contractions() {
        assert_eq!(
            tokenize(TokenizerKind::English, "A well-known fact isn't news."),
            vec![vec!["A", "well-known", "fact", "isn't", "news", "."]]
        );
    }

    #[test]
    fn test_english_normalizes_form_but_not_range() {
        let text = "It isn\u{2019}t.";
        let mut tokenizer = RuleTokenizer::new(rules_for(TokenizerKind::English).unwrap());
        tokenizer.set_text(text);
        let mut forms = Vec::new();
        let mut ranges = Vec::new();
        assert!(tokenizer.next_sentence(&mut forms, &mut ranges));
        assert_eq!(forms, vec!["It", "isn't", "."]);
        assert_eq!(ranges[1].slice(text), Some("isn\u{2019}t"));
    }

    #[test]
    fn test_url_kept_whole() {
        assert_eq!(
            tokenize(TokenizerKind::Generic, "See https://example.org/x.html now."),
            vec![vec!["See", "https://example.org/x.html", "now", "."]]
        );
    }

    #[test]
    fn test_blank_line_ends_sentence() {
        assert_eq!(
            tokenize(TokenizerKind::Generic, "Heading\n\nBody text"),
            vec![vec!["Heading"], vec!["Body", "text"]]
        );
        assert_eq!(
            tokenize(TokenizerKind::Generic, "one\ntwo"),
            vec![vec!["one", "two"]]
        );
    }

    #[test]
    fn test_no_space_after_dot_keeps_sentence() {
        assert_eq!(
            tokenize(TokenizerKind::Generic, "a.b"),
            vec![vec!["a", ".", "b"]]
        );
    }

    #[test]
    fn test_empty_and_whitespace_text() {
        assert!(tokenize(TokenizerKind::Generic, "").is_empty());
        assert!(tokenize(TokenizerKind::Generic, "  \n\t ").is_empty());
    }
}
