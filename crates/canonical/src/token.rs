use std::str::CharIndices;

use serde::{Deserialize, Serialize};

use crate::delimiter::is_delimiter;

/// A word with its UTF-8 byte offsets in the source text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The word itself.
    pub text: String,
    /// Byte offset (inclusive) in the source text.
    pub start: usize,
    /// Byte offset (exclusive) in the source text.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Borrowing iterator over the words of a text.
///
/// Runs of delimiters collapse, so no empty word is ever produced. Created by
/// [`words`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
}

impl<'a> Words<'a> {
    fn next_span(&mut self) -> Option<(usize, usize)> {
        let mut start: Option<usize> = None;

        for (idx, ch) in self.chars.by_ref() {
            if is_delimiter(ch) {
                if let Some(word_start) = start {
                    return Some((word_start, idx));
                }
            } else if start.is_none() {
                start = Some(idx);
            }
        }

        start.map(|word_start| (word_start, self.text.len()))
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_span().map(|(start, end)| &self.text[start..end])
    }
}

/// Splits `text` into words without allocating.
pub fn words(text: &str) -> Words<'_> {
    Words {
        text,
        chars: text.char_indices(),
    }
}

/// Tokenizes `text` and keeps the byte offsets of every word.
///
/// Deterministic and cross-platform. Same words as [`words`], in the same
/// order.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut spans = words(text);
    let mut tokens = Vec::new();

    while let Some((start, end)) = spans.next_span() {
        tokens.push(Token {
            text: text[start..end].to_string(),
            start,
            end,
        });
    }

    tokens
}
