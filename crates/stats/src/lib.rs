//! # Wordstat Statistics
//!
//! Turns a word sequence into word-length statistics: how many words there
//! are, their mean length, the full length histogram, and the lengths that
//! occur most often.
//!
//! ## Contract
//!
//! - Consumes words produced upstream by the tokenizer; never tokenizes or
//!   reads request state itself (unless the `with_canonical` feature is
//!   enabled, which adds [`analyze_text`] as a shortcut).
//! - Pure function of the word sequence. No I/O, no clocks.
//! - An empty word sequence is an error ([`StatsError::EmptyText`]), never a
//!   zero result.
//!
//! ## Invariants of a [`WordStatistics`]
//!
//! 1. `grouped_counts.total() == word_count`
//! 2. `average_word_length == Σ(length × count) / word_count`
//! 3. `most_frequent_lengths` is non-empty, holds every length whose count
//!    equals the maximum count and nothing else, ascending by length.
//!
//! ## Example Usage
//!
//! ```
//! use stats::analyze;
//!
//! let stats = analyze(["thy", "brother's", "blood"]).unwrap();
//!
//! assert_eq!(stats.word_count, 3);
//! assert_eq!(stats.most_frequent_lengths.len(), 3);
//! assert!((stats.average_word_length - 17.0 / 3.0).abs() < 1e-9);
//! ```

mod error;
mod tally;

use serde::Serialize;

pub use crate::error::StatsError;
pub use crate::tally::WordTally;

/// A word length paired with how many words have it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthFrequency {
    pub length: usize,
    pub count: usize,
}

/// Derived statistics for one word sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordStatistics {
    pub word_count: usize,
    pub average_word_length: f64,
    pub grouped_counts: WordTally,
    pub most_frequent_lengths: Vec<LengthFrequency>,
}

impl WordStatistics {
    /// Derives count, mean and modal lengths from a finished tally.
    pub fn from_tally(tally: WordTally) -> Result<Self, StatsError> {
        let word_count = tally.total();
        let Some(max_count) = tally.max_count() else {
            return Err(StatsError::EmptyText);
        };

        let total_length = tally.weighted_length_sum().ok_or_else(|| {
            StatsError::Processing("length-weighted sum exceeds usize".to_string())
        })?;
        let average_word_length = total_length as f64 / word_count as f64;

        // BTreeMap order keeps the ties ascending by length.
        let most_frequent_lengths = tally
            .iter()
            .filter(|&(_, count)| count == max_count)
            .map(|(length, count)| LengthFrequency { length, count })
            .collect();

        Ok(Self {
            word_count,
            average_word_length,
            grouped_counts: tally,
            most_frequent_lengths,
        })
    }
}

/// Length of a word in Unicode scalar values.
///
/// This intentionally differs from UTF-16 counting: `"\u{1D49C}bc"` has
/// length 3, not 4.
#[inline]
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

/// Computes statistics over `words` in a single pass.
pub fn analyze<I, W>(words: I) -> Result<WordStatistics, StatsError>
where
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    WordStatistics::from_tally(words.into_iter().collect())
}

/// Tokenizes `text` with the fixed delimiter policy and analyzes the words.
#[cfg(feature = "with_canonical")]
pub fn analyze_text(text: &str) -> Result<WordStatistics, StatsError> {
    analyze(canonical::words(text))
}
