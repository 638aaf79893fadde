//! Ordered word-length tally.
//!
//! [`WordTally`] maps a word length to the number of words of that length.
//! Iteration is always in ascending length order; the most-frequent-length
//! computation relies on that ordering.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::word_length;

/// Length → occurrence count, iterated in ascending length order.
///
/// Every stored count is at least 1 and length 0 is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordTally {
    counts: BTreeMap<usize, usize>,
}

impl WordTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one word of `length` characters. Zero lengths are ignored.
    pub fn record(&mut self, length: usize) {
        if length == 0 {
            return;
        }
        *self.counts.entry(length).or_insert(0) += 1;
    }

    /// Counts one word.
    pub fn record_word(&mut self, word: &str) {
        self.record(word_length(word));
    }

    /// Number of words seen with exactly `length` characters.
    pub fn get(&self, length: usize) -> Option<usize> {
        self.counts.get(&length).copied()
    }

    /// `(length, count)` pairs in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(&length, &count)| (length, count))
    }

    /// Number of distinct lengths.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of words recorded.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Highest count of any length, `None` when empty.
    pub fn max_count(&self) -> Option<usize> {
        self.counts.values().copied().max()
    }

    /// Sum of `length * count` over all entries, `None` on overflow.
    pub fn weighted_length_sum(&self) -> Option<usize> {
        self.iter().try_fold(0usize, |acc, (length, count)| {
            length.checked_mul(count).and_then(|n| acc.checked_add(n))
        })
    }
}

impl<W: AsRef<str>> Extend<W> for WordTally {
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for word in iter {
            self.record_word(word.as_ref());
        }
    }
}

impl<W: AsRef<str>> FromIterator<W> for WordTally {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut tally = WordTally::new();
        tally.extend(iter);
        tally
    }
}
