//! Property-based tests for the statistics invariants.

use proptest::prelude::*;
use stats::{analyze, word_length, StatsError};

fn word_sequence() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z'/&0-9]{1,14}", 1..200)
}

proptest! {
    #[test]
    fn tally_sums_to_word_count(words in word_sequence()) {
        let stats = analyze(&words).unwrap();
        prop_assert_eq!(stats.grouped_counts.total(), stats.word_count);
        prop_assert_eq!(stats.word_count, words.len());
    }

    #[test]
    fn average_is_length_weighted_mean(words in word_sequence()) {
        let stats = analyze(&words).unwrap();
        let total: usize = words.iter().map(|w| word_length(w)).sum();
        let expected = total as f64 / words.len() as f64;
        prop_assert!((stats.average_word_length - expected).abs() < 1e-3);
    }

    #[test]
    fn most_frequent_lengths_are_exactly_the_maxima(words in word_sequence()) {
        let stats = analyze(&words).unwrap();
        let max = stats.grouped_counts.max_count().unwrap();

        prop_assert!(!stats.most_frequent_lengths.is_empty());
        for pair in stats.most_frequent_lengths.windows(2) {
            prop_assert!(pair[0].length < pair[1].length);
        }
        for freq in &stats.most_frequent_lengths {
            prop_assert_eq!(freq.count, max);
        }
        let expected: Vec<usize> = stats
            .grouped_counts
            .iter()
            .filter(|&(_, count)| count == max)
            .map(|(length, _)| length)
            .collect();
        let got: Vec<usize> = stats.most_frequent_lengths.iter().map(|f| f.length).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn blank_words_never_count(n in 0usize..50) {
        let words = vec![String::new(); n];
        prop_assert_eq!(analyze(&words), Err(StatsError::EmptyText));
    }
}
