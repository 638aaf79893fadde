//! Wordstat tokenizer.
//!
//! Splits raw text into words under one fixed delimiter policy. The word
//! sequence produced here feeds the statistics stage directly, so the
//! delimiter set is part of the contract: changing it changes every count.
//!
//! ## Delimiter policy
//!
//! - Any Unicode whitespace
//! - `( ) { } [ ] ¬ ! * + - _ = | ~ \ ^ < > . ? ; : "`
//!
//! Everything else, apostrophes and slashes included, stays inside a word.
//! Delimiters are discarded and runs of them never produce empty words.
//!
//! ## Pure function guarantee
//!
//! No I/O, no configuration, no locale. Same text in, same words out.

mod delimiter;
mod token;

pub use crate::delimiter::{is_delimiter, DELIMITERS};
pub use crate::token::{tokenize, words, Token, Words};
