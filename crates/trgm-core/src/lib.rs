//! # `trgm-core`
//!
//! Trigram extraction and similarity scoring with feature parity to
//! `PostgreSQL`'s `pg_trgm` `similarity()` function.
//!
//! Designed for approximate text matching (address or name deduplication)
//! where exact equality is too strict. It works best with ASCII text:
//! trigrams are byte-oriented, so multi-byte codepoints are compared byte
//! by byte rather than on a rune basis.
//!
//! ## How it works
//!
//! - Input is split into whitespace-delimited tokens.
//! - Each token is padded with two leading spaces and one trailing space,
//!   and a 3-byte window slides across it.
//! - The score of two strings is the ratio of distinct trigrams found in
//!   both to the distinct trigrams across both combined.
//!
//! ## Quick Start
//!
//! ```rust
//! use trgm_core::{extract_trigrams, strings_similarity};
//!
//! let score = strings_similarity("1600 Pennsylvania Ave", "1600 Penna Avenue");
//! assert!((score - 0.428_571).abs() < 1e-4);
//!
//! // "word" padded to "  word " → " w", " wo", "wor", "ord", "rd "
//! let trigrams = extract_trigrams("word");
//! assert_eq!(trigrams.len(), 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)] // Acceptable for score ratios
#![allow(clippy::must_use_candidate)]

pub mod extract;
pub mod similarity;
#[cfg(test)]
mod similarity_tests;
pub mod trigram;

pub use extract::extract_trigrams;
pub use similarity::{strings_similarity, trigrams_similarity};
pub use trigram::{Trigram, Trigrams};
