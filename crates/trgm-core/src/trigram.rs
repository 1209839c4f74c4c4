//! Trigram value types.
//!
//! A [`Trigram`] packs the three bytes of one window into a single `u32`,
//! giving cheap structural equality and hashing. A [`Trigrams`] sequence is
//! the ordered output of extraction, duplicates included.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Space byte used for token padding (ASCII 32).
pub(crate) const PAD: u8 = b' ';

/// Three consecutive bytes of a padded token packed into a `u32`.
///
/// Byte layout: the earliest character sits in bits 16..24, the second in
/// bits 8..16, the third in bits 0..8. A zero low byte marks the short
/// leading form, which carries only two characters (one pad space plus the
/// token's first byte). Equality and hashing follow the packed integer, so
/// a trigram works directly as a key in hash sets and maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trigram(u32);

impl Trigram {
    /// Packs a full three-byte window.
    pub(crate) fn full(b0: u8, b1: u8, b2: u8) -> Self {
        Self(u32::from(b0) << 16 | u32::from(b1) << 8 | u32::from(b2))
    }

    /// Packs the short leading form: one pad space plus the token's first
    /// byte, with the low byte forced to zero.
    pub(crate) fn short(b0: u8, b1: u8) -> Self {
        Self(u32::from(b0) << 16 | u32::from(b1) << 8)
    }

    /// Returns the packed integer value.
    #[must_use]
    pub const fn packed(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Trigram {
    /// Reconstructs the 2–3 characters the trigram represents.
    ///
    /// A zero low byte renders as two characters (the short leading form).
    /// A trigram whose true third byte is NUL is therefore indistinguishable
    /// from the short form; byte value 0 is not expected in normal text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8];
        write!(f, "{}{}", char::from(bytes[0]), char::from(bytes[1]))?;
        if bytes[2] != 0 {
            write!(f, "{}", char::from(bytes[2]))?;
        }
        Ok(())
    }
}

/// Ordered, repeats-allowed sequence of trigrams produced by extraction.
///
/// Order follows the left-to-right scan across tokens in the order tokens
/// appear in the source string. Duplicates are preserved here; only the
/// scorer deduplicates, where membership rather than multiplicity decides
/// the score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trigrams(Vec<Trigram>);

impl Trigrams {
    /// Number of trigrams in the sequence, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the sequence holds no trigrams.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the trigrams in extraction order.
    pub fn iter(&self) -> std::slice::Iter<'_, Trigram> {
        self.0.iter()
    }

    /// View of the sequence as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Trigram] {
        &self.0
    }

    /// Similarity of this sequence against another, in `[0, 1]`.
    #[must_use]
    pub fn similarity(&self, other: &Trigrams) -> f64 {
        crate::similarity::trigrams_similarity(self, other)
    }

    /// Similarity against a raw string, extracting its trigrams first.
    #[must_use]
    pub fn similarity_to_str(&self, s: &str) -> f64 {
        crate::similarity::trigrams_similarity(self, &crate::extract::extract_trigrams(s))
    }

    pub(crate) fn push(&mut self, trigram: Trigram) {
        self.0.push(trigram);
    }
}

impl From<Vec<Trigram>> for Trigrams {
    fn from(trigrams: Vec<Trigram>) -> Self {
        Self(trigrams)
    }
}

impl FromIterator<Trigram> for Trigrams {
    fn from_iter<I: IntoIterator<Item = Trigram>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Trigrams {
    type Item = Trigram;
    type IntoIter = std::vec::IntoIter<Trigram>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trigrams {
    type Item = &'a Trigram;
    type IntoIter = std::slice::Iter<'a, Trigram>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
