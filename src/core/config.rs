//! Engine configuration and its validation rules.
//!
//! A [`CardConfig`] is the immutable pair of a 5-letter header word and the
//! maximum number of the game. Everything else the engine needs - the size of
//! the numeric span allotted to each column - is derived from it at
//! construction time.
//!
//! Construction is the only fallible step in the whole engine: once a config
//! exists, it is valid by construction and never changes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of letters in the header word (and columns/rows on a card).
pub const HEADER_LEN: usize = 5;

/// Smallest accepted maximum number.
pub const MAX_NUMBER_MIN: u32 = 50;

/// Largest accepted maximum number.
pub const MAX_NUMBER_MAX: u32 = 90;

/// Configuration errors, raised only at construction time.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The header word does not have exactly 5 letters.
    #[error("header word must have exactly {HEADER_LEN} letters, got {0}")]
    HeaderLength(usize),

    /// The header word repeats a letter (case-insensitive).
    #[error("header letters must not repeat, '{0}' appears more than once")]
    RepeatedLetter(char),

    /// The maximum number lies outside `[50, 90]`.
    #[error("maximum number must be between {MAX_NUMBER_MIN} and {MAX_NUMBER_MAX}, got {0}")]
    MaxNumberOutOfRange(u32),

    /// The maximum number is not a multiple of 5.
    #[error("maximum number must be a multiple of {HEADER_LEN}, got {0}")]
    MaxNumberNotMultiple(u32),
}

/// Immutable engine configuration.
///
/// Holds the normalized (uppercase) header letters, the maximum number, and
/// the derived per-column span. Column `c` owns the inclusive range
/// `[c * span + 1, (c + 1) * span]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    header: [char; HEADER_LEN],
    max_number: u32,
    column_span: u32,
}

impl CardConfig {
    /// Validate and build a configuration.
    ///
    /// The header is normalized to uppercase before any check, so
    /// `"bingo"` and `"BINGO"` are the same configuration and `"AaBCD"`
    /// is rejected for the repeated `A`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the header does not normalize to exactly
    /// 5 distinct letters, or if `max_number` is not a multiple of 5 in
    /// `[50, 90]`. Construction is all-or-nothing.
    pub fn new(header: &str, max_number: u32) -> Result<Self, ConfigError> {
        let letters: Vec<char> = header.chars().flat_map(char::to_uppercase).collect();
        if letters.len() != HEADER_LEN {
            return Err(ConfigError::HeaderLength(letters.len()));
        }
        for (i, &letter) in letters.iter().enumerate() {
            if letters[..i].contains(&letter) {
                return Err(ConfigError::RepeatedLetter(letter));
            }
        }

        if !(MAX_NUMBER_MIN..=MAX_NUMBER_MAX).contains(&max_number) {
            return Err(ConfigError::MaxNumberOutOfRange(max_number));
        }
        if max_number % HEADER_LEN as u32 != 0 {
            return Err(ConfigError::MaxNumberNotMultiple(max_number));
        }

        let mut normalized = ['\0'; HEADER_LEN];
        normalized.copy_from_slice(&letters);

        Ok(Self {
            header: normalized,
            max_number,
            column_span: max_number / HEADER_LEN as u32,
        })
    }

    /// The normalized header letters, one per column.
    #[must_use]
    pub fn header(&self) -> &[char; HEADER_LEN] {
        &self.header
    }

    /// The largest number that can appear on a card.
    #[must_use]
    pub fn max_number(&self) -> u32 {
        self.max_number
    }

    /// Size of the numeric range allotted to each column (`max_number / 5`).
    ///
    /// Always at least 10, so every column can draw 5 distinct numbers.
    #[must_use]
    pub fn column_span(&self) -> u32 {
        self.column_span
    }

    /// Inclusive numeric range owned by column `col` (0-indexed).
    #[must_use]
    pub fn column_range(&self, col: usize) -> std::ops::RangeInclusive<u32> {
        let lo = col as u32 * self.column_span + 1;
        lo..=lo + self.column_span - 1
    }
}

impl Default for CardConfig {
    /// The classic game: header `BINGO`, numbers up to 75.
    fn default() -> Self {
        Self::new("BINGO", 75).expect("default configuration is valid")
    }
}
