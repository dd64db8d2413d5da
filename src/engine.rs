//! The card engine: generate, render, validate.
//!
//! [`CardEngine`] owns an immutable [`CardConfig`] and exposes the three
//! operations of the system. Construction is the only fallible step; the
//! operations themselves are total. The engine holds no mutable state, so one
//! instance can serve any number of cards (or threads) at once.

use log::debug;
use rustc_hash::FxHashSet;
use std::fmt::Write as _;

use crate::card::{Card, Cell, CARD_SIZE, FREE_COL, FREE_ROW};
use crate::core::config::{CardConfig, ConfigError};
use crate::core::rng::CardRng;

/// Width of one rendered cell. Fits two-digit numbers and the `FREE` label.
const CELL_WIDTH: usize = 4;

/// Bingo card engine.
///
/// ```
/// use bingo_card_engine::{CardEngine, CardRng};
///
/// let engine = CardEngine::new("PLENO", 50).unwrap();
/// let card = engine.generate_card(&mut CardRng::new(7));
/// assert!(engine.validate_card(&card));
/// ```
#[derive(Clone, Debug)]
pub struct CardEngine {
    config: CardConfig,
}

impl CardEngine {
    /// Build an engine from a header word and maximum number.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the header does not normalize to 5
    /// distinct letters or the maximum is not a multiple of 5 in `[50, 90]`.
    /// The error is surfaced as-is; nothing is silently corrected.
    pub fn new(header: &str, max_number: u32) -> Result<Self, ConfigError> {
        Ok(Self::from_config(CardConfig::new(header, max_number)?))
    }

    /// Build an engine from an already validated configuration.
    #[must_use]
    pub fn from_config(config: CardConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Generate a fresh card.
    ///
    /// Each column draws its 5 numbers uniformly without replacement from its
    /// own span and keeps them in draw order; the center cell is then
    /// overwritten with the free space. The result always satisfies
    /// [`validate_card`](Self::validate_card).
    #[must_use]
    pub fn generate_card(&self, rng: &mut CardRng) -> Card {
        let mut cells = [[Cell::Free; CARD_SIZE]; CARD_SIZE];

        for col in 0..CARD_SIZE {
            let drawn = rng.sample_distinct(self.config.column_range(col), CARD_SIZE);
            for (row, &number) in drawn.iter().enumerate() {
                cells[row][col] = Cell::Number(number);
            }
        }
        // The number drawn for the center is discarded, not reused elsewhere
        cells[FREE_ROW][FREE_COL] = Cell::Free;

        debug!(
            "generated card (header {:?}, max {})",
            self.config.header().iter().collect::<String>(),
            self.config.max_number()
        );
        Card::from_rows(cells)
    }

    /// Render a card as text.
    ///
    /// Header line, separator rule, one line per row with every cell
    /// right-aligned in a fixed-width field, closing rule. Pure formatting:
    /// the card is not validated, and rendering an invalid card works fine.
    #[must_use]
    pub fn render_card(&self, card: &Card) -> String {
        let line_width = CARD_SIZE * CELL_WIDTH + (CARD_SIZE - 1);
        let mut out = String::new();

        let header = self
            .config
            .header()
            .iter()
            .map(|letter| format!("{letter:>CELL_WIDTH$}"))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "{header}");
        let _ = writeln!(out, "{}", "-".repeat(line_width));

        for row in card.rows() {
            let line = row
                .iter()
                .map(|cell| format!("{:>CELL_WIDTH$}", cell.to_string()))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(out, "{line}");
        }
        let _ = writeln!(out, "{}", "-".repeat(line_width));

        out
    }

    /// Check that a card respects the column ranges and has no duplicates.
    ///
    /// Free cells are skipped wherever they appear; this check deliberately
    /// does not require a free cell to exist, be unique, or sit at the
    /// center. Returns `false` as soon as a number falls outside its
    /// column's range, then requires all remaining numbers to be pairwise
    /// distinct across the whole card.
    #[must_use]
    pub fn validate_card(&self, card: &Card) -> bool {
        let mut numbers = Vec::with_capacity(CARD_SIZE * CARD_SIZE);

        for col in 0..CARD_SIZE {
            let range = self.config.column_range(col);
            for cell in card.column(col) {
                match cell {
                    Cell::Free => continue,
                    Cell::Number(n) => {
                        if !range.contains(&n) {
                            return false;
                        }
                        numbers.push(n);
                    }
                }
            }
        }

        let mut seen = FxHashSet::default();
        numbers.into_iter().all(|n| seen.insert(n))
    }
}

impl Default for CardEngine {
    /// The classic game: header `BINGO`, numbers up to 75.
    fn default() -> Self {
        Self::from_config(CardConfig::default())
    }
}
