//! # bingo-card-engine
//!
//! A configurable bingo card generation and validation engine.
//!
//! ## Design Principles
//!
//! 1. **Header-Agnostic**: No hardcoded "BINGO". Engines are configured with
//!    any 5-letter word with distinct letters and any maximum number that is
//!    a multiple of 5 in `[50, 90]`.
//!
//! 2. **Injected Randomness**: Generation takes an explicit [`CardRng`].
//!    Same seed, same card - deterministic tests come for free.
//!
//! 3. **Total Operations**: Only construction can fail. Generation, rendering,
//!    and validation never error on a validly constructed engine.
//!
//! ## Architecture
//!
//! - **Column partitioning**: the numeric range `1..=max_number` is split into
//!   five equal spans of `max_number / 5`, one per column. Each column draws
//!   its five numbers uniformly without replacement from its own span.
//!
//! - **Free cell**: the center cell (row 2, column 2) is always overwritten
//!   with [`Cell::Free`] after the columns are filled.
//!
//! ## Modules
//!
//! - `core`: configuration, errors, RNG
//! - `card`: the `Card` grid and `Cell` variants
//! - `engine`: `CardEngine` - generate, render, validate
//!
//! ## Example
//!
//! ```
//! use bingo_card_engine::{CardEngine, CardRng};
//!
//! let engine = CardEngine::new("BINGO", 75).unwrap();
//! let mut rng = CardRng::new(42);
//! let card = engine.generate_card(&mut rng);
//!
//! assert!(engine.validate_card(&card));
//! println!("{}", engine.render_card(&card));
//! ```

pub mod card;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::card::{Card, Cell, CARD_SIZE, FREE_COL, FREE_ROW};
pub use crate::core::{CardConfig, CardRng, ConfigError};
pub use crate::engine::CardEngine;
