//! Core engine types: configuration, errors, RNG.
//!
//! This module contains the building blocks the engine is assembled from.
//! Callers configure these via `CardConfig` rather than modifying the core.

pub mod config;
pub mod rng;

pub use config::{CardConfig, ConfigError, HEADER_LEN, MAX_NUMBER_MAX, MAX_NUMBER_MIN};
pub use rng::CardRng;
