//! yz-core: Dice rolls, scoring categories, and configuration.

pub mod category;
pub mod config;
pub mod roll;
pub mod scoring;

#[cfg(test)]
mod roll_tests;
#[cfg(test)]
mod scoring_tests;

pub use category::{Category, CategoryError, CAT_NAMES, NUM_CATS};
pub use config::{Config, ConfigError};
pub use roll::{Face, Roll, RollError, Score, MAX_FACE, MIN_FACE, NUM_DICE};
pub use scoring::{Yatzy, YATZY_SCORE};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
