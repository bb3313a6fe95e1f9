//! Scoring categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NUM_CATS: usize = 3;

/// Category names in index order.
pub const CAT_NAMES: [&str; NUM_CATS] = ["ones", "chance", "yatzy"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("unknown category: {0:?} (expected one of ones, chance, yatzy)")]
    Unknown(String),
}

/// A scoring category. Discriminants are the category index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// One point per die showing 1.
    Ones = 0,
    /// Sum of all dice.
    Chance = 1,
    /// Fixed bonus when all five dice match.
    Yatzy = 2,
}

impl Category {
    /// All categories in index order.
    pub const ALL: [Category; NUM_CATS] = [Category::Ones, Category::Chance, Category::Yatzy];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        CAT_NAMES[self.index()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CategoryError::Unknown(s.to_string()))
    }
}
