//! Category scoring rules.
//!
//! [`Yatzy`] carries no state; every method is a pure function of the roll.

use crate::category::{Category, NUM_CATS};
use crate::roll::{Roll, Score};

/// Score awarded by the yatzy category for a uniform roll, whatever the face.
pub const YATZY_SCORE: Score = 50;

/// Stateless scorer for the supported categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Yatzy;

impl Yatzy {
    pub const fn new() -> Self {
        Yatzy
    }

    /// Sum of all dice.
    pub fn chance(&self, roll: &Roll) -> Score {
        roll.sum()
    }

    /// [`YATZY_SCORE`] if all five dice match, else 0.
    pub fn yatzy(&self, roll: &Roll) -> Score {
        if roll.is_uniform() {
            YATZY_SCORE
        } else {
            0
        }
    }

    /// One point per die showing 1.
    pub fn ones(&self, roll: &Roll) -> Score {
        roll.count_of(1) as Score
    }

    pub fn score(&self, category: Category, roll: &Roll) -> Score {
        match category {
            Category::Ones => self.ones(roll),
            Category::Chance => self.chance(roll),
            Category::Yatzy => self.yatzy(roll),
        }
    }

    /// Scores for every category, indexed by [`Category::index`].
    pub fn score_all(&self, roll: &Roll) -> [Score; NUM_CATS] {
        Category::ALL.map(|c| self.score(c, roll))
    }

    /// Highest-scoring category. Ties go to the lowest category index.
    pub fn best(&self, roll: &Roll) -> (Category, Score) {
        let scores = self.score_all(roll);
        let mut best = (Category::ALL[0], scores[0]);
        for c in Category::ALL.into_iter().skip(1) {
            if scores[c.index()] > best.1 {
                best = (c, scores[c.index()]);
            }
        }
        best
    }
}
