//! Dice roll representation.
//!
//! A [`Roll`] is one throw of five dice. Construction via [`Roll::new`] is permissive and
//! accepts any face value; [`Roll::try_new`] additionally checks every face lies in
//! `MIN_FACE..=MAX_FACE`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A single die face value.
pub type Face = u8;

/// A category score.
pub type Score = u32;

/// Number of dice in a roll.
pub const NUM_DICE: usize = 5;

/// Lowest legal die face.
pub const MIN_FACE: Face = 1;

/// Highest legal die face.
pub const MAX_FACE: Face = 6;

/// Roll construction / parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RollError {
    #[error("die {index} shows {face}, expected 1..=6")]
    InvalidDieFace { index: usize, face: Face },
    #[error("expected 5 dice, got {got}")]
    WrongDiceCount { got: usize },
    #[error("invalid die face: {0:?}")]
    ParseFace(String),
}

/// One throw of five dice. Order is preserved but never affects scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roll {
    values: [Face; NUM_DICE],
}

impl Roll {
    /// Build a roll without checking face range.
    pub const fn new(values: [Face; NUM_DICE]) -> Self {
        Self { values }
    }

    /// Build a roll, rejecting any face outside `MIN_FACE..=MAX_FACE`.
    pub fn try_new(values: [Face; NUM_DICE]) -> Result<Self, RollError> {
        let roll = Self::new(values);
        roll.validate()?;
        Ok(roll)
    }

    /// Check every face lies in `MIN_FACE..=MAX_FACE`. Reports the first offending die.
    pub fn validate(&self) -> Result<(), RollError> {
        match self
            .values
            .iter()
            .position(|f| !(MIN_FACE..=MAX_FACE).contains(f))
        {
            Some(index) => Err(RollError::InvalidDieFace {
                index,
                face: self.values[index],
            }),
            None => Ok(()),
        }
    }

    pub fn values(&self) -> &[Face; NUM_DICE] {
        &self.values
    }

    /// Sum of all five faces.
    pub fn sum(&self) -> Score {
        self.values.iter().map(|&f| Score::from(f)).sum()
    }

    /// True iff every die shows the same face as the first one.
    pub fn is_uniform(&self) -> bool {
        self.count_of(self.values[0]) == NUM_DICE
    }

    /// Number of dice showing `face`.
    pub fn count_of(&self, face: Face) -> usize {
        self.values.iter().filter(|&&f| f == face).count()
    }
}

impl From<[Face; NUM_DICE]> for Roll {
    fn from(values: [Face; NUM_DICE]) -> Self {
        Self::new(values)
    }
}

impl TryFrom<&[Face]> for Roll {
    type Error = RollError;

    fn try_from(values: &[Face]) -> Result<Self, Self::Error> {
        let values: [Face; NUM_DICE] = values
            .try_into()
            .map_err(|_| RollError::WrongDiceCount { got: values.len() })?;
        Ok(Self::new(values))
    }
}

impl FromStr for Roll {
    type Err = RollError;

    /// Parse `"1,2,3,4,5"` or `"1 2 3 4 5"`. Face range is not checked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let faces = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<Face>().map_err(|_| RollError::ParseFace(t.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(faces.as_slice())
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, face) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{face}")?;
        }
        Ok(())
    }
}
