//! # Age Model
//!
//! Defines the validated age accepted by the prompt.
//!
//! An [`Age`] can only be obtained through [`Age::new`] or [`FromStr`],
//! both of which enforce the `1..=MAX_AGE` range. The [`AgeError`]
//! variants double as the user-facing rejection messages.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Oldest age the prompt accepts. The oldest verified human lived to 122;
/// anything above this is treated as a typo rather than a birthday.
pub const MAX_AGE: i32 = 150;

/// An age in whole years, guaranteed to lie in `1..=MAX_AGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Age(i32);

/// Why a candidate age was rejected.
///
/// The `Display` output of each variant is printed to the user verbatim,
/// so the wording here is part of the console contract.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AgeError {
    #[error("Invalid input. Please enter a valid number.")]
    NotNumeric,
    #[error("Invalid input. Age cannot be negative.")]
    Negative,
    #[error("Invalid input. Age must be greater than zero.")]
    Zero,
    #[error("Invalid input. Please enter a realistic age (1-{}).", MAX_AGE)]
    Unrealistic,
}

impl Age {
    /// Validates `years` and wraps it.
    pub fn new(years: i32) -> Result<Self, AgeError> {
        if years < 0 {
            return Err(AgeError::Negative);
        }
        if years == 0 {
            return Err(AgeError::Zero);
        }
        if years > MAX_AGE {
            return Err(AgeError::Unrealistic);
        }
        Ok(Self(years))
    }

    pub fn years(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Age {
    type Err = AgeError;

    /// Parses a line of console input into an `Age`.
    ///
    /// Surrounding whitespace is tolerated. Anything that does not parse
    /// as an integer (including empty input and values outside `i32`)
    /// is reported as `NotNumeric`; range checks come after.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let years: i32 = s.trim().parse().map_err(|_| AgeError::NotNumeric)?;
        Self::new(years)
    }
}
