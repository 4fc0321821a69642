//! # Birth Year Calculator
//!
//! Pure arithmetic over the current calendar year.
//!
//! The year is read from the system clock on every call and never cached,
//! so results stay correct across a year rollover in a long-lived session.

use annum_common::age::AgeError;
use chrono::{Datelike, Local};

/// The current calendar year according to the local system clock.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Estimates the birth year for someone who is `age` years old, assuming
/// their birthday has already occurred this year.
///
/// Rejects `age <= 0`. Callers that prompt for input validate first, so
/// the error path here guards direct API misuse only. There is no upper
/// bound: `birth_year(current_year())` is the degenerate case and returns
/// `0`.
pub fn birth_year(age: i32) -> Result<i32, AgeError> {
    validate(age)?;
    Ok(current_year() - age)
}

/// Like [`birth_year`], but resolves the ±1 ambiguity explicitly.
///
/// Someone who is `age` years old with a birthday still ahead of them
/// this year was born one year earlier than plain subtraction suggests.
pub fn birth_year_adjusted(age: i32, birthday_occurred: bool) -> Result<i32, AgeError> {
    let year: i32 = birth_year(age)?;
    if birthday_occurred {
        Ok(year)
    } else {
        Ok(year - 1)
    }
}

fn validate(age: i32) -> Result<(), AgeError> {
    if age < 0 {
        return Err(AgeError::Negative);
    }
    if age == 0 {
        return Err(AgeError::Zero);
    }
    Ok(())
}
