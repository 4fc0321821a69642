#![cfg(test)]
use annum_common::age::MAX_AGE;
use annum_core::{calculator, session};
use chrono::{Datelike, Local};
use std::io::Cursor;

/// Current year fetched directly from chrono, independent of the
/// calculator's own clock read. Never hardcoded.
fn this_year() -> i32 {
    Local::now().year()
}

/// Drives a complete session against in-memory console buffers.
fn run_session(input: &str) -> anyhow::Result<String> {
    let mut output: Vec<u8> = Vec::new();
    session::run(Cursor::new(input), &mut output)?;
    Ok(String::from_utf8(output)?)
}

#[test]
fn end_to_end_single_calculation() -> anyhow::Result<()> {
    let output: String = run_session("30\nno\n")?;

    let expected = format!(
        "Enter your age: If you are 30 years old, you were born in {}.\n\
         Would you like to calculate again? (yes/no): Goodbye!\n",
        this_year() - 30
    );
    assert_eq!(output, expected, "unexpected session transcript");
    Ok(())
}

#[test]
fn end_to_end_recovers_from_bad_input() -> anyhow::Result<()> {
    let output: String = run_session("abc\n25\nno\n")?;

    assert!(
        output.contains("Invalid input. Please enter a valid number."),
        "missing parse error line: {output}"
    );
    assert!(
        output.contains(&format!(
            "If you are 25 years old, you were born in {}.",
            this_year() - 25
        )),
        "missing result for the retried age: {output}"
    );
    assert!(output.ends_with("Goodbye!\n"));
    Ok(())
}

#[test]
fn end_to_end_repeated_calculations() -> anyhow::Result<()> {
    let output: String = run_session("1\nyes\n150\nno\n")?;

    assert!(output.contains(&format!(
        "If you are 1 years old, you were born in {}.",
        this_year() - 1
    )));
    assert!(output.contains(&format!(
        "If you are 150 years old, you were born in {}.",
        this_year() - 150
    )));
    Ok(())
}

#[test]
fn end_to_end_closed_stdin_exits_cleanly() -> anyhow::Result<()> {
    let output: String = run_session("")?;
    assert_eq!(output, "Enter your age: Goodbye!\n");
    Ok(())
}

#[test]
fn calculator_agrees_with_an_independent_clock() {
    // The session's own unit tests compare against the calculator; here the
    // expectation comes from a separate chrono read instead.
    for age in 1..=MAX_AGE {
        assert_eq!(calculator::birth_year(age), Ok(this_year() - age));
    }
}

#[test]
fn birthday_flag_shifts_the_estimate() {
    assert_eq!(calculator::birth_year_adjusted(30, true), Ok(this_year() - 30));
    assert_eq!(
        calculator::birth_year_adjusted(30, false),
        Ok(this_year() - 31)
    );
}
