//! # Interactive Session
//!
//! The prompt/validate/compute/display loop, generic over its reader and
//! writer so tests can drive a full session against in-memory buffers.
//!
//! Everything the user sees goes through `output`; diagnostics are emitted
//! as tracing events and stay off stdout.

use std::io::{BufRead, Write};

use annum_common::age::Age;
use tracing::{debug, warn};

use crate::calculator;

const AGE_PROMPT: &str = "Enter your age: ";
const CONTINUE_PROMPT: &str = "Would you like to calculate again? (yes/no): ";
const FAREWELL: &str = "Goodbye!";

/// Runs the interactive loop until the user declines to continue or the
/// input stream ends.
///
/// Invalid input re-prompts and never terminates the session. EOF on
/// either prompt ends it gracefully. The farewell line is printed on
/// every exit path.
pub fn run<R: BufRead, W: Write>(mut input: R, output: &mut W) -> anyhow::Result<()> {
    let mut calculations: u32 = 0;

    loop {
        write!(output, "{AGE_PROMPT}")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        let answer: &str = line.trim();

        let age: Age = match answer.parse() {
            Ok(age) => age,
            Err(err) => {
                warn!(input = answer, "rejected age input");
                writeln!(output, "{err}")?;
                continue;
            }
        };

        // Age is pre-validated, so the calculator's own guard cannot fire.
        let birth_year: i32 = calculator::birth_year(age.years())?;
        calculations += 1;
        debug!(age = age.years(), birth_year, "calculated");

        writeln!(output, "If you are {age} years old, you were born in {birth_year}.")?;

        write!(output, "{CONTINUE_PROMPT}")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        if !line.trim().eq_ignore_ascii_case("yes") {
            break;
        }
    }

    writeln!(output, "{FAREWELL}")?;
    debug!(calculations, "session finished");
    Ok(())
}

/// Reads one line, returning `None` once the stream is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
