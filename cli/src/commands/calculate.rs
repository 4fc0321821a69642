use std::io;

use annum_common::config::Config;
use annum_core::session;

use crate::terminal::print;

/// Wires the real console into the session loop.
pub fn calculate(cfg: &Config) -> anyhow::Result<()> {
    print::banner(cfg.no_banner);
    print::header("birth year calculator", cfg.no_banner);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(stdin.lock(), &mut stdout.lock())?;

    print::end_of_program(cfg.no_banner);
    Ok(())
}
