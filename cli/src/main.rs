mod commands;
mod terminal;

use std::io::{self, IsTerminal};

use annum_common::config::Config;
use commands::{CommandLine, calculate};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let _commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        no_banner: !io::stdout().is_terminal(),
    };

    calculate::calculate(&cfg)
}
