pub mod calculate;

use clap::Parser;

/// The calculator takes no flags or arguments; all interaction happens on
/// stdin/stdout. Parsing still gives us --help and --version.
#[derive(Parser)]
#[command(name = "annum")]
#[command(version)]
#[command(about = "An interactive birth year calculator.")]
pub struct CommandLine {}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
