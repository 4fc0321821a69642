pub struct Config {
    /// Suppresses the banner and decorative framing.
    ///
    /// Set automatically when stdout is not attached to a terminal, so
    /// piped sessions produce nothing but the prompts and results.
    pub no_banner: bool,
}
