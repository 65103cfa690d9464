//! Command-line interface for `iterm-theme`.
//!
//! The generated document never depends on arguments. The only option
//! controls how much diagnostic logging goes to stderr.
//!
//! ```bash
//! iterm-theme > Theme.itermcolors
//! iterm-theme -vv > Theme.itermcolors   # debug logging on stderr
//! ```

use clap::Parser;
use tracing::Level;

/// Print an iTerm2 color preset with default, light and dark variants.
#[derive(Parser, Debug, Clone)]
#[command(name = "iterm-theme", author, version, about)]
pub struct Cli {
    /// Enable verbose logging (repeat for more)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Log level based on verbosity.
    #[must_use]
    pub const fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
