#![forbid(unsafe_code)]

//! # iterm-theme
//!
//! Prints the generated iTerm2 color preset to stdout.
//!
//! ```bash
//! iterm-theme > Theme.itermcolors
//! ```

use std::io::{self, Write};

use anyhow::Context;
use iterm_theme::cli::Cli;
use iterm_theme::{logging, theme_document};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    logging::init(cli.log_level())?;

    // Build everything before writing so a bad color leaves stdout empty.
    let document = theme_document()?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{document}").context("failed to write theme to stdout")?;
    stdout.flush().context("failed to flush stdout")?;

    tracing::info!(document.bytes = document.len(), "Theme written");
    Ok(())
}
