//! Diagnostic logging setup for the binary.
//!
//! Logs go to stderr so stdout carries nothing but the generated document.

use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG`-style directives win over the CLI level.
#[must_use]
pub fn build_filter(level: Level, directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(LevelFilter::from_level(level).into()))
}

/// Installs the global stderr subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn init(level: Level) -> Result<(), SetGlobalDefaultError> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level, directives.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_without_directives() {
        assert_eq!(build_filter(Level::DEBUG, None).to_string(), "debug");
        assert_eq!(build_filter(Level::WARN, None).to_string(), "warn");
    }

    #[test]
    fn directives_override_level() {
        let filter = build_filter(Level::WARN, Some("iterm_theme=trace"));
        assert_eq!(filter.to_string(), "iterm_theme=trace");
    }

    #[test]
    fn blank_directives_fall_back() {
        assert_eq!(build_filter(Level::INFO, Some("  ")).to_string(), "info");
    }
}
