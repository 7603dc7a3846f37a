//! Diagnostics on stderr through `tracing-subscriber`.
//!
//! `RUST_LOG` takes precedence over `-v`/`-q`.

use tracing_subscriber::EnvFilter;

/// Filter directive for the given flags.
pub fn default_directive(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Does nothing if one is already set.
pub fn init(quiet: bool, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_directive(false, 0), "warn");
        assert_eq!(default_directive(false, 1), "info");
        assert_eq!(default_directive(false, 2), "debug");
        assert_eq!(default_directive(false, 7), "trace");
        assert_eq!(default_directive(true, 0), "error");
    }
}
