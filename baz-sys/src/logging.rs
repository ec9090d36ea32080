//! Logging setup for consumer binaries.

use crate::config::Config;

/// Installs a global `tracing` subscriber writing to stderr.
///
/// Returns `false` if a global subscriber was already set, in which case the
/// existing one is left alone.
pub fn init(config: &Config) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_ansi(config.color)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = %config.log_level, color = config.color, "logging initialised");
    }

    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let config = Config::default();
        // Another test in this binary may have won the race, so only the second
        // call's outcome is certain.
        let _ = init(&config);
        assert!(!init(&config));
    }
}
