//! Runtime configuration read from the environment.

use tracing::Level;

/// Environment variable holding the log level (`error`, `warn`, `info`, `debug`, `trace`).
pub const LOG_VAR: &str = "BAZ_LOG";

/// Any non-empty value disables ANSI colour, per <https://no-color.org>.
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// Process-wide settings for logging and fault diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub log_level: Level,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::WARN,
            color: true,
        }
    }
}

impl Config {
    /// Reads [`LOG_VAR`] and [`NO_COLOR_VAR`] from the process environment.
    ///
    /// Other variables are never decoded, and a non-UTF-8 value of either one is
    /// treated as unset.
    pub fn from_env() -> Self {
        let vars = [LOG_VAR, NO_COLOR_VAR].into_iter().filter_map(|name| {
            let value = std::env::var_os(name)?.into_string().ok()?;
            Some((name, value))
        });
        Self::from_vars(vars)
    }

    /// Builds a config from `(name, value)` pairs. Unknown names are ignored and an
    /// unparsable level keeps the default.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();

        for (name, value) in vars {
            let value = value.as_ref();
            match name.as_ref() {
                LOG_VAR => {
                    if let Ok(level) = value.trim().parse::<Level>() {
                        config.log_level = level;
                    }
                }
                NO_COLOR_VAR => {
                    if !value.is_empty() {
                        config.color = false;
                    }
                }
                _ => {}
            }
        }

        config
    }
}
