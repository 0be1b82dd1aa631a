//! Session configuration, read from the environment at startup.

use core::str::FromStr;

use thiserror::Error;

/// Environment variable selecting the session mode.
pub const SESSION_MODE_VAR: &str = "DRINKS_SESSION_MODE";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid session mode {0:?} (expected \"until-exit\" or \"single\")")]
    InvalidSessionMode(String),
}

/// Whether the menu returns after a completed action or ends the session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// Show the menu again after every action; only "Exit" or end of input stop.
    #[default]
    UntilExit,
    /// End the session after the first completed action.
    Single,
}

impl SessionMode {
    pub fn ends_after_action(self) -> bool {
        matches!(self, SessionMode::Single)
    }
}

impl FromStr for SessionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "until-exit" | "loop" | "repeat" => Ok(SessionMode::UntilExit),
            "single" | "once" | "one-shot" => Ok(SessionMode::Single),
            _ => Err(ConfigError::InvalidSessionMode(s.to_string())),
        }
    }
}

impl core::fmt::Display for SessionMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SessionMode::UntilExit => f.write_str("until-exit"),
            SessionMode::Single => f.write_str("single"),
        }
    }
}

/// Settings for one interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub session_mode: SessionMode,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Invalid values fall back to the
    /// default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let session_mode = match lookup(SESSION_MODE_VAR) {
            None => SessionMode::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err: ConfigError| {
                tracing::warn!(
                    error = %err,
                    fallback = %SessionMode::default(),
                    "ignoring {SESSION_MODE_VAR}"
                );
                SessionMode::default()
            }),
        };

        Self { session_mode }
    }
}
