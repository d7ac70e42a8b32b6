use std::str::FromStr;

use tracing::Level;

pub const LOG_ENV: &str = "FMOD_LOG";
pub const LOG_ANSI_ENV: &str = "FMOD_LOG_ANSI";

pub fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .ok()
        .map(|v| {
            let s = v.trim().to_ascii_lowercase();
            s == "1" || s == "true" || s == "yes" || s == "on"
        })
        .unwrap_or(false)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            ansi: false,
        }
    }
}

impl LogConfig {
    /// Reads `FMOD_LOG` and `FMOD_LOG_ANSI`. An unparsable level falls back
    /// to the default.
    pub fn from_env() -> Self {
        let level = std::env::var(LOG_ENV).ok();
        Self::from_values(level.as_deref(), env_flag(LOG_ANSI_ENV))
    }

    fn from_values(level: Option<&str>, ansi: bool) -> Self {
        let level = level
            .and_then(|v| Level::from_str(v.trim()).ok())
            .unwrap_or(Self::default().level);
        Self { level, ansi }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level() {
        assert_eq!(LogConfig::from_values(Some("debug"), false).level, Level::DEBUG);
        assert_eq!(LogConfig::from_values(Some(" TRACE "), true).level, Level::TRACE);
        assert!(LogConfig::from_values(None, true).ansi);
    }

    #[test]
    fn bad_level_falls_back() {
        assert_eq!(LogConfig::from_values(Some("loud"), false), LogConfig::default());
        assert_eq!(LogConfig::from_values(None, false).level, Level::WARN);
    }

    #[test]
    fn unset_flag_is_false() {
        assert!(!env_flag("FMOD_TEST_FLAG_THAT_IS_NEVER_SET"));
    }
}
