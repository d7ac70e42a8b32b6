use crate::config::LogConfig;

/// Install a global `tracing` subscriber. Fails if one is already set.
pub fn init(config: &LogConfig) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(config.level)
        .with_ansi(config.ansi)
        .with_target(true)
        .try_init()
        .map_err(|e| format!("Failed to install log subscriber: {e}"))
}

pub fn init_from_env() -> Result<(), String> {
    init(&LogConfig::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_fails() {
        let config = LogConfig::default();
        let _ = init(&config);
        assert!(init(&config).is_err());
    }
}
