//! Application configuration.
//!
//! Stored in the platform config directory by confy.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "podplay";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub version: u32,
    /// Episode feed loaded when none is given on the command line
    pub feed_path: Option<String>,
    /// Frame interval of the event loop in milliseconds
    pub tick_ms: u64,
    /// Seconds moved by a single seek key press
    pub seek_step_secs: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            feed_path: None,
            tick_ms: 100,
            seek_step_secs: 10.0,
        }
    }
}

pub fn load_config() -> AppConfig {
    match confy::load(CONFIG_NAME, None) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Using default configuration: {}", err);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_feed() {
        let config = AppConfig::default();
        assert_eq!(config.version, 1);
        assert!(config.feed_path.is_none());
        assert!(config.tick_ms > 0);
        assert!(config.seek_step_secs > 0.0);
    }
}
