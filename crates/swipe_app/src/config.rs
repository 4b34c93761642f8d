use std::fs;
use std::path::Path;

use swipe_core::DeckConfig;
use swipe_logging::{swipe_info, swipe_warn};

/// Reads deck tuning from a RON file.
///
/// A missing or unreadable file is not fatal: the defaults are used and a
/// warning is logged. Fields the file leaves out keep their defaults.
pub(crate) fn load_deck_config(path: &Path) -> DeckConfig {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            swipe_warn!("Failed to read config from {:?}: {}", path, err);
            return DeckConfig::default();
        }
    };

    match ron::from_str::<DeckConfig>(&content) {
        Ok(config) => {
            swipe_info!("Loaded deck config from {:?}", path);
            config.sanitized()
        }
        Err(err) => {
            swipe_warn!("Failed to parse config from {:?}: {}", path, err);
            DeckConfig::default()
        }
    }
}
