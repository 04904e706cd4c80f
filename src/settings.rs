//! Presentation settings
//!
//! Persisted separately from the score in LocalStorage. None of these affect
//! game rules, only how transitions are shown.

use serde::{Deserialize, Serialize};

/// Longest reveal/celebration delay accepted from storage
pub const MAX_DELAY_MS: u32 = 5_000;
/// Most confetti pieces in one burst
pub const MAX_CONFETTI_PIECES: usize = 400;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay before the opponent's pick is shown on the result screen
    pub reveal_delay_ms: u32,
    /// Delay before the celebration screen fades in
    pub celebration_delay_ms: u32,
    /// Confetti pieces generated per celebration
    pub confetti_pieces: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reveal_delay_ms: 600,
            celebration_delay_ms: 400,
            confetti_pieces: 80,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "roshambo_settings";

    /// Clamp every value into its accepted range
    pub fn sanitized(mut self) -> Self {
        self.reveal_delay_ms = self.reveal_delay_ms.min(MAX_DELAY_MS);
        self.celebration_delay_ms = self.celebration_delay_ms.min(MAX_DELAY_MS);
        self.confetti_pieces = self.confetti_pieces.min(MAX_CONFETTI_PIECES);
        self
    }

    /// Parse stored settings, falling back to defaults when unreadable
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Invalid stored settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        match storage.map(|s| s.get_item(Self::STORAGE_KEY)) {
            Some(Ok(Some(json))) => {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
            Some(Ok(None)) => {}
            Some(Err(e)) => log::warn!("Failed to read settings: {:?}", e),
            None => log::warn!("LocalStorage unavailable, settings not loaded"),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return;
        };
        let result = serde_json::to_string(self)
            .map_err(|e| format!("{}", e))
            .and_then(|json| {
                storage
                    .set_item(Self::STORAGE_KEY, &json)
                    .map_err(|e| format!("{:?}", e))
            });
        match result {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Failed to save settings: {}", e),
        }
    }

    /// Native: settings come from `ROSHAMBO_SETTINGS` (JSON) if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var("ROSHAMBO_SETTINGS") {
            Ok(json) => Self::from_json(&json),
            Err(_) => Self::default(),
        }
    }
}
