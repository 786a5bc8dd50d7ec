//! Game settings and preferences
//!
//! Persisted separately from game state in LocalStorage.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
    /// Show the cybersecurity tip panel after defenses
    pub show_tips: bool,

    // === Accessibility ===
    /// Reduced motion (no threat pulse or shield flash animations)
    pub reduced_motion: bool,
    /// High contrast mode
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: true,
            show_tips: true,
            reduced_motion: false,
            high_contrast: false,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "cyber_defender_settings";

    /// Effective pulse/flash animations (respects reduced_motion)
    pub fn effective_animations(&self) -> bool {
        !self.reduced_motion
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
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

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
