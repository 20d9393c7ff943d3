//! # Session Configuration
//!
//! Configuration loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TABLETALK_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no locking is
//! needed.

use serde::{Deserialize, Serialize};

use tabletalk_core::{GstRate, DEFAULT_GST_RATE_BPS};

/// Application configuration for one deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Restaurant name, shown in the assistant's greeting.
    pub restaurant_name: String,

    /// GST rate in basis points (500 = 5%).
    pub gst_rate_bps: u32,

    /// Base URL of the kitchen service that owns the `bills` collection.
    pub bills_endpoint: String,

    /// Path of the restaurant's tabular menu export.
    pub menu_path: String,

    /// Path of the serialized catalog cache.
    pub cache_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            restaurant_name: "TableTalk Kitchen".to_string(),
            gst_rate_bps: DEFAULT_GST_RATE_BPS,
            bills_endpoint: "http://localhost:8090/api".to_string(),
            menu_path: "data/menu.csv".to_string(),
            cache_path: "data/catalog.json".to_string(),
        }
    }
}

impl SessionConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TABLETALK_RESTAURANT_NAME`: Override restaurant name
    /// - `TABLETALK_GST_RATE`: Override GST percentage (e.g. "5" or "5.0")
    /// - `TABLETALK_BILLS_ENDPOINT`: Override kitchen service base URL
    /// - `TABLETALK_MENU_PATH`: Override menu file path
    /// - `TABLETALK_CACHE_PATH`: Override catalog cache path
    pub fn from_env() -> Self {
        let mut config = SessionConfig::default();

        if let Ok(name) = std::env::var("TABLETALK_RESTAURANT_NAME") {
            config.restaurant_name = name;
        }

        if let Ok(rate_str) = std::env::var("TABLETALK_GST_RATE") {
            if let Ok(rate) = rate_str.parse::<f64>() {
                config.gst_rate_bps = (rate * 100.0).round() as u32;
            }
        }

        if let Ok(endpoint) = std::env::var("TABLETALK_BILLS_ENDPOINT") {
            config.bills_endpoint = endpoint;
        }

        if let Ok(path) = std::env::var("TABLETALK_MENU_PATH") {
            config.menu_path = path;
        }

        if let Ok(path) = std::env::var("TABLETALK_CACHE_PATH") {
            config.cache_path = path;
        }

        config
    }

    /// The configured GST rate.
    pub fn gst_rate(&self) -> GstRate {
        GstRate::from_bps(self.gst_rate_bps)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
