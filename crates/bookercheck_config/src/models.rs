// --- File: crates/bookercheck_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Booking Service Config ---
// Coordinates and demo credentials of the checked service. The defaults
// point at the public sandbox; every field can be overridden from config
// files or BOOKERCHECK__BOOKER__* environment variables.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookerConfig {
    /// Base URL of the booking service, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for BookerConfig {
    fn default() -> Self {
        BookerConfig {
            base_url: default_base_url(),
            username: default_username(),
            password: default_password(),
        }
    }
}

fn default_base_url() -> String {
    "https://restful-booker.herokuapp.com".to_string()
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    "password123".to_string()
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub booker: BookerConfig,
}
