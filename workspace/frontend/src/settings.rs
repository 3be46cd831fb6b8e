use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Predictor API host (e.g., "localhost" or "predict.example.com")
    pub api_host: String,

    /// Predictor API port (e.g., 8000)
    pub api_port: u16,

    /// API path prefix, empty when the predictor is mounted at the root
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Prediction request timeout in milliseconds
    pub request_timeout_ms: u32,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 8000,
            api_path: String::new(),
            api_use_https: false,
            log_level: Level::Info,
            request_timeout_ms: 30000,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        // Overrides from localStorage
        if let Ok(Some(storage)) = window.local_storage() {
            let read = |key: &str| storage.get_item(key).ok().flatten();

            if let Some(api_host) = read("traffy_api_host") {
                settings.api_host = api_host;
            }
            if let Some(port) = read("traffy_api_port").and_then(|v| v.parse::<u16>().ok()) {
                settings.api_port = port;
            }
            if let Some(api_path) = read("traffy_api_path") {
                settings.api_path = api_path;
            }
            if let Some(use_https) = read("traffy_api_use_https") {
                settings.api_use_https = use_https.to_lowercase() == "true";
            }
            if let Some(level) = read("traffy_log_level") {
                settings.log_level = parse_level(&level).unwrap_or(settings.log_level);
            }
            if let Some(timeout) = read("traffy_request_timeout_ms").and_then(|v| v.parse::<u32>().ok()) {
                settings.request_timeout_ms = timeout;
            }
        }

        settings
    }

    /// Get the base API URL (protocol + host + port + prefix)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_predictor() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base_url(), "http://localhost:8000");
        assert_eq!(settings.api_url("/predict"), "http://localhost:8000/predict");
    }

    #[test]
    fn test_api_url_with_prefix_and_https() {
        let settings = AppSettings {
            api_host: "predict.example.com".to_string(),
            api_port: 443,
            api_path: "/traffy".to_string(),
            api_use_https: true,
            ..AppSettings::default()
        };
        assert_eq!(
            settings.api_url("/subdistricts"),
            "https://predict.example.com:443/traffy/subdistricts"
        );
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("TRACE"), Some(Level::Trace));
        assert_eq!(parse_level("warn"), Some(Level::Warn));
        assert_eq!(parse_level("verbose"), None);
    }
}
