// App Configuration
//
// Process-wide display constants, built once at startup and passed
// explicitly to the collaborators that need them.

use std::path::PathBuf;

/// Banner title shown on every notification
pub const PRODUCT_TITLE: &str = "OpenCode ⌘";

/// Bundle identifier the notification is sent as
pub const SENDER_BUNDLE_ID: &str = "com.apple.Terminal";

/// Default opencode server address for session lookups
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:4096";

/// Immutable runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub product_title: String,
    pub sender: String,
    pub app_icon: PathBuf,
    pub server_url: String,
    pub content_image: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            product_title: PRODUCT_TITLE.to_string(),
            sender: SENDER_BUNDLE_ID.to_string(),
            app_icon: default_icon_path(),
            server_url: DEFAULT_SERVER_URL.to_string(),
            content_image: None,
        }
    }
}

/// Get the default notification icon path (~/.config/opencode/img/ghostty.png)
fn default_icon_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("opencode")
        .join("img")
        .join("ghostty.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_constants() {
        let config = AppConfig::default();
        assert_eq!(config.product_title, "OpenCode ⌘");
        assert_eq!(config.sender, "com.apple.Terminal");
        assert_eq!(config.server_url, "http://127.0.0.1:4096");
        assert!(config.content_image.is_none());
    }

    #[test]
    fn test_default_icon_path_ends_with_ghostty() {
        let config = AppConfig::default();
        assert!(config.app_icon.ends_with("opencode/img/ghostty.png"));
    }
}
