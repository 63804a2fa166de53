// Appearance Detection - macOS light/dark mode
//
// Picks the content image variant matching the current interface style.
// `defaults` exits non-zero when the style key is unset, which means
// light mode.

const CONTENT_IMAGE_BASE: &str =
    "https://registry.npmmirror.com/@lobehub/icons-static-png/1.63.0/files";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    fn id(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

/// Detect the current macOS interface style
pub fn detect_color_mode() -> ColorMode {
    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        let output = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output();

        match output {
            Ok(result) if result.status.success() => ColorMode::Dark,
            _ => ColorMode::Light,
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        ColorMode::Light
    }
}

/// Content image URL for the detected color mode
pub fn content_image_url(mode: ColorMode) -> String {
    format!("{}/{}/githubcopilot.png", CONTENT_IMAGE_BASE, mode.id())
}
