// Notification Sender - terminal-notifier invocation
//
// Builds the fully-resolved request and runs the external notifier
// command. Arguments are passed structurally through Command, never
// interpolated into a shell line, so session titles cannot smuggle
// extra arguments in.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{bail, Context, Result};

use super::Sound;

const NOTIFIER_BIN: &str = "terminal-notifier";

/// Fully-resolved display parameters for one desktop notification
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    pub title: String,
    pub subtitle: String,
    pub message: String,
    pub sound: Sound,
    pub sender: String,
    pub app_icon: PathBuf,
    pub content_image: Option<String>,
}

/// Capability to deliver one desktop notification
pub trait Notifier {
    fn send(&self, request: &NotificationRequest) -> Result<()>;
}

/// Notifier backed by the terminal-notifier command
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn send(&self, request: &NotificationRequest) -> Result<()> {
        let mut command = Command::new(NOTIFIER_BIN);
        command
            .arg("-title")
            .arg(&request.title)
            .arg("-subtitle")
            .arg(&request.subtitle)
            .arg("-message")
            .arg(&request.message)
            .arg("-sound")
            .arg(request.sound.as_str())
            .arg("-sender")
            .arg(&request.sender)
            .arg("-appIcon")
            .arg(&request.app_icon);

        if let Some(content_image) = &request.content_image {
            command.arg("-contentImage").arg(content_image);
        }

        let output = command
            .output()
            .with_context(|| format!("failed to run {}", NOTIFIER_BIN))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "{} exited with {}: {}",
                NOTIFIER_BIN,
                output.status,
                stderr.trim()
            );
        }

        println!("[Notification] Sent: {}", request.message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_holds_resolved_parameters() {
        let request = NotificationRequest {
            title: "OpenCode ⌘".to_string(),
            subtitle: "Success 😎".to_string(),
            message: "Refactor Auth Module is Completed !".to_string(),
            sound: Sound::Hero,
            sender: "com.apple.Terminal".to_string(),
            app_icon: PathBuf::from("/tmp/ghostty.png"),
            content_image: None,
        };

        assert_eq!(request.sound.as_str(), "Hero");
        assert_eq!(request.message, "Refactor Auth Module is Completed !");
    }
}
