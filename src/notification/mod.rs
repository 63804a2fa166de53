// Notification Module - Desktop notification delivery
//
// Owns the request shape handed to the external notifier command and
// the closed set of macOS alert sound names passed through verbatim.

pub mod appearance;
pub mod sender;

pub use sender::{Notifier, NotificationRequest, TerminalNotifier};

/// macOS named alert sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Default,
    Basso,
    Blow,
    Bottle,
    Frog,
    Funk,
    Glass,
    Hero,
    Morse,
    Ping,
    Pop,
    Purr,
    Sosumi,
    Submarine,
    Tink,
}

impl Sound {
    /// Name understood by the notifier command
    pub fn as_str(self) -> &'static str {
        match self {
            Sound::Default => "default",
            Sound::Basso => "Basso",
            Sound::Blow => "Blow",
            Sound::Bottle => "Bottle",
            Sound::Frog => "Frog",
            Sound::Funk => "Funk",
            Sound::Glass => "Glass",
            Sound::Hero => "Hero",
            Sound::Morse => "Morse",
            Sound::Ping => "Ping",
            Sound::Pop => "Pop",
            Sound::Purr => "Purr",
            Sound::Sosumi => "Sosumi",
            Sound::Submarine => "Submarine",
            Sound::Tink => "Tink",
        }
    }
}
