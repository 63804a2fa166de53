// Lookup Tables - Sound and subtitle per event type
//
// Pure total functions; defined for every event type the host can emit.

use crate::events::Event;
use crate::notification::Sound;

/// Alert sound for an event type
pub fn sound_for(event: &Event) -> Sound {
    match event {
        Event::SessionIdle(_) => Sound::Hero,
        Event::SessionError(_) => Sound::Basso,
        Event::Unknown => Sound::Default,
    }
}

/// Short subtitle phrase for an event type.
/// Unknown event types share the failure phrasing.
pub fn subtitle_for(event: &Event) -> &'static str {
    match event {
        Event::SessionIdle(_) => "Success 😎",
        Event::SessionError(_) | Event::Unknown => "Failed 😔",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{SessionErrorProps, SessionIdleProps};

    fn idle_event() -> Event {
        Event::SessionIdle(SessionIdleProps {
            session_id: "ses_123".to_string(),
        })
    }

    #[test]
    fn test_sound_per_event_type() {
        assert_eq!(sound_for(&idle_event()), Sound::Hero);
        assert_eq!(
            sound_for(&Event::SessionError(SessionErrorProps::default())),
            Sound::Basso
        );
        assert_eq!(sound_for(&Event::Unknown), Sound::Default);
    }

    #[test]
    fn test_subtitle_per_event_type() {
        assert_eq!(subtitle_for(&idle_event()), "Success 😎");
        assert_eq!(
            subtitle_for(&Event::SessionError(SessionErrorProps::default())),
            "Failed 😔"
        );
        assert_eq!(subtitle_for(&Event::Unknown), "Failed 😔");
    }

    #[test]
    fn test_lookups_are_idempotent() {
        let event = idle_event();
        assert_eq!(sound_for(&event), sound_for(&event));
        assert_eq!(subtitle_for(&event), subtitle_for(&event));
    }
}
