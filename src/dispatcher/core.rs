// Dispatcher Core - Event router
//
// Handles one event to completion: classify, fetch session metadata,
// apply the suppression rule, compose the message, dispatch.

use anyhow::Result;

use crate::config::AppConfig;
use crate::events::Event;
use crate::notification::{NotificationRequest, Notifier, Sound};
use crate::session::{Session, SessionSource};

use super::{sound_for, subtitle_for};

/// Placeholder when no session title is available
const FALLBACK_TITLE: &str = "Unknown";

/// Freshly created sessions carry this marker until the user names them;
/// notifying on them would be noise.
const NEW_SESSION_MARKER: &str = "New session";

pub struct Dispatcher<S, N> {
    sessions: S,
    notifier: N,
    config: AppConfig,
}

impl<S: SessionSource, N: Notifier> Dispatcher<S, N> {
    pub fn new(sessions: S, notifier: N, config: AppConfig) -> Self {
        Self {
            sessions,
            notifier,
            config,
        }
    }

    /// Handle one lifecycle event. Fetch and delivery failures propagate
    /// to the caller; unrecognized event types are a no-op.
    pub fn handle(&self, event: &Event) -> Result<()> {
        let subtitle = subtitle_for(event);
        let sound = sound_for(event);

        let session = self.fetch_session(event)?;

        if let Some(session) = &session {
            if session.title.contains(NEW_SESSION_MARKER) {
                println!("[Dispatcher] Skipping unnamed session {}", session.id);
                return Ok(());
            }
        }

        match event {
            Event::SessionIdle(_) => {
                let message = format!("{} is Completed !", display_title(session.as_ref()));
                self.dispatch(subtitle, message, sound)?;
            }
            Event::SessionError(_) => {
                let message = format!("{} is Error !", display_title(session.as_ref()));
                self.dispatch(subtitle, message, sound)?;
            }
            Event::Unknown => {}
        }

        Ok(())
    }

    /// Only idle events resolve session metadata. Error events skip the
    /// lookup, so their notifications always carry the fallback title.
    fn fetch_session(&self, event: &Event) -> Result<Option<Session>> {
        match event {
            Event::SessionIdle(props) => self.sessions.get(&props.session_id),
            _ => Ok(None),
        }
    }

    fn dispatch(&self, subtitle: &str, message: String, sound: Sound) -> Result<()> {
        println!("[Dispatcher] Dispatching notification: {}", message);

        let request = NotificationRequest {
            title: self.config.product_title.clone(),
            subtitle: subtitle.to_string(),
            message,
            sound,
            sender: self.config.sender.clone(),
            app_icon: self.config.app_icon.clone(),
            content_image: self.config.content_image.clone(),
        };

        self.notifier.send(&request)
    }
}

/// Session title for display, with the placeholder fallback. An empty
/// title counts as missing.
fn display_title(session: Option<&Session>) -> &str {
    session
        .map(|s| s.title.as_str())
        .filter(|title| !title.is_empty())
        .unwrap_or(FALLBACK_TITLE)
}
