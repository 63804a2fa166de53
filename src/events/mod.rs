// Event Module - Session lifecycle events from the opencode host
//
// Models the host's open event union as a closed tagged enum. Only the
// two session lifecycle discriminants matter to the dispatcher; every
// other event type lands in the explicit Unknown arm and is ignored.

pub mod receiver;

pub use receiver::{run, ReceiverStats};

use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;
use serde_json::Value;

/// Lifecycle event emitted by the host, one JSON object per line:
/// `{"type": "session.idle", "properties": {"sessionID": "..."}}`
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Session finished working and went idle
    SessionIdle(SessionIdleProps),
    /// Session failed
    SessionError(SessionErrorProps),
    /// Any other event type the host emits
    Unknown,
}

/// Raw wire shape; properties stay opaque until the type is known
#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    properties: Value,
}

// Decoded in two steps so unknown discriminants land in Unknown no
// matter what their properties carry.
impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawEvent::deserialize(deserializer)?;
        match raw.kind.as_str() {
            "session.idle" => serde_json::from_value(raw.properties)
                .map(Event::SessionIdle)
                .map_err(DeError::custom),
            "session.error" => {
                if raw.properties.is_null() {
                    return Ok(Event::SessionError(SessionErrorProps::default()));
                }
                serde_json::from_value(raw.properties)
                    .map(Event::SessionError)
                    .map_err(DeError::custom)
            }
            _ => Ok(Event::Unknown),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionIdleProps {
    #[serde(rename = "sessionID")]
    pub session_id: String,
}

/// The host does not always attach a session ID to error events
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SessionErrorProps {
    #[serde(rename = "sessionID", default)]
    pub session_id: Option<String>,
}
