// Session Module - Read-only session metadata from the host
//
// The dispatcher only ever needs a transient snapshot of one session,
// fetched by ID while a single event is being handled.

pub mod client;

pub use client::OpencodeClient;

use anyhow::Result;
use serde::Deserialize;

/// Session snapshot as returned by the host's session API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    pub id: String,
    /// Human-assigned title; the host may omit it for brand-new sessions
    #[serde(default)]
    pub title: String,
}

/// Read-only access to the host's session data, keyed by session ID
pub trait SessionSource {
    /// Fetch one session snapshot; `None` when the host does not know the ID
    fn get(&self, session_id: &str) -> Result<Option<Session>>;
}
