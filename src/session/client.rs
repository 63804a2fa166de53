// Session Client - HTTP lookups against the opencode server
//
// Blocking client for GET /session/{id}. A 404 means the session is
// simply unknown; every other failure propagates to the caller.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;

use super::{Session, SessionSource};

pub struct OpencodeClient {
    base_url: String,
    http: Client,
}

impl OpencodeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }
}

impl SessionSource for OpencodeClient {
    fn get(&self, session_id: &str) -> Result<Option<Session>> {
        let url = format!("{}/session/{}", self.base_url, session_id);

        let response = self
            .http
            .get(&url)
            .send()
            .with_context(|| format!("failed to reach session API at {}", url))?;

        if response.status() == StatusCode::NOT_FOUND {
            println!("[SessionClient] Session {} not found", session_id);
            return Ok(None);
        }

        let session = response
            .error_for_status()
            .with_context(|| format!("session API rejected lookup for {}", session_id))?
            .json::<Session>()
            .with_context(|| format!("invalid session payload for {}", session_id))?;

        Ok(Some(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = OpencodeClient::new("http://127.0.0.1:4096/");
        assert_eq!(client.base_url, "http://127.0.0.1:4096");
    }
}
