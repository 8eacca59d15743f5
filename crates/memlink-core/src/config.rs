//! Adapter configuration, read once at startup.

use std::fmt;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::error::{MemlinkError, MemlinkResult};

/// Base URL of the memory service when `MEM0_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:29476";
/// User id sent when a tool call omits `user_id`.
pub const DEFAULT_USER_ID: &str = "heasenbug";
/// Agent id sent by `add_memory` when the call omits `agent_id`.
pub const DEFAULT_AGENT_ID: &str = "claude-code";
/// Request timeout when `MEM0_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings and per-call defaults for the memory service.
pub struct MemlinkConfig {
    /// Base URL every request path is appended to.
    pub api_url: Url,
    /// Default `user_id` for calls that omit one.
    pub user_id: String,
    /// Default `agent_id` for `add_memory` calls that omit one.
    pub agent_id: String,
    /// Bearer credential. `None` means no Authorization header is sent.
    pub api_key: Option<SecretString>,
    /// Timeout applied to every outbound request.
    pub timeout: Duration,
}

impl fmt::Debug for MemlinkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemlinkConfig")
            .field("api_url", &self.api_url.as_str())
            .field("user_id", &self.user_id)
            .field("agent_id", &self.agent_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl MemlinkConfig {
    /// Build configuration from process environment variables.
    ///
    /// - `MEM0_API_URL` - memory service base URL
    /// - `MEM0_USER_ID` - default user id
    /// - `MEM0_AGENT_ID` - default agent id
    /// - `MEM0_API_KEY` - optional bearer credential
    /// - `MEM0_TIMEOUT_SECS` - request timeout in seconds
    pub fn from_env() -> MemlinkResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> MemlinkResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let api_url = get("MEM0_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let mut config = Self {
            api_url: parse_base_url(&api_url)?,
            user_id: DEFAULT_USER_ID.to_string(),
            agent_id: DEFAULT_AGENT_ID.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        if let Some(user_id) = get("MEM0_USER_ID") {
            config.user_id = user_id;
        }

        if let Some(agent_id) = get("MEM0_AGENT_ID") {
            config.agent_id = agent_id;
        }

        config.api_key = get("MEM0_API_KEY").map(SecretString::new);

        if let Some(raw) = get("MEM0_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                MemlinkError::configuration(format!(
                    "MEM0_TIMEOUT_SECS must be a positive integer, got '{}'",
                    raw
                ))
            })?;
            if secs == 0 {
                return Err(MemlinkError::configuration(
                    "MEM0_TIMEOUT_SECS must be greater than zero",
                ));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn parse_base_url(raw: &str) -> MemlinkResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| {
        MemlinkError::configuration(format!("invalid MEM0_API_URL '{}': {}", raw, e))
    })?;
    if url.cannot_be_a_base() {
        return Err(MemlinkError::configuration(format!(
            "MEM0_API_URL '{}' cannot be used as a base URL",
            raw
        )));
    }
    Ok(url)
}
