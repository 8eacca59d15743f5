//! Request and response shapes exchanged with the memory service.
//!
//! None of these outlive a single tool call. Response bodies stay as
//! `serde_json::Value` since the service owns their schema.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result count used when a call omits `limit` (or passes 0).
pub const DEFAULT_LIMIT: usize = 10;

/// Free-form key/value mapping attached to memories or used as search filters.
pub type Metadata = HashMap<String, Value>;

/// Message role understood by the memory service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
}

/// A conversation message submitted for memory extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Body of `POST /memories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMemoryRequest {
    pub messages: Vec<Message>,
    pub user_id: String,
    pub agent_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl AddMemoryRequest {
    /// Wrap `content` as a single user message.
    pub fn new(
        content: impl Into<String>,
        user_id: impl Into<String>,
        agent_id: impl Into<String>,
    ) -> Self {
        Self {
            messages: vec![Message::user(content)],
            user_id: user_id.into(),
            agent_id: agent_id.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Option<Metadata>) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Body of `POST /search`.
///
/// Without `agent_id` the search spans every agent of the user. Multiple
/// `filters` keys are combined with AND by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub user_id: String,
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Metadata>,
}

/// Query parameters of `GET /memories`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMemoriesQuery {
    pub user_id: String,
    pub limit: usize,
    pub agent_id: Option<String>,
}

/// Acknowledgement returned by `add_memory` before the write completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedAck {
    pub status: String,
    pub message: String,
}

impl Default for QueuedAck {
    fn default() -> Self {
        Self {
            status: "queued".to_string(),
            message: "Memory is being saved in the background.".to_string(),
        }
    }
}

/// Drop search hits whose distance `score` exceeds `threshold`.
///
/// Only the top-level `results` array is touched. Hits without a numeric
/// score cannot be compared and are dropped as well. Payloads without a
/// `results` array are left as they are.
pub fn retain_within_threshold(response: &mut Value, threshold: f64) {
    if let Some(results) = response.get_mut("results").and_then(Value::as_array_mut) {
        results.retain(|hit| {
            hit.get("score")
                .and_then(Value::as_f64)
                .is_some_and(|score| score <= threshold)
        });
    }
}

/// Treat `None` and `Some("")` alike, as an omitted identifier.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Resolve an optional `limit`, where 0 counts as omitted.
pub fn effective_limit(limit: Option<usize>) -> usize {
    limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT)
}
