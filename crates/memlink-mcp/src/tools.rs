//! MCP tool input type definitions.
//!
//! These types are used with `schemars::JsonSchema` to generate the JSON Schema
//! that MCP clients use to understand tool parameters. Doc comments on fields
//! become the parameter descriptions shown to the host.

use memlink_core::types::{
    effective_limit, non_empty, AddMemoryRequest, ListMemoriesQuery, Metadata, SearchRequest,
};
use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

/// Input for add_memory tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddMemoryInput {
    /// The text content to remember.
    pub content: String,

    /// User ID (default: configured MEM0_USER_ID).
    #[serde(default)]
    pub user_id: Option<String>,

    /// Agent ID (default: configured MEM0_AGENT_ID).
    #[serde(default)]
    pub agent_id: Option<String>,

    /// Optional metadata stored alongside the memory.
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

impl AddMemoryInput {
    /// Build the request body, filling omitted ids with the defaults.
    pub fn into_request(self, default_user_id: &str, default_agent_id: &str) -> AddMemoryRequest {
        let user_id = non_empty(self.user_id).unwrap_or_else(|| default_user_id.to_string());
        let agent_id = non_empty(self.agent_id).unwrap_or_else(|| default_agent_id.to_string());
        AddMemoryRequest::new(self.content, user_id, agent_id).with_metadata(self.metadata)
    }
}

/// Input for search_memories tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchMemoriesInput {
    /// Search query.
    pub query: String,

    /// User ID (default: configured MEM0_USER_ID).
    #[serde(default)]
    pub user_id: Option<String>,

    /// Agent ID. Omit to search all agents under the user.
    #[serde(default)]
    pub agent_id: Option<String>,

    /// Max number of results (default: 10).
    #[serde(default)]
    pub limit: Option<usize>,

    /// Max cosine distance to include (lower = more relevant, e.g. 0.6).
    /// Results scoring above this are filtered out.
    #[serde(default)]
    pub threshold: Option<f64>,

    /// Metadata filters as a flat object; multiple keys are combined with AND.
    /// Example: {"topic": "sandbox", "context": "pytest"}.
    #[serde(default)]
    pub filters: Option<Metadata>,
}

impl SearchMemoriesInput {
    /// Split into the request body and the client-side threshold.
    pub fn into_request(self, default_user_id: &str) -> (SearchRequest, Option<f64>) {
        let request = SearchRequest {
            query: self.query,
            user_id: non_empty(self.user_id).unwrap_or_else(|| default_user_id.to_string()),
            limit: effective_limit(self.limit),
            agent_id: non_empty(self.agent_id),
            filters: self.filters,
        };
        (request, self.threshold)
    }
}

/// Input for get_memories tool.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetMemoriesInput {
    /// User ID (default: configured MEM0_USER_ID).
    #[serde(default)]
    pub user_id: Option<String>,

    /// Agent ID. Omit to get memories from all agents.
    #[serde(default)]
    pub agent_id: Option<String>,

    /// Max number of results (default: 10).
    #[serde(default)]
    pub limit: Option<usize>,
}

impl GetMemoriesInput {
    pub fn into_query(self, default_user_id: &str) -> ListMemoriesQuery {
        ListMemoriesQuery {
            user_id: non_empty(self.user_id).unwrap_or_else(|| default_user_id.to_string()),
            limit: effective_limit(self.limit),
            agent_id: non_empty(self.agent_id),
        }
    }
}

/// Input for delete_memory tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteMemoryInput {
    /// The memory ID to delete.
    pub memory_id: String,
}
