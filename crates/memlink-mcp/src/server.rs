//! MCP server implementation for the memlink adapter.
//!
//! Uses the rmcp SDK's macro-based approach for defining tools. Every tool
//! maps its arguments onto one call against the memory service.

use memlink_client::MemoryClient;
use memlink_core::config::MemlinkConfig;
use memlink_core::error::{MemlinkError, MemlinkResult};
use memlink_core::types::{retain_within_threshold, AddMemoryRequest, QueuedAck};

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde_json::{json, Value};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::tools::*;

/// Name reported to MCP hosts during initialization.
pub const SERVER_NAME: &str = "mem0-local";

/// MCP server exposing a remote memory service as tools.
#[derive(Clone)]
pub struct MemoryServer {
    client: MemoryClient,
    default_user_id: String,
    default_agent_id: String,
    tool_router: ToolRouter<MemoryServer>,
}

#[tool_router]
impl MemoryServer {
    /// Create a server around an existing client.
    pub fn new(client: MemoryClient, config: &MemlinkConfig) -> Self {
        Self {
            client,
            default_user_id: config.user_id.clone(),
            default_agent_id: config.agent_id.clone(),
            tool_router: Self::tool_router(),
        }
    }

    /// Create a server and its client from configuration.
    pub fn from_config(config: &MemlinkConfig) -> MemlinkResult<Self> {
        Ok(Self::new(MemoryClient::new(config)?, config))
    }

    /// Queue a memory for storage and acknowledge immediately.
    ///
    /// The write runs detached. Its outcome never reaches the caller.
    #[tool(
        name = "add_memory",
        description = "Save a memory to mem0. Use this to remember important facts, preferences, decisions, or context."
    )]
    pub async fn add_memory(
        &self,
        Parameters(input): Parameters<AddMemoryInput>,
    ) -> Result<CallToolResult, McpError> {
        let request = input.into_request(&self.default_user_id, &self.default_agent_id);
        let _ = self.spawn_add(request);

        let ack = serde_json::to_string(&QueuedAck::default())
            .map_err(|e| into_mcp_error(MemlinkError::from(e)))?;
        Ok(CallToolResult::success(vec![Content::text(ack)]))
    }

    /// Search memories, optionally dropping hits above a distance threshold.
    #[tool(
        name = "search_memories",
        description = "Search mem0 for relevant memories. Use this to recall previous context, preferences, or decisions."
    )]
    pub async fn search_memories(
        &self,
        Parameters(input): Parameters<SearchMemoriesInput>,
    ) -> Result<CallToolResult, McpError> {
        let (request, threshold) = input.into_request(&self.default_user_id);

        let mut response = self
            .client
            .search(&request)
            .await
            .map_err(into_mcp_error)?;

        if let Some(threshold) = threshold {
            retain_within_threshold(&mut response, threshold);
        }

        pretty_result(&response)
    }

    #[tool(
        name = "get_memories",
        description = "Retrieve all stored memories for a user."
    )]
    pub async fn get_memories(
        &self,
        Parameters(input): Parameters<GetMemoriesInput>,
    ) -> Result<CallToolResult, McpError> {
        let query = input.into_query(&self.default_user_id);
        let response = self.client.list(&query).await.map_err(into_mcp_error)?;
        pretty_result(&response)
    }

    #[tool(name = "delete_memory", description = "Delete a specific memory by ID.")]
    pub async fn delete_memory(
        &self,
        Parameters(input): Parameters<DeleteMemoryInput>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .client
            .delete(&input.memory_id)
            .await
            .map_err(into_mcp_error)?;
        pretty_result(&response)
    }
}

impl MemoryServer {
    /// Start a background `POST /memories`.
    ///
    /// Failures are logged and swallowed. Dropping the returned handle
    /// detaches the task; awaiting it only tells whether the task finished.
    pub fn spawn_add(&self, request: AddMemoryRequest) -> JoinHandle<()> {
        let client = self.client.clone();
        tokio::spawn(async move {
            match client.add(&request).await {
                Ok(_) => debug!(user_id = %request.user_id, "Background add_memory completed"),
                Err(e) => warn!(error = %e, "async add_memory failed"),
            }
        })
    }
}

#[tool_handler]
impl ServerHandler for MemoryServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "mem0 memory bridge. Use add_memory to save facts or preferences \
                 (saved in the background), search_memories to recall relevant memories, \
                 get_memories to list a user's memories, and delete_memory to remove one."
                    .to_string(),
            ),
        }
    }
}

/// Map a client failure to a tool error, keeping status and body as data.
///
/// Arguments the service cannot address are invalid params; everything else
/// is an internal error.
fn into_mcp_error(err: MemlinkError) -> McpError {
    let mut data = json!({ "code": err.code().as_str() });
    if let Some(status) = err.status() {
        data["status"] = json!(status);
    }
    if let Some(body) = err.body() {
        data["body"] = json!(body);
    }
    match err {
        MemlinkError::Validation(_) => McpError::invalid_params(err.to_string(), Some(data)),
        _ => McpError::internal_error(err.to_string(), Some(data)),
    }
}

fn pretty_result(value: &Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| into_mcp_error(MemlinkError::from(e)))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
