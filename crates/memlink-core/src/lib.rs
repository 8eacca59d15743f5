//! memlink-core - Shared types for the memlink adapter.
//!
//! This crate holds the error taxonomy, the environment-driven
//! configuration, and the request shapes sent to a mem0-compatible
//! memory service.
//!
//! # Example
//!
//! ```ignore
//! use memlink_core::{AddMemoryRequest, MemlinkConfig};
//!
//! let config = MemlinkConfig::from_env()?;
//! let request = AddMemoryRequest::new("Prefers dark roast", &config.user_id, &config.agent_id);
//! ```

pub mod config;
pub mod error;
pub mod types;

pub use config::MemlinkConfig;
pub use error::{ErrorCode, MemlinkError, MemlinkResult};
pub use types::{
    AddMemoryRequest, ListMemoriesQuery, Message, MessageRole, Metadata, QueuedAck,
    SearchRequest, DEFAULT_LIMIT,
};
