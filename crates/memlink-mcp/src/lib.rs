//! MCP bridge to a mem0-compatible memory service.
//!
//! Exposes the remote memory API as MCP tools so Claude Code and other MCP
//! clients can store and recall memories. Storage, embedding and ranking all
//! happen in the remote service.
//!
//! # Tools
//!
//! - `add_memory` - Queue a memory for storage (returns before the write lands)
//! - `search_memories` - Search memories, with optional distance threshold
//! - `get_memories` - List memories for a user, optionally one agent
//! - `delete_memory` - Delete a memory by ID
//!
//! # Configuration
//!
//! The server reads configuration from environment variables:
//!
//! - `MEM0_API_URL` - Memory service base URL (default: http://localhost:29476)
//! - `MEM0_USER_ID` - Default user ID (default: heasenbug)
//! - `MEM0_AGENT_ID` - Default agent ID (default: claude-code)
//! - `MEM0_API_KEY` - Bearer token, omitted when empty
//! - `MEM0_TIMEOUT_SECS` - Request timeout in seconds (default: 30)
//!
//! # Usage with Claude Code
//!
//! Add to your `claude_desktop_config.json`:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "mem0": {
//!       "command": "/path/to/memlink-mcp",
//!       "env": { "MEM0_API_URL": "http://localhost:29476" }
//!     }
//!   }
//! }
//! ```

pub mod server;
pub mod tools;

pub use server::MemoryServer;
