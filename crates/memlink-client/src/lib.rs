//! memlink-client - Client library for a mem0-compatible memory service.
//!
//! This crate is the only place memlink performs network I/O.
//!
//! # Example
//!
//! ```ignore
//! use memlink_client::MemoryClient;
//! use memlink_core::{MemlinkConfig, SearchRequest};
//!
//! let config = MemlinkConfig::from_env()?;
//! let client = MemoryClient::new(&config)?;
//!
//! let hits = client
//!     .search(&SearchRequest {
//!         query: "coffee".into(),
//!         user_id: config.user_id.clone(),
//!         limit: 5,
//!         agent_id: None,
//!         filters: None,
//!     })
//!     .await?;
//! ```

mod client;

pub use client::{default_headers, MemoryClient};
