//! A client SDK for the eSTAR Node Agent SOAP web service, plus the
//! `node-agent-client` command-line binary built on top of it.
//!
//! The Node Agent exposes two RPC-style operations, `ping` and
//! `handle_rtml`, behind a WSDL-described endpoint. RTML documents are
//! carried as opaque strings; this crate never parses their content.
//! # Ping
//! ```no_run
//! use node_agent_client::NodeAgentClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), node_agent_client::NodeAgentError> {
//!     let client = NodeAgentClient::new("ltproxy", "8080", "eng", "none").await?;
//!     let reply = client.ping().await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod models;
pub mod node_agent_error;
pub mod rtml_file;
mod soap;

pub use client::NodeAgentClient;
pub use models::credentials::Credentials;
pub use node_agent_error::NodeAgentError;
