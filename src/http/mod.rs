//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 subset of a single-response static
//! file server: one request line in, one framed response out, then close.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Parses the request line from incoming byte buffers
//! - **`request`**: HTTP request-line representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: Content type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request line
//!        └──────┬──────┘
//!               │ Request line received (malformed → error response)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Resolve the path, read the file
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close → Closed
//! ```
//!
//! There is no keep-alive back-edge: the server answers exactly once per
//! connection and closes it.
//!
//! # Example
//!
//! ```ignore
//! use bastion::config::Config;
//! use bastion::server::listener::Listener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::load()?;
//!     Listener::bind(&cfg).await?.run().await
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
