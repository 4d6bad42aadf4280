//! Bastion - Concurrent Static File Server
//!
//! Core library for HTTP and file-serving functionality.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
