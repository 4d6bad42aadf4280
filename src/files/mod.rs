//! Static file serving.
//!
//! This module maps request paths onto files under a sandboxed root
//! directory. The [`resolver`] submodule holds the security-critical path
//! resolution logic.

pub mod resolver;

pub use resolver::{ResolveError, resolve};

use std::path::PathBuf;

/// The serving context shared by every connection.
///
/// Built once when the listener binds and handed to connections behind an
/// `Arc`; never mutated afterwards, so no locking is needed.
#[derive(Debug, Clone)]
pub struct SiteRoot {
    /// Canonicalized absolute root directory. The boundary check in the
    /// resolver relies on this already being canonical.
    pub root: PathBuf,
    /// Document substituted when the request path is "/".
    pub index: String,
}

impl SiteRoot {
    pub fn new(root: PathBuf, index: impl Into<String>) -> Self {
        Self {
            root,
            index: index.into(),
        }
    }
}
