//! Path resolution and sandboxing.
//!
//! Maps the raw path token of a request onto a canonical filesystem path
//! that is guaranteed to lie inside the site root. No input, however
//! crafted (encoded `..`, absolute paths, NUL bytes, symlink escapes), may
//! resolve outside the root.

use crate::files::SiteRoot;
use std::path::PathBuf;

/// Why a request path failed to resolve to a servable file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// The path escaped the root, carried a NUL byte, or was not valid
    /// percent-encoding. Reported to the client as 404, never 403, so the
    /// sandbox boundary leaks no existence information.
    Rejected,
    /// The path stayed inside the root but names nothing servable.
    NotFound,
}

/// Resolves a raw request path against the site root.
///
/// The order of steps matters: query stripping and percent-decoding happen
/// strictly before the join and canonicalization, so an encoded `..` is
/// seen by the boundary check in its decoded form.
pub async fn resolve(site: &SiteRoot, raw_path: &str) -> Result<PathBuf, ResolveError> {
    // 1. Drop the query component.
    let without_query = raw_path.split('?').next().unwrap_or("");

    // 2. Percent-decode what remains.
    let decoded = urlencoding::decode(without_query).map_err(|_| ResolveError::Rejected)?;
    if decoded.contains('\0') {
        return Err(ResolveError::Rejected);
    }

    // 3. Strip one leading separator; "/" becomes the index document.
    let mut relative = decoded.strip_prefix('/').unwrap_or(&decoded);
    if relative.is_empty() {
        relative = &site.index;
    }

    // 4. Join onto the root and canonicalize. A join with an absolute path
    //    replaces the root entirely; the boundary check below still catches
    //    the result.
    let joined = site.root.join(relative);
    let target = tokio::fs::canonicalize(&joined)
        .await
        .map_err(|_| ResolveError::NotFound)?;

    // 5. The canonical target must stay under the canonical root.
    if !target.starts_with(&site.root) {
        tracing::warn!("rejected path escaping root: {}", raw_path);
        return Err(ResolveError::Rejected);
    }

    // 6. Only regular files are servable.
    let meta = tokio::fs::metadata(&target)
        .await
        .map_err(|_| ResolveError::NotFound)?;
    if !meta.is_file() {
        return Err(ResolveError::NotFound);
    }

    Ok(target)
}
