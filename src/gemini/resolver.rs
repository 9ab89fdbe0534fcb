//! Maps request paths onto the document tree.
//!
//! The request path is percent-decoded, appended to the document root and
//! canonicalized. Anything that canonicalizes outside the root is reported as
//! missing.

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;
use tokio::fs;
use tracing::{error, warn};

use crate::gemini::error::GeminiError;

/// What a request path points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    /// A regular file. `filename` is the last segment of the requested path,
    /// used for content type detection.
    File { path: PathBuf, filename: String },
    /// A directory, served through its index file or a listing.
    Directory(PathBuf),
    /// Nothing servable exists at this path.
    Missing,
}

/// Resolves `request_path` beneath `root`.
///
/// Fails only when the path is not valid percent-encoded UTF-8. An
/// inaccessible root resolves every path to [`Resource::Missing`].
pub async fn resolve(root: &Path, request_path: &str) -> Result<Resource, GeminiError> {
    let decoded = percent_decode_str(request_path)
        .decode_utf8()
        .map_err(|_| GeminiError::bad_request("path is not valid UTF-8"))?;

    let root = match fs::canonicalize(root).await {
        Ok(root) => root,
        Err(e) => {
            error!(root = %root.display(), "Document root is not accessible: {}", e);
            return Ok(Resource::Missing);
        }
    };

    let candidate = root.join(decoded.trim_start_matches('/'));

    let Some(resolved) = within(&root, &candidate).await else {
        return Ok(Resource::Missing);
    };

    let Ok(metadata) = fs::metadata(&resolved).await else {
        return Ok(Resource::Missing);
    };

    if metadata.is_dir() {
        return Ok(Resource::Directory(resolved));
    }

    // Sockets, FIFOs and devices are never served.
    if !metadata.is_file() {
        return Ok(Resource::Missing);
    }

    let filename = candidate
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Resource::File {
        path: resolved,
        filename,
    })
}

/// Canonicalizes `candidate` and returns it if it is a regular file inside
/// `root`.
pub async fn contained_file(root: &Path, candidate: &Path) -> Option<PathBuf> {
    let root = fs::canonicalize(root).await.ok()?;
    let resolved = within(&root, candidate).await?;
    let metadata = fs::metadata(&resolved).await.ok()?;
    metadata.is_file().then_some(resolved)
}

/// Canonical form of `candidate`, if it exists and stays under the already
/// canonical `root`.
async fn within(root: &Path, candidate: &Path) -> Option<PathBuf> {
    // Like a plain existence check, any failure here means "not there".
    let resolved = fs::canonicalize(candidate).await.ok()?;

    if !resolved.starts_with(root) {
        warn!(path = %candidate.display(), "Path traversal attempt blocked");
        return None;
    }

    Some(resolved)
}
