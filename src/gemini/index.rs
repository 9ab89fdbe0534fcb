//! Directory handling: index files and generated listings.

use std::path::Path;

use bytes::Bytes;
use tokio::fs;
use tracing::{debug, error};

use crate::config::Config;
use crate::gemini::error::GeminiError;
use crate::gemini::resolver;
use crate::gemini::response::CRLF;

/// Returns the gemtext body for a directory.
///
/// Serves `index_file` verbatim when it is a regular file inside the document
/// root. Otherwise builds a listing if `auto_index` is on, or fails with 51.
pub async fn load_directory(
    dir: &Path,
    request_path: &str,
    cfg: &Config,
) -> Result<Bytes, GeminiError> {
    let index_path = dir.join(&cfg.index_file);

    if let Some(index_path) = resolver::contained_file(&cfg.document_root, &index_path).await {
        debug!(path = %index_path.display(), "Serving index file");
        let data = fs::read(&index_path).await.map_err(|e| {
            error!(path = %index_path.display(), "Failed to read index file: {}", e);
            GeminiError::temporary_failure()
        })?;
        return Ok(Bytes::from(data));
    }

    if !cfg.auto_index {
        return Err(GeminiError::not_found("no index found"));
    }

    let names = list_entries(dir).await.map_err(|e| {
        error!(path = %dir.display(), "Failed to list directory: {}", e);
        GeminiError::temporary_failure()
    })?;

    Ok(Bytes::from(render_listing(request_path, &names)))
}

/// Renders a gemtext listing: a title line, then one link per entry.
///
/// # Example
///
/// ```
/// # use gemserve::gemini::index::render_listing;
/// let body = render_listing("/docs/", &["a.txt".to_string()]);
/// assert_eq!(body, "# Index of /docs/\r\n=> /docs/a.txt a.txt\r\n");
/// ```
pub fn render_listing(request_path: &str, names: &[String]) -> String {
    let mut lines = Vec::with_capacity(names.len() + 1);
    lines.push(format!("# Index of {request_path}"));
    for name in names {
        lines.push(format!("=> {request_path}{name} {name}"));
    }

    let mut body = lines.join(CRLF);
    body.push_str(CRLF);
    body
}

/// Entry names of `dir`, sorted so listings are reproducible.
async fn list_entries(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    names.sort();
    Ok(names)
}
