use std::sync::Arc;

use bytes::Bytes;
use tokio::fs;
use tracing::{debug, error};

use crate::config::Config;
use crate::gemini::error::GeminiError;
use crate::gemini::index;
use crate::gemini::mime::MimeRegistry;
use crate::gemini::request::Request;
use crate::gemini::resolver::{self, Resource};
use crate::gemini::response::{GEMTEXT_MIME, Response};

/// Turns request lines into responses.
///
/// Holds only read-only state, so one instance is shared by every
/// connection behind an `Arc`.
#[derive(Debug)]
pub struct Dispatcher {
    config: Arc<Config>,
    mime: MimeRegistry,
}

impl Dispatcher {
    pub fn new(config: Arc<Config>) -> Self {
        let mime = MimeRegistry::new(&config.mime_types);
        Self { config, mime }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Serves one request line.
    ///
    /// The first failure ends processing and is returned as is; the caller
    /// decides how to put it on the wire.
    pub async fn dispatch(&self, raw: &str) -> Result<Response, GeminiError> {
        let request = Request::parse(raw)?;
        debug!(host = %request.host, path = %request.path, "Dispatching request");

        match resolver::resolve(&self.config.document_root, &request.path).await? {
            Resource::Missing => Err(GeminiError::not_found(format!(
                "{} not found",
                request.path
            ))),
            Resource::File { path, filename } => {
                let data = fs::read(&path).await.map_err(|e| {
                    error!(path = %path.display(), "Failed to read file: {}", e);
                    GeminiError::temporary_failure()
                })?;
                Ok(Response::success(self.mime.classify(&filename), Bytes::from(data)))
            }
            Resource::Directory(dir) => {
                let body = index::load_directory(&dir, &request.path, &self.config).await?;
                Ok(Response::success(Some(GEMTEXT_MIME.to_string()), body))
            }
        }
    }
}
