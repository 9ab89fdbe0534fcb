use std::time::Duration;

use bytes::Bytes;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::gemini::response::Response;

/// Writes a response header followed by its body, if any.
pub struct ResponseWriter {
    chunks: Vec<Bytes>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        let mut chunks = vec![Bytes::from(response.header())];
        if let Some(body) = &response.body {
            chunks.push(body.clone());
        }

        Self { chunks, written: 0 }
    }

    /// Writes everything to `stream`.
    ///
    /// Fails if any single write or the final flush makes no progress within
    /// `idle_timeout`.
    pub async fn write_to_stream<S>(
        &mut self,
        stream: &mut S,
        idle_timeout: Duration,
    ) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        for chunk in &self.chunks {
            let mut offset = 0;
            while offset < chunk.len() {
                let n = timeout(idle_timeout, stream.write(&chunk[offset..]))
                    .await
                    .map_err(|_| anyhow::anyhow!("timed out writing response"))??;

                if n == 0 {
                    return Err(anyhow::anyhow!("connection closed while writing"));
                }

                offset += n;
                self.written += n;
            }
        }

        timeout(idle_timeout, stream.flush())
            .await
            .map_err(|_| anyhow::anyhow!("timed out flushing response"))??;
        Ok(())
    }

    /// Bytes sent so far.
    pub fn written(&self) -> usize {
        self.written
    }
}
