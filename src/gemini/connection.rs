use std::sync::Arc;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::gemini::dispatcher::Dispatcher;
use crate::gemini::error::GeminiError;
use crate::gemini::writer::ResponseWriter;

/// Serves exactly one request on an already secured stream, then closes it.
///
/// `read_timeout` bounds each phase: reading the request line, loading the
/// resource, and every write of the response.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    state: ConnectionState,
    dispatcher: Arc<Dispatcher>,
    read_timeout: Duration,
    max_request_bytes: usize,
}

pub enum ConnectionState {
    Reading,
    Processing(Result<String, GeminiError>),
    Writing(ResponseWriter),
    Closed,
}

/// Result of reading the request line.
enum ReadOutcome {
    Line(String),
    Rejected(GeminiError),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, dispatcher: Arc<Dispatcher>) -> Self {
        let cfg = dispatcher.config();
        let read_timeout = cfg.read_timeout();
        let max_request_bytes = cfg.max_request_bytes;

        Self {
            stream,
            buffer: BytesMut::with_capacity(max_request_bytes),
            state: ConnectionState::Reading,
            dispatcher,
            read_timeout,
            max_request_bytes,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    match tokio::time::timeout(self.read_timeout, self.read_request()).await {
                        Ok(outcome) => match outcome? {
                            ReadOutcome::Line(line) => {
                                self.state = ConnectionState::Processing(Ok(line));
                            }
                            ReadOutcome::Rejected(err) => {
                                self.state = ConnectionState::Processing(Err(err));
                            }
                            ReadOutcome::Closed => {
                                self.state = ConnectionState::Closed;
                            }
                        },
                        Err(_) => {
                            warn!("Timed out waiting for request line");
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Processing(line) => {
                    let url = line.as_deref().unwrap_or_default().to_string();
                    let result = match line {
                        Ok(line) => {
                            match tokio::time::timeout(
                                self.read_timeout,
                                self.dispatcher.dispatch(&line),
                            )
                            .await
                            {
                                Ok(result) => result,
                                Err(_) => {
                                    warn!(url = %url, "Timed out loading resource");
                                    Err(GeminiError::temporary_failure())
                                }
                            }
                        }
                        Err(err) => Err(err),
                    };

                    let response = match result {
                        Ok(response) => {
                            info!(status = response.status.as_u8(), url = %url, "Request served");
                            response
                        }
                        Err(err) => {
                            warn!(status = err.status.as_u8(), url = %url, meta = ?err.meta, "Request failed");
                            err.to_response()
                        }
                    };

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(mut writer) => {
                    if let Err(e) = writer
                        .write_to_stream(&mut self.stream, self.read_timeout)
                        .await
                    {
                        warn!(bytes = writer.written(), "Abandoning response: {}", e);
                        return Err(e);
                    }
                    debug!(bytes = writer.written(), "Response written");
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        // Best effort: the peer may already be gone or have stopped reading.
        let _ = tokio::time::timeout(self.read_timeout, self.stream.shutdown()).await;
        Ok(())
    }

    /// Reads up to the first `\n`, end of stream or `max_request_bytes`.
    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            if let Some(end) = self.buffer.iter().position(|&b| b == b'\n') {
                let line = self.buffer.split_to(end + 1);
                return Ok(decode_line(&line));
            }

            if self.buffer.len() >= self.max_request_bytes {
                return Ok(ReadOutcome::Rejected(GeminiError::bad_request(
                    "request too long",
                )));
            }

            let mut temp = [0u8; 1024];
            let want = temp.len().min(self.max_request_bytes - self.buffer.len());
            let n = self.stream.read(&mut temp[..want]).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(ReadOutcome::Closed);
                }
                let line = self.buffer.split();
                return Ok(decode_line(&line));
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }
}

fn decode_line(raw: &[u8]) -> ReadOutcome {
    match std::str::from_utf8(raw) {
        Ok(text) => ReadOutcome::Line(text.trim_end().to_string()),
        Err(_) => ReadOutcome::Rejected(GeminiError::bad_request("request is not valid UTF-8")),
    }
}
