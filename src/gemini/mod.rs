//! Gemini protocol implementation.
//!
//! This module serves static documents over the Gemini protocol: one request
//! line in, one status line and an optional body out, then the connection
//! closes.
//!
//! # Architecture
//!
//! - **`status`**: status codes and their canonical reason phrases
//! - **`request`**: request line parsing and scheme validation
//! - **`resolver`**: maps request paths into the document root
//! - **`mime`**: content type detection from file extensions
//! - **`index`**: index files and generated directory listings
//! - **`response`**: header encoding and decoding
//! - **`error`**: the failure type every request step returns
//! - **`dispatcher`**: ties the steps above into one request/response call
//! - **`connection`**: per-connection state machine
//! - **`writer`**: writes a response to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One line, bounded in size and time
//!        └──────┬──────┘
//!               │ Line received (or rejected)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Dispatch, or map the failure to a header
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Header, then body on success
//!        └──────┬───────────┘
//!               │
//!               └─ Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use gemserve::config::Config;
//! use gemserve::gemini::dispatcher::Dispatcher;
//!
//! # async fn demo() {
//! let dispatcher = Dispatcher::new(Arc::new(Config::default()));
//! match dispatcher.dispatch("gemini://localhost/").await {
//!     Ok(res) => println!("{:?}", res.meta),
//!     Err(err) => println!("{err}"),
//! }
//! # }
//! ```

pub mod connection;
pub mod dispatcher;
pub mod error;
pub mod index;
pub mod mime;
pub mod request;
pub mod resolver;
pub mod response;
pub mod status;
pub mod writer;

pub use dispatcher::Dispatcher;
pub use error::GeminiError;
pub use response::Response;
pub use status::StatusCode;
