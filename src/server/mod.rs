//! Network side: TCP listener, TLS handshake and per-connection tasks.

pub mod listener;
pub mod tls;
