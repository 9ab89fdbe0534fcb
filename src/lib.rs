//! gemserve - static Gemini server
//!
//! Core library for the Gemini protocol and the TLS listener.

pub mod config;
pub mod gemini;
pub mod server;
