//! Webroot - Minimal static file server
//!
//! Core library for the HTTP pipeline and filesystem resolution.

pub mod client;
pub mod config;
pub mod http;
pub mod server;
