//! tinyserve - Minimal Static File Server
//!
//! Serves files from the current working directory, one request per
//! connection, no keep-alive.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
