//! HTTP protocol implementation.
//!
//! A deliberately small slice of HTTP/1.x: the request is a single
//! `GET <path> HTTP/1.<digit>` line (any further headers are ignored), the
//! response is a status line plus at most `Content-Length`/`Content-Type`,
//! with bare `\n` line endings, followed by the file bytes.
//!
//! # Connection state machine
//!
//! Each connection serves exactly one request and closes:
//!
//! ```text
//!   ReadRequest ──parse ok──▶ Serve ──200 + body / 404──▶ Closed
//!        │
//!        └──parse failure──▶ Reject ──400──▶ Closed
//! ```
//!
//! There is no transition back to `ReadRequest`: no keep-alive.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
