use std::io;

use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::files::{self, ServedRoot};
use crate::http::mime;
use crate::http::parser::{self, ParseError};
use crate::http::request::Request;
use crate::http::response::ResponseHead;
use crate::http::writer::ResponseWriter;

pub struct Connection {
    stream: TcpStream,
    root: ServedRoot,
    buffer: Vec<u8>,
    state: ConnectionState,
}

pub enum ConnectionState {
    ReadRequest,
    Serve(Request),
    Reject(ResponseHead),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, root: ServedRoot) -> Self {
        Self {
            stream,
            root,
            buffer: Vec::with_capacity(1024),
            state: ConnectionState::ReadRequest,
        }
    }

    /// Drives the connection through one request/response cycle. There is no
    /// path back to `ReadRequest`: every branch ends in `Closed`.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::ReadRequest => {
                    self.state = self.read_request().await?;
                }

                ConnectionState::Serve(req) => {
                    self.serve(&req).await?;
                }

                ConnectionState::Reject(head) => {
                    info!("rejected request -> {}", head.status.as_u16());
                    ResponseWriter::new(&head)
                        .write_head(&mut self.stream)
                        .await?;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until the buffer holds a parseable request line, the client
    /// stops sending, or the line limit is hit.
    async fn read_request(&mut self) -> anyhow::Result<ConnectionState> {
        loop {
            // Try parsing whatever we already have
            match parser::parse_request(&self.buffer, false) {
                Ok(req) => return Ok(ConnectionState::Serve(req)),

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    debug!("malformed request line: {:?}", e);
                    return Ok(ConnectionState::Reject(ResponseHead::bad_request()));
                }
            }

            let mut temp = [0u8; 1024];
            let n = self.stream.read(&mut temp).await?;

            if n == 0 {
                // Client stopped sending; an unterminated line still counts
                if self.buffer.is_empty() {
                    return Ok(ConnectionState::Closed);
                }

                return Ok(match parser::parse_request(&self.buffer, true) {
                    Ok(req) => ConnectionState::Serve(req),
                    Err(e) => {
                        debug!("malformed request line at eof: {:?}", e);
                        ConnectionState::Reject(ResponseHead::bad_request())
                    }
                });
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }

    async fn serve(&mut self, req: &Request) -> anyhow::Result<()> {
        let page = files::map_index(&req.path);
        let content_type = mime::content_type_for(page);

        let opened = match self.root.resolve(page) {
            Some(path) => File::open(path).await,
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        };

        let mut file = match opened {
            Ok(file) => file,
            Err(e) => {
                info!("GET {} -> 404 ({})", req.path, e.kind());
                return ResponseWriter::new(&ResponseHead::not_found())
                    .write_head(&mut self.stream)
                    .await;
            }
        };

        let size = file.metadata().await?.len();

        ResponseWriter::new(&ResponseHead::ok(size, content_type))
            .write_head(&mut self.stream)
            .await?;
        let sent = ResponseWriter::stream_file(&mut self.stream, &mut file).await?;

        info!("GET {} -> 200 ({} bytes, {})", req.path, sent, content_type);
        Ok(())
    }
}
