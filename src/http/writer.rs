use bytes::BytesMut;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::response::ResponseHead;

/// Upper bound on how much of a file is buffered per write to the socket.
pub const CHUNK_SIZE: usize = 64 * 1024;

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(head: &ResponseHead) -> Self {
        Self {
            buffer: head.serialize(),
            written: 0,
        }
    }

    /// Writes the serialized head, handling partial writes.
    pub async fn write_head(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }

    /// Copies the file to the socket in chunks of at most `CHUNK_SIZE`,
    /// returning the number of body bytes sent.
    pub async fn stream_file(stream: &mut TcpStream, file: &mut File) -> anyhow::Result<u64> {
        let mut chunk = BytesMut::with_capacity(CHUNK_SIZE);
        let mut sent = 0u64;

        loop {
            chunk.clear();
            let n = file.read_buf(&mut chunk).await?;
            if n == 0 {
                break;
            }

            stream.write_all(&chunk).await?;
            sent += n as u64;
        }

        Ok(sent)
    }
}
