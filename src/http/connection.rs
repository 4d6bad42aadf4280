use std::io::ErrorKind;
use std::sync::Arc;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::files::{ResolveError, SiteRoot, resolve};
use crate::http::mime;
use crate::http::parser::{ParseError, parse_request_line};
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;

/// Cap on the bytes buffered while waiting for a request line. A client
/// that sends this much without completing the line gets a 400.
const MAX_REQUEST_BYTES: usize = 8192;

pub struct Connection {
    stream: TcpStream,
    buffer: Vec<u8>,
    state: ConnectionState,
    site: Arc<SiteRoot>,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

enum ReadOutcome {
    /// A complete request line parsed.
    Request(Request),
    /// The line was malformed or oversized; answer 400.
    Malformed,
    /// The client went away before sending anything; close silently.
    Disconnected,
}

impl Connection {
    pub fn new(stream: TcpStream, site: Arc<SiteRoot>) -> Self {
        Self {
            stream,
            buffer: Vec::with_capacity(1024),
            state: ConnectionState::Reading,
            site,
        }
    }

    /// Drives the connection through its state machine:
    /// Reading → Processing → Writing → Closed.
    ///
    /// One response per connection; the socket closes on every exit path
    /// when `self` is dropped. Transport errors propagate to the spawning
    /// task, everything else becomes an HTTP error response.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => match self.read_request().await? {
                    ReadOutcome::Request(req) => {
                        self.state = ConnectionState::Processing(req);
                    }
                    ReadOutcome::Malformed => {
                        let writer = ResponseWriter::new(&Response::error(StatusCode::BadRequest));
                        self.state = ConnectionState::Writing(writer);
                    }
                    ReadOutcome::Disconnected => {
                        self.state = ConnectionState::Closed;
                    }
                },

                ConnectionState::Processing(req) => {
                    let response = Self::handle(&self.site, req).await;
                    tracing::info!(
                        "{} {} -> {} ({} bytes)",
                        req.method,
                        req.path,
                        response.status.as_u16(),
                        response.body.len()
                    );

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads until a full request line is buffered.
    ///
    /// Zero bytes before any data means the client disconnected without a
    /// request; no response is owed. Zero bytes after partial data, or a
    /// buffer past the cap, is treated as malformed.
    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            match parse_request_line(&self.buffer) {
                Ok(request) => return Ok(ReadOutcome::Request(request)),
                Err(ParseError::Malformed) => return Ok(ReadOutcome::Malformed),
                Err(ParseError::Incomplete) => {}
            }

            if self.buffer.len() >= MAX_REQUEST_BYTES {
                return Ok(ReadOutcome::Malformed);
            }

            // Clamp the read so the buffer never exceeds the cap.
            let mut temp = [0u8; 1024];
            let limit = temp.len().min(MAX_REQUEST_BYTES - self.buffer.len());
            let n = self.stream.read(&mut temp[..limit]).await?;

            if n == 0 {
                return Ok(if self.buffer.is_empty() {
                    ReadOutcome::Disconnected
                } else {
                    ReadOutcome::Malformed
                });
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }
    }

    /// Maps a request to a response. Every failure mode ends in an HTTP
    /// status here; nothing escapes to tear down the task.
    async fn handle(site: &SiteRoot, req: &Request) -> Response {
        if !req.is_get() {
            return Response::method_not_allowed();
        }

        let target = match resolve(site, &req.path).await {
            Ok(target) => target,
            Err(ResolveError::Rejected) | Err(ResolveError::NotFound) => {
                return Response::error(StatusCode::NotFound);
            }
        };

        // Whole file in one binary read; bodies are opaque byte sequences.
        match tokio::fs::read(&target).await {
            Ok(body) => Response::ok(mime::content_type(&target), body),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied) => {
                Response::error(StatusCode::NotFound)
            }
            Err(e) => {
                tracing::error!("failed to read {}: {}", target.display(), e);
                Response::error(StatusCode::InternalServerError)
            }
        }
    }
}
