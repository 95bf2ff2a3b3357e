//! HTTP/1.1 text fetching for embedded systems.
//!
//! This module fetches a small text body, such as the latest value of a
//! sensor channel, from a server that may or may not speak TLS and may frame
//! its body with `Content-Length`, chunked transfer encoding, or by closing
//! the connection.
//!
//! # Pipeline
//!
//! Each attempt runs the same steps over one connection:
//!
//! 1. [`request::GetRequest`] writes `GET` with `Host`, `User-Agent` and
//!    `Connection: close`.
//! 2. [`head::read_head`] skips the status line and picks out
//!    `Content-Length` and `Transfer-Encoding`.
//! 3. [`body::read_body`] decodes the body using the resulting [`Framing`].
//!
//! [`Client`] wraps this in bounded retries: every secure attempt is used up
//! before the first plain one.
//!
//! # Failure model
//!
//! Malformed framing never fails a fetch. A bad `Content-Length` is ignored,
//! a bad chunk size ends the body, and a body cut short by the server is
//! returned as far as it got. Only connection-level failures (resolve,
//! connect, handshake, read/write errors, a close before the status line)
//! consume an attempt.
//!
//! # Usage
//!
//! ```rust,no_run
//! use libfetch::network::application::http::{Client, Options, thingspeak};
//! # use core::net::{IpAddr, SocketAddr};
//! # use core::time::Duration;
//! # use libfetch::network::{Close, Connection, Delay, Read, Transport, Write};
//! # use libfetch::network::error::Error;
//! # struct MockConnection;
//! # impl Connection for MockConnection {}
//! # impl Read for MockConnection {
//! #     type Error = Error;
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl Write for MockConnection {
//! #     type Error = Error;
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Close for MockConnection {
//! #     type Error = Error;
//! #     fn close(self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockTransport;
//! # impl Transport for MockTransport {
//! #     type Connection = MockConnection;
//! #     type Secure = MockConnection;
//! #     type Error = Error;
//! #     fn resolve(&mut self, _host: &str) -> Result<IpAddr, Error> { Err(Error::ResolveFailed) }
//! #     fn connect(&mut self, _remote: SocketAddr, _timeout: Duration) -> Result<MockConnection, Error> { Err(Error::Timeout) }
//! #     fn upgrade(&mut self, c: MockConnection, _host: &str) -> Result<MockConnection, Error> { Ok(c) }
//! # }
//! # struct NoDelay;
//! # impl Delay for NoDelay { fn delay_ms(&mut self, _ms: u32) {} }
//!
//! let options = Options::new(thingspeak::API_HOST);
//! let mut client = Client::new(MockTransport, NoDelay, options);
//!
//! let path = thingspeak::last_field_path("3030971", 1, None).unwrap();
//! // let goal = client.fetch_text(&path)?;
//! ```

/// Response body decoding.
pub mod body;

/// Retry and fallback orchestration.
pub mod client;

/// Status line and header parsing.
pub mod head;

/// Client configuration.
pub mod options;

/// Buffered line and byte reader over a connection.
pub mod reader;

/// Request serialization.
pub mod request;

pub mod thingspeak;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{Attempt, Client, Mode, Observer, body_text, read_response};
pub use head::{Framing, ResponseHead};
pub use options::Options;
pub use request::GetRequest;
