//! A network abstraction layer for embedded systems
//!
//! The traits here are the only thing the HTTP fetcher knows about the
//! network. A platform provides a [`Transport`] that can resolve a host, open
//! a plain stream with a timeout and optionally wrap it in encrypted
//! transport, plus a [`Delay`] used between retries.

#![allow(missing_docs)]
#![deny(unsafe_code)]

use core::net::{IpAddr, SocketAddr};
use core::time::Duration;

/// Common error types for network operations
pub mod error;

/// Application layer protocols built on the traits below
pub mod application;

/// `std::net` backed transport for hosted targets
#[cfg(feature = "std")]
pub mod tcp;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Close, Connection, Delay, Read, Transport, Write};
}

// Core synchronous traits
pub trait Read {
    /// Associated error type, convertible so the client can report its cause
    type Error: core::fmt::Debug + Into<error::Error>;
    /// Read data from the connection. `Ok(0)` means the peer closed the stream.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

pub trait Write {
    /// Associated error type, convertible so the client can report its cause
    type Error: core::fmt::Debug + Into<error::Error>;
    /// Write data to the connection
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection
    fn close(self) -> Result<(), Self::Error>;
}

/// A synchronous connection
pub trait Connection: Read + Write + Close {}

/// Opens connections to a remote host, in plain or encrypted form.
///
/// Every blocking operation on the returned connections must honour the
/// timeout given to [`Transport::connect`]; the client has no other way to
/// interrupt a stalled read.
pub trait Transport {
    /// A plain byte stream.
    type Connection: Connection;
    /// The same stream after the encryption handshake.
    type Secure: Connection;
    /// Associated error type, convertible so the client can report its cause
    type Error: core::fmt::Debug + Into<error::Error>;

    /// Resolve a host name to an address.
    fn resolve(&mut self, host: &str) -> Result<IpAddr, Self::Error>;

    /// Open a plain connection, bounding both the connect and every later
    /// read or write by `timeout`.
    fn connect(
        &mut self,
        remote: SocketAddr,
        timeout: Duration,
    ) -> Result<Self::Connection, Self::Error>;

    /// Run the encryption handshake over a freshly opened connection.
    ///
    /// Takes the plain connection by value, so a connection can be upgraded
    /// at most once and only before anything has been written to it. On
    /// failure the plain connection is dropped by the transport.
    fn upgrade(
        &mut self,
        connection: Self::Connection,
        host: &str,
    ) -> Result<Self::Secure, Self::Error>;
}

/// Blocking delay used for the backoff between attempts.
pub trait Delay {
    /// Block the caller for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);
}
