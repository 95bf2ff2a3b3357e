//! Common error types for network operations

use core::fmt;

/// A common error type for network operations.
///
/// Every failure a fetch can report is one of these variants. Transport
/// implementations may use their own error types as long as they convert
/// into this one; the client keeps the converted cause and falls back to the
/// stage at which it occurred (see [`Error::at_stage`]).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An operation was attempted on a connection that is not open.
    NotOpen,
    /// The host name could not be resolved to an address.
    ResolveFailed,
    /// A connection attempt was refused or did not complete in time.
    ConnectionRefused,
    /// Upgrading the connection to encrypted transport failed.
    HandshakeFailed,
    /// An error occurred during a write operation, or a write was short.
    WriteError,
    /// An error occurred during a read operation.
    ReadError,
    /// A timeout occurred.
    Timeout,
    /// The connection was closed before the response status line arrived.
    ConnectionClosed,
    /// The request line and headers do not fit the request buffer.
    RequestTooLarge,
    /// A configuration blob could not be parsed.
    InvalidOptions,
    /// Every secure and plain attempt failed.
    AttemptsExhausted,
}

impl Error {
    /// Pick the cause to report for a transport error raised during `stage`.
    ///
    /// The transport's own variant wins when it names a cause, such as a
    /// timeout. `NotOpen` and variants a transport cannot meaningfully raise
    /// are replaced by `stage`.
    pub fn at_stage(self, stage: Error) -> Error {
        match self {
            Error::NotOpen
            | Error::RequestTooLarge
            | Error::InvalidOptions
            | Error::AttemptsExhausted => stage,
            cause => cause,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::NotOpen => "connection is not open",
            Error::ResolveFailed => "host name resolution failed",
            Error::ConnectionRefused => "connection refused",
            Error::HandshakeFailed => "encrypted transport handshake failed",
            Error::WriteError => "write failed",
            Error::ReadError => "read failed",
            Error::Timeout => "operation timed out",
            Error::ConnectionClosed => "connection closed before response",
            Error::RequestTooLarge => "request does not fit the request buffer",
            Error::InvalidOptions => "invalid options",
            Error::AttemptsExhausted => "all HTTP(S) attempts failed",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotOpen => defmt::write!(f, "NotOpen"),
            Error::ResolveFailed => defmt::write!(f, "ResolveFailed"),
            Error::ConnectionRefused => defmt::write!(f, "ConnectionRefused"),
            Error::HandshakeFailed => defmt::write!(f, "HandshakeFailed"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::ConnectionClosed => defmt::write!(f, "ConnectionClosed"),
            Error::RequestTooLarge => defmt::write!(f, "RequestTooLarge"),
            Error::InvalidOptions => defmt::write!(f, "InvalidOptions"),
            Error::AttemptsExhausted => defmt::write!(f, "AttemptsExhausted"),
        }
    }
}
