use core::fmt::Write as _;

use heapless::String;

use crate::network::Write;
use crate::network::error::Error;

/// Capacity of the serialized request.
pub const MAX_REQUEST_LEN: usize = 512;

/// Value sent in the `User-Agent` header.
pub const USER_AGENT: &str = "libfetch";

/// A serialized `GET` request, ready to be written to any number of
/// connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRequest {
    buf: String<MAX_REQUEST_LEN>,
}

impl GetRequest {
    /// Serialize `GET {path}` for `host`.
    ///
    /// Fails with [`Error::RequestTooLarge`] if the request does not fit.
    pub fn new(path: &str, host: &str) -> Result<Self, Error> {
        let mut buf = String::new();
        write!(
            buf,
            "GET {path} HTTP/1.1\r\nHost: {host}\r\nUser-Agent: {USER_AGENT}\r\nConnection: close\r\n\r\n"
        )
        .map_err(|_| Error::RequestTooLarge)?;
        Ok(Self { buf })
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// Write the whole request in a single call.
    ///
    /// A short write is reported as [`Error::WriteError`].
    pub fn send<W: Write>(&self, connection: &mut W) -> Result<(), Error> {
        let bytes = self.as_bytes();
        let written = connection
            .write(bytes)
            .map_err(|e| e.into().at_stage(Error::WriteError))?;
        if written != bytes.len() {
            return Err(Error::WriteError);
        }
        connection
            .flush()
            .map_err(|e| e.into().at_stage(Error::WriteError))
    }
}
