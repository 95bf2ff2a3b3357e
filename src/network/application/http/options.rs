use core::time::Duration;

use serde::Deserialize;

use crate::network::error::Error;

/// Port tried first, with encrypted transport.
pub const DEFAULT_SECURE_PORT: u16 = 443;
/// Port tried once the secure attempts are used up.
pub const DEFAULT_PLAIN_PORT: u16 = 80;
/// Connect and per-operation timeout.
pub const DEFAULT_TIMEOUT_MS: u32 = 12_000;
/// Attempts per transport mode.
pub const DEFAULT_RETRIES: u8 = 3;
/// Wait between two attempts.
pub const DEFAULT_BACKOFF_MS: u32 = 1_000;

/// Configuration options for the fetch client.
///
/// Can be built in code with [`Options::new`] or read from a JSON blob, for
/// example one stored in flash, with [`Options::from_json`]. Only `host` is
/// required in JSON; every other field falls back to its default.
///
/// # Examples
///
/// ```rust
/// use libfetch::network::application::http::Options;
///
/// let options = Options::from_json(br#"{"host":"api.thingspeak.com","retries":5}"#).unwrap();
/// assert_eq!(options.host, "api.thingspeak.com");
/// assert_eq!(options.retries, 5);
/// assert_eq!(options.secure_port, 443);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Options<'a> {
    /// Host name sent in the `Host` header and resolved for every fetch.
    #[serde(borrow)]
    pub host: &'a str,

    /// Port used with encrypted transport.
    #[serde(default = "default_secure_port")]
    pub secure_port: u16,

    /// Port used with plain transport.
    #[serde(default = "default_plain_port")]
    pub plain_port: u16,

    /// Timeout for the connect and for every read and write after it. Must
    /// not be zero: `std` sockets reject a zero timeout.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,

    /// Attempts per transport mode. A fetch makes at most twice this many.
    #[serde(default = "default_retries")]
    pub retries: u8,

    /// Wait between two consecutive attempts.
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u32,
}

fn default_secure_port() -> u16 {
    DEFAULT_SECURE_PORT
}

fn default_plain_port() -> u16 {
    DEFAULT_PLAIN_PORT
}

fn default_timeout_ms() -> u32 {
    DEFAULT_TIMEOUT_MS
}

fn default_retries() -> u8 {
    DEFAULT_RETRIES
}

fn default_backoff_ms() -> u32 {
    DEFAULT_BACKOFF_MS
}

impl<'a> Options<'a> {
    pub fn new(host: &'a str) -> Self {
        Self {
            host,
            secure_port: DEFAULT_SECURE_PORT,
            plain_port: DEFAULT_PLAIN_PORT,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retries: DEFAULT_RETRIES,
            backoff_ms: DEFAULT_BACKOFF_MS,
        }
    }

    /// Parse options from JSON, borrowing the host string from `json`.
    ///
    /// Fails with [`Error::InvalidOptions`] if the blob does not parse or
    /// `timeout_ms` is zero.
    pub fn from_json(json: &'a [u8]) -> Result<Self, Error> {
        let (options, _): (Self, _) =
            serde_json_core::from_slice(json).map_err(|_| Error::InvalidOptions)?;
        if options.timeout_ms == 0 {
            return Err(Error::InvalidOptions);
        }
        Ok(options)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.timeout_ms))
    }
}
