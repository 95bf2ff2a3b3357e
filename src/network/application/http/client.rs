use alloc::string::String;
use alloc::vec::Vec;
use core::net::{IpAddr, SocketAddr};

use super::body::read_body;
use super::head::read_head;
use super::options::Options;
use super::reader::ResponseReader;
use super::request::GetRequest;
use crate::network::error::Error;
use crate::network::{Close, Connection, Delay, Read, Transport};

/// Transport mode of one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plain connection upgraded to encrypted transport.
    Secure,
    /// Plain connection used as-is.
    Plain,
}

/// One try at fetching a path: the mode and its 1-based number within that
/// mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    pub mode: Mode,
    pub number: u8,
}

impl Attempt {
    /// The first attempt of a fetch, or `None` if the budget is zero.
    pub fn first(retries: u8) -> Option<Self> {
        (retries > 0).then_some(Attempt {
            mode: Mode::Secure,
            number: 1,
        })
    }

    /// The attempt that follows this one.
    ///
    /// Secure attempts run out before the first plain attempt; `None` once
    /// the plain budget is spent too.
    pub fn next(self, retries: u8) -> Option<Self> {
        match self.mode {
            _ if self.number < retries => Some(Attempt {
                number: self.number + 1,
                ..self
            }),
            Mode::Secure => Some(Attempt {
                mode: Mode::Plain,
                number: 1,
            }),
            Mode::Plain => None,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Mode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Mode::Secure => defmt::write!(f, "HTTPS"),
            Mode::Plain => defmt::write!(f, "HTTP"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Attempt {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} try {}", self.mode, self.number)
    }
}

/// Notified about every failed attempt, e.g. to show progress on a display.
pub trait Observer {
    /// Called after `attempt` failed with `error`, before the backoff wait.
    fn attempt_failed(&mut self, attempt: Attempt, error: Error) {
        let _ = (attempt, error);
    }
}

impl Observer for () {}

/// HTTP GET client that tries encrypted transport first and falls back to
/// plain transport.
///
/// A fetch makes up to `retries` secure attempts, then up to `retries` plain
/// ones, waiting `backoff_ms` between attempts. Each attempt owns its
/// connection and closes it before the next one starts. Nothing is carried
/// from one fetch to the next.
#[derive(Debug)]
pub struct Client<'a, T: Transport, D: Delay, O: Observer = ()> {
    transport: T,
    delay: D,
    observer: O,
    options: Options<'a>,
}

impl<'a, T: Transport, D: Delay> Client<'a, T, D> {
    pub fn new(transport: T, delay: D, options: Options<'a>) -> Self {
        Self {
            transport,
            delay,
            observer: (),
            options,
        }
    }
}

impl<'a, T: Transport, D: Delay, O: Observer> Client<'a, T, D, O> {
    /// Replace the observer.
    pub fn with_observer<P: Observer>(self, observer: P) -> Client<'a, T, D, P> {
        Client {
            transport: self.transport,
            delay: self.delay,
            observer,
            options: self.options,
        }
    }

    /// The observer, e.g. to inspect what it collected.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Fetch `path` and return the body as text with surrounding whitespace
    /// trimmed.
    ///
    /// Fails with [`Error::RequestTooLarge`] before any connection is opened
    /// if the request does not fit, and with [`Error::AttemptsExhausted`]
    /// once every secure and plain attempt has failed.
    pub fn fetch_text(&mut self, path: &str) -> Result<String, Error> {
        let request = GetRequest::new(path, self.options.host)?;
        let retries = self.options.retries;
        let mut address = None;

        let mut next = Attempt::first(retries);
        while let Some(attempt) = next {
            debug!("{} {=str}", attempt, path);
            match self.attempt(attempt, &request, &mut address) {
                Ok(text) => return Ok(text),
                Err(error) => {
                    warn!("{} failed: {}", attempt, error);
                    self.observer.attempt_failed(attempt, error);
                }
            }

            next = attempt.next(retries);
            if let Some(upcoming) = next {
                if upcoming.mode != attempt.mode {
                    info!("secure attempts exhausted, falling back to plain transport");
                }
                self.delay.delay_ms(self.options.backoff_ms);
            }
        }

        error!("all attempts failed for {=str}", path);
        Err(Error::AttemptsExhausted)
    }

    fn attempt(
        &mut self,
        attempt: Attempt,
        request: &GetRequest,
        address: &mut Option<IpAddr>,
    ) -> Result<String, Error> {
        let ip = match *address {
            Some(ip) => ip,
            None => {
                let ip = self
                    .transport
                    .resolve(self.options.host)
                    .map_err(|e| e.into().at_stage(Error::ResolveFailed))?;
                *address = Some(ip);
                ip
            }
        };

        let port = match attempt.mode {
            Mode::Secure => self.options.secure_port,
            Mode::Plain => self.options.plain_port,
        };
        let connection = self
            .transport
            .connect(SocketAddr::new(ip, port), self.options.timeout())
            .map_err(|e| e.into().at_stage(Error::ConnectionRefused))?;

        match attempt.mode {
            Mode::Secure => {
                let secure = self
                    .transport
                    .upgrade(connection, self.options.host)
                    .map_err(|e| e.into().at_stage(Error::HandshakeFailed))?;
                exchange(secure, request)
            }
            Mode::Plain => exchange(connection, request),
        }
    }
}

/// Send `request`, read the response and close the connection, whatever the
/// outcome.
fn exchange<C: Connection>(mut connection: C, request: &GetRequest) -> Result<String, Error> {
    let body = request
        .send(&mut connection)
        .and_then(|()| read_response(&mut connection));
    if connection.close().is_err() {
        debug!("ignoring error while closing connection");
    }
    Ok(body_text(&body?))
}

/// Read a complete response (head and body) from `stream`.
///
/// Returns the raw body bytes, however the body was framed.
pub fn read_response<R: Read>(stream: &mut R) -> Result<Vec<u8>, Error> {
    let mut reader = ResponseReader::new(stream);
    let head = read_head(&mut reader)?;
    let framing = head.framing();
    debug!("response body framing: {}", framing);
    read_body(&mut reader, framing)
}

/// Decode a body as UTF-8, replacing invalid sequences, and trim it.
pub fn body_text(body: &[u8]) -> String {
    String::from(String::from_utf8_lossy(body).trim())
}
