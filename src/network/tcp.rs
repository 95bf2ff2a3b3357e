//! Transport over `std::net` for Linux-based devices and host-side tools.
//!
//! This transport carries no TLS stack: [`TcpTransport::upgrade`] always fails
//! with [`Error::HandshakeFailed`], so a fetch through it spends its secure
//! attempts and then succeeds over plain TCP. Platforms with TLS provide
//! their own [`Transport`].

use core::net::{IpAddr, SocketAddr};
use core::time::Duration;
use std::io::{self, ErrorKind, Read as _, Write as _};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};

use super::error::Error;
use super::{Close, Connection, Delay, Read, Transport, Write};

/// A connected TCP stream with read and write timeouts applied.
#[derive(Debug)]
pub struct TcpConnection {
    stream: TcpStream,
}

impl TcpConnection {
    pub fn new(stream: TcpStream, timeout: Duration) -> Result<Self, Error> {
        stream
            .set_read_timeout(Some(timeout))
            .and_then(|()| stream.set_write_timeout(Some(timeout)))
            .map_err(|_| Error::NotOpen)?;
        Ok(Self { stream })
    }
}

fn io_error(e: &io::Error, otherwise: Error) -> Error {
    match e.kind() {
        ErrorKind::WouldBlock | ErrorKind::TimedOut => Error::Timeout,
        _ => otherwise,
    }
}

impl Read for TcpConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            match self.stream.read(buf) {
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                result => return result.map_err(|e| io_error(&e, Error::ReadError)),
            }
        }
    }
}

impl Write for TcpConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.stream
            .write_all(buf)
            .map_err(|e| io_error(&e, Error::WriteError))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.stream
            .flush()
            .map_err(|e| io_error(&e, Error::WriteError))
    }
}

impl Close for TcpConnection {
    type Error = Error;

    fn close(self) -> Result<(), Self::Error> {
        match self.stream.shutdown(Shutdown::Both) {
            Err(e) if e.kind() != ErrorKind::NotConnected => Err(Error::NotOpen),
            _ => Ok(()),
        }
    }
}

impl Connection for TcpConnection {}

/// Plain TCP transport backed by the operating system resolver.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpTransport;

impl Transport for TcpTransport {
    type Connection = TcpConnection;
    type Secure = TcpConnection;
    type Error = Error;

    fn resolve(&mut self, host: &str) -> Result<IpAddr, Self::Error> {
        (host, 0)
            .to_socket_addrs()
            .map_err(|_| Error::ResolveFailed)?
            .next()
            .map(|addr| addr.ip())
            .ok_or(Error::ResolveFailed)
    }

    fn connect(
        &mut self,
        remote: SocketAddr,
        timeout: Duration,
    ) -> Result<Self::Connection, Self::Error> {
        let stream = TcpStream::connect_timeout(&remote, timeout)
            .map_err(|e| io_error(&e, Error::ConnectionRefused))?;
        TcpConnection::new(stream, timeout)
    }

    fn upgrade(
        &mut self,
        _connection: Self::Connection,
        _host: &str,
    ) -> Result<Self::Secure, Self::Error> {
        Err(Error::HandshakeFailed)
    }
}

/// Backoff delay that puts the current thread to sleep.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl Delay for StdDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
