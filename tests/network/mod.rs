//! Mock transport for exercising the fetch client without a network

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::rc::Rc;
use std::time::Duration;

use libfetch::network::application::http::{Attempt, Observer};
use libfetch::network::error::Error;
use libfetch::network::{Close, Connection, Delay, Read, Transport, Write};

pub const SECURE_PORT: u16 = 443;
pub const PLAIN_PORT: u16 = 80;

/// What happens when a connection to a port is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The connect call fails.
    Refuse,
    /// The connect call times out.
    ConnectTimeout,
    /// The connect succeeds but the encryption handshake fails.
    Handshake,
    /// The server sends these bytes and closes.
    Respond(Vec<u8>),
    /// The server sends these bytes, then the next read times out.
    FailAfter(Vec<u8>),
    /// Writing the request fails with an error that names no cause.
    WriteFails,
    /// Only half of the request is accepted.
    ShortWrite,
}

/// How a connection treats the request written to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sink {
    Accept,
    Fail,
    Half,
}

/// Everything the mock saw, shared between the transport and its
/// connections.
#[derive(Debug, Default)]
pub struct Log {
    pub resolves: usize,
    pub connects: Vec<SocketAddr>,
    pub timeouts: Vec<Duration>,
    pub upgrades: usize,
    pub closes: usize,
    pub writes: Vec<Vec<u8>>,
}

#[derive(Debug)]
pub struct MockConnection {
    data: Vec<u8>,
    pos: usize,
    max_read: usize,
    fail_at_end: bool,
    handshake_fails: bool,
    sink: Sink,
    log: Rc<RefCell<Log>>,
}

impl Read for MockConnection {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let left = self.data.len() - self.pos;
        if left == 0 && self.fail_at_end {
            return Err(Error::Timeout);
        }
        let n = left.min(buf.len()).min(self.max_read);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

impl Write for MockConnection {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let n = match self.sink {
            Sink::Accept => buf.len(),
            Sink::Half => buf.len() / 2,
            Sink::Fail => return Err(Error::NotOpen),
        };
        self.log.borrow_mut().writes.push(buf[..n].to_vec());
        Ok(n)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for MockConnection {
    type Error = Error;

    fn close(self) -> Result<(), Self::Error> {
        self.log.borrow_mut().closes += 1;
        // A failing close must not turn a good response into a failure.
        Err(Error::NotOpen)
    }
}

impl Connection for MockConnection {}

/// Serves scripted outcomes per port. The last outcome queued for a port
/// repeats once the others are used up.
#[derive(Debug)]
pub struct MockTransport {
    outcomes: HashMap<u16, VecDeque<Outcome>>,
    unresolvable: usize,
    max_read: usize,
    pub log: Rc<RefCell<Log>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            outcomes: HashMap::new(),
            unresolvable: 0,
            max_read: 7,
            log: Rc::default(),
        }
    }

    pub fn on(mut self, port: u16, outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        self.outcomes.entry(port).or_default().extend(outcomes);
        self
    }

    /// Fail the first `count` resolutions.
    pub fn unresolvable(mut self, count: usize) -> Self {
        self.unresolvable = count;
        self
    }

    pub fn max_read(mut self, max_read: usize) -> Self {
        self.max_read = max_read;
        self
    }

    fn next_outcome(&mut self, port: u16) -> Outcome {
        let queue = self.outcomes.entry(port).or_default();
        match queue.len() {
            0 => Outcome::Refuse,
            1 => queue[0].clone(),
            _ => queue.pop_front().unwrap(),
        }
    }
}

impl Transport for MockTransport {
    type Connection = MockConnection;
    type Secure = MockConnection;
    type Error = Error;

    fn resolve(&mut self, _host: &str) -> Result<IpAddr, Self::Error> {
        self.log.borrow_mut().resolves += 1;
        if self.unresolvable > 0 {
            self.unresolvable -= 1;
            return Err(Error::ResolveFailed);
        }
        Ok(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)))
    }

    fn connect(
        &mut self,
        remote: SocketAddr,
        timeout: Duration,
    ) -> Result<Self::Connection, Self::Error> {
        {
            let mut log = self.log.borrow_mut();
            log.connects.push(remote);
            log.timeouts.push(timeout);
        }
        let mut connection = MockConnection {
            data: Vec::new(),
            pos: 0,
            max_read: self.max_read,
            fail_at_end: false,
            handshake_fails: false,
            sink: Sink::Accept,
            log: Rc::clone(&self.log),
        };
        match self.next_outcome(remote.port()) {
            Outcome::Refuse => return Err(Error::ConnectionRefused),
            Outcome::ConnectTimeout => return Err(Error::Timeout),
            Outcome::Handshake => connection.handshake_fails = true,
            Outcome::Respond(data) => connection.data = data,
            Outcome::FailAfter(data) => {
                connection.data = data;
                connection.fail_at_end = true;
            }
            Outcome::WriteFails => connection.sink = Sink::Fail,
            Outcome::ShortWrite => connection.sink = Sink::Half,
        }
        Ok(connection)
    }

    fn upgrade(
        &mut self,
        connection: Self::Connection,
        _host: &str,
    ) -> Result<Self::Secure, Self::Error> {
        self.log.borrow_mut().upgrades += 1;
        if connection.handshake_fails {
            connection.close().ok();
            return Err(Error::HandshakeFailed);
        }
        Ok(connection)
    }
}

/// Records backoff waits instead of sleeping.
#[derive(Debug, Default, Clone)]
pub struct RecordingDelay {
    pub waits: Rc<RefCell<Vec<u32>>>,
}

impl Delay for RecordingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.waits.borrow_mut().push(ms);
    }
}

/// Collects failed attempts.
#[derive(Debug, Default)]
pub struct Failures {
    pub seen: Vec<(Attempt, Error)>,
}

impl Observer for Failures {
    fn attempt_failed(&mut self, attempt: Attempt, error: Error) {
        self.seen.push((attempt, error));
    }
}

/// Build a complete response with the given head lines and raw body.
pub fn response(headers: &[&str], body: &[u8]) -> Vec<u8> {
    let mut out = b"HTTP/1.1 200 OK\r\n".to_vec();
    for header in headers {
        out.extend_from_slice(header.as_bytes());
        out.extend_from_slice(b"\r\n");
    }
    out.extend_from_slice(b"\r\n");
    out.extend_from_slice(body);
    out
}
