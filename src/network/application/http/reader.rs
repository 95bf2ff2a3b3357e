use alloc::vec::Vec;

use crate::network::Read;
use crate::network::error::Error;

/// Size of the staging buffer between the connection and the parser.
pub const READ_BUFFER_SIZE: usize = 512;

/// Buffered reader over a response stream.
///
/// Lines and body bytes are both served from the same staging buffer, so a
/// read that pulls in the start of the body while looking for the end of the
/// headers loses nothing.
#[derive(Debug)]
pub struct ResponseReader<'a, R: Read> {
    inner: &'a mut R,
    buf: [u8; READ_BUFFER_SIZE],
    pos: usize,
    filled: usize,
}

impl<'a, R: Read> ResponseReader<'a, R> {
    pub fn new(inner: &'a mut R) -> Self {
        Self {
            inner,
            buf: [0; READ_BUFFER_SIZE],
            pos: 0,
            filled: 0,
        }
    }

    /// Refill the staging buffer once it has been drained.
    ///
    /// Returns `false` when the stream is closed.
    fn fill(&mut self) -> Result<bool, Error> {
        if self.pos < self.filled {
            return Ok(true);
        }
        let n = self
            .inner
            .read(&mut self.buf)
            .map_err(|e| e.into().at_stage(Error::ReadError))?;
        self.pos = 0;
        self.filled = n;
        Ok(n > 0)
    }

    /// Read one line into `line`, replacing its contents.
    ///
    /// The line keeps its `\r\n` terminator. A line cut short by the end of
    /// the stream is returned as-is. Returns the number of bytes read, which
    /// is zero only when the stream was already closed.
    pub fn read_line(&mut self, line: &mut Vec<u8>) -> Result<usize, Error> {
        line.clear();
        while self.fill()? {
            let byte = self.buf[self.pos];
            self.pos += 1;
            line.push(byte);
            if byte == b'\n' && line.ends_with(b"\r\n") {
                break;
            }
        }
        Ok(line.len())
    }

    /// Append up to `count` bytes to `body`, looping on short reads.
    ///
    /// Stops early only when the stream closes. Returns how many bytes were
    /// appended.
    pub fn read_into(&mut self, body: &mut Vec<u8>, count: usize) -> Result<usize, Error> {
        let mut remaining = count;
        while remaining > 0 && self.fill()? {
            let n = remaining.min(self.filled - self.pos);
            body.extend_from_slice(&self.buf[self.pos..self.pos + n]);
            self.pos += n;
            remaining -= n;
        }
        Ok(count - remaining)
    }
}
