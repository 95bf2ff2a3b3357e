//! In-memory connection for unit tests.

use alloc::vec::Vec;

use crate::network::error::Error;
use crate::network::{Close, Connection, Read, Write};

/// Serves a canned response in reads of at most `max_read` bytes.
#[derive(Debug)]
pub struct Scripted {
    data: &'static [u8],
    pos: usize,
    max_read: usize,
    fail_at_end: Option<Error>,
    pub written: Vec<u8>,
    pub write_limit: Option<usize>,
    /// Largest buffer handed to `read` so far.
    pub largest_read: usize,
}

impl Scripted {
    pub fn new(data: &'static [u8], max_read: usize) -> Self {
        Self {
            data,
            pos: 0,
            max_read,
            fail_at_end: None,
            written: Vec::new(),
            write_limit: None,
            largest_read: 0,
        }
    }

    /// Like [`Scripted::new`], but the read after the last byte times out
    /// instead of reporting a closed stream.
    pub fn failing_after(data: &'static [u8], max_read: usize) -> Self {
        Self::failing_with(data, max_read, Error::Timeout)
    }

    /// Like [`Scripted::failing_after`], failing with `error`.
    pub fn failing_with(data: &'static [u8], max_read: usize, error: Error) -> Self {
        Self {
            fail_at_end: Some(error),
            ..Self::new(data, max_read)
        }
    }
}

impl Read for Scripted {
    type Error = Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.largest_read = self.largest_read.max(buf.len());
        let left = self.data.len() - self.pos;
        if left == 0 {
            if let Some(error) = self.fail_at_end {
                return Err(error);
            }
        }
        let n = left.min(buf.len()).min(self.max_read);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}

impl Write for Scripted {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        let n = self.write_limit.map_or(buf.len(), |limit| limit.min(buf.len()));
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for Scripted {
    type Error = Error;

    fn close(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Connection for Scripted {}
