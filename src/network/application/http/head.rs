use alloc::vec::Vec;

use super::reader::ResponseReader;
use crate::network::Read;
use crate::network::error::Error;

/// The two response headers that decide how the body is framed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResponseHead {
    /// Value of a parseable `Content-Length` header.
    pub content_length: Option<usize>,
    /// Whether `Transfer-Encoding` mentions `chunked`.
    pub chunked: bool,
}

/// How the body that follows the head is delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// `Transfer-Encoding: chunked`.
    Chunked,
    /// Exactly this many bytes.
    Length(usize),
    /// Everything until the server closes the connection.
    UntilClose,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Framing {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Framing::Chunked => defmt::write!(f, "Chunked"),
            Framing::Length(n) => defmt::write!(f, "Length({})", n),
            Framing::UntilClose => defmt::write!(f, "UntilClose"),
        }
    }
}

impl ResponseHead {
    /// Chunked wins over a declared length, which wins over read-until-close.
    pub fn framing(&self) -> Framing {
        match (self.chunked, self.content_length) {
            (true, _) => Framing::Chunked,
            (false, Some(len)) => Framing::Length(len),
            (false, None) => Framing::UntilClose,
        }
    }

    /// Fold one raw header line (terminator included) into the head.
    ///
    /// Lines without a colon, lines that are not UTF-8 and unrecognized
    /// headers are ignored. So is a `Content-Length` that is not a
    /// non-negative integer.
    pub fn apply(&mut self, line: &[u8]) {
        let Ok(line) = core::str::from_utf8(line) else {
            return;
        };
        let Some((name, value)) = line.split_once(':') else {
            return;
        };
        let name = name.trim();
        let value = value.trim();

        if name.eq_ignore_ascii_case("content-length") {
            if let Ok(len) = value.parse::<usize>() {
                self.content_length = Some(len);
            }
        } else if name.eq_ignore_ascii_case("transfer-encoding")
            && contains_ignore_ascii_case(value.as_bytes(), b"chunked")
        {
            self.chunked = true;
        }
    }
}

fn contains_ignore_ascii_case(haystack: &[u8], needle: &[u8]) -> bool {
    haystack
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

/// Consume the status line and headers, up to and including the blank line.
///
/// The status line is not inspected. Fails with
/// [`Error::ConnectionClosed`] only when the stream ends before the status
/// line produced a single byte; a stream that ends among the headers simply
/// ends the head.
pub fn read_head<R: Read>(reader: &mut ResponseReader<'_, R>) -> Result<ResponseHead, Error> {
    let mut line = Vec::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(Error::ConnectionClosed);
    }

    let mut head = ResponseHead::default();
    loop {
        if reader.read_line(&mut line)? == 0 || line == b"\r\n" {
            break;
        }
        head.apply(&line);
    }
    Ok(head)
}
