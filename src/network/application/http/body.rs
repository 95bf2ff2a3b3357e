use alloc::vec::Vec;

use super::head::Framing;
use super::reader::{READ_BUFFER_SIZE, ResponseReader};
use crate::network::Read;
use crate::network::error::Error;

/// Read the body that follows the head, using the given framing.
///
/// None of the strategies treat an early end of stream as an error: whatever
/// arrived before the close is returned. Read failures still propagate.
pub fn read_body<R: Read>(
    reader: &mut ResponseReader<'_, R>,
    framing: Framing,
) -> Result<Vec<u8>, Error> {
    let mut body = Vec::new();
    match framing {
        Framing::Chunked => read_chunked(reader, &mut body)?,
        Framing::Length(len) => {
            reader.read_into(&mut body, len)?;
        }
        Framing::UntilClose => read_to_close(reader, &mut body)?,
    }
    Ok(body)
}

/// Decode a `Transfer-Encoding: chunked` body.
///
/// An unparseable size line ends the body. After the zero-size chunk exactly
/// one more line is consumed; trailer headers beyond that are not read.
fn read_chunked<R: Read>(reader: &mut ResponseReader<'_, R>, body: &mut Vec<u8>) -> Result<(), Error> {
    let mut line = Vec::new();
    loop {
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let Some(size) = parse_chunk_size(&line) else {
            debug!("unparseable chunk size line, keeping {} bytes", body.len());
            break;
        };
        if size == 0 {
            reader.read_line(&mut line)?;
            break;
        }
        if reader.read_into(body, size)? < size {
            break;
        }
        // CRLF after the chunk data
        reader.read_line(&mut line)?;
    }
    Ok(())
}

/// Drain the stream in buffer-sized pieces until it closes.
fn read_to_close<R: Read>(reader: &mut ResponseReader<'_, R>, body: &mut Vec<u8>) -> Result<(), Error> {
    while reader.read_into(body, READ_BUFFER_SIZE)? == READ_BUFFER_SIZE {}
    Ok(())
}

/// Parse the hexadecimal size at the start of a chunk header line.
///
/// Digits run up to the first whitespace or `;`, so chunk extensions are
/// ignored. Returns `None` if there are no digits, a non-hex character comes
/// first, or the size overflows `usize`.
pub fn parse_chunk_size(line: &[u8]) -> Option<usize> {
    let start = line.iter().position(|b| !b.is_ascii_whitespace())?;
    let digits = &line[start..];
    let end = digits
        .iter()
        .position(|&b| b == b';' || b.is_ascii_whitespace())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }

    digits.iter().try_fold(0usize, |size, &b| {
        let nibble = (b as char).to_digit(16)? as usize;
        size.checked_mul(16)?.checked_add(nibble)
    })
}
