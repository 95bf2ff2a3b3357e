//! Paths for the ThingSpeak read API.
//!
//! A channel field's latest value is served as plain text from
//! `/channels/{id}/fields/{n}/last.txt`, which is exactly the kind of small
//! payload [`Client::fetch_text`](super::Client::fetch_text) is built for.

use core::fmt::Write as _;

use heapless::String;

use crate::network::error::Error;

/// Default ThingSpeak API host.
pub const API_HOST: &str = "api.thingspeak.com";

/// Capacity of a generated path.
pub const MAX_PATH_LEN: usize = 128;

/// Build the path of the last value of `field` in `channel_id`.
///
/// Private channels need a read API key, which is passed as the `api_key`
/// query parameter.
pub fn last_field_path(
    channel_id: &str,
    field: u8,
    read_api_key: Option<&str>,
) -> Result<String<MAX_PATH_LEN>, Error> {
    let mut path = String::new();
    write!(path, "/channels/{channel_id}/fields/{field}/last.txt").map_err(|_| Error::RequestTooLarge)?;
    if let Some(key) = read_api_key {
        write!(path, "?api_key={key}").map_err(|_| Error::RequestTooLarge)?;
    }
    Ok(path)
}
