//! # libfetch - resilient HTTP text fetching for IoT devices
//!
//! A small `no_std` library that lets a memory-constrained device pull a short
//! text payload, such as the latest reading of a cloud-hosted sensor channel,
//! over HTTP/1.1 even when connectivity is flaky and TLS is unreliable.
//!
//! ## Features
//!
//! - **Minimal HTTP/1.1 GET**: status line skipped, only `Content-Length` and
//!   `Transfer-Encoding` interpreted
//! - **Three body framings**: declared length, chunked, and read-until-close
//! - **Transport fallback**: a fixed number of TLS attempts, then the same
//!   number over plain TCP, with a backoff between attempts
//! - **Connection agnostic**: works with any network stack implementing
//!   [`network::Transport`]
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libfetch = "0.1.0"
//! ```
//!
//! ### Fetching over `std::net`
//!
//! ```rust,ignore
//! use libfetch::network::application::http::{Client, Options, thingspeak};
//! use libfetch::network::tcp::{StdDelay, TcpTransport};
//!
//! let mut client = Client::new(TcpTransport, StdDelay, Options::new(thingspeak::API_HOST));
//! let path = thingspeak::last_field_path("3030971", 1, None)?;
//! let goal = client.fetch_text(&path)?;
//! ```
//!
//! ## Platform Support
//!
//! The library needs `core` and `alloc`. Response lines and bodies grow on
//! the heap, so the target needs a global allocator (for example `esp-alloc`
//! on ESP32 parts).
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support and the `std::net` transport
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate alloc;

#[macro_use]
mod fmt;

/// Network abstraction layer and the HTTP fetch client built on it.
///
/// The core traits describe a blocking byte stream and a transport that can
/// open one, optionally encrypted. Application protocols live under
/// [`network::application`].
pub mod network;
