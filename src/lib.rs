//! # slirc-client
//!
//! An async IRC client session engine: line framing over a pluggable
//! transport, CAP/SASL registration, multi-message response aggregation,
//! outbound rate limiting, liveness, and an event fan-out channel.
//!
//! ## Quick start
//!
//! ```no_run
//! use slirc_client::{Client, SessionConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SessionConfig::new("irc.example.org", "TestBot");
//! let client = Client::connect(config).await?;
//! client.await_registered().await?;
//! client.privmsg("#rust", "hello from slirc-client").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Acknowledgments
//!
//! This project was inspired by the architectural patterns established by
//! [Aaron Weiss (aatxe)](https://github.com/aatxe) in the
//! [irc](https://github.com/aatxe/irc) crate. We are grateful for Aaron's
//! foundational work on IRC protocol handling in Rust.

#![deny(clippy::all)]
// TODO: Enable once documentation coverage is complete
// #![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod aggregator;
pub mod casemap;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod message;
pub mod prefix;
pub mod ratelimit;
pub mod response;
pub mod sasl;

#[cfg(feature = "tokio")]
pub mod client;
#[cfg(feature = "tokio")]
pub mod engine;
#[cfg(feature = "tokio")]
pub mod handshake;
#[cfg(feature = "tokio")]
pub mod transport;

pub use self::aggregator::{AggError, AggKey, AggOutcome};
pub use self::casemap::{irc_eq, irc_to_lower};
pub use self::command::{CapSubCommand, Command};
pub use self::config::SessionConfig;
pub use self::error::{EngineError, TransportError};
pub use self::event::Event;
pub use self::message::Message;
pub use self::prefix::Prefix;
pub use self::response::Response;
pub use self::sasl::{encode_external, encode_plain, SaslMechanism, SaslState};

#[cfg(feature = "tokio")]
pub use self::client::Client;
#[cfg(feature = "tokio")]
pub use self::engine::{Engine, SessionState};
#[cfg(feature = "tokio")]
pub use self::transport::{
    MockTransport, MockTransportHandle, TcpTransport, TlsTransport, Transport, TransportReader,
    TransportWriter, MAX_IRC_LINE_LEN,
};
