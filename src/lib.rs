//! # ircline
//!
//! Translates typed user input into encoded IRC wire commands for client
//! cores.
//!
//! ## Features
//!
//! - One-line-in, ordered-emissions-out dispatch: commands and local
//!   echoes come back in the order they must reach the network and the
//!   display
//! - Command table keyed by normalized keyword, with an extension point
//!   for application-defined commands
//! - Per-network, per-channel, and per-user character encoding policies
//!   backed by `encoding_rs`
//! - Channel-key bookkeeping for `/join`
//! - Infallible dispatch boundary: a malformed command surfaces as an
//!   error display event, never as a crashed session
//!
//! ## Quick Start
//!
//! ```rust
//! use ircline::{BufferTarget, InputConfig, Outbound, Registry, Session};
//!
//! let session = Session::new(InputConfig::default());
//! session.set_my_nick("wintermute");
//! let registry = Registry::new();
//!
//! let buffer = BufferTarget::channel("#rust");
//! let out = registry.dispatch(&session, &buffer, "hello, world");
//!
//! // Plain text becomes a PRIVMSG followed by the local self-echo.
//! assert!(matches!(&out[0], Outbound::Command(c) if c.verb == "PRIVMSG"));
//! assert!(matches!(&out[1], Outbound::Display(_)));
//! ```
//!
//! The caller owns the sink side: [`Outbound::Command`] and
//! [`Outbound::RawLine`] go to the connection, [`Outbound::CtcpQuery`] to
//! the CTCP layer, and [`Outbound::Display`] to the buffer renderer.

#![warn(missing_docs)]

pub mod command;
pub mod config;
pub mod encode;
pub mod error;
pub mod event;
pub mod handlers;
pub mod session;
pub mod target;
pub mod util;

pub use self::command::{Outbound, ProtocolCommand};
pub use self::config::InputConfig;
pub use self::encode::EncodingPolicy;
pub use self::error::{HandlerError, HandlerResult};
pub use self::event::{DisplayEvent, DisplayKind};
pub use self::handlers::{Context, Handler, ParsedInput, Registry};
pub use self::session::Session;
pub use self::target::{BufferKind, BufferTarget};
