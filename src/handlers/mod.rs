//! Input command handlers.
//!
//! This module contains the [`Handler`] trait and the command [`Registry`]
//! that turns one line of typed user input into an ordered stream of
//! [`Outbound`] emissions. Handlers never perform I/O; they append to the
//! [`Context`] buffer and the caller hands the result to the output sink.

mod channel;
mod connection;
mod ctcp;
mod messaging;
mod mode;
mod server_query;

pub use channel::{
    BanHandler, InviteHandler, JoinHandler, JoinShortHandler, KickHandler, PartHandler,
    TopicHandler,
};
pub use connection::{AwayHandler, NickHandler, QuitHandler};
pub use ctcp::CtcpHandler;
pub use messaging::{MeHandler, MsgHandler, QueryHandler, SayHandler};
pub use mode::{ModeHandler, PrivModeHandler};
pub use server_query::{ForwardHandler, QuoteHandler};

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error};

use crate::command::{Outbound, ProtocolCommand};
use crate::error::{HandlerError, HandlerResult};
use crate::event::DisplayEvent;
use crate::session::Session;
use crate::target::BufferTarget;

/// One line of raw input split into its command keyword and remainder.
///
/// Text without the command prefix is an implicit `SAY`; otherwise the
/// first whitespace-delimited token (minus the prefix) is the keyword,
/// uppercased, and the remainder is everything after the first space with
/// its interior spacing intact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedInput {
    /// Uppercased command keyword.
    pub command: String,
    /// Argument text following the keyword.
    pub remainder: String,
}

impl ParsedInput {
    /// Split raw input under the given command prefix character.
    pub fn parse(raw: &str, prefix: char) -> Self {
        if !raw.starts_with(prefix) {
            return Self {
                command: "SAY".to_string(),
                remainder: raw.to_string(),
            };
        }
        let body = &raw[prefix.len_utf8()..];
        match body.find(' ') {
            Some(i) => Self {
                command: body[..i].to_ascii_uppercase(),
                remainder: body[i + 1..].to_string(),
            },
            None => Self {
                command: body.to_ascii_uppercase(),
                remainder: String::new(),
            },
        }
    }
}

/// Handler context: session access plus the ordered emission buffer.
///
/// A fresh context is built for every dispatch call and drained into the
/// returned `Vec<Outbound>` afterwards, so emissions of one call can never
/// leak into another.
pub struct Context<'a> {
    session: &'a Session,
    out: Vec<Outbound>,
}

impl<'a> Context<'a> {
    fn new(session: &'a Session) -> Self {
        Self {
            session,
            out: Vec::new(),
        }
    }

    /// The session this input applies to.
    pub fn session(&self) -> &Session {
        self.session
    }

    /// Queue a framed protocol command.
    pub fn put_cmd(&mut self, verb: &str, params: impl IntoIterator<Item = Vec<u8>>) {
        self.out
            .push(Outbound::Command(ProtocolCommand::new(verb, params)));
    }

    /// Queue a raw pre-encoded line, bypassing framing.
    pub fn put_raw(&mut self, line: Vec<u8>) {
        self.out.push(Outbound::RawLine(line));
    }

    /// Queue a CTCP query.
    pub fn ctcp_query(
        &mut self,
        nick: impl Into<String>,
        tag: impl Into<String>,
        payload: impl Into<String>,
    ) {
        self.out.push(Outbound::CtcpQuery {
            nick: nick.into(),
            tag: tag.into(),
            payload: payload.into(),
        });
    }

    /// Queue a local display event.
    pub fn display(&mut self, event: DisplayEvent) {
        self.out.push(Outbound::Display(event));
    }

    /// Encode text under the network-wide default encoding.
    pub fn server_encode(&self, text: &str) -> Vec<u8> {
        self.session.encodings().encode_for_server(text)
    }

    /// Encode text under a channel's encoding.
    pub fn target_encode(&self, target: &str, text: &str) -> Vec<u8> {
        self.session.encodings().encode_for_target(target, text)
    }

    /// Encode text under a user's encoding.
    pub fn user_encode(&self, nick: &str, text: &str) -> Vec<u8> {
        self.session.encodings().encode_for_user(nick, text)
    }
}

/// Trait implemented by all input command handlers.
///
/// `args` is the remainder of the input line after the command keyword.
/// Handlers run synchronously on the caller's thread and must not block.
pub trait Handler: Send + Sync {
    /// Handle one line of input typed against `target`.
    fn handle(&self, ctx: &mut Context<'_>, target: &BufferTarget, args: &str) -> HandlerResult;
}

/// Registry of input command handlers, built once per connection (or
/// shared across connections; it holds no per-session state).
pub struct Registry {
    handlers: HashMap<&'static str, Box<dyn Handler>>,
}

impl Registry {
    /// Create a registry with all built-in handlers registered.
    pub fn new() -> Self {
        let mut handlers: HashMap<&'static str, Box<dyn Handler>> = HashMap::new();

        // Messaging
        handlers.insert("SAY", Box::new(SayHandler));
        handlers.insert("ME", Box::new(MeHandler));
        handlers.insert("MSG", Box::new(MsgHandler));
        handlers.insert("QUERY", Box::new(QueryHandler));

        // Channel membership and management
        handlers.insert("JOIN", Box::new(JoinHandler));
        handlers.insert("J", Box::new(JoinShortHandler));
        handlers.insert("PART", Box::new(PartHandler));
        handlers.insert("KICK", Box::new(KickHandler));
        handlers.insert("TOPIC", Box::new(TopicHandler));
        handlers.insert("INVITE", Box::new(InviteHandler));
        handlers.insert("BAN", Box::new(BanHandler));

        // Modes
        handlers.insert("MODE", Box::new(ModeHandler));
        handlers.insert("OP", Box::new(PrivModeHandler::op()));
        handlers.insert("DEOP", Box::new(PrivModeHandler::deop()));
        handlers.insert("VOICE", Box::new(PrivModeHandler::voice()));
        handlers.insert("DEVOICE", Box::new(PrivModeHandler::devoice()));

        // Connection state
        handlers.insert("NICK", Box::new(NickHandler));
        handlers.insert("QUIT", Box::new(QuitHandler));
        handlers.insert("AWAY", Box::new(AwayHandler));

        // Server queries and raw passthrough
        handlers.insert("LIST", Box::new(ForwardHandler::list()));
        handlers.insert("WHO", Box::new(ForwardHandler::who()));
        handlers.insert("WHOIS", Box::new(ForwardHandler::whois()));
        handlers.insert("WHOWAS", Box::new(ForwardHandler::whowas()));
        handlers.insert("QUOTE", Box::new(QuoteHandler));

        // CTCP
        handlers.insert("CTCP", Box::new(CtcpHandler));

        Self { handlers }
    }

    /// Install or replace the handler for a command keyword.
    ///
    /// The keyword must already be uppercased; lookups never re-fold it.
    pub fn register(&mut self, command: &'static str, handler: Box<dyn Handler>) {
        self.handlers.insert(command, handler);
    }

    /// Translate one line of user input into its ordered emissions.
    ///
    /// This is the sole entry point, called once per submitted line. It is
    /// infallible at this boundary: unknown commands, handler errors, and
    /// even handler panics all fold into a single error display event on
    /// the status buffer, so one malformed command can never take down the
    /// session. An empty line yields no emissions.
    pub fn dispatch(&self, session: &Session, target: &BufferTarget, raw: &str) -> Vec<Outbound> {
        if raw.is_empty() {
            return Vec::new();
        }
        let input = ParsedInput::parse(raw, session.config().command_prefix);
        debug!(command = %input.command, buffer = %target.name(), "dispatching input");

        let mut ctx = Context::new(session);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            match self.handlers.get(input.command.as_str()) {
                Some(handler) => handler.handle(&mut ctx, target, &input.remainder),
                None => {
                    ctx.display(DisplayEvent::error(format!(
                        "Error: {} {}",
                        input.command, input.remainder
                    )));
                    Ok(())
                }
            }
        }));

        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                debug!(command = %input.command, error = %e, "handler failed");
                ctx.display(handler_failure(&input.command, &e));
            }
            Err(_) => {
                error!(command = %input.command, "handler panicked");
                ctx.display(DisplayEvent::error(format!(
                    "Error: internal failure while handling {}{}",
                    session.config().command_prefix,
                    input.command
                )));
            }
        }
        ctx.out
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn handler_failure(command: &str, e: &HandlerError) -> DisplayEvent {
    DisplayEvent::error(format!("Error: {command}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_implicit_say() {
        let input = ParsedInput::parse("hello there", '/');
        assert_eq!(input.command, "SAY");
        assert_eq!(input.remainder, "hello there");
    }

    #[test]
    fn test_parse_uppercases_keyword() {
        let input = ParsedInput::parse("/jOiN #rust key", '/');
        assert_eq!(input.command, "JOIN");
        assert_eq!(input.remainder, "#rust key");
    }

    #[test]
    fn test_parse_keyword_without_arguments() {
        let input = ParsedInput::parse("/away", '/');
        assert_eq!(input.command, "AWAY");
        assert_eq!(input.remainder, "");
    }

    #[test]
    fn test_parse_keeps_interior_spacing() {
        let input = ParsedInput::parse("/say two  spaces", '/');
        assert_eq!(input.remainder, "two  spaces");
    }

    #[test]
    fn test_parse_custom_prefix() {
        let input = ParsedInput::parse("!quit bye", '!');
        assert_eq!(input.command, "QUIT");
        assert_eq!(input.remainder, "bye");
    }

    #[test]
    fn test_bare_prefix_parses_to_empty_keyword() {
        // Falls through to the unknown-command path, which surfaces an
        // error event; never a crash.
        let input = ParsedInput::parse("/", '/');
        assert_eq!(input.command, "");
        assert_eq!(input.remainder, "");
    }
}
