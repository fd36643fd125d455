//! Outgoing protocol commands and the ordered emission stream.

use smallvec::SmallVec;

use crate::event::DisplayEvent;

/// One IRC command line to be sent on the wire.
///
/// Parameters are final wire bytes: they were already converted under the
/// applicable encoding policy and nothing downstream re-encodes them. No
/// line-length limit is enforced here; a JOIN or MODE with many parameters
/// can exceed the 512-byte wire line and go out oversized, exactly as the
/// reference client behaves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolCommand {
    /// The command verb, e.g. `PRIVMSG`.
    pub verb: String,
    /// Pre-encoded parameters, in wire order.
    pub params: SmallVec<[Vec<u8>; 4]>,
}

impl ProtocolCommand {
    /// Build a command from a verb and pre-encoded parameters.
    pub fn new(verb: impl Into<String>, params: impl IntoIterator<Item = Vec<u8>>) -> Self {
        Self {
            verb: verb.into(),
            params: params.into_iter().collect(),
        }
    }
}

/// One unit of output produced by a dispatch call.
///
/// A dispatch call yields a single ordered `Vec<Outbound>`; keeping commands
/// and display events in one stream is what guarantees that e.g. a PRIVMSG
/// is sent before its local echo renders. The output sink routes each
/// variant to the matching connection capability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outbound {
    /// A framed command for the connection's `send_command` path.
    Command(ProtocolCommand),
    /// A raw, pre-encoded line bypassing all framing (`/quote`).
    RawLine(Vec<u8>),
    /// A CTCP query for the connection's CTCP capability.
    CtcpQuery {
        /// Nick to query.
        nick: String,
        /// Uppercased CTCP tag, e.g. `ACTION` or `PING`.
        tag: String,
        /// Payload text; empty for most tags.
        payload: String,
    },
    /// A line to render locally.
    Display(DisplayEvent),
}
