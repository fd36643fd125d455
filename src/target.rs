//! Conversational targets: where a line of input was typed.

/// The kind of buffer a line of input belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferKind {
    /// The network's status buffer; carries no target name.
    Server,
    /// A channel buffer.
    Channel,
    /// A private query with another user.
    Query,
}

/// Identifies the buffer a dispatch call originates from.
///
/// Immutable per call; the caller supplies it alongside the raw text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferTarget {
    /// What kind of buffer this is.
    pub kind: BufferKind,
    /// The channel name or query nick; empty for [`BufferKind::Server`].
    pub name: String,
}

impl BufferTarget {
    /// The network status buffer.
    pub fn server() -> Self {
        Self {
            kind: BufferKind::Server,
            name: String::new(),
        }
    }

    /// A channel buffer.
    pub fn channel(name: impl Into<String>) -> Self {
        Self {
            kind: BufferKind::Channel,
            name: name.into(),
        }
    }

    /// A private query buffer.
    pub fn query(nick: impl Into<String>) -> Self {
        Self {
            kind: BufferKind::Query,
            name: nick.into(),
        }
    }

    /// The buffer name (channel or nick); empty for the status buffer.
    pub fn name(&self) -> &str {
        &self.name
    }
}
