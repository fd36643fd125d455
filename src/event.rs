//! Local display events: what the user should see echoed for their input.

use crate::target::BufferKind;

/// How a display event should be rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DisplayKind {
    /// An ordinary message line.
    Plain,
    /// A `/me`-style action line.
    Action,
    /// A notice line.
    Notice,
    /// An error line.
    Error,
    /// Informational output from the client itself.
    Server,
}

/// One line to render locally in some buffer.
///
/// Display events are produced alongside protocol commands and consumed by
/// the display layer; they carry no identity across dispatch calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayEvent {
    /// Render style.
    pub kind: DisplayKind,
    /// Kind of buffer the line belongs in.
    pub target_kind: BufferKind,
    /// Buffer name; empty for the status buffer.
    pub target: String,
    /// The text to render.
    pub text: String,
    /// Nick the line originates from; empty when it is client output.
    pub sender: String,
    /// Set when the line echoes the user's own input.
    pub from_self: bool,
}

impl DisplayEvent {
    /// Build a display event for the given buffer.
    pub fn new(
        kind: DisplayKind,
        target_kind: BufferKind,
        target: impl Into<String>,
        text: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            target_kind,
            target: target.into(),
            text: text.into(),
            sender: sender.into(),
            from_self: false,
        }
    }

    /// Mark this event as an echo of the user's own input.
    #[must_use]
    pub fn from_self(mut self) -> Self {
        self.from_self = true;
        self
    }

    /// An error line on the network status buffer.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(DisplayKind::Error, BufferKind::Server, "", text, "")
    }
}
