//! Error types for command handling.

use thiserror::Error;

/// Errors a command handler may return.
///
/// The built-in handlers follow the reference client and reject malformed
/// input silently, so these variants are mostly for handlers installed via
/// [`Registry::register`](crate::handlers::Registry::register). Whatever a
/// handler returns, the error never escapes [`dispatch`]: the registry
/// folds it into a single [`DisplayKind::Error`] event on the status
/// buffer.
///
/// [`dispatch`]: crate::handlers::Registry::dispatch
/// [`DisplayKind::Error`]: crate::event::DisplayKind::Error
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The command needs more parameters than were given.
    #[error("not enough parameters")]
    NeedMoreParams,
    /// The command does not apply to the buffer it was typed in.
    #[error("command not valid in this buffer")]
    WrongBufferKind,
    /// Any other handler failure, carried as display text.
    #[error("{0}")]
    Other(String),
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;
