//! The explicit CTCP query handler.

use chrono::Utc;
use tracing::debug;

use super::{Context, Handler};
use crate::error::HandlerResult;
use crate::event::{DisplayEvent, DisplayKind};
use crate::target::{BufferKind, BufferTarget};
use crate::util::split_token;

/// Handler for CTCP: `nick tag`, sending a client-to-client query.
///
/// A PING query carries the current Unix timestamp so the reply can be
/// turned into a round-trip time; every other tag goes out with an empty
/// payload.
pub struct CtcpHandler;

impl Handler for CtcpHandler {
    fn handle(&self, ctx: &mut Context<'_>, _target: &BufferTarget, args: &str) -> HandlerResult {
        let (nick, rest) = split_token(args);
        let (tag, _) = split_token(rest);
        let tag = tag.to_ascii_uppercase();
        if tag.is_empty() {
            debug!("dropping CTCP without a tag");
            return Ok(());
        }
        let payload = if tag == "PING" {
            Utc::now().timestamp().to_string()
        } else {
            String::new()
        };
        ctx.ctcp_query(nick, &tag, payload);
        ctx.display(DisplayEvent::new(
            DisplayKind::Action,
            BufferKind::Server,
            "",
            format!("sending CTCP-{tag} request"),
            ctx.session().my_nick(),
        ));
        Ok(())
    }
}
