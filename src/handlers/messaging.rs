//! Message-sending handlers: SAY, ME, MSG, QUERY.

use tracing::debug;

use super::{Context, Handler};
use crate::error::HandlerResult;
use crate::event::{DisplayEvent, DisplayKind};
use crate::target::{BufferKind, BufferTarget};
use crate::util::split_token;

/// Handler for the implicit SAY command: plain text typed into a channel
/// or query buffer.
pub struct SayHandler;

impl Handler for SayHandler {
    fn handle(&self, ctx: &mut Context<'_>, target: &BufferTarget, args: &str) -> HandlerResult {
        let name = target.name();
        if name.is_empty() {
            // status buffer has nobody to talk to
            debug!("dropping SAY on the status buffer");
            return Ok(());
        }
        let params = [ctx.server_encode(name), ctx.target_encode(name, args)];
        ctx.put_cmd("PRIVMSG", params);
        // PRIVMSG goes out before the echo renders, so the network round
        // trip can never reorder what the user sees.
        let echo = DisplayEvent::new(
            DisplayKind::Plain,
            target.kind,
            name,
            args,
            ctx.session().my_nick(),
        )
        .from_self();
        ctx.display(echo);
        Ok(())
    }
}

/// Handler for ME: a CTCP ACTION against the current buffer.
pub struct MeHandler;

impl Handler for MeHandler {
    fn handle(&self, ctx: &mut Context<'_>, target: &BufferTarget, args: &str) -> HandlerResult {
        let name = target.name();
        if name.is_empty() {
            debug!("dropping ME on the status buffer");
            return Ok(());
        }
        ctx.ctcp_query(name, "ACTION", args);
        let echo = DisplayEvent::new(
            DisplayKind::Action,
            target.kind,
            name,
            args,
            ctx.session().my_nick(),
        )
        .from_self();
        ctx.display(echo);
        Ok(())
    }
}

/// Emit the PRIVMSG for a `nick message` argument string.
///
/// Shared by MSG and QUERY. Without a space there is no message text and
/// nothing is emitted, matching the reference client's silent rejection.
fn put_privmsg(ctx: &mut Context<'_>, args: &str) {
    if !args.contains(' ') {
        debug!("dropping MSG without message text");
        return;
    }
    let (nick, text) = split_token(args);
    let params = [ctx.server_encode(nick), ctx.user_encode(nick, text)];
    ctx.put_cmd("PRIVMSG", params);
}

/// Handler for MSG: a one-shot private message to a nick.
pub struct MsgHandler;

impl Handler for MsgHandler {
    fn handle(&self, ctx: &mut Context<'_>, _target: &BufferTarget, args: &str) -> HandlerResult {
        put_privmsg(ctx, args);
        Ok(())
    }
}

/// Handler for QUERY: open a query buffer with a nick, optionally sending
/// a first message.
pub struct QueryHandler;

impl Handler for QueryHandler {
    fn handle(&self, ctx: &mut Context<'_>, _target: &BufferTarget, args: &str) -> HandlerResult {
        let (nick, text) = split_token(args);
        if nick.is_empty() {
            debug!("dropping QUERY without a target nick");
            return Ok(());
        }
        let my_nick = ctx.session().my_nick();
        let echo = if text.is_empty() {
            DisplayEvent::new(
                DisplayKind::Server,
                BufferKind::Query,
                nick,
                format!("Starting query with {nick}"),
                my_nick,
            )
        } else {
            DisplayEvent::new(DisplayKind::Plain, BufferKind::Query, nick, text, my_nick)
        };
        ctx.display(echo.from_self());
        put_privmsg(ctx, args);
        Ok(())
    }
}
