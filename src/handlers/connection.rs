//! Connection-state handlers: NICK, QUIT, AWAY.

use super::{Context, Handler};
use crate::error::HandlerResult;
use crate::target::BufferTarget;
use crate::util::split_token;

/// Handler for NICK: request a nick change.
pub struct NickHandler;

impl Handler for NickHandler {
    fn handle(&self, ctx: &mut Context<'_>, _target: &BufferTarget, args: &str) -> HandlerResult {
        let (nick, _) = split_token(args);
        ctx.put_cmd("NICK", [ctx.server_encode(nick)]);
        Ok(())
    }
}

/// Handler for QUIT: disconnect with an optional reason.
pub struct QuitHandler;

impl Handler for QuitHandler {
    fn handle(&self, ctx: &mut Context<'_>, _target: &BufferTarget, args: &str) -> HandlerResult {
        ctx.put_cmd("QUIT", [ctx.server_encode(args)]);
        Ok(())
    }
}

/// Handler for AWAY: set or clear the away message.
pub struct AwayHandler;

impl Handler for AwayHandler {
    fn handle(&self, ctx: &mut Context<'_>, _target: &BufferTarget, args: &str) -> HandlerResult {
        ctx.put_cmd("AWAY", [ctx.server_encode(args)]);
        Ok(())
    }
}
