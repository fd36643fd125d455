//! Mode handlers: raw MODE plus the OP/DEOP/VOICE/DEVOICE shorthands.

use super::{Context, Handler};
use crate::error::HandlerResult;
use crate::target::BufferTarget;

/// Handler for MODE: forward the argument tokens verbatim.
pub struct ModeHandler;

impl Handler for ModeHandler {
    fn handle(&self, ctx: &mut Context<'_>, _target: &BufferTarget, args: &str) -> HandlerResult {
        // TODO: channel mode arguments (keys, ban masks) should use the
        // channel encoding; for now every token is server-encoded.
        let params: Vec<Vec<u8>> = args
            .split_whitespace()
            .map(|w| ctx.server_encode(w))
            .collect();
        ctx.put_cmd("MODE", params);
        Ok(())
    }
}

/// Handler for the privilege shorthands OP, DEOP, VOICE and DEVOICE.
///
/// Each builds one MODE line with the sign repeated once per nick
/// (`+oo alice bob`), so granting to a list costs a single round trip.
/// The batch is not pre-validated: one bad nick fails the whole line at
/// the server.
pub struct PrivModeHandler {
    sign: char,
    mode: char,
}

impl PrivModeHandler {
    /// `+o` per nick.
    pub fn op() -> Self {
        Self { sign: '+', mode: 'o' }
    }

    /// `-o` per nick.
    pub fn deop() -> Self {
        Self { sign: '-', mode: 'o' }
    }

    /// `+v` per nick.
    pub fn voice() -> Self {
        Self { sign: '+', mode: 'v' }
    }

    /// `-v` per nick.
    pub fn devoice() -> Self {
        Self { sign: '-', mode: 'v' }
    }
}

impl Handler for PrivModeHandler {
    fn handle(&self, ctx: &mut Context<'_>, target: &BufferTarget, args: &str) -> HandlerResult {
        let nicks: Vec<&str> = args.split_whitespace().collect();
        let mut modes = String::with_capacity(nicks.len() + 1);
        modes.push(self.sign);
        for _ in &nicks {
            modes.push(self.mode);
        }
        let mut params = vec![ctx.server_encode(target.name()), ctx.server_encode(&modes)];
        params.extend(nicks.iter().map(|n| ctx.server_encode(n)));
        ctx.put_cmd("MODE", params);
        Ok(())
    }
}
