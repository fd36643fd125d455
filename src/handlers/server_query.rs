//! Server query passthroughs (LIST, WHO, WHOIS, WHOWAS) and QUOTE.

use super::{Context, Handler};
use crate::error::HandlerResult;
use crate::target::BufferTarget;

/// Handler that forwards its whitespace-split argument as the parameters
/// of a fixed verb. Covers the query commands whose arguments the client
/// has no reason to interpret.
pub struct ForwardHandler {
    verb: &'static str,
}

impl ForwardHandler {
    /// LIST passthrough.
    pub fn list() -> Self {
        Self { verb: "LIST" }
    }

    /// WHO passthrough.
    pub fn who() -> Self {
        Self { verb: "WHO" }
    }

    /// WHOIS passthrough.
    pub fn whois() -> Self {
        Self { verb: "WHOIS" }
    }

    /// WHOWAS passthrough.
    pub fn whowas() -> Self {
        Self { verb: "WHOWAS" }
    }
}

impl Handler for ForwardHandler {
    fn handle(&self, ctx: &mut Context<'_>, _target: &BufferTarget, args: &str) -> HandlerResult {
        let params: Vec<Vec<u8>> = args
            .split_whitespace()
            .map(|w| ctx.server_encode(w))
            .collect();
        ctx.put_cmd(self.verb, params);
        Ok(())
    }
}

/// Handler for QUOTE: ship the argument as one raw line, unframed and
/// unparsed.
pub struct QuoteHandler;

impl Handler for QuoteHandler {
    fn handle(&self, ctx: &mut Context<'_>, _target: &BufferTarget, args: &str) -> HandlerResult {
        ctx.put_raw(ctx.server_encode(args));
        Ok(())
    }
}
