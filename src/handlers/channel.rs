//! Channel membership and management handlers: JOIN, J, PART, KICK,
//! TOPIC, INVITE, BAN.

use tracing::debug;

use super::{Context, Handler};
use crate::error::HandlerResult;
use crate::target::{BufferKind, BufferTarget};
use crate::util::split_token;

/// Handler for JOIN: `channel[,channel...] [key[,key...]]`.
pub struct JoinHandler;

/// JOIN body, shared with [`JoinShortHandler`].
///
/// Keys pair with channels positionally: `key[i]` is remembered for
/// `channel[i]`, and channels beyond the key list get any previously
/// remembered key cleared. No line-length splitting happens for long
/// channel lists; the command goes out as one line.
fn join_channels(ctx: &mut Context<'_>, args: &str) {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        debug!("dropping JOIN without channels");
        return;
    }
    let words: Vec<&str> = trimmed.split_whitespace().collect();
    let channels: Vec<&str> = words[0].split(',').collect();
    let keys: Vec<&str> = words
        .get(1)
        .map(|list| list.split(',').collect())
        .unwrap_or_default();

    let params: Vec<Vec<u8>> = words.iter().map(|w| ctx.server_encode(w)).collect();
    ctx.put_cmd("JOIN", params);

    let mut i = 0;
    while i < keys.len() && i < channels.len() {
        ctx.session().set_channel_key(channels[i], keys[i]);
        i += 1;
    }
    while i < channels.len() {
        ctx.session().clear_channel_key(channels[i]);
        i += 1;
    }
}

impl Handler for JoinHandler {
    fn handle(&self, ctx: &mut Context<'_>, _target: &BufferTarget, args: &str) -> HandlerResult {
        join_channels(ctx, args);
        Ok(())
    }
}

/// Handler for J, the JOIN shorthand that supplies the channel prefix:
/// `/j foo` joins `#foo`.
pub struct JoinShortHandler;

impl Handler for JoinShortHandler {
    fn handle(&self, ctx: &mut Context<'_>, _target: &BufferTarget, args: &str) -> HandlerResult {
        let trimmed = args.trim();
        if trimmed.is_empty() {
            debug!("dropping J without an argument");
            return Ok(());
        }
        if trimmed.chars().next().is_some_and(char::is_alphabetic) {
            let prefixed = format!("{}{trimmed}", ctx.session().config().channel_prefix);
            join_channels(ctx, &prefixed);
        } else {
            join_channels(ctx, trimmed);
        }
        Ok(())
    }
}

/// Handler for PART: leave the current buffer's channel with an optional
/// reason.
pub struct PartHandler;

impl Handler for PartHandler {
    fn handle(&self, ctx: &mut Context<'_>, target: &BufferTarget, args: &str) -> HandlerResult {
        let name = target.name();
        let params = [ctx.server_encode(name), ctx.target_encode(name, args)];
        ctx.put_cmd("PART", params);
        Ok(())
    }
}

/// Handler for KICK: `nick [reason]`, defaulting the reason from
/// configuration.
pub struct KickHandler;

impl Handler for KickHandler {
    fn handle(&self, ctx: &mut Context<'_>, target: &BufferTarget, args: &str) -> HandlerResult {
        let (nick, rest) = split_token(args);
        if nick.is_empty() {
            debug!("dropping KICK without a nick");
            return Ok(());
        }
        let reason = rest.trim();
        let reason = if reason.is_empty() {
            ctx.session().kick_reason().to_string()
        } else {
            reason.to_string()
        };
        let name = target.name();
        let params = [
            ctx.server_encode(name),
            ctx.server_encode(nick),
            ctx.target_encode(name, &reason),
        ];
        ctx.put_cmd("KICK", params);
        Ok(())
    }
}

/// Handler for TOPIC: set the topic, or query it when no argument is
/// given.
pub struct TopicHandler;

impl Handler for TopicHandler {
    fn handle(&self, ctx: &mut Context<'_>, target: &BufferTarget, args: &str) -> HandlerResult {
        let name = target.name();
        if name.is_empty() {
            debug!("dropping TOPIC on the status buffer");
            return Ok(());
        }
        if args.is_empty() {
            // empty trailing parameter queries (or clears) the topic
            let params = [ctx.server_encode(name), Vec::new()];
            ctx.put_cmd("TOPIC", params);
        } else {
            let params = [ctx.server_encode(name), ctx.target_encode(name, args)];
            ctx.put_cmd("TOPIC", params);
        }
        Ok(())
    }
}

/// Handler for INVITE: invite a nick to the current channel.
pub struct InviteHandler;

impl Handler for InviteHandler {
    fn handle(&self, ctx: &mut Context<'_>, target: &BufferTarget, args: &str) -> HandlerResult {
        let (nick, _) = split_token(args);
        if nick.is_empty() {
            debug!("dropping INVITE without a nick");
            return Ok(());
        }
        let params = [ctx.server_encode(nick), ctx.server_encode(target.name())];
        ctx.put_cmd("INVITE", params);
        Ok(())
    }
}

/// Handler for BAN: set a `+b` mode on the current channel.
pub struct BanHandler;

impl Handler for BanHandler {
    fn handle(&self, ctx: &mut Context<'_>, target: &BufferTarget, args: &str) -> HandlerResult {
        if target.kind != BufferKind::Channel {
            debug!("dropping BAN outside a channel buffer");
            return Ok(());
        }
        // TODO: expand a bare nick into a hostmask once the connection
        // layer can resolve one (e.g. nick -> *!*@host).
        let name = target.name();
        let params = [
            ctx.server_encode(name),
            ctx.server_encode("+b"),
            ctx.target_encode(name, args),
        ];
        ctx.put_cmd("MODE", params);
        Ok(())
    }
}
