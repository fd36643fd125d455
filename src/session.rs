//! Handler-facing view of one network connection.

use dashmap::DashMap;
use parking_lot::RwLock;

use crate::config::InputConfig;
use crate::encode::EncodingPolicy;
use crate::util::irc_to_lower;

/// The slice of connection state the input handlers read and mutate.
///
/// Socket I/O, identity management, and persistence live elsewhere; the
/// handlers only need the own nick, a few configured values, the
/// channel-key registry that `/join` maintains, and the encoding policy.
/// All state supports concurrent reads alongside single-writer mutation,
/// so dispatch calls for different buffers may interleave freely.
pub struct Session {
    config: InputConfig,
    nick: RwLock<String>,
    channel_keys: DashMap<String, String>,
    encodings: EncodingPolicy,
}

impl Session {
    /// Create a session; the config's `server_encoding` label seeds the
    /// encoding policy (falling back to UTF-8 if the label is unknown).
    pub fn new(config: InputConfig) -> Self {
        let encodings = EncodingPolicy::new();
        encodings.set_server_encoding(&config.server_encoding);
        Self {
            config,
            nick: RwLock::new(String::new()),
            channel_keys: DashMap::new(),
            encodings,
        }
    }

    /// The configuration this session was created with.
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// The connection's current own nickname.
    pub fn my_nick(&self) -> String {
        self.nick.read().clone()
    }

    /// Record a nick change; called by the connection layer, not by
    /// handlers.
    pub fn set_my_nick(&self, nick: impl Into<String>) {
        *self.nick.write() = nick.into();
    }

    /// The configured default kick reason.
    pub fn kick_reason(&self) -> &str {
        &self.config.kick_reason
    }

    /// Remember the key a channel was joined with.
    pub fn set_channel_key(&self, channel: &str, key: impl Into<String>) {
        self.channel_keys.insert(irc_to_lower(channel), key.into());
    }

    /// Forget a channel's remembered key.
    pub fn clear_channel_key(&self, channel: &str) {
        self.channel_keys.remove(&irc_to_lower(channel));
    }

    /// The remembered key for a channel, if any.
    pub fn channel_key(&self, channel: &str) -> Option<String> {
        self.channel_keys
            .get(&irc_to_lower(channel))
            .map(|k| k.value().clone())
    }

    /// This connection's encoding policy.
    pub fn encodings(&self) -> &EncodingPolicy {
        &self.encodings
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_keys_fold_case() {
        let session = Session::default();
        session.set_channel_key("#Secret", "hunter2");
        assert_eq!(session.channel_key("#secret").as_deref(), Some("hunter2"));
        session.clear_channel_key("#SECRET");
        assert_eq!(session.channel_key("#secret"), None);
    }

    #[test]
    fn test_nick_updates() {
        let session = Session::default();
        assert_eq!(session.my_nick(), "");
        session.set_my_nick("case");
        assert_eq!(session.my_nick(), "case");
    }
}
