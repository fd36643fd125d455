//! Per-scope character encoding policy.
//!
//! IRC networks predate universal UTF-8, and legacy networks still mix
//! encodings across channels and users. The policy therefore has three
//! scopes: a network-wide default, a per-channel override, and a per-nick
//! override. Conversion never fails; characters the chosen encoding cannot
//! represent degrade to encoding_rs's own substitution output rather than
//! surfacing an error to the dispatcher.

use dashmap::DashMap;
use encoding_rs::{Encoding, UTF_8};
use parking_lot::RwLock;
use tracing::warn;

use crate::util::irc_to_lower;

/// Maps (network, optional target) to a character encoding.
///
/// One instance belongs to one network connection. Reads happen on every
/// dispatch; mutation comes from the configuration layer. Both override
/// scopes share one table keyed by case-folded target name, since a name
/// is either a channel or a nick, never both.
pub struct EncodingPolicy {
    server: RwLock<&'static Encoding>,
    targets: DashMap<String, &'static Encoding>,
}

impl EncodingPolicy {
    /// A policy with a UTF-8 default and no overrides.
    pub fn new() -> Self {
        Self {
            server: RwLock::new(UTF_8),
            targets: DashMap::new(),
        }
    }

    /// Set the network-wide default encoding by label.
    ///
    /// Returns `false` (leaving the policy unchanged) when the label is
    /// unknown; unknown labels are a configuration-time problem and never
    /// reach dispatch.
    pub fn set_server_encoding(&self, label: &str) -> bool {
        match Encoding::for_label(label.as_bytes()) {
            Some(enc) => {
                *self.server.write() = enc;
                true
            }
            None => {
                warn!(label, "unknown encoding label ignored");
                false
            }
        }
    }

    /// Set an override encoding for one channel or nick.
    pub fn set_target_encoding(&self, target: &str, label: &str) -> bool {
        match Encoding::for_label(label.as_bytes()) {
            Some(enc) => {
                self.targets.insert(irc_to_lower(target), enc);
                true
            }
            None => {
                warn!(target, label, "unknown encoding label ignored");
                false
            }
        }
    }

    /// Drop the override for one channel or nick.
    pub fn clear_target_encoding(&self, target: &str) {
        self.targets.remove(&irc_to_lower(target));
    }

    fn encoding_for(&self, target: &str) -> &'static Encoding {
        self.targets
            .get(&irc_to_lower(target))
            .map(|e| *e.value())
            .unwrap_or_else(|| *self.server.read())
    }

    /// Encode text under the network-wide default encoding.
    pub fn encode_for_server(&self, text: &str) -> Vec<u8> {
        let (bytes, _, _) = self.server.read().encode(text);
        bytes.into_owned()
    }

    /// Encode text for a channel, honoring a per-channel override.
    pub fn encode_for_target(&self, target: &str, text: &str) -> Vec<u8> {
        let (bytes, _, _) = self.encoding_for(target).encode(text);
        bytes.into_owned()
    }

    /// Encode text for a user, honoring a per-nick override.
    pub fn encode_for_user(&self, nick: &str, text: &str) -> Vec<u8> {
        self.encode_for_target(nick, text)
    }
}

impl Default for EncodingPolicy {
    fn default() -> Self {
        Self::new()
    }
}
