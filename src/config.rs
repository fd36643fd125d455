//! Input-layer configuration.

use serde::Deserialize;

/// Configuration read by the input dispatcher.
///
/// The embedding client owns loading and persistence; this crate only
/// consumes the few fields the handlers need. All fields default, so an
/// empty TOML table is a valid configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Character that introduces an explicit command; text without it is
    /// an implicit `SAY`.
    #[serde(default = "default_command_prefix")]
    pub command_prefix: char,
    /// Prefix prepended by `/j` when the argument starts with a letter.
    #[serde(default = "default_channel_prefix")]
    pub channel_prefix: char,
    /// Reason used by `/kick` when the user gives none.
    #[serde(default = "default_kick_reason")]
    pub kick_reason: String,
    /// Label of the network-wide default encoding, resolved via
    /// [`Encoding::for_label`](encoding_rs::Encoding::for_label).
    #[serde(default = "default_server_encoding")]
    pub server_encoding: String,
}

fn default_command_prefix() -> char {
    '/'
}

fn default_channel_prefix() -> char {
    '#'
}

fn default_kick_reason() -> String {
    "Kindergarten is elsewhere!".to_string()
}

fn default_server_encoding() -> String {
    "utf-8".to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            command_prefix: default_command_prefix(),
            channel_prefix: default_channel_prefix(),
            kick_reason: default_kick_reason(),
            server_encoding: default_server_encoding(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_uses_defaults() {
        let config: InputConfig = toml::from_str("").unwrap();
        assert_eq!(config.command_prefix, '/');
        assert_eq!(config.channel_prefix, '#');
        assert_eq!(config.kick_reason, "Kindergarten is elsewhere!");
        assert_eq!(config.server_encoding, "utf-8");
    }

    #[test]
    fn test_partial_override() {
        let config: InputConfig = toml::from_str(
            r#"
            kick_reason = "bye"
            server_encoding = "iso-8859-1"
            "#,
        )
        .unwrap();
        assert_eq!(config.kick_reason, "bye");
        assert_eq!(config.server_encoding, "iso-8859-1");
        assert_eq!(config.command_prefix, '/');
    }
}
