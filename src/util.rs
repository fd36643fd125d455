//! Small string helpers shared by the handlers.

/// Convert one character to IRC lowercase (RFC 1459 mapping).
///
/// Beyond ASCII, RFC 1459 treats `[]\~` as the uppercase forms of `{}|^`,
/// so channel and nick lookups must fold those too.
#[inline]
pub const fn irc_lower_char(c: char) -> char {
    match c {
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        '~' => '^',
        'A'..='Z' => (c as u8 + 32) as char,
        _ => c,
    }
}

/// Fold a target name (channel or nick) to IRC lowercase for use as a
/// table key.
pub fn irc_to_lower(s: &str) -> String {
    s.chars().map(irc_lower_char).collect()
}

/// Split off the first whitespace-delimited token.
///
/// Leading whitespace is skipped. Returns the token and the remainder
/// (with the remainder's leading whitespace intact, as the reference
/// client keeps interior spacing of message text).
pub(crate) fn split_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((i, c)) => (&s[..i], &s[i + c.len_utf8()..]),
        None => (s, ""),
    }
}
