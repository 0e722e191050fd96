//! Message source ("prefix") parsing.
//!
//! An IRC line's optional prefix is either a bare server name or a
//! `nick[!user[@host]]` triple. This mirrors the shape the teacher's
//! `prefix` module re-exports, authored fresh since the underlying
//! `types`/`serialize` files were not present in the retrieved reference
//! tree.

use std::fmt;

/// Parsed form of a message's source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefix {
    raw: String,
    nick_end: usize,
    user_range: Option<(usize, usize)>,
    host_start: Option<usize>,
}

impl Prefix {
    /// Parse a raw prefix string (without the leading `:`).
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let bang = raw.find('!');
        let at = raw.find('@');

        match (bang, at) {
            (Some(b), Some(a)) if a > b => Prefix {
                raw: raw.to_owned(),
                nick_end: b,
                user_range: Some((b + 1, a)),
                host_start: Some(a + 1),
            },
            (Some(b), None) => Prefix {
                raw: raw.to_owned(),
                nick_end: b,
                user_range: Some((b + 1, raw.len())),
                host_start: None,
            },
            _ => Prefix {
                raw: raw.to_owned(),
                nick_end: raw.len(),
                user_range: None,
                host_start: None,
            },
        }
    }

    /// The nick, or the bare server name when there is no `!user` part.
    #[must_use]
    pub fn nick(&self) -> &str {
        &self.raw[..self.nick_end]
    }

    /// The username, if the prefix had a `!user` segment.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user_range.map(|(s, e)| &self.raw[s..e])
    }

    /// The hostname, if the prefix had an `@host` segment.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host_start.map(|s| &self.raw[s..])
    }

    /// The full raw prefix text, as it appeared on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_server_name() {
        let p = Prefix::parse("server");
        assert_eq!(p.nick(), "server");
        assert_eq!(p.user(), None);
        assert_eq!(p.host(), None);
    }

    #[test]
    fn nick_user_host() {
        let p = Prefix::parse("n!u@h");
        assert_eq!(p.nick(), "n");
        assert_eq!(p.user(), Some("u"));
        assert_eq!(p.host(), Some("h"));
    }

    #[test]
    fn nick_user_no_host() {
        let p = Prefix::parse("n!u");
        assert_eq!(p.nick(), "n");
        assert_eq!(p.user(), Some("u"));
        assert_eq!(p.host(), None);
    }

    #[test]
    fn at_sign_in_host_only_counts_once() {
        let p = Prefix::parse("n!u@host.example@oddpart");
        assert_eq!(p.nick(), "n");
        assert_eq!(p.user(), Some("u"));
        assert_eq!(p.host(), Some("host.example@oddpart"));
    }
}
