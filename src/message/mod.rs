//! Parsed representation of a single inbound IRC protocol line.

mod parse;
pub mod tags;

use std::collections::HashMap;

use crate::prefix::Prefix;
use crate::response::Response;

pub use tags::{escape_tag_value, unescape_tag_value};

/// Commands whose `channel` view reads the first parameter unconditionally.
const CHANNEL_COMMANDS: &[&str] = &["JOIN", "PART", "TOPIC", "NAMES", "MODE", "KICK"];

/// A fully parsed, owned IRC protocol line.
///
/// See the module-level data model: tags, prefix, command and params are
/// the primary fields; the rest are read-only views derived from them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// IRCv3 message tags, already unescaped. Empty when the line had none.
    pub tags: HashMap<String, String>,
    /// Parsed source of the message, if the line carried a prefix.
    pub prefix: Option<Prefix>,
    /// Uppercased command token, or a three-digit numeric as text.
    pub command: String,
    /// Ordered parameters; the last one may contain spaces.
    pub params: Vec<String>,
    /// The original line, without its trailing CR/LF.
    pub raw: String,
}

impl Message {
    /// Parse a single line, already or not yet stripped of trailing CR/LF.
    ///
    /// This is a total function: the empty line parses to an empty command
    /// with no parameters rather than failing.
    #[must_use]
    pub fn parse(line: &str) -> Message {
        let trimmed = line.trim_end_matches(['\r', '\n']);
        let parsed = parse::parse_line(trimmed);

        let tags = parsed
            .tags
            .map(parse_tag_string)
            .unwrap_or_default();
        let prefix = parsed.prefix.map(Prefix::parse);
        let command = parsed.command.to_ascii_uppercase();
        let params = parsed.params.into_iter().map(str::to_owned).collect();

        Message {
            tags,
            prefix,
            command,
            params,
            raw: trimmed.to_owned(),
        }
    }

    /// Nick parsed from the prefix (`nick[!user[@host]]`), or the bare
    /// server name when the prefix has no `!user` segment. `None` when
    /// there is no prefix at all.
    #[must_use]
    pub fn nick(&self) -> Option<&str> {
        self.prefix.as_ref().map(Prefix::nick)
    }

    /// User parsed from the prefix, if present.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.prefix.as_ref().and_then(Prefix::user)
    }

    /// Host parsed from the prefix, if present.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.prefix.as_ref().and_then(Prefix::host)
    }

    /// First parameter, if any.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.params.first().map(String::as_str)
    }

    /// Last parameter, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.params.last().map(String::as_str)
    }

    /// The channel this message concerns, when the command implies one.
    #[must_use]
    pub fn channel(&self) -> Option<&str> {
        let first = self.params.first()?;
        let cmd = self.command.as_str();
        if CHANNEL_COMMANDS.contains(&cmd) {
            return Some(first);
        }
        if (cmd == "PRIVMSG" || cmd == "NOTICE")
            && (first.starts_with('#') || first.starts_with('&'))
        {
            return Some(first);
        }
        None
    }

    /// The command parsed as a numeric code, if it is one.
    #[must_use]
    pub fn numeric_code(&self) -> Option<u16> {
        self.command.parse().ok()
    }

    /// Symbolic name of the numeric reply, or `"unknown"` when the code
    /// isn't in the closed numeric table (or the command isn't numeric).
    #[must_use]
    pub fn numeric_name(&self) -> &'static str {
        self.numeric_code()
            .and_then(Response::from_code)
            .map(|r| r.name())
            .unwrap_or("unknown")
    }
}

fn parse_tag_string(raw: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for pair in raw.split(';') {
        if pair.is_empty() {
            continue;
        }
        match pair.split_once('=') {
            Some((name, value)) => {
                map.insert(name.to_owned(), unescape_tag_value(value));
            }
            None => {
                map.insert(pair.to_owned(), String::new());
            }
        }
    }
    map
}
