//! Outbound command set and line serialization.
//!
//! `Command` is the typed description of a line the engine or a caller
//! wants to send. Each variant has exactly one wire encoding; unlike
//! [`crate::Message`] (which must accept anything a server sends),
//! `Command` only needs to cover what this client ever emits.

use std::io::{self, Write};

/// A CAP subcommand, as sent by the client (`REQ`/`END`) or relayed from
/// the server (`LS`/`ACK`/`NAK`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapSubCommand {
    Ls,
    Req,
    Ack,
    Nak,
    End,
}

impl CapSubCommand {
    fn as_str(self) -> &'static str {
        match self {
            Self::Ls => "LS",
            Self::Req => "REQ",
            Self::Ack => "ACK",
            Self::Nak => "NAK",
            Self::End => "END",
        }
    }
}

/// An outbound IRC command.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Command {
    // --- Connection registration ---
    Pass(String),
    Nick(String),
    /// `USER <username> <mode> * :<realname>`; `mode` is conventionally `"0"`.
    User {
        username: String,
        mode: String,
        realname: String,
    },
    Quit(Option<String>),

    // --- IRCv3 capability negotiation / SASL ---
    Cap(CapSubCommand, Option<String>),
    Authenticate(String),

    // --- Channel operations ---
    Join {
        channel: String,
        key: Option<String>,
    },
    Part {
        channel: String,
        reason: Option<String>,
    },
    /// `None` requests the current topic; `Some` sets a new one.
    Topic {
        channel: String,
        new_topic: Option<String>,
    },
    Names(Option<String>),
    List(Option<String>),
    Invite {
        nick: String,
        channel: String,
    },
    Kick {
        channel: String,
        nick: String,
        reason: Option<String>,
    },

    // --- Messaging ---
    Privmsg {
        target: String,
        text: String,
    },
    Notice {
        target: String,
        text: String,
    },

    // --- Modes ---
    /// `None` requests the current modes; `Some` sets/unsets modes.
    Mode {
        target: String,
        modes: Option<String>,
    },

    // --- User queries ---
    Whois(String),
    Whowas {
        nick: String,
        count: Option<u32>,
    },
    Who {
        mask: String,
        operators_only: bool,
    },
    Ison(Vec<String>),
    Userhost(Vec<String>),

    // --- Server queries / liveness ---
    Ping(String),
    Pong(String),
    Motd,
    Version,
    Time,
    Admin,
    Info,
    Stats(Option<String>),

    // --- Presence ---
    /// `None` clears away status; `Some` sets an away message.
    Away(Option<String>),

    /// Escape hatch: an already-formed line, sent as-is.
    Raw(String),
}

#[inline]
fn needs_colon_prefix(s: &str) -> bool {
    s.is_empty() || s.contains(' ') || s.starts_with(':')
}

/// Write `cmd` followed by bare-token `args`; the last token gets a `:`
/// prefix only if it needs one (empty, contains a space, or starts with `:`).
fn write_cmd<W: Write>(w: &mut W, cmd: &str, args: &[&str]) -> io::Result<()> {
    w.write_all(cmd.as_bytes())?;
    if args.is_empty() {
        return Ok(());
    }
    let (middle, last) = args.split_at(args.len() - 1);
    for a in middle {
        write!(w, " {a}")?;
    }
    let last = last[0];
    if needs_colon_prefix(last) {
        write!(w, " :{last}")
    } else {
        write!(w, " {last}")
    }
}

/// Like [`write_cmd`], but the last token always gets a `:` prefix.
fn write_cmd_freeform<W: Write>(w: &mut W, cmd: &str, args: &[&str]) -> io::Result<()> {
    w.write_all(cmd.as_bytes())?;
    if args.is_empty() {
        return Ok(());
    }
    let (middle, last) = args.split_at(args.len() - 1);
    for a in middle {
        write!(w, " {a}")?;
    }
    write!(w, " :{}", last[0])
}

impl Command {
    /// Serialize to the wire form, without a trailing CRLF (the transport
    /// appends that).
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut buf = Vec::with_capacity(64);
        self.write(&mut buf).expect("writing to a Vec never fails");
        // Commands are only ever built from valid UTF-8 inputs.
        String::from_utf8(buf).expect("command serialization is always valid UTF-8")
    }

    fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        match self {
            Command::Pass(p) => write_cmd(w, "PASS", &[p]),
            Command::Nick(n) => write_cmd(w, "NICK", &[n]),
            Command::User {
                username,
                mode,
                realname,
            } => write_cmd_freeform(w, "USER", &[username, mode, "*", realname]),
            Command::Quit(reason) => match reason {
                Some(r) => write_cmd_freeform(w, "QUIT", &[r]),
                None => write_cmd(w, "QUIT", &[]),
            },

            Command::Cap(sub, args) => match (sub, args) {
                // LS's argument is the `302` version token, a plain
                // parameter; REQ's is the capability list and always takes
                // the trailing form, even for a single capability.
                (CapSubCommand::Req, Some(a)) => write_cmd_freeform(w, "CAP", &[sub.as_str(), a]),
                (_, Some(a)) => write_cmd(w, "CAP", &[sub.as_str(), a]),
                (_, None) => write_cmd(w, "CAP", &[sub.as_str()]),
            },
            Command::Authenticate(s) => write_cmd(w, "AUTHENTICATE", &[s]),

            Command::Join { channel, key } => match key {
                Some(k) => write_cmd(w, "JOIN", &[channel, k]),
                None => write_cmd(w, "JOIN", &[channel]),
            },
            Command::Part { channel, reason } => match reason {
                Some(r) => write_cmd_freeform(w, "PART", &[channel, r]),
                None => write_cmd(w, "PART", &[channel]),
            },
            Command::Topic { channel, new_topic } => match new_topic {
                Some(t) => write_cmd_freeform(w, "TOPIC", &[channel, t]),
                None => write_cmd(w, "TOPIC", &[channel]),
            },
            Command::Names(chan) => match chan {
                Some(c) => write_cmd(w, "NAMES", &[c]),
                None => write_cmd(w, "NAMES", &[]),
            },
            Command::List(chan) => match chan {
                Some(c) => write_cmd(w, "LIST", &[c]),
                None => write_cmd(w, "LIST", &[]),
            },
            Command::Invite { nick, channel } => write_cmd(w, "INVITE", &[nick, channel]),
            Command::Kick {
                channel,
                nick,
                reason,
            } => match reason {
                Some(r) => write_cmd_freeform(w, "KICK", &[channel, nick, r]),
                None => write_cmd(w, "KICK", &[channel, nick]),
            },

            Command::Privmsg { target, text } => write_cmd_freeform(w, "PRIVMSG", &[target, text]),
            Command::Notice { target, text } => write_cmd_freeform(w, "NOTICE", &[target, text]),

            Command::Mode { target, modes } => match modes {
                Some(m) => write_cmd(w, "MODE", &[target, m]),
                None => write_cmd(w, "MODE", &[target]),
            },

            Command::Whois(nick) => write_cmd(w, "WHOIS", &[nick]),
            Command::Whowas { nick, count } => match count {
                Some(n) => write_cmd(w, "WHOWAS", &[nick, &n.to_string()]),
                None => write_cmd(w, "WHOWAS", &[nick]),
            },
            Command::Who {
                mask,
                operators_only,
            } => {
                if *operators_only {
                    write_cmd(w, "WHO", &[mask, "o"])
                } else {
                    write_cmd(w, "WHO", &[mask])
                }
            }
            Command::Ison(nicks) => {
                let joined = nicks.join(" ");
                write_cmd_freeform(w, "ISON", &[&joined])
            }
            Command::Userhost(nicks) => {
                let refs: Vec<&str> = nicks.iter().map(String::as_str).collect();
                write_cmd(w, "USERHOST", &refs)
            }

            Command::Ping(token) => write_cmd_freeform(w, "PING", &[token]),
            Command::Pong(token) => write_cmd_freeform(w, "PONG", &[token]),
            Command::Motd => write_cmd(w, "MOTD", &[]),
            Command::Version => write_cmd(w, "VERSION", &[]),
            Command::Time => write_cmd(w, "TIME", &[]),
            Command::Admin => write_cmd(w, "ADMIN", &[]),
            Command::Info => write_cmd(w, "INFO", &[]),
            Command::Stats(query) => match query {
                Some(q) => write_cmd(w, "STATS", &[q]),
                None => write_cmd(w, "STATS", &[]),
            },

            Command::Away(msg) => match msg {
                Some(m) => write_cmd_freeform(w, "AWAY", &[m]),
                None => write_cmd(w, "AWAY", &[]),
            },

            Command::Raw(line) => w.write_all(line.as_bytes()),
        }
    }
}
