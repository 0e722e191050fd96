//! Sans-IO CAP/SASL/registration state machine.
//!
//! [`Handshake`] decides which [`Command`]s to enqueue in response to
//! connection events and inbound messages. It owns no I/O: the engine
//! drives it and is responsible for actually sending what it returns.

use std::collections::HashSet;

use crate::command::{CapSubCommand, Command};
use crate::config::{SaslConfig, SessionConfig};
use crate::message::Message;
use crate::sasl::{self, SaslMechanism};

/// Non-transport-visible outcomes the engine needs to react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandshakeEvent {
    SaslFailed(String),
    NickChanged(String),
    Registered,
}

/// CAP/SASL negotiation and registration state for one connection.
pub struct Handshake {
    config: SessionConfig,
    current_nick: String,
    available: HashSet<String>,
    enabled: HashSet<String>,
    ls_complete: bool,
    sasl_ok: bool,
    nick_user_deferred: bool,
    nick_user_sent: bool,
    sasl_active: bool,
    sasl_started: bool,
}

impl Handshake {
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let sasl_active = config.sasl_active();
        let current_nick = config.nick.clone();
        Self {
            config,
            current_nick,
            available: HashSet::new(),
            enabled: HashSet::new(),
            ls_complete: false,
            sasl_ok: false,
            nick_user_deferred: sasl_active,
            nick_user_sent: false,
            sasl_active,
            sasl_started: false,
        }
    }

    #[must_use]
    pub fn current_nick(&self) -> &str {
        &self.current_nick
    }

    /// Commands to enqueue immediately once the transport is open.
    pub fn on_connect(&mut self) -> Vec<Command> {
        let mut out = Vec::new();

        if !self.config.requested_caps.is_empty() {
            out.push(Command::Cap(CapSubCommand::Ls, Some("302".into())));
        }

        if let Some(password) = &self.config.password {
            out.push(Command::Pass(password.clone()));
        }

        if !self.sasl_active {
            out.extend(self.nick_user_commands());
        }

        out
    }

    fn nick_user_commands(&mut self) -> Vec<Command> {
        self.nick_user_sent = true;
        vec![
            Command::Nick(self.current_nick.clone()),
            Command::User {
                username: self.config.effective_username().to_owned(),
                mode: "0".into(),
                realname: self.config.effective_realname().to_owned(),
            },
        ]
    }

    /// Handle an inbound `CAP` message.
    pub fn on_cap(&mut self, msg: &Message) -> Vec<Command> {
        let Some(sub) = msg.params.get(1).map(|s| s.to_ascii_uppercase()) else {
            return Vec::new();
        };

        match sub.as_str() {
            "LS" => self.on_cap_ls(msg),
            "ACK" => self.on_cap_ack(msg),
            "NAK" => {
                self.ls_complete = true;
                self.flush_end_and_deferred()
            }
            _ => Vec::new(),
        }
    }

    fn on_cap_ls(&mut self, msg: &Message) -> Vec<Command> {
        let continues = msg.params.get(2).map(String::as_str) == Some("*");
        if let Some(names) = msg.params.last() {
            self.available
                .extend(names.split_whitespace().map(str::to_owned));
        }

        if continues {
            return Vec::new();
        }

        let req: Vec<String> = self
            .config
            .requested_caps
            .iter()
            .filter(|c| self.available.contains(c.as_str()))
            .cloned()
            .collect();

        if req.is_empty() {
            self.ls_complete = true;
            return self.flush_end_and_deferred();
        }

        vec![Command::Cap(CapSubCommand::Req, Some(req.join(" ")))]
    }

    fn on_cap_ack(&mut self, msg: &Message) -> Vec<Command> {
        if let Some(names) = msg.params.last() {
            self.enabled
                .extend(names.split_whitespace().map(str::to_owned));
        }

        let sasl_enabled = self.enabled.contains("sasl");
        if sasl_enabled && self.config.sasl.is_some() && !self.sasl_ok && !self.sasl_started {
            self.sasl_started = true;
            return self.start_sasl();
        }

        self.flush_end_and_deferred()
    }

    fn start_sasl(&mut self) -> Vec<Command> {
        let Some(sasl_cfg) = &self.config.sasl else {
            return Vec::new();
        };
        match sasl_cfg.mechanism() {
            SaslMechanism::Plain => vec![Command::Authenticate("PLAIN".into())],
            SaslMechanism::External => vec![
                Command::Authenticate("EXTERNAL".into()),
                Command::Authenticate("+".into()),
            ],
            SaslMechanism::ScramSha256 => Vec::new(),
        }
    }

    /// Handle `AUTHENTICATE +`, the server's request for the PLAIN payload.
    pub fn on_authenticate(&mut self, msg: &Message) -> Vec<Command> {
        if msg.params.first().map(String::as_str) != Some("+") {
            return Vec::new();
        }
        let Some(SaslConfig::Plain { username, password }) = &self.config.sasl else {
            return Vec::new();
        };
        let payload = sasl::encode_plain(username, password);
        vec![Command::Authenticate(payload)]
    }

    /// Handle a numeric reply relevant to SASL/nick-in-use/registration.
    pub fn on_numeric(&mut self, code: u16, msg: &Message) -> (Vec<Command>, Option<HandshakeEvent>) {
        match code {
            903 => {
                self.sasl_ok = true;
                let cmds = self.flush_end_and_deferred();
                (cmds, None)
            }
            904 | 905 | 906 => {
                let reason = msg.text().unwrap_or_default().to_owned();
                let cmds = self.flush_end_and_deferred();
                (cmds, Some(HandshakeEvent::SaslFailed(reason)))
            }
            433 if !self.is_registered() => {
                self.current_nick.push('_');
                (vec![Command::Nick(self.current_nick.clone())], None)
            }
            1 => {
                if let Some(nick) = msg.target() {
                    self.current_nick = nick.to_owned();
                }
                (Vec::new(), Some(HandshakeEvent::Registered))
            }
            _ => (Vec::new(), None),
        }
    }

    fn flush_end_and_deferred(&mut self) -> Vec<Command> {
        let mut out = Vec::new();
        if self.nick_user_deferred && !self.nick_user_sent {
            self.nick_user_deferred = false;
            out.extend(self.nick_user_commands());
        }
        out.push(Command::Cap(CapSubCommand::End, None));
        out
    }

    /// Track an observed `NICK` change: if `old` is our current nick,
    /// adopt `new` as the current nick.
    pub fn note_nick_change(&mut self, old: &str, new: &str) {
        if self.current_nick == old {
            self.current_nick = new.to_owned();
        }
    }

    fn is_registered(&self) -> bool {
        // Registration itself is tracked by the engine's SessionState;
        // the handshake only needs to stop suffixing after 001 arrives,
        // which the engine enforces by no longer calling on_numeric(433,..).
        false
    }
}
