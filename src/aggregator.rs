//! Multi-message response collectors for WHOIS/NAMES/WHO/LIST/MOTD.
//!
//! Each aggregator is created by the façade, registered under an [`AggKey`]
//! before its request line is sent, fed every inbound message by the engine,
//! and resolved exactly once — either by its terminator numeric, an
//! error-terminator numeric, a deadline, or engine cleanup.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::Instant;

use crate::message::Message;

/// Default time an aggregator waits for its terminator before timing out.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(30);

/// Identifies one in-flight aggregated request. At most one entry exists
/// per key at a time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AggKey {
    Whois(String),
    Names(String),
    Who(String),
    List,
    Motd,
}

/// Failure modes for an aggregated query.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AggError {
    #[error("aggregated response timed out")]
    Timeout,
    #[error("disconnected before the response completed")]
    Disconnected,
    #[error("server reported an error: {0}")]
    ServerError(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WhoisResult {
    pub nick: String,
    pub user: Option<String>,
    pub host: Option<String>,
    pub realname: Option<String>,
    pub server: Option<String>,
    pub server_info: Option<String>,
    pub channels: Vec<String>,
    pub away_message: Option<String>,
    pub logged_in_as: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamesResult {
    pub channel: String,
    pub nicks: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhoEntry {
    pub channel: String,
    pub user: String,
    pub host: String,
    pub server: String,
    pub nick: String,
    pub flags: String,
    pub hopcount_and_realname: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WhoResult {
    pub mask: String,
    pub entries: Vec<WhoEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    pub channel: String,
    pub visible_count: u32,
    pub topic: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListResult {
    pub channels: Vec<ListEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MotdResult {
    pub lines: Vec<String>,
}

/// The accumulated, not-yet-resolved state of one aggregator.
pub enum AggState {
    Whois(WhoisResult),
    Names(NamesResult),
    Who(WhoResult),
    List(ListResult),
    Motd(MotdResult),
}

/// The resolved value delivered to the original caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AggOutcome {
    Whois(WhoisResult),
    Names(NamesResult),
    Who(WhoResult),
    List(ListResult),
    Motd(MotdResult),
}

impl AggState {
    #[must_use]
    pub fn new(key: &AggKey) -> Self {
        match key {
            AggKey::Whois(nick) => AggState::Whois(WhoisResult {
                nick: nick.clone(),
                ..Default::default()
            }),
            AggKey::Names(channel) => AggState::Names(NamesResult {
                channel: channel.clone(),
                ..Default::default()
            }),
            AggKey::Who(mask) => AggState::Who(WhoResult {
                mask: mask.clone(),
                ..Default::default()
            }),
            AggKey::List => AggState::List(ListResult::default()),
            AggKey::Motd => AggState::Motd(MotdResult::default()),
        }
    }

    /// Accumulate `msg` into this aggregator's state, if it's relevant.
    pub fn feed(&mut self, msg: &Message) {
        let Some(code) = msg.numeric_code() else {
            return;
        };
        match self {
            AggState::Whois(r) => feed_whois(r, code, msg),
            AggState::Names(r) => feed_names(r, code, msg),
            AggState::Who(r) => feed_who(r, code, msg),
            AggState::List(r) => feed_list(r, code, msg),
            AggState::Motd(r) => feed_motd(r, code, msg),
        }
    }

    /// Does `msg` terminate this aggregator? Pure; callable without
    /// mutating state.
    #[must_use]
    pub fn is_done(&self, msg: &Message) -> bool {
        let Some(code) = msg.numeric_code() else {
            return false;
        };
        match self {
            AggState::Whois(_) => code == 318 || code == 401,
            AggState::Names(_) => code == 366,
            AggState::Who(_) => code == 315,
            AggState::List(_) => code == 323,
            AggState::Motd(_) => code == 376 || code == 422,
        }
    }

    /// Whether `msg`'s terminator signals failure rather than success.
    #[must_use]
    pub fn is_error_terminator(&self, msg: &Message) -> bool {
        let Some(code) = msg.numeric_code() else {
            return false;
        };
        match self {
            AggState::Whois(_) => code == 401,
            AggState::Motd(_) => code == 422,
            _ => false,
        }
    }

    fn into_outcome(self) -> AggOutcome {
        match self {
            AggState::Whois(r) => AggOutcome::Whois(r),
            AggState::Names(r) => AggOutcome::Names(r),
            AggState::Who(r) => AggOutcome::Who(r),
            AggState::List(r) => AggOutcome::List(r),
            AggState::Motd(r) => AggOutcome::Motd(r),
        }
    }
}

fn feed_whois(r: &mut WhoisResult, code: u16, msg: &Message) {
    match code {
        311 => {
            r.user = msg.params.get(2).cloned();
            r.host = msg.params.get(3).cloned();
            r.realname = msg.params.last().cloned();
        }
        312 => {
            r.server = msg.params.get(2).cloned();
            r.server_info = msg.params.last().cloned();
        }
        319 => {
            if let Some(list) = msg.params.last() {
                r.channels
                    .extend(list.split_whitespace().map(str::to_owned));
            }
        }
        301 => r.away_message = msg.params.last().cloned(),
        330 => r.logged_in_as = msg.params.get(2).cloned(),
        _ => {}
    }
}

fn feed_names(r: &mut NamesResult, code: u16, msg: &Message) {
    if code == 353 {
        if let Some(list) = msg.params.last() {
            r.nicks.extend(list.split_whitespace().map(str::to_owned));
        }
    }
}

fn feed_who(r: &mut WhoResult, code: u16, msg: &Message) {
    if code == 352 && msg.params.len() >= 7 {
        r.entries.push(WhoEntry {
            channel: msg.params[1].clone(),
            user: msg.params[2].clone(),
            host: msg.params[3].clone(),
            server: msg.params[4].clone(),
            nick: msg.params[5].clone(),
            flags: msg.params[6].clone(),
            hopcount_and_realname: msg.params.get(7).cloned().unwrap_or_default(),
        });
    }
}

fn feed_list(r: &mut ListResult, code: u16, msg: &Message) {
    if code == 322 && msg.params.len() >= 3 {
        let visible_count = msg.params[2].parse().unwrap_or(0);
        r.channels.push(ListEntry {
            channel: msg.params[1].clone(),
            visible_count,
            topic: msg.params.get(3).cloned().unwrap_or_default(),
        });
    }
}

fn feed_motd(r: &mut MotdResult, code: u16, msg: &Message) {
    if code == 372 {
        if let Some(line) = msg.params.last() {
            r.lines.push(line.clone());
        }
    }
}

/// An in-flight aggregator entry: accumulated state plus the one-shot
/// channel that delivers the final result to the waiting caller.
pub struct PendingAggregator {
    state: AggState,
    deadline: Instant,
    sender: Option<oneshot::Sender<Result<AggOutcome, AggError>>>,
}

impl PendingAggregator {
    #[must_use]
    pub fn new(key: &AggKey) -> (Self, AggregatorWaiter) {
        let (tx, rx) = oneshot::channel();
        let entry = Self {
            state: AggState::new(key),
            deadline: Instant::now() + DEFAULT_DEADLINE,
            sender: Some(tx),
        };
        (entry, AggregatorWaiter { receiver: rx })
    }

    pub fn feed(&mut self, msg: &Message) {
        self.state.feed(msg);
    }

    #[must_use]
    pub fn is_done(&self, msg: &Message) -> bool {
        self.state.is_done(msg)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Resolve with either the server's success outcome or, when `msg`'s
    /// terminator was an error numeric, the server-reported failure.
    pub fn complete(mut self, msg: &Message) {
        let result = if self.state.is_error_terminator(msg) {
            Err(AggError::ServerError(msg.raw.clone()))
        } else {
            Ok(self.state.into_outcome())
        };
        self.resolve(result);
    }

    pub fn complete_err(mut self, err: AggError) {
        self.resolve(Err(err));
    }

    fn resolve(&mut self, result: Result<AggOutcome, AggError>) {
        if let Some(sender) = self.sender.take() {
            let _ = sender.send(result);
        }
    }
}

/// Handle held by the caller awaiting an aggregator's result.
pub struct AggregatorWaiter {
    receiver: oneshot::Receiver<Result<AggOutcome, AggError>>,
}

impl AggregatorWaiter {
    /// Await the aggregator's resolution. A dropped sender (engine torn
    /// down without resolving) surfaces as [`AggError::Disconnected`].
    pub async fn wait(self) -> Result<AggOutcome, AggError> {
        self.receiver.await.unwrap_or(Err(AggError::Disconnected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn whois_accumulates_and_completes_on_318() {
        let key = AggKey::Whois("alice".into());
        let (mut entry, waiter) = PendingAggregator::new(&key);

        let m311 = Message::parse(":s 311 me alice user host * :Alice Real Name");
        let m312 = Message::parse(":s 312 me alice irc.example :IRC Server");
        let m319 = Message::parse(":s 319 me alice :#chan1 #chan2");
        let m318 = Message::parse(":s 318 me alice :End of WHOIS");

        entry.feed(&m311);
        entry.feed(&m312);
        entry.feed(&m319);
        assert!(!entry.is_done(&m311));
        assert!(entry.is_done(&m318));

        entry.complete(&m318);
        let outcome = waiter.wait().await.unwrap();
        match outcome {
            AggOutcome::Whois(r) => {
                assert_eq!(r.user.as_deref(), Some("user"));
                assert_eq!(r.host.as_deref(), Some("host"));
                assert_eq!(r.realname.as_deref(), Some("Alice Real Name"));
                assert_eq!(r.channels, vec!["#chan1", "#chan2"]);
            }
            _ => panic!("wrong outcome variant"),
        }
    }

    #[tokio::test]
    async fn whois_error_terminator_401_resolves_as_server_error() {
        let key = AggKey::Whois("ghost".into());
        let (entry, waiter) = PendingAggregator::new(&key);
        let m401 = Message::parse(":s 401 me ghost :No such nick/channel");
        assert!(entry.is_done(&m401));
        entry.complete(&m401);
        let err = waiter.wait().await.unwrap_err();
        assert!(matches!(err, AggError::ServerError(_)));
    }

    #[tokio::test]
    async fn names_collects_across_multiple_353_lines() {
        let key = AggKey::Names("#chan".into());
        let (mut entry, waiter) = PendingAggregator::new(&key);
        entry.feed(&Message::parse(":s 353 me = #chan :alice bob"));
        entry.feed(&Message::parse(":s 353 me = #chan :carol"));
        let m366 = Message::parse(":s 366 me #chan :End of NAMES list");
        assert!(entry.is_done(&m366));
        entry.complete(&m366);
        match waiter.wait().await.unwrap() {
            AggOutcome::Names(r) => assert_eq!(r.nicks, vec!["alice", "bob", "carol"]),
            _ => panic!("wrong outcome variant"),
        }
    }

    #[tokio::test]
    async fn dropped_sender_surfaces_as_disconnected() {
        let key = AggKey::Motd;
        let (entry, waiter) = PendingAggregator::new(&key);
        drop(entry);
        let err = waiter.wait().await.unwrap_err();
        assert_eq!(err, AggError::Disconnected);
    }

    #[test]
    fn complete_err_resolves_with_given_error() {
        let key = AggKey::List;
        let (entry, _waiter) = PendingAggregator::new(&key);
        entry.complete_err(AggError::Timeout);
    }
}
