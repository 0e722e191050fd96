//! Events the engine fans out to callers.

use crate::message::Message;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivmsgEvent {
    pub target: String,
    pub sender: String,
    pub text: String,
    pub raw: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeEvent {
    pub target: String,
    pub sender: String,
    pub text: String,
    pub raw: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoinEvent {
    pub channel: String,
    pub nick: String,
    pub raw: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartEvent {
    pub channel: String,
    pub nick: String,
    pub reason: Option<String>,
    pub raw: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuitEvent {
    pub nick: String,
    pub reason: Option<String>,
    pub raw: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KickEvent {
    pub channel: String,
    pub kicked: String,
    pub by: String,
    pub reason: Option<String>,
    pub raw: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NickEvent {
    pub old: String,
    pub new: String,
    pub raw: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicEvent {
    pub channel: String,
    pub new_topic: Option<String>,
    pub raw: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeEvent {
    pub target: String,
    pub modes_joined: String,
    pub raw: String,
}

/// A single event emitted by the engine to its subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Event {
    Connected,
    Registered,
    Disconnected { cause: Option<String> },
    Message(Message),
    Privmsg(PrivmsgEvent),
    Notice(NoticeEvent),
    Join(JoinEvent),
    Part(PartEvent),
    Quit(QuitEvent),
    Kick(KickEvent),
    Nick(NickEvent),
    Topic(TopicEvent),
    Mode(ModeEvent),
    Error(String),
}
