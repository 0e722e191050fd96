//! Property-based tests for the line codec.
//!
//! Uses proptest to generate random IRC components and verify that:
//! 1. Parsing never panics on arbitrary input.
//! 2. `Command::serialize` output always reparses to the same logical
//!    fields (target/text/channel/etc.) the command was built from.
//! 3. Tag escaping round-trips for any tag value.
//!
//! Run with: `cargo test --test proptest_roundtrip`

use proptest::prelude::*;
use slirc_client::message::{escape_tag_value, unescape_tag_value};
use slirc_client::{Command, Message};

// =============================================================================
// STRATEGIES - Generators for valid IRC components
// =============================================================================

/// Valid IRC nickname: starts with letter or special char, followed by
/// letters, digits, or special chars. Max 9 chars per RFC 2812.
fn nickname_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z\\[\\]\\\\^_`{|}][a-zA-Z0-9\\-\\[\\]\\\\^_`{|}]{0,8}")
        .expect("valid regex")
}

/// Valid IRC channel name: starts with # or &, followed by valid chars.
fn channel_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[#&][a-zA-Z0-9_\\-]{1,49}").expect("valid regex")
}

/// Message text with no CR/LF/NUL, which would break line framing.
fn message_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[-a-zA-Z0-9 .,!?'_]{0,400}").expect("valid regex")
}

/// Message text guaranteed non-empty and with no leading/trailing space, so
/// serializing it as a middle (non-last) token round-trips unambiguously.
fn bare_token_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_\\-]{1,20}").expect("valid regex")
}

/// Tag key: alphanumeric with an optional vendor prefix.
fn tag_key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z0-9\\-]{0,30}").expect("valid regex")
}

/// Arbitrary tag value, including characters that require escaping.
fn tag_value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ;\\\\._\\-]{0,200}").expect("valid regex")
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Parsing never panics, regardless of input shape.
    #[test]
    fn parse_never_panics_on_arbitrary_input(line in ".*") {
        let _ = Message::parse(&line);
    }

    /// Tag escape/unescape round-trips for any value.
    #[test]
    fn tag_escape_roundtrip(value in tag_value_strategy()) {
        let mut escaped = String::new();
        escape_tag_value(&mut escaped, &value).unwrap();
        prop_assert_eq!(unescape_tag_value(&escaped), value);
    }

    /// A tag carried on a real line survives parse with its value intact.
    #[test]
    fn tag_on_message_survives_parse(key in tag_key_strategy(), value in tag_value_strategy()) {
        let mut escaped = String::new();
        escape_tag_value(&mut escaped, &value).unwrap();
        let line = format!("@{key}={escaped} PRIVMSG #ch :hi");
        let msg = Message::parse(&line);
        prop_assert_eq!(msg.tags.get(&key).map(String::as_str), Some(value.as_str()));
    }

    /// PRIVMSG serializes and reparses to the same target/text.
    #[test]
    fn privmsg_command_roundtrip(target in channel_strategy(), text in message_text_strategy()) {
        let cmd = Command::Privmsg { target: target.clone(), text: text.clone() };
        let line = cmd.serialize();
        let msg = Message::parse(&line);
        prop_assert_eq!(msg.command, "PRIVMSG");
        prop_assert_eq!(msg.target(), Some(target.as_str()));
        prop_assert_eq!(msg.text(), Some(text.as_str()));
    }

    /// NOTICE serializes and reparses to the same target/text.
    #[test]
    fn notice_command_roundtrip(target in channel_strategy(), text in message_text_strategy()) {
        let cmd = Command::Notice { target: target.clone(), text: text.clone() };
        let line = cmd.serialize();
        let msg = Message::parse(&line);
        prop_assert_eq!(msg.command, "NOTICE");
        prop_assert_eq!(msg.target(), Some(target.as_str()));
        prop_assert_eq!(msg.text(), Some(text.as_str()));
    }

    /// NICK serializes and reparses to the same nick token.
    #[test]
    fn nick_command_roundtrip(nick in nickname_strategy()) {
        let cmd = Command::Nick(nick.clone());
        let line = cmd.serialize();
        let msg = Message::parse(&line);
        prop_assert_eq!(msg.command, "NICK");
        prop_assert_eq!(msg.target(), Some(nick.as_str()));
    }

    /// JOIN without a key serializes and reparses to the same channel.
    #[test]
    fn join_command_roundtrip(channel in channel_strategy()) {
        let cmd = Command::Join { channel: channel.clone(), key: None };
        let line = cmd.serialize();
        let msg = Message::parse(&line);
        prop_assert_eq!(msg.command, "JOIN");
        prop_assert_eq!(msg.channel(), Some(channel.as_str()));
    }

    /// JOIN with a key serializes both tokens and reparses to the same pair.
    #[test]
    fn join_with_key_command_roundtrip(channel in channel_strategy(), key in bare_token_strategy()) {
        let cmd = Command::Join { channel: channel.clone(), key: Some(key.clone()) };
        let line = cmd.serialize();
        let msg = Message::parse(&line);
        prop_assert_eq!(msg.command, "JOIN");
        prop_assert_eq!(msg.params.first().map(String::as_str), Some(channel.as_str()));
        prop_assert_eq!(msg.params.get(1).map(String::as_str), Some(key.as_str()));
    }

    /// KICK with an optional reason serializes and reparses to the same fields.
    #[test]
    fn kick_command_roundtrip(
        channel in channel_strategy(),
        nick in nickname_strategy(),
        reason in prop::option::of(message_text_strategy())
    ) {
        let cmd = Command::Kick { channel: channel.clone(), nick: nick.clone(), reason: reason.clone() };
        let line = cmd.serialize();
        let msg = Message::parse(&line);
        prop_assert_eq!(msg.command, "KICK");
        prop_assert_eq!(msg.params.first().map(String::as_str), Some(channel.as_str()));
        prop_assert_eq!(msg.params.get(1).map(String::as_str), Some(nick.as_str()));
        match reason {
            Some(r) => prop_assert_eq!(msg.params.get(2).map(String::as_str), Some(r.as_str())),
            None => prop_assert_eq!(msg.params.len(), 2),
        }
    }

    /// QUIT with an optional reason serializes and reparses to the same reason.
    #[test]
    fn quit_command_roundtrip(reason in prop::option::of(message_text_strategy())) {
        let cmd = Command::Quit(reason.clone());
        let line = cmd.serialize();
        let msg = Message::parse(&line);
        prop_assert_eq!(msg.command, "QUIT");
        match reason {
            Some(r) => prop_assert_eq!(msg.text(), Some(r.as_str())),
            None => prop_assert!(msg.params.is_empty()),
        }
    }

    /// Prefix parsing extracts the same nick for any nick!user@host triple.
    #[test]
    fn prefix_nick_extraction(
        nick in nickname_strategy(),
        user in bare_token_strategy(),
        host in bare_token_strategy()
    ) {
        let line = format!(":{nick}!{user}@{host} PRIVMSG #ch :hi");
        let msg = Message::parse(&line);
        prop_assert_eq!(msg.nick(), Some(nick.as_str()));
        prop_assert_eq!(msg.user(), Some(user.as_str()));
        prop_assert_eq!(msg.host(), Some(host.as_str()));
    }
}
