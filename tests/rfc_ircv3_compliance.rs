//! Comprehensive RFC 1459/2812 and IRCv3 compliance tests.
//!
//! This module tests specific edge cases and requirements from:
//! - RFC 1459: Internet Relay Chat Protocol
//! - RFC 2812: Internet Relay Chat: Client Protocol
//! - IRCv3 Message Tags: https://ircv3.net/specs/extensions/message-tags
//!
//! Run with: `cargo test --test rfc_ircv3_compliance`

use slirc_client::message::{escape_tag_value, unescape_tag_value};
use slirc_client::{Command, Message};

// =============================================================================
// IRCv3 MESSAGE TAGS ESCAPING (https://ircv3.net/specs/extensions/message-tags)
// =============================================================================

mod tag_escaping {
    use super::*;

    /// IRCv3 specifies these escape sequences:
    /// - `\:` -> `;` (semicolon)
    /// - `\s` -> ` ` (space)
    /// - `\\` -> `\` (backslash)
    /// - `\r` -> CR (carriage return)
    /// - `\n` -> LF (line feed)
    #[test]
    fn test_unescape_semicolon() {
        assert_eq!(unescape_tag_value("a\\:b"), "a;b");
    }

    #[test]
    fn test_unescape_space() {
        assert_eq!(unescape_tag_value("hello\\sworld"), "hello world");
    }

    #[test]
    fn test_unescape_backslash() {
        assert_eq!(unescape_tag_value("path\\\\file"), "path\\file");
    }

    #[test]
    fn test_unescape_carriage_return() {
        assert_eq!(unescape_tag_value("line\\rend"), "line\rend");
    }

    #[test]
    fn test_unescape_line_feed() {
        assert_eq!(unescape_tag_value("line\\nend"), "line\nend");
    }

    #[test]
    fn test_unescape_combined() {
        let input = "a\\:b\\sc\\\\d\\re\\nf";
        let expected = "a;b c\\d\re\nf";
        assert_eq!(unescape_tag_value(input), expected);
    }

    #[test]
    fn test_unescape_trailing_backslash() {
        assert_eq!(unescape_tag_value("test\\"), "test");
    }

    #[test]
    fn test_unescape_unknown_escape() {
        assert_eq!(unescape_tag_value("a\\xb"), "axb");
    }

    #[test]
    fn test_escape_roundtrip() {
        let test_values = vec![
            "simple",
            "with space",
            "with;semicolon",
            "with\\backslash",
            "with\nnewline",
            "with\rcarriage",
            "complex; \\ \n \r all",
        ];

        for original in test_values {
            let mut escaped = String::new();
            escape_tag_value(&mut escaped, original).unwrap();
            let unescaped = unescape_tag_value(&escaped);
            assert_eq!(
                unescaped, original,
                "Roundtrip failed: '{}' -> '{}' -> '{}'",
                original, escaped, unescaped
            );
        }
    }
}

// =============================================================================
// IRCv3 TAG PARSING IN MESSAGES
// =============================================================================

mod tag_parsing {
    use super::*;

    #[test]
    fn test_tag_with_escaped_semicolon() {
        let raw = "@key=value\\:with\\:semicolons :nick PRIVMSG #ch :hi";
        let msg = Message::parse(raw);
        assert_eq!(msg.tags.get("key").map(String::as_str), Some("value;with;semicolons"));
    }

    #[test]
    fn test_tag_with_escaped_spaces() {
        let raw = "@key=hello\\sworld :nick PRIVMSG #ch :hi";
        let msg = Message::parse(raw);
        assert_eq!(msg.tags.get("key").map(String::as_str), Some("hello world"));
    }

    #[test]
    fn test_tag_without_value() {
        // IRCv3 allows tags without values (flag-style)
        let raw = "@+typing :nick PRIVMSG #ch :hi";
        let msg = Message::parse(raw);
        assert!(msg.tags.contains_key("+typing"));
        assert_eq!(msg.tags.get("+typing").map(String::as_str), Some(""));
    }

    #[test]
    fn test_multiple_tags_mixed() {
        let raw = "@+typing;time=2023-01-01T00:00:00Z;msgid=abc :nick PRIVMSG #ch :hi";
        let msg = Message::parse(raw);
        assert!(msg.tags.contains_key("+typing"));
        assert_eq!(msg.tags.get("time").map(String::as_str), Some("2023-01-01T00:00:00Z"));
        assert_eq!(msg.tags.get("msgid").map(String::as_str), Some("abc"));
    }

    #[test]
    fn test_client_only_tag_prefix() {
        let raw = "@+example.com/custom=value :nick PRIVMSG #ch :hi";
        let msg = Message::parse(raw);
        assert_eq!(msg.tags.get("+example.com/custom").map(String::as_str), Some("value"));
    }

    #[test]
    fn test_vendor_prefixed_tag() {
        let raw = "@example.com/foo=bar :nick PRIVMSG #ch :hi";
        let msg = Message::parse(raw);
        assert_eq!(msg.tags.get("example.com/foo").map(String::as_str), Some("bar"));
    }
}

// =============================================================================
// RFC 1459/2812 MESSAGE FORMAT
// =============================================================================

mod message_format {
    use super::*;

    #[test]
    fn test_max_line_length_512() {
        // RFC 1459/2812: maximum message length is 512 bytes including CRLF.
        // Parsing itself is total and imposes no length limit; the transport
        // layer enforces MAX_IRC_LINE_LEN on the wire instead.
        let long_text = "a".repeat(500);
        let raw = format!("PRIVMSG #ch :{long_text}");
        let msg = Message::parse(&raw);
        assert_eq!(msg.text().map(str::len), Some(500));
    }

    #[test]
    fn test_crlf_line_ending() {
        let raw = "PING :server\r\n";
        let msg = Message::parse(raw);
        assert_eq!(msg.command, "PING");
    }

    #[test]
    fn test_lf_only_line_ending() {
        let raw = "PING :server\n";
        let msg = Message::parse(raw);
        assert_eq!(msg.command, "PING");
    }

    #[test]
    fn test_no_line_ending() {
        let raw = "PING :server";
        let msg = Message::parse(raw);
        assert_eq!(msg.command, "PING");
    }

    #[test]
    fn test_empty_trailing_parameter() {
        let raw = "PRIVMSG #channel :";
        let msg = Message::parse(raw);
        assert_eq!(msg.params, vec!["#channel", ""]);
    }

    #[test]
    fn test_trailing_with_spaces() {
        let raw = ":nick PRIVMSG #ch :hello world with spaces";
        let msg = Message::parse(raw);
        assert_eq!(msg.text(), Some("hello world with spaces"));
    }

    #[test]
    fn test_trailing_preserves_leading_colon() {
        // Double colon at start of trailing: the second colon is literal.
        let raw = "PRIVMSG #ch ::starts with colon";
        let msg = Message::parse(raw);
        assert_eq!(msg.text(), Some(":starts with colon"));
    }

    #[test]
    fn test_numeric_command() {
        let raw = ":server 001 nick :Welcome to the network";
        let msg = Message::parse(raw);
        assert_eq!(msg.numeric_code(), Some(1));
    }

    #[test]
    fn test_max_params_15() {
        // RFC allows up to 15 parameters (14 middle + 1 trailing).
        let raw = "CMD 1 2 3 4 5 6 7 8 9 10 11 12 13 14 :15th trailing";
        let msg = Message::parse(raw);
        assert_eq!(msg.params.len(), 15);
        assert_eq!(msg.params[14], "15th trailing");
    }
}

// =============================================================================
// PREFIX PARSING (RFC 2812 Section 2.3.1)
// =============================================================================

mod prefix_parsing {
    use super::*;

    #[test]
    fn test_full_user_prefix() {
        let raw = ":nick!user@host.example.com PRIVMSG #ch :hi";
        let msg = Message::parse(raw);
        assert_eq!(msg.nick(), Some("nick"));
        assert_eq!(msg.user(), Some("user"));
        assert_eq!(msg.host(), Some("host.example.com"));
    }

    #[test]
    fn test_nick_at_host_prefix() {
        // Some servers send nick@host (no user); the whole thing before '@'
        // is still read as the nick segment since there's no '!'.
        let raw = ":nick@host.example.com PRIVMSG #ch :hi";
        let msg = Message::parse(raw);
        assert_eq!(msg.nick(), Some("nick@host.example.com"));
    }

    #[test]
    fn test_nick_only_prefix() {
        let raw = ":nick PRIVMSG #ch :hi";
        let msg = Message::parse(raw);
        assert_eq!(msg.nick(), Some("nick"));
    }

    #[test]
    fn test_server_prefix() {
        let raw = ":irc.example.com 001 nick :Welcome";
        let msg = Message::parse(raw);
        assert!(msg.prefix.is_some());
    }

    #[test]
    fn test_ipv6_host() {
        let raw = ":nick!user@2001:db8::1 PRIVMSG #ch :hi";
        let msg = Message::parse(raw);
        assert_eq!(msg.nick(), Some("nick"));
        assert_eq!(msg.host(), Some("2001:db8::1"));
    }

    #[test]
    fn test_cloaked_host() {
        let raw = ":nick!user@user/nick/cloaked PRIVMSG #ch :hi";
        let msg = Message::parse(raw);
        assert_eq!(msg.host(), Some("user/nick/cloaked"));
    }
}

// =============================================================================
// CHANNEL NAMES (RFC 2812 Section 1.3)
// =============================================================================

mod channel_names {
    use super::*;

    #[test]
    fn test_standard_channel() {
        let msg = Message::parse("JOIN #channel");
        assert_eq!(msg.channel(), Some("#channel"));
    }

    #[test]
    fn test_local_channel() {
        let msg = Message::parse("JOIN &localchan");
        assert_eq!(msg.channel(), Some("&localchan"));
    }

    #[test]
    fn test_channel_with_special_chars() {
        let msg = Message::parse("JOIN #foo-bar_baz");
        assert_eq!(msg.channel(), Some("#foo-bar_baz"));
    }

    #[test]
    fn test_multiple_channels_join() {
        let msg = Message::parse("JOIN #chan1,#chan2,#chan3");
        assert_eq!(msg.channel(), Some("#chan1,#chan2,#chan3"));
    }
}

// =============================================================================
// UTF-8 HANDLING (IRCv3 implies UTF-8)
// =============================================================================

mod utf8_handling {
    use super::*;

    #[test]
    fn test_utf8_in_message() {
        let raw = ":nick PRIVMSG #ch :Hello \u{4e16}\u{754c} \u{1f30d}";
        let msg = Message::parse(raw);
        assert_eq!(msg.text(), Some("Hello \u{4e16}\u{754c} \u{1f30d}"));
    }

    #[test]
    fn test_utf8_in_nick() {
        let raw = ":\u{00d1}o\u{00f1}o!user@host PRIVMSG #ch :hi";
        let msg = Message::parse(raw);
        assert_eq!(msg.nick(), Some("\u{00d1}o\u{00f1}o"));
    }

    #[test]
    fn test_utf8_in_tag_value() {
        let raw = "@label=f\u{00f6}\u{00f6} :nick PRIVMSG #ch :hi";
        let msg = Message::parse(raw);
        assert_eq!(msg.tags.get("label").map(String::as_str), Some("f\u{00f6}\u{00f6}"));
    }

    #[test]
    fn test_emoji_in_message() {
        let raw = ":nick PRIVMSG #ch :\u{1f389}\u{1f38a}\u{1f388}";
        let msg = Message::parse(raw);
        assert_eq!(msg.text(), Some("\u{1f389}\u{1f38a}\u{1f388}"));
    }
}

// =============================================================================
// COMMAND-SPECIFIC TESTS (inbound parsing, then outbound re-serialization)
// =============================================================================

mod commands {
    use super::*;

    #[test]
    fn test_privmsg_requires_target_and_text() {
        let msg = Message::parse("PRIVMSG #channel :Hello");
        assert_eq!(msg.target(), Some("#channel"));
        assert_eq!(msg.text(), Some("Hello"));
    }

    #[test]
    fn test_notice_similar_to_privmsg() {
        let msg = Message::parse("NOTICE #channel :Hello");
        assert_eq!(msg.command, "NOTICE");
        assert_eq!(msg.target(), Some("#channel"));
        assert_eq!(msg.text(), Some("Hello"));
    }

    #[test]
    fn test_join_with_key() {
        let msg = Message::parse("JOIN #channel secretkey");
        assert_eq!(msg.params, vec!["#channel", "secretkey"]);

        let cmd = Command::Join {
            channel: "#channel".into(),
            key: Some("secretkey".into()),
        };
        assert_eq!(cmd.serialize(), "JOIN #channel secretkey");
    }

    #[test]
    fn test_part_with_message() {
        let msg = Message::parse("PART #channel :Goodbye!");
        assert_eq!(msg.channel(), Some("#channel"));
        assert_eq!(msg.params.get(1).map(String::as_str), Some("Goodbye!"));
    }

    #[test]
    fn test_quit_with_message() {
        let msg = Message::parse("QUIT :Gone fishing");
        assert_eq!(msg.text(), Some("Gone fishing"));
    }

    #[test]
    fn test_mode_channel() {
        let msg = Message::parse("MODE #channel +o nick");
        assert_eq!(msg.command, "MODE");
        assert_eq!(msg.target(), Some("#channel"));
    }

    #[test]
    fn test_kick_with_reason() {
        let msg = Message::parse("KICK #channel nick :Bad behavior");
        assert_eq!(msg.params[0], "#channel");
        assert_eq!(msg.params[1], "nick");
        assert_eq!(msg.params.get(2).map(String::as_str), Some("Bad behavior"));
    }
}

// =============================================================================
// EDGE CASES
// =============================================================================

mod edge_cases {
    use super::*;

    #[test]
    fn test_empty_message_is_total_not_an_error() {
        let msg = Message::parse("");
        assert_eq!(msg.command, "");
        assert!(msg.params.is_empty());
    }

    #[test]
    fn test_whitespace_only_does_not_panic() {
        let _ = Message::parse("   ");
    }

    #[test]
    fn test_multiple_consecutive_spaces_are_collapsed() {
        let msg = Message::parse(":nick  PRIVMSG  #ch  :hello");
        assert_eq!(msg.command, "PRIVMSG");
        assert_eq!(msg.params, vec!["#ch", "hello"]);
    }

    #[test]
    fn test_very_long_nick_does_not_panic() {
        let long_nick = "a".repeat(100);
        let raw = format!(":{long_nick}!user@host PRIVMSG #ch :hi");
        let msg = Message::parse(&raw);
        assert_eq!(msg.nick(), Some(long_nick.as_str()));
    }

    #[test]
    fn test_trailing_only_colon() {
        let raw = "PRIVMSG #ch ::";
        let msg = Message::parse(raw);
        assert_eq!(msg.text(), Some(":"));
    }
}
