//! IRCv3 message tag escaping utilities.

use std::fmt::{Result as FmtResult, Write};

/// Escape a tag value for serialization.
///
/// Escapes special characters according to the IRCv3 message-tags spec.
pub fn escape_tag_value(f: &mut dyn Write, value: &str) -> FmtResult {
    for c in value.chars() {
        match c {
            ';' => f.write_str("\\:")?,
            ' ' => f.write_str("\\s")?,
            '\\' => f.write_str("\\\\")?,
            '\r' => f.write_str("\\r")?,
            '\n' => f.write_str("\\n")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Unescape a tag value from wire format.
///
/// Reverses the escaping applied by [`escape_tag_value`]. A lone trailing
/// `\` with nothing after it is dropped, per the IRCv3 grammar.
pub fn unescape_tag_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        let r = if c == '\\' {
            match iter.next() {
                Some(':') => ';',
                Some('s') => ' ',
                Some('\\') => '\\',
                Some('r') => '\r',
                Some('n') => '\n',
                Some(c) => c,
                None => break,
            }
        } else {
            c
        };
        unescaped.push(r);
    }
    unescaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape(value: &str) -> String {
        let mut s = String::new();
        escape_tag_value(&mut s, value).unwrap();
        s
    }

    #[test]
    fn round_trips_every_special_char() {
        let raw = "a;b c\\d\re\nf";
        let escaped = escape(raw);
        assert_eq!(unescape_tag_value(&escaped), raw);
    }

    #[test]
    fn unknown_escape_drops_backslash() {
        assert_eq!(unescape_tag_value("\\x"), "x");
    }

    #[test]
    fn trailing_lone_backslash_is_dropped() {
        assert_eq!(unescape_tag_value("abc\\"), "abc");
    }

    #[test]
    fn empty_value_round_trips() {
        assert_eq!(escape(""), "");
        assert_eq!(unescape_tag_value(""), "");
    }
}
