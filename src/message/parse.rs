//! Lexical tokenizer for a single IRC protocol line.
//!
//! Adapted from a nom-combinator tokenizer: tags and prefix are still cut
//! out with `nom`, but parameter tokenization remains a hand-written loop
//! since the "run of spaces, then optional trailing `:`-param" grammar
//! doesn't compose cleanly as nom combinators.

use nom::{
    bytes::complete::{take_until, take_while1},
    character::complete::{char, space0},
    combinator::opt,
    sequence::preceded,
    IResult,
};

/// A line's parts before they're interpreted into a [`super::Message`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParsedLine<'a> {
    pub tags: Option<&'a str>,
    pub prefix: Option<&'a str>,
    pub command: &'a str,
    pub params: Vec<&'a str>,
}

fn parse_tags(input: &str) -> IResult<&str, &str> {
    preceded(char('@'), take_until(" "))(input)
}

fn parse_prefix(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), take_while1(|c| c != ' '))(input)
}

fn parse_command(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric())(input)
}

/// Consume parameters after the command token, honoring the trailing
/// `:`-parameter convention and skipping runs of spaces between tokens.
fn parse_params(input: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut rest = input;

    while rest.as_bytes().first() == Some(&b' ') {
        while rest.as_bytes().first() == Some(&b' ') {
            rest = &rest[1..];
        }

        if rest.is_empty() {
            break;
        }

        if rest.as_bytes().first() == Some(&b':') {
            params.push(&rest[1..]);
            break;
        }

        let end = rest.find(' ').unwrap_or(rest.len());
        let param = &rest[..end];
        if param.is_empty() {
            break;
        }
        params.push(param);
        rest = &rest[end..];
    }

    params
}

/// Parse a single line (already stripped of trailing CR/LF) into its parts.
///
/// The empty line is a valid input and yields an empty command with no
/// parameters, per the line codec's "total function" contract.
pub(crate) fn parse_line(input: &str) -> ParsedLine<'_> {
    if input.is_empty() {
        return ParsedLine {
            tags: None,
            prefix: None,
            command: "",
            params: Vec::new(),
        };
    }

    let (input, tags) = opt(parse_tags)(input).unwrap_or((input, None));
    let (input, _) = space0::<_, nom::error::Error<&str>>(input).unwrap_or((input, ""));
    let (input, prefix) = opt(parse_prefix)(input).unwrap_or((input, None));
    let (input, _) = space0::<_, nom::error::Error<&str>>(input).unwrap_or((input, ""));

    let (rest, command) = match parse_command(input) {
        Ok(ok) => ok,
        Err(_) => (input, ""),
    };

    let params = parse_params(rest);

    ParsedLine {
        tags,
        prefix,
        command,
        params,
    }
}
