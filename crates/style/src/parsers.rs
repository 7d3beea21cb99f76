//! Low-level nom parser functions for style values.
//!
//! This module provides composable parser functions for lengths and tab stop
//! declarations like `"72pt right leader(dots), 3in anchor ','"`.

use crate::tab::{DEFAULT_ANCHOR_CHAR, Leader, TabAlignment, TabStopSpec};
use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case, take_while_m_n};
use nom::character::complete::{anychar, char, space0, space1};
use nom::combinator::{map, map_res, opt, recognize, value};
use nom::multi::separated_list1;
use nom::sequence::{delimited, pair, preceded};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),
}

// --- Helper Parsers ---

fn ws<'a, F, O>(inner: F) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(space0, inner, space0)
}

fn digits(input: &str) -> IResult<&str, &str> {
    take_while_m_n(1, 10, |c: char| c.is_ascii_digit()).parse(input)
}

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(pair(
            opt(alt((char('+'), char('-')))),
            alt((
                recognize(pair(digits, opt(pair(char('.'), digits)))),
                recognize(pair(char('.'), digits)),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

// --- Unit & Length Parsers ---

fn parse_unit(input: &str) -> IResult<&str, f32> {
    alt((
        value(1.0, tag_no_case("pt")),
        value(1.0, tag_no_case("px")),
        value(72.0, tag_no_case("in")),
        value(28.35, tag_no_case("cm")),
        value(2.835, tag_no_case("mm")),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g., "12pt", "1in", "10mm").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, number) = parse_f32(input)?;
    let (input, unit_multiplier) = opt(parse_unit).parse(input)?;
    Ok((input, number * unit_multiplier.unwrap_or(1.0)))
}

// --- Tab Stop Parsers ---

/// Parses a tab alignment keyword.
pub fn parse_tab_alignment(input: &str) -> IResult<&str, TabAlignment> {
    alt((
        value(TabAlignment::Left, tag_no_case("left")),
        value(TabAlignment::Right, tag_no_case("right")),
        value(TabAlignment::Center, tag_no_case("center")),
        value(TabAlignment::Anchor, tag_no_case("anchor")),
    ))
    .parse(input)
}

fn quoted_char(input: &str) -> IResult<&str, char> {
    alt((
        delimited(char('\''), anychar, char('\'')),
        delimited(char('"'), anychar, char('"')),
    ))
    .parse(input)
}

/// Parses a leader declaration: `leader(dots)`, `leader(dashes)`, `leader(line)` or `leader('-')`.
pub fn parse_leader(input: &str) -> IResult<&str, Leader> {
    delimited(
        (tag_no_case("leader"), space0, char('('), space0),
        alt((
            value(Leader::Dots, tag_no_case("dots")),
            value(Leader::Dashes, tag_no_case("dashes")),
            value(Leader::Line, tag_no_case("line")),
            map(quoted_char, Leader::Glyph),
        )),
        (space0, char(')')),
    )
    .parse(input)
}

/// Parses one tab stop: `<length> [alignment] ['anchor-char'] [leader(...)]`.
pub fn parse_tab_stop(input: &str) -> IResult<&str, TabStopSpec> {
    let (input, position) = parse_length(input)?;
    let (input, alignment) = opt(preceded(space1, parse_tab_alignment)).parse(input)?;
    let (input, anchor_char) = opt(preceded(space1, quoted_char)).parse(input)?;
    let (input, leader) = opt(preceded(space1, parse_leader)).parse(input)?;

    Ok((
        input,
        TabStopSpec {
            position,
            alignment: alignment.unwrap_or_default(),
            leader,
            anchor_char: anchor_char.unwrap_or(DEFAULT_ANCHOR_CHAR),
        },
    ))
}

/// Parses a comma separated list of tab stops.
pub fn parse_tab_stops(input: &str) -> IResult<&str, Vec<TabStopSpec>> {
    separated_list1(ws(tag(",")), parse_tab_stop).parse(input)
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length() {
        assert_eq!(run_parser(parse_length, "12pt").unwrap(), 12.0);
        assert_eq!(run_parser(parse_length, " 1in ").unwrap(), 72.0);
        assert!((run_parser(parse_length, "10mm").unwrap() - 28.35).abs() < 1e-4);
        assert_eq!(run_parser(parse_length, "10").unwrap(), 10.0);
        assert_eq!(run_parser(parse_length, ".5").unwrap(), 0.5);
        assert!(run_parser(parse_length, "abc").is_err());
    }

    #[test]
    fn test_parse_tab_stop_defaults() {
        let stop = run_parser(parse_tab_stop, "36pt").unwrap();
        assert_eq!(stop, TabStopSpec::new(36.0, TabAlignment::Left));
    }

    #[test]
    fn test_parse_tab_stop_with_anchor_and_leader() {
        let stop = run_parser(parse_tab_stop, "2in anchor ',' leader(dots)").unwrap();
        assert_eq!(stop.position, 144.0);
        assert_eq!(stop.alignment, TabAlignment::Anchor);
        assert_eq!(stop.anchor_char, ',');
        assert_eq!(stop.leader, Some(Leader::Dots));

        let glyph = run_parser(parse_tab_stop, "90 right leader('-')").unwrap();
        assert_eq!(glyph.leader, Some(Leader::Glyph('-')));
        assert_eq!(glyph.anchor_char, '.');
    }

    #[test]
    fn test_parse_tab_stop_list() {
        let stops = run_parser(parse_tab_stops, "72pt right, 144pt center ,216pt").unwrap();
        let positions: Vec<f32> = stops.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![72.0, 144.0, 216.0]);
        assert_eq!(stops[1].alignment, TabAlignment::Center);
        assert_eq!(stops[2].alignment, TabAlignment::Left);
    }

    #[test]
    fn test_parse_tab_stop_rejects_trailing_garbage() {
        assert!(run_parser(parse_tab_stops, "72pt sideways").is_err());
        assert!(run_parser(parse_tab_stops, "").is_err());
    }
}
