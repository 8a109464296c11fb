//! Pixel literal scanning and conversion.
//!
//! Values are scanned left to right with nom. Quoted strings and `url(...)`
//! calls are passed through untouched, so neither `content: "12px"` nor
//! `url(icon-16px.png)` is rewritten. Numbers immediately followed by the
//! lowercase `px` suffix become [`PixelLiteral`]s, unless the number is glued
//! to a preceding letter (as in `h12px`), in which case it is part of an
//! identifier.

use std::borrow::Cow;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{is_not, tag},
    character::complete::{char, digit0, digit1, one_of},
    combinator::{opt, recognize},
    sequence::{delimited, pair, tuple},
};

use crate::number::to_fixed;

/// The absolute unit being converted.
pub const PX: &str = "px";
/// The relative unit produced.
pub const REM: &str = "rem";

/// A number followed by `px`, as it appears in the source value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelLiteral<'a> {
    /// The full literal, e.g. `-1.5px`.
    pub text: &'a str,
    /// The numeric part, e.g. `-1.5`.
    pub number: &'a str,
}

impl PixelLiteral<'_> {
    pub fn magnitude(&self) -> Option<f64> {
        self.number.parse().ok().filter(|v: &f64| v.is_finite())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text that is never converted.
    Verbatim(&'a str),
    Pixels(PixelLiteral<'a>),
}

/// Splits `value` into verbatim text and pixel literals.
///
/// Concatenating the text of every segment yields `value` again.
pub fn segments(value: &str) -> Segments<'_> {
    Segments {
        rest: value,
        prev: None,
    }
}

/// The pixel literals of `value`, in order.
pub fn pixel_literals(value: &str) -> impl Iterator<Item = PixelLiteral<'_>> {
    segments(value).filter_map(|segment| match segment {
        Segment::Pixels(literal) => Some(literal),
        Segment::Verbatim(_) => None,
    })
}

pub struct Segments<'a> {
    rest: &'a str,
    prev: Option<char>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let input = self.rest;
        if input.is_empty() {
            return None;
        }

        let (rest, segment) = if let Ok((rest, text)) = opaque(input) {
            (rest, Segment::Verbatim(text))
        } else if let Ok((rest, (number, unit))) = pair(parse_number, opt(tag(PX)))(input) {
            let text = &input[..input.len() - rest.len()];
            let glued = self.prev.is_some_and(is_ident_char);
            match unit {
                Some(_) if !glued => (rest, Segment::Pixels(PixelLiteral { text, number })),
                _ => (rest, Segment::Verbatim(text)),
            }
        } else {
            let len = input.chars().next().map_or(0, char::len_utf8);
            (&input[len..], Segment::Verbatim(&input[..len]))
        };

        let text = match segment {
            Segment::Verbatim(text) => text,
            Segment::Pixels(literal) => literal.text,
        };
        self.prev = text.chars().next_back();
        self.rest = rest;
        Some(segment)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Quoted strings and `url(...)` calls.
fn opaque(input: &str) -> IResult<&str, &str> {
    recognize(alt((
        delimited(char('"'), is_not("\""), char('"')),
        delimited(char('\''), is_not("'"), char('\'')),
        delimited(tag("url("), is_not(")"), char(')')),
    )))(input)
}

/// Parse an optionally signed integer or decimal number (`12`, `-1.5`, `.5`).
fn parse_number(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        opt(one_of("+-")),
        alt((recognize(tuple((digit0, char('.'), digit1))), digit1)),
    ))(input)
}

/// Turns pixel literals into rem literals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Converter {
    pub root_value: f64,
    pub unit_precision: u32,
    pub min_pixel_value: f64,
}

impl Converter {
    /// Replacement text for one literal.
    ///
    /// Literals below `min_pixel_value` (by absolute value) are returned
    /// unchanged. Negative literals keep their sign; results that round to
    /// zero become a unit-less `0`.
    pub fn replace<'a>(&self, literal: &PixelLiteral<'a>) -> Cow<'a, str> {
        let Some(pixels) = literal.magnitude() else {
            return Cow::Borrowed(literal.text);
        };
        if pixels.abs() < self.min_pixel_value {
            return Cow::Borrowed(literal.text);
        }

        let fixed = to_fixed(pixels.abs() / self.root_value, self.unit_precision);
        if fixed == 0.0 {
            return Cow::Borrowed("0");
        }
        let sign = if pixels < 0.0 { "-" } else { "" };
        Cow::Owned(format!("{sign}{fixed}{REM}"))
    }

    /// Rewrites every pixel literal in `value`.
    pub fn convert(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        for segment in segments(value) {
            match segment {
                Segment::Verbatim(text) => out.push_str(text),
                Segment::Pixels(literal) => out.push_str(&self.replace(&literal)),
            }
        }
        out
    }
}
