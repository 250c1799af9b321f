//! Class token parsing.
//!
//! A utility class token has the shape
//!
//! ```text
//! [variant:]*[!][-]utility
//! ```
//!
//! where variants are responsive or state modifiers (`md:`, `hover:`,
//! `data-[state=open]:`, `[&_svg]:`). Square brackets hold arbitrary values and
//! may nest or contain colons, so splitting on `:` is not enough:
//!
//! ```rust
//! use stylekit::parser::parse_class;
//!
//! let token = parse_class("[&[data-state=open]>svg]:rotate-180").unwrap();
//! assert_eq!(token.variants, vec!["[&[data-state=open]>svg]"]);
//! assert_eq!(token.utility, "rotate-180");
//!
//! let token = parse_class("md:hover:!-mt-4").unwrap();
//! assert_eq!(token.variants, vec!["md", "hover"]);
//! assert!(token.important);
//! assert!(token.negative);
//! assert_eq!(token.utility, "mt-4");
//! ```

use nom::{
    IResult,
    branch::alt,
    bytes::complete::is_not,
    character::complete::char,
    combinator::{all_consuming, opt, recognize},
    multi::{many0, many1},
    sequence::{delimited, terminated, tuple},
};

use crate::error::{Result, StyleError};

/// A parsed class token, borrowing from its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassToken<'a> {
    /// Variant modifiers, outermost first.
    pub variants: Vec<&'a str>,
    /// `!` important marker.
    pub important: bool,
    /// Leading `-` on the utility (negative value).
    pub negative: bool,
    /// The utility without markers (`mt-4`, `w-[10px]`).
    pub utility: &'a str,
}

impl ClassToken<'_> {
    /// The variants joined back together (`md:hover`), used as part of the
    /// conflict key during merging.
    pub fn variant_key(&self) -> String {
        self.variants.join(":")
    }
}

/// A bracketed arbitrary value, with nesting.
fn bracketed(input: &str) -> IResult<&str, &str> {
    recognize(delimited(
        char('['),
        many0(alt((bracketed, is_not("[]")))),
        char(']'),
    ))(input)
}

/// A run of characters outside brackets, stopping at separators.
fn plain(input: &str) -> IResult<&str, &str> {
    is_not("[]: \t\n")(input)
}

/// One colon-delimited segment: plain text and bracketed values in any order.
fn segment(input: &str) -> IResult<&str, &str> {
    recognize(many1(alt((bracketed, plain))))(input)
}

/// A segment followed by `:`.
fn variant(input: &str) -> IResult<&str, &str> {
    terminated(segment, char(':'))(input)
}

fn class_token(input: &str) -> IResult<&str, ClassToken<'_>> {
    let (input, variants) = many0(variant)(input)?;
    let (input, (important, negative, utility)) =
        tuple((opt(char('!')), opt(char('-')), segment))(input)?;

    Ok((
        input,
        ClassToken {
            variants,
            important: important.is_some(),
            negative: negative.is_some(),
            utility,
        },
    ))
}

/// Parse a single class token.
pub fn parse_class(input: &str) -> Result<ClassToken<'_>> {
    all_consuming(class_token)(input)
        .map(|(_, token)| token)
        .map_err(|_| StyleError::InvalidClass(input.to_string()))
}

/// Split a class string into tokens on whitespace.
pub fn split_classes(input: &str) -> impl Iterator<Item = &str> {
    input.split_whitespace()
}

/// The text between the first `[` and its matching `]`, if any.
pub fn arbitrary_value(utility: &str) -> Option<&str> {
    let start = utility.find('[')?;
    let (_, inner) = bracketed(&utility[start..]).ok()?;
    Some(&inner[1..inner.len() - 1])
}
