//! Selector blacklist.

use regex::Regex;

use crate::pattern;

/// One blacklist entry.
#[derive(Clone, Debug)]
pub enum SelectorPattern {
    /// Matches selectors containing the text.
    Literal(String),
    Regex(Regex),
}

impl SelectorPattern {
    /// Reads an entry from its option-bag form: `/source/flags` is a regex,
    /// anything else is a literal.
    pub fn parse(entry: &str) -> Result<Self, regex::Error> {
        if pattern::split_delimited(entry).is_some() {
            pattern::compile(entry).map(Self::Regex)
        } else {
            Ok(Self::Literal(entry.to_string()))
        }
    }

    pub fn matches(&self, selector: &str) -> bool {
        match self {
            Self::Literal(text) => selector.contains(text.as_str()),
            Self::Regex(re) => re.is_match(selector),
        }
    }
}

impl From<&str> for SelectorPattern {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<Regex> for SelectorPattern {
    fn from(re: Regex) -> Self {
        Self::Regex(re)
    }
}

/// Whether `selector` hits any entry of `blacklist`. Rules without a
/// selector are never blacklisted.
pub fn is_blacklisted(selector: Option<&str>, blacklist: &[SelectorPattern]) -> bool {
    match selector {
        Some(selector) => blacklist.iter().any(|entry| entry.matches(selector)),
        None => false,
    }
}
