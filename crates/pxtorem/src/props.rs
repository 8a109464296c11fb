//! Property list matching.
//!
//! A property list is an ordered set of patterns that decides which
//! declarations are converted:
//!
//! | Entry        | Meaning                                  |
//! |--------------|------------------------------------------|
//! | `*`          | every property                           |
//! | `font-size`  | exactly `font-size`                      |
//! | `font*`      | starts with `font`                       |
//! | `*radius`    | ends with `radius`                       |
//! | `*margin*`   | contains `margin`                        |
//! | `!…`         | any of the above, as an exclusion        |
//!
//! A property is converted when it satisfies the wildcard or any inclusion
//! and no exclusion. Exclusions always win.

/// How a compiled entry compares against a property name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    StartWith,
    EndWith,
    Contain,
}

/// One compiled property list entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropRule {
    pub kind: MatchKind,
    pub negated: bool,
    pub text: String,
}

impl PropRule {
    /// Compiles a non-wildcard entry. Entries that leave nothing to compare
    /// against (such as `!*` or `**`) yield `None`.
    pub fn parse(entry: &str) -> Option<Self> {
        let (negated, body) = match entry.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, entry),
        };

        let leading = body.starts_with('*');
        let trailing = body.len() > 1 && body.ends_with('*');
        let start = usize::from(leading);
        let end = body.len() - usize::from(trailing);
        if start >= end {
            return None;
        }

        let kind = match (leading, trailing) {
            (true, true) => MatchKind::Contain,
            (true, false) => MatchKind::EndWith,
            (false, true) => MatchKind::StartWith,
            (false, false) => MatchKind::Exact,
        };

        Some(Self {
            kind,
            negated,
            text: body[start..end].to_string(),
        })
    }

    pub fn matches(&self, prop: &str) -> bool {
        let text = self.text.as_str();
        match self.kind {
            MatchKind::Exact => prop == text,
            MatchKind::StartWith => prop.starts_with(text),
            MatchKind::EndWith => prop.ends_with(text),
            MatchKind::Contain => prop.contains(text),
        }
    }
}

/// A property list compiled once per pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyMatcher {
    wildcard: bool,
    include: Vec<PropRule>,
    exclude: Vec<PropRule>,
}

impl PropertyMatcher {
    pub fn new<S: AsRef<str>>(prop_list: &[S]) -> Self {
        let mut matcher = Self::default();
        for entry in prop_list {
            let entry = entry.as_ref();
            if entry == "*" {
                matcher.wildcard = true;
                continue;
            }
            match PropRule::parse(entry) {
                Some(rule) if rule.negated => matcher.exclude.push(rule),
                Some(rule) => matcher.include.push(rule),
                None => log::trace!("ignoring empty property list entry {entry:?}"),
            }
        }
        matcher
    }

    /// Whether declarations of `prop` should be converted.
    pub fn matches(&self, prop: &str) -> bool {
        let included = self.wildcard || self.include.iter().any(|rule| rule.matches(prop));
        included && !self.exclude.iter().any(|rule| rule.matches(prop))
    }

    pub fn matches_all(&self) -> bool {
        self.wildcard && self.exclude.is_empty()
    }
}
