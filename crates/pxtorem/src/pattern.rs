//! Regular expressions written as text in option bags.
//!
//! Option bags arrive as JSON, which has no regex type, so pattern entries
//! use the familiar literal form `/source/flags`:
//!
//! - `/\.ignore/` matches `.ignore` anywhere in the subject
//! - `/^body$/i` matches `BODY` as well as `body`
//!
//! Supported flags are `i`, `m`, `s` and `x`. The `g`, `y` and `u` flags are
//! accepted and ignored since matching is always a search over the whole
//! subject and always Unicode-aware.

use regex::{Regex, RegexBuilder};

const FLAGS: &str = "gimsuxy";

/// Splits `/source/flags` into its source and flags.
///
/// Returns `None` when `text` is not written in the delimited form.
pub fn split_delimited(text: &str) -> Option<(&str, &str)> {
    let body = text.strip_prefix('/')?;
    let end = body.rfind('/')?;
    let (source, flags) = (&body[..end], &body[end + 1..]);
    if source.is_empty() || !flags.chars().all(|c| FLAGS.contains(c)) {
        return None;
    }
    Some((source, flags))
}

/// Compiles a delimited pattern, or `text` itself as a regex source when it
/// is not delimited.
pub fn compile(text: &str) -> Result<Regex, regex::Error> {
    match split_delimited(text) {
        Some((source, flags)) => RegexBuilder::new(source)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .ignore_whitespace(flags.contains('x'))
            .build(),
        None => Regex::new(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_source_and_flags() {
        assert_eq!(split_delimited("/abc/"), Some(("abc", "")));
        assert_eq!(split_delimited("/a/b/gi"), Some(("a/b", "gi")));
    }

    #[test]
    fn rejects_undelimited_text() {
        assert_eq!(split_delimited("abc"), None);
        assert_eq!(split_delimited("/abc"), None);
        assert_eq!(split_delimited("//"), None);
        assert_eq!(split_delimited("/abc/q"), None);
    }

    #[test]
    fn compiles_with_flags() {
        let re = compile("/^body$/i").unwrap();
        assert!(re.is_match("BODY"));
        assert!(!re.is_match("tbody"));
    }

    #[test]
    fn compiles_bare_source() {
        let re = compile("node_modules").unwrap();
        assert!(re.is_match("/app/node_modules/lib.css"));
    }

    #[test]
    fn reports_invalid_source() {
        assert!(compile("/(unclosed/").is_err());
    }
}
