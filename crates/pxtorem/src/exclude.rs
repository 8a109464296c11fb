//! Source file exclusion.

use regex::Regex;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::pattern;

/// Files whose declarations are left alone.
#[derive(Clone, Debug)]
pub enum FileExclusion {
    Single(Regex),
    /// Tested in order; the first match excludes.
    List(Vec<Regex>),
}

impl FileExclusion {
    /// Reads the `exclude` option: either one pattern string or an array of
    /// pattern strings.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => compile_entry(0, text).map(Self::Single),
            Value::Array(entries) => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| match entry {
                    Value::String(text) => compile_entry(index, text),
                    other => Err(Error::InvalidExcludeEntry {
                        index,
                        reason: format!("expected a pattern string, got {other}"),
                    }),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::List),
            other => Err(Error::InvalidExcludeConfig(other.to_string())),
        }
    }

    pub fn matches(&self, file: &str) -> bool {
        match self {
            Self::Single(re) => re.is_match(file),
            Self::List(patterns) => patterns.iter().any(|re| re.is_match(file)),
        }
    }
}

impl From<Regex> for FileExclusion {
    fn from(re: Regex) -> Self {
        Self::Single(re)
    }
}

impl From<Vec<Regex>> for FileExclusion {
    fn from(patterns: Vec<Regex>) -> Self {
        Self::List(patterns)
    }
}

fn compile_entry(index: usize, text: &str) -> Result<Regex> {
    pattern::compile(text).map_err(|err| Error::InvalidExcludeEntry {
        index,
        reason: err.to_string(),
    })
}

/// Whether a declaration from `file` is excluded. Without exclusions or
/// without a known file nothing is excluded.
pub fn is_excluded(file: Option<&str>, exclusions: Option<&FileExclusion>) -> bool {
    match (file, exclusions) {
        (Some(file), Some(exclusions)) => exclusions.matches(file),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_pattern() {
        let exclusion = FileExclusion::from_json(&json!("/node_modules/i")).unwrap();
        assert!(is_excluded(Some("/app/NODE_MODULES/x.css"), Some(&exclusion)));
        assert!(!is_excluded(Some("/app/src/x.css"), Some(&exclusion)));
    }

    #[test]
    fn pattern_list_first_match_wins() {
        let exclusion = FileExclusion::from_json(&json!([r"/src\/App\.vue/", "vendor"])).unwrap();
        assert!(is_excluded(Some("/p/src/App.vue"), Some(&exclusion)));
        assert!(is_excluded(Some("/p/vendor/reset.css"), Some(&exclusion)));
        assert!(!is_excluded(Some("/p/src/Home.vue"), Some(&exclusion)));
    }

    #[test]
    fn nothing_excluded_without_file_or_config() {
        let exclusion = FileExclusion::from(Regex::new(".*").unwrap());
        assert!(!is_excluded(None, Some(&exclusion)));
        assert!(!is_excluded(Some("a.css"), None));
    }

    #[test]
    fn rejects_non_pattern_config() {
        let err = FileExclusion::from_json(&json!({ "file": "a" })).unwrap_err();
        assert!(matches!(err, Error::InvalidExcludeConfig(_)));
        let err = FileExclusion::from_json(&json!(true)).unwrap_err();
        assert!(matches!(err, Error::InvalidExcludeConfig(_)));
    }

    #[test]
    fn rejects_bad_entries() {
        let err = FileExclusion::from_json(&json!(["ok", 3])).unwrap_err();
        assert!(matches!(err, Error::InvalidExcludeEntry { index: 1, .. }));
        let err = FileExclusion::from_json(&json!("/(/")).unwrap_err();
        assert!(matches!(err, Error::InvalidExcludeEntry { index: 0, .. }));
    }
}
