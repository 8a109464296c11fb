//! Conversion options.
//!
//! Options come either from Rust ([`Options::default`] plus the builder
//! methods) or from a JSON option bag via [`Options::from_json`]. Option
//! bags use the camelCase names below; older snake_case and "white list"
//! names are renamed first by [`normalize_legacy`].
//!
//! | Key                 | Default                                            |
//! |---------------------|----------------------------------------------------|
//! | `rootValue`         | `16`                                               |
//! | `unitPrecision`     | `5`                                                |
//! | `propList`          | `["font", "font-size", "line-height", "letter-spacing"]` |
//! | `selectorBlackList` | `[]`                                               |
//! | `replace`           | `true`                                             |
//! | `mediaQuery`        | `false`                                            |
//! | `minPixelValue`     | `0`                                                |
//! | `exclude`           | none                                               |

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::exclude::FileExclusion;
use crate::selectors::SelectorPattern;
use crate::units::Converter;

/// Deprecated option names and their replacements, applied in this order.
pub const LEGACY_OPTIONS: [(&str, &str); 6] = [
    ("root_value", "rootValue"),
    ("unit_precision", "unitPrecision"),
    ("selector_black_list", "selectorBlackList"),
    ("prop_white_list", "propList"),
    ("media_query", "mediaQuery"),
    ("propWhiteList", "propList"),
];

pub const DEFAULT_PROP_LIST: [&str; 4] = ["font", "font-size", "line-height", "letter-spacing"];

/// Resolved options for one conversion pass.
#[derive(Clone, Debug)]
pub struct Options {
    /// Pixels per rem.
    pub root_value: f64,
    /// Digits kept after the decimal point.
    pub unit_precision: u32,
    pub prop_list: Vec<String>,
    pub selector_black_list: Vec<SelectorPattern>,
    /// Overwrite values in place instead of appending a rem fallback pair.
    pub replace: bool,
    /// Also convert `@media` parameters.
    pub media_query: bool,
    /// Literals smaller than this (in absolute value) stay in px.
    pub min_pixel_value: f64,
    pub exclude: Option<FileExclusion>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root_value: 16.0,
            unit_precision: 5,
            prop_list: DEFAULT_PROP_LIST.iter().map(|p| p.to_string()).collect(),
            selector_black_list: Vec::new(),
            replace: true,
            media_query: false,
            min_pixel_value: 0.0,
            exclude: None,
        }
    }
}

impl Options {
    /// Resolves an option bag. Unknown keys are ignored and a non-object
    /// bag yields the defaults.
    ///
    /// ```rust
    /// use pxtorem::Options;
    /// use serde_json::json;
    ///
    /// let options = Options::from_json(&json!({ "root_value": 75, "propList": ["*"] })).unwrap();
    /// assert_eq!(options.root_value, 75.0);
    /// assert_eq!(options.prop_list, ["*"]);
    /// ```
    pub fn from_json(value: &Value) -> Result<Self> {
        let mut map = normalize_legacy(value);
        let mut options = Self::default();

        if let Some(root_value) = take(&mut map, "rootValue")? {
            options.root_value = root_value;
        }
        if let Some(unit_precision) = take(&mut map, "unitPrecision")? {
            options.unit_precision = unit_precision;
        }
        if let Some(prop_list) = take(&mut map, "propList")? {
            options.prop_list = prop_list;
        }
        if let Some(entries) = take::<Vec<String>>(&mut map, "selectorBlackList")? {
            options.selector_black_list = entries
                .iter()
                .map(|entry| SelectorPattern::parse(entry))
                .collect::<std::result::Result<_, _>>()
                .map_err(|err| Error::InvalidOption {
                    name: "selectorBlackList",
                    reason: err.to_string(),
                })?;
        }
        if let Some(replace) = take(&mut map, "replace")? {
            options.replace = replace;
        }
        if let Some(media_query) = take(&mut map, "mediaQuery")? {
            options.media_query = media_query;
        }
        if let Some(min_pixel_value) = take(&mut map, "minPixelValue")? {
            options.min_pixel_value = min_pixel_value;
        }
        if let Some(exclude) = map.get("exclude").filter(|v| !v.is_null()) {
            options.exclude = Some(FileExclusion::from_json(exclude)?);
        }

        options.validate()?;
        Ok(options)
    }

    /// Checks the numeric invariants.
    pub fn validate(&self) -> Result<()> {
        if !(self.root_value.is_finite() && self.root_value > 0.0) {
            return Err(Error::InvalidOption {
                name: "rootValue",
                reason: format!("must be a positive number, got {}", self.root_value),
            });
        }
        if !(self.min_pixel_value.is_finite() && self.min_pixel_value >= 0.0) {
            return Err(Error::InvalidOption {
                name: "minPixelValue",
                reason: format!("must be zero or greater, got {}", self.min_pixel_value),
            });
        }
        Ok(())
    }

    pub fn converter(&self) -> Converter {
        Converter {
            root_value: self.root_value,
            unit_precision: self.unit_precision,
            min_pixel_value: self.min_pixel_value,
        }
    }

    pub fn root_value(mut self, root_value: f64) -> Self {
        self.root_value = root_value;
        self
    }

    pub fn unit_precision(mut self, unit_precision: u32) -> Self {
        self.unit_precision = unit_precision;
        self
    }

    pub fn prop_list<I, S>(mut self, prop_list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prop_list = prop_list.into_iter().map(Into::into).collect();
        self
    }

    pub fn selector_black_list<I, P>(mut self, blacklist: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<SelectorPattern>,
    {
        self.selector_black_list = blacklist.into_iter().map(Into::into).collect();
        self
    }

    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    pub fn media_query(mut self, media_query: bool) -> Self {
        self.media_query = media_query;
        self
    }

    pub fn min_pixel_value(mut self, min_pixel_value: f64) -> Self {
        self.min_pixel_value = min_pixel_value;
        self
    }

    pub fn exclude(mut self, exclude: impl Into<FileExclusion>) -> Self {
        self.exclude = Some(exclude.into());
        self
    }
}

/// Renames deprecated keys to their canonical names.
///
/// An explicitly empty legacy white list used to mean "convert every
/// property", so when one is present and `propList` is not, `propList`
/// becomes `["*"]`. Legacy keys otherwise override canonical ones.
pub fn normalize_legacy(options: &Value) -> Map<String, Value> {
    let Value::Object(options) = options else {
        return Map::new();
    };
    let mut map = options.clone();

    let empty_white_list = ["prop_white_list", "propWhiteList"]
        .iter()
        .any(|key| matches!(map.get(*key), Some(Value::Array(list)) if list.is_empty()));
    if empty_white_list && !map.contains_key("propList") {
        map.insert("propList".to_string(), Value::from(vec!["*"]));
        map.remove("prop_white_list");
        map.remove("propWhiteList");
    }

    for (legacy, canonical) in LEGACY_OPTIONS {
        if let Some(value) = map.remove(legacy) {
            log::debug!("option `{legacy}` is deprecated, use `{canonical}`");
            map.insert(canonical.to_string(), value);
        }
    }
    map
}

fn take<T: DeserializeOwned>(map: &mut Map<String, Value>, name: &'static str) -> Result<Option<T>> {
    match map.remove(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|err| Error::InvalidOption {
                name,
                reason: err.to_string(),
            }),
    }
}
