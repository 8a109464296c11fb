//! # pxtorem - px to rem conversion for style sheets
//!
//! Rewrites absolute pixel lengths in a [`styletree::StyleSheet`] into
//! root-relative `rem` lengths, so a design built at one root font size
//! scales with the user's.
//!
//! - **Conversion**: `px / rootValue`, rounded to `unitPrecision` digits
//! - **Property list**: choose which properties convert, with wildcards and
//!   exclusions (see [`props`])
//! - **Selector blacklist**: leave whole rules alone
//! - **File exclusion**: leave whole source files alone
//! - **Media queries**: optionally convert `@media` parameters too
//!
//! ## Quick Start
//!
//! ```rust
//! use pxtorem::PxToRem;
//! use serde_json::json;
//! use styletree::{AtRule, Rule, StyleSheet};
//!
//! let pass = PxToRem::from_json(&json!({
//!     "propList": ["*"],
//!     "minPixelValue": 1.1,
//!     "mediaQuery": true,
//! }))
//! .unwrap();
//!
//! let mut sheet = StyleSheet::new()
//!     .with_rule(Rule::new(".box").decl("padding", "32px").decl("border", "1px solid red"))
//!     .with_at_rule(AtRule::new("media", "(min-width: 768px)").with_rule(Rule::new(".box")));
//!
//! pass.process(&mut sheet);
//!
//! assert_eq!(
//!     sheet.to_string(),
//!     ".box {\n    padding: 2rem;\n    border: 1px solid red;\n}\n\
//!      @media (min-width: 48rem) {\n    .box {\n    }\n}\n"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`options`]: option bags, legacy names and defaults
//! - [`pass`]: the conversion pass
//! - [`units`]: pixel literal scanning and conversion
//! - [`number`]: fixed-precision rounding
//! - [`props`], [`selectors`], [`exclude`]: the three filters
//! - [`pattern`]: regexes written as `/source/flags`
//! - [`error`]: option errors

pub mod error;
pub mod exclude;
pub mod number;
pub mod options;
pub mod pass;
pub mod pattern;
pub mod props;
pub mod selectors;
pub mod units;

pub use error::{Error, Result};
pub use exclude::FileExclusion;
pub use options::Options;
pub use pass::{PxToRem, Summary};
pub use props::PropertyMatcher;
pub use selectors::SelectorPattern;
pub use units::Converter;
