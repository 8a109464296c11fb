//! # pxtorem-rs
//!
//! Converts px lengths in style sheets to rem units.
//!
//! This crate bundles the conversion pass ([`pxtorem`]) with the tree it
//! works on ([`styletree`]) for hosts that just want one entry point:
//!
//! ```rust
//! use pxtorem_rs::{Rule, StyleSheet};
//! use serde_json::json;
//!
//! let mut sheet = StyleSheet::new().with_rule(Rule::new("h1").decl("font-size", "32px"));
//! let summary = pxtorem_rs::process(&mut sheet, &json!({ "rootValue": 16 })).unwrap();
//!
//! assert_eq!(summary.replaced, 1);
//! assert_eq!(sheet.to_string(), "h1 {\n    font-size: 2rem;\n}\n");
//! ```

pub use pxtorem::{self, Error, FileExclusion, Options, PxToRem, Result, SelectorPattern, Summary};
pub use styletree::{self, AtRule, DeclCursor, Declaration, Node, Rule, Source, StyleSheet};

/// Resolves `options` and converts `sheet` in place.
///
/// Option errors are reported before the sheet is touched.
pub fn process(sheet: &mut StyleSheet, options: &serde_json::Value) -> Result<Summary> {
    let pass = PxToRem::from_json(options)?;
    Ok(pass.process(sheet))
}
