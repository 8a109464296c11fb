//! # styletree - Mutable style sheet trees
//!
//! A small in-memory model of a parsed style sheet, meant to be handed to
//! transformation passes. It does not parse CSS text; hosts build the tree
//! (or convert their own AST into it) and print it back with [`Display`].
//!
//! - **Nodes**: [`Rule`], [`Declaration`], [`AtRule`] and their [`Source`] provenance
//! - **Walking**: [`StyleSheet::walk_decls`] and [`StyleSheet::walk_at_rules`]
//!   visit nodes in document order and allow in-place edits
//! - **Printing**: every node implements [`Display`] as CSS text
//!
//! ## Quick Start
//!
//! ```rust
//! use styletree::{Rule, StyleSheet};
//!
//! let mut sheet = StyleSheet::new()
//!     .with_rule(Rule::new(".card").decl("padding", "32px"));
//!
//! sheet.walk_decls(|cursor| {
//!     if cursor.decl().prop == "padding" {
//!         cursor.decl_mut().value = "2rem".to_string();
//!     }
//! });
//!
//! assert_eq!(sheet.to_string(), ".card {\n    padding: 2rem;\n}\n");
//! ```
//!
//! [`Display`]: std::fmt::Display

pub mod node;
pub mod print;
pub mod walk;

pub use node::{AtRule, Declaration, Node, Rule, Source, StyleSheet};
pub use walk::DeclCursor;
