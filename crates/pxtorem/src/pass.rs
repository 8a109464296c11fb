//! The conversion pass.

use serde_json::Value;
use styletree::{DeclCursor, StyleSheet};

use crate::error::Result;
use crate::exclude;
use crate::options::Options;
use crate::props::PropertyMatcher;
use crate::selectors;
use crate::units::{Converter, PX};

/// What one run of [`PxToRem::process`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Declarations whose value was overwritten.
    pub replaced: usize,
    /// rem declarations inserted after their px original.
    pub inserted: usize,
    /// `@media` rules whose params changed.
    pub media_queries: usize,
    /// Declarations from excluded source files.
    pub excluded: usize,
    /// px declarations whose property is not in the property list.
    pub unmatched_props: usize,
    /// px declarations under a blacklisted selector.
    pub blacklisted: usize,
    /// px declarations whose converted pair already exists in the rule.
    pub existing: usize,
}

impl Summary {
    pub fn changed(&self) -> bool {
        self.replaced + self.inserted + self.media_queries > 0
    }
}

/// A px to rem conversion pass.
///
/// Built once from [`Options`], then run over any number of style sheets.
///
/// ```rust
/// use pxtorem::{Options, PxToRem};
/// use styletree::{Rule, StyleSheet};
///
/// let pass = PxToRem::new(Options::default().prop_list(["*"])).unwrap();
/// let mut sheet = StyleSheet::new().with_rule(Rule::new(".card").decl("padding", "32px"));
///
/// let summary = pass.process(&mut sheet);
/// assert_eq!(summary.replaced, 1);
/// assert_eq!(sheet.to_string(), ".card {\n    padding: 2rem;\n}\n");
/// ```
#[derive(Clone, Debug)]
pub struct PxToRem {
    options: Options,
    props: PropertyMatcher,
    converter: Converter,
}

impl PxToRem {
    pub fn new(options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            props: PropertyMatcher::new(&options.prop_list),
            converter: options.converter(),
            options,
        })
    }

    /// Builds a pass from a JSON option bag, see [`Options::from_json`].
    pub fn from_json(value: &Value) -> Result<Self> {
        Self::new(Options::from_json(value)?)
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Converts `sheet` in place.
    pub fn process(&self, sheet: &mut StyleSheet) -> Summary {
        let mut summary = Summary::default();

        sheet.walk_decls(|cursor| self.visit_decl(cursor, &mut summary));

        if self.options.media_query {
            sheet.walk_at_rules("media", |at_rule| {
                if !at_rule.params.contains(PX) {
                    return;
                }
                let params = self.converter.convert(&at_rule.params);
                if params != at_rule.params {
                    log::debug!("@media {} -> {}", at_rule.params, params);
                    at_rule.params = params;
                    summary.media_queries += 1;
                }
            });
        }

        log::debug!(
            "px to rem: {} replaced, {} inserted, {} media queries",
            summary.replaced,
            summary.inserted,
            summary.media_queries
        );
        summary
    }

    fn visit_decl(&self, cursor: &mut DeclCursor<'_>, summary: &mut Summary) {
        let decl = cursor.decl();

        if exclude::is_excluded(decl.source_file(), self.options.exclude.as_ref()) {
            summary.excluded += 1;
            return;
        }

        // Cheapest test, rules out most declarations.
        if !decl.value.contains(PX) {
            return;
        }

        if !self.props.matches(&decl.prop) {
            log::trace!("skipping {}: property not in list", decl.prop);
            summary.unmatched_props += 1;
            return;
        }

        if selectors::is_blacklisted(cursor.selector(), &self.options.selector_black_list) {
            log::trace!("skipping {}: selector {:?} is blacklisted", decl.prop, cursor.selector());
            summary.blacklisted += 1;
            return;
        }

        let value = self.converter.convert(&decl.value);

        if cursor
            .siblings()
            .any(|sibling| sibling.prop == decl.prop && sibling.value == value)
        {
            summary.existing += 1;
            return;
        }

        log::debug!("{}: {} -> {}", decl.prop, decl.value, value);
        if self.options.replace {
            cursor.decl_mut().value = value;
            summary.replaced += 1;
        } else {
            let rem = decl.clone_with_value(value);
            cursor.insert_after(rem);
            summary.inserted += 1;
        }
    }
}
