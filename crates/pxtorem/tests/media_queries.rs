//! Integration tests for `@media` parameter conversion.

use pxtorem::{Options, PxToRem};
use styletree::{AtRule, Rule, StyleSheet};

fn sheet() -> StyleSheet {
    StyleSheet::new().with_at_rule(
        AtRule::new("media", "(min-width: 768px)")
            .with_rule(Rule::new(".a").decl("font-size", "32px")),
    )
}

#[test]
fn media_params_converted_when_enabled() {
    let pass = PxToRem::new(Options::default().media_query(true)).unwrap();
    let mut sheet = sheet();
    let summary = pass.process(&mut sheet);

    assert_eq!(summary.media_queries, 1);
    insta::assert_snapshot!(sheet.to_string().trim_end(), @r"
    @media (min-width: 48rem) {
        .a {
            font-size: 2rem;
        }
    }
    ");
}

#[test]
fn media_params_untouched_by_default() {
    let pass = PxToRem::new(Options::default()).unwrap();
    let mut sheet = sheet();
    pass.process(&mut sheet);

    let media = sheet.nodes[0].as_at_rule().unwrap();
    assert_eq!(media.params, "(min-width: 768px)");
}

#[test]
fn media_params_ignore_property_and_selector_filters() {
    let pass = PxToRem::new(
        Options::default()
            .media_query(true)
            .prop_list(["!*"])
            .selector_black_list(["@media"])
            .min_pixel_value(0.0),
    )
    .unwrap();
    let mut sheet = StyleSheet::new().with_at_rule(AtRule::new(
        "media",
        "screen and (min-width: 320px) and (max-width: 1024px)",
    ));
    pass.process(&mut sheet);

    assert_eq!(
        sheet.to_string(),
        "@media screen and (min-width: 20rem) and (max-width: 64rem);\n"
    );
}

#[test]
fn media_params_respect_minimum() {
    let pass = PxToRem::new(Options::default().media_query(true).min_pixel_value(1000.0)).unwrap();
    let mut sheet = sheet();
    let summary = pass.process(&mut sheet);

    assert_eq!(summary.media_queries, 0);
    assert_eq!(sheet.nodes[0].as_at_rule().unwrap().params, "(min-width: 768px)");
}

#[test]
fn other_at_rules_are_left_alone() {
    let pass = PxToRem::new(Options::default().media_query(true)).unwrap();
    let mut sheet = StyleSheet::new().with_at_rule(AtRule::new("supports", "(width: 16px)"));
    pass.process(&mut sheet);

    assert_eq!(sheet.to_string(), "@supports (width: 16px);\n");
}
