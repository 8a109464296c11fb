//! Integration tests for tree walking and printing.

use styletree::{AtRule, Declaration, Rule, Source, StyleSheet};

fn sample() -> StyleSheet {
    StyleSheet::new()
        .with_rule(Rule::new(".a").decl("margin", "8px").decl("color", "red"))
        .with_at_rule(
            AtRule::new("media", "(min-width: 768px)")
                .with_rule(Rule::new(".b").decl("padding", "4px")),
        )
        .with_at_rule(AtRule::new("font-face", "").with_decl(Declaration::new("font-family", "x")))
}

// ============================================================================
// DECLARATION WALKING
// ============================================================================

#[test]
fn walk_decls_visits_in_document_order() {
    let mut sheet = sample();
    let mut seen = Vec::new();
    sheet.walk_decls(|cursor| seen.push(cursor.decl().prop.clone()));

    assert_eq!(seen, ["margin", "color", "padding", "font-family"]);
}

#[test]
fn walk_decls_exposes_parent_selector() {
    let mut sheet = sample();
    let mut seen = Vec::new();
    sheet.walk_decls(|cursor| seen.push(cursor.selector().map(str::to_string)));

    assert_eq!(
        seen,
        [
            Some(".a".to_string()),
            Some(".a".to_string()),
            Some(".b".to_string()),
            None,
        ]
    );
}

#[test]
fn siblings_include_current_declaration() {
    let mut sheet = sample();
    let mut counts = Vec::new();
    sheet.walk_decls(|cursor| counts.push(cursor.siblings().count()));

    assert_eq!(counts, [2, 2, 1, 1]);
}

#[test]
fn insert_after_places_clone_next_and_skips_it() {
    let mut sheet = sample();
    let mut visits = 0;
    sheet.walk_decls(|cursor| {
        visits += 1;
        if cursor.decl().prop == "margin" {
            let copy = cursor.decl().clone_with_value("0.5rem");
            cursor.insert_after(copy);
        }
    });

    assert_eq!(visits, 4);
    let rule = sheet.rules().next().unwrap();
    let decls: Vec<String> = rule.declarations().map(|d| d.to_string()).collect();
    assert_eq!(decls, ["margin: 8px", "margin: 0.5rem", "color: red"]);
}

#[test]
fn clone_with_value_keeps_flags_and_source() {
    let decl = Declaration::new("width", "10px")
        .important()
        .with_source(Source::file("src/app.css"));
    let copy = decl.clone_with_value("1rem");

    assert_eq!(copy.value, "1rem");
    assert!(copy.important);
    assert_eq!(copy.source_file(), Some("src/app.css"));
}

// ============================================================================
// AT-RULE WALKING
// ============================================================================

#[test]
fn walk_at_rules_filters_by_name() {
    let mut sheet = sample().with_at_rule(
        AtRule::new("supports", "(display: grid)")
            .with_at_rule(AtRule::new("media", "print").with_rule(Rule::new(".c"))),
    );
    let mut params = Vec::new();
    sheet.walk_at_rules("media", |at_rule| params.push(at_rule.params.clone()));

    assert_eq!(params, ["(min-width: 768px)", "print"]);
}

#[test]
fn walk_at_rules_allows_mutation() {
    let mut sheet = sample();
    sheet.walk_at_rules("media", |at_rule| at_rule.params = "screen".to_string());

    let media = sheet.nodes[1].as_at_rule().unwrap();
    assert_eq!(media.params, "screen");
}

// ============================================================================
// PRINTING
// ============================================================================

#[test]
fn prints_nested_sheet() {
    insta::assert_snapshot!(sample().to_string().trim_end(), @r"
    .a {
        margin: 8px;
        color: red;
    }
    @media (min-width: 768px) {
        .b {
            padding: 4px;
        }
    }
    @font-face {
        font-family: x;
    }
    ");
}

#[test]
fn prints_important_and_blockless_at_rules() {
    let sheet = StyleSheet::new()
        .with_at_rule(AtRule::new("import", "url(base.css)"))
        .with_rule(Rule::new("p").with_decl(Declaration::new("font-size", "12px").important()));

    assert_eq!(
        sheet.to_string(),
        "@import url(base.css);\np {\n    font-size: 12px !important;\n}\n"
    );
}
