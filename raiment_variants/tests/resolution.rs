// Copyright 2026 the Raiment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `raiment_variants` crate.
//!
//! These exercise full configurations end to end: base plus axis plus
//! compound interaction, default layering, and introspection of the
//! authored configuration.

use raiment_variants::{CompoundRule, Selection, VariantConfig, VariantConfigBuilder};

fn button() -> VariantConfigBuilder {
    VariantConfigBuilder::new()
        .base("bg-blue-500")
        .variant("size", "sm", "text-sm")
        .variant("size", "md", "text-md")
        .variant("size", "lg", "text-lg")
        .variant("color", "red", "text-red-500")
        .variant("color", "blue", "text-blue-500")
        .variant("color", "green", "text-green-500")
}

#[test]
fn applies_compound_variants() {
    let config = button()
        .compound(
            CompoundRule::new("bg-red-500")
                .when("size", "lg")
                .when("color", "red"),
        )
        .build();

    let hit = config.resolve(&Selection::new(&[("size", "lg"), ("color", "red")]));
    assert!(hit.contains_token("bg-red-500"));

    let miss = config.resolve(&Selection::new(&[("size", "lg"), ("color", "blue")]));
    assert!(!miss.contains_token("bg-red-500"));
}

#[test]
fn applies_compound_variants_with_defaults() {
    let config = button()
        .default_variant("size", "lg")
        .default_variant("color", "red")
        .compound(
            CompoundRule::new("bg-red-500")
                .when("size", "lg")
                .when("color", "red"),
        )
        .build();

    // No explicit selection: the defaults complete the combination.
    assert!(config.resolve(&Selection::EMPTY).contains_token("bg-red-500"));

    let overridden = config.resolve(&Selection::new(&[("size", "lg"), ("color", "blue")]));
    assert!(!overridden.contains_token("bg-red-500"));
}

#[test]
fn applies_compound_variants_with_defaults_and_explicit_values() {
    let config = button()
        .default_variant("size", "lg")
        .default_variant("color", "red")
        .compound(
            CompoundRule::new("bg-red-500")
                .when("size", "lg")
                .when("color", "red"),
        )
        .compound(
            CompoundRule::new("bg-blue-500")
                .when("size", "sm")
                .when("color", "blue"),
        )
        .build();

    // size=md breaks the first combination even though color defaults to red.
    let first_miss = config.resolve(&Selection::new(&[("size", "md")]));
    assert!(!first_miss.contains_token("bg-red-500"));

    let second_hit = config.resolve(&Selection::new(&[("size", "sm"), ("color", "blue")]));
    assert!(second_hit.contains_token("bg-blue-500"));
}

#[test]
fn array_compound_variants_match_membership() {
    let config = button()
        .default_variant("size", "lg")
        .default_variant("color", "red")
        .compound(
            CompoundRule::new("MATCH")
                .when("size", "lg")
                .when("color", ["red", "blue"]),
        )
        .build();

    let explicit = config.resolve(&Selection::new(&[("size", "lg"), ("color", "blue")]));
    assert!(explicit.contains_token("MATCH"));
}

#[test]
fn array_compound_variants_match_through_defaults() {
    let config = button()
        .default_variant("size", "lg")
        .default_variant("color", "red")
        .compound(
            CompoundRule::new("MATCH")
                .when("size", "lg")
                .when("color", ["red", "blue"]),
        )
        .build();

    assert!(config.resolve(&Selection::EMPTY).contains_token("MATCH"));
}

#[test]
fn defaults_are_equivalent_to_explicit_selection() {
    let config = button()
        .default_variant("size", "lg")
        .default_variant("color", "red")
        .build();

    let defaulted = config.resolve(&Selection::new(&[("color", "green")]));
    let explicit = config.resolve(&Selection::new(&[("color", "green"), ("size", "lg")]));
    assert_eq!(defaulted, explicit);
}

#[test]
fn introspection_reports_authored_configuration() {
    let config = button()
        .default_variant("size", "lg")
        .default_variant("color", "red")
        .compound(
            CompoundRule::new("MATCH")
                .when("size", "lg")
                .when("color", ["red", "blue"]),
        )
        .build();

    assert_eq!(config.base().as_str(), "bg-blue-500");

    let size = config.axis("size").expect("size axis is declared");
    let sizes: Vec<_> = size.values().map(|(value, _)| value).collect();
    assert_eq!(sizes, ["sm", "md", "lg"]);
    assert_eq!(size.get("md").unwrap().as_str(), "text-md");

    let color = config.axis("color").expect("color axis is declared");
    assert_eq!(color.get("red").unwrap().as_str(), "text-red-500");

    assert_eq!(config.default_of("size"), Some("lg"));
    assert_eq!(config.default_of("color"), Some("red"));

    let rules: Vec<_> = config.compound_rules().collect();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].classes().as_str(), "MATCH");
    let constraints: Vec<_> = rules[0].constraints().map(|(axis, _)| axis).collect();
    assert_eq!(constraints, ["size", "color"]);
}

#[test]
fn merged_chain_behaves_like_flat_authoring() {
    let a = VariantConfigBuilder::new()
        .base("py-2")
        .variant("color", "blue", "bg-blue-100")
        .build();
    let b = VariantConfigBuilder::new()
        .variant("size", "sm", "text-sm")
        .variant("size", "lg", "text-lg")
        .build();
    let c = VariantConfigBuilder::new().base("rounded-sm").build();

    let merged = VariantConfig::merged(&VariantConfig::merged(&a, &b), &c);
    let classes = merged.resolve(&Selection::new(&[("color", "blue"), ("size", "lg")]));

    assert_eq!(
        classes.as_str(),
        "py-2 rounded-sm bg-blue-100 text-lg"
    );
}
