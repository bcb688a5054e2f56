// Copyright 2026 the Raiment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Variant resolution.
//!
//! This module implements [`VariantConfig::resolve`], the deterministic
//! merge of base classes, per-axis classes, and compound-rule payloads
//! for one selection.

use crate::class_list::ClassList;
use crate::config::VariantConfig;
use crate::selection::{EffectiveValues, Selection};

impl VariantConfig {
    /// Returns the effective-value view for `selection` over this
    /// configuration's defaults.
    #[must_use]
    pub fn effective_values<'s>(&'s self, selection: Selection<'s>) -> EffectiveValues<'s> {
        EffectiveValues::new(selection, self.defaults())
    }

    /// Resolves `selection` against this configuration.
    ///
    /// Output order is deterministic:
    ///
    /// 1. Base classes.
    /// 2. Per-axis classes, in authored axis order. The effective value
    ///    for an axis is the explicit selection value if present, else
    ///    the configured default. A value the axis does not declare
    ///    contributes nothing.
    /// 3. Every matching compound rule's payload, in authored rule
    ///    order. Rules match on effective values, so defaults count and
    ///    an explicit selection can override a default out of a match.
    ///
    /// Unknown axes or values never error; they simply contribute no
    /// classes. The call is total and side-effect free.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raiment_variants::{CompoundRule, Selection, VariantConfigBuilder};
    ///
    /// let config = VariantConfigBuilder::new()
    ///     .base("bg-blue-500")
    ///     .variant("size", "sm", "text-sm")
    ///     .variant("size", "lg", "text-lg")
    ///     .variant("color", "red", "text-red-500")
    ///     .variant("color", "blue", "text-blue-500")
    ///     .compound(
    ///         CompoundRule::new("bg-red-500")
    ///             .when("size", "lg")
    ///             .when("color", "red"),
    ///     )
    ///     .build();
    ///
    /// let classes = config.resolve(&Selection::new(&[("size", "lg"), ("color", "red")]));
    /// assert_eq!(classes.as_str(), "bg-blue-500 text-lg text-red-500 bg-red-500");
    /// ```
    #[must_use]
    pub fn resolve(&self, selection: &Selection<'_>) -> ClassList {
        let values = self.effective_values(*selection);

        // 1. Base classes.
        let mut out = self.base().clone();

        // 2. Per-axis classes, in authored axis order.
        for axis in self.axes() {
            let Some(value) = values.get(axis.name()) else {
                continue;
            };
            if let Some(classes) = axis.get(value) {
                out.append(classes.as_str());
            }
        }

        // 3. Compound payloads, in authored rule order.
        for rule in self.compound_rules() {
            if rule.matches(&values) {
                out.append(rule.classes().as_str());
            }
        }

        out
    }
}
