// Copyright 2026 the Raiment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compound rules: extra classes for combinations of variant values.
//!
//! A [`CompoundRule`] pairs a set of per-axis constraints with a payload
//! [`ClassList`]. Rules are evaluated against *effective* values (explicit
//! selection layered over defaults), in authored order, and every matching
//! rule contributes its payload.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::iter::FromIterator;

use smallvec::SmallVec;

use crate::class_list::ClassList;
use crate::selection::EffectiveValues;

/// Inline capacity for constraint lists.
///
/// Most compound rules constrain two or three axes, so this avoids heap
/// allocation in the common case.
const INLINE_CAPACITY: usize = 4;

/// An owned, sorted, deduplicated set of variant value names.
///
/// A scalar constraint is a singleton set; membership is O(log n).
///
/// # Example
///
/// ```rust
/// use raiment_variants::ValueSet;
///
/// let set = ValueSet::from(["red", "blue", "red"]);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("blue"));
/// assert!(!set.contains("green"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueSet(Box<[String]>);

impl Default for ValueSet {
    fn default() -> Self {
        Self(Vec::new().into_boxed_slice())
    }
}

impl ValueSet {
    /// Constructs a set from an iterator, sorting and deduplicating.
    #[must_use]
    pub fn from_values<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values: Vec<String> = iter.into_iter().map(Into::into).collect();
        values.sort();
        values.dedup();
        Self(values.into_boxed_slice())
    }

    /// Constructs a singleton set.
    #[must_use]
    pub fn single(value: impl Into<String>) -> Self {
        Self(Vec::from([value.into()]).into_boxed_slice())
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of values in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the set as a sorted slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Returns `true` if this set contains the given value.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.0.binary_search_by(|v| v.as_str().cmp(value)).is_ok()
    }
}

impl From<&str> for ValueSet {
    fn from(value: &str) -> Self {
        Self::single(value)
    }
}

impl From<String> for ValueSet {
    fn from(value: String) -> Self {
        Self::single(value)
    }
}

impl<const N: usize> From<[&str; N]> for ValueSet {
    fn from(values: [&str; N]) -> Self {
        Self::from_values(values)
    }
}

impl From<&[&str]> for ValueSet {
    fn from(values: &[&str]) -> Self {
        Self::from_values(values.iter().copied())
    }
}

impl<S: Into<String>> FromIterator<S> for ValueSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

/// Extra classes applied when a combination of axis values is active.
///
/// Each constraint names an axis and the set of values that satisfy it.
/// A rule matches iff every constrained axis's effective value is a
/// member of that axis's set; axes the rule does not mention are
/// unconstrained. An axis whose effective value is absent fails any
/// constraint on it.
///
/// # Example
///
/// ```rust
/// use raiment_variants::{CompoundRule, Selection, VariantConfigBuilder};
///
/// let config = VariantConfigBuilder::new()
///     .variant("size", "lg", "text-lg")
///     .variant("color", "red", "text-red-500")
///     .compound(
///         CompoundRule::new("bg-red-500")
///             .when("size", "lg")
///             .when("color", ["red", "blue"]),
///     )
///     .build();
///
/// let hit = config.resolve(&Selection::new(&[("size", "lg"), ("color", "red")]));
/// assert!(hit.contains_token("bg-red-500"));
///
/// let miss = config.resolve(&Selection::new(&[("size", "lg")]));
/// assert!(!miss.contains_token("bg-red-500"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompoundRule {
    when: SmallVec<[(String, ValueSet); INLINE_CAPACITY]>,
    classes: ClassList,
}

impl CompoundRule {
    /// Creates a rule with the given payload classes and no constraints.
    ///
    /// An unconstrained rule matches every selection.
    #[must_use]
    pub fn new(classes: impl Into<ClassList>) -> Self {
        Self {
            when: SmallVec::new(),
            classes: classes.into(),
        }
    }

    /// Adds a constraint on `axis`.
    ///
    /// Accepts a single value or a set of alternatives. Constraining an
    /// axis that is already constrained replaces the earlier set.
    #[must_use]
    pub fn when(mut self, axis: impl Into<String>, values: impl Into<ValueSet>) -> Self {
        let axis = axis.into();
        let values = values.into();
        match self.when.iter().position(|(name, _)| *name == axis) {
            Some(idx) => self.when[idx].1 = values,
            None => self.when.push((axis, values)),
        }
        self
    }

    /// Returns the payload classes.
    #[must_use]
    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    /// Returns an iterator over the constraints, in authored order.
    pub fn constraints(&self) -> impl Iterator<Item = (&str, &ValueSet)> + '_ {
        self.when.iter().map(|(axis, set)| (axis.as_str(), set))
    }

    /// Returns `true` if every constrained axis's effective value is a
    /// member of its constraint set.
    #[must_use]
    pub fn matches(&self, values: &EffectiveValues<'_>) -> bool {
        self.when.iter().all(|(axis, set)| {
            values
                .get(axis)
                .is_some_and(|value| set.contains(value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Selection;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    fn defaults(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(a, v)| (a.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn value_set_sorts_and_dedups() {
        let set = ValueSet::from_values(["c", "a", "c", "b"]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.as_slice(), ["a", "b", "c"]);
        assert!(set.contains("b"));
        assert!(!set.contains("d"));
    }

    #[test]
    fn value_set_singleton() {
        let set = ValueSet::from("lg");
        assert_eq!(set.len(), 1);
        assert!(set.contains("lg"));
        assert!(!set.contains("sm"));
    }

    #[test]
    fn unconstrained_rule_matches_anything() {
        let rule = CompoundRule::new("x");
        let empty = defaults(&[]);
        let values = EffectiveValues::new(Selection::EMPTY, &empty);
        assert!(rule.matches(&values));
    }

    #[test]
    fn rule_matches_on_all_constraints() {
        let rule = CompoundRule::new("bg-red-500")
            .when("size", "lg")
            .when("color", "red");

        let empty = defaults(&[]);

        let hit = [("size", "lg"), ("color", "red")];
        assert!(rule.matches(&EffectiveValues::new(Selection::new(&hit), &empty)));

        let miss = [("size", "lg"), ("color", "blue")];
        assert!(!rule.matches(&EffectiveValues::new(Selection::new(&miss), &empty)));

        let partial = [("size", "lg")];
        assert!(!rule.matches(&EffectiveValues::new(Selection::new(&partial), &empty)));
    }

    #[test]
    fn rule_matches_set_membership() {
        let rule = CompoundRule::new("MATCH").when("color", ["red", "blue"]);
        let empty = defaults(&[]);

        for color in ["red", "blue"] {
            let entries = [("color", color)];
            assert!(
                rule.matches(&EffectiveValues::new(Selection::new(&entries), &empty)),
                "expected {color} to match"
            );
        }

        let entries = [("color", "green")];
        assert!(!rule.matches(&EffectiveValues::new(Selection::new(&entries), &empty)));
    }

    #[test]
    fn rule_sees_defaults_through_effective_values() {
        let rule = CompoundRule::new("MATCH")
            .when("size", "lg")
            .when("color", "red");

        let defaults = defaults(&[("size", "lg"), ("color", "red")]);
        assert!(rule.matches(&EffectiveValues::new(Selection::EMPTY, &defaults)));

        // An explicit selection overrides the default out of the match.
        let entries = [("color", "blue")];
        assert!(!rule.matches(&EffectiveValues::new(Selection::new(&entries), &defaults)));
    }

    #[test]
    fn when_replaces_existing_constraint() {
        let rule = CompoundRule::new("x").when("size", "sm").when("size", "lg");
        let empty = defaults(&[]);

        let entries = [("size", "lg")];
        assert!(rule.matches(&EffectiveValues::new(Selection::new(&entries), &empty)));

        let entries = [("size", "sm")];
        assert!(!rule.matches(&EffectiveValues::new(Selection::new(&entries), &empty)));
    }
}
