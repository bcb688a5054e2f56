// Copyright 2026 the Raiment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Variant configurations and their composition.
//!
//! A [`VariantConfig`] is the unit of authoring: base classes, a table of
//! variant axes, default variants, and compound rules. Configurations are
//! immutable after creation and cheap to clone; composition via
//! [`VariantConfig::merged`] always produces a new configuration and never
//! touches its inputs.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::class_list::ClassList;
use crate::compound::CompoundRule;

/// One variant axis: a name plus its value→classes table.
///
/// Values keep authored order; rewriting a value in the builder replaces
/// its classes in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Axis {
    pub(crate) name: String,
    pub(crate) values: Vec<(String, ClassList)>,
}

impl Axis {
    /// Returns the axis name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the classes for `value`, if declared.
    #[must_use]
    pub fn get(&self, value: &str) -> Option<&ClassList> {
        self.values
            .iter()
            .find(|(name, _)| name == value)
            .map(|(_, classes)| classes)
    }

    /// Returns `true` if `value` is declared on this axis.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.get(value).is_some()
    }

    /// Returns the number of declared values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if this axis declares no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns an iterator over `(value, classes)` in authored order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &ClassList)> + '_ {
        self.values
            .iter()
            .map(|(name, classes)| (name.as_str(), classes))
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ConfigData {
    pub(crate) base: ClassList,
    pub(crate) axes: Vec<Axis>,
    pub(crate) defaults: Vec<(String, String)>,
    pub(crate) compounds: Vec<CompoundRule>,
}

/// A complete variant configuration.
///
/// Configurations are immutable after creation. Use
/// [`VariantConfigBuilder`] to construct them, and
/// [`VariantConfig::merged`] to compose one over another.
///
/// # Memory Layout
///
/// Internally, `VariantConfig` wraps an `Rc<ConfigData>`, making cloning
/// cheap (just incrementing a reference count). A styled unit built from
/// this configuration shares it rather than copying it.
///
/// # Example
///
/// ```rust
/// use raiment_variants::{Selection, VariantConfigBuilder};
///
/// let config = VariantConfigBuilder::new()
///     .base("bg-blue-500")
///     .variant("size", "sm", "text-sm")
///     .variant("size", "lg", "text-lg")
///     .default_variant("size", "sm")
///     .build();
///
/// let classes = config.resolve(&Selection::EMPTY);
/// assert_eq!(classes.as_str(), "bg-blue-500 text-sm");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantConfig {
    inner: Rc<ConfigData>,
}

impl VariantConfig {
    /// Returns the base classes.
    #[must_use]
    #[inline]
    pub fn base(&self) -> &ClassList {
        &self.inner.base
    }

    /// Returns an iterator over axes in authored order.
    pub fn axes(&self) -> impl Iterator<Item = &Axis> + '_ {
        self.inner.axes.iter()
    }

    /// Returns the axis named `name`, if declared.
    #[must_use]
    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.inner.axes.iter().find(|axis| axis.name == name)
    }

    /// Returns `true` if an axis named `name` is declared.
    #[must_use]
    pub fn has_axis(&self, name: &str) -> bool {
        self.axis(name).is_some()
    }

    /// Returns the default value for `axis`, if configured.
    #[must_use]
    pub fn default_of(&self, axis: &str) -> Option<&str> {
        self.inner
            .defaults
            .iter()
            .find(|(name, _)| name == axis)
            .map(|(_, value)| value.as_str())
    }

    /// Returns an iterator over `(axis, value)` defaults in authored order.
    pub fn default_variants(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.inner
            .defaults
            .iter()
            .map(|(axis, value)| (axis.as_str(), value.as_str()))
    }

    /// Returns an iterator over compound rules in authored order.
    pub fn compound_rules(&self) -> impl Iterator<Item = &CompoundRule> + '_ {
        self.inner.compounds.iter()
    }

    /// Returns `true` if this configuration contributes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.base.is_empty()
            && self.inner.axes.is_empty()
            && self.inner.defaults.is_empty()
            && self.inner.compounds.is_empty()
    }

    pub(crate) fn defaults(&self) -> &[(String, String)] {
        &self.inner.defaults
    }

    /// Composes `own` over `parent`, producing a new configuration.
    ///
    /// Merge rules:
    ///
    /// - base: parent's tokens, then own's.
    /// - axes: shallow merge. An axis defined in both takes own's value
    ///   table wholesale (no per-value union) and keeps the parent's
    ///   position; axes only in own append in own order.
    /// - default variants: shallow merge, own wins per axis.
    /// - compound rules: parent's rules, then own's. Matching rules from
    ///   both lists still apply.
    ///
    /// Neither input is modified; chains of merges flatten eagerly and
    /// associate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use raiment_variants::{VariantConfig, VariantConfigBuilder};
    ///
    /// let parent = VariantConfigBuilder::new()
    ///     .base("py-2")
    ///     .variant("color", "blue", "bg-blue-100")
    ///     .build();
    /// let own = VariantConfigBuilder::new()
    ///     .base("px-2")
    ///     .variant("size", "lg", "text-lg")
    ///     .build();
    ///
    /// let merged = VariantConfig::merged(&parent, &own);
    /// assert_eq!(merged.base().as_str(), "py-2 px-2");
    /// assert!(merged.has_axis("color"));
    /// assert!(merged.has_axis("size"));
    /// ```
    #[must_use]
    pub fn merged(parent: &Self, own: &Self) -> Self {
        let mut axes = parent.inner.axes.clone();
        for axis in &own.inner.axes {
            match axes.iter().position(|existing| existing.name == axis.name) {
                Some(idx) => axes[idx].values = axis.values.clone(),
                None => axes.push(axis.clone()),
            }
        }

        let mut defaults = parent.inner.defaults.clone();
        for (axis, value) in &own.inner.defaults {
            match defaults.iter().position(|(name, _)| name == axis) {
                Some(idx) => defaults[idx].1 = value.clone(),
                None => defaults.push((axis.clone(), value.clone())),
            }
        }

        let mut compounds = parent.inner.compounds.clone();
        compounds.extend(own.inner.compounds.iter().cloned());

        Self {
            inner: Rc::new(ConfigData {
                base: parent.inner.base.joined(&own.inner.base),
                axes,
                defaults,
                compounds,
            }),
        }
    }
}

impl Default for VariantConfig {
    fn default() -> Self {
        VariantConfigBuilder::new().build()
    }
}

/// Builder for constructing [`VariantConfig`] instances.
///
/// # Example
///
/// ```rust
/// use raiment_variants::{CompoundRule, VariantConfigBuilder};
///
/// let config = VariantConfigBuilder::new()
///     .base("bg-blue-500")
///     .variant("size", "lg", "text-lg")
///     .variant("color", "red", "text-red-500")
///     .default_variant("size", "lg")
///     .compound(
///         CompoundRule::new("bg-red-500")
///             .when("size", "lg")
///             .when("color", "red"),
///     )
///     .build();
///
/// assert!(config.has_axis("size"));
/// assert_eq!(config.default_of("size"), Some("lg"));
/// ```
#[derive(Debug, Default)]
pub struct VariantConfigBuilder {
    base: ClassList,
    axes: Vec<Axis>,
    defaults: Vec<(String, String)>,
    compounds: Vec<CompoundRule>,
}

impl VariantConfigBuilder {
    /// Creates a new empty configuration builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends base classes.
    ///
    /// Multiple calls accumulate in order.
    #[must_use]
    pub fn base(mut self, classes: &str) -> Self {
        self.base.append(classes);
        self
    }

    /// Declares the classes for `value` on `axis`.
    ///
    /// A new axis is appended after existing ones; a new value is
    /// appended after the axis's existing values. Redeclaring a value
    /// replaces its classes in place.
    #[must_use]
    pub fn variant(
        mut self,
        axis: impl Into<String>,
        value: impl Into<String>,
        classes: impl Into<ClassList>,
    ) -> Self {
        let axis = axis.into();
        let value = value.into();
        let classes = classes.into();

        let idx = match self.axes.iter().position(|existing| existing.name == axis) {
            Some(idx) => idx,
            None => {
                self.axes.push(Axis {
                    name: axis,
                    values: Vec::new(),
                });
                self.axes.len() - 1
            }
        };

        let axis = &mut self.axes[idx];
        match axis.values.iter().position(|(name, _)| *name == value) {
            Some(idx) => axis.values[idx].1 = classes,
            None => axis.values.push((value, classes)),
        }
        self
    }

    /// Sets the default value for `axis`.
    ///
    /// Setting a default again replaces the earlier one in place.
    #[must_use]
    pub fn default_variant(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        let axis = axis.into();
        let value = value.into();
        match self.defaults.iter().position(|(name, _)| *name == axis) {
            Some(idx) => self.defaults[idx].1 = value,
            None => self.defaults.push((axis, value)),
        }
        self
    }

    /// Appends a compound rule.
    #[must_use]
    pub fn compound(mut self, rule: CompoundRule) -> Self {
        self.compounds.push(rule);
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> VariantConfig {
        VariantConfig {
            inner: Rc::new(ConfigData {
                base: self.base,
                axes: self.axes,
                defaults: self.defaults,
                compounds: self.compounds,
            }),
        }
    }
}
