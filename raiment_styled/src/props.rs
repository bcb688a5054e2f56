// Copyright 2026 the Raiment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-time property bags.
//!
//! A [`Props`] value carries everything a caller hands a styled unit for
//! one render: an optional render-target override, an optional caller
//! class list, and ordered name→value entries. The styled unit decides
//! which entries select variants and which pass through.

use alloc::string::String;
use alloc::vec::Vec;

use raiment_variants::ClassList;

use crate::target::RenderTarget;

/// The property bag for one render of a styled unit.
///
/// Entries keep insertion order; setting a name again replaces its value
/// in place. `Props` makes no distinction between variant selections and
/// pass-through attributes; that split belongs to the styled unit, which
/// knows its declared axes.
///
/// # Example
///
/// ```rust
/// use raiment_styled::Props;
///
/// let props = Props::new()
///     .set("size", "lg")
///     .set("data-testid", "anchor")
///     .class("mx-auto");
///
/// assert_eq!(props.get("size"), Some("lg"));
/// assert_eq!(props.class_list().as_str(), "mx-auto");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Props {
    target: Option<RenderTarget>,
    class: ClassList,
    entries: Vec<(String, String)>,
}

impl Props {
    /// Creates an empty property bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_entries(entries: Vec<(String, String)>) -> Self {
        Self {
            target: None,
            class: ClassList::new(),
            entries,
        }
    }

    /// Sets a named property.
    ///
    /// A name that was already set is replaced in place; new names
    /// append in order.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter().position(|(n, _)| *n == name) {
            Some(idx) => self.entries[idx].1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Appends caller-supplied classes.
    ///
    /// These are merged after the styled unit's resolved classes.
    #[must_use]
    pub fn class(mut self, classes: &str) -> Self {
        self.class.append(classes);
        self
    }

    /// Overrides the render target for this render.
    #[must_use]
    pub fn render_as(mut self, target: impl Into<RenderTarget>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Returns the value of a named property, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the caller-supplied class list (possibly empty).
    #[must_use]
    pub fn class_list(&self) -> &ClassList {
        &self.class
    }

    /// Returns the render-target override, if any.
    #[must_use]
    pub fn target_override(&self) -> Option<&RenderTarget> {
        self.target.as_ref()
    }

    /// Returns an iterator over the named entries, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub(crate) fn into_parts(self) -> (Option<RenderTarget>, ClassList, Vec<(String, String)>) {
        (self.target, self.class, self.entries)
    }
}
