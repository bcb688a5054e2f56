// Copyright 2026 the Raiment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory render output.
//!
//! [`Element`] is the host-side value a render produces: a tag name, a
//! class list, and ordered attributes. It stands in for whatever node a
//! hosting framework would create, which keeps the binder testable
//! without one.

use alloc::string::String;
use alloc::vec::Vec;

use raiment_variants::ClassList;

use crate::props::Props;

/// A rendered element: tag, classes, and ordered attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: ClassList,
    attrs: Vec<(String, String)>,
}

impl Element {
    /// Creates an element with the given tag and no classes or attributes.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: ClassList::new(),
            attrs: Vec::new(),
        }
    }

    /// Appends classes.
    #[must_use]
    pub fn with_class(mut self, classes: &str) -> Self {
        self.classes.append(classes);
        self
    }

    /// Sets an attribute, replacing any earlier value in place.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter().position(|(n, _)| *n == name) {
            Some(idx) => self.attrs[idx].1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Applies a property bag the way a spread would: the bag's class
    /// list is appended and its entries become attributes.
    ///
    /// This is the usual way an external render function forwards the
    /// props it was handed onto the element it builds.
    #[must_use]
    pub fn with_props(mut self, props: &Props) -> Self {
        self.classes.append(props.class_list().as_str());
        for (name, value) in props.entries() {
            self = self.with_attr(name, value);
        }
        self
    }

    /// Returns the tag name.
    #[must_use]
    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the class list.
    #[must_use]
    #[inline]
    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    /// Returns `true` if `token` appears in the class list.
    #[must_use]
    pub fn has_class(&self, token: &str) -> bool {
        self.classes.contains_token(token)
    }

    /// Returns the value of an attribute, if set.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns an iterator over attributes, in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.attrs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
