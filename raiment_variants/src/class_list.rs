// Copyright 2026 the Raiment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered lists of opaque class tokens.
//!
//! This module provides [`ClassList`], the value type flowing through all
//! of Raiment: configuration bases, per-variant payloads, compound-rule
//! payloads, and resolution output.

use alloc::string::String;
use core::fmt;

/// An ordered, whitespace-normalized list of class tokens.
///
/// Tokens are opaque strings; Raiment never inspects their CSS meaning.
/// Construction and [`append`](Self::append) normalize whitespace, so the
/// stored form is always single-space separated with no leading or
/// trailing spaces. Concatenation preserves order and keeps duplicates.
///
/// # Example
///
/// ```rust
/// use raiment_variants::ClassList;
///
/// let mut classes = ClassList::from("  bg-blue-500\ttext-sm ");
/// classes.append("rounded-sm");
///
/// assert_eq!(classes.as_str(), "bg-blue-500 text-sm rounded-sm");
/// assert!(classes.contains_token("text-sm"));
/// assert!(!classes.contains_token("text"));
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassList {
    value: String,
}

impl ClassList {
    /// Creates an empty class list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: String::new(),
        }
    }

    /// Returns `true` if this list has no tokens.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Returns the normalized, space-separated form.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns an iterator over the individual tokens, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.value.split_ascii_whitespace()
    }

    /// Returns `true` if `token` appears in this list.
    ///
    /// Membership is per whole token; `contains_token("text")` does not
    /// match a `text-sm` token.
    #[must_use]
    pub fn contains_token(&self, token: &str) -> bool {
        self.tokens().any(|t| t == token)
    }

    /// Appends the tokens of `classes`, normalizing whitespace.
    ///
    /// Appending an empty or all-whitespace string is a no-op.
    pub fn append(&mut self, classes: &str) {
        for token in classes.split_ascii_whitespace() {
            if !self.value.is_empty() {
                self.value.push(' ');
            }
            self.value.push_str(token);
        }
    }

    /// Returns a new list with `other`'s tokens appended after this one's.
    #[must_use]
    pub fn joined(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.append(other.as_str());
        out
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        let mut out = Self::new();
        out.append(classes);
        out
    }
}

impl From<String> for ClassList {
    fn from(classes: String) -> Self {
        Self::from(classes.as_str())
    }
}

impl fmt::Debug for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClassList").field(&self.value).finish()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
