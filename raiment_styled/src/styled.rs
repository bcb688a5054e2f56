// Copyright 2026 the Raiment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled units.
//!
//! A [`Styled`] binds one fully merged [`VariantConfig`] to one
//! [`RenderTarget`]. Composition happens in [`StyledBuilder`]: a styled
//! unit used as the primary target contributes its configuration as the
//! merge parent and its target as the default target, and trailing
//! pieces fold over it left to right. The result is flattened eagerly,
//! so rendering never re-merges.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use smallvec::SmallVec;

use raiment_variants::{ClassList, Selection, VariantConfig, VariantConfigBuilder};

use crate::element::Element;
use crate::props::Props;
use crate::target::RenderTarget;

#[derive(Debug)]
struct StyledData {
    target: RenderTarget,
    config: VariantConfig,
}

/// A styled unit: a render target plus a flattened variant configuration.
///
/// Styled units are immutable after creation and cheap to clone (`Rc`).
/// Use [`StyledBuilder`] to construct them.
///
/// # Example
///
/// ```rust
/// use raiment_styled::{Props, StyledBuilder};
/// use raiment_variants::VariantConfigBuilder;
///
/// let button = StyledBuilder::new("button")
///     .class("bg-blue-500")
///     .config(
///         VariantConfigBuilder::new()
///             .variant("size", "sm", "text-sm")
///             .variant("size", "lg", "text-lg")
///             .default_variant("size", "sm")
///             .build(),
///     )
///     .build();
///
/// let element = button.render(Props::new().set("size", "lg"));
/// assert_eq!(element.tag(), "button");
/// assert!(element.has_class("bg-blue-500"));
/// assert!(element.has_class("text-lg"));
/// ```
#[derive(Clone, Debug)]
pub struct Styled {
    inner: Rc<StyledData>,
}

impl Styled {
    /// Returns the default render target.
    #[must_use]
    #[inline]
    pub fn target(&self) -> &RenderTarget {
        &self.inner.target
    }

    /// Returns the fully merged configuration.
    ///
    /// This is the introspection surface: every string piece folded at
    /// creation appears in the configuration's base, and inherited
    /// axes, defaults, and compound rules are all visible.
    #[must_use]
    #[inline]
    pub fn config(&self) -> &VariantConfig {
        &self.inner.config
    }

    /// Resolves a selection against this unit's configuration without
    /// rendering.
    #[must_use]
    pub fn class_name(&self, selection: &Selection<'_>) -> ClassList {
        self.inner.config.resolve(selection)
    }

    /// Renders this unit with the given property bag.
    ///
    /// Entries whose names match declared axes select variants; all
    /// other entries pass through unchanged. The caller's class list is
    /// appended after the resolved classes. An `as` override on the
    /// props replaces the default render target:
    ///
    /// - a tag override renders that tag with the computed classes;
    /// - a styled override delegates: this unit's computed classes
    ///   travel down as the delegated props' class list, and the inner
    ///   unit's own resolution is authoritative for its axes (no
    ///   double application of this unit's variants);
    /// - an external override receives the remaining props, final
    ///   classes included, and builds the element itself.
    #[must_use]
    pub fn render(&self, props: Props) -> Element {
        let (target_override, caller_class, entries) = props.into_parts();

        // Split the bag by declared axis names.
        let axes: HashSet<&str> = self.inner.config.axes().map(|axis| axis.name()).collect();

        let mut classes = {
            let pairs: SmallVec<[(&str, &str); 8]> = entries
                .iter()
                .filter(|(name, _)| axes.contains(name.as_str()))
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect();
            self.inner.config.resolve(&Selection::new(&pairs))
        };
        classes.append(caller_class.as_str());

        let passthrough: Vec<(String, String)> = entries
            .into_iter()
            .filter(|(name, _)| !axes.contains(name.as_str()))
            .collect();

        let target = match target_override {
            Some(target) => target,
            None => self.inner.target.clone(),
        };

        match target {
            RenderTarget::Tag(tag) => {
                let mut element = Element::new(tag).with_class(classes.as_str());
                for (name, value) in passthrough {
                    element = element.with_attr(name, value);
                }
                element
            }
            RenderTarget::Styled(inner) => {
                inner.render(Props::from_entries(passthrough).class(classes.as_str()))
            }
            RenderTarget::External(render) => {
                render(Props::from_entries(passthrough).class(classes.as_str()))
            }
        }
    }
}

#[derive(Debug)]
enum Piece {
    Classes(String),
    Config(VariantConfig),
}

/// Builder for constructing [`Styled`] units.
///
/// The primary argument is the render target. A `&Styled` primary
/// inherits both that unit's target and its configuration as the merge
/// parent. Trailing pieces (raw classes via [`class`](Self::class),
/// configurations via [`config`](Self::config) or
/// [`styled`](Self::styled)) fold left to right with
/// [`VariantConfig::merged`] semantics.
///
/// # Example
///
/// ```rust
/// use raiment_styled::{Props, StyledBuilder};
/// use raiment_variants::VariantConfigBuilder;
///
/// let link = StyledBuilder::new("a").class("underline").build();
///
/// // Inherit `link`'s target and classes, add an axis.
/// let nav_link = StyledBuilder::new(&link)
///     .config(
///         VariantConfigBuilder::new()
///             .variant("tone", "muted", "text-gray-500")
///             .build(),
///     )
///     .build();
///
/// let element = nav_link.render(Props::new().set("tone", "muted"));
/// assert_eq!(element.tag(), "a");
/// assert!(element.has_class("underline"));
/// assert!(element.has_class("text-gray-500"));
/// ```
#[derive(Debug)]
pub struct StyledBuilder {
    target: RenderTarget,
    parent: VariantConfig,
    pieces: Vec<Piece>,
}

impl StyledBuilder {
    /// Creates a builder for the given render target.
    ///
    /// A styled primary target is flattened immediately: its target
    /// becomes this builder's target and its configuration becomes the
    /// merge parent.
    #[must_use]
    pub fn new(target: impl Into<RenderTarget>) -> Self {
        match target.into() {
            RenderTarget::Styled(parent) => Self {
                target: parent.target().clone(),
                parent: parent.config().clone(),
                pieces: Vec::new(),
            },
            target => Self {
                target,
                parent: VariantConfig::default(),
                pieces: Vec::new(),
            },
        }
    }

    /// Adds a raw class piece (a base-only configuration).
    #[must_use]
    pub fn class(mut self, classes: &str) -> Self {
        self.pieces.push(Piece::Classes(String::from(classes)));
        self
    }

    /// Adds a configuration piece.
    #[must_use]
    pub fn config(mut self, config: VariantConfig) -> Self {
        self.pieces.push(Piece::Config(config));
        self
    }

    /// Adds another styled unit's full configuration as a piece.
    ///
    /// Only the configuration is inherited; the other unit's render
    /// target is ignored.
    #[must_use]
    pub fn styled(mut self, other: &Styled) -> Self {
        self.pieces.push(Piece::Config(other.config().clone()));
        self
    }

    /// Builds the styled unit, folding all pieces into one flattened
    /// configuration.
    #[must_use]
    pub fn build(self) -> Styled {
        let mut config = self.parent;
        for piece in self.pieces {
            let own = match piece {
                Piece::Classes(classes) => VariantConfigBuilder::new().base(&classes).build(),
                Piece::Config(config) => config,
            };
            config = VariantConfig::merged(&config, &own);
        }
        Styled {
            inner: Rc::new(StyledData {
                target: self.target,
                config,
            }),
        }
    }
}
