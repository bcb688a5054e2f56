// Copyright 2026 the Raiment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raiment Styled: styled units binding variant class-lists to render targets.
//!
//! This crate layers the component side of Raiment over
//! `raiment_variants`: a [`Styled`] unit couples one flattened
//! [`VariantConfig`] with one [`RenderTarget`], renders a property bag
//! into an [`Element`], and composes with other styled units.
//!
//! ## Core Concepts
//!
//! ### Styled units
//!
//! A styled unit is authored once with [`StyledBuilder`] and immutable
//! afterwards. Trailing pieces (classes, configurations, other units'
//! configurations) fold left to right into one configuration at build
//! time:
//!
//! ```rust
//! use raiment_styled::{Props, StyledBuilder};
//! use raiment_variants::VariantConfigBuilder;
//!
//! let button = StyledBuilder::new("button")
//!     .class("bg-blue-500")
//!     .config(
//!         VariantConfigBuilder::new()
//!             .variant("size", "sm", "text-sm")
//!             .variant("size", "lg", "text-lg")
//!             .build(),
//!     )
//!     .build();
//!
//! let element = button.render(Props::new().set("size", "lg").set("type", "submit"));
//! assert_eq!(element.tag(), "button");
//! assert_eq!(element.classes().as_str(), "bg-blue-500 text-lg");
//! assert_eq!(element.attr("type"), Some("submit"));
//! ```
//!
//! ### Composition
//!
//! A styled unit passed as the primary target inherits both its render
//! target and its configuration; the chain flattens eagerly so renders
//! never re-merge:
//!
//! ```rust
//! use raiment_styled::{Props, StyledBuilder};
//! use raiment_variants::VariantConfigBuilder;
//!
//! let link = StyledBuilder::new("a").class("underline").build();
//! let quiet_link = StyledBuilder::new(&link)
//!     .config(
//!         VariantConfigBuilder::new()
//!             .variant("tone", "muted", "text-gray-500")
//!             .build(),
//!     )
//!     .build();
//!
//! let element = quiet_link.render(Props::new().set("tone", "muted"));
//! assert_eq!(element.tag(), "a");
//! assert!(element.has_class("underline"));
//! assert!(element.has_class("text-gray-500"));
//! ```
//!
//! ### `as` overrides
//!
//! Props may override the render target per render. Overriding with
//! another styled unit delegates: the outer unit's resolved classes
//! travel down as the delegated class list and the inner unit resolves
//! its own axes from the remaining props:
//!
//! ```rust
//! use raiment_styled::{Props, StyledBuilder};
//!
//! let label = StyledBuilder::new("span").class("font-bold").build();
//! let chip = StyledBuilder::new("button").class("rounded-full").build();
//!
//! let element = label.render(Props::new().render_as(&chip));
//! assert_eq!(element.tag(), "button");
//! assert!(element.has_class("rounded-full"));
//! assert!(element.has_class("font-bold"));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod element;
mod props;
mod styled;
mod target;

pub use element::Element;
pub use props::Props;
pub use styled::{Styled, StyledBuilder};
pub use target::{RenderFn, RenderTarget};

// Re-exported so downstream users can author configurations without
// depending on the core crate directly.
pub use raiment_variants::{
    Axis, ClassList, CompoundRule, EffectiveValues, Selection, ValueSet, VariantConfig,
    VariantConfigBuilder,
};
