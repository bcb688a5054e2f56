// Copyright 2026 the Raiment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=raiment_variants --heading-base-level=0

//! Raiment Variants: variant class-list configuration and resolution.
//!
//! This crate is the pure core of Raiment: given a declarative
//! [`VariantConfig`] (base classes, a table of variant axes, default
//! variants, and compound rules) and a per-call [`Selection`], it produces
//! the merged [`ClassList`]. It knows nothing about elements, components,
//! or any rendering framework; `raiment_styled` layers those on top.
//!
//! ## Core Concepts
//!
//! ### Configurations
//!
//! A [`VariantConfig`] is authored once via [`VariantConfigBuilder`] and
//! immutable afterwards. Class names are opaque tokens; the crate only
//! performs ordered, set-like merges over them.
//!
//! ```rust
//! use raiment_variants::{Selection, VariantConfigBuilder};
//!
//! let button = VariantConfigBuilder::new()
//!     .base("bg-blue-500")
//!     .variant("size", "sm", "text-sm")
//!     .variant("size", "lg", "text-lg")
//!     .variant("color", "red", "text-red-500")
//!     .default_variant("size", "sm")
//!     .build();
//!
//! let classes = button.resolve(&Selection::new(&[("color", "red")]));
//! assert_eq!(classes.as_str(), "bg-blue-500 text-sm text-red-500");
//! ```
//!
//! ### Compound rules
//!
//! A [`CompoundRule`] contributes extra classes when a combination of
//! axis values is active. Rules are evaluated against *effective* values
//! (explicit selection layered over defaults), and a constraint may name
//! a set of acceptable values:
//!
//! ```rust
//! use raiment_variants::{CompoundRule, Selection, VariantConfigBuilder};
//!
//! let button = VariantConfigBuilder::new()
//!     .variant("size", "lg", "text-lg")
//!     .variant("color", "red", "text-red-500")
//!     .variant("color", "blue", "text-blue-500")
//!     .default_variant("size", "lg")
//!     .compound(
//!         CompoundRule::new("shadow-lg")
//!             .when("size", "lg")
//!             .when("color", ["red", "blue"]),
//!     )
//!     .build();
//!
//! // The default `size` plus an explicit set member match the rule.
//! let classes = button.resolve(&Selection::new(&[("color", "blue")]));
//! assert!(classes.contains_token("shadow-lg"));
//! ```
//!
//! ### Composition
//!
//! [`VariantConfig::merged`] composes one configuration over another:
//! bases concatenate parent-first, axes and defaults shallow-merge with
//! the own side winning per axis, and compound rules concatenate. Chains
//! of merges flatten eagerly, so styled units built on styled units pay
//! the merge cost once at creation, not per resolution.
//!
//! ```rust
//! use raiment_variants::{Selection, VariantConfig, VariantConfigBuilder};
//!
//! let anchor = VariantConfigBuilder::new()
//!     .base("underline")
//!     .variant("color", "blue", "text-blue-500")
//!     .build();
//! let quiet = VariantConfigBuilder::new()
//!     .base("no-underline")
//!     .variant("color", "blue", "text-blue-300")
//!     .build();
//!
//! let merged = VariantConfig::merged(&anchor, &quiet);
//! let classes = merged.resolve(&Selection::new(&[("color", "blue")]));
//! assert_eq!(classes.as_str(), "underline no-underline text-blue-300");
//! ```
//!
//! ## Error Handling
//!
//! Resolution and merge are total: unknown axes, unknown values, and
//! missing defaults all degrade to "contributes no class". Nothing in
//! this crate returns `Result` or panics on misuse.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod class_list;
mod compound;
mod config;
mod resolve;
mod selection;

pub use class_list::ClassList;
pub use compound::{CompoundRule, ValueSet};
pub use config::{Axis, VariantConfig, VariantConfigBuilder};
pub use selection::{EffectiveValues, Selection};
