// Copyright 2026 the Raiment Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render targets.
//!
//! A [`RenderTarget`] names what a styled unit ultimately renders as: an
//! element tag, another styled unit, or an opaque external render
//! function. Dispatch is by pattern match; there is no runtime shape
//! probing.

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use crate::element::Element;
use crate::props::Props;
use crate::styled::Styled;

/// An external render function: consumes the forwarded props (with the
/// final class list already merged in) and builds the element itself.
pub type RenderFn = Rc<dyn Fn(Props) -> Element>;

/// What a styled unit renders as.
#[derive(Clone)]
pub enum RenderTarget {
    /// An element tag name, e.g. `"button"`.
    Tag(String),
    /// Another styled unit; rendering delegates through it.
    Styled(Styled),
    /// An opaque external renderable.
    External(RenderFn),
}

impl RenderTarget {
    /// Creates a tag target.
    #[must_use]
    pub fn tag(name: impl Into<String>) -> Self {
        Self::Tag(name.into())
    }

    /// Creates an external target from a render function.
    #[must_use]
    pub fn external(render: impl Fn(Props) -> Element + 'static) -> Self {
        Self::External(Rc::new(render))
    }

    /// Returns the tag name if this is a tag target.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Tag(name) => Some(name),
            _ => None,
        }
    }
}

impl From<&str> for RenderTarget {
    fn from(name: &str) -> Self {
        Self::tag(name)
    }
}

impl From<String> for RenderTarget {
    fn from(name: String) -> Self {
        Self::Tag(name)
    }
}

impl From<&Styled> for RenderTarget {
    fn from(styled: &Styled) -> Self {
        Self::Styled(styled.clone())
    }
}

impl From<Styled> for RenderTarget {
    fn from(styled: Styled) -> Self {
        Self::Styled(styled)
    }
}

impl fmt::Debug for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(name) => f.debug_tuple("Tag").field(name).finish(),
            Self::Styled(styled) => f.debug_tuple("Styled").field(styled).finish(),
            Self::External(_) => f
                .debug_tuple("External")
                .field(&"dyn Fn(Props) -> Element")
                .finish(),
        }
    }
}
