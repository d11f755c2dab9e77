#![forbid(unsafe_code)]

//! Style composition.
//!
//! A [`Style`] is a partial paint instruction: each channel is optional
//! and unset channels fall through to whatever is beneath (an enclosing
//! widget's style, or the terminal default). Styles stay separate from
//! cells so a theme can be described once and merged where it lands.
//! This crate depends on `r72-render` for the color and attribute
//! primitives, not the other way around.

pub use r72_render::cell::{PackedRgba, StyleFlags};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<PackedRgba>,
    pub bg: Option<PackedRgba>,
    pub attrs: StyleFlags,
}

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Replace the attribute set.
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = attrs;
        self
    }

    /// Add attributes to the current set.
    #[must_use]
    pub fn add_attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs |= attrs;
        self
    }

    /// Combine with a fallback: set channels of `self` win, unset ones
    /// come from `fallback`, attribute sets union.
    #[must_use]
    pub fn merge(&self, fallback: &Style) -> Style {
        Style {
            fg: self.fg.or(fallback.fg),
            bg: self.bg.or(fallback.bg),
            attrs: self.attrs | fallback.attrs,
        }
    }

    /// True when the style paints nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }
}
