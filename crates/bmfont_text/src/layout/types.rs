//! Layout output records

use crate::font::Glyph;
use crate::foundation::math::{IVec2, Vec2};

/// Measured extent of laid out text, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextSize {
    /// Width of the widest line
    pub width: i32,
    /// Sum of the line heights
    pub height: i32,
}

impl TextSize {
    /// Zero-sized extent
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Size as a float vector
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

impl From<TextSize> for IVec2 {
    fn from(size: TextSize) -> Self {
        Self::new(size.width, size.height)
    }
}

/// A glyph placed by the layout engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedGlyph<'a> {
    /// Character actually drawn (the default character after substitution)
    pub character: char,
    /// Draw position relative to the text origin, offsets and kerning applied
    pub position: IVec2,
    /// Atlas metrics of the drawn glyph
    pub glyph: &'a Glyph,
    /// Character drawn before this one, if any
    pub previous: Option<char>,
}

/// One step of a [`GlyphRun`](super::GlyphRun)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEvent<'a> {
    /// A glyph to draw
    Glyph(PositionedGlyph<'a>),
    /// The cursor moved to the start of the next line
    LineBreak,
}

impl<'a> LayoutEvent<'a> {
    /// The positioned glyph, if this event draws one
    pub const fn glyph(&self) -> Option<&PositionedGlyph<'a>> {
        match self {
            Self::Glyph(glyph) => Some(glyph),
            Self::LineBreak => None,
        }
    }
}
