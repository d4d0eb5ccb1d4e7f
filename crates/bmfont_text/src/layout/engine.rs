//! Text layout engine
//!
//! Measures strings and places glyphs for rendering. Handles kerning,
//! character spacing, line breaks and default-character substitution.
//!
//! # Layout Coordinate System
//!
//! - Origin (0, 0) is the top-left corner of the first line
//! - +X axis points right
//! - +Y axis points down, one line height per line break

use crate::error::FontResult;
use crate::font::FontMetrics;

use super::run::GlyphRun;
use super::types::{LayoutEvent, PositionedGlyph, TextSize};

/// Text layout engine bound to one font's metrics
///
/// Holds no state between calls, so one engine (or many engines over the
/// same metrics) can be used from several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine<'a> {
    metrics: &'a FontMetrics,
}

impl<'a> LayoutEngine<'a> {
    /// Create a new text layout engine
    pub const fn new(metrics: &'a FontMetrics) -> Self {
        Self { metrics }
    }

    /// Font metrics used for glyph lookup
    pub const fn metrics(&self) -> &'a FontMetrics {
        self.metrics
    }

    /// Width and height in pixels of `text` when rendered
    ///
    /// Empty text measures as zero without consulting the font.
    ///
    /// # Errors
    ///
    /// [`FontError::UnresolvedCharacter`](crate::FontError::UnresolvedCharacter)
    /// if a character has no glyph and the font has no default character.
    pub fn measure(&self, text: &str) -> FontResult<TextSize> {
        if text.is_empty() {
            return Ok(TextSize::ZERO);
        }

        self.glyphs(text).finish()
    }

    /// Lay out `text`, reporting every glyph and line break in text order
    ///
    /// Returns the same size [`measure`](Self::measure) would for non-empty
    /// text. Empty text still occupies one line.
    ///
    /// # Errors
    ///
    /// [`FontError::UnresolvedCharacter`](crate::FontError::UnresolvedCharacter)
    /// if a character cannot be drawn. The text is checked first, so neither
    /// callback has been called when this error is returned.
    pub fn layout<G, N>(&self, text: &str, mut on_glyph: G, mut on_new_line: N) -> FontResult<TextSize>
    where
        G: FnMut(&PositionedGlyph<'a>),
        N: FnMut(),
    {
        self.metrics.check_text(text)?;

        let mut run = self.glyphs(text);
        for event in run.by_ref() {
            match event? {
                LayoutEvent::Glyph(glyph) => on_glyph(&glyph),
                LayoutEvent::LineBreak => on_new_line(),
            }
        }

        Ok(run.size())
    }

    /// Lay out `text`, reporting every glyph in text order
    ///
    /// # Errors
    ///
    /// Same as [`layout`](Self::layout).
    pub fn layout_glyphs<G>(&self, text: &str, on_glyph: G) -> FontResult<TextSize>
    where
        G: FnMut(&PositionedGlyph<'a>),
    {
        self.layout(text, on_glyph, || {})
    }

    /// Lazily lay out `text` as a single-pass sequence of events
    ///
    /// Unlike [`layout`](Self::layout) the text is not checked up front; an
    /// unresolvable character is reported when the sequence reaches it.
    pub fn glyphs<'t>(&self, text: &'t str) -> GlyphRun<'a, 't> {
        GlyphRun::new(self.metrics, text)
    }
}
