//! Immutable glyph, kerning and line metrics for one font
//!
//! [`FontMetrics`] is built once from a parsed [`FontDescription`] and then
//! only read by the layout engine. The configurable values (spacing, line
//! spacing, default character) can still be changed through `&mut self`,
//! so a shared borrow always sees a consistent font.

use std::collections::HashMap;

use crate::config::FontConfig;
use crate::error::{ConfigurationError, FontError, FontResult};

use super::description::{FontDescription, GlyphRecord, KerningRecord};
use super::glyph::Glyph;
use super::kerning::KerningTable;

/// Glyph and kerning lookup for a bitmap font
#[derive(Debug, Clone, PartialEq)]
pub struct FontMetrics {
    glyphs: HashMap<char, Glyph>,
    kerning: KerningTable,
    line_spacing: i32,
    spacing: f32,
    default_character: Option<char>,
    base: i32,
    texture_size: (i32, i32),
    page_count: i32,
}

impl FontMetrics {
    /// Build metrics from a parsed font description
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::DuplicateGlyph`] if a character appears twice
    /// - [`ConfigurationError::InvalidCodePoint`] for ids that are not characters
    /// - [`ConfigurationError::MissingDefaultCharacter`] if the configured
    ///   fallback has no glyph
    /// - [`FontError::InvalidArgument`] for spacing that is not finite or does
    ///   not fit in an `i32`
    ///
    /// A line height of `i32::MIN` is stored as `i32::MAX`.
    pub fn new(description: &FontDescription, config: &FontConfig) -> FontResult<Self> {
        let line_height = config
            .line_spacing
            .unwrap_or(description.common.line_height);

        let mut metrics = Self::from_parts(
            &description.chars,
            &description.kernings,
            line_height,
            config.spacing,
            config.default_character,
        )?;
        metrics.base = description.common.base;
        metrics.texture_size = (description.common.scale_w, description.common.scale_h);
        metrics.page_count = description.common.pages;

        Ok(metrics)
    }

    /// Build metrics from glyph and kerning records directly
    ///
    /// # Errors
    ///
    /// Same as [`FontMetrics::new`].
    pub fn from_parts(
        glyph_records: &[GlyphRecord],
        kerning_records: &[KerningRecord],
        line_height: i32,
        spacing: f32,
        default_character: Option<char>,
    ) -> FontResult<Self> {
        check_spacing(spacing)?;

        let mut glyphs = HashMap::with_capacity(glyph_records.len());
        for record in glyph_records {
            let glyph = Glyph::try_from(record)?;
            if glyphs.insert(glyph.character, glyph).is_some() {
                return Err(ConfigurationError::DuplicateGlyph(glyph.character).into());
            }
        }

        let kerning = KerningTable::from_records(kerning_records)?;
        let line_spacing = line_height.saturating_abs();

        if let Some(c) = default_character {
            if !glyphs.contains_key(&c) {
                return Err(ConfigurationError::MissingDefaultCharacter(c).into());
            }
        }

        log::debug!(
            "Built font metrics: {} glyphs, {} kerning pairs, line spacing {}",
            glyphs.len(),
            kerning.len(),
            line_spacing
        );

        Ok(Self {
            glyphs,
            kerning,
            line_spacing,
            spacing,
            default_character,
            base: 0,
            texture_size: (0, 0),
            page_count: 1,
        })
    }

    /// Kerning adjustment between two consecutive characters
    pub fn kerning(&self, first: char, second: char) -> i32 {
        self.kerning.get(first, second)
    }

    /// The kerning table
    pub const fn kerning_table(&self) -> &KerningTable {
        &self.kerning
    }

    /// Glyph for a character, if the font contains it
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        self.glyphs.get(&c)
    }

    /// Whether the font has a glyph for the character
    pub fn contains(&self, c: char) -> bool {
        self.glyphs.contains_key(&c)
    }

    /// Glyph to draw for a character, falling back to the default character
    ///
    /// Returns the character actually drawn alongside its glyph.
    ///
    /// # Errors
    ///
    /// [`FontError::UnresolvedCharacter`] when the font has no glyph for `c`
    /// and no default character.
    pub fn resolve(&self, c: char) -> FontResult<(char, &Glyph)> {
        if let Some(glyph) = self.glyphs.get(&c) {
            return Ok((c, glyph));
        }

        self.default_character
            .and_then(|fallback| self.glyphs.get(&fallback).map(|glyph| (fallback, glyph)))
            .ok_or(FontError::UnresolvedCharacter(c))
    }

    /// Check that every character of `text` can be drawn
    ///
    /// Line breaks and carriage returns never need a glyph.
    ///
    /// # Errors
    ///
    /// [`FontError::UnresolvedCharacter`] for the first character that cannot be drawn.
    pub fn check_text(&self, text: &str) -> FontResult<()> {
        if self.default_character.is_some() {
            return Ok(());
        }

        match text
            .chars()
            .find(|c| !matches!(c, '\r' | '\n') && !self.glyphs.contains_key(c))
        {
            Some(c) => Err(FontError::UnresolvedCharacter(c)),
            None => Ok(()),
        }
    }

    /// Characters the font has glyphs for, in no particular order
    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }

    /// Number of glyphs
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Number of kerning pairs
    pub fn kerning_pair_count(&self) -> usize {
        self.kerning.len()
    }

    /// Vertical distance in pixels between consecutive lines
    pub const fn line_spacing(&self) -> i32 {
        self.line_spacing
    }

    /// Set the line spacing; negative values are stored as their magnitude
    ///
    /// `i32::MIN` has no positive counterpart and clamps to `i32::MAX`.
    pub fn set_line_spacing(&mut self, line_spacing: i32) {
        self.line_spacing = line_spacing.saturating_abs();
    }

    /// Extra pixels added after every glyph
    pub const fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Set the character spacing
    ///
    /// # Errors
    ///
    /// [`FontError::InvalidArgument`] for NaN, infinite, or values outside
    /// the `i32` range.
    pub fn set_spacing(&mut self, spacing: f32) -> FontResult<()> {
        check_spacing(spacing)?;
        self.spacing = spacing;
        Ok(())
    }

    /// Fallback character for glyphs the font lacks
    pub const fn default_character(&self) -> Option<char> {
        self.default_character
    }

    /// Set or clear the fallback character
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::MissingDefaultCharacter`] if the font has no
    /// glyph for the new character; the previous value is kept.
    pub fn set_default_character(&mut self, character: Option<char>) -> FontResult<()> {
        if let Some(c) = character {
            if !self.glyphs.contains_key(&c) {
                return Err(ConfigurationError::MissingDefaultCharacter(c).into());
            }
        }
        self.default_character = character;
        Ok(())
    }

    /// Pixels from the top of a line to the glyph base
    pub const fn base(&self) -> i32 {
        self.base
    }

    /// Atlas texture width and height
    pub const fn texture_size(&self) -> (i32, i32) {
        self.texture_size
    }

    /// Number of atlas pages
    pub const fn page_count(&self) -> i32 {
        self.page_count
    }
}

/// Spacing is truncated to whole pixels, so it has to fit in an `i32`
fn spacing_in_range(spacing: f32) -> bool {
    (i32::MIN as f32..=i32::MAX as f32).contains(&spacing)
}

fn check_spacing(spacing: f32) -> FontResult<()> {
    if spacing_in_range(spacing) {
        Ok(())
    } else {
        Err(FontError::invalid_argument(
            "spacing",
            format!("must be a finite pixel count, got {spacing}"),
        ))
    }
}
