//! Bitmap font object: atlas texture plus metrics

use crate::config::FontConfig;
use crate::error::FontResult;
use crate::layout::{LayoutEngine, TextSize};

use super::description::{FontCommon, FontDescription, FontInfo, FontPage};
use super::metrics::FontMetrics;
use super::texture::TextureHandle;

/// A sprite font generated by the BMFont tool
///
/// Only single-texture fonts are drawn; every glyph is sampled from
/// [`BitmapFont::texture`] regardless of its page index.
#[derive(Debug, Clone, PartialEq)]
pub struct BitmapFont {
    texture: TextureHandle,
    info: FontInfo,
    common: FontCommon,
    pages: Vec<FontPage>,
    metrics: FontMetrics,
}

impl BitmapFont {
    /// File extension used by the BMFont tool
    pub const EXTENSION: &'static str = ".fnt";

    /// Create a font from its atlas texture and parsed description
    ///
    /// # Errors
    ///
    /// Any error from [`FontMetrics::new`].
    pub fn new(
        texture: TextureHandle,
        description: FontDescription,
        config: &FontConfig,
    ) -> FontResult<Self> {
        let metrics = FontMetrics::new(&description, config)?;

        if description.common.pages > 1 {
            log::warn!(
                "Font '{}' has {} pages; only a single texture is used",
                description.info.face,
                description.common.pages
            );
        }

        let FontDescription {
            info,
            common,
            pages,
            ..
        } = description;

        Ok(Self {
            texture,
            info,
            common,
            pages,
            metrics,
        })
    }

    /// Atlas texture handle
    pub const fn texture(&self) -> TextureHandle {
        self.texture
    }

    /// Generation info from the description
    pub const fn info(&self) -> &FontInfo {
        &self.info
    }

    /// Common block from the description
    pub const fn common(&self) -> &FontCommon {
        &self.common
    }

    /// Atlas pages listed in the description
    pub fn pages(&self) -> &[FontPage] {
        &self.pages
    }

    /// Glyph and kerning metrics
    pub const fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// Mutable access to spacing, line spacing and default character
    pub fn metrics_mut(&mut self) -> &mut FontMetrics {
        &mut self.metrics
    }

    /// Layout engine bound to this font
    pub const fn layout_engine(&self) -> LayoutEngine<'_> {
        LayoutEngine::new(&self.metrics)
    }

    /// Width and height in pixels of `text` when rendered
    ///
    /// # Errors
    ///
    /// [`FontError::UnresolvedCharacter`](crate::FontError::UnresolvedCharacter)
    /// if the text contains a character this font cannot draw.
    pub fn measure_string(&self, text: &str) -> FontResult<TextSize> {
        self.layout_engine().measure(text)
    }
}
