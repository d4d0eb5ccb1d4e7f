//! Render backend seam
//!
//! Turns laid out glyphs into backend-agnostic draw commands. Layout always
//! works in untransformed pixels; rotation and scale are applied here, after
//! layout, and the backend issues the actual sprite draws.

use bitflags::bitflags;

use crate::error::{FontError, RenderError};
use crate::font::{BitmapFont, TextureHandle};
use crate::foundation::math::{scale_then_rotate, Rect, Vec2, Vec4};
use crate::layout::{LayoutEvent, TextSize};

bitflags! {
    /// Sprite mirroring applied by the backend
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct SpriteEffects: u8 {
        /// Mirror horizontally
        const FLIP_HORIZONTALLY = 0b01;
        /// Mirror vertically
        const FLIP_VERTICALLY = 0b10;
    }
}

/// Placement and appearance of a drawn string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawParams {
    /// Screen position of the text origin
    pub position: Vec2,
    /// Tint color (RGBA); white leaves the atlas unchanged
    pub color: Vec4,
    /// Rotation in radians about the text origin
    pub rotation: f32,
    /// Sprite origin forwarded to the backend
    pub origin: Vec2,
    /// Per-axis scale
    pub scale: Vec2,
    /// Mirroring flags
    pub effects: SpriteEffects,
    /// Depth used for sorting (0 front, 1 back)
    pub layer_depth: f32,
}

impl DrawParams {
    /// Unrotated, unscaled white text at `position`
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            rotation: 0.0,
            origin: Vec2::zeros(),
            scale: Vec2::new(1.0, 1.0),
            effects: SpriteEffects::empty(),
            layer_depth: 0.0,
        }
    }

    /// Set the tint color
    pub fn with_color(mut self, color: Vec4) -> Self {
        self.color = color;
        self
    }

    /// Set the rotation in radians
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the sprite origin
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Set per-axis scale
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Scale both axes by the same factor
    pub fn with_uniform_scale(self, scale: f32) -> Self {
        self.with_scale(Vec2::new(scale, scale))
    }

    /// Set mirroring flags
    pub fn with_effects(mut self, effects: SpriteEffects) -> Self {
        self.effects = effects;
        self
    }

    /// Set layer depth
    pub fn with_layer_depth(mut self, layer_depth: f32) -> Self {
        self.layer_depth = layer_depth;
        self
    }

    fn validate(&self) -> Result<(), FontError> {
        if !(self.position.x.is_finite() && self.position.y.is_finite()) {
            return Err(FontError::invalid_argument("position", "must be finite"));
        }
        if !(self.scale.x.is_finite() && self.scale.y.is_finite()) {
            return Err(FontError::invalid_argument("scale", "must be finite"));
        }
        if !self.rotation.is_finite() {
            return Err(FontError::invalid_argument("rotation", "must be finite"));
        }
        Ok(())
    }
}

impl Default for DrawParams {
    fn default() -> Self {
        Self::new(Vec2::zeros())
    }
}

/// One sprite draw for one glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphDrawCommand {
    /// Character drawn
    pub character: char,
    /// Atlas texture to sample
    pub texture: TextureHandle,
    /// Source rectangle in the atlas
    pub source: Rect,
    /// Destination rectangle on screen
    pub destination: Rect,
    /// Tint color
    pub color: Vec4,
    /// Rotation in radians
    pub rotation: f32,
    /// Sprite origin
    pub origin: Vec2,
    /// Mirroring flags
    pub effects: SpriteEffects,
    /// Sort depth
    pub layer_depth: f32,
}

/// Backend that issues sprite draws for glyphs
pub trait GlyphRenderer {
    /// Draw one glyph sprite
    fn draw_glyph(
        &mut self,
        command: &GlyphDrawCommand,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Lay out `text` with `font` and hand every glyph to `renderer`
///
/// Returns the untransformed measured size of the text.
///
/// # Errors
///
/// - [`RenderError::Font`] for non-finite draw parameters or characters the
///   font cannot draw; nothing is sent to the backend in either case
/// - [`RenderError::Backend`] for the first draw the backend rejects
pub fn draw_string<R>(
    renderer: &mut R,
    font: &BitmapFont,
    text: &str,
    params: &DrawParams,
) -> Result<TextSize, RenderError>
where
    R: GlyphRenderer + ?Sized,
{
    params.validate()?;
    font.metrics().check_text(text)?;

    let mut run = font.layout_engine().glyphs(text);
    for event in run.by_ref() {
        let LayoutEvent::Glyph(placed) = event? else {
            continue;
        };

        let draw_position = Vec2::new(placed.position.x as f32, placed.position.y as f32);
        let offset = scale_then_rotate(draw_position, params.scale, params.rotation);
        let glyph = placed.glyph;
        let command = GlyphDrawCommand {
            character: placed.character,
            texture: font.texture(),
            source: glyph.atlas,
            destination: Rect::new(
                (params.position.x + offset.x) as i32,
                (params.position.y + offset.y) as i32,
                (glyph.width() as f32 * params.scale.x) as i32,
                (glyph.height() as f32 * params.scale.y) as i32,
            ),
            color: params.color,
            rotation: params.rotation,
            origin: params.origin,
            effects: params.effects,
            layer_depth: params.layer_depth,
        };

        renderer.draw_glyph(&command).map_err(RenderError::Backend)?;
    }

    Ok(run.size())
}
