//! Per-character atlas metrics

use crate::error::ConfigurationError;
use crate::foundation::math::Rect;

use super::description::GlyphRecord;

bitflags::bitflags! {
    /// Texture channels a glyph is stored in
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChannelMask: u8 {
        /// Blue channel
        const BLUE = 0b0001;
        /// Green channel
        const GREEN = 0b0010;
        /// Red channel
        const RED = 0b0100;
        /// Alpha channel
        const ALPHA = 0b1000;
    }
}

/// One character's atlas metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Character this glyph draws
    pub character: char,
    /// Source rectangle in the atlas texture
    pub atlas: Rect,
    /// Horizontal offset from the cursor when drawing
    pub xoffset: i32,
    /// Vertical offset from the line top when drawing
    pub yoffset: i32,
    /// Cursor advance after drawing, before kerning and spacing
    pub xadvance: i32,
    /// Atlas page index
    pub page: i32,
    /// Channels holding the glyph
    pub channel: ChannelMask,
}

impl Glyph {
    /// Glyph width in pixels
    pub const fn width(&self) -> i32 {
        self.atlas.width
    }

    /// Glyph height in pixels
    pub const fn height(&self) -> i32 {
        self.atlas.height
    }
}

impl TryFrom<&GlyphRecord> for Glyph {
    type Error = ConfigurationError;

    fn try_from(record: &GlyphRecord) -> Result<Self, Self::Error> {
        let character =
            char::from_u32(record.id).ok_or(ConfigurationError::InvalidCodePoint(record.id))?;

        Ok(Self {
            character,
            atlas: Rect::new(record.x, record.y, record.width, record.height),
            xoffset: record.xoffset,
            yoffset: record.yoffset,
            xadvance: record.xadvance,
            page: record.page,
            channel: ChannelMask::from_bits_truncate(record.chnl),
        })
    }
}
