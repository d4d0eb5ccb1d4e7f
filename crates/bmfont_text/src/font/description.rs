//! Parsed BMFont description records
//!
//! These mirror the blocks of a BMFont `.fnt` file (`info`, `common`,
//! `page`, `char`, `kerning`) after they have been parsed. Reading the
//! `.fnt` syntax itself is left to the caller; the records derive serde
//! so a description can also be stored as RON or TOML.

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Padding around each glyph in the atlas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    /// Top padding
    pub up: i32,
    /// Right padding
    pub right: i32,
    /// Bottom padding
    pub down: i32,
    /// Left padding
    pub left: i32,
}

/// Spacing between glyphs in the atlas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasSpacing {
    /// Horizontal spacing
    pub horizontal: i32,
    /// Vertical spacing
    pub vertical: i32,
}

/// How the font was generated (`info` block)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontInfo {
    /// Name of the true type font
    pub face: String,
    /// Size of the true type font
    pub size: i32,
    /// Whether the font is bold
    pub bold: bool,
    /// Whether the font is italic
    pub italic: bool,
    /// OEM charset name, empty for unicode fonts
    pub charset: String,
    /// Whether the charset is unicode
    pub unicode: bool,
    /// Font height stretch in percent
    pub stretch_h: i32,
    /// Whether smoothing was turned on
    pub smooth: bool,
    /// Supersampling level used
    pub super_sampling: i32,
    /// Padding for each glyph
    pub padding: Padding,
    /// Spacing for each glyph
    pub spacing: AtlasSpacing,
    /// Outline thickness
    pub outline: i32,
}

/// Metrics shared by every glyph (`common` block)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontCommon {
    /// Distance in pixels between each line of text
    pub line_height: i32,
    /// Pixels from the top of the line to the glyph base
    pub base: i32,
    /// Width of the atlas texture
    pub scale_w: i32,
    /// Height of the atlas texture
    pub scale_h: i32,
    /// Number of atlas pages
    pub pages: i32,
    /// Whether monochrome glyphs are packed into each channel
    pub packed: bool,
    /// Alpha channel content (0 glyph, 1 outline, 2 both, 3 zero, 4 one)
    pub alpha_channel: i32,
    /// Red channel content
    pub red_channel: i32,
    /// Green channel content
    pub green_channel: i32,
    /// Blue channel content
    pub blue_channel: i32,
}

/// One atlas page (`page` block)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPage {
    /// Page id
    pub id: i32,
    /// Texture file name
    pub file: String,
}

/// One character record (`char` block)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphRecord {
    /// Character code point
    pub id: u32,
    /// Left position in the atlas
    pub x: i32,
    /// Top position in the atlas
    pub y: i32,
    /// Width in the atlas
    pub width: i32,
    /// Height in the atlas
    pub height: i32,
    /// Horizontal offset applied when drawing
    pub xoffset: i32,
    /// Vertical offset applied when drawing
    pub yoffset: i32,
    /// How far to advance the cursor after drawing
    pub xadvance: i32,
    /// Atlas page holding the glyph
    pub page: i32,
    /// Channel mask (1 blue, 2 green, 4 red, 8 alpha, 15 all)
    pub chnl: u8,
}

/// One kerning record (`kerning` block)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KerningRecord {
    /// First character code point
    pub first: u32,
    /// Second character code point
    pub second: u32,
    /// Horizontal adjustment in pixels
    pub amount: i32,
}

/// A complete parsed BMFont description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontDescription {
    /// Generation info
    pub info: FontInfo,
    /// Shared metrics
    pub common: FontCommon,
    /// Atlas pages
    pub pages: Vec<FontPage>,
    /// Glyph records, in file order
    pub chars: Vec<GlyphRecord>,
    /// Kerning records, in file order
    pub kernings: Vec<KerningRecord>,
}

impl Config for FontDescription {}
