//! Bitmap font data
//!
//! - [`FontDescription`]: parsed BMFont records consumed at load time
//! - [`FontMetrics`]: glyph and kerning lookup used by the layout engine
//! - [`BitmapFont`]: metrics paired with the atlas texture handle

mod bitmap_font;
pub mod description;
mod glyph;
mod kerning;
mod metrics;
mod texture;

pub use bitmap_font::BitmapFont;
pub use description::{
    AtlasSpacing, FontCommon, FontDescription, FontInfo, FontPage, GlyphRecord, KerningRecord,
    Padding,
};
pub use glyph::{ChannelMask, Glyph};
pub use kerning::KerningTable;
pub use metrics::FontMetrics;
pub use texture::TextureHandle;
