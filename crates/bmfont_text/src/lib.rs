//! # BMFont Text
//!
//! Bitmap font metrics and text layout for glyph atlases produced by the
//! AngelCode BMFont tool.
//!
//! ## Features
//!
//! - **Font Metrics**: Immutable glyph and kerning lookup built once per font
//! - **Text Layout**: Single-pass measurement and glyph positioning with kerning,
//!   spacing, line breaks and fallback characters
//! - **Render Seam**: Backend-agnostic draw commands with rotation and scale
//! - **Configuration**: TOML/RON loading for font settings and descriptions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bmfont_text::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let description = FontDescription::load_from_file("resources/fonts/arial.ron")?;
//!     let font = BitmapFont::new(TextureHandle(1), description, &FontConfig::default())?;
//!
//!     let size = font.measure_string("Hello\nWorld")?;
//!     println!("{} x {}", size.width, size.height);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod error;
pub mod font;
pub mod foundation;
pub mod layout;
pub mod render;

pub use error::{ConfigurationError, FontError, FontResult, RenderError};
pub use font::{BitmapFont, FontMetrics, Glyph, TextureHandle};
pub use layout::{LayoutEngine, PositionedGlyph, TextSize};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, FontConfig},
        error::{ConfigurationError, FontError, FontResult, RenderError},
        font::{
            BitmapFont, ChannelMask, FontDescription, FontMetrics, Glyph, KerningTable,
            TextureHandle,
        },
        foundation::math::{IVec2, Rect, Vec2, Vec4},
        layout::{GlyphRun, LayoutEngine, LayoutEvent, PositionedGlyph, TextSize},
        render::{draw_string, DrawParams, GlyphDrawCommand, GlyphRenderer, SpriteEffects},
    };
}
