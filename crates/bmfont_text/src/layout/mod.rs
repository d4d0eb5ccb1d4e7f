//! Text layout
//!
//! - [`LayoutEngine`]: measures strings and places glyphs
//! - [`GlyphRun`]: lazy single-pass sequence of glyph placements
//! - [`PositionedGlyph`], [`TextSize`]: layout output

mod engine;
mod run;
mod types;

#[cfg(test)]
mod tests;

pub use engine::LayoutEngine;
pub use run::GlyphRun;
pub use types::{LayoutEvent, PositionedGlyph, TextSize};
