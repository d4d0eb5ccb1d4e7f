//! Lazy single-pass glyph placement

use std::iter::FusedIterator;
use std::str::Chars;

use crate::error::FontResult;
use crate::font::FontMetrics;
use crate::foundation::math::IVec2;

use super::types::{LayoutEvent, PositionedGlyph, TextSize};

/// Pen state carried across one layout pass
#[derive(Debug, Clone, Copy)]
struct Cursor {
    x: i32,
    y: i32,
    max_line_width: i32,
    max_char_height: i32,
    // Not reset at line breaks: kerning may pair the last glyph of a line
    // with the first glyph of the next.
    previous: Option<char>,
}

impl Cursor {
    const fn new(line_spacing: i32) -> Self {
        Self {
            x: 0,
            y: 0,
            max_line_width: 0,
            max_char_height: line_spacing,
            previous: None,
        }
    }

    fn break_line(&mut self, spacing: i32, line_spacing: i32) {
        // Drop the spacing added after the last glyph of the line.
        self.x = self.x.saturating_sub(spacing);
        self.max_line_width = self.max_line_width.max(self.x);
        self.x = 0;
        self.y = self.y.saturating_add(self.max_char_height);
        self.max_char_height = line_spacing;
    }

    fn size(&self) -> TextSize {
        TextSize::new(
            self.max_line_width.max(self.x),
            self.y.saturating_add(self.max_char_height),
        )
    }
}

/// Glyph placements for one string, produced on demand
///
/// The run is single pass: it cannot be restarted, and a consumer that stops
/// early has only laid out a prefix of the text. After an error the run is
/// exhausted.
///
/// ```
/// use bmfont_text::font::{FontMetrics, GlyphRecord};
/// use bmfont_text::layout::{LayoutEngine, LayoutEvent};
///
/// let glyphs = [GlyphRecord { id: 'a' as u32, width: 6, height: 8, xadvance: 7, ..Default::default() }];
/// let metrics = FontMetrics::from_parts(&glyphs, &[], 10, 0.0, None).unwrap();
///
/// let mut run = LayoutEngine::new(&metrics).glyphs("aa");
/// let xs: Vec<i32> = run
///     .by_ref()
///     .filter_map(|event| match event {
///         Ok(LayoutEvent::Glyph(g)) => Some(g.position.x),
///         _ => None,
///     })
///     .collect();
///
/// assert_eq!(xs, [0, 7]);
/// assert_eq!(run.size().width, 14);
/// ```
#[derive(Debug, Clone)]
pub struct GlyphRun<'a, 't> {
    metrics: &'a FontMetrics,
    chars: Chars<'t>,
    cursor: Cursor,
    failed: bool,
}

impl<'a, 't> GlyphRun<'a, 't> {
    pub(crate) fn new(metrics: &'a FontMetrics, text: &'t str) -> Self {
        Self {
            metrics,
            chars: text.chars(),
            cursor: Cursor::new(metrics.line_spacing()),
            failed: false,
        }
    }

    /// Extent of the text consumed so far, including the current line
    ///
    /// Once the run is drained this is the measured size of the whole text.
    pub fn size(&self) -> TextSize {
        self.cursor.size()
    }

    /// Drain the remaining events and return the measured size
    ///
    /// # Errors
    ///
    /// The first layout error encountered.
    pub fn finish(mut self) -> FontResult<TextSize> {
        for event in self.by_ref() {
            event?;
        }
        Ok(self.size())
    }
}

impl<'a> Iterator for GlyphRun<'a, '_> {
    type Item = FontResult<LayoutEvent<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let metrics = self.metrics;
        let spacing = metrics.spacing() as i32;

        for c in self.chars.by_ref() {
            match c {
                '\r' => continue,
                '\n' => {
                    self.cursor.break_line(spacing, metrics.line_spacing());
                    return Some(Ok(LayoutEvent::LineBreak));
                }
                _ => {}
            }

            let (actual, glyph) = match metrics.resolve(c) {
                Ok(resolved) => resolved,
                Err(err) => {
                    log::trace!("Layout aborted at unresolved character {:?}", c);
                    self.failed = true;
                    return Some(Err(err));
                }
            };

            // Kerning is keyed by the incoming character, even when the
            // default character is drawn in its place.
            let kerning = self
                .cursor
                .previous
                .map_or(0, |previous| metrics.kerning(previous, c));

            // Pixel coordinates saturate instead of wrapping on huge advances.
            let position = IVec2::new(
                self.cursor.x.saturating_add(glyph.xoffset).saturating_add(kerning),
                self.cursor.y.saturating_add(glyph.yoffset),
            );
            let previous = self.cursor.previous.replace(actual);

            self.cursor.x = self
                .cursor
                .x
                .saturating_add(glyph.xadvance)
                .saturating_add(kerning)
                .saturating_add(spacing);
            self.cursor.max_char_height = self.cursor.max_char_height.max(glyph.height());

            return Some(Ok(LayoutEvent::Glyph(PositionedGlyph {
                character: actual,
                position,
                glyph,
                previous,
            })));
        }

        None
    }
}

impl FusedIterator for GlyphRun<'_, '_> {}
