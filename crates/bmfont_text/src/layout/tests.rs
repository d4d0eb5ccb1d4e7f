//! Layout scenarios against a small hand-built font

use super::*;
use crate::error::FontError;
use crate::font::{FontMetrics, GlyphRecord, KerningRecord};
use crate::foundation::math::IVec2;

fn glyph(c: char, xadvance: i32, height: i32) -> GlyphRecord {
    GlyphRecord {
        id: c as u32,
        width: xadvance,
        height,
        xadvance,
        chnl: 15,
        ..GlyphRecord::default()
    }
}

fn kern(first: char, second: char, amount: i32) -> KerningRecord {
    KerningRecord {
        first: first as u32,
        second: second as u32,
        amount,
    }
}

fn glyph_records() -> Vec<GlyphRecord> {
    vec![
        glyph('A', 10, 20),
        glyph('B', 12, 18),
        glyph('?', 8, 14),
        GlyphRecord {
            xoffset: 2,
            yoffset: 3,
            ..glyph('o', 9, 10)
        },
    ]
}

fn metrics_with(spacing: f32, default_character: Option<char>, kernings: &[KerningRecord]) -> FontMetrics {
    FontMetrics::from_parts(&glyph_records(), kernings, 16, spacing, default_character).unwrap()
}

fn metrics() -> FontMetrics {
    metrics_with(0.0, None, &[])
}

fn collect(engine: &LayoutEngine<'_>, text: &str) -> Vec<(char, IVec2, Option<char>)> {
    let mut placed = Vec::new();
    engine
        .layout_glyphs(text, |g| placed.push((g.character, g.position, g.previous)))
        .unwrap();
    placed
}

#[test]
fn test_measure_empty_is_zero() {
    let metrics = metrics();
    let engine = LayoutEngine::new(&metrics);
    assert_eq!(engine.measure("").unwrap(), TextSize::ZERO);
}

#[test]
fn test_layout_empty_occupies_one_line_without_callbacks() {
    let metrics = metrics();
    let engine = LayoutEngine::new(&metrics);
    let mut glyphs = 0;
    let mut line_breaks = 0;

    let size = engine.layout("", |_| glyphs += 1, || line_breaks += 1).unwrap();

    assert_eq!((glyphs, line_breaks), (0, 0));
    assert_eq!(size, TextSize::new(0, 16));
}

#[test]
fn test_line_break_scenario() {
    let metrics = metrics();
    let engine = LayoutEngine::new(&metrics);
    let mut line_breaks = 0;
    let mut glyphs = Vec::new();

    let size = engine
        .layout(
            "AB\nA",
            |g| glyphs.push((g.character, g.position)),
            || line_breaks += 1,
        )
        .unwrap();

    assert_eq!(size, TextSize::new(22, 40));
    assert_eq!(engine.measure("AB\nA").unwrap(), size);
    assert_eq!(line_breaks, 1);
    assert_eq!(
        glyphs,
        vec![
            ('A', IVec2::new(0, 0)),
            ('B', IVec2::new(10, 0)),
            ('A', IVec2::new(0, 20)),
        ]
    );
}

#[test]
fn test_line_height_tracks_tallest_glyph_per_line() {
    let metrics = metrics();
    let engine = LayoutEngine::new(&metrics);

    // 20 (A) + 18 (B) + 16 for the empty trailing line
    assert_eq!(engine.measure("A\nB\n").unwrap(), TextSize::new(12, 54));
}

#[test]
fn test_known_characters_always_resolve() {
    let metrics = metrics();
    let engine = LayoutEngine::new(&metrics);

    for text in ["A", "BA?", "oooo", "A\nB\r\n?o", "\n\n"] {
        assert!(engine.measure(text).is_ok(), "failed on {text:?}");
        assert!(engine.layout(text, |_| {}, || {}).is_ok(), "failed on {text:?}");
    }
}

#[test]
fn test_unresolved_character_without_default() {
    let metrics = metrics();
    let engine = LayoutEngine::new(&metrics);

    assert_eq!(engine.measure("AxB"), Err(FontError::UnresolvedCharacter('x')));
}

#[test]
fn test_code_point_above_glyph_range_is_not_skipped() {
    let metrics = metrics();
    let engine = LayoutEngine::new(&metrics);

    assert_eq!(
        engine.measure("A\u{10FFFF}"),
        Err(FontError::UnresolvedCharacter('\u{10FFFF}'))
    );
}

#[test]
fn test_default_character_substitutes_glyph() {
    let mut metrics = metrics();
    metrics.set_default_character(Some('?')).unwrap();
    let engine = LayoutEngine::new(&metrics);

    let placed = collect(&engine, "AxB");

    assert_eq!(
        placed,
        vec![
            ('A', IVec2::new(0, 0), None),
            ('?', IVec2::new(10, 0), Some('A')),
            ('B', IVec2::new(18, 0), Some('?')),
        ]
    );
    assert_eq!(engine.measure("AxB").unwrap(), TextSize::new(30, 20));
}

#[test]
fn test_removing_default_character_makes_text_unresolvable() {
    let mut metrics = metrics_with(0.0, Some('?'), &[]);
    assert!(LayoutEngine::new(&metrics).measure("x").is_ok());

    metrics.set_default_character(None).unwrap();
    assert_eq!(
        LayoutEngine::new(&metrics).measure("x"),
        Err(FontError::UnresolvedCharacter('x'))
    );
}

#[test]
fn test_layout_reports_nothing_before_an_error() {
    let metrics = metrics();
    let engine = LayoutEngine::new(&metrics);
    let mut glyphs = 0;
    let mut line_breaks = 0;

    let result = engine.layout("AB\nA\u{e9}", |_| glyphs += 1, || line_breaks += 1);

    assert_eq!(result, Err(FontError::UnresolvedCharacter('\u{e9}')));
    assert_eq!((glyphs, line_breaks), (0, 0));
}

#[test]
fn test_glyph_run_stops_after_error() {
    let metrics = metrics();
    let engine = LayoutEngine::new(&metrics);
    let mut run = engine.glyphs("AzB");

    assert!(matches!(run.next(), Some(Ok(LayoutEvent::Glyph(g))) if g.character == 'A'));
    assert_eq!(run.next(), Some(Err(FontError::UnresolvedCharacter('z'))));
    assert_eq!(run.next(), None);
    assert_eq!(run.next(), None);
}

#[test]
fn test_glyph_run_partial_consumption() {
    let metrics = metrics();
    let engine = LayoutEngine::new(&metrics);
    let mut run = engine.glyphs("AB\nA");

    run.next();
    assert_eq!(run.size(), TextSize::new(10, 20));

    let events: Vec<_> = run.by_ref().map(Result::unwrap).collect();
    assert_eq!(events.len(), 3);
    assert_eq!(events[1], LayoutEvent::LineBreak);
    assert_eq!(run.size(), TextSize::new(22, 40));
}

#[test]
fn test_kerning_applies_to_position_and_advance() {
    let metrics = metrics_with(0.0, None, &[kern('A', 'B', -3)]);
    let engine = LayoutEngine::new(&metrics);

    let placed = collect(&engine, "ABA");

    assert_eq!(placed[1].1, IVec2::new(7, 0));
    assert_eq!(placed[2].1, IVec2::new(19, 0));
    assert_eq!(engine.measure("ABA").unwrap().width, 29);
    // Reverse pair has no adjustment
    assert_eq!(engine.measure("BA").unwrap().width, 22);
}

#[test]
fn test_kerning_uses_incoming_character_not_substitute() {
    let metrics = metrics_with(
        0.0,
        Some('?'),
        &[kern('A', 'x', -3), kern('A', '?', 5), kern('?', 'B', 2)],
    );
    let engine = LayoutEngine::new(&metrics);

    let placed = collect(&engine, "AxB");

    // 'x' draws as '?' but kerns as ('A', 'x')
    assert_eq!(placed[1], ('?', IVec2::new(7, 0), Some('A')));
    // The substitute becomes the previous character
    assert_eq!(placed[2], ('B', IVec2::new(17, 0), Some('?')));
}

#[test]
fn test_previous_character_carries_across_line_break() {
    let metrics = metrics_with(0.0, None, &[kern('B', 'A', -4)]);
    let engine = LayoutEngine::new(&metrics);

    let placed = collect(&engine, "B\nA");

    assert_eq!(placed[1], ('A', IVec2::new(-4, 18), Some('B')));
}

#[test]
fn test_carriage_return_is_ignored() {
    let metrics = metrics();
    let engine = LayoutEngine::new(&metrics);
    let mut line_breaks = 0;

    let with_cr = engine.layout("A\r\nB\r", |_| {}, || line_breaks += 1).unwrap();

    assert_eq!(with_cr, engine.measure("A\nB").unwrap());
    assert_eq!(line_breaks, 1);
    assert_eq!(engine.measure("\r").unwrap(), TextSize::new(0, 16));
}

#[test]
fn test_fractional_spacing_truncates_toward_zero() {
    let metrics = metrics_with(2.9, None, &[]);
    let engine = LayoutEngine::new(&metrics);

    assert_eq!(engine.measure("AA").unwrap().width, 24);
    // Trailing spacing is removed only at a line break
    assert_eq!(engine.measure("AA\nA").unwrap().width, 22);

    let metrics = metrics_with(-1.5, None, &[]);
    let engine = LayoutEngine::new(&metrics);
    assert_eq!(engine.measure("AA").unwrap().width, 18);
}

#[test]
fn test_glyph_offsets_shift_position_only() {
    let metrics = metrics();
    let engine = LayoutEngine::new(&metrics);

    let placed = collect(&engine, "\noA");

    assert_eq!(placed[0].1, IVec2::new(2, 16 + 3));
    assert_eq!(placed[1].1, IVec2::new(9, 16));
    assert_eq!(engine.measure("oA").unwrap(), TextSize::new(19, 20));
}

#[test]
fn test_measure_is_idempotent() {
    let metrics = metrics_with(1.0, Some('?'), &[kern('A', 'B', -2)]);
    let engine = LayoutEngine::new(&metrics);
    let text = "AB\r\nzz o\nBA";

    assert_eq!(engine.measure(text).unwrap(), engine.measure(text).unwrap());
}

#[test]
fn test_concurrent_measurement_shares_metrics() {
    let metrics = metrics_with(0.0, Some('?'), &[kern('A', 'B', -1)]);
    let expected = LayoutEngine::new(&metrics).measure("AB\nBA?").unwrap();
    let metrics = &metrics;

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || LayoutEngine::new(metrics).measure("AB\nBA?").unwrap()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_huge_spacing_saturates_instead_of_overflowing() {
    let metrics = metrics_with(2.0e9, None, &[]);
    let engine = LayoutEngine::new(&metrics);

    assert_eq!(engine.measure("AAA").unwrap(), TextSize::new(i32::MAX, 20));
    assert!(FontMetrics::from_parts(&glyph_records(), &[], 16, 3.0e9, None).is_err());
}

#[test]
fn test_huge_line_spacing_saturates_instead_of_overflowing() {
    let metrics = FontMetrics::from_parts(&glyph_records(), &[], i32::MIN, 0.0, None).unwrap();
    let engine = LayoutEngine::new(&metrics);

    let size = engine.measure("A\nB\nA").unwrap();

    assert_eq!(size, TextSize::new(12, i32::MAX));
}

#[test]
fn test_layout_event_glyph_accessor() {
    let metrics = metrics();
    let engine = LayoutEngine::new(&metrics);

    let events: Vec<_> = engine.glyphs("A\nB").map(Result::unwrap).collect();
    let drawn: Vec<char> = events
        .iter()
        .filter_map(LayoutEvent::glyph)
        .map(|g| g.character)
        .collect();

    assert_eq!(drawn, vec!['A', 'B']);
    assert!(events[1].glyph().is_none());
}

#[test]
fn test_text_size_conversions() {
    let metrics = metrics();
    let size = LayoutEngine::new(&metrics).measure("AB\nA").unwrap();

    assert_eq!(IVec2::from(size), IVec2::new(22, 40));
    assert_eq!(size.to_vec2(), crate::foundation::math::Vec2::new(22.0, 40.0));
}
