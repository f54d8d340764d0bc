// Copyright 2026 the Reveal Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utilities for developing and testing `reveal_text`.
//!
//! Provides deterministic stand-ins for the host capabilities: a font with
//! fixed per-character metrics, and a surface that records its draw calls
//! instead of rasterizing.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

use peniko::kurbo::{Point, Size};
use reveal_text::{Color, FontMetrics, Surface};

/// Font capability with a fixed advance per character.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedFont {
    /// Horizontal advance of every character.
    pub advance: f64,
    /// Measured height of any non-empty text.
    pub height: f64,
    /// Vertical advance for empty lines.
    pub spacing: f64,
}

impl FixedFont {
    /// A 10x16 font with 20 units of line spacing.
    pub fn standard() -> Self {
        Self {
            advance: 10.0,
            height: 16.0,
            spacing: 20.0,
        }
    }
}

impl FontMetrics for FixedFont {
    fn measure(&self, text: &str) -> Size {
        Size::new(self.advance * text.chars().count() as f64, self.height)
    }

    fn line_spacing(&self) -> f64 {
        self.spacing
    }
}

/// One recorded `draw_text` call.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlit {
    /// The drawn string.
    pub text: String,
    /// Top-left corner of the drawn string.
    pub origin: Point,
    /// The draw color.
    pub color: Color,
    /// The font the text was drawn with.
    pub font: FixedFont,
}

/// Surface that records draw calls and models composited content.
///
/// `content` reflects what the surface would currently show; the counters
/// accumulate over the surface's lifetime so tests can bound how much
/// drawing a pass performed.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    content: Vec<TextBlit>,
    text_draws: usize,
    clears: usize,
    open_brackets: usize,
    unbracketed_calls: usize,
}

impl RecordingSurface {
    /// An empty, transparent surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current composited content, oldest first.
    pub fn content(&self) -> &[TextBlit] {
        &self.content
    }

    /// Returns the texts of the current content, for compact assertions.
    pub fn texts(&self) -> Vec<&str> {
        self.content.iter().map(|blit| blit.text.as_str()).collect()
    }

    /// Total characters across the current content.
    pub fn visible_chars(&self) -> usize {
        self.content
            .iter()
            .map(|blit| blit.text.chars().count())
            .sum()
    }

    /// Total `draw_text` calls this surface has received.
    pub fn text_draws(&self) -> usize {
        self.text_draws
    }

    /// Total `clear` calls this surface has received.
    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Calls issued outside a begin/end bracket.
    pub fn unbracketed_calls(&self) -> usize {
        self.unbracketed_calls
    }

    fn record_bracket_use(&mut self) {
        if self.open_brackets == 0 {
            self.unbracketed_calls += 1;
        }
    }
}

impl Surface<FixedFont> for RecordingSurface {
    fn begin(&mut self) {
        self.open_brackets += 1;
    }

    fn end(&mut self) {
        self.open_brackets = self.open_brackets.saturating_sub(1);
    }

    fn clear(&mut self) {
        self.record_bracket_use();
        self.content.clear();
        self.clears += 1;
    }

    fn draw_text(&mut self, font: &FixedFont, text: &str, origin: Point, color: Color) {
        self.record_bracket_use();
        self.content.push(TextBlit {
            text: text.to_owned(),
            origin,
            color,
            font: *font,
        });
        self.text_draws += 1;
    }

    fn blit(&mut self, src: &Self) {
        self.record_bracket_use();
        self.content.extend(src.content.iter().cloned());
    }
}
