// Copyright 2026 the Reveal Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Point;

use crate::style::Color;

/// A contiguous span of text sharing one style snapshot, with independent
/// reveal progress.
///
/// Runs are produced by [`RunBuilder`](crate::RunBuilder) and consumed by
/// [`RevealRenderer`](crate::RevealRenderer). The style snapshot (font,
/// text, color) is fixed at construction; position is adjusted once for
/// line alignment, and the reveal fields advance over time. Once a run is
/// enqueued on a renderer, only that renderer should mutate it.
///
/// Reveal progress is counted in characters, not bytes, so multi-byte text
/// reveals one visible character at a time.
#[derive(Clone, Debug)]
pub struct TextRun<F> {
    font: F,
    text: String,
    position: Point,
    color: Color,
    seconds_per_char: f32,
    shown: usize,
    char_len: usize,
}

impl<F> TextRun<F> {
    /// Creates a run.
    ///
    /// A non-positive reveal speed marks the text instantly visible in
    /// full; this is the canonical static-text case.
    pub fn new(
        font: F,
        text: String,
        position: Point,
        color: Color,
        seconds_per_char: f32,
    ) -> Self {
        let char_len = text.chars().count();
        let shown = if seconds_per_char <= 0.0 { char_len } else { 0 };
        Self {
            font,
            text,
            position,
            color,
            seconds_per_char,
            shown,
            char_len,
        }
    }

    /// Returns the font handle for this run.
    pub fn font(&self) -> &F {
        &self.font
    }

    /// Returns the full text of this run.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Returns the top-left position of this run.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the run; used for post-hoc line alignment.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Returns the text color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the reveal speed in seconds per character.
    pub fn seconds_per_char(&self) -> f32 {
        self.seconds_per_char
    }

    /// Sets the reveal speed in seconds per character.
    pub fn set_seconds_per_char(&mut self, seconds: f32) {
        self.seconds_per_char = seconds;
    }

    /// Returns the number of characters currently revealed.
    pub fn shown(&self) -> usize {
        self.shown
    }

    /// Sets the number of revealed characters, clamped to the text length.
    pub fn set_shown(&mut self, shown: usize) {
        self.shown = shown.min(self.char_len);
    }

    /// Reveals `count` additional characters, clamped to the text length.
    pub fn advance_shown(&mut self, count: usize) {
        self.shown = self.shown.saturating_add(count).min(self.char_len);
    }

    /// Reveals the whole text.
    pub fn reveal_all(&mut self) {
        self.shown = self.char_len;
    }

    /// Returns the currently revealed prefix of the text.
    pub fn visible_text(&self) -> &str {
        if self.shown >= self.char_len {
            return &self.text;
        }
        let end = self
            .text
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        &self.text[..end]
    }

    /// Returns true once every character is revealed, or immediately for a
    /// non-positive reveal speed.
    pub fn is_complete(&self) -> bool {
        self.shown == self.char_len || self.seconds_per_char <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use peniko::color::palette;
    use peniko::kurbo::Point;

    use super::TextRun;

    fn run(text: &str, seconds_per_char: f32) -> TextRun<()> {
        TextRun::new(
            (),
            text.to_owned(),
            Point::ZERO,
            palette::css::WHITE,
            seconds_per_char,
        )
    }

    #[test]
    fn zero_speed_is_instantly_visible() {
        let run = run("hello", 0.0);
        assert!(run.is_complete());
        assert_eq!(run.visible_text(), "hello");
    }

    #[test]
    fn shown_is_clamped() {
        let mut run = run("hi", 0.1);
        run.set_shown(10);
        assert_eq!(run.shown(), 2);
        run.set_shown(1);
        run.advance_shown(usize::MAX);
        assert_eq!(run.shown(), 2);
    }

    #[test]
    fn visible_text_respects_char_boundaries() {
        let mut run = run("héllo", 0.1);
        assert_eq!(run.visible_text(), "");
        run.advance_shown(2);
        assert_eq!(run.visible_text(), "hé");
        run.reveal_all();
        assert_eq!(run.visible_text(), "héllo");
        assert!(run.is_complete());
    }
}
