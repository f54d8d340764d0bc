// Copyright 2026 the Reveal Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout of formatted multi-line text into positioned runs.

mod run;

pub use run::TextRun;

use core::fmt;

use hashbrown::HashMap;
use peniko::color::palette;
use peniko::kurbo::{Point, Rect};

use crate::error::BuildError;
use crate::font::FontMetrics;
use crate::format::{DirectiveValue, FormatProcessor};
use crate::style::{Alignment, Color};
use crate::util::NameKey;

/// Style state carried through the scan; the last directive wins.
#[derive(Clone, Debug)]
struct LayoutState {
    color: Color,
    seconds_per_char: f32,
    font_key: Option<Box<[u8]>>,
    alignment: Alignment,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            color: palette::css::WHITE,
            seconds_per_char: 0.0,
            font_key: None,
            alignment: Alignment::Left,
        }
    }
}

/// Builds positioned [`TextRun`]s from a formatted multi-line string.
///
/// The builder owns the directive processor, the registered fonts and the
/// style state. Each [`build`](Self::build) call scans its input line by
/// line, flushing accumulated plain text into runs whenever a directive
/// changes the style, then aligns each finished line within the bounds.
///
/// Callers pre-split text into lines with `\n`; there is no automatic
/// wrapping, and text wider than the bounds overflows.
pub struct RunBuilder<F> {
    processor: FormatProcessor,
    fonts: HashMap<Box<[u8]>, F>,
    default_font: F,
    preserve_state: bool,
    state: LayoutState,
}

impl<F: FontMetrics + Clone> RunBuilder<F> {
    /// Creates a builder with the standard directive set.
    ///
    /// `default_font` is used by every run not covered by a font
    /// directive.
    pub fn new(default_font: F) -> Self {
        Self::with_processor(default_font, FormatProcessor::default())
    }

    /// Creates a builder over a custom processor (syntax and/or registry).
    pub fn with_processor(default_font: F, processor: FormatProcessor) -> Self {
        Self {
            processor,
            fonts: HashMap::new(),
            default_font,
            preserve_state: false,
            state: LayoutState::default(),
        }
    }

    /// Returns the directive processor.
    pub fn processor(&self) -> &FormatProcessor {
        &self.processor
    }

    /// When set, the style state left by one `build` call seeds the next
    /// call instead of resetting to defaults.
    pub fn set_preserve_state(&mut self, preserve: bool) {
        self.preserve_state = preserve;
    }

    /// Registers `font` under `name` for `{font:name}` directives.
    ///
    /// Names are case-insensitive and cannot be re-registered.
    pub fn register_font(&mut self, name: &str, font: F) -> Result<(), BuildError> {
        let key = NameKey::from_str(name.trim());
        if self.fonts.contains_key(key.as_bytes()) {
            return Err(BuildError::DuplicateFontName(name.to_owned()));
        }
        self.fonts.insert(key.as_bytes().into(), font);
        Ok(())
    }

    /// Lays out `text` inside `bounds` and returns the runs in
    /// left-to-right, top-to-bottom order.
    ///
    /// Directive spans mutate the style state synchronously as the scan
    /// passes them; escaped delimiters become literal characters. On error
    /// no runs are returned and the builder's committed state is untouched.
    pub fn build(&mut self, text: &str, bounds: Rect) -> Result<Vec<TextRun<F>>, BuildError> {
        let mut state = if self.preserve_state {
            self.state.clone()
        } else {
            LayoutState::default()
        };
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let syntax = self.processor.syntax();
        let mut runs = Vec::new();
        let mut y = bounds.y0;

        for (line_index, line) in text.split('\n').enumerate() {
            let line_start = runs.len();
            let mut x = bounds.x0;
            let mut line_height = 0.0_f64;
            let mut pending = String::new();
            let mut pos = 0;

            while pos < line.len() {
                let ch = line[pos..]
                    .chars()
                    .next()
                    .expect("pos is on a char boundary");
                if ch == syntax.escape {
                    match line[pos + ch.len_utf8()..].chars().next() {
                        Some(next)
                            if next == syntax.open
                                || next == syntax.close
                                || next == syntax.escape =>
                        {
                            pending.push(next);
                            pos += ch.len_utf8() + next.len_utf8();
                        }
                        _ => {
                            return Err(BuildError::UnrecognizedEscape {
                                line: line_index + 1,
                                column: line[..pos].chars().count() + 1,
                            });
                        }
                    }
                } else if ch == syntax.open {
                    self.flush_pending(&state, &mut pending, &mut x, y, &mut line_height, &mut runs);
                    let span = match line[pos..].find(syntax.close) {
                        Some(off) => &line[pos..pos + off + syntax.close.len_utf8()],
                        // No closing delimiter on this line; the processor
                        // reports the grammar violation.
                        None => &line[pos..],
                    };
                    let value = self.processor.process(span)?;
                    self.apply_directive(&mut state, value)?;
                    pos += span.len();
                } else {
                    pending.push(ch);
                    pos += ch.len_utf8();
                }
            }

            self.flush_pending(&state, &mut pending, &mut x, y, &mut line_height, &mut runs);
            align_line(&mut runs[line_start..], state.alignment, bounds, x);
            if runs.len() == line_start {
                y += self.font_for(&state).line_spacing();
            } else {
                y += line_height;
            }
        }

        log::trace!("built {} runs", runs.len());
        self.state = state;
        Ok(runs)
    }

    /// Turns the pending plain-text buffer into a run at the cursor.
    ///
    /// An empty buffer produces no run, so consecutive directives never
    /// create empty runs.
    fn flush_pending(
        &self,
        state: &LayoutState,
        pending: &mut String,
        x: &mut f64,
        y: f64,
        line_height: &mut f64,
        runs: &mut Vec<TextRun<F>>,
    ) {
        if pending.is_empty() {
            return;
        }
        let font = self.font_for(state).clone();
        let text = core::mem::take(pending);
        let size = font.measure(&text);
        runs.push(TextRun::new(
            font,
            text,
            Point::new(*x, y),
            state.color,
            state.seconds_per_char,
        ));
        *x += size.width;
        *line_height = line_height.max(size.height);
    }

    fn apply_directive(
        &self,
        state: &mut LayoutState,
        value: DirectiveValue,
    ) -> Result<(), BuildError> {
        match value {
            DirectiveValue::Color(color) => state.color = color,
            DirectiveValue::RevealSpeed(seconds) => state.seconds_per_char = seconds,
            DirectiveValue::Font(name) => {
                let key = NameKey::from_str(&name);
                if !self.fonts.contains_key(key.as_bytes()) {
                    return Err(BuildError::UnregisteredFontReference(name));
                }
                state.font_key = Some(key.as_bytes().into());
            }
            DirectiveValue::Alignment(alignment) => state.alignment = alignment,
        }
        Ok(())
    }

    fn font_for(&self, state: &LayoutState) -> &F {
        state
            .font_key
            .as_deref()
            .and_then(|key| self.fonts.get(key))
            .unwrap_or(&self.default_font)
    }
}

impl<F> fmt::Debug for RunBuilder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunBuilder")
            .field("processor", &self.processor)
            .field("fonts", &self.fonts.len())
            .field("preserve_state", &self.preserve_state)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Shifts every run on a finished line so the line sits at its alignment
/// within `bounds`.
///
/// `x` is the cursor after the last run, so `x - bounds.x0` is the line's
/// total rendered width.
fn align_line<F>(line_runs: &mut [TextRun<F>], alignment: Alignment, bounds: Rect, x: f64) {
    let line_width = x - bounds.x0;
    let shift = match alignment {
        Alignment::Left => return,
        Alignment::Middle => (bounds.width() - line_width) * 0.5,
        Alignment::Right => bounds.width() - line_width,
    };
    for run in line_runs {
        let position = run.position();
        run.set_position(Point::new(position.x + shift, position.y));
    }
}
