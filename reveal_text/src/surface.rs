// Copyright 2026 the Reveal Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offscreen drawing capability.

use peniko::kurbo::Point;

use crate::style::Color;

/// A fixed-size offscreen surface the renderer composites into.
///
/// Hosts provide two of these per [`RevealRenderer`], sized to the layout
/// bounds and initially transparent. The renderer issues `clear`,
/// `draw_text` and `blit` calls only between [`begin`](Surface::begin) and
/// [`end`](Surface::end), one bracket per redraw pass.
///
/// [`RevealRenderer`]: crate::RevealRenderer
pub trait Surface<F> {
    /// Marks the start of a redraw pass.
    fn begin(&mut self) {}

    /// Marks the end of a redraw pass.
    fn end(&mut self) {}

    /// Clears the surface to fully transparent.
    fn clear(&mut self);

    /// Draws one styled string with its top-left corner at `origin`.
    fn draw_text(&mut self, font: &F, text: &str, origin: Point, color: Color);

    /// Composites the full contents of `src` onto this surface at the
    /// origin.
    fn blit(&mut self, src: &Self);
}
