// Copyright 2026 the Reveal Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font measurement capability.

use peniko::kurbo::Size;

/// Opaque text measurement capability supplied by the host.
///
/// The core never inspects glyphs; it only asks the host how much space a
/// piece of text occupies. Implementors are expected to be cheap-clone
/// handles to the host's font resources, since every [`TextRun`] carries
/// one.
///
/// [`TextRun`]: crate::TextRun
pub trait FontMetrics {
    /// Measures the rendered extent of `text` as a single line.
    fn measure(&self, text: &str) -> Size;

    /// Vertical advance for a line that contains no text.
    fn line_spacing(&self) -> f64;
}
