// Copyright 2026 the Reveal Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color and alignment vocabulary.

use peniko::color::{AlphaColor, Srgb};

/// Solid text color in sRGB with alpha.
pub type Color = AlphaColor<Srgb>;

/// Horizontal placement of a laid-out line within its bounds.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Alignment {
    /// Lines start at the left edge of the bounds.
    #[default]
    Left,
    /// Lines are centered between the left and right edges.
    Middle,
    /// Lines end at the right edge of the bounds.
    Right,
}
