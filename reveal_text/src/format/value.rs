// Copyright 2026 the Reveal Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed directive values and the handlers that parse them.

use peniko::color::{parse_color, Srgb};

use crate::error::ValueError;
use crate::style::{Alignment, Color};

/// The closed set of styling directives.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum DirectiveKind {
    /// Text color for subsequent runs.
    Color,
    /// Seconds of reveal time per character; zero means instantly visible.
    RevealSpeed,
    /// Registered font for subsequent runs.
    Font,
    /// Horizontal alignment of the enclosing physical line.
    Alignment,
}

/// A parsed directive value, tagged by kind.
///
/// Exactly one of these is produced per successfully processed directive
/// span. The layout engine matches on it to update its style state.
#[derive(Clone, Debug)]
pub enum DirectiveValue {
    /// A parsed [`DirectiveKind::Color`] value.
    Color(Color),
    /// A parsed [`DirectiveKind::RevealSpeed`] value, in seconds per
    /// character.
    RevealSpeed(f32),
    /// A parsed [`DirectiveKind::Font`] value, naming a registered font.
    Font(String),
    /// A parsed [`DirectiveKind::Alignment`] value.
    Alignment(Alignment),
}

impl DirectiveValue {
    /// Returns the directive kind this value belongs to.
    pub fn kind(&self) -> DirectiveKind {
        match self {
            Self::Color(_) => DirectiveKind::Color,
            Self::RevealSpeed(_) => DirectiveKind::RevealSpeed,
            Self::Font(_) => DirectiveKind::Font,
            Self::Alignment(_) => DirectiveKind::Alignment,
        }
    }
}

/// Converts one raw directive value string into a typed value.
///
/// Handlers are stateless; the registry owns one per directive kind.
pub trait ParseDirectiveValue {
    /// Parses `raw` (already trimmed, never empty) into a typed value.
    fn parse(&self, raw: &str) -> Result<DirectiveValue, ValueError>;
}

/// Parses CSS color syntax: named colors, hex, `rgb()` and friends.
#[derive(Copy, Clone, Default, Debug)]
pub struct ColorValueParser;

impl ParseDirectiveValue for ColorValueParser {
    fn parse(&self, raw: &str) -> Result<DirectiveValue, ValueError> {
        let color = parse_color(raw).map_err(|source| ValueError::Color {
            value: raw.to_owned(),
            source,
        })?;
        Ok(DirectiveValue::Color(color.to_alpha_color::<Srgb>()))
    }
}

/// Parses a reveal speed as seconds per character.
#[derive(Copy, Clone, Default, Debug)]
pub struct SecondsValueParser;

impl ParseDirectiveValue for SecondsValueParser {
    fn parse(&self, raw: &str) -> Result<DirectiveValue, ValueError> {
        let seconds = raw.parse::<f32>().map_err(|source| ValueError::Number {
            value: raw.to_owned(),
            source,
        })?;
        Ok(DirectiveValue::RevealSpeed(seconds))
    }
}

/// Accepts any non-empty string as the name of a registered font.
///
/// Resolution against the registered font set happens when the layout
/// engine applies the directive, not here.
#[derive(Copy, Clone, Default, Debug)]
pub struct FontNameValueParser;

impl ParseDirectiveValue for FontNameValueParser {
    fn parse(&self, raw: &str) -> Result<DirectiveValue, ValueError> {
        Ok(DirectiveValue::Font(raw.to_owned()))
    }
}

/// Parses the closed `left`/`centre`/`right` set, case-insensitively.
#[derive(Copy, Clone, Default, Debug)]
pub struct AlignmentValueParser;

impl ParseDirectiveValue for AlignmentValueParser {
    fn parse(&self, raw: &str) -> Result<DirectiveValue, ValueError> {
        let alignment = if raw.eq_ignore_ascii_case("left") {
            Alignment::Left
        } else if raw.eq_ignore_ascii_case("centre") {
            Alignment::Middle
        } else if raw.eq_ignore_ascii_case("right") {
            Alignment::Right
        } else {
            return Err(ValueError::Alignment {
                value: raw.to_owned(),
            });
        };
        Ok(DirectiveValue::Alignment(alignment))
    }
}
