// Copyright 2026 the Reveal Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while parsing directives and building runs.

use core::fmt;
use core::num::ParseFloatError;

use peniko::color;

/// An error returned when a value handler rejects a directive value.
#[derive(Debug)]
pub enum ValueError {
    /// The value was not recognized CSS color syntax.
    Color {
        /// The rejected raw value.
        value: String,
        /// The underlying color parse failure.
        source: color::ParseError,
    },
    /// The value was not a number.
    Number {
        /// The rejected raw value.
        value: String,
        /// The underlying float parse failure.
        source: ParseFloatError,
    },
    /// The value was not one of the closed alignment set.
    Alignment {
        /// The rejected raw value.
        value: String,
    },
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color { value, .. } => write!(f, "invalid color value {value:?}"),
            Self::Number { value, .. } => write!(f, "invalid numeric value {value:?}"),
            Self::Alignment { value } => {
                write!(
                    f,
                    "invalid alignment value {value:?} (expected left, centre or right)"
                )
            }
        }
    }
}

impl core::error::Error for ValueError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Color { source, .. } => Some(source),
            Self::Number { source, .. } => Some(source),
            Self::Alignment { .. } => None,
        }
    }
}

/// An error returned when a directive span fails to lex or dispatch.
#[derive(Debug)]
pub enum FormatError {
    /// The span violated the `OPEN name SEP value CLOSE` grammar.
    Malformed {
        /// The offending span, as handed to the processor.
        span: String,
        /// Which grammar rule was violated.
        reason: &'static str,
    },
    /// The directive name is not registered with any handler.
    UnknownDirective(String),
    /// The handler for the directive rejected its value.
    InvalidValue {
        /// The resolved directive name.
        name: String,
        /// The handler's own failure.
        source: ValueError,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { span, reason } => {
                write!(f, "malformed directive {span:?}: {reason}")
            }
            Self::UnknownDirective(name) => write!(f, "unknown directive {name:?}"),
            Self::InvalidValue { name, .. } => write!(f, "invalid value for directive {name:?}"),
        }
    }
}

impl core::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidValue { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// An error returned by [`RunBuilder`](crate::RunBuilder) operations.
#[derive(Debug)]
pub enum BuildError {
    /// A directive span failed to parse or dispatch.
    Format(FormatError),
    /// The escape character was not followed by an escapable character.
    ///
    /// Line and column are 1-based and point at the escape character itself.
    UnrecognizedEscape {
        /// 1-based line of the escape character.
        line: usize,
        /// 1-based column (in characters) of the escape character.
        column: usize,
    },
    /// A font was registered twice under the same name.
    DuplicateFontName(String),
    /// A font directive named a font that was never registered.
    UnregisteredFontReference(String),
}

impl From<FormatError> for BuildError {
    fn from(err: FormatError) -> Self {
        Self::Format(err)
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(err) => fmt::Display::fmt(err, f),
            Self::UnrecognizedEscape { line, column } => {
                write!(f, "unrecognized escape sequence at line {line}, column {column}")
            }
            Self::DuplicateFontName(name) => write!(f, "font {name:?} is already registered"),
            Self::UnregisteredFontReference(name) => {
                write!(f, "font {name:?} has not been registered")
            }
        }
    }
}

impl core::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Format(err) => Some(err),
            _ => None,
        }
    }
}

/// An error returned when a handler registration supplies no usable aliases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyAliasList;

impl fmt::Display for EmptyAliasList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("alias list contains no usable aliases")
    }
}

impl core::error::Error for EmptyAliasList {}
