// Copyright 2026 the Reveal Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled multi-line text with inline `{name:value}` directives and an
//! incremental typewriter reveal.
//!
//! - [`format`] lexes directive spans and parses their values through a
//!   pluggable, case-insensitive handler registry.
//! - [`RunBuilder`] walks a formatted string and emits positioned
//!   [`TextRun`]s, applying escape sequences, style directives and per-line
//!   alignment.
//! - [`RevealRenderer`] reveals queued runs character by character over two
//!   cached surfaces, so the steady-state cost of a frame does not grow with
//!   the amount of text already revealed.
//!
//! Font measurement ([`FontMetrics`]) and drawing ([`Surface`]) are host
//! capabilities injected at construction time; the core performs no I/O and
//! owns no threads.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

pub use peniko;

mod error;
mod font;
mod layout;
mod reveal;
mod style;
mod surface;
mod util;

pub mod format;

pub use error::{BuildError, EmptyAliasList, FormatError, ValueError};
pub use font::FontMetrics;
pub use format::{
    DirectiveKind, DirectiveSyntax, DirectiveValue, FormatProcessor, HandlerRegistry,
    ParseDirectiveValue,
};
pub use layout::{RunBuilder, TextRun};
pub use reveal::RevealRenderer;
pub use style::{Alignment, Color};
pub use surface::Surface;
