// Copyright 2026 the Reveal Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directive lexing, value parsing and dispatch.
//!
//! A directive is an inline `{name:value}` span that changes the styling of
//! subsequent text. [`FormatProcessor`] validates the span grammar,
//! [`HandlerRegistry`] resolves the (case-insensitive) name to a
//! [`ParseDirectiveValue`] handler, and a successful dispatch yields one
//! typed [`DirectiveValue`] for the consumer to match on.

mod processor;
mod registry;
mod value;

pub use processor::{DirectiveSyntax, FormatProcessor};
pub use registry::HandlerRegistry;
pub use value::{
    AlignmentValueParser, ColorValueParser, DirectiveKind, DirectiveValue, FontNameValueParser,
    ParseDirectiveValue, SecondsValueParser,
};
