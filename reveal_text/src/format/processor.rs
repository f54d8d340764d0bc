// Copyright 2026 the Reveal Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directive span lexing.

use crate::error::FormatError;

use super::registry::HandlerRegistry;
use super::value::DirectiveValue;

/// The four single-character delimiters of the directive grammar.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct DirectiveSyntax {
    /// Opens a directive span.
    pub open: char,
    /// Closes a directive span.
    pub close: char,
    /// Separates the directive name from its value.
    pub separator: char,
    /// Escapes a literal open, close or escape character in text.
    pub escape: char,
}

impl Default for DirectiveSyntax {
    fn default() -> Self {
        Self {
            open: '{',
            close: '}',
            separator: ':',
            escape: '\\',
        }
    }
}

/// Validates directive spans and dispatches them through a
/// [`HandlerRegistry`].
#[derive(Debug)]
pub struct FormatProcessor {
    syntax: DirectiveSyntax,
    registry: HandlerRegistry,
}

impl FormatProcessor {
    /// Creates a processor over `registry` with the default `{name:value}`
    /// syntax.
    pub fn new(registry: HandlerRegistry) -> Self {
        Self::with_syntax(DirectiveSyntax::default(), registry)
    }

    /// Creates a processor with custom delimiters.
    pub fn with_syntax(syntax: DirectiveSyntax, registry: HandlerRegistry) -> Self {
        Self { syntax, registry }
    }

    /// Returns the delimiter configuration.
    pub fn syntax(&self) -> DirectiveSyntax {
        self.syntax
    }

    /// Returns the handler registry.
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Returns the handler registry for further registration.
    pub fn registry_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.registry
    }

    /// Processes one inclusive directive span such as `{color:red}`.
    ///
    /// The span must start with the open delimiter, end with the close
    /// delimiter, and contain exactly one separator-delimited name/value
    /// pair, both non-empty after trimming. The name is case folded before
    /// registry lookup. On success, returns the typed value parsed by the
    /// registered handler.
    pub fn process(&self, span: &str) -> Result<DirectiveValue, FormatError> {
        let malformed = |reason| FormatError::Malformed {
            span: span.to_owned(),
            reason,
        };
        let inner = span
            .strip_prefix(self.syntax.open)
            .ok_or_else(|| malformed("missing opening delimiter"))?
            .strip_suffix(self.syntax.close)
            .ok_or_else(|| malformed("missing closing delimiter"))?;

        let mut tokens = inner.split(self.syntax.separator);
        let (name, value) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(name), Some(value), None) => (name, value),
            _ => return Err(malformed("expected exactly one name/value pair")),
        };

        let name = name.trim().to_lowercase();
        let value = value.trim();
        if name.is_empty() {
            return Err(malformed("empty directive name"));
        }
        if value.is_empty() {
            return Err(malformed("empty directive value"));
        }
        if !self.registry.can_handle(&name) {
            return Err(FormatError::UnknownDirective(name));
        }
        self.registry.dispatch(&name, value)
    }
}

impl Default for FormatProcessor {
    /// A processor with the default syntax and the standard directive set.
    fn default() -> Self {
        Self::new(HandlerRegistry::with_default_directives())
    }
}
