// Copyright 2026 the Reveal Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Case-insensitive alias registry for directive value handlers.

use core::fmt;

use hashbrown::HashMap;

use crate::error::{EmptyAliasList, FormatError};
use crate::util::NameKey;

use super::value::{
    AlignmentValueParser, ColorValueParser, DirectiveKind, DirectiveValue, FontNameValueParser,
    ParseDirectiveValue, SecondsValueParser,
};

/// Separator between aliases in a registration list.
const ALIAS_SEPARATOR: char = '|';

/// Maps case-insensitive directive aliases to value handlers.
///
/// Many aliases may name the same [`DirectiveKind`]; each kind has at most
/// one handler. The registry is set up once per builder configuration and
/// only read afterwards; there is no removal operation.
pub struct HandlerRegistry {
    aliases: HashMap<Box<[u8]>, DirectiveKind>,
    handlers: HashMap<DirectiveKind, Box<dyn ParseDirectiveValue>>,
}

impl HandlerRegistry {
    /// Creates an empty registry with no handlers.
    pub fn new() -> Self {
        Self {
            aliases: HashMap::new(),
            handlers: HashMap::new(),
        }
    }

    /// Creates a registry pre-loaded with the standard directive set:
    /// `colour|color|c`, `timepercharacter|tpc`, `font|f` and
    /// `alignment|a`.
    pub fn with_default_directives() -> Self {
        let mut registry = Self::new();
        registry
            .register("colour|color|c", DirectiveKind::Color, Box::new(ColorValueParser))
            .expect("alias list is non-empty");
        registry
            .register(
                "timepercharacter|tpc",
                DirectiveKind::RevealSpeed,
                Box::new(SecondsValueParser),
            )
            .expect("alias list is non-empty");
        registry
            .register("font|f", DirectiveKind::Font, Box::new(FontNameValueParser))
            .expect("alias list is non-empty");
        registry
            .register(
                "alignment|a",
                DirectiveKind::Alignment,
                Box::new(AlignmentValueParser),
            )
            .expect("alias list is non-empty");
        registry
    }

    /// Registers `handler` for `kind` under each alias in `aliases`.
    ///
    /// `aliases` is a `|`-separated list. Each alias is trimmed and case
    /// folded; empty aliases are skipped and aliases that are already
    /// registered keep their original kind. Errors if the list yields no
    /// usable alias at all, in which case nothing is registered.
    pub fn register(
        &mut self,
        aliases: &str,
        kind: DirectiveKind,
        handler: Box<dyn ParseDirectiveValue>,
    ) -> Result<(), EmptyAliasList> {
        let mut usable = 0;
        for alias in aliases.split(ALIAS_SEPARATOR) {
            let alias = alias.trim();
            if alias.is_empty() {
                continue;
            }
            usable += 1;
            let key = NameKey::from_str(alias);
            if !self.aliases.contains_key(key.as_bytes()) {
                self.aliases.insert(key.as_bytes().into(), kind);
            }
        }
        if usable == 0 {
            return Err(EmptyAliasList);
        }
        self.handlers.insert(kind, handler);
        Ok(())
    }

    /// Returns true if `name` resolves to a registered directive.
    pub fn can_handle(&self, name: &str) -> bool {
        self.aliases
            .contains_key(NameKey::from_str(name.trim()).as_bytes())
    }

    /// Resolves `name` to its handler and parses `raw` with it.
    ///
    /// The returned [`DirectiveValue`] is the "directive applied"
    /// notification; a handler failure is wrapped with the directive name
    /// and propagated, never swallowed.
    pub fn dispatch(&self, name: &str, raw: &str) -> Result<DirectiveValue, FormatError> {
        let key = NameKey::from_str(name.trim());
        let Some(kind) = self.aliases.get(key.as_bytes()).copied() else {
            return Err(FormatError::UnknownDirective(name.to_owned()));
        };
        let Some(handler) = self.handlers.get(&kind) else {
            return Err(FormatError::UnknownDirective(name.to_owned()));
        };
        handler
            .parse(raw)
            .map_err(|source| FormatError::InvalidValue {
                name: name.to_owned(),
                source,
            })
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("aliases", &self.aliases.len())
            .field("handlers", &self.handlers.len())
            .finish_non_exhaustive()
    }
}
