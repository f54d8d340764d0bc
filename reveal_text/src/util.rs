// Copyright 2026 the Reveal Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Internal helpers.

use smallvec::SmallVec;

/// Key for case-insensitive lookup of directive aliases and font names.
///
/// Folds Unicode case into a small inline buffer so short names avoid an
/// allocation.
#[derive(Default)]
pub(crate) struct NameKey {
    data: SmallVec<[u8; 64]>,
}

impl NameKey {
    pub(crate) fn from_str(s: &str) -> Self {
        let mut res = Self::default();
        let mut buf = [0_u8; 4];
        for ch in s.chars() {
            for ch in ch.to_lowercase() {
                res.data
                    .extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            }
        }
        res
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
