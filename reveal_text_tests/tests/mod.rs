// Copyright 2026 the Reveal Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration tests for `reveal_text`.

mod layout;
