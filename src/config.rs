// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunables for a check run.

use serde::{Deserialize, Serialize};

/// Knobs shared by every checker. `Default` is what the plain `check_*`
/// functions use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// How many extra draws an exhausted iterator must answer with `None`.
    pub exhausted_redraws: usize,
    /// Whether `Iterator::size_hint` must bracket the reference length.
    pub check_size_hint: bool,
}

impl CheckConfig {
    pub const DEFAULT_EXHAUSTED_REDRAWS: usize = 3;

    #[must_use]
    pub fn with_exhausted_redraws(mut self, redraws: usize) -> Self {
        self.exhausted_redraws = redraws;
        self
    }

    #[must_use]
    pub fn with_size_hint_check(mut self, enabled: bool) -> Self {
        self.check_size_hint = enabled;
        self
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            exhausted_redraws: Self::DEFAULT_EXHAUSTED_REDRAWS,
            check_size_hint: true,
        }
    }
}
