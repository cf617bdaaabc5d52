// SPDX-License-Identifier: MPL-2.0
//! Named viewport-width thresholds.
//!
//! Each breakpoint marks the lower bound of a size regime. A viewport is
//! "at least" a breakpoint when its width reaches that bound.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    #[default]
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Lower bound of the regime, in logical pixels.
    #[must_use]
    pub const fn min_width(self) -> f32 {
        match self {
            Breakpoint::Xs => 0.0,
            Breakpoint::Sm => 600.0,
            Breakpoint::Md => 900.0,
            Breakpoint::Lg => 1200.0,
            Breakpoint::Xl => 1536.0,
        }
    }

    #[must_use]
    pub fn is_at_least(self, width: f32) -> bool {
        width >= self.min_width()
    }

    /// The largest breakpoint whose regime contains `width`.
    #[must_use]
    pub fn for_width(width: f32) -> Breakpoint {
        Self::ALL
            .into_iter()
            .rev()
            .find(|bp| bp.is_at_least(width))
            .unwrap_or(Breakpoint::Xs)
    }
}
