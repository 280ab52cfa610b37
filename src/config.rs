// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Conversion policy.
//!
//! With the `serde` feature the options deserialize from any serde format;
//! missing keys take their defaults and unknown keys are rejected:
//!
//! ```toml
//! overflow = "reject"
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do with a Nanakshahi day beyond its month's length when
/// converting to the civil calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DayOverflow {
    /// Carry surplus days into the following civil months.
    #[default]
    Carry,
    /// Fail with [`CalendarError::InvalidDay`](crate::CalendarError::InvalidDay).
    Reject,
}

/// Options for a [`Converter`](crate::Converter).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ConversionOptions {
    pub overflow: DayOverflow,
}

impl ConversionOptions {
    /// Options that reject every out-of-range input.
    pub const fn strict() -> Self {
        Self {
            overflow: DayOverflow::Reject,
        }
    }

    pub const fn with_overflow(self, overflow: DayOverflow) -> Self {
        Self { overflow }
    }
}
