// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A logged exercise, owned by exactly one user.
///
/// Immutable once stored; the store only ever appends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// What was done
    pub description: String,
    /// Duration in minutes
    pub duration: u32,
    /// Calendar date the exercise took place
    pub date: NaiveDate,
}
