// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar-date parsing and formatting.

use chrono::NaiveDate;

/// Parse an ISO `YYYY-MM-DD` calendar date.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Format a date in the fixed `Www Mmm DD YYYY` form used in responses,
/// e.g. "Sun Jan 15 2023". Independent of time zone.
pub fn format_date_string(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}
