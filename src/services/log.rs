// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Log filtering: date-range and head-limit truncation over a user's
//! exercise sequence.

use crate::models::Exercise;
use crate::time_utils::parse_calendar_date;
use chrono::NaiveDate;

/// Filter parameters for a log query.
///
/// `from` and `to` bound the calendar date inclusively and compose;
/// `limit` truncates the already-filtered sequence from the head.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LogQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl LogQuery {
    /// Build a query from raw request parameters.
    ///
    /// Parsing is lenient: an unparseable `from`/`to` leaves that bound
    /// unset and an unparseable `limit` disables truncation, so malformed
    /// filters degrade to a no-op instead of rejecting the request.
    pub fn from_params(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            from: from.and_then(parse_calendar_date),
            to: to.and_then(parse_calendar_date),
            limit: limit.and_then(|raw| raw.trim().parse().ok()),
        }
    }

    /// Apply the filters, preserving the original relative order.
    pub fn apply(&self, exercises: &[Exercise]) -> Vec<Exercise> {
        let in_range = |e: &Exercise| {
            self.from.is_none_or(|from| e.date >= from) && self.to.is_none_or(|to| e.date <= to)
        };

        let filtered = exercises.iter().filter(|e| in_range(e)).cloned();
        match self.limit {
            Some(limit) => filtered.take(limit).collect(),
            None => filtered.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(description: &str, date: &str) -> Exercise {
        Exercise {
            description: description.to_string(),
            duration: 30,
            date: parse_calendar_date(date).unwrap(),
        }
    }

    fn sample_log() -> Vec<Exercise> {
        vec![
            exercise("run", "2023-01-01"),
            exercise("swim", "2023-02-01"),
            exercise("bike", "2023-03-01"),
        ]
    }

    fn descriptions(log: &[Exercise]) -> Vec<&str> {
        log.iter().map(|e| e.description.as_str()).collect()
    }

    #[test]
    fn test_no_filters_returns_everything() {
        let log = sample_log();
        let result = LogQuery::default().apply(&log);
        assert_eq!(descriptions(&result), vec!["run", "swim", "bike"]);
    }

    #[test]
    fn test_from_to_window_is_inclusive() {
        let log = sample_log();

        let query = LogQuery::from_params(Some("2023-01-15"), Some("2023-02-15"), None);
        assert_eq!(descriptions(&query.apply(&log)), vec!["swim"]);

        // Exact boundary dates are kept on both ends
        let query = LogQuery::from_params(Some("2023-01-01"), Some("2023-03-01"), None);
        assert_eq!(descriptions(&query.apply(&log)), vec!["run", "swim", "bike"]);
    }

    #[test]
    fn test_from_alone_and_to_alone() {
        let log = sample_log();

        let query = LogQuery::from_params(Some("2023-02-01"), None, None);
        assert_eq!(descriptions(&query.apply(&log)), vec!["swim", "bike"]);

        let query = LogQuery::from_params(None, Some("2023-01-31"), None);
        assert_eq!(descriptions(&query.apply(&log)), vec!["run"]);
    }

    #[test]
    fn test_limit_truncates_from_the_head() {
        let log = sample_log();

        let query = LogQuery::from_params(None, None, Some("2"));
        assert_eq!(descriptions(&query.apply(&log)), vec!["run", "swim"]);

        // Limit larger than the log is a no-op
        let query = LogQuery::from_params(None, None, Some("10"));
        assert_eq!(query.apply(&log).len(), 3);

        let query = LogQuery::from_params(None, None, Some("0"));
        assert!(query.apply(&log).is_empty());
    }

    #[test]
    fn test_limit_applies_after_date_filtering() {
        let log = sample_log();

        let query = LogQuery::from_params(Some("2023-02-01"), None, Some("1"));
        assert_eq!(descriptions(&query.apply(&log)), vec!["swim"]);
    }

    #[test]
    fn test_malformed_params_degrade_to_absent() {
        let log = sample_log();

        let query = LogQuery::from_params(Some("not-a-date"), Some("02/15/2023"), Some("many"));
        assert_eq!(query, LogQuery::default());
        assert_eq!(query.apply(&log).len(), 3);
    }

    #[test]
    fn test_empty_log() {
        let query = LogQuery::from_params(Some("2023-01-01"), None, Some("5"));
        assert!(query.apply(&[]).is_empty());
    }
}
