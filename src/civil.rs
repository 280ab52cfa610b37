// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil (Gregorian) calendar primitives.
//!
//! Leap years, month lengths and weekdays are chrono's business; this
//! module only narrows its API to the three questions the converter asks:
//! how long is a civil month, which weekday is a civil date, and what day
//! is it today. The last one goes through the [`Clock`] trait so callers
//! can pin "today" in tests.

use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Number of days in civil `month` of `year`, or `None` if chrono cannot
/// represent that month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// Weekday of a civil date, or `None` if the date does not exist.
#[inline]
pub fn weekday_of(year: i32, month: u32, day: u32) -> Option<Weekday> {
    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.weekday())
}

/// Whole days from `from` to `to` (negative when `to` is earlier).
#[inline]
pub(crate) fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Source of the current civil date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The host's local wall clock.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    #[inline]
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_follows_chrono_leap_rules() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
    }

    #[test]
    fn december_crosses_year() {
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 11), Some(30));
    }

    #[test]
    fn invalid_month_has_no_length() {
        assert_eq!(days_in_month(2024, 0), None);
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn weekday_lookup() {
        assert_eq!(weekday_of(2024, 3, 14), Some(Weekday::Thu));
        assert_eq!(weekday_of(2023, 2, 29), None);
    }

    #[test]
    fn days_between_is_signed() {
        let a = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let b = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(days_between(a, b), 1);
        assert_eq!(days_between(b, a), -1);
    }

    #[test]
    fn fixed_clock_through_reference() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 13).unwrap();
        let clock = FixedClock(date);
        let by_ref: &dyn Clock = &clock;
        assert_eq!(by_ref.today(), date);
        assert_eq!((&clock).today(), date);
    }
}
