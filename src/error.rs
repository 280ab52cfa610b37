// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every fallible operation in the crate.

use chrono::NaiveDate;

/// Error type for calendar construction and conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// The civil date precedes 1 Chet of Nanakshahi year 1 (1469-03-14).
    #[error("date {date} precedes the Nanakshahi epoch (1469-03-14)")]
    BeforeEpoch {
        /// The rejected civil date.
        date: NaiveDate,
    },

    /// A Nanakshahi year below 1.
    #[error("invalid Nanakshahi year: {year} (must be >= 1)")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },

    /// A month number outside `1..=12`.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The rejected month number.
        month: u32,
    },

    /// A day of zero, or a day above the month length when carrying is disabled.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The rejected day.
        day: u32,
        /// The Nanakshahi month number the day was given for.
        month: u32,
        /// The largest day accepted for that month.
        max_day: u32,
    },

    /// Year/month/day triple that is not a real civil date.
    #[error("invalid Gregorian date: {year:04}-{month:02}-{day:02}")]
    InvalidGregorianDate {
        /// Civil year.
        year: i32,
        /// Civil month.
        month: u32,
        /// Civil day.
        day: u32,
    },

    /// The result cannot be represented by the civil calendar backend.
    #[error("date out of representable range")]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_before_epoch() {
        let date = NaiveDate::from_ymd_opt(1469, 3, 13).unwrap();
        let err = CalendarError::BeforeEpoch { date };
        assert_eq!(
            err.to_string(),
            "date 1469-03-13 precedes the Nanakshahi epoch (1469-03-14)"
        );
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 33,
            month: 3,
            max_day: 32,
        };
        assert_eq!(err.to_string(), "invalid day: 33 for month 3 (max 32)");
    }

    #[test]
    fn error_invalid_gregorian_date_is_zero_padded() {
        let err = CalendarError::InvalidGregorianDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "invalid Gregorian date: 2023-02-29");
    }

    #[test]
    fn error_is_std_error_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn public_types_are_send_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<crate::NanakshahiDate>();
        assert_impl::<crate::GregorianDate>();
        assert_impl::<crate::MonthSpan>();
        assert_impl::<crate::Converter>();
        assert_impl::<crate::ConversionOptions>();
        assert_impl::<crate::FixedClock>();
        assert_impl::<crate::SystemClock>();
        assert_impl::<crate::NanakshahiMonth>();
    }
}
