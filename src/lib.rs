// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Nanakshahi Calendar
//!
//! This crate converts dates between the Gregorian civil calendar and the
//! Nanakshahi calendar: a solar calendar of twelve months whose year 1
//! begins on 14 March 1469 CE, each month starting on a fixed Gregorian
//! date.
//!
//! # Core types
//!
//! - [`NanakshahiDate`] — a day of the Nanakshahi calendar.
//! - [`GregorianDate`] — a civil day with its month and weekday names.
//! - [`NanakshahiMonth`] — Chet through Phagan, with English and Punjabi names.
//! - [`Anchor`] — the Gregorian month/day on which a Nanakshahi month begins.
//! - [`MonthSpan`] — the civil interval covered by one Nanakshahi month.
//! - [`Converter`] — conversion under a set of [`ConversionOptions`].
//!
//! # Conversions
//!
//! | Function | Direction |
//! |----------|-----------|
//! | [`gregorian_to_nanakshahi`] | civil → Nanakshahi |
//! | [`nanakshahi_to_gregorian`] | Nanakshahi → civil |
//! | [`current_nanakshahi_date`] | today, Nanakshahi |
//! | [`current_gregorian_date`] | today, civil |
//!
//! ```
//! use chrono::NaiveDate;
//! use nanakshahi::{gregorian_to_nanakshahi, NanakshahiMonth};
//!
//! let date = gregorian_to_nanakshahi(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()).unwrap();
//! assert_eq!(date.year, 556);
//! assert_eq!(date.month, NanakshahiMonth::Chet);
//! assert_eq!(date.day, 1);
//! assert_eq!(date.to_string(), "1 Chet 556");
//! ```
//!
//! # Civil calendar
//!
//! Leap years, civil month lengths and weekdays come from `chrono`. The
//! current date is read through the [`Clock`] trait; [`SystemClock`] uses
//! the host's local time and [`FixedClock`] pins a date for tests.
//!
//! # Logging
//!
//! Conversions emit `tracing` events at `trace` and `debug` level. The crate
//! never installs a subscriber.

pub mod anchor;
mod civil;
mod config;
mod convert;
mod current;
mod date;
mod error;
pub mod month;
mod span;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use anchor::{days_in_nanakshahi_month, month_start, Anchor, ANCHORS, EPOCH_YEAR};
pub use civil::{days_in_month, weekday_of, Clock, FixedClock, SystemClock};
pub use config::{ConversionOptions, DayOverflow};
pub use convert::{gregorian_to_nanakshahi, nanakshahi_to_gregorian, Converter};
pub use current::{
    current_gregorian_date, current_gregorian_date_with, current_nanakshahi_date,
    current_nanakshahi_date_with,
};
pub use date::{GregorianDate, NanakshahiDate};
pub use error::CalendarError;
pub use month::{Language, MonthInfo, NanakshahiMonth, NANAKSHAHI_MONTHS};
pub use span::MonthSpan;
