// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Date value types for both calendars.
//!
//! [`NanakshahiDate`] is a plain value with public fields: its day is only
//! checked when it is built through [`NanakshahiDate::new`], so callers may
//! hand the converter out-of-range days and get the overflow carry.
//!
//! [`GregorianDate`] wraps a `chrono::NaiveDate` and therefore always
//! names a real civil day.

use crate::anchor::days_in_nanakshahi_month;
use crate::error::CalendarError;
use crate::month::{gregorian_month_name, weekday_name, Language, NanakshahiMonth};
use chrono::{Datelike, NaiveDate, Weekday};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// NanakshahiDate
// ═══════════════════════════════════════════════════════════════════════════

/// A day of the Nanakshahi calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NanakshahiDate {
    /// Nanakshahi era year; year 1 begins on 1469-03-14.
    pub year: i32,
    pub month: NanakshahiMonth,
    pub day: u32,
    /// Weekday of the equivalent civil date, when known.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub weekday: Option<Weekday>,
}

impl NanakshahiDate {
    /// Checked constructor.
    ///
    /// # Errors
    /// Rejects years below 1, months outside `1..=12`, and days outside
    /// the month's effective length in that year.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        let month = NanakshahiMonth::from_number(month)?;
        let max_day = days_in_nanakshahi_month(year, month)?;
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                day,
                month: month.number(),
                max_day,
            });
        }
        Ok(Self::from_parts(year, month, day))
    }

    /// Unchecked constructor; the weekday is left unknown.
    #[inline]
    pub const fn from_parts(year: i32, month: NanakshahiMonth, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            weekday: None,
        }
    }

    #[inline]
    pub const fn with_weekday(self, weekday: Weekday) -> Self {
        Self {
            weekday: Some(weekday),
            ..self
        }
    }

    #[inline]
    pub const fn month_number(&self) -> u32 {
        self.month.number()
    }

    #[inline]
    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }

    #[inline]
    pub const fn month_name_in(&self, language: Language) -> &'static str {
        self.month.name_in(language)
    }

    /// English weekday name, if the weekday is known.
    #[inline]
    pub fn day_name(&self) -> Option<&'static str> {
        self.day_name_in(Language::English)
    }

    pub fn day_name_in(&self, language: Language) -> Option<&'static str> {
        self.weekday.map(|w| weekday_name(w, language))
    }

    /// Same month and day, any year.
    ///
    /// Recurring observances are stored without a year and matched this way.
    #[inline]
    pub fn falls_on(&self, other: &Self) -> bool {
        self.month == other.month && self.day == other.day
    }

    /// `(year, month, day)` ignoring the weekday.
    #[inline]
    pub const fn ymd(&self) -> (i32, u32, u32) {
        (self.year, self.month.number(), self.day)
    }
}

impl fmt::Display for NanakshahiDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// GregorianDate
// ═══════════════════════════════════════════════════════════════════════════

/// A civil date with its month and weekday names at hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GregorianDate(NaiveDate);

impl GregorianDate {
    /// # Errors
    /// [`CalendarError::InvalidGregorianDate`] if the triple is not a civil date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidGregorianDate { year, month, day })
    }

    #[inline]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    #[inline]
    pub const fn naive(&self) -> NaiveDate {
        self.0
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn month_name(&self) -> &'static str {
        // chrono months are always 1..=12.
        gregorian_month_name(self.month()).unwrap_or_default()
    }

    #[inline]
    pub fn day_name(&self) -> &'static str {
        weekday_name(self.weekday(), Language::English)
    }

    #[inline]
    pub fn day_name_in(&self, language: Language) -> &'static str {
        weekday_name(self.weekday(), language)
    }
}

impl From<NaiveDate> for GregorianDate {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<GregorianDate> for NaiveDate {
    #[inline]
    fn from(date: GregorianDate) -> Self {
        date.0
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
