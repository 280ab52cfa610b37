// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Gregorian ↔ Nanakshahi conversion.
//!
//! # Gregorian → Nanakshahi
//!
//! The Nanakshahi year is first estimated as `civil_year − 1468`. Two paths
//! then locate the month:
//!
//! * **Early-year path** (January 1 through March 13). The date belongs to
//!   the previous Nanakshahi year. Days are counted from December 31 of the
//!   previous civil year, and the tail of the anchor chain (Phagan, Magh,
//!   Poh) is expressed on the same count; the latest anchor not after the
//!   date gives the month.
//! * **Anchor scan** (March 14 through December 31). The twelve anchors are
//!   scanned in order and the first half-open interval
//!   `[anchor_i, anchor_{i+1})` holding the date gives the month.
//!
//! # Nanakshahi → Gregorian
//!
//! The anchor of the month is offset by `day − 1`; any surplus over the
//! civil month's length is carried into the following civil months.
//!
//! ```
//! use chrono::NaiveDate;
//! use nanakshahi::{gregorian_to_nanakshahi, nanakshahi_to_gregorian, NanakshahiMonth};
//!
//! let vaisakhi = NaiveDate::from_ymd_opt(2024, 4, 13).unwrap();
//! let date = gregorian_to_nanakshahi(vaisakhi).unwrap();
//! assert_eq!((date.year, date.month, date.day), (556, NanakshahiMonth::Vaisakh, 1));
//!
//! let back = nanakshahi_to_gregorian(&date).unwrap();
//! assert_eq!(back.naive(), vaisakhi);
//! ```

use crate::anchor::{self, Anchor, ANCHORS, YEAR_OFFSET};
use crate::civil::{self, days_between};
use crate::config::{ConversionOptions, DayOverflow};
use crate::date::{GregorianDate, NanakshahiDate};
use crate::error::CalendarError;
use crate::month::NanakshahiMonth;
use crate::span::MonthSpan;
use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace};

/// Converts dates between the two calendars under a set of
/// [`ConversionOptions`].
///
/// The free functions [`gregorian_to_nanakshahi`] and
/// [`nanakshahi_to_gregorian`] use `Converter::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Converter {
    options: ConversionOptions,
}

impl Converter {
    pub const fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub const fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Nanakshahi date of a civil date.
    ///
    /// # Errors
    /// [`CalendarError::BeforeEpoch`] for dates before 1469-03-14.
    pub fn to_nanakshahi(&self, date: NaiveDate) -> Result<NanakshahiDate, CalendarError> {
        if date < anchor::epoch()? {
            return Err(CalendarError::BeforeEpoch { date });
        }

        let civil_year = date.year();
        let mut year = civil_year - YEAR_OFFSET;

        let chet = Anchor::of(NanakshahiMonth::Chet);
        let (month, day) = if chet.is_after(date.month(), date.day()) {
            year -= 1;
            let (month, day) = count_from_year_end(date)?;
            trace!(%date, %month, day, "early-year path");
            (month, day)
        } else {
            let (month, day) = scan_anchors(date, civil_year).ok_or(CalendarError::OutOfRange)?;
            trace!(%date, %month, day, "anchor scan");
            (month, day)
        };

        Ok(NanakshahiDate::from_parts(year, month, day).with_weekday(date.weekday()))
    }

    /// Civil date of a Nanakshahi date.
    ///
    /// # Errors
    /// [`CalendarError::InvalidYear`] for years below 1,
    /// [`CalendarError::InvalidDay`] for day 0 (and for days past the month
    /// under [`DayOverflow::Reject`]), [`CalendarError::OutOfRange`] when the
    /// result leaves chrono's range.
    pub fn to_gregorian(&self, date: &NanakshahiDate) -> Result<GregorianDate, CalendarError> {
        let max_day = anchor::days_in_nanakshahi_month(date.year, date.month)?;
        if date.day == 0 || (self.options.overflow == DayOverflow::Reject && date.day > max_day) {
            return Err(CalendarError::InvalidDay {
                day: date.day,
                month: date.month.number(),
                max_day,
            });
        }
        if date.day > max_day {
            debug!(
                %date,
                max_day,
                "day exceeds month length, carrying into the following month"
            );
        }

        let anchor = Anchor::of(date.month);
        let mut year = anchor
            .civil_year(date.year)
            .ok_or(CalendarError::OutOfRange)?;
        let mut month = anchor.month;
        let mut day = anchor
            .day
            .checked_add(date.day - 1)
            .ok_or(CalendarError::OutOfRange)?;

        loop {
            let len = civil::days_in_month(year, month).ok_or(CalendarError::OutOfRange)?;
            if day <= len {
                break;
            }
            day -= len;
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }

        GregorianDate::new(year, month, day).map_err(|_| CalendarError::OutOfRange)
    }

    /// Civil days spanned by `month` of Nanakshahi `year`.
    #[inline]
    pub fn days_in_month(&self, year: i32, month: NanakshahiMonth) -> Result<u32, CalendarError> {
        anchor::days_in_nanakshahi_month(year, month)
    }

    #[inline]
    pub fn month_span(
        &self,
        year: i32,
        month: NanakshahiMonth,
    ) -> Result<MonthSpan, CalendarError> {
        MonthSpan::new(year, month)
    }
}

/// Nanakshahi date of a civil date, with default options.
///
/// # Errors
/// See [`Converter::to_nanakshahi`].
pub fn gregorian_to_nanakshahi(date: NaiveDate) -> Result<NanakshahiDate, CalendarError> {
    Converter::default().to_nanakshahi(date)
}

/// Civil date of a Nanakshahi date, with default options.
///
/// # Errors
/// See [`Converter::to_gregorian`].
pub fn nanakshahi_to_gregorian(date: &NanakshahiDate) -> Result<GregorianDate, CalendarError> {
    Converter::default().to_gregorian(date)
}

/// Month and day of a date between January 1 and the Chet anchor, counted
/// from December 31 of the previous civil year.
pub(crate) fn count_from_year_end(
    date: NaiveDate,
) -> Result<(NanakshahiMonth, u32), CalendarError> {
    let civil_year = date.year();
    let year_end =
        NaiveDate::from_ymd_opt(civil_year - 1, 12, 31).ok_or(CalendarError::OutOfRange)?;
    let offset = days_between(year_end, date);

    for month in NanakshahiMonth::ALL.iter().rev() {
        let anchor = Anchor::of(*month);
        let anchor_year = if anchor.rolls_over() {
            civil_year
        } else {
            civil_year - 1
        };
        let start = anchor
            .date_in(anchor_year)
            .ok_or(CalendarError::OutOfRange)?;
        let anchor_offset = days_between(year_end, start);
        if anchor_offset <= offset {
            let day = u32::try_from(offset - anchor_offset + 1)
                .map_err(|_| CalendarError::OutOfRange)?;
            return Ok((*month, day));
        }
    }
    Err(CalendarError::OutOfRange)
}

/// Month and day of `date` within the anchor intervals that start in
/// `civil_year`, or `None` if no interval holds it.
pub(crate) fn scan_anchors(date: NaiveDate, civil_year: i32) -> Option<(NanakshahiMonth, u32)> {
    for (i, month) in NanakshahiMonth::ALL.iter().enumerate() {
        let current = ANCHORS[i];
        let next = ANCHORS[(i + 1) % 12];

        let current_start = current.date_in(civil_year)?;
        let next_year = if next.month < current.month {
            civil_year + 1
        } else {
            civil_year
        };
        let next_start = next.date_in(next_year)?;

        if current_start <= date && date < next_start {
            let day = u32::try_from(days_between(current_start, date) + 1).ok()?;
            return Some((*month, day));
        }
    }
    None
}
