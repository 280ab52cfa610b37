// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil interval covered by one Nanakshahi month.
//!
//! A [`MonthSpan`] is the half-open range `[start, end)` of civil dates
//! between a month's anchor and the next month's anchor. It is what a
//! month grid needs: where the month starts, which weekday that is, how
//! many cells to draw, and the Nanakshahi date of every cell.

use crate::anchor::{month_start, next_month_start};
use crate::civil::days_between;
use crate::convert::gregorian_to_nanakshahi;
use crate::date::NanakshahiDate;
use crate::error::CalendarError;
use crate::month::NanakshahiMonth;
use chrono::{Datelike, NaiveDate, Weekday};
use qtty::Days;
use std::fmt;

/// One Nanakshahi month of one Nanakshahi year, on the civil axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MonthSpan {
    pub year: i32,
    pub month: NanakshahiMonth,
    /// First civil day of the month.
    pub start: NaiveDate,
    /// First civil day of the following month (exclusive).
    pub end: NaiveDate,
}

impl MonthSpan {
    /// # Errors
    /// [`CalendarError::InvalidYear`] for years below 1,
    /// [`CalendarError::OutOfRange`] past chrono's range.
    pub fn new(year: i32, month: NanakshahiMonth) -> Result<Self, CalendarError> {
        Ok(Self {
            year,
            month,
            start: month_start(year, month)?,
            end: next_month_start(year, month)?,
        })
    }

    /// The month holding a civil date.
    ///
    /// # Errors
    /// As [`gregorian_to_nanakshahi`].
    pub fn containing(date: NaiveDate) -> Result<Self, CalendarError> {
        let nanakshahi = gregorian_to_nanakshahi(date)?;
        Self::new(nanakshahi.year, nanakshahi.month)
    }

    /// Number of days in the month.
    pub fn len(&self) -> u32 {
        // start < end by construction of the anchor table.
        u32::try_from(days_between(self.start, self.end)).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length of the month as a typed quantity.
    pub fn duration(&self) -> Days {
        Days::new(f64::from(self.len()))
    }

    /// Last civil day belonging to the month.
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.end.pred_opt()
    }

    /// Weekday of day 1, for laying out a month grid.
    #[inline]
    pub fn first_weekday(&self) -> Weekday {
        self.start.weekday()
    }

    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Civil dates of the month in order.
    pub fn gregorian_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d < self.end)
    }

    /// Nanakshahi dates of the month in order, weekdays filled in.
    pub fn dates(&self) -> impl Iterator<Item = NanakshahiDate> + '_ {
        self.gregorian_dates().zip(1..).map(move |(civil, day)| {
            NanakshahiDate::from_parts(self.year, self.month, day).with_weekday(civil.weekday())
        })
    }

    /// The next month, crossing into the next year after Phagan.
    pub fn following(&self) -> Result<Self, CalendarError> {
        match self.month {
            NanakshahiMonth::Phagan => {
                let next = self.year.checked_add(1).ok_or(CalendarError::OutOfRange)?;
                Self::new(next, NanakshahiMonth::Chet)
            }
            month => Self::new(self.year, month.succ()),
        }
    }
}

impl fmt::Display for MonthSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({} to {})", self.month, self.year, self.start, self.end)
    }
}
