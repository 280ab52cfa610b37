// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Gregorian anchors of the Nanakshahi months.
//!
//! Every Nanakshahi month begins on a fixed Gregorian month/day. The anchors
//! of Chet through Poh fall in the civil year in which the Nanakshahi year
//! starts; Magh and Phagan fall in the following civil year.
//!
//! | Month | Anchor | Civil year |
//! |-------|--------|------------|
//! | Chet | Mar 14 | `y + 1468` |
//! | Vaisakh | Apr 13 | `y + 1468` |
//! | Jeth | May 14 | `y + 1468` |
//! | Harh | Jun 15 | `y + 1468` |
//! | Sawan | Jul 16 | `y + 1468` |
//! | Bhadon | Aug 16 | `y + 1468` |
//! | Assu | Sep 17 | `y + 1468` |
//! | Katik | Oct 17 | `y + 1468` |
//! | Maghar | Nov 17 | `y + 1468` |
//! | Poh | Dec 18 | `y + 1468` |
//! | Magh | Jan 17 | `y + 1469` |
//! | Phagan | Feb 17 | `y + 1469` |
//!
//! The anchors, not the nominal month table, decide where a month ends.
//! The span between two anchors is therefore the month's effective length:
//! Jeth and Bhadon span 32 civil days, Phagan 25 (26 before a leap day).

use crate::error::CalendarError;
use crate::month::NanakshahiMonth;
use chrono::NaiveDate;

/// Civil year in which Nanakshahi year 1 begins.
pub const EPOCH_YEAR: i32 = 1469;

/// `civil_year = nanakshahi_year + YEAR_OFFSET` for the months Chet..=Poh.
pub(crate) const YEAR_OFFSET: i32 = EPOCH_YEAR - 1;

/// Gregorian month and day on which a Nanakshahi month begins.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub month: u32,
    pub day: u32,
}

/// Month-start anchors, indexed by Nanakshahi month (Chet first).
#[rustfmt::skip]
pub const ANCHORS: [Anchor; 12] = [
    Anchor { month: 3, day: 14 },  // Chet
    Anchor { month: 4, day: 13 },  // Vaisakh
    Anchor { month: 5, day: 14 },  // Jeth
    Anchor { month: 6, day: 15 },  // Harh
    Anchor { month: 7, day: 16 },  // Sawan
    Anchor { month: 8, day: 16 },  // Bhadon
    Anchor { month: 9, day: 17 },  // Assu
    Anchor { month: 10, day: 17 }, // Katik
    Anchor { month: 11, day: 17 }, // Maghar
    Anchor { month: 12, day: 18 }, // Poh
    Anchor { month: 1, day: 17 },  // Magh
    Anchor { month: 2, day: 17 },  // Phagan
];

impl Anchor {
    /// Anchor of a Nanakshahi month.
    #[inline]
    pub const fn of(month: NanakshahiMonth) -> Self {
        ANCHORS[month.index()]
    }

    /// Whether the anchor lies in the civil year after the one Chet starts in.
    #[inline]
    pub const fn rolls_over(self) -> bool {
        self.month < ANCHORS[0].month
    }

    /// Civil year holding this anchor for a given Nanakshahi year, or `None`
    /// if it does not fit in an `i32`.
    #[inline]
    pub const fn civil_year(self, nanakshahi_year: i32) -> Option<i32> {
        let offset = if self.rolls_over() {
            YEAR_OFFSET + 1
        } else {
            YEAR_OFFSET
        };
        nanakshahi_year.checked_add(offset)
    }

    /// The anchor as a date in `civil_year`.
    #[inline]
    pub fn date_in(self, civil_year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(civil_year, self.month, self.day)
    }

    /// Whether `(month, day)` comes before this anchor within a civil year.
    #[inline]
    pub const fn is_after(self, month: u32, day: u32) -> bool {
        month < self.month || (month == self.month && day < self.day)
    }
}

/// 1 Chet of Nanakshahi year 1.
pub fn epoch() -> Result<NaiveDate, CalendarError> {
    month_start(1, NanakshahiMonth::Chet)
}

/// Civil date of day 1 of `month` in Nanakshahi `year`.
///
/// # Errors
/// [`CalendarError::InvalidYear`] for years below 1,
/// [`CalendarError::OutOfRange`] past chrono's range.
pub fn month_start(year: i32, month: NanakshahiMonth) -> Result<NaiveDate, CalendarError> {
    if year < 1 {
        return Err(CalendarError::InvalidYear { year });
    }
    let anchor = Anchor::of(month);
    anchor
        .civil_year(year)
        .and_then(|civil_year| anchor.date_in(civil_year))
        .ok_or(CalendarError::OutOfRange)
}

/// Civil date of day 1 of the month after `month`, crossing into the next
/// Nanakshahi year after Phagan.
pub(crate) fn next_month_start(
    year: i32,
    month: NanakshahiMonth,
) -> Result<NaiveDate, CalendarError> {
    match month {
        NanakshahiMonth::Phagan => {
            let next = year.checked_add(1).ok_or(CalendarError::OutOfRange)?;
            month_start(next, NanakshahiMonth::Chet)
        }
        _ => month_start(year, month.succ()),
    }
}

/// Number of civil days `month` of Nanakshahi `year` spans.
///
/// # Errors
/// Same as [`month_start`].
pub fn days_in_nanakshahi_month(year: i32, month: NanakshahiMonth) -> Result<u32, CalendarError> {
    let start = month_start(year, month)?;
    let end = next_month_start(year, month)?;
    u32::try_from(end.signed_duration_since(start).num_days())
        .map_err(|_| CalendarError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::NanakshahiMonth::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn only_magh_and_phagan_roll_over() {
        let rolled: Vec<_> = NanakshahiMonth::ALL
            .iter()
            .filter(|m| Anchor::of(**m).rolls_over())
            .copied()
            .collect();
        assert_eq!(rolled, vec![Magh, Phagan]);
    }

    #[test]
    fn epoch_is_chet_first_1469() {
        assert_eq!(epoch(), Ok(ymd(1469, 3, 14)));
    }

    #[test]
    fn month_start_resolves_year_for_tail_months() {
        assert_eq!(month_start(556, Chet), Ok(ymd(2024, 3, 14)));
        assert_eq!(month_start(556, Poh), Ok(ymd(2024, 12, 18)));
        assert_eq!(month_start(556, Magh), Ok(ymd(2025, 1, 17)));
        assert_eq!(month_start(556, Phagan), Ok(ymd(2025, 2, 17)));
    }

    #[test]
    fn month_start_rejects_non_positive_year() {
        assert_eq!(
            month_start(0, Chet),
            Err(CalendarError::InvalidYear { year: 0 })
        );
    }

    #[test]
    fn civil_year_overflow_is_out_of_range() {
        assert_eq!(Anchor::of(Magh).civil_year(i32::MAX - YEAR_OFFSET), None);
        assert_eq!(
            Anchor::of(Poh).civil_year(i32::MAX - YEAR_OFFSET),
            Some(i32::MAX)
        );
        assert_eq!(
            month_start(i32::MAX - YEAR_OFFSET, Magh),
            Err(CalendarError::OutOfRange)
        );
        assert_eq!(month_start(i32::MAX, Chet), Err(CalendarError::OutOfRange));
        assert_eq!(
            next_month_start(i32::MAX, Phagan),
            Err(CalendarError::OutOfRange)
        );
        assert_eq!(
            days_in_nanakshahi_month(i32::MAX, Chet),
            Err(CalendarError::OutOfRange)
        );
    }

    #[test]
    fn effective_lengths_follow_anchors() {
        // 556 → Phagan runs into February 2025 (common year).
        let lengths: Vec<u32> = NanakshahiMonth::ALL
            .iter()
            .map(|m| days_in_nanakshahi_month(556, *m).unwrap())
            .collect();
        assert_eq!(lengths, vec![30, 31, 32, 31, 31, 32, 30, 31, 31, 30, 31, 25]);
        assert_eq!(lengths.iter().sum::<u32>(), 365);
    }

    #[test]
    fn phagan_gains_a_day_before_leap_february() {
        // 555 → Phagan spans February 2024.
        assert_eq!(days_in_nanakshahi_month(555, Phagan), Ok(26));
        assert_eq!(days_in_nanakshahi_month(556, Phagan), Ok(25));
    }

    #[test]
    fn is_after_compares_within_civil_year() {
        let chet = Anchor::of(Chet);
        assert!(chet.is_after(1, 31));
        assert!(chet.is_after(3, 13));
        assert!(!chet.is_after(3, 14));
        assert!(!chet.is_after(12, 31));
    }
}
