// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Month tables.
//!
//! The Nanakshahi year has twelve months, Chet through Phagan. Each month
//! carries an English and a Punjabi name and a nominal length: the first
//! five months have 31 days, the remaining seven have 30.
//!
//! | # | Month | ਪੰਜਾਬੀ | Nominal days |
//! |---|-------|--------|--------------|
//! | 1 | Chet | ਚੇਤ | 31 |
//! | 2 | Vaisakh | ਵੈਸਾਖ | 31 |
//! | 3 | Jeth | ਜੇਠ | 31 |
//! | 4 | Harh | ਹਾੜ | 31 |
//! | 5 | Sawan | ਸਾਵਣ | 31 |
//! | 6 | Bhadon | ਭਾਦੋਂ | 30 |
//! | 7 | Assu | ਅੱਸੂ | 30 |
//! | 8 | Katik | ਕੱਤਕ | 30 |
//! | 9 | Maghar | ਮੱਘਰ | 30 |
//! | 10 | Poh | ਪੋਹ | 30 |
//! | 11 | Magh | ਮਾਘ | 30 |
//! | 12 | Phagan | ਫੱਗਣ | 30 |
//!
//! The nominal lengths do not always agree with the distance between two
//! consecutive Gregorian anchors; conversions follow the anchors (see
//! [`crate::anchor`]).
//!
//! Civil month names and weekday names used when rendering Gregorian
//! equivalents also live here.

use crate::error::CalendarError;
use chrono::Weekday;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Language used to render calendar names.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    #[default]
    English,
    Punjabi,
}

/// One row of the Nanakshahi month table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MonthInfo {
    pub number: u32,
    pub name: &'static str,
    pub name_punjabi: &'static str,
    /// Nominal length in days.
    pub days: u32,
}

/// The Nanakshahi month table, Chet→Phagan.
#[rustfmt::skip]
pub const NANAKSHAHI_MONTHS: [MonthInfo; 12] = [
    MonthInfo { number: 1, name: "Chet", name_punjabi: "ਚੇਤ", days: 31 },
    MonthInfo { number: 2, name: "Vaisakh", name_punjabi: "ਵੈਸਾਖ", days: 31 },
    MonthInfo { number: 3, name: "Jeth", name_punjabi: "ਜੇਠ", days: 31 },
    MonthInfo { number: 4, name: "Harh", name_punjabi: "ਹਾੜ", days: 31 },
    MonthInfo { number: 5, name: "Sawan", name_punjabi: "ਸਾਵਣ", days: 31 },
    MonthInfo { number: 6, name: "Bhadon", name_punjabi: "ਭਾਦੋਂ", days: 30 },
    MonthInfo { number: 7, name: "Assu", name_punjabi: "ਅੱਸੂ", days: 30 },
    MonthInfo { number: 8, name: "Katik", name_punjabi: "ਕੱਤਕ", days: 30 },
    MonthInfo { number: 9, name: "Maghar", name_punjabi: "ਮੱਘਰ", days: 30 },
    MonthInfo { number: 10, name: "Poh", name_punjabi: "ਪੋਹ", days: 30 },
    MonthInfo { number: 11, name: "Magh", name_punjabi: "ਮਾਘ", days: 30 },
    MonthInfo { number: 12, name: "Phagan", name_punjabi: "ਫੱਗਣ", days: 30 },
];

/// Civil month names, January first.
pub const GREGORIAN_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names, Sunday first.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Punjabi weekday names, Sunday first.
pub const DAY_NAMES_PUNJABI: [&str; 7] = [
    "ਐਤਵਾਰ",
    "ਸੋਮਵਾਰ",
    "ਮੰਗਲਵਾਰ",
    "ਬੁੱਧਵਾਰ",
    "ਵੀਰਵਾਰ",
    "ਸ਼ੁੱਕਰਵਾਰ",
    "ਸ਼ਨੀਵਾਰ",
];

/// Name of a weekday in the requested language.
#[inline]
pub fn weekday_name(weekday: Weekday, language: Language) -> &'static str {
    let idx = weekday.num_days_from_sunday() as usize;
    match language {
        Language::English => DAY_NAMES[idx],
        Language::Punjabi => DAY_NAMES_PUNJABI[idx],
    }
}

/// Name of a civil month (`1..=12`), or `None` when out of range.
#[inline]
pub fn gregorian_month_name(month: u32) -> Option<&'static str> {
    let idx = month.checked_sub(1)? as usize;
    GREGORIAN_MONTH_NAMES.get(idx).copied()
}

/// A month of the Nanakshahi year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
#[repr(u8)]
pub enum NanakshahiMonth {
    Chet = 1,
    Vaisakh = 2,
    Jeth = 3,
    Harh = 4,
    Sawan = 5,
    Bhadon = 6,
    Assu = 7,
    Katik = 8,
    Maghar = 9,
    Poh = 10,
    Magh = 11,
    Phagan = 12,
}

impl NanakshahiMonth {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Chet,
        Self::Vaisakh,
        Self::Jeth,
        Self::Harh,
        Self::Sawan,
        Self::Bhadon,
        Self::Assu,
        Self::Katik,
        Self::Maghar,
        Self::Poh,
        Self::Magh,
        Self::Phagan,
    ];

    /// Month for a number in `1..=12`.
    ///
    /// # Errors
    /// Returns [`CalendarError::InvalidMonth`] outside that range.
    pub fn from_number(number: u32) -> Result<Self, CalendarError> {
        number
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx as usize))
            .copied()
            .ok_or(CalendarError::InvalidMonth { month: number })
    }

    /// Month number, Chet = 1.
    #[inline]
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// Zero-based position in the tables.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize - 1
    }

    /// Row of [`NANAKSHAHI_MONTHS`] for this month.
    #[inline]
    pub const fn info(self) -> MonthInfo {
        NANAKSHAHI_MONTHS[self.index()]
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        self.info().name
    }

    #[inline]
    pub const fn name_punjabi(self) -> &'static str {
        self.info().name_punjabi
    }

    pub const fn name_in(self, language: Language) -> &'static str {
        match language {
            Language::English => self.name(),
            Language::Punjabi => self.name_punjabi(),
        }
    }

    /// Length given by the month table.
    ///
    /// This is the calendar's stated length; the number of civil days a
    /// month actually spans is [`crate::days_in_nanakshahi_month`].
    #[inline]
    pub const fn nominal_days(self) -> u32 {
        self.info().days
    }

    /// Following month, wrapping Phagan → Chet.
    pub const fn succ(self) -> Self {
        Self::ALL[(self.index() + 1) % 12]
    }

    /// Preceding month, wrapping Chet → Phagan.
    pub const fn pred(self) -> Self {
        Self::ALL[(self.index() + 11) % 12]
    }
}

impl TryFrom<u32> for NanakshahiMonth {
    type Error = CalendarError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<NanakshahiMonth> for u32 {
    fn from(month: NanakshahiMonth) -> Self {
        month.number()
    }
}

impl fmt::Display for NanakshahiMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_and_numbered() {
        for (idx, info) in NANAKSHAHI_MONTHS.iter().enumerate() {
            assert_eq!(info.number as usize, idx + 1);
            assert_eq!(NanakshahiMonth::ALL[idx].info(), *info);
        }
    }

    #[test]
    fn nominal_lengths_sum_to_common_year() {
        let total: u32 = NANAKSHAHI_MONTHS.iter().map(|m| m.days).sum();
        assert_eq!(total, 365);
        assert!(NanakshahiMonth::ALL[..5].iter().all(|m| m.nominal_days() == 31));
        assert!(NanakshahiMonth::ALL[5..].iter().all(|m| m.nominal_days() == 30));
    }

    #[test]
    fn from_number_rejects_out_of_range() {
        assert_eq!(NanakshahiMonth::from_number(1), Ok(NanakshahiMonth::Chet));
        assert_eq!(NanakshahiMonth::from_number(12), Ok(NanakshahiMonth::Phagan));
        assert_eq!(
            NanakshahiMonth::from_number(0),
            Err(CalendarError::InvalidMonth { month: 0 })
        );
        assert_eq!(
            NanakshahiMonth::try_from(13),
            Err(CalendarError::InvalidMonth { month: 13 })
        );
    }

    #[test]
    fn succ_and_pred_wrap() {
        assert_eq!(NanakshahiMonth::Phagan.succ(), NanakshahiMonth::Chet);
        assert_eq!(NanakshahiMonth::Chet.pred(), NanakshahiMonth::Phagan);
        assert_eq!(NanakshahiMonth::Poh.succ(), NanakshahiMonth::Magh);
    }

    #[test]
    fn names_in_both_languages() {
        assert_eq!(NanakshahiMonth::Vaisakh.name_in(Language::English), "Vaisakh");
        assert_eq!(NanakshahiMonth::Vaisakh.name_in(Language::Punjabi), "ਵੈਸਾਖ");
        assert_eq!(format!("{}", NanakshahiMonth::Maghar), "Maghar");
    }

    #[test]
    fn weekday_names_start_on_sunday() {
        assert_eq!(weekday_name(Weekday::Sun, Language::English), "Sunday");
        assert_eq!(weekday_name(Weekday::Sat, Language::English), "Saturday");
        assert_eq!(weekday_name(Weekday::Mon, Language::Punjabi), "ਸੋਮਵਾਰ");
    }

    #[test]
    fn gregorian_month_names() {
        assert_eq!(gregorian_month_name(1), Some("January"));
        assert_eq!(gregorian_month_name(12), Some("December"));
        assert_eq!(gregorian_month_name(0), None);
        assert_eq!(gregorian_month_name(13), None);
    }
}
