// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! "Today" in both calendars.
//!
//! Nothing is cached: every call reads the clock again, so a caller that
//! refreshes a display on a timer simply calls again.

use crate::civil::{Clock, SystemClock};
use crate::convert::gregorian_to_nanakshahi;
use crate::date::{GregorianDate, NanakshahiDate};
use crate::error::CalendarError;

/// Today's Nanakshahi date on the host's local clock.
///
/// # Errors
/// Only if the host clock reads a date before the Nanakshahi epoch.
pub fn current_nanakshahi_date() -> Result<NanakshahiDate, CalendarError> {
    current_nanakshahi_date_with(&SystemClock)
}

/// Today's Nanakshahi date on `clock`.
pub fn current_nanakshahi_date_with<C: Clock + ?Sized>(
    clock: &C,
) -> Result<NanakshahiDate, CalendarError> {
    gregorian_to_nanakshahi(clock.today())
}

/// Today's civil date on the host's local clock.
pub fn current_gregorian_date() -> GregorianDate {
    current_gregorian_date_with(&SystemClock)
}

/// Today's civil date on `clock`.
pub fn current_gregorian_date_with<C: Clock + ?Sized>(clock: &C) -> GregorianDate {
    GregorianDate::from(clock.today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil::FixedClock;
    use crate::month::NanakshahiMonth;
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_is_deterministic() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 11, 23).unwrap());
        let first = current_nanakshahi_date_with(&clock).unwrap();
        let second = current_nanakshahi_date_with(&clock).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.ymd(), (556, NanakshahiMonth::Maghar.number(), 7));
    }

    #[test]
    fn gregorian_today_carries_names() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 4, 13).unwrap());
        let today = current_gregorian_date_with(&clock);
        assert_eq!(today.to_string(), "2024-04-13");
        assert_eq!(today.month_name(), "April");
        assert_eq!(today.day_name(), "Saturday");
    }

    #[test]
    fn system_clock_agrees_across_calendars() {
        // Both helpers read the same wall clock; retry across a midnight tick.
        for _ in 0..3 {
            let civil = current_gregorian_date();
            let nanakshahi = current_nanakshahi_date().unwrap();
            if current_gregorian_date() != civil {
                continue;
            }
            assert_eq!(gregorian_to_nanakshahi(civil.naive()).unwrap(), nanakshahi);
            return;
        }
    }
}
