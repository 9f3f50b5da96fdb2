//! Astronomical Persian calendar anchored to the Tehran March equinox.
//!
//! Year 1 begins at the equinox nearest Julian day 1948320.5 (Gregorian
//! 622-03-22). Each later year begins on the civil day of the March
//! equinox in apparent Tehran time, so leap years fall out of the actual
//! motion of the Sun rather than an arithmetic rule.

use crate::equinox::tehran_equinox_jd;
use crate::gregorian::jd_to_gregorian;
use crate::{PersianCalendar, PERSIAN_EPOCH, TROPICAL_YEAR};

/// The observational (equinox-based) Persian calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct AstronomicalCalendar;

impl AstronomicalCalendar {
    /// Finds the Persian year containing a Julian day, together with the
    /// Julian day number of that year's first day.
    ///
    /// Starts two Gregorian years early and walks equinox by equinox until
    /// the bracketing pair is found, then counts tropical years from the
    /// calendar epoch.
    pub fn year_and_start(&self, jd: f64) -> (i32, f64) {
        let mut guess = jd_to_gregorian(jd).0 - 2;

        let mut lasteq = tehran_equinox_jd(guess);
        while lasteq > jd {
            guess -= 1;
            lasteq = tehran_equinox_jd(guess);
        }
        let mut nexteq = lasteq - 1.0;
        while !((lasteq <= jd) && (jd < nexteq)) {
            lasteq = nexteq;
            guess += 1;
            nexteq = tehran_equinox_jd(guess);
        }

        let year = ((lasteq - PERSIAN_EPOCH) / TROPICAL_YEAR).round() as i32 + 1;
        (year, lasteq)
    }
}

impl PersianCalendar for AstronomicalCalendar {
    fn is_leap_year(&self, year: i32) -> bool {
        (self.to_jd(year + 1, 1, 1) - self.to_jd(year, 1, 1)) > 365.0
    }

    fn to_jd(&self, year: i32, month: i32, day: i32) -> f64 {
        // Aim a tropical-year estimate just before the target year's
        // equinox, then step forward year starts until we land in it.
        let mut adr = (year - 1, 0.0);
        let mut guess = (PERSIAN_EPOCH - 1.0) + (TROPICAL_YEAR * f64::from(year - 2));

        while adr.0 < year {
            adr = self.year_and_start(guess);
            guess = adr.1 + (TROPICAL_YEAR + 2.0);
        }
        let equinox = adr.1;

        equinox
            + (if month <= 7 {
                f64::from(month - 1) * 31.0
            } else {
                (f64::from(month - 1) * 30.0) + 6.0
            })
            + f64::from(day - 1)
    }

    fn from_jd(&self, jd: f64) -> (i32, i32, i32) {
        let jd = jd.floor() + 0.5;
        let (year, _) = self.year_and_start(jd);

        let yday = (jd.floor() - self.to_jd(year, 1, 1)) + 1.0;
        let month = if yday <= 186.0 {
            (yday / 31.0).ceil()
        } else {
            ((yday - 6.0) / 30.0).ceil()
        } as i32;
        let day = (jd.floor() - self.to_jd(year, month, 1)) + 1.0;

        (year, month, day as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gregorian::gregorian_to_jd;

    #[test]
    fn nowruz_1398_starts_on_march_21() {
        let cal = AstronomicalCalendar;
        let jd = cal.to_jd(1398, 1, 1).floor() + 0.5;
        assert_eq!(jd_to_gregorian(jd), (2019, 3, 21));
    }

    #[test]
    fn year_and_start_brackets_the_input_day() {
        let cal = AstronomicalCalendar;
        let jd = gregorian_to_jd(2018, 11, 3);
        let (year, start) = cal.year_and_start(jd);
        assert_eq!(year, 1397);
        assert!(start <= jd);
        assert!(jd - start < 366.0);
    }

    #[test]
    fn leap_years_observed_in_recent_cycles() {
        let cal = AstronomicalCalendar;
        for year in [1366, 1370, 1375, 1387, 1391, 1395, 1399] {
            assert!(cal.is_leap_year(year), "{year} should be leap");
        }
        for year in [1397, 1398, 1400, 1401, 1402, 1404] {
            assert!(!cal.is_leap_year(year), "{year} should be common");
        }
        // Observation puts the next leap year at 1403, one year before the
        // 2820-cycle arithmetic rule says so.
        assert!(cal.is_leap_year(1403));
    }

    #[test]
    fn first_half_months_have_31_days() {
        let cal = AstronomicalCalendar;
        for month in 1..=6 {
            let len = cal.to_jd(1397, month + 1, 1) - cal.to_jd(1397, month, 1);
            assert_eq!(len, 31.0, "month {month}");
        }
        for month in 7..=11 {
            let len = cal.to_jd(1397, month + 1, 1) - cal.to_jd(1397, month, 1);
            assert_eq!(len, 30.0, "month {month}");
        }
    }

    #[test]
    fn round_trips_on_scenario_dates() {
        let cal = AstronomicalCalendar;
        for &(y, m, d) in &[
            (1341, 6, 6),
            (1357, 5, 5),
            (1370, 11, 28),
            (1386, 12, 29),
            (1397, 8, 12),
            (1397, 12, 29),
        ] {
            let jd = cal.to_jd(y, m, d);
            assert_eq!(cal.from_jd(jd), (y, m, d), "{y}-{m}-{d}");
        }
    }
}
