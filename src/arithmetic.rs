//! Arithmetic Persian calendar based on the 2820-year cycle.
//!
//! Birashk's rule approximates the astronomical calendar with a purely
//! arithmetic one: 683 leap years in every 2820, arranged so that the
//! rule agrees with observed Nowruz dates over many centuries. It
//! drifts from the equinox-based calendar eventually (1403/1404 is the
//! first nearby divergence), which is why the astronomical variant is
//! the authoritative one here.

use crate::math::floored_mod;
use crate::{PersianCalendar, PERSIAN_EPOCH};

/// The 2820-year cyclic approximation of the Persian calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArithmeticCalendar;

impl PersianCalendar for ArithmeticCalendar {
    fn is_leap_year(&self, year: i32) -> bool {
        let year = f64::from(year);
        let epbase = year - if year > 0.0 { 474.0 } else { 473.0 };
        floored_mod((floored_mod(epbase, 2820.0) + 474.0 + 38.0) * 682.0, 2816.0) < 682.0
    }

    fn to_jd(&self, year: i32, month: i32, day: i32) -> f64 {
        let y = f64::from(year);
        let m = f64::from(month);
        let d = f64::from(day);

        let epbase = y - if y >= 0.0 { 474.0 } else { 473.0 };
        let epyear = 474.0 + floored_mod(epbase, 2820.0);

        d + (if month <= 7 {
            (m - 1.0) * 31.0
        } else {
            ((m - 1.0) * 30.0) + 6.0
        }) + (((epyear * 682.0) - 110.0) / 2816.0).floor()
            + ((epyear - 1.0) * 365.0)
            + ((epbase / 2820.0).floor() * 1029983.0)
            + (PERSIAN_EPOCH - 1.0)
    }

    fn from_jd(&self, jd: f64) -> (i32, i32, i32) {
        let jd = jd.floor() + 0.5;

        let depoch = jd - self.to_jd(475, 1, 1);
        let cycle = (depoch / 1029983.0).floor();
        let cyear = floored_mod(depoch, 1029983.0);
        // The very last day of a full cycle belongs to cyclic year 2820.
        let ycycle = if cyear == 1029982.0 {
            2820.0
        } else {
            let aux1 = (cyear / 366.0).floor();
            let aux2 = floored_mod(cyear, 366.0);
            (((2134.0 * aux1) + (2816.0 * aux2) + 2815.0) / 1028522.0).floor() + aux1 + 1.0
        };
        let mut year = ycycle + (2820.0 * cycle) + 474.0;
        if year <= 0.0 {
            year -= 1.0;
        }
        let year = year as i32;

        let yday = (jd - self.to_jd(year, 1, 1)) + 1.0;
        let month = if yday <= 186.0 {
            (yday / 31.0).ceil()
        } else {
            ((yday - 6.0) / 30.0).ceil()
        } as i32;
        let day = (jd - self.to_jd(year, month, 1)) + 1.0;

        (year, month, day as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gregorian::gregorian_to_jd;

    #[test]
    fn recent_leap_years_follow_the_cycle() {
        let cal = ArithmeticCalendar;
        for year in [1375, 1379, 1383, 1387, 1391, 1395, 1399] {
            assert!(cal.is_leap_year(year), "{year} should be leap");
        }
        for year in [1376, 1380, 1397, 1400, 1402, 1403] {
            assert!(!cal.is_leap_year(year), "{year} should be common");
        }
        // The cycle breaks the four-year rhythm here.
        assert!(cal.is_leap_year(1404));
    }

    #[test]
    fn leap_density_is_683_in_2820() {
        let cal = ArithmeticCalendar;
        let count = (475..475 + 2820).filter(|&y| cal.is_leap_year(y)).count();
        assert_eq!(count, 683);
    }

    #[test]
    fn agrees_with_gregorian_anchor_dates() {
        let cal = ArithmeticCalendar;
        assert_eq!(cal.to_jd(1370, 11, 28), gregorian_to_jd(1992, 2, 17));
        assert_eq!(cal.from_jd(gregorian_to_jd(1992, 2, 17)), (1370, 11, 28));
    }

    #[test]
    fn year_lengths_are_365_or_366() {
        let cal = ArithmeticCalendar;
        for year in 1340..1410 {
            let len = cal.to_jd(year + 1, 1, 1) - cal.to_jd(year, 1, 1);
            if cal.is_leap_year(year) {
                assert_eq!(len, 366.0, "year {year}");
            } else {
                assert_eq!(len, 365.0, "year {year}");
            }
        }
    }

    #[test]
    fn round_trips_across_the_epoch() {
        let cal = ArithmeticCalendar;
        for &(y, m, d) in &[(1, 1, 1), (475, 1, 1), (1370, 11, 28), (1404, 12, 30)] {
            let jd = cal.to_jd(y, m, d);
            assert_eq!(cal.from_jd(jd), (y, m, d));
        }
    }
}
