//! Gregorian calendar arithmetic on Julian day numbers.
//!
//! Civil days are identified by Julian day values of the form `N.5`,
//! the Julian day of the day's midnight. These closed-form conversions
//! are exact for all proleptic Gregorian dates.

use crate::math::floored_mod;

/// Julian day of the midnight beginning Gregorian 0001-01-01.
pub const GREGORIAN_EPOCH: f64 = 1721425.5;

/// Returns true if the Gregorian year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0) && !((year % 100 == 0) && (year % 400 != 0))
}

/// Computes the Julian day of a Gregorian calendar date.
///
/// Out-of-range months and days are carried over arithmetically, so
/// month 13 rolls into January of the following year and day 32 of
/// January lands on February 1.
///
/// # Arguments
///
/// * `year` - Gregorian year
/// * `month` - Month of the year, normally 1 through 12
/// * `day` - Day of the month, normally 1 through 31
///
/// # Returns
///
/// Julian day of the date's midnight, always of the form `N.5`
pub fn gregorian_to_jd(year: i32, month: i32, day: i32) -> f64 {
    let y = f64::from(year);
    let m = f64::from(month);
    let d = f64::from(day);

    (GREGORIAN_EPOCH - 1.0)
        + (365.0 * (y - 1.0))
        + ((y - 1.0) / 4.0).floor()
        + (-((y - 1.0) / 100.0).floor())
        + ((y - 1.0) / 400.0).floor()
        + ((((367.0 * m) - 362.0) / 12.0)
            + (if month <= 2 {
                0.0
            } else if is_leap_year(year) {
                -1.0
            } else {
                -2.0
            })
            + d)
            .floor()
}

/// Computes the Gregorian calendar date containing a Julian day.
///
/// # Arguments
///
/// * `jd` - Julian day; any instant within the civil day works
///
/// # Returns
///
/// `(year, month, day)` of the Gregorian date
pub fn jd_to_gregorian(jd: f64) -> (i32, i32, i32) {
    let wjd = (jd - 0.5).floor() + 0.5;
    let depoch = wjd - GREGORIAN_EPOCH;
    let quadricent = (depoch / 146097.0).floor();
    let dqc = floored_mod(depoch, 146097.0);
    let cent = (dqc / 36524.0).floor();
    let dcent = floored_mod(dqc, 36524.0);
    let quad = (dcent / 1461.0).floor();
    let dquad = floored_mod(dcent, 1461.0);
    let yindex = (dquad / 365.0).floor();

    let mut year = (quadricent * 400.0) + (cent * 100.0) + (quad * 4.0) + yindex;
    // The last day of a quadrennium or quadricentennium belongs to the year
    // just closed, not the one about to open.
    if !(cent == 4.0 || yindex == 4.0) {
        year += 1.0;
    }
    let year = year as i32;

    let yearday = wjd - gregorian_to_jd(year, 1, 1);
    let leapadj = if wjd < gregorian_to_jd(year, 3, 1) {
        0.0
    } else if is_leap_year(year) {
        1.0
    } else {
        2.0
    };
    let month = ((((yearday + leapadj) * 12.0) + 373.0) / 367.0).floor();
    let day = (wjd - gregorian_to_jd(year, month as i32, 1)) + 1.0;

    (year, month as i32, day as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_january_first_of_year_one() {
        assert_eq!(gregorian_to_jd(1, 1, 1), GREGORIAN_EPOCH);
        assert_eq!(jd_to_gregorian(GREGORIAN_EPOCH), (1, 1, 1));
    }

    #[test]
    fn known_julian_days() {
        assert_eq!(gregorian_to_jd(1992, 2, 17), 2448669.5);
        assert_eq!(gregorian_to_jd(2000, 1, 1), 2451544.5);
        assert_eq!(gregorian_to_jd(2018, 11, 3), 2458425.5);
    }

    #[test]
    fn round_trips_through_julian_day() {
        for &(y, m, d) in &[
            (1962, 8, 28),
            (1978, 7, 27),
            (2008, 3, 19),
            (2009, 10, 10),
            (2011, 12, 15),
            (2019, 3, 20),
        ] {
            assert_eq!(jd_to_gregorian(gregorian_to_jd(y, m, d)), (y, m, d));
        }
    }

    #[test]
    fn century_leap_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1992));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2019));
    }

    #[test]
    fn overflowing_month_rolls_into_next_year() {
        assert_eq!(gregorian_to_jd(2018, 13, 1), gregorian_to_jd(2019, 1, 1));
        assert_eq!(gregorian_to_jd(2018, 1, 32), gregorian_to_jd(2018, 2, 1));
    }

    #[test]
    fn december_31_precedes_january_1() {
        let dec31 = gregorian_to_jd(1999, 12, 31);
        let jan1 = gregorian_to_jd(2000, 1, 1);
        assert_eq!(jan1 - dec31, 1.0);
    }
}
