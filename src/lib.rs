//! Conversion between Gregorian and Persian (Solar Hijri) dates.
//!
//! The Persian calendar year begins on the day of the March equinox as
//! observed from the Tehran meridian, so the authoritative conversions
//! here are astronomical: the equinox instant is computed from a
//! planetary theory, shifted to apparent Tehran time, and floored to a
//! civil day. The purely arithmetic 2820-year-cycle calendar is also
//! provided for comparison; the two agree for all dates between 1346 and
//! 1402 AP but drift apart at the cycle's seams.
//!
//! All conversions travel through Julian day numbers, with a civil day
//! identified by the Julian day `N.5` of its midnight.
//!
//! # Example
//!
//! ```
//! use jalali_calendar::{gregorian_to_jalali, jalali_to_gregorian, Month, Weekday};
//!
//! let date = gregorian_to_jalali(1992, 2, 17)?;
//! assert_eq!(date.year(), 1370);
//! assert_eq!(date.month(), Month::Bahman);
//! assert_eq!(date.day(), 28);
//! assert_eq!(date.weekday(), Weekday::Doshanbeh);
//!
//! let back = jalali_to_gregorian(1370, 11, 28)?;
//! assert_eq!(back.to_string(), "1992-02-17");
//! # Ok::<(), jalali_calendar::DateError>(())
//! ```

pub mod arithmetic;
pub mod astronomical;
pub mod date;
pub mod equinox;
pub mod fmt;
pub mod gregorian;
pub(crate) mod math;
pub mod solar;
pub(crate) mod tables;


use chrono::{Datelike, Local, NaiveDate};

pub use arithmetic::ArithmeticCalendar;
pub use astronomical::AstronomicalCalendar;
pub use date::{DateError, JalaliDate, Month, Weekday};
pub use equinox::SolarEvent;
pub use fmt::{JalaliDateFormatter, Language, PatternError};

/// Julian day of the midnight beginning the Persian epoch,
/// Farvardin 1 of year 1 (Gregorian 622-03-22).
pub const PERSIAN_EPOCH: f64 = 1948320.5;

/// Mean length of the tropical year in days.
pub const TROPICAL_YEAR: f64 = 365.24219878;

/// A Persian calendar variant: a rule mapping dates to Julian days and back.
///
/// `to_jd` returns a value such that `to_jd(...).floor() + 0.5` is the
/// Julian day of the date's midnight; `from_jd` accepts any instant
/// within the civil day. Both implementations uphold this, so they can
/// be swapped freely.
pub trait PersianCalendar {
    /// Returns true if the Persian year has 366 days under this rule.
    fn is_leap_year(&self, year: i32) -> bool;

    /// Computes the Julian day of a Persian date.
    ///
    /// Out-of-range months and days carry over arithmetically rather
    /// than failing, so month 13 rolls into the next year.
    fn to_jd(&self, year: i32, month: i32, day: i32) -> f64;

    /// Computes the Persian date containing a Julian day.
    fn from_jd(&self, jd: f64) -> (i32, i32, i32);
}

fn validate_non_negative(year: i32, month: i32, day: i32) -> Result<(), DateError> {
    if year < 0 || month < 0 || day < 0 {
        return Err(DateError::NegativeComponent);
    }
    Ok(())
}

/// Converts a Gregorian calendar date to the astronomical Persian calendar.
///
/// Out-of-range months and days are carried over arithmetically, so
/// `(2018, 13, 1)` means January 2019.
///
/// # Arguments
///
/// * `year` - Gregorian year
/// * `month` - Month of the year, normally 1 through 12
/// * `day` - Day of the month
///
/// # Returns
///
/// The equivalent [`JalaliDate`], with weekday and leap flag filled in
///
/// # Example
///
/// ```
/// use jalali_calendar::gregorian_to_jalali;
///
/// let date = gregorian_to_jalali(2018, 11, 3)?;
/// assert_eq!(date.to_string(), "1397-08-12");
/// # Ok::<(), jalali_calendar::DateError>(())
/// ```
pub fn gregorian_to_jalali(year: i32, month: i32, day: i32) -> Result<JalaliDate, DateError> {
    validate_non_negative(year, month, day)?;

    let jd = gregorian::gregorian_to_jd(year, month, day);
    let calendar = AstronomicalCalendar;
    let (p_year, p_month, p_day) = calendar.from_jd(jd);

    let month = Month::of(p_month).ok_or(DateError::Unrepresentable)?;
    Ok(JalaliDate::from_parts(
        p_year,
        month,
        p_day,
        Weekday::from_jd(jd),
        calendar.is_leap_year(p_year),
    ))
}

/// Converts an astronomical Persian date to the Gregorian calendar.
///
/// Out-of-range months and days are carried over arithmetically, so day
/// 32 of Farvardin means the first of Ordibehesht.
///
/// # Arguments
///
/// * `year` - Persian year
/// * `month` - Month of the year, normally 1 through 12
/// * `day` - Day of the month
///
/// # Returns
///
/// The equivalent [`NaiveDate`]
///
/// # Example
///
/// ```
/// use jalali_calendar::jalali_to_gregorian;
///
/// let date = jalali_to_gregorian(1397, 12, 29)?;
/// assert_eq!(date.to_string(), "2019-03-20");
/// # Ok::<(), jalali_calendar::DateError>(())
/// ```
pub fn jalali_to_gregorian(year: i32, month: i32, day: i32) -> Result<NaiveDate, DateError> {
    validate_non_negative(year, month, day)?;

    let jd = AstronomicalCalendar.to_jd(year, month, day).floor() + 0.5;
    let (g_year, g_month, g_day) = gregorian::jd_to_gregorian(jd);

    NaiveDate::from_ymd_opt(g_year, g_month as u32, g_day as u32)
        .ok_or(DateError::Unrepresentable)
}

/// Today's date in the astronomical Persian calendar, from the system clock.
pub fn today() -> Result<JalaliDate, DateError> {
    let now = Local::now().date_naive();
    gregorian_to_jalali(now.year(), now.month() as i32, now.day() as i32)
}

/// Today's Gregorian date from the system clock, for symmetry with
/// [`today`].
pub fn today_gregorian() -> NaiveDate {
    Local::now().date_naive()
}
