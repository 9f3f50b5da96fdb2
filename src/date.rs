//! Calendar value types: months, weekdays, and validated dates.

use std::fmt;

use thiserror::Error;

use crate::fmt::{JalaliDateFormatter, PatternError};
use crate::{AstronomicalCalendar, PersianCalendar};

/// Errors raised when a date cannot be validated or converted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    /// A year, month or day component was negative.
    #[error("date components must not be negative")]
    NegativeComponent,
    /// The year was zero or negative where a positive year is required.
    #[error("year must be positive")]
    YearOutOfRange,
    /// The month was outside 1 through 12.
    #[error("month must be between 1 and 12")]
    MonthOutOfRange,
    /// The day does not exist in the given month and year.
    #[error("day {day} does not exist in month {month}")]
    DayOutOfRange {
        /// The rejected day of the month.
        day: i32,
        /// The month it was checked against.
        month: i32,
    },
    /// Esfand only has a 30th day in leap years.
    #[error("day 30 of Esfand only exists in a leap year")]
    LeapDayInCommonYear,
    /// The converted date cannot be represented by the target type.
    #[error("converted date is out of the representable range")]
    Unrepresentable,
}

const MONTHS_EN: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

const MONTHS_FA: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// A month of the Persian year, Farvardin (1) through Esfand (12).
///
/// The first six months have 31 days, the next five have 30, and Esfand
/// has 29 or 30 depending on the leap status of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Farvardin = 1,
    Ordibehesht = 2,
    Khordad = 3,
    Tir = 4,
    Mordad = 5,
    Shahrivar = 6,
    Mehr = 7,
    Aban = 8,
    Azar = 9,
    Dey = 10,
    Bahman = 11,
    Esfand = 12,
}

impl Month {
    const ALL: [Month; 12] = [
        Month::Farvardin,
        Month::Ordibehesht,
        Month::Khordad,
        Month::Tir,
        Month::Mordad,
        Month::Shahrivar,
        Month::Mehr,
        Month::Aban,
        Month::Azar,
        Month::Dey,
        Month::Bahman,
        Month::Esfand,
    ];

    /// Looks up a month by its 1-based number, returning `None` outside
    /// 1 through 12.
    pub fn of(month: i32) -> Option<Month> {
        if (1..=12).contains(&month) {
            Some(Self::ALL[(month - 1) as usize])
        } else {
            None
        }
    }

    /// The month-of-year number, from 1 (Farvardin) to 12 (Esfand).
    pub fn number(self) -> i32 {
        self as i32
    }

    /// The transliterated English name of the month.
    pub fn name_english(self) -> &'static str {
        MONTHS_EN[(self.number() - 1) as usize]
    }

    /// The Persian-script name of the month.
    pub fn name_persian(self) -> &'static str {
        MONTHS_FA[(self.number() - 1) as usize]
    }

    /// The number of days in this month, given the leap status of the year.
    pub fn length(self, leap_year: bool) -> i32 {
        match self.number() {
            1..=6 => 31,
            7..=11 => 30,
            _ => {
                if leap_year {
                    30
                } else {
                    29
                }
            }
        }
    }
}

const WEEKDAYS_EN: [&str; 7] = [
    "Yekshanbeh",
    "Doshanbeh",
    "Seshanbeh",
    "Chaharshanbeh",
    "Panjshanbeh",
    "Jomeh",
    "Shanbeh",
];

const WEEKDAYS_FA: [&str; 7] = [
    "یکشنبه",
    "دوشنبه",
    "سه شنبه",
    "چهارشنبه",
    "پنج شنبه",
    "جمعه",
    "شنبه",
];

/// A day of the Persian week.
///
/// The indices follow the Julian-day weekday convention used by the
/// converters: 0 is Yekshanbeh (Sunday) through 6, Shanbeh (Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Yekshanbeh = 0,
    Doshanbeh = 1,
    Seshanbeh = 2,
    Chaharshanbeh = 3,
    Panjshanbeh = 4,
    Jomeh = 5,
    Shanbeh = 6,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Yekshanbeh,
        Weekday::Doshanbeh,
        Weekday::Seshanbeh,
        Weekday::Chaharshanbeh,
        Weekday::Panjshanbeh,
        Weekday::Jomeh,
        Weekday::Shanbeh,
    ];

    /// Looks up a weekday by index, returning `None` outside 0 through 6.
    pub fn of(weekday: i32) -> Option<Weekday> {
        if (0..=6).contains(&weekday) {
            Some(Self::ALL[weekday as usize])
        } else {
            None
        }
    }

    /// The weekday of the civil day containing the Julian day `jd`.
    ///
    /// `jd` is expected in the midnight `N.5` form produced by the
    /// calendar conversions.
    pub fn from_jd(jd: f64) -> Weekday {
        let index = crate::math::floored_mod((jd + 1.5).floor(), 7.0) as usize;
        Self::ALL[index]
    }

    /// The weekday index, from 0 (Yekshanbeh) to 6 (Shanbeh).
    pub fn number(self) -> i32 {
        self as i32
    }

    /// The transliterated English name of the weekday.
    pub fn name_english(self) -> &'static str {
        WEEKDAYS_EN[self as usize]
    }

    /// The Persian-script name of the weekday.
    pub fn name_persian(self) -> &'static str {
        WEEKDAYS_FA[self as usize]
    }
}

/// A validated date in the Persian (Solar Hijri) calendar.
///
/// Carries the year, month and day along with the derived weekday and
/// leap-year flag, so the two derived values never fall out of sync with
/// the date itself.
///
/// # Example
///
/// ```
/// use jalali_calendar::{JalaliDate, Month, Weekday};
///
/// let date = JalaliDate::new(1370, 11, 28)?;
/// assert_eq!(date.month(), Month::Bahman);
/// assert_eq!(date.weekday(), Weekday::Doshanbeh);
/// assert!(date.is_leap_year());
/// # Ok::<(), jalali_calendar::DateError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JalaliDate {
    year: i32,
    month: Month,
    day: i32,
    weekday: Weekday,
    leap_year: bool,
}

impl JalaliDate {
    /// Creates a date from year, month and day, rejecting anything that
    /// does not exist in the astronomical Persian calendar.
    ///
    /// # Arguments
    ///
    /// * `year` - Persian year, 1 or later
    /// * `month` - Month of the year, 1 through 12
    /// * `day` - Day of the month
    ///
    /// # Returns
    ///
    /// The validated date, or the reason it is invalid
    pub fn new(year: i32, month: i32, day: i32) -> Result<JalaliDate, DateError> {
        if year < 1 {
            return Err(DateError::YearOutOfRange);
        }
        let month = Month::of(month).ok_or(DateError::MonthOutOfRange)?;

        let calendar = AstronomicalCalendar;
        let leap_year = calendar.is_leap_year(year);

        if day < 1 || day > month.length(true) {
            return Err(DateError::DayOutOfRange {
                day,
                month: month.number(),
            });
        }
        if month == Month::Esfand && day == 30 && !leap_year {
            return Err(DateError::LeapDayInCommonYear);
        }

        let jd = calendar.to_jd(year, month.number(), day).floor() + 0.5;
        Ok(JalaliDate {
            year,
            month,
            day,
            weekday: Weekday::from_jd(jd),
            leap_year,
        })
    }

    /// Assembles a date whose components are already known to be valid.
    pub(crate) fn from_parts(
        year: i32,
        month: Month,
        day: i32,
        weekday: Weekday,
        leap_year: bool,
    ) -> JalaliDate {
        JalaliDate {
            year,
            month,
            day,
            weekday,
            leap_year,
        }
    }

    /// The Persian year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month of the year.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The day of the month, from 1.
    pub fn day(&self) -> i32 {
        self.day
    }

    /// The day of the week this date falls on.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Whether the date's year is a leap year of the astronomical calendar.
    pub fn is_leap_year(&self) -> bool {
        self.leap_year
    }

    /// Renders the date through a pattern formatter.
    ///
    /// Fails only when a single-letter numeric token meets a value it
    /// cannot represent; see [`JalaliDateFormatter`].
    pub fn format(&self, formatter: &JalaliDateFormatter) -> Result<String, PatternError> {
        formatter.format(self)
    }
}

impl fmt::Display for JalaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year,
            self.month.number(),
            self.day
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lookup_and_names() {
        assert_eq!(Month::of(1), Some(Month::Farvardin));
        assert_eq!(Month::of(12), Some(Month::Esfand));
        assert_eq!(Month::of(0), None);
        assert_eq!(Month::of(13), None);
        assert_eq!(Month::Bahman.name_english(), "Bahman");
        assert_eq!(Month::Bahman.name_persian(), "بهمن");
        assert_eq!(Month::Farvardin.number(), 1);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(Month::Shahrivar.length(false), 31);
        assert_eq!(Month::Mehr.length(false), 30);
        assert_eq!(Month::Esfand.length(false), 29);
        assert_eq!(Month::Esfand.length(true), 30);
    }

    #[test]
    fn weekday_lookup_covers_all_indices() {
        for i in 0..7 {
            assert_eq!(Weekday::of(i).map(Weekday::number), Some(i));
        }
        assert_eq!(Weekday::of(-1), None);
        assert_eq!(Weekday::of(7), None);
    }

    #[test]
    fn weekday_from_known_julian_day() {
        // 1992-02-17 was a Monday.
        assert_eq!(Weekday::from_jd(2448669.5), Weekday::Doshanbeh);
        assert_eq!(Weekday::from_jd(2448669.5).name_persian(), "دوشنبه");
    }

    #[test]
    fn new_rejects_invalid_components() {
        assert_eq!(JalaliDate::new(0, 1, 1), Err(DateError::YearOutOfRange));
        assert_eq!(JalaliDate::new(1397, 13, 1), Err(DateError::MonthOutOfRange));
        assert_eq!(
            JalaliDate::new(1397, 7, 31),
            Err(DateError::DayOutOfRange { day: 31, month: 7 })
        );
        assert_eq!(
            JalaliDate::new(1397, 1, 32),
            Err(DateError::DayOutOfRange { day: 32, month: 1 })
        );
        // 1397 is a common year.
        assert_eq!(
            JalaliDate::new(1397, 12, 30),
            Err(DateError::LeapDayInCommonYear)
        );
    }

    #[test]
    fn new_accepts_leap_day_in_leap_year() {
        // 1395 is an astronomically leap year.
        let date = JalaliDate::new(1395, 12, 30).unwrap();
        assert!(date.is_leap_year());
        assert_eq!(date.day(), 30);
    }

    #[test]
    fn display_is_zero_padded() {
        let date = JalaliDate::new(1394, 5, 6).unwrap();
        assert_eq!(date.to_string(), "1394-05-06");
    }
}
