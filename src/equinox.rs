//! Equinox and solstice instants, ΔT, and the Tehran reference frame.
//!
//! The astronomical Persian calendar pins its year boundary to the March
//! equinox observed at the Tehran meridian, so everything the calendar
//! needs from astronomy funnels through [`tehran_equinox_jd`].

use crate::math::cos_deg;
use crate::solar::{equation_of_time, periodic_equinox_sum, J2000, JULIAN_CENTURY};
use crate::tables::{DELTA_T_TABLE, JDE0_FITS_TO_1000, JDE0_FITS_TO_3000};

/// Longitude of the Tehran reference meridian, 52°30' east of Greenwich,
/// expressed as a fraction of a day.
const TEHRAN_OFFSET: f64 = (52.0 + (30.0 / 60.0) + (0.0 / (60.0 * 60.0))) / 360.0;

/// The four cardinal solar events of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarEvent {
    /// Northward equinox, around March 20.
    MarchEquinox,
    /// Northern solstice, around June 21.
    JuneSolstice,
    /// Southward equinox, around September 22.
    SeptemberEquinox,
    /// Southern solstice, around December 21.
    DecemberSolstice,
}

impl SolarEvent {
    fn index(self) -> usize {
        match self {
            SolarEvent::MarchEquinox => 0,
            SolarEvent::JuneSolstice => 1,
            SolarEvent::SeptemberEquinox => 2,
            SolarEvent::DecemberSolstice => 3,
        }
    }
}

/// Computes the instant of an equinox or solstice in a Gregorian year.
///
/// A fourth-order polynomial fit gives the mean instant, which is then
/// corrected with 24 periodic terms damped by the solar mean anomaly.
/// Accurate to within about a minute over the years -1000..=3000.
///
/// # Arguments
///
/// * `year` - Gregorian year
/// * `event` - Which of the four events to compute
///
/// # Returns
///
/// Julian day of the event in dynamical (ephemeris) time
pub fn solar_event_jde(year: i32, event: SolarEvent) -> f64 {
    let (fits, y) = if year < 1000 {
        (&JDE0_FITS_TO_1000, f64::from(year) / 1000.0)
    } else {
        (&JDE0_FITS_TO_3000, (f64::from(year) - 2000.0) / 1000.0)
    };
    let fit = fits[event.index()];

    let jde0 = fit[0] + (fit[1] * y) + (fit[2] * y * y) + (fit[3] * y * y * y)
        + (fit[4] * y * y * y * y);

    let t = (jde0 - J2000) / JULIAN_CENTURY;
    let w = (35999.373 * t) - 2.47;
    let delta_l = 1.0 + (0.0334 * cos_deg(w)) + (0.0007 * cos_deg(2.0 * w));

    jde0 + ((periodic_equinox_sum(t) * 0.00001) / delta_l)
}

/// Estimates ΔT, the difference TD − UT in seconds, for a Gregorian year.
///
/// Years 1620..=2000 are interpolated linearly from the historical table;
/// other years use the polynomial extrapolations from Meeus chapter 10.
///
/// # Arguments
///
/// * `year` - Gregorian year
///
/// # Returns
///
/// ΔT in seconds
pub fn delta_t(year: i32) -> f64 {
    let year = f64::from(year);
    if (1620.0..=2000.0).contains(&year) {
        let i = ((year - 1620.0) / 2.0).floor();
        let f = ((year - 1620.0) / 2.0) - i;
        let i = i as usize;
        DELTA_T_TABLE[i] + ((DELTA_T_TABLE[i + 1] - DELTA_T_TABLE[i]) * f)
    } else {
        let t = (year - 2000.0) / 100.0;
        if year < 948.0 {
            2177.0 + (497.0 * t) + (44.1 * t * t)
        } else {
            let mut dt = 102.0 + (102.0 * t) + (25.3 * t * t);
            if year > 2000.0 && year < 2100.0 {
                dt += 0.37 * (year - 2100.0);
            }
            dt
        }
    }
}

/// Computes the instant of the March equinox as apparent local time at the
/// Tehran meridian.
///
/// The dynamical-time instant is shifted to Universal Time with ΔT, to
/// apparent time with the equation of time, and to the local meridian
/// with the Tehran longitude offset.
///
/// # Arguments
///
/// * `year` - Gregorian year
///
/// # Returns
///
/// Fractional Julian day of the equinox in Tehran apparent local time
pub fn tehran_equinox(year: i32) -> f64 {
    let equ_jde = solar_event_jde(year, SolarEvent::MarchEquinox);
    let equ_jd = equ_jde - (delta_t(year) / (24.0 * 60.0 * 60.0));
    let equ_app = equ_jd + equation_of_time(equ_jde);
    equ_app + TEHRAN_OFFSET
}

/// Julian day number of the civil day on which the March equinox falls in
/// Tehran, for the given Gregorian year.
pub fn tehran_equinox_jd(year: i32) -> f64 {
    tehran_equinox(year).floor()
}
