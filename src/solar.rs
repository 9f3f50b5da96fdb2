//! Low-accuracy solar position and the equation of time.
//!
//! Everything here works in fractional Julian days on the uniform
//! dynamical timescale and in degrees unless noted otherwise. The
//! formulas follow Meeus chapter 25 (solar coordinates), chapter 22
//! (nutation and obliquity) and chapter 28 (equation of time), which is
//! plenty for fixing the civil day of an equinox.

use crate::math::{cos_deg, normalize_degrees_360, normalize_radians_tau, sin_deg};
use crate::tables::{EQUINOX_TERMS, NUTATION_ARG_MULT, NUTATION_COEFF, OBLIQUITY_TERMS};

/// Julian day of the J2000.0 epoch (2000 January 1, 12:00 TT).
pub(crate) const J2000: f64 = 2451545.0;

/// Days per Julian century.
pub(crate) const JULIAN_CENTURY: f64 = 36525.0;

/// Days per Julian millennium.
pub(crate) const JULIAN_MILLENNIUM: f64 = JULIAN_CENTURY * 10.0;

/// Geocentric solar coordinates at a single instant, all angles in degrees.
#[derive(Debug, Clone, Copy)]
pub struct SunPosition {
    /// Geometric mean longitude of the Sun, referred to the mean equinox.
    pub mean_longitude: f64,
    /// Mean anomaly of the Sun.
    pub mean_anomaly: f64,
    /// Eccentricity of the Earth's orbit (dimensionless).
    pub eccentricity: f64,
    /// Equation of the center.
    pub center: f64,
    /// True geometric longitude.
    pub true_longitude: f64,
    /// True anomaly.
    pub true_anomaly: f64,
    /// Radius vector in astronomical units.
    pub radius_vector: f64,
    /// Apparent longitude, corrected for nutation and aberration.
    pub apparent_longitude: f64,
    /// Geometric right ascension.
    pub right_ascension: f64,
    /// Geometric declination.
    pub declination: f64,
    /// Apparent right ascension.
    pub apparent_right_ascension: f64,
    /// Apparent declination.
    pub apparent_declination: f64,
}

/// Computes the position of the Sun at the given Julian day.
///
/// # Arguments
///
/// * `jd` - Julian day in dynamical time
///
/// # Returns
///
/// The geocentric solar coordinates at that instant
pub fn sun_position(jd: f64) -> SunPosition {
    let t = (jd - J2000) / JULIAN_CENTURY;
    let t2 = t * t;

    let mean_longitude =
        normalize_degrees_360(280.46646 + (36000.76983 * t) + (0.0003032 * t2));
    let mean_anomaly = normalize_degrees_360(357.52911 + (35999.05029 * t) + (-0.0001537 * t2));
    let eccentricity = 0.016708634 + (-0.000042037 * t) + (-0.0000001267 * t2);

    let center = ((1.914602 + (-0.004817 * t) + (-0.000014 * t2)) * sin_deg(mean_anomaly))
        + ((0.019993 - (0.000101 * t)) * sin_deg(2.0 * mean_anomaly))
        + (0.000289 * sin_deg(3.0 * mean_anomaly));

    let true_longitude = mean_longitude + center;
    let true_anomaly = mean_anomaly + center;
    let radius_vector = (1.000001018 * (1.0 - (eccentricity * eccentricity)))
        / (1.0 + (eccentricity * cos_deg(true_anomaly)));

    // Apparent quantities need the longitude of the ascending node of the
    // Moon's orbit for the nutation and aberration corrections.
    let omega = 125.04 - (1934.136 * t);
    let apparent_longitude = true_longitude + (-0.00569) + (-0.00478 * sin_deg(omega));

    let epsilon0 = mean_obliquity(jd);
    let epsilon = epsilon0 + (0.00256 * cos_deg(omega));

    let right_ascension = normalize_degrees_360(
        (cos_deg(epsilon0) * sin_deg(true_longitude))
            .atan2(cos_deg(true_longitude))
            .to_degrees(),
    );
    let declination = (sin_deg(epsilon0) * sin_deg(true_longitude)).asin().to_degrees();

    let apparent_right_ascension = normalize_degrees_360(
        (cos_deg(epsilon) * sin_deg(apparent_longitude))
            .atan2(cos_deg(apparent_longitude))
            .to_degrees(),
    );
    let apparent_declination =
        (sin_deg(epsilon) * sin_deg(apparent_longitude)).asin().to_degrees();

    SunPosition {
        mean_longitude,
        mean_anomaly,
        eccentricity,
        center,
        true_longitude,
        true_anomaly,
        radius_vector,
        apparent_longitude,
        right_ascension,
        declination,
        apparent_right_ascension,
        apparent_declination,
    }
}

/// Computes the nutation in longitude and obliquity at the given Julian day.
///
/// Evaluates the 63-term IAU 1980 series over the five fundamental
/// arguments of the Sun and Moon.
///
/// # Arguments
///
/// * `jd` - Julian day in dynamical time
///
/// # Returns
///
/// `(delta_psi, delta_epsilon)`, both in degrees
pub fn nutation(jd: f64) -> (f64, f64) {
    let t = (jd - J2000) / JULIAN_CENTURY;
    let t2 = t * t;
    let t3 = t * t2;

    // Fundamental arguments: mean elongation of the Moon, mean anomalies of
    // the Sun and Moon, the Moon's argument of latitude, and the longitude
    // of the ascending node of the Moon's mean orbit.
    let mut ta = [
        (297.850363 + 445267.11148 * t - 0.0019142 * t2 + t3 / 189474.0).to_radians(),
        (357.52772 + 35999.05034 * t - 0.0001603 * t2 - t3 / 300000.0).to_radians(),
        (134.96298 + 477198.867398 * t + 0.0086972 * t2 + t3 / 56250.0).to_radians(),
        (93.27191 + 483202.017538 * t - 0.0036825 * t2 + t3 / 327270.0).to_radians(),
        (125.04452 - 1934.136261 * t + 0.0020708 * t2 + t3 / 450000.0).to_radians(),
    ];
    for arg in &mut ta {
        *arg = normalize_radians_tau(*arg);
    }

    let to10 = t / 10.0;
    let mut dp = 0.0;
    let mut de = 0.0;
    for (mult, coeff) in NUTATION_ARG_MULT.iter().zip(NUTATION_COEFF.iter()) {
        let mut ang = 0.0;
        for (m, arg) in mult.iter().zip(ta.iter()) {
            if *m != 0 {
                ang += f64::from(*m) * arg;
            }
        }
        dp += (coeff[0] + coeff[1] * to10) * ang.sin();
        de += (coeff[2] + coeff[3] * to10) * ang.cos();
    }

    // The coefficients are in units of 0.0001 arcsecond.
    (dp / (3600.0 * 10000.0), de / (3600.0 * 10000.0))
}

/// Computes the mean obliquity of the ecliptic at the given Julian day.
///
/// Uses the Laskar 10-term series, valid for roughly 10,000 years around
/// J2000; outside that range only the constant term is returned.
///
/// # Arguments
///
/// * `jd` - Julian day in dynamical time
///
/// # Returns
///
/// The mean obliquity in degrees
pub fn mean_obliquity(jd: f64) -> f64 {
    let u = (jd - J2000) / (JULIAN_CENTURY * 100.0);
    let mut eps = 23.0 + (26.0 / 60.0) + (21.448 / 3600.0);

    if u.abs() < 1.0 {
        let mut v = u;
        for term in OBLIQUITY_TERMS {
            eps += (term / 3600.0) * v;
            v *= u;
        }
    }
    eps
}

/// Computes the equation of time at the given Julian day.
///
/// The equation of time is the difference between apparent solar time and
/// mean solar time, here expressed as a fraction of a day so it can be
/// added directly to a Julian day value.
///
/// # Arguments
///
/// * `jd` - Julian day in dynamical time
///
/// # Returns
///
/// Apparent minus mean solar time in fractions of a day
pub fn equation_of_time(jd: f64) -> f64 {
    let tau = (jd - J2000) / JULIAN_MILLENNIUM;
    let l0 = normalize_degrees_360(
        280.4664567
            + (360007.6982779 * tau)
            + (0.03032028 * tau * tau)
            + ((tau * tau * tau) / 49931.0)
            + (-((tau * tau * tau * tau) / 15300.0))
            + (-((tau * tau * tau * tau * tau) / 2000000.0)),
    );
    let alpha = sun_position(jd).apparent_right_ascension;
    let (delta_psi, delta_epsilon) = nutation(jd);
    let epsilon = mean_obliquity(jd) + delta_epsilon;

    let mut e = l0 + (-0.0057183) + (-alpha) + (delta_psi * cos_deg(epsilon));
    e -= 20.0 * (e / 20.0).floor();
    e / (24.0 * 60.0)
}

/// Sum of the periodic equinox correction terms at `t` Julian centuries
/// from J2000.
pub(crate) fn periodic_equinox_sum(t: f64) -> f64 {
    EQUINOX_TERMS
        .iter()
        .map(|term| term.a * cos_deg(term.p + (term.w * t)))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obliquity_near_j2000_matches_reference() {
        // Meeus gives ε₀ = 23°26'21".448 at J2000 exactly.
        let eps = mean_obliquity(J2000);
        assert!((eps - 23.43929111).abs() < 1e-6);
    }

    #[test]
    fn obliquity_far_from_j2000_degrades_to_constant() {
        let eps = mean_obliquity(J2000 + JULIAN_CENTURY * 100.0);
        assert!((eps - 23.43929111111111).abs() < 1e-9);
    }

    #[test]
    fn nutation_magnitudes_are_sane() {
        // Nutation in longitude stays within about ±0.005 degrees.
        let (dpsi, deps) = nutation(2448669.5);
        assert!(dpsi.abs() < 0.006);
        assert!(deps.abs() < 0.003);
    }

    #[test]
    fn equation_of_time_is_a_small_day_fraction() {
        // The correction is folded into [0, 20) minutes of a day.
        for offset in 0..36 {
            let jd = 2451545.0 + f64::from(offset) * 10.0;
            let e = equation_of_time(jd);
            assert!((0.0..20.0 / (24.0 * 60.0)).contains(&e));
        }
    }

    #[test]
    fn sun_position_angles_are_normalized() {
        let pos = sun_position(2448669.5);
        assert!((0.0..360.0).contains(&pos.mean_longitude));
        assert!((0.0..360.0).contains(&pos.mean_anomaly));
        assert!((0.0..360.0).contains(&pos.apparent_right_ascension));
        assert!(pos.radius_vector > 0.98 && pos.radius_vector < 1.02);
    }
}
