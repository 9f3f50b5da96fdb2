//! Constant tables for the solar-position and equinox calculations.
//!
//! The polynomial fits and periodic-term series follow Meeus,
//! *Astronomical Algorithms*, 2nd ed. (equinox fits from chapter 27,
//! nutation from chapter 22, obliquity from chapter 22, ΔT from
//! chapter 10).

/// A single periodic term: `a * cos(p + w * t)` with `p` and `w` in degrees.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PTerm {
    pub a: f64,
    pub p: f64,
    pub w: f64,
}

/// Fourth-order polynomial fits for the mean equinox/solstice instants of
/// years -1000..=1000, one row per event (March, June, September, December).
/// Evaluated at `y = year / 1000`.
pub(crate) const JDE0_FITS_TO_1000: [[f64; 5]; 4] = [
    [1721139.29189, 365242.13740, 0.06134, 0.00111, -0.00071],
    [1721233.25401, 365241.72562, -0.05323, 0.00907, 0.00025],
    [1721325.70455, 365242.49558, -0.11677, -0.00297, 0.00074],
    [1721414.39987, 365242.88257, -0.00769, -0.00933, -0.00006],
];

/// Same fits for years 1000..=3000, evaluated at `y = (year - 2000) / 1000`.
pub(crate) const JDE0_FITS_TO_3000: [[f64; 5]; 4] = [
    [2451623.80984, 365242.37404, 0.05169, -0.00411, -0.00057],
    [2451716.56767, 365241.62603, 0.00325, 0.00888, -0.00030],
    [2451810.21715, 365242.01767, -0.11575, 0.00337, 0.00078],
    [2451900.05952, 365242.74049, -0.06223, -0.00823, 0.00032],
];

/// Periodic correction terms applied on top of the mean equinox instant.
/// The sum of `a * cos(p + w * t)` over these 24 terms, scaled by 1e-5 and
/// damped by the solar-anomaly factor, gives the true instant.
pub(crate) const EQUINOX_TERMS: [PTerm; 24] = [
    PTerm { a: 485.0, p: 324.96, w: 1934.136 },
    PTerm { a: 203.0, p: 337.23, w: 32964.467 },
    PTerm { a: 199.0, p: 342.08, w: 20.186 },
    PTerm { a: 182.0, p: 27.85, w: 445267.112 },
    PTerm { a: 156.0, p: 73.14, w: 45036.886 },
    PTerm { a: 136.0, p: 171.52, w: 22518.443 },
    PTerm { a: 77.0, p: 222.54, w: 65928.934 },
    PTerm { a: 74.0, p: 296.72, w: 3034.906 },
    PTerm { a: 70.0, p: 243.58, w: 9037.513 },
    PTerm { a: 58.0, p: 119.81, w: 33718.147 },
    PTerm { a: 52.0, p: 297.17, w: 150.678 },
    PTerm { a: 50.0, p: 21.02, w: 2281.226 },
    PTerm { a: 45.0, p: 247.54, w: 29929.562 },
    PTerm { a: 44.0, p: 325.15, w: 31555.956 },
    PTerm { a: 29.0, p: 60.93, w: 4443.417 },
    PTerm { a: 18.0, p: 155.12, w: 67555.328 },
    PTerm { a: 17.0, p: 288.79, w: 4562.452 },
    PTerm { a: 16.0, p: 198.04, w: 62894.029 },
    PTerm { a: 14.0, p: 199.76, w: 31436.921 },
    PTerm { a: 12.0, p: 95.39, w: 14577.848 },
    PTerm { a: 12.0, p: 287.11, w: 31931.756 },
    PTerm { a: 12.0, p: 320.81, w: 34777.259 },
    PTerm { a: 9.0, p: 227.73, w: 1222.114 },
    PTerm { a: 8.0, p: 15.45, w: 16859.074 },
];

/// ΔT (TD − UT, seconds) at two-year intervals from 1620 to 2002.
pub(crate) const DELTA_T_TABLE: [f64; 192] = [
    121.0, 112.0, 103.0, 95.0, 88.0, 82.0, 77.0, 72.0, 68.0, 63.0, 60.0, 56.0,
    53.0, 51.0, 48.0, 46.0, 44.0, 42.0, 40.0, 38.0, 35.0, 33.0, 31.0, 29.0,
    26.0, 24.0, 22.0, 20.0, 18.0, 16.0, 14.0, 12.0, 11.0, 10.0, 9.0, 8.0, 7.0,
    7.0, 7.0, 7.0, 7.0, 7.0, 8.0, 8.0, 9.0, 9.0, 9.0, 9.0, 9.0, 10.0, 10.0,
    10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 11.0, 11.0, 11.0, 11.0, 11.0, 12.0,
    12.0, 12.0, 12.0, 13.0, 13.0, 13.0, 14.0, 14.0, 14.0, 14.0, 15.0, 15.0,
    15.0, 15.0, 15.0, 16.0, 16.0, 16.0, 16.0, 16.0, 16.0, 16.0, 16.0, 15.0,
    15.0, 14.0, 13.0, 13.1, 12.5, 12.2, 12.0, 12.0, 12.0, 12.0, 12.0, 12.0,
    11.9, 11.6, 11.0, 10.2, 9.2, 8.2, 7.1, 6.2, 5.6, 5.4, 5.3, 5.4, 5.6, 5.9,
    6.2, 6.5, 6.8, 7.1, 7.3, 7.5, 7.6, 7.7, 7.3, 6.2, 5.2, 2.7, 1.4, -1.2,
    -2.8, -3.8, -4.8, -5.5, -5.3, -5.6, -5.7, -5.9, -6.0, -6.3, -6.5, -6.2,
    -4.7, -2.8, -0.1, 2.6, 5.3, 7.7, 10.4, 13.3, 16.0, 18.2, 20.2, 21.1, 22.4,
    23.5, 23.8, 24.3, 24.0, 23.9, 23.9, 23.7, 24.0, 24.3, 25.3, 26.2, 27.3,
    28.2, 29.1, 30.0, 30.7, 31.4, 32.2, 33.1, 34.0, 35.0, 36.5, 38.3, 40.2,
    42.2, 44.5, 46.5, 48.5, 50.5, 52.2, 53.8, 54.9, 55.8, 56.9, 58.3, 60.0,
    61.6, 63.0, 65.0, 66.6,
];

/// Multipliers of the five fundamental lunar/solar arguments (D, M, M', F, Ω)
/// for each of the 63 terms of the IAU 1980 nutation series.
pub(crate) const NUTATION_ARG_MULT: [[i32; 5]; 63] = [
    [0, 0, 0, 0, 1],
    [-2, 0, 0, 2, 2],
    [0, 0, 0, 2, 2],
    [0, 0, 0, 0, 2],
    [0, 1, 0, 0, 0],
    [0, 0, 1, 0, 0],
    [-2, 1, 0, 2, 2],
    [0, 0, 0, 2, 1],
    [0, 0, 1, 2, 2],
    [-2, -1, 0, 2, 2],
    [-2, 0, 1, 0, 0],
    [-2, 0, 0, 2, 1],
    [0, 0, -1, 2, 2],
    [2, 0, 0, 0, 0],
    [0, 0, 1, 0, 1],
    [2, 0, -1, 2, 2],
    [0, 0, -1, 0, 1],
    [0, 0, 1, 2, 1],
    [-2, 0, 2, 0, 0],
    [0, 0, -2, 2, 1],
    [2, 0, 0, 2, 2],
    [0, 0, 2, 2, 2],
    [0, 0, 2, 0, 0],
    [-2, 0, 1, 2, 2],
    [0, 0, 0, 2, 0],
    [-2, 0, 0, 2, 0],
    [0, 0, -1, 2, 1],
    [0, 2, 0, 0, 0],
    [2, 0, -1, 0, 1],
    [-2, 2, 0, 2, 2],
    [0, 1, 0, 0, 1],
    [-2, 0, 1, 0, 1],
    [0, -1, 0, 0, 1],
    [0, 0, 2, -2, 0],
    [2, 0, -1, 2, 1],
    [2, 0, 1, 2, 2],
    [0, 1, 0, 2, 2],
    [-2, 1, 1, 0, 0],
    [0, -1, 0, 2, 2],
    [2, 0, 0, 2, 1],
    [2, 0, 1, 0, 0],
    [-2, 0, 2, 2, 2],
    [-2, 0, 1, 2, 1],
    [2, 0, -2, 0, 1],
    [2, 0, 0, 0, 1],
    [0, -1, 1, 0, 0],
    [-2, -1, 0, 2, 1],
    [-2, 0, 0, 0, 1],
    [0, 0, 2, 2, 1],
    [-2, 0, 2, 0, 1],
    [-2, 1, 0, 2, 1],
    [0, 0, 1, -2, 0],
    [-1, 0, 1, 0, 0],
    [-2, 1, 0, 0, 0],
    [1, 0, 0, 0, 0],
    [0, 0, 1, 2, 0],
    [-1, -1, 1, 0, 0],
    [0, 1, 1, 0, 0],
    [0, -1, 1, 2, 2],
    [2, -1, -1, 2, 2],
    [0, 0, -2, 2, 2],
    [0, 0, 3, 2, 2],
    [2, -1, 0, 2, 2],
];

/// Sine/cosine coefficients for the nutation series, in units of
/// 0.0001 arcsecond. Each row is `[psi, psi·t, eps, eps·t]` where the
/// time-dependent parts are scaled by Julian centuries / 10.
pub(crate) const NUTATION_COEFF: [[f64; 4]; 63] = [
    [-171996.0, -1742.0, 92095.0, 89.0],
    [-13187.0, -16.0, 5736.0, -31.0],
    [-2274.0, -2.0, 977.0, -5.0],
    [2062.0, 2.0, -895.0, 5.0],
    [1426.0, -34.0, 54.0, -1.0],
    [712.0, 1.0, -7.0, 0.0],
    [-517.0, 12.0, 224.0, -6.0],
    [-386.0, -4.0, 200.0, 0.0],
    [-301.0, 0.0, 129.0, -1.0],
    [217.0, -5.0, -95.0, 3.0],
    [-158.0, 0.0, 0.0, 0.0],
    [129.0, 1.0, -70.0, 0.0],
    [123.0, 0.0, -53.0, 0.0],
    [63.0, 0.0, 0.0, 0.0],
    [63.0, 1.0, -33.0, 0.0],
    [-59.0, 0.0, 26.0, 0.0],
    [-58.0, -1.0, 32.0, 0.0],
    [-51.0, 0.0, 27.0, 0.0],
    [48.0, 0.0, 0.0, 0.0],
    [46.0, 0.0, -24.0, 0.0],
    [-38.0, 0.0, 16.0, 0.0],
    [-31.0, 0.0, 13.0, 0.0],
    [29.0, 0.0, 0.0, 0.0],
    [29.0, 0.0, -12.0, 0.0],
    [26.0, 0.0, 0.0, 0.0],
    [-22.0, 0.0, 0.0, 0.0],
    [21.0, 0.0, -10.0, 0.0],
    [17.0, -1.0, 0.0, 0.0],
    [16.0, 0.0, -8.0, 0.0],
    [-16.0, 1.0, 7.0, 0.0],
    [-15.0, 0.0, 9.0, 0.0],
    [-13.0, 0.0, 7.0, 0.0],
    [-12.0, 0.0, 6.0, 0.0],
    [11.0, 0.0, 0.0, 0.0],
    [-10.0, 0.0, 5.0, 0.0],
    [-8.0, 0.0, 3.0, 0.0],
    [7.0, 0.0, -3.0, 0.0],
    [-7.0, 0.0, 0.0, 0.0],
    [-7.0, 0.0, 3.0, 0.0],
    [-7.0, 0.0, 3.0, 0.0],
    [6.0, 0.0, 0.0, 0.0],
    [6.0, 0.0, -3.0, 0.0],
    [6.0, 0.0, -3.0, 0.0],
    [-6.0, 0.0, 3.0, 0.0],
    [-6.0, 0.0, 3.0, 0.0],
    [5.0, 0.0, 0.0, 0.0],
    [-5.0, 0.0, 3.0, 0.0],
    [-5.0, 0.0, 3.0, 0.0],
    [-5.0, 0.0, 3.0, 0.0],
    [4.0, 0.0, 0.0, 0.0],
    [4.0, 0.0, 0.0, 0.0],
    [4.0, 0.0, 0.0, 0.0],
    [-4.0, 0.0, 0.0, 0.0],
    [-4.0, 0.0, 0.0, 0.0],
    [-4.0, 0.0, 0.0, 0.0],
    [3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
    [-3.0, 0.0, 0.0, 0.0],
];

/// Coefficients (arcseconds) of the Laskar series for the mean obliquity
/// of the ecliptic, evaluated in powers of `u = (jd - J2000) / 3652500`.
pub(crate) const OBLIQUITY_TERMS: [f64; 10] = [
    -4680.93, -1.55, 1999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
];
