/// Normalizes an angle in degrees to the range [0, 360).
///
/// This function takes any angle value (positive or negative) and converts it
/// to an equivalent angle in the range [0, 360). Values outside this range
/// are wrapped around using modulo arithmetic.
///
/// # Arguments
///
/// * `degrees` - The angle in degrees to normalize
///
/// # Returns
///
/// The normalized angle in degrees, in the range [0, 360)
pub(crate) fn normalize_degrees_360(degrees: f64) -> f64 {
    let degrees = degrees / 360.0;
    let mut limited = 360.0 * (degrees - degrees.floor());
    if limited < 0.0 {
        limited += 360.0;
    }
    limited
}

/// Normalizes an angle in radians to the range [0, 2π).
pub(crate) fn normalize_radians_tau(radians: f64) -> f64 {
    let tau = 2.0 * std::f64::consts::PI;
    let turns = radians / tau;
    let mut limited = tau * (turns - turns.floor());
    if limited < 0.0 {
        limited += tau;
    }
    limited
}

/// Sine of an angle given in degrees.
pub(crate) fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Cosine of an angle given in degrees.
pub(crate) fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Computes the floored modulo operation (Python-style modulo).
///
/// Unlike Rust's `%` operator which can return negative values, this function
/// always returns a non-negative result in the range [0, m). This is what the
/// calendrical formulas assume for day-number and cycle arithmetic.
///
/// # Arguments
///
/// * `x` - The dividend
/// * `m` - The modulus (must be positive)
///
/// # Returns
///
/// The remainder `x mod m` in the range [0, m)
///
/// # Examples
///
/// ```
/// # fn floored_mod(x: f64, m: f64) -> f64 { ((x % m) + m) % m }
/// assert_eq!(floored_mod(7.0, 3.0), 1.0);
/// assert_eq!(floored_mod(-7.0, 3.0), 2.0);  // Unlike -7 % 3 which would be -1
/// assert_eq!(floored_mod(0.5, 1.0), 0.5);
/// assert_eq!(floored_mod(1.5, 1.0), 0.5);
/// ```
pub(crate) fn floored_mod(x: f64, m: f64) -> f64 {
    ((x % m) + m) % m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_negative_angles() {
        assert_eq!(normalize_degrees_360(-90.0), 270.0);
        assert_eq!(normalize_degrees_360(720.0), 0.0);
        assert_eq!(normalize_degrees_360(361.5), 1.5);
    }

    #[test]
    fn floored_mod_is_non_negative() {
        assert_eq!(floored_mod(-1.0, 7.0), 6.0);
        assert_eq!(floored_mod(8.0, 7.0), 1.0);
        assert_eq!(floored_mod(0.0, 7.0), 0.0);
    }

    #[test]
    fn radian_normalization_stays_in_one_turn() {
        let tau = 2.0 * std::f64::consts::PI;
        let x = normalize_radians_tau(-0.5);
        assert!((0.0..tau).contains(&x));
        assert!((x - (tau - 0.5)).abs() < 1e-12);
    }
}
