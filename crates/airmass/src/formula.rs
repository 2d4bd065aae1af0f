//! Per-element airmass formulas.
//!
//! Each function takes the zenith angle in degrees, already masked by
//! [`mask_beyond_horizon`], and returns the relative airmass.
//! NaN inputs propagate through ordinary floating-point arithmetic.

/// Zenith angle of the horizon, in degrees.
pub const HORIZON_DEG: f64 = 90.0;

/// Replaces zenith angles below the horizon with NaN.
///
/// Any angle strictly greater than 90° maps to NaN, so no formula is ever
/// evaluated past the horizon. NaN inputs stay NaN.
#[must_use]
pub fn mask_beyond_horizon(zenith_deg: f64) -> f64 {
    if zenith_deg > HORIZON_DEG {
        f64::NAN
    } else {
        zenith_deg
    }
}

/// Cosine of the zenith angle, evaluated as the sine of the elevation.
///
/// Equivalent to `zenith_deg.to_radians().cos()`, but exact at the
/// horizon (`0`) and at the zenith (`1`).
fn cos_zenith(z: f64) -> f64 {
    (HORIZON_DEG - z).to_radians().sin()
}

pub(crate) fn simple(z: f64) -> f64 {
    1. / cos_zenith(z)
}

pub(crate) fn kasten_1966(z: f64) -> f64 {
    1. / (cos_zenith(z) + 0.15 * (93.885 - z).powf(-1.253))
}

pub(crate) fn young_irvine_1967(z: f64) -> f64 {
    let sec = 1. / cos_zenith(z);
    sec * (1. - 0.0012 * (sec * sec - 1.))
}

pub(crate) fn kasten_young_1989(z: f64) -> f64 {
    1. / (cos_zenith(z) + 0.50572 * (6.07995 + (HORIZON_DEG - z)).powf(-1.6364))
}

pub(crate) fn gueymard_1993(z: f64) -> f64 {
    1. / (cos_zenith(z) + 0.001_767_59 * z * (94.375_15 - z).powf(-1.21563))
}

pub(crate) fn young_1994(z: f64) -> f64 {
    let c = cos_zenith(z);
    let c2 = c * c;
    (1.002_432 * c2 + 0.148_386 * c + 0.009_646_7)
        / (c2 * c + 0.149_864 * c2 + 0.010_296_3 * c + 0.000_303_978)
}

pub(crate) fn pickering_2002(z: f64) -> f64 {
    let elevation = HORIZON_DEG - z;
    1. / (elevation + 244. / (165. + 47. * elevation.powf(1.1)))
        .to_radians()
        .sin()
}

pub(crate) fn gueymard_2003(z: f64) -> f64 {
    1. / (cos_zenith(z) + 0.48353 * z.powf(0.095_846) / (96.741 - z).powf(1.754))
}
