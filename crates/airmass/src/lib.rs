//! Relative optical airmass models for solar irradiance modeling.
//!
//! Relative airmass is the ratio of the optical path length of sunlight
//! through the atmosphere to the path length with the sun directly
//! overhead. Values here are at sea level and not adjusted for pressure.
//!
//! Eight empirical models are available through [`Model`]. Each takes the
//! solar zenith angle in degrees; some expect the apparent
//! (refraction-corrected) angle and others the true angle, as reported by
//! [`Model::convention`]. Zenith angles greater than 90° always produce NaN.
//!
//! Inputs may be scalars, slices, [`ndarray`] arrays, [`uom`] angles, or
//! labelled [`Series`]; outputs mirror the input's shape. See [`ZenithAngles`].
//!
//! # Example
//!
//! ```
//! use airmass::{Model, compute_relative_airmass, relative_airmass};
//!
//! let am = relative_airmass(&60.0, Model::KastenYoung1989);
//! assert!((am - 1.994).abs() < 1e-3);
//!
//! let am = compute_relative_airmass(&vec![0.0, 95.0], "Kasten1966").unwrap();
//! assert!(am[1].is_nan());
//!
//! assert!(compute_relative_airmass(&45.0, "not_a_model").is_err());
//! ```

mod calculator;
mod error;
mod model;
mod series;
mod zenith;

pub mod formula;

pub use calculator::RelativeAirmass;
pub use error::AirmassError;
pub use model::{Model, ZenithConvention};
pub use series::{Series, SeriesError};
pub use zenith::ZenithAngles;

/// Computes relative airmass for `zenith` using `model`.
pub fn relative_airmass<Z: ZenithAngles + ?Sized>(zenith: &Z, model: Model) -> Z::Airmass {
    zenith.relative_airmass(model)
}

/// Computes relative airmass for `zenith` using the model named `model`.
///
/// The name is matched case-insensitively against [`Model::name`].
///
/// # Errors
///
/// Returns [`AirmassError::InvalidModel`] if `model` is not a recognized name.
pub fn compute_relative_airmass<Z: ZenithAngles + ?Sized>(
    zenith: &Z,
    model: &str,
) -> Result<Z::Airmass, AirmassError> {
    let model: Model = model.parse()?;
    Ok(zenith.relative_airmass(model))
}

/// Computes relative airmass for `zenith` using the default model,
/// [`Model::KastenYoung1989`].
pub fn compute_relative_airmass_default<Z: ZenithAngles + ?Sized>(zenith: &Z) -> Z::Airmass {
    zenith.relative_airmass(Model::default())
}
