use ndarray::{Array, ArrayBase, Data, Dimension};
use uom::si::{
    angle::degree,
    f64::{Angle, Ratio},
    ratio::ratio,
};

use crate::{Model, Series};

/// Zenith angles that can be converted into relative airmass.
///
/// Implementations preserve the shape of their input: a scalar yields a
/// scalar, a sequence yields a sequence of the same length and order, an
/// array keeps its dimensions, and a [`Series`] keeps its labels.
///
/// Raw `f64` values are zenith angles in degrees.
pub trait ZenithAngles {
    /// The airmass output, shaped like `Self`.
    type Airmass;

    /// Computes relative airmass for every zenith angle using `model`.
    fn relative_airmass(&self, model: Model) -> Self::Airmass;
}

impl ZenithAngles for f64 {
    type Airmass = f64;

    fn relative_airmass(&self, model: Model) -> f64 {
        model.evaluate(*self)
    }
}

impl ZenithAngles for Angle {
    type Airmass = Ratio;

    fn relative_airmass(&self, model: Model) -> Ratio {
        Ratio::new::<ratio>(model.evaluate(self.get::<degree>()))
    }
}

impl ZenithAngles for [f64] {
    type Airmass = Vec<f64>;

    fn relative_airmass(&self, model: Model) -> Vec<f64> {
        tracing::trace!(%model, len = self.len(), "evaluating relative airmass");
        self.iter().map(|&zenith| model.evaluate(zenith)).collect()
    }
}

impl ZenithAngles for Vec<f64> {
    type Airmass = Vec<f64>;

    fn relative_airmass(&self, model: Model) -> Vec<f64> {
        self.as_slice().relative_airmass(model)
    }
}

impl<S, D> ZenithAngles for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    type Airmass = Array<f64, D>;

    fn relative_airmass(&self, model: Model) -> Array<f64, D> {
        tracing::trace!(%model, shape = ?self.shape(), "evaluating relative airmass");
        self.mapv(|zenith| model.evaluate(zenith))
    }
}

impl<L: Clone> ZenithAngles for Series<L> {
    type Airmass = Series<L>;

    fn relative_airmass(&self, model: Model) -> Series<L> {
        tracing::trace!(%model, len = self.len(), "evaluating relative airmass");
        self.map_values(|zenith| model.evaluate(zenith))
    }
}
