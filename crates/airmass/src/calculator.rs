use crate::{AirmassError, Model, ZenithAngles};

/// Computes relative airmass with a fixed model.
///
/// This is the configurable form of [`relative_airmass`](crate::relative_airmass),
/// suitable for embedding in a larger pipeline's configuration.
/// With the `serde` feature it deserializes from a table like
/// `{ model = "kasten1966" }`, falling back to the default model when the
/// key is absent.
///
/// # Example
///
/// ```
/// use airmass::{Model, RelativeAirmass};
///
/// let calculator = RelativeAirmass::from_name("Young1994").unwrap();
/// assert_eq!(calculator.model(), Model::Young1994);
///
/// let airmass = calculator.call(&vec![0.0, 60.0, 100.0]);
/// assert!((airmass[0] - 1.0).abs() < 1e-6);
/// assert!(airmass[2].is_nan());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RelativeAirmass {
    model: Model,
}

impl RelativeAirmass {
    #[must_use]
    pub fn new(model: Model) -> Self {
        Self { model }
    }

    /// Creates a calculator from a case-insensitive model name.
    ///
    /// # Errors
    ///
    /// Returns [`AirmassError::InvalidModel`] if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, AirmassError> {
        name.parse().map(Self::new)
    }

    #[must_use]
    pub fn model(&self) -> Model {
        self.model
    }

    /// Computes relative airmass for `zenith`, preserving its shape.
    pub fn call<Z: ZenithAngles + ?Sized>(&self, zenith: &Z) -> Z::Airmass {
        zenith.relative_airmass(self.model)
    }
}

impl From<Model> for RelativeAirmass {
    fn from(model: Model) -> Self {
        Self::new(model)
    }
}
