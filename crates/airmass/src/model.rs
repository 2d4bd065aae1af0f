use std::{fmt, str::FromStr};

use crate::{
    AirmassError,
    formula::{self, mask_beyond_horizon},
};

/// The zenith angle convention a model was fitted against.
///
/// Apparent zenith angles include atmospheric refraction; true zenith angles
/// are purely geometric. Callers are responsible for supplying the angle a
/// model expects, since no conversion is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZenithConvention {
    /// Refraction-corrected zenith angle, computed at sea level.
    Apparent,
    /// Geometric zenith angle.
    True,
    /// Either convention may be used.
    Either,
}

/// An empirical relative airmass model.
///
/// Every model returns NaN for zenith angles beyond the horizon (greater
/// than 90°). Models differ in how they behave approaching the horizon:
/// [`Model::Simple`] diverges at 90°, while most others remain bounded
/// near 38.
///
/// # References
///
/// - Kasten (1965), CRREL Technical Report 136.
/// - Young and Irvine (1967), The Astronomical Journal 72.
/// - Kasten and Young (1989), Applied Optics 28.
/// - Gueymard (1993), Solar Energy 51, Eq. 22.
/// - Young (1994), Applied Optics 33.
/// - Pickering (2002), DIO 12.
/// - Gueymard (2003), Solar Energy 74.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Model {
    /// Secant of the zenith angle.
    Simple,
    /// Kasten (1966).
    Kasten1966,
    /// Young and Irvine (1967).
    YoungIrvine1967,
    /// Kasten and Young (1989).
    #[default]
    KastenYoung1989,
    /// Gueymard (1993).
    Gueymard1993,
    /// Young (1994).
    Young1994,
    /// Pickering (2002).
    Pickering2002,
    /// Gueymard (2003).
    Gueymard2003,
}

impl Model {
    /// All supported models.
    pub const ALL: [Model; 8] = [
        Model::Simple,
        Model::Kasten1966,
        Model::YoungIrvine1967,
        Model::KastenYoung1989,
        Model::Gueymard1993,
        Model::Young1994,
        Model::Pickering2002,
        Model::Gueymard2003,
    ];

    /// Returns the canonical lowercase name of the model.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Model::Simple => "simple",
            Model::Kasten1966 => "kasten1966",
            Model::YoungIrvine1967 => "youngirvine1967",
            Model::KastenYoung1989 => "kastenyoung1989",
            Model::Gueymard1993 => "gueymard1993",
            Model::Young1994 => "young1994",
            Model::Pickering2002 => "pickering2002",
            Model::Gueymard2003 => "gueymard2003",
        }
    }

    /// Returns the zenith angle convention this model expects.
    #[must_use]
    pub const fn convention(self) -> ZenithConvention {
        match self {
            Model::Simple => ZenithConvention::Either,
            Model::YoungIrvine1967 | Model::Young1994 => ZenithConvention::True,
            Model::Kasten1966
            | Model::KastenYoung1989
            | Model::Gueymard1993
            | Model::Pickering2002
            | Model::Gueymard2003 => ZenithConvention::Apparent,
        }
    }

    /// Evaluates the relative airmass for a single zenith angle in degrees.
    ///
    /// Returns NaN if `zenith_deg` is greater than 90° or is itself NaN.
    #[must_use]
    pub fn evaluate(self, zenith_deg: f64) -> f64 {
        let z = mask_beyond_horizon(zenith_deg);
        match self {
            Model::Simple => formula::simple(z),
            Model::Kasten1966 => formula::kasten_1966(z),
            Model::YoungIrvine1967 => formula::young_irvine_1967(z),
            Model::KastenYoung1989 => formula::kasten_young_1989(z),
            Model::Gueymard1993 => formula::gueymard_1993(z),
            Model::Young1994 => formula::young_1994(z),
            Model::Pickering2002 => formula::pickering_2002(z),
            Model::Gueymard2003 => formula::gueymard_2003(z),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a model name, ignoring ASCII case.
impl FromStr for Model {
    type Err = AirmassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                tracing::debug!(model = s, "rejected unknown airmass model");
                AirmassError::InvalidModel {
                    model: s.to_owned(),
                }
            })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    /// Reference values at zenith angles of 0°, 30°, 60°, 85°, and 89°.
    const REFERENCE: [(Model, [f64; 5]); 8] = [
        (
            Model::Simple,
            [1.0, 1.154_700_538_379_251_7, 2.0, 11.473_713_245_669_856, 57.298_688_498_550_185],
        ),
        (
            Model::Kasten1966,
            [0.999_493_932_591_202_9, 1.153_607_956_358_908, 1.992_764_345_620_887, 10.323_080_326_274_898, 26.309_793_964_489_75],
        ),
        (
            Model::YoungIrvine1967,
            [1.0, 1.154_238_658_163_900_1, 1.9928, 9.674_918_239_969_049, -168.376_072_087_515_3],
        ),
        (
            Model::KastenYoung1989,
            [0.999_711_991_855_838_1, 1.153_992_233_363_676, 1.994_292_852_529_250_3, 10.305_791_327_930_303, 26.310_555_068_385_327],
        ),
        (
            Model::Gueymard1993,
            [1.0, 1.154_253_297_892_045_7, 1.994_260_953_512_951_2, 10.304_326_481_410_03, 26.442_770_586_932_518],
        ),
        (
            Model::Young1994,
            [1.000_000_363_647_557_2, 1.154_108_440_501_513, 1.991_730_755_835_963_2, 10.058_658_384_373_16, 23.458_448_486_811_427],
        ),
        (
            Model::Pickering2002,
            [1.000_000_196_171_337, 1.154_057_920_573_347_2, 1.993_153_846_414_571_3, 10.333_705_599_375_577, 26.643_769_397_640_778],
        ),
        (
            Model::Gueymard2003,
            [1.0, 1.154_137_235_985_222_4, 1.994_865_231_596_497_4, 10.309_507_599_542_33, 26.330_415_174_193_49],
        ),
    ];

    #[test]
    fn matches_reference_values() {
        let zeniths = [0., 30., 60., 85., 89.];
        for (model, expected) in REFERENCE {
            for (zenith, expected) in zeniths.into_iter().zip(expected) {
                let actual = model.evaluate(zenith);
                assert!(
                    approx::relative_eq!(actual, expected, max_relative = 1e-9),
                    "{model} at {zenith}°: got {actual}, expected {expected}",
                );
            }
        }
    }

    #[test]
    fn every_model_masks_beyond_horizon() {
        for model in Model::ALL {
            for zenith in [90.0001, 95., 120., 180., f64::INFINITY] {
                assert!(model.evaluate(zenith).is_nan(), "{model} at {zenith}°");
            }
            assert!(model.evaluate(f64::NAN).is_nan(), "{model} at NaN");
        }
    }

    #[test]
    fn kasten_young_known_values() {
        let model = Model::KastenYoung1989;
        assert_relative_eq!(model.evaluate(0.), 1.0, epsilon = 1e-3);
        assert_relative_eq!(model.evaluate(60.), 1.995, epsilon = 1e-3);
        assert_relative_eq!(
            model.evaluate(60.),
            1. / (0.5 + 0.50572 * (6.07995_f64 + 30.).powf(-1.6364)),
            max_relative = 1e-12
        );
        assert_relative_eq!(model.evaluate(90.), 37.9, epsilon = 0.5);
        assert!(model.evaluate(90.0001).is_nan());
        assert!(model.evaluate(95.).is_nan());
    }

    #[test]
    fn simple_diverges_at_horizon() {
        let airmass = Model::Simple.evaluate(90.);
        assert!(airmass.is_infinite() || airmass.is_nan());
        assert!(Model::KastenYoung1989.evaluate(90.).is_finite());
    }

    #[test]
    fn kasten_young_is_non_decreasing() {
        let mut previous = Model::KastenYoung1989.evaluate(0.);
        for degree in 1..=90 {
            let current = Model::KastenYoung1989.evaluate(f64::from(degree));
            assert!(current >= previous, "decreased at {degree}°");
            previous = current;
        }
    }

    #[test]
    fn evaluation_is_deterministic() {
        for model in Model::ALL {
            for zenith in [-5., 0., 12.5, 45., 89.99, 90., 91.] {
                let first = model.evaluate(zenith);
                let second = model.evaluate(zenith);
                assert!(first.to_bits() == second.to_bits() || (first.is_nan() && second.is_nan()));
            }
        }
    }

    #[test]
    fn negative_zenith_is_evaluated() {
        assert_relative_eq!(Model::Simple.evaluate(-30.), Model::Simple.evaluate(30.), max_relative = 1e-12);
        assert!(Model::KastenYoung1989.evaluate(-1.).is_finite());
        assert!(Model::Gueymard2003.evaluate(-1.).is_nan());
    }

    #[test]
    fn parses_names_ignoring_case() {
        for model in Model::ALL {
            assert_eq!(model.name().parse::<Model>(), Ok(model));
            assert_eq!(model.name().to_uppercase().parse::<Model>(), Ok(model));
            assert_eq!(model.to_string(), model.name());
        }
        assert_eq!("KastenYoung1989".parse::<Model>(), Ok(Model::KastenYoung1989));
        assert_eq!("SIMPLE".parse::<Model>(), Ok(Model::Simple));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "not_a_model".parse::<Model>().unwrap_err();
        assert_eq!(
            err,
            AirmassError::InvalidModel {
                model: "not_a_model".to_owned()
            }
        );
        assert!(err.to_string().contains("not_a_model"));

        assert!(" simple".parse::<Model>().is_err());
        assert!("".parse::<Model>().is_err());
    }

    #[test]
    fn default_is_kasten_young() {
        assert_eq!(Model::default(), Model::KastenYoung1989);
    }

    #[test]
    fn conventions() {
        assert_eq!(Model::Simple.convention(), ZenithConvention::Either);
        assert_eq!(Model::YoungIrvine1967.convention(), ZenithConvention::True);
        assert_eq!(Model::Young1994.convention(), ZenithConvention::True);
        assert_eq!(Model::KastenYoung1989.convention(), ZenithConvention::Apparent);
        assert_eq!(Model::Pickering2002.convention(), ZenithConvention::Apparent);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_model_names() {
        let json = serde_json::to_string(&Model::YoungIrvine1967).unwrap();
        assert_eq!(json, "\"youngirvine1967\"");

        let model: Model = serde_json::from_str("\"Gueymard2003\"").unwrap();
        assert_eq!(model, Model::Gueymard2003);

        let err = serde_json::from_str::<Model>("\"bogus\"").unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }
}
