pub mod clear_sky {
    use airmass::{RelativeAirmass, Series, ZenithConvention};
    use serde::{Deserialize, Serialize};

    use super::solar_position::Position;

    /// A mock clear-sky irradiance model, used for integration tests.
    ///
    /// Only the airmass stage is real; it picks the apparent or true zenith
    /// from each position according to the configured model's convention.
    pub struct ClearSky {
        config: Config,
    }

    impl ClearSky {
        pub fn new(config: Config) -> Self {
            Self { config }
        }

        /// Computes relative airmass for each timestamped solar position.
        pub fn airmass(&self, positions: &[Position]) -> Series<jiff::Timestamp> {
            let model = self.config.airmass.model();
            let zeniths: Series<jiff::Timestamp> = positions
                .iter()
                .map(|p| {
                    let zenith = match model.convention() {
                        ZenithConvention::True => p.zenith,
                        ZenithConvention::Apparent | ZenithConvention::Either => {
                            p.apparent_zenith
                        }
                    };
                    (p.time, zenith)
                })
                .collect();
            self.config.airmass.call(&zeniths)
        }
    }

    /// Configuration settings for the clear-sky model.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Config {
        /// Site elevation above sea level, in meters.
        #[serde(default)]
        pub elevation: f64,

        /// Linke turbidity used by downstream irradiance stages.
        #[serde(default = "default_linke_turbidity")]
        pub linke_turbidity: f64,

        /// Relative airmass model selection.
        #[serde(default)]
        pub airmass: RelativeAirmass,
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                elevation: 0.0,
                linke_turbidity: default_linke_turbidity(),
                airmass: RelativeAirmass::default(),
            }
        }
    }

    fn default_linke_turbidity() -> f64 {
        3.0
    }
}

pub mod solar_position {
    use serde::{Deserialize, Serialize};

    /// A precomputed solar position, as produced by an upstream provider.
    #[derive(Debug, Clone, Copy, Serialize, Deserialize)]
    pub struct Position {
        pub time: jiff::Timestamp,

        /// Geometric zenith angle, in degrees.
        pub zenith: f64,

        /// Refraction-corrected zenith angle, in degrees.
        pub apparent_zenith: f64,
    }

    /// Returns hourly positions for a synthetic morning, from before sunrise
    /// to near noon.
    pub fn morning() -> Vec<Position> {
        let start: jiff::Timestamp = "2024-06-21T03:00:00Z".parse().expect("valid timestamp");
        let zeniths = [
            (101.2, 101.2),
            (92.4, 92.4),
            (89.7, 89.25),
            (78.1, 78.02),
            (66.5, 66.46),
            (54.9, 54.88),
            (43.6, 43.59),
            (33.0, 32.99),
            (24.8, 24.79),
        ];
        zeniths
            .into_iter()
            .enumerate()
            .map(|(hour, (zenith, apparent_zenith))| Position {
                time: start + jiff::SignedDuration::from_hours(hour as i64),
                zenith,
                apparent_zenith,
            })
            .collect()
    }
}
