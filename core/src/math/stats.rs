use serde::{Deserialize, Serialize};
use std::fmt;

/// Sensitivity of the accuracy score to the object/ambient temperature delta.
pub const THERMAL_SENSITIVITY: f64 = 0.8;
/// Weight applied to reading dispersion in the accuracy score.
pub const SIGMA_WEIGHT: f64 = 2.0;
/// Floor of the displayed accuracy score.
pub const ACC_MIN: f64 = 80.0;

/// Surface classification derived from the dispersion of distance readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbsorptionClass {
    Reflective,
    MediumAbsorption,
    HighAbsorption,
}

impl fmt::Display for AbsorptionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AbsorptionClass::Reflective => "Reflective",
            AbsorptionClass::MediumAbsorption => "Medium absorption",
            AbsorptionClass::HighAbsorption => "High absorption",
        };
        f.write_str(label)
    }
}

pub struct StatsHelper;

impl StatsHelper {
    pub fn mean(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        samples.iter().sum::<f64>() / samples.len() as f64
    }

    /// Population standard deviation. An empty sequence yields 0.
    pub fn standard_deviation(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let mean = Self::mean(samples);
        let variance =
            samples.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>() / samples.len() as f64;
        variance.sqrt()
    }

    /// `100 - (K * |object - ambient| + 2 * sigma)`, floored at [`ACC_MIN`] and
    /// rounded to two decimals.
    pub fn estimate_accuracy(ambient: f64, object: f64, sigma: f64) -> f64 {
        let ambient = finite_or_zero(ambient);
        let object = finite_or_zero(object);
        let sigma = finite_or_zero(sigma).abs();
        let penalty = THERMAL_SENSITIVITY * (object - ambient).abs() + SIGMA_WEIGHT * sigma;
        round2((100.0 - penalty).max(ACC_MIN))
    }

    pub fn absorption_class(sigma: f64) -> AbsorptionClass {
        if sigma < 1.5 {
            AbsorptionClass::Reflective
        } else if sigma < 3.0 {
            AbsorptionClass::MediumAbsorption
        } else {
            AbsorptionClass::HighAbsorption
        }
    }

    /// Speed of sound in dry air (m/s) at the given temperature in Celsius.
    pub fn speed_of_sound(ambient_c: f64) -> f64 {
        331.3 + 0.606 * ambient_c
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deviation_of_empty_or_single_is_zero() {
        assert_eq!(StatsHelper::standard_deviation(&[]), 0.0);
        assert_eq!(StatsHelper::standard_deviation(&[42.5]), 0.0);
    }

    #[test]
    fn standard_deviation_is_population_form() {
        let sigma = StatsHelper::standard_deviation(&[48.0, 50.0, 52.0]);
        assert!((sigma - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn accuracy_is_perfect_without_gradient_or_spread() {
        assert_eq!(StatsHelper::estimate_accuracy(25.0, 25.0, 0.0), 100.0);
    }

    #[test]
    fn accuracy_never_drops_below_floor() {
        assert_eq!(StatsHelper::estimate_accuracy(0.0, 100.0, 50.0), ACC_MIN);
        assert_eq!(StatsHelper::estimate_accuracy(20.0, 40.0, 1.63), 80.74);
    }

    #[test]
    fn accuracy_is_non_increasing_in_delta_and_sigma() {
        let mut previous = f64::INFINITY;
        for step in 0..40 {
            let acc = StatsHelper::estimate_accuracy(20.0, 20.0 + step as f64 * 0.5, 0.7);
            assert!(acc <= previous);
            assert!(acc >= ACC_MIN);
            previous = acc;
        }

        let mut previous = f64::INFINITY;
        for step in 0..40 {
            let acc = StatsHelper::estimate_accuracy(22.0, 24.0, step as f64 * 0.25);
            assert!(acc <= previous);
            previous = acc;
        }
    }

    #[test]
    fn accuracy_treats_non_finite_inputs_as_zero() {
        assert_eq!(StatsHelper::estimate_accuracy(f64::NAN, 0.0, 0.0), 100.0);
    }

    #[test]
    fn absorption_thresholds() {
        assert_eq!(StatsHelper::absorption_class(0.4), AbsorptionClass::Reflective);
        assert_eq!(
            StatsHelper::absorption_class(1.5),
            AbsorptionClass::MediumAbsorption
        );
        assert_eq!(StatsHelper::absorption_class(3.0), AbsorptionClass::HighAbsorption);
        assert_eq!(AbsorptionClass::MediumAbsorption.to_string(), "Medium absorption");
    }

    #[test]
    fn speed_of_sound_rises_with_temperature() {
        assert!((StatsHelper::speed_of_sound(20.0) - 343.42).abs() < 1e-9);
    }
}
