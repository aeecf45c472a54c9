//! Human-readable verdict for the current measurement.

use crate::math::stats::StatsHelper;
use crate::session::{MeasurementSnapshot, DEFAULT_TEMP_C};

/// Temperature delta (°C) above which the thermal warning is emitted.
pub const THERMAL_WARNING_DELTA: f64 = 3.0;
/// Reading dispersion (cm) above which the variance warning is emitted.
pub const VARIANCE_WARNING_SIGMA: f64 = 1.5;

/// Builds the explanation shown next to the accuracy figure. Each warning is
/// evaluated independently; the accuracy sentence always closes the text.
pub fn conclude(snapshot: &MeasurementSnapshot) -> String {
    let delta = snapshot.temperature_delta(DEFAULT_TEMP_C);
    let sigma = StatsHelper::standard_deviation(&snapshot.readings);

    let mut sentences = Vec::new();
    if delta > THERMAL_WARNING_DELTA {
        sentences.push(format!(
            "A thermal gradient of {:.1}°C between object and ambient air may bias the speed-of-sound distance estimate.",
            delta
        ));
    }
    if sigma > VARIANCE_WARNING_SIGMA {
        sentences.push(format!(
            "Reading dispersion of σ = {:.2} cm suggests irregular geometry or an absorptive surface.",
            sigma
        ));
    }
    if sentences.is_empty() {
        sentences.push(
            "Conditions are favorable: temperatures are stable and readings are consistent."
                .to_string(),
        );
    }

    sentences.push(match snapshot.accuracy {
        Some(accuracy) => format!("Estimated accuracy: {:.2}%.", accuracy),
        None => "Estimated accuracy: n/a.".to_string(),
    });
    sentences.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_and_spread_both_reported() {
        // population sigma of [8, 12] is 2.0
        let snapshot = MeasurementSnapshot {
            readings: vec![8.0, 12.0],
            ambient_temp: Some(20.0),
            object_temp: Some(25.0),
            accuracy: Some(92.0),
            ..Default::default()
        };
        let text = conclude(&snapshot);
        assert!(text.contains("thermal gradient of 5.0°C"));
        assert!(text.contains("σ = 2.00 cm"));
        assert!(text.contains("92.00%"));
        assert!(!text.contains("favorable"));
    }

    #[test]
    fn quiet_conditions_are_favorable() {
        let snapshot = MeasurementSnapshot {
            readings: vec![30.0, 30.4, 29.8],
            ambient_temp: Some(24.0),
            object_temp: Some(25.5),
            accuracy: Some(96.5),
            ..Default::default()
        };
        let text = conclude(&snapshot);
        assert!(text.starts_with("Conditions are favorable"));
        assert!(text.ends_with("Estimated accuracy: 96.50%."));
    }

    #[test]
    fn thresholds_are_exclusive() {
        let snapshot = MeasurementSnapshot {
            readings: vec![10.0, 13.0],
            ambient_temp: Some(20.0),
            object_temp: Some(23.0),
            accuracy: Some(94.0),
            ..Default::default()
        };
        assert!(conclude(&snapshot).contains("favorable"));
    }

    #[test]
    fn unknown_temperatures_use_the_default() {
        let snapshot = MeasurementSnapshot {
            object_temp: Some(30.0),
            ..Default::default()
        };
        let text = conclude(&snapshot);
        assert!(text.contains("5.0°C"));
        assert!(text.ends_with("Estimated accuracy: n/a."));
    }
}
