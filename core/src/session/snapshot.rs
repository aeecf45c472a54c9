use crate::prelude::Rgb;
use serde::{Deserialize, Serialize};

/// Latest known readings for the dashboard session.
///
/// `accuracy` is derived: the session recomputes it after every update and it
/// is `None` only until the first measurement has been applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSnapshot {
    pub distance: Option<f64>,
    pub readings: Vec<f64>,
    pub shape: Option<String>,
    pub material: Option<String>,
    pub rgb: Option<Rgb>,
    pub object_temp: Option<f64>,
    pub ambient_temp: Option<f64>,
    pub speed_of_sound: Option<f64>,
    pub accuracy: Option<f64>,
}

impl MeasurementSnapshot {
    /// Absolute object/ambient delta, with unknown temperatures read as `default_c`.
    pub fn temperature_delta(&self, default_c: f64) -> f64 {
        let ambient = self.ambient_temp.unwrap_or(default_c);
        let object = self.object_temp.unwrap_or(default_c);
        (object - ambient).abs()
    }
}
