use crate::interface::wire::{lenient_f64, lenient_readings, lenient_rgb, lenient_string};
use crate::prelude::{MeasurementKind, RigError, RigResult, Rgb};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `GET /measure_distance`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistanceResult {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub distance: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sigma: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub absorption: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ambient_temp: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub object_temp: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub speed_of_sound: Option<f64>,
}

/// Response of `GET /measure_shape`. Individual readings may be null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeResult {
    #[serde(default, deserialize_with = "lenient_readings")]
    pub readings: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub shape: Option<String>,
}

/// Response of `GET /measure_material`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialResult {
    #[serde(default, deserialize_with = "lenient_rgb")]
    pub rgb: Option<Rgb>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub material: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub absorption: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sigma: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ambient_temp: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub object_temp: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MeasurementResult {
    Distance(DistanceResult),
    Shape(ShapeResult),
    Material(MaterialResult),
}

impl MeasurementResult {
    /// Decodes a rig response for `kind`. Only a body that is not a JSON
    /// object is rejected; bad or missing fields fall back to absent.
    pub fn decode(kind: MeasurementKind, body: Value) -> RigResult<Self> {
        if !body.is_object() {
            return Err(RigError::Decode(format!(
                "{} response is not an object",
                kind
            )));
        }
        let decoded = match kind {
            MeasurementKind::Distance => serde_json::from_value(body).map(Self::Distance),
            MeasurementKind::Shape => serde_json::from_value(body).map(Self::Shape),
            MeasurementKind::Material => serde_json::from_value(body).map(Self::Material),
        };
        decoded.map_err(|e| RigError::Decode(e.to_string()))
    }
}
