use serde::{Deserialize, Serialize};
use std::fmt;

/// The three on-demand measurement commands the rig understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementKind {
    Distance,
    Shape,
    Material,
}

impl MeasurementKind {
    pub const ALL: [MeasurementKind; 3] = [
        MeasurementKind::Distance,
        MeasurementKind::Shape,
        MeasurementKind::Material,
    ];

    /// Path segment of the rig endpoint serving this measurement.
    pub fn endpoint(&self) -> &'static str {
        match self {
            MeasurementKind::Distance => "measure_distance",
            MeasurementKind::Shape => "measure_shape",
            MeasurementKind::Material => "measure_material",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            MeasurementKind::Distance => 0,
            MeasurementKind::Shape => 1,
            MeasurementKind::Material => 2,
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MeasurementKind::Distance => "distance",
            MeasurementKind::Shape => "shape",
            MeasurementKind::Material => "material",
        };
        f.write_str(label)
    }
}

/// Canonical color record; every wire shape is normalized into this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Payload of the fire-and-forget low-confidence notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowConfidenceAlert {
    pub count: u32,
}

/// Error type for the collaborator seams (transport and alert delivery).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RigError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("rig answered {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("undecodable response: {0}")]
    Decode(String),
    #[error("alert delivery failed: {0}")]
    AlertDelivery(String),
}

pub type RigResult<T> = Result<T, RigError>;

/// Collaborator notified when the session's accuracy drops below the alert threshold.
pub trait AlertSink {
    fn notify(&mut self, alert: LowConfidenceAlert) -> RigResult<()>;
}

/// Sink that drops every alert. Used when no actuator is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAlertSink;

impl AlertSink for NullAlertSink {
    fn notify(&mut self, _alert: LowConfidenceAlert) -> RigResult<()> {
        Ok(())
    }
}
