pub mod alert;
pub mod measurement;
pub mod status;
mod wire;

pub use alert::ChannelAlertSink;
pub use measurement::{DistanceResult, MaterialResult, MeasurementResult, ShapeResult};
pub use status::{Health, Sensor, StatusSnapshot};
