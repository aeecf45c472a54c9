pub mod gate;
pub mod snapshot;
pub mod state;

pub use gate::RequestGate;
pub use snapshot::MeasurementSnapshot;
pub use state::{
    ApplyOutcome, MeasurementSession, ALERT_THRESHOLD, DEFAULT_TEMP_C, FALLBACK_DISTANCE_CM,
    READINGS_CAPACITY,
};
