//! Measurement analytics and live-visualization core for the sensor rig dashboard.
//!
//! The session ingests asynchronous measurement results, keeps the bounded
//! chart and radar state, derives an accuracy estimate from reading spread
//! and the object/ambient temperature delta, and explains the verdict. Nothing
//! here touches the network or a display; collaborators plug in through
//! [`prelude::AlertSink`] and the payload types in [`interface`].

pub mod conclusion;
pub mod interface;
pub mod math;
pub mod prelude;
pub mod radar;
pub mod series;
pub mod session;
pub mod telemetry;

pub use prelude::{AlertSink, LowConfidenceAlert, MeasurementKind, RigError, RigResult, Rgb};
pub use session::{MeasurementSession, MeasurementSnapshot};
