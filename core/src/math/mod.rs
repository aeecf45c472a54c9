pub mod stats;

pub use stats::{AbsorptionClass, StatsHelper};
