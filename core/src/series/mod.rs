pub mod ring;

pub use ring::{RingBufferSeries, CHART_CAPACITY};
