pub mod chart;
pub mod radar;

pub use chart::DistanceChart;
pub use radar::RadarScope;
