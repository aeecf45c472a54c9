use crate::conclusion::conclude;
use crate::interface::measurement::{DistanceResult, MaterialResult, MeasurementResult, ShapeResult};
use crate::math::stats::{round2, StatsHelper};
use crate::prelude::{AlertSink, LowConfidenceAlert, MeasurementKind, NullAlertSink};
use crate::radar::{RadarSimulator, RadarState};
use crate::series::RingBufferSeries;
use crate::session::snapshot::MeasurementSnapshot;
use crate::telemetry::{LogManager, MetricsRecorder};

/// Temperature assumed for either probe when it has not reported yet.
pub const DEFAULT_TEMP_C: f64 = 25.0;
/// Radar distance used for material scans before any distance is known.
pub const FALLBACK_DISTANCE_CM: f64 = 30.0;
/// Accuracy below this raises a low-confidence alert.
pub const ALERT_THRESHOLD: f64 = 90.0;
/// Upper bound on retained readings; the oldest are dropped first.
pub const READINGS_CAPACITY: usize = 100;

/// Result of applying one measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApplyOutcome {
    pub kind: MeasurementKind,
    pub accuracy: f64,
    pub low_confidence: bool,
}

/// Owns the dashboard's measurement state: the latest snapshot, the chart
/// series and the radar. Measurement results come in through the `apply_*`
/// methods; the animation clock drives [`tick`](Self::tick).
pub struct MeasurementSession {
    snapshot: MeasurementSnapshot,
    series: RingBufferSeries,
    radar: RadarSimulator,
    alerts: Box<dyn AlertSink + Send>,
    alert_count: u32,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl MeasurementSession {
    pub fn new(radar: RadarSimulator, alerts: Box<dyn AlertSink + Send>) -> Self {
        Self {
            snapshot: MeasurementSnapshot::default(),
            series: RingBufferSeries::default(),
            radar,
            alerts,
            alert_count: 1,
            logger: LogManager::new("rigcore::session"),
            metrics: MetricsRecorder::new(),
        }
    }

    /// Sets the `count` carried by low-confidence alerts.
    pub fn with_alert_count(mut self, count: u32) -> Self {
        self.alert_count = count;
        self
    }

    pub fn apply(&mut self, result: &MeasurementResult) -> ApplyOutcome {
        match result {
            MeasurementResult::Distance(distance) => self.apply_distance(distance),
            MeasurementResult::Shape(shape) => self.apply_shape(shape),
            MeasurementResult::Material(material) => self.apply_material(material),
        }
    }

    pub fn apply_distance(&mut self, result: &DistanceResult) -> ApplyOutcome {
        let distance = reading(result.distance);
        self.series.push(distance);
        if let Some(distance) = distance {
            self.snapshot.distance = Some(distance);
            self.radar.add_blip(distance);
            self.push_reading(distance);
        }
        if let Some(speed) = finite(result.speed_of_sound) {
            self.snapshot.speed_of_sound = Some(speed);
        }
        if let Some(ambient) = finite(result.ambient_temp) {
            self.snapshot.ambient_temp = Some(ambient);
        }
        if let Some(object) = finite(result.object_temp) {
            self.snapshot.object_temp = Some(object);
        }
        self.recompute(MeasurementKind::Distance)
    }

    /// Replaces the readings with the scan's; prior readings are discarded.
    pub fn apply_shape(&mut self, result: &ShapeResult) -> ApplyOutcome {
        let readings: Vec<f64> = result.readings.iter().filter_map(|r| reading(*r)).collect();
        for &value in &readings {
            self.series.push(Some(value));
            self.radar.add_blip(value);
        }
        let skip = readings.len().saturating_sub(READINGS_CAPACITY);
        self.snapshot.readings = readings.into_iter().skip(skip).collect();
        if let Some(shape) = &result.shape {
            self.snapshot.shape = Some(shape.clone());
        }
        self.recompute(MeasurementKind::Shape)
    }

    /// Merges only the fields present in the payload.
    pub fn apply_material(&mut self, result: &MaterialResult) -> ApplyOutcome {
        if let Some(rgb) = result.rgb {
            self.snapshot.rgb = Some(rgb);
        }
        let material = result
            .material
            .clone()
            .or_else(|| result.absorption.clone())
            .or_else(|| {
                result
                    .sigma
                    .map(|sigma| StatsHelper::absorption_class(sigma).to_string())
            });
        if let Some(material) = material {
            self.snapshot.material = Some(material);
        }
        if let Some(object) = finite(result.object_temp) {
            self.snapshot.object_temp = Some(object);
        }
        if let Some(ambient) = finite(result.ambient_temp) {
            self.snapshot.ambient_temp = Some(ambient);
        }
        self.radar
            .add_blip(self.snapshot.distance.unwrap_or(FALLBACK_DISTANCE_CM));
        self.recompute(MeasurementKind::Material)
    }

    /// Advances the radar animation by one frame.
    pub fn tick(&mut self) {
        self.radar.tick();
    }

    pub fn snapshot(&self) -> &MeasurementSnapshot {
        &self.snapshot
    }

    pub fn series(&self) -> &RingBufferSeries {
        &self.series
    }

    pub fn radar_state(&self) -> RadarState {
        self.radar.state()
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    pub fn explain(&self) -> String {
        conclude(&self.snapshot)
    }

    /// Dispersion feeding the accuracy score: the readings when there are
    /// any, otherwise the values currently on the chart.
    pub fn current_sigma(&self) -> f64 {
        let sigma = if self.snapshot.readings.is_empty() {
            StatsHelper::standard_deviation(&self.series.present_values())
        } else {
            StatsHelper::standard_deviation(&self.snapshot.readings)
        };
        round2(sigma)
    }

    fn push_reading(&mut self, reading: f64) {
        self.snapshot.readings.push(reading);
        if self.snapshot.readings.len() > READINGS_CAPACITY {
            self.snapshot.readings.remove(0);
        }
    }

    fn recompute(&mut self, kind: MeasurementKind) -> ApplyOutcome {
        let sigma = self.current_sigma();
        let ambient = self.snapshot.ambient_temp.unwrap_or(DEFAULT_TEMP_C);
        let object = self.snapshot.object_temp.unwrap_or(DEFAULT_TEMP_C);
        let accuracy = StatsHelper::estimate_accuracy(ambient, object, sigma);
        self.snapshot.accuracy = Some(accuracy);
        self.metrics.record_measurement();
        self.logger.record(&format!(
            "{} applied: sigma {:.2}, dT {:.2}, accuracy {:.2}%",
            kind,
            sigma,
            (object - ambient).abs(),
            accuracy
        ));

        let low_confidence = accuracy < ALERT_THRESHOLD;
        if low_confidence {
            self.raise_alert(accuracy);
        }

        ApplyOutcome {
            kind,
            accuracy,
            low_confidence,
        }
    }

    fn raise_alert(&mut self, accuracy: f64) {
        let alert = LowConfidenceAlert {
            count: self.alert_count,
        };
        match self.alerts.notify(alert) {
            Ok(()) => {
                self.metrics.record_alert_queued();
                self.logger
                    .record(&format!("low confidence ({:.2}%), alert queued", accuracy));
            }
            Err(err) => {
                self.metrics.record_alert_failure();
                self.logger
                    .warn(&format!("low confidence ({:.2}%), {}", accuracy, err));
            }
        }
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// A usable distance sample: non-finite values are absent, negatives clamp to 0.
fn reading(value: Option<f64>) -> Option<f64> {
    finite(value).map(|v| v.max(0.0))
}

impl Default for MeasurementSession {
    fn default() -> Self {
        Self::new(RadarSimulator::default(), Box::new(NullAlertSink))
    }
}
