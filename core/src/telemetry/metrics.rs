use serde::Serialize;
use std::sync::Mutex;

pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

/// Counter values at the time of [`MetricsRecorder::snapshot`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub measurements: usize,
    /// Low-confidence alerts handed to the alert sink.
    pub alerts_queued: usize,
    /// Alerts the rig acknowledged.
    pub alerts_delivered: usize,
    pub alert_failures: usize,
    pub transport_errors: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics::default()),
        }
    }

    pub fn record_measurement(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.measurements += 1;
        }
    }

    pub fn record_alert_queued(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.alerts_queued += 1;
        }
    }

    pub fn record_alert_delivered(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.alerts_delivered += 1;
        }
    }

    pub fn record_alert_failure(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.alert_failures += 1;
        }
    }

    pub fn record_transport_error(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.transport_errors += 1;
        }
    }

    pub fn snapshot(&self) -> Metrics {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            Metrics::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_independently() {
        let recorder = MetricsRecorder::new();
        recorder.record_measurement();
        recorder.record_measurement();
        recorder.record_alert_queued();
        recorder.record_alert_queued();
        recorder.record_alert_delivered();
        recorder.record_alert_failure();
        recorder.record_transport_error();
        assert_eq!(
            recorder.snapshot(),
            Metrics {
                measurements: 2,
                alerts_queued: 2,
                alerts_delivered: 1,
                alert_failures: 1,
                transport_errors: 1,
            }
        );
    }
}
