use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the rig, e.g. `http://raspberrypi.local:5000`.
    pub endpoint: String,
    pub status_poll_secs: u64,
    pub frame_interval_ms: u64,
    pub request_timeout_secs: u64,
    /// Beep count sent with each low-confidence alert.
    pub alert_beeps: u32,
    /// Radar jitter seed; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000".into(),
            status_poll_secs: 2,
            frame_interval_ms: 16,
            request_timeout_secs: 5,
            alert_beeps: 2,
            seed: None,
        }
    }
}

impl DashboardConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading dashboard config {}", path_ref.display()))?;
        let config: DashboardConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing dashboard config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(endpoint: Option<String>, seed: Option<u64>, alert_beeps: Option<u32>) -> Self {
        let defaults = Self::default();
        Self {
            endpoint: endpoint.unwrap_or(defaults.endpoint),
            seed,
            alert_beeps: alert_beeps.unwrap_or(defaults.alert_beeps),
            ..defaults
        }
    }

    pub fn status_interval(&self) -> Duration {
        Duration::from_secs(self.status_poll_secs.max(1))
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
