use crate::interface::wire::number;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sensor {
    Ultrasonic,
    Color,
    Temperature,
    Button,
    Oled,
    Buzzer,
}

impl Sensor {
    pub const ALL: [Sensor; 6] = [
        Sensor::Ultrasonic,
        Sensor::Color,
        Sensor::Temperature,
        Sensor::Button,
        Sensor::Oled,
        Sensor::Buzzer,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Sensor::Ultrasonic => "ultrasonic",
            Sensor::Color => "color",
            Sensor::Temperature => "temperature",
            Sensor::Button => "button",
            Sensor::Oled => "oled",
            Sensor::Buzzer => "buzzer",
        }
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Health {
    Healthy,
    Unhealthy,
    /// The status poll itself failed.
    Unknown,
}

/// Per-sensor health as reported by the last status poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub sensors: BTreeMap<Sensor, Health>,
    pub ambient_temp: Option<f64>,
    pub object_temp: Option<f64>,
}

impl StatusSnapshot {
    /// Interprets a `/status` body: `true` is healthy, `false` or `null` is
    /// unhealthy, and a missing key is healthy.
    pub fn from_value(body: &Value) -> Self {
        let sensors = Sensor::ALL
            .iter()
            .map(|sensor| {
                let health = match body.get(sensor.key()) {
                    None => Health::Healthy,
                    Some(Value::Bool(true)) => Health::Healthy,
                    Some(_) => Health::Unhealthy,
                };
                (*sensor, health)
            })
            .collect();

        Self {
            sensors,
            ambient_temp: body.get("ambient_temp").and_then(number),
            object_temp: body.get("object_temp").and_then(number),
        }
    }

    /// Snapshot shown while the rig cannot be reached.
    pub fn unknown() -> Self {
        Self {
            sensors: Sensor::ALL
                .iter()
                .map(|sensor| (*sensor, Health::Unknown))
                .collect(),
            ambient_temp: None,
            object_temp: None,
        }
    }

    pub fn health(&self, sensor: Sensor) -> Health {
        self.sensors.get(&sensor).copied().unwrap_or(Health::Unknown)
    }

    pub fn all_healthy(&self) -> bool {
        self.sensors.values().all(|health| *health == Health::Healthy)
    }
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self::unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_defaults_missing_keys_to_healthy() {
        let body = json!({
            "ultrasonic": true,
            "color": false,
            "temperature": null,
            "ambient_temp": 23.5,
            "object_temp": null
        });
        let status = StatusSnapshot::from_value(&body);
        assert_eq!(status.health(Sensor::Ultrasonic), Health::Healthy);
        assert_eq!(status.health(Sensor::Color), Health::Unhealthy);
        assert_eq!(status.health(Sensor::Temperature), Health::Unhealthy);
        assert_eq!(status.health(Sensor::Buzzer), Health::Healthy);
        assert_eq!(status.ambient_temp, Some(23.5));
        assert_eq!(status.object_temp, None);
        assert!(!status.all_healthy());
    }

    #[test]
    fn unknown_snapshot_marks_every_sensor() {
        let status = StatusSnapshot::unknown();
        assert_eq!(status.sensors.len(), Sensor::ALL.len());
        assert!(status.sensors.values().all(|h| *h == Health::Unknown));
    }

    #[test]
    fn non_object_body_reads_as_all_healthy() {
        let status = StatusSnapshot::from_value(&json!("ok"));
        assert!(status.all_healthy());
    }
}
