use rigcore::interface::{MeasurementResult, StatusSnapshot};
use rigcore::{LowConfidenceAlert, MeasurementKind, RigError, RigResult};
use serde_json::Value;
use std::time::Duration;

/// Async HTTP access to the rig. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct RigClient {
    http: reqwest::Client,
    base: String,
}

impl RigClient {
    pub fn new(endpoint: &str, timeout: Duration) -> RigResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RigError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    async fn get_json(&self, path: &str) -> RigResult<Value> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| RigError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RigError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| RigError::Decode(e.to_string()))
    }

    pub async fn fetch_status(&self) -> RigResult<StatusSnapshot> {
        let body = self.get_json("status").await?;
        Ok(StatusSnapshot::from_value(&body))
    }

    pub async fn measure(&self, kind: MeasurementKind) -> RigResult<MeasurementResult> {
        let body = self.get_json(kind.endpoint()).await?;
        MeasurementResult::decode(kind, body)
    }

    pub async fn notify_alert(&self, alert: LowConfidenceAlert) -> RigResult<()> {
        let response = self
            .http
            .post(self.url("buzzer"))
            .json(&alert)
            .send()
            .await
            .map_err(|e| RigError::AlertDelivery(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(RigError::AlertDelivery(format!("{}: {}", status, body)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigcore::interface::{Health, Sensor};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use warp::{http::StatusCode, Filter};

    async fn spawn_rig(beeps: Arc<Mutex<Vec<u32>>>) -> String {
        let status = warp::path("status").and(warp::get()).map(|| {
            warp::reply::json(&json!({
                "ultrasonic": true,
                "color": false,
                "ambient_temp": 22.5,
                "object_temp": 24.0
            }))
        });
        let distance = warp::path("measure_distance").and(warp::get()).map(|| {
            warp::reply::json(&json!({
                "distance": 41.2,
                "sigma": 0.4,
                "absorption": "Reflective",
                "ambient_temp": 22.5,
                "object_temp": "24.0"
            }))
        });
        let shape = warp::path("measure_shape")
            .and(warp::get())
            .map(|| warp::reply::with_status("echo timeout", StatusCode::INTERNAL_SERVER_ERROR));
        let material = warp::path("measure_material")
            .and(warp::get())
            .map(|| warp::reply::json(&json!(["not", "an", "object"])));
        let buzzer = warp::path("buzzer")
            .and(warp::post())
            .and(warp::body::json())
            .map(move |alert: LowConfidenceAlert| {
                beeps.lock().unwrap().push(alert.count);
                warp::reply::json(&json!({"status": "ok"}))
            });

        let routes = status.or(distance).or(shape).or(material).or(buzzer);
        let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        format!("http://{}/", addr)
    }

    fn client(endpoint: &str) -> RigClient {
        RigClient::new(endpoint, Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn status_poll_reports_per_sensor_health() {
        let endpoint = spawn_rig(Arc::default()).await;
        let status = client(&endpoint).fetch_status().await.unwrap();
        assert_eq!(status.health(Sensor::Ultrasonic), Health::Healthy);
        assert_eq!(status.health(Sensor::Color), Health::Unhealthy);
        assert_eq!(status.health(Sensor::Oled), Health::Healthy);
        assert_eq!(status.ambient_temp, Some(22.5));
    }

    #[tokio::test]
    async fn distance_measurement_is_decoded() {
        let endpoint = spawn_rig(Arc::default()).await;
        let result = client(&endpoint)
            .measure(MeasurementKind::Distance)
            .await
            .unwrap();
        let MeasurementResult::Distance(distance) = result else {
            panic!("expected a distance result");
        };
        assert_eq!(distance.distance, Some(41.2));
        assert_eq!(distance.object_temp, Some(24.0));
    }

    #[tokio::test]
    async fn server_errors_surface_status_and_body() {
        let endpoint = spawn_rig(Arc::default()).await;
        let err = client(&endpoint)
            .measure(MeasurementKind::Shape)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RigError::HttpStatus {
                status: 500,
                body: "echo timeout".into()
            }
        );
    }

    #[tokio::test]
    async fn non_object_payload_is_a_decode_error() {
        let endpoint = spawn_rig(Arc::default()).await;
        let err = client(&endpoint)
            .measure(MeasurementKind::Material)
            .await
            .unwrap_err();
        assert!(matches!(err, RigError::Decode(_)));
    }

    #[tokio::test]
    async fn alert_posts_beep_count() {
        let beeps = Arc::new(Mutex::new(Vec::new()));
        let endpoint = spawn_rig(beeps.clone()).await;
        client(&endpoint)
            .notify_alert(LowConfidenceAlert { count: 3 })
            .await
            .unwrap();
        assert_eq!(*beeps.lock().unwrap(), vec![3]);
    }

    #[tokio::test]
    async fn unreachable_rig_is_a_transport_error() {
        let err = client("http://127.0.0.1:9").fetch_status().await.unwrap_err();
        assert!(matches!(err, RigError::Transport(_)));
    }
}
