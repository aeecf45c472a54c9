use crate::canvas::{DistanceChart, RadarScope};
use crate::client::RigClient;
use crate::config::DashboardConfig;
use iced::{
    widget::{button, column, row, scrollable, text, Canvas, Column, Container, Row},
    Alignment, Color, Element, Length, Task,
};
use log::{info, warn};
use rigcore::interface::{ChannelAlertSink, Health, MeasurementResult, Sensor, StatusSnapshot};
use rigcore::math::StatsHelper;
use rigcore::radar::{RadarSimulator, SeededJitter};
use rigcore::session::RequestGate;
use rigcore::{LowConfidenceAlert, MeasurementKind, MeasurementSession, RigError};
use tokio::sync::mpsc::UnboundedReceiver;

const HISTORY_LIMIT: usize = 20;

pub struct Dashboard {
    config: DashboardConfig,
    client: RigClient,
    session: MeasurementSession,
    alerts: UnboundedReceiver<LowConfidenceAlert>,
    gate: RequestGate,
    status: StatusSnapshot,
    status_pending: bool,
    status_line: String,
    conclusion: Option<String>,
    history: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    PollStatus,
    StatusFetched(Result<StatusSnapshot, RigError>),
    Frame,
    Measure(MeasurementKind),
    MeasurementFetched(MeasurementKind, Result<MeasurementResult, RigError>),
    AlertDelivered(Result<(), RigError>),
    Explain,
}

impl Dashboard {
    pub fn boot(config: DashboardConfig, client: RigClient) -> (Self, Task<Message>) {
        let mut dashboard = Self::new(config, client);
        let task = dashboard.poll_status();
        (dashboard, task)
    }

    pub fn new(config: DashboardConfig, client: RigClient) -> Self {
        let jitter = match config.seed {
            Some(seed) => SeededJitter::from_seed(seed),
            None => SeededJitter::from_entropy(),
        };
        let (sink, alerts) = ChannelAlertSink::channel();
        let session = MeasurementSession::new(RadarSimulator::new(Box::new(jitter)), Box::new(sink))
            .with_alert_count(config.alert_beeps);

        Self {
            config,
            client,
            session,
            alerts,
            gate: RequestGate::new(),
            status: StatusSnapshot::unknown(),
            status_pending: false,
            status_line: "Waiting for rig status...".into(),
            conclusion: None,
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::PollStatus => state.poll_status(),
            Message::StatusFetched(Ok(status)) => {
                state.status_pending = false;
                state.status = status;
                state.status_line = "Rig status ok".into();
                Task::none()
            }
            Message::StatusFetched(Err(err)) => {
                state.status_pending = false;
                warn!("status poll failed: {}", err);
                state.session.metrics().record_transport_error();
                state.status = StatusSnapshot::unknown();
                state.status_line = format!("Status error: {err}");
                Task::none()
            }
            Message::Frame => {
                state.session.tick();
                Task::none()
            }
            Message::Measure(kind) => {
                if !state.gate.try_begin(kind) {
                    return Task::none();
                }
                state.status_line = format!("Measuring {kind}...");
                let client = state.client.clone();
                Task::perform(async move { client.measure(kind).await }, move |result| {
                    Message::MeasurementFetched(kind, result)
                })
            }
            Message::MeasurementFetched(kind, Ok(result)) => {
                state.gate.finish(kind);
                let outcome = state.session.apply(&result);
                state.status_line = format!(
                    "{} measurement applied, accuracy {:.2}%",
                    outcome.kind, outcome.accuracy
                );
                state.push_history(format!(
                    "{}: accuracy {:.2}%",
                    outcome.kind, outcome.accuracy
                ));
                if state.conclusion.is_some() {
                    state.conclusion = Some(state.session.explain());
                }
                state.dispatch_alerts()
            }
            Message::MeasurementFetched(kind, Err(err)) => {
                state.gate.finish(kind);
                warn!("{} measurement failed: {}", kind, err);
                state.session.metrics().record_transport_error();
                state.status_line = format!("{kind} error: {err}");
                state.push_history(format!("{kind} failed"));
                Task::none()
            }
            Message::AlertDelivered(Ok(())) => {
                info!("low-confidence alert delivered");
                state.session.metrics().record_alert_delivered();
                Task::none()
            }
            Message::AlertDelivered(Err(err)) => {
                warn!("low-confidence alert not delivered: {}", err);
                state.session.metrics().record_alert_failure();
                Task::none()
            }
            Message::Explain => {
                state.conclusion = Some(state.session.explain());
                Task::none()
            }
        }
    }

    /// Starts a status fetch unless one is still in flight.
    fn poll_status(&mut self) -> Task<Message> {
        if self.status_pending {
            return Task::none();
        }
        self.status_pending = true;
        let client = self.client.clone();
        Task::perform(
            async move { client.fetch_status().await },
            Message::StatusFetched,
        )
    }

    fn dispatch_alerts(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();
        while let Ok(alert) = self.alerts.try_recv() {
            let client = self.client.clone();
            self.push_history(format!("Low confidence, buzzing x{}", alert.count));
            tasks.push(Task::perform(
                async move { client.notify_alert(alert).await },
                Message::AlertDelivered,
            ));
        }
        Task::batch(tasks)
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > HISTORY_LIMIT {
            self.history.remove(0);
        }
    }

    pub fn view(state: &Self) -> Element<'_, Message> {
        let snapshot = state.session.snapshot();

        let buttons = MeasurementKind::ALL.iter().fold(
            Column::new().spacing(8),
            |col, kind| {
                let pending = state.gate.is_pending(*kind);
                let label = if pending {
                    format!("Measuring {kind}...")
                } else {
                    format!("Measure {kind}")
                };
                col.push(
                    button(text(label))
                        .on_press_maybe((!pending).then_some(Message::Measure(*kind)))
                        .padding(10)
                        .width(Length::Fill),
                )
            },
        );

        let sensors = Sensor::ALL
            .iter()
            .fold(Column::new().spacing(4), |col, sensor| {
                let (label, color) = match state.status.health(*sensor) {
                    Health::Healthy => ("ok", Color::from_rgb(0.3, 0.85, 0.4)),
                    Health::Unhealthy => ("fault", Color::from_rgb(0.95, 0.35, 0.3)),
                    Health::Unknown => ("unknown", Color::from_rgb(0.6, 0.6, 0.6)),
                };
                col.push(text(format!("● {sensor}: {label}")).size(14).color(color))
            });

        let controls = column![
            text("Rig Controls").size(26),
            buttons,
            button("Explain result").on_press(Message::Explain).padding(10),
            text(if state.status.all_healthy() {
                "Sensors: all ok"
            } else {
                "Sensors"
            })
            .size(18),
            sensors,
            text(format!(
                "Probe: ambient {} / object {}",
                format_value(state.status.ambient_temp, "°C"),
                format_value(state.status.object_temp, "°C")
            ))
            .size(12),
            text(&state.status_line).size(14),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fixed(300.0));

        let speed = match (snapshot.speed_of_sound, snapshot.ambient_temp) {
            (Some(speed), _) => format!("{speed:.1} m/s"),
            (None, Some(ambient)) => {
                format!("{:.1} m/s (derived)", StatsHelper::speed_of_sound(ambient))
            }
            (None, None) => "n/a".into(),
        };
        let color_row = match snapshot.rgb {
            Some(rgb) => Row::new()
                .spacing(6)
                .push(text("Color:").size(14))
                .push(text(format!("■ {}", rgb.hex())).size(14).color(
                    Color::from_rgb8(rgb.r, rgb.g, rgb.b),
                )),
            None => Row::new().push(text("Color: n/a").size(14)),
        };

        let readings = column![
            text(format!("Distance: {}", format_value(snapshot.distance, "cm"))).size(16),
            text(format!("Readings: {}", snapshot.readings.len())).size(14),
            text(format!(
                "Shape: {}",
                snapshot.shape.as_deref().unwrap_or("n/a")
            ))
            .size(14),
            text(format!(
                "Material: {}",
                snapshot.material.as_deref().unwrap_or("n/a")
            ))
            .size(14),
            color_row,
            text(format!(
                "Temperatures: object {} / ambient {}",
                format_value(snapshot.object_temp, "°C"),
                format_value(snapshot.ambient_temp, "°C")
            ))
            .size(14),
            text(format!("Speed of sound: {speed}")).size(14),
            text(format!("Accuracy: {}", format_value(snapshot.accuracy, "%"))).size(20),
        ]
        .spacing(4);

        let chart = Canvas::new(DistanceChart::new(state.session.series().snapshot()))
            .width(Length::Fill)
            .height(Length::Fixed(200.0));
        let radar = Canvas::new(RadarScope::new(state.session.radar_state()))
            .width(Length::Fixed(260.0))
            .height(Length::Fixed(260.0));

        let conclusion = text(
            state
                .conclusion
                .clone()
                .unwrap_or_else(|| "Press \"Explain result\" for a verdict.".into()),
        )
        .size(14);

        let history_list = if state.history.is_empty() {
            Column::new().push(text("No activity yet").size(12))
        } else {
            state
                .history
                .iter()
                .rev()
                .fold(Column::new().spacing(4), |col, entry| {
                    col.push(text(entry.clone()).size(12))
                })
        };

        let live = column![
            text("Live Measurements").size(26),
            row![readings, radar].spacing(20).align_y(Alignment::Start),
            text(format!(
                "Distance (last {} readings)",
                state.session.series().capacity()
            ))
            .size(16),
            chart,
            text("Conclusion").size(16),
            Container::new(conclusion).padding(6),
            text("Activity log").size(16),
            Container::new(scrollable(history_list).height(Length::Fixed(90.0))).padding(6),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fill);

        let layout = row![controls, live]
            .spacing(20)
            .align_y(Alignment::Start)
            .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn format_value(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{value:.2} {unit}"),
        None => "n/a".into(),
    }
}
