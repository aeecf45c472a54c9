use anyhow::Context;
use app::{Dashboard, Message};
use clap::Parser;
use client::RigClient;
use config::DashboardConfig;
use iced::{time, Subscription, Theme};
use std::path::PathBuf;

mod app;
mod canvas;
mod client;
mod config;

#[derive(Parser)]
#[command(author, version, about = "Live operator dashboard for the sensor rig")]
struct Args {
    /// Load the dashboard config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Rig base URL
    #[arg(long)]
    endpoint: Option<String>,
    /// Seed for the radar jitter, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,
    /// Beeps requested when accuracy drops below the alert threshold
    #[arg(long)]
    alert_beeps: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        DashboardConfig::load(path)?
    } else {
        DashboardConfig::from_args(args.endpoint, args.seed, args.alert_beeps)
    };
    let client = RigClient::new(&config.endpoint, config.request_timeout())
        .context("building rig HTTP client")?;
    log::info!("dashboard polling {}", config.endpoint);

    iced::application(
        move || Dashboard::boot(config.clone(), client.clone()),
        Dashboard::update,
        Dashboard::view,
    )
    .title(application_title)
    .subscription(application_subscription)
    .theme(application_theme)
    .run()
    .context("running dashboard window")
}

fn application_title(_: &Dashboard) -> String {
    "Rig Dashboard".into()
}

fn application_subscription(state: &Dashboard) -> Subscription<Message> {
    Subscription::batch([
        time::every(state.config().status_interval()).map(|_| Message::PollStatus),
        time::every(state.config().frame_interval()).map(|_| Message::Frame),
    ])
}

fn application_theme(_: &Dashboard) -> Theme {
    Theme::Dark
}
