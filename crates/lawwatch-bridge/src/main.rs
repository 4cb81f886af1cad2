mod analysis;
mod config;
mod frontend;
mod listener;
mod message;

use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use clap::Parser;
use lawwatch_client::{BlockingClient, LawClient};
use lawwatch_serial::DevicePort;

use crate::config::BridgeConfig;
use crate::listener::Listener;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("lawwatch v{}", env!("CARGO_PKG_VERSION"));

    let config = BridgeConfig::parse();

    let link = DevicePort::open(&config.port, config.baud, config.read_timeout())
        .with_context(|| format!("opening serial port {}", config.port))?;
    let client = LawClient::new(
        &config.api_base,
        config.api_token.as_deref(),
        config.request_timeout(),
    )
    .context("building HTTP client")?;
    let source = BlockingClient::new(client).context("starting async runtime")?;

    let (control_tx, control_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();

    let listener = Listener::new(link, source, &config, control_rx, event_tx);
    let worker = thread::spawn(move || listener.run());

    thread::spawn(move || frontend::run_input(control_tx));

    frontend::run_display(event_rx);
    let _ = worker.join();
    Ok(())
}
