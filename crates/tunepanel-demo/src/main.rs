//! Tunepanel Demo — headless run of the device settings panel.
//!
//! Opens the JSON parameter store, applies the legacy conversion, then
//! replays a scenario of parent, driving-state and user events through the
//! panel. A feeder task paces the events; the main task owns the panel and
//! dispatches them one at a time.

mod config;
mod host;
mod scenario;

use anyhow::Context;
use tokio::sync::mpsc;
use tunepanel_core::{Collaborators, DevicePanel, PanelEvent, PanelOutput, Untranslated};
use tunepanel_params::{JsonParams, convert_params};

use crate::config::DemoConfig;
use crate::host::{LoggingBrightness, LoggingSurface, ScriptedDialog};
use crate::scenario::Scenario;

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = DemoConfig::default();
    tracing::debug!("{config:?}");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;
    rt.block_on(run(config))
}

fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tunepanel=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

async fn run(config: DemoConfig) -> anyhow::Result<()> {
    let mut params = JsonParams::open(config.params_path())?;
    let mut legacy = JsonParams::open(config.legacy_params_path())?;
    convert_params(&mut params, &mut legacy).context("converting legacy parameters")?;
    tracing::info!("Parameters stored in {}", params.path().display());

    let scenario = match &config.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::builtin(config.tuning_level),
    };
    tracing::info!("Replaying {} events", scenario.steps.len());

    let mut panel = DevicePanel::new(
        &Untranslated,
        Collaborators {
            params: Box::new(params),
            dialog: Box::new(ScriptedDialog::new(config.auto_confirm)),
            brightness: Box::new(LoggingBrightness),
            surface: Box::new(LoggingSurface::default()),
        },
    )?;

    let (tx, mut rx) = mpsc::unbounded_channel::<PanelEvent>();
    let feeder = tokio::spawn(async move {
        for step in scenario.steps {
            if let Some(ms) = step.delay_ms {
                tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
            }
            if tx.send(step.event).is_err() {
                break;
            }
        }
    });

    let mut failures = 0usize;
    while let Some(event) = rx.recv().await {
        tracing::debug!("-> {event:?}");
        match panel.dispatch(event) {
            Ok(outputs) => outputs.iter().for_each(report),
            Err(e) => {
                failures += 1;
                tracing::error!("Event rejected: {e}");
            }
        }
    }
    feeder.await.context("scenario feeder panicked")?;

    for control in panel.controls() {
        if let Some(label) = control.display_label() {
            tracing::info!("{:<24} {label}", control.key());
        }
    }
    if failures > 0 {
        anyhow::bail!("{failures} scenario events were rejected");
    }
    Ok(())
}

fn report(output: &PanelOutput) {
    match output {
        PanelOutput::SubPanelOpened { scope } => tracing::info!("Opened {}", scope.label()),
        PanelOutput::ValueCommitted { key, value } => tracing::info!("Saved {key} = {value}"),
        PanelOutput::EditCancelled { key } => tracing::info!("Kept {key} unchanged"),
        PanelOutput::BrightnessApplied { value } => {
            tracing::debug!("Brightness {value} reached hardware");
        }
    }
}
