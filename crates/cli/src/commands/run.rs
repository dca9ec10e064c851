// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `marinara run [format]` - drive a single timer in the terminal

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use marinara_core::TimerEvent;
use marinara_engine::{Driver, TimerId, TimerRegistry};
use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::config::Defaults;

#[derive(Args)]
pub struct RunArgs {
    /// Period format string; omit to run the configured default
    pub format: Option<String>,

    /// Stop at the end of the period list instead of looping
    #[arg(long)]
    pub no_repeat: bool,

    /// Show elapsed time instead of remaining time
    #[arg(long)]
    pub elapsed: bool,

    /// Seconds between ticks
    #[arg(long)]
    pub step: Option<u64>,

    /// 1-based period to start from
    #[arg(long)]
    pub start_at: Option<usize>,
}

pub async fn run(args: RunArgs, defaults: &Defaults) -> Result<()> {
    let format = args.format.as_deref().unwrap_or(&defaults.format);
    let repeat = !args.no_repeat && defaults.repeat;
    let countdown = !args.elapsed && defaults.countdown;
    let step = args.step.unwrap_or(defaults.step_seconds).max(1);

    let registry = Arc::new(TimerRegistry::new());
    let id = TimerId::from("local");

    let summary = registry.setup(&id, format, repeat, countdown)?;
    println!("Set up timer: {summary}.");
    println!("{}", registry.list_periods(&id)?);

    if let Some(index) = args.start_at {
        match registry.goto(&id, index)? {
            Some(name) => println!("Starting from period {index} ({name})."),
            None => anyhow::bail!("no period number {index}"),
        }
    }

    registry.start(&id)?;

    let (events_tx, mut events_rx) = mpsc::channel(32);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let driver = Driver::new(
        Arc::clone(&registry),
        Duration::from_secs(step),
        events_tx,
    );
    let driver_task = tokio::spawn(driver.run(shutdown_rx));
    debug!(%id, step, "driver started");

    loop {
        tokio::select! {
            maybe_event = events_rx.recv() => {
                let Some((_, event)) = maybe_event else { break };
                match event {
                    TimerEvent::Running { name, .. } => println!("Starting: {name}"),
                    TimerEvent::PeriodChanged { name, .. } => {
                        println!("Now on: {name}");
                        println!("{}", registry.time(&id, false)?);
                    }
                    TimerEvent::Paused => println!("Paused."),
                    TimerEvent::Stopped => {
                        println!("Stopped.");
                        break;
                    }
                    TimerEvent::Finished => {
                        println!("All periods complete.");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                // First Ctrl-C schedules the stop; the confirmation
                // arrives through the event channel. A second one means
                // the timer is already stopped, so leave directly.
                if !registry.stop(&id)? {
                    break;
                }
                println!("\n{}", registry.time(&id, true)?);
                println!("Stopping at the end of this tick.");
            }
        }
    }

    let _ = shutdown_tx.send(true);
    driver_task.await?;
    Ok(())
}
