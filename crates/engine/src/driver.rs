// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-cadence tick driver
//!
//! A single task ticks every registered timer once per step and fans
//! the resulting events out to the front-end. The engine advances by
//! exactly the reported step; there is no wall-clock drift correction.

use std::sync::Arc;
use std::time::Duration;

use marinara_core::TimerEvent;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::registry::{TimerId, TimerRegistry};

/// Periodic driver for every timer in a registry
pub struct Driver {
    registry: Arc<TimerRegistry>,
    step: Duration,
    events: mpsc::Sender<(TimerId, TimerEvent)>,
}

impl Driver {
    pub fn new(
        registry: Arc<TimerRegistry>,
        step: Duration,
        events: mpsc::Sender<(TimerId, TimerEvent)>,
    ) -> Self {
        Self {
            registry,
            step,
            events,
        }
    }

    /// Tick until the shutdown watch flips to `true` or every event
    /// receiver is gone.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let delta = self.step.as_secs().max(1);
        let mut interval = tokio::time::interval(self.step);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        // The first tick completes immediately; consume it so the first
        // advancement happens a full step after startup.
        interval.tick().await;

        debug!(step_seconds = delta, "driver started");
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    for (id, event) in self.registry.tick_all(delta) {
                        match &event {
                            TimerEvent::PeriodChanged { name, .. } => {
                                info!(%id, %name, "period changed");
                            }
                            TimerEvent::Finished => info!(%id, "schedule finished"),
                            _ => debug!(%id, ?event, "timer event"),
                        }
                        if self.events.send((id, event)).await.is_err() {
                            debug!("event receiver dropped, driver exiting");
                            return;
                        }
                    }
                }
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        debug!("driver shutting down");
                        return;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
