// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer registry
//!
//! One timer per opaque id (a chat channel in the original deployment;
//! any stable key works). Each timer sits behind its own lock, held for
//! the duration of a single request or tick, so instances never block
//! each other. The registry map lock is only held to resolve, insert or
//! remove entries; `reset` checks the timer's state under it so the
//! check and the removal stay atomic.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use marinara_core::{render, SetupError, Timer, TimerEvent, TimerState};
use thiserror::Error;
use tracing::debug;

/// Opaque identifier scoping one timer instance
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimerId(pub String);

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TimerId {
    fn from(s: &str) -> Self {
        TimerId(s.to_string())
    }
}

impl From<String> for TimerId {
    fn from(s: String) -> Self {
        TimerId(s)
    }
}

/// Errors that can occur on registry operations
#[derive(Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no timer for {0}")]
    NotFound(TimerId),
    #[error("timer {0} is running or paused")]
    Active(TimerId),
    #[error(transparent)]
    Setup(#[from] SetupError),
}

type SharedTimer = Arc<Mutex<Timer>>;

/// A collection of fully independent timer instances
#[derive(Default)]
pub struct TimerRegistry {
    timers: Mutex<HashMap<TimerId, SharedTimer>>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the timer for `id`, creating the instance on first use.
    ///
    /// Returns the schedule's duration summary.
    pub fn setup(
        &self,
        id: &TimerId,
        format: &str,
        repeat: bool,
        countdown: bool,
    ) -> Result<String, RegistryError> {
        let timer = self.entry_or_insert(id);
        let mut timer = lock(&timer);
        let summary = timer.setup(format, repeat, countdown)?;
        debug!(%id, %summary, "timer configured");
        Ok(summary)
    }

    pub fn start(&self, id: &TimerId) -> Result<bool, RegistryError> {
        self.with_timer(id, Timer::start)
    }

    pub fn pause(&self, id: &TimerId) -> Result<bool, RegistryError> {
        self.with_timer(id, Timer::pause)
    }

    pub fn resume(&self, id: &TimerId) -> Result<bool, RegistryError> {
        self.with_timer(id, Timer::resume)
    }

    pub fn stop(&self, id: &TimerId) -> Result<bool, RegistryError> {
        self.with_timer(id, Timer::stop)
    }

    /// Jump to the 1-based period `index`; `Ok(None)` means out of range.
    pub fn goto(&self, id: &TimerId, index: usize) -> Result<Option<String>, RegistryError> {
        self.with_timer(id, |timer| timer.goto(index).map(str::to_string))
    }

    pub fn is_configured(&self, id: &TimerId) -> bool {
        self.entry(id)
            .map(|timer| lock(&timer).is_configured())
            .unwrap_or(false)
    }

    pub fn contains(&self, id: &TimerId) -> bool {
        lock(&self.timers).contains_key(id)
    }

    pub fn status(&self, id: &TimerId) -> Result<String, RegistryError> {
        self.with_timer(id, |timer| render::status(timer))
    }

    pub fn time(&self, id: &TimerId, extended: bool) -> Result<String, RegistryError> {
        self.with_timer(id, |timer| render::time(timer, extended))
    }

    pub fn list_periods(&self, id: &TimerId) -> Result<String, RegistryError> {
        self.with_timer(id, |timer| render::list_periods(timer))
    }

    /// Destroy the instance for `id`, freeing the id for a new setup.
    ///
    /// Refused while the timer is running or paused.
    pub fn reset(&self, id: &TimerId) -> Result<(), RegistryError> {
        let mut map = lock(&self.timers);
        let timer = map
            .get(id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;
        if lock(timer).state() != TimerState::Stopped {
            return Err(RegistryError::Active(id.clone()));
        }
        map.remove(id);
        debug!(%id, "timer reset");
        Ok(())
    }

    /// Destroy the instance for `id` regardless of its state.
    ///
    /// Permission checks are the caller's concern.
    pub fn force_reset(&self, id: &TimerId) -> Result<(), RegistryError> {
        lock(&self.timers)
            .remove(id)
            .map(|_| debug!(%id, "timer force-reset"))
            .ok_or_else(|| RegistryError::NotFound(id.clone()))
    }

    /// Tick every registered timer once, each under its own lock.
    pub fn tick_all(&self, delta_seconds: u64) -> Vec<(TimerId, TimerEvent)> {
        let entries: Vec<(TimerId, SharedTimer)> = lock(&self.timers)
            .iter()
            .map(|(id, timer)| (id.clone(), Arc::clone(timer)))
            .collect();

        let mut events = Vec::new();
        for (id, timer) in entries {
            let batch = lock(&timer).tick(delta_seconds);
            events.extend(batch.into_iter().map(|event| (id.clone(), event)));
        }
        events
    }

    fn entry(&self, id: &TimerId) -> Option<SharedTimer> {
        lock(&self.timers).get(id).cloned()
    }

    fn entry_or_insert(&self, id: &TimerId) -> SharedTimer {
        lock(&self.timers)
            .entry(id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(Timer::new())))
            .clone()
    }

    fn with_timer<T>(
        &self,
        id: &TimerId,
        f: impl FnOnce(&mut Timer) -> T,
    ) -> Result<T, RegistryError> {
        let timer = self
            .entry(id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;
        let mut guard = lock(&timer);
        Ok(f(&mut guard))
    }
}

/// Lock, recovering the inner value from poisoning.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
