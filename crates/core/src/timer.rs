// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer state machine
//!
//! A timer owns one parsed schedule and walks it under external tick
//! events. Requests (`start`, `pause`, `resume`, `stop`) never change
//! the lifecycle state directly; they write a one-slot pending-action
//! mailbox that the next `tick` consumes exactly once, so all externally
//! visible transitions happen at a single well-defined point. The
//! exceptions are the synchronous arm of `stop` and `goto`, which the
//! caller must serialize against ticks (one lock per timer instance).

use crate::format::{parse_schedule, FormatError, Period, Schedule};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// The lifecycle state of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerState {
    Stopped,
    Running,
    Paused,
}

impl TimerState {
    /// Lowercase name, as rendered in status lines
    pub fn as_str(self) -> &'static str {
        match self {
            TimerState::Stopped => "stopped",
            TimerState::Running => "running",
            TimerState::Paused => "paused",
        }
    }
}

/// A requested but not-yet-applied transition.
///
/// One-slot mailbox: the latest request overwrites whatever was pending
/// (last-write-wins, intentionally lossy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingAction {
    #[default]
    None,
    Run,
    Pause,
    Stop,
}

/// Errors that can occur while configuring a timer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("timer is already configured; reset it first")]
    AlreadyConfigured,
    #[error("timer is running or paused; stop it before changing the setup")]
    TimerActive,
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Events reported by [`Timer::tick`] so the driver never has to diff
/// state across ticks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    /// A pending `Run` took effect
    Running { index: usize, name: String },
    /// A pending `Pause` took effect
    Paused,
    /// A pending `Stop` took effect
    Stopped,
    /// Advancement crossed into another period
    PeriodChanged { index: usize, name: String },
    /// The schedule ran out with repeat off; the timer is now stopped
    Finished,
}

/// A cyclic interval timer.
///
/// Every instance owns an independent copy of all runtime fields.
#[derive(Debug, Clone)]
pub struct Timer {
    schedule: Schedule,
    repeat: bool,
    countdown: bool,
    state: TimerState,
    action: PendingAction,
    /// Current period index; `None` while not positioned.
    current: Option<usize>,
    /// Seconds elapsed within the current period, always below the
    /// period's bound between ticks.
    elapsed: u64,
}

impl Timer {
    /// Create a new, unconfigured timer
    pub fn new() -> Self {
        Self {
            schedule: Schedule::default(),
            repeat: true,
            countdown: true,
            state: TimerState::Stopped,
            action: PendingAction::None,
            current: None,
            elapsed: 0,
        }
    }

    /// Configure the timer from a period format string.
    ///
    /// Returns the schedule's duration summary on success. Fails if the
    /// timer already holds a schedule, is running or paused, or if the
    /// format does not parse; a failed setup leaves the timer
    /// unconfigured and retryable.
    pub fn setup(
        &mut self,
        format: &str,
        repeat: bool,
        countdown: bool,
    ) -> Result<String, SetupError> {
        if self.is_configured() {
            return Err(SetupError::AlreadyConfigured);
        }
        if self.state != TimerState::Stopped {
            return Err(SetupError::TimerActive);
        }

        let schedule = parse_schedule(format)?;
        let summary = schedule.summary();
        self.schedule = schedule;
        self.repeat = repeat;
        self.countdown = countdown;
        debug!(periods = self.schedule.len(), repeat, countdown, "timer configured");
        Ok(summary)
    }

    /// Request a start. Returns `false` if already running.
    pub fn start(&mut self) -> bool {
        if self.state == TimerState::Running {
            return false;
        }
        self.action = PendingAction::Run;
        true
    }

    /// Request a pause. Valid only while running.
    pub fn pause(&mut self) -> bool {
        if self.state == TimerState::Running {
            self.action = PendingAction::Pause;
            return true;
        }
        false
    }

    /// Resume a paused timer. Equivalent to [`Timer::start`] when paused.
    pub fn resume(&mut self) -> bool {
        if self.state == TimerState::Paused {
            return self.start();
        }
        false
    }

    /// Request a stop.
    ///
    /// While running, the stop is deferred to the next tick and `true`
    /// is returned ("scheduled"). In every other case, including a stop
    /// already pending, the timer stops synchronously and `false` means
    /// "already stopped now".
    pub fn stop(&mut self) -> bool {
        if self.state == TimerState::Running && self.action != PendingAction::Stop {
            self.action = PendingAction::Stop;
            return true;
        }
        self.halt();
        false
    }

    /// Jump to the 1-based period `index`, resetting elapsed time.
    ///
    /// Returns the period's name, or `None` (without mutation) when the
    /// index is out of range. Permitted in any lifecycle state.
    pub fn goto(&mut self, index: usize) -> Option<&str> {
        if index == 0 || index > self.schedule.len() {
            return None;
        }
        self.current = Some(index - 1);
        self.elapsed = 0;
        self.schedule.get(index - 1).map(|p| p.name.as_str())
    }

    /// Advance the timer by `delta_seconds`.
    ///
    /// Applies the pending action exactly once, then, while running,
    /// adds the delta and rolls over period boundaries: wrapping to
    /// period 0 when repeat is on, stopping when the schedule ends
    /// otherwise. The returned events describe every transition and
    /// boundary crossing this tick caused.
    pub fn tick(&mut self, delta_seconds: u64) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        self.apply_pending(&mut events);

        if self.state != TimerState::Running {
            return events;
        }
        let Some(mut index) = self.current else {
            return events;
        };

        self.elapsed += delta_seconds;
        loop {
            let Some(bound) = self.schedule.get(index).map(Period::seconds) else {
                break;
            };
            if self.elapsed < bound {
                break;
            }
            self.elapsed -= bound;
            if index + 1 < self.schedule.len() {
                index += 1;
            } else if self.repeat {
                index = 0;
            } else {
                debug!("schedule exhausted, stopping");
                self.halt();
                events.push(TimerEvent::Finished);
                return events;
            }
            events.push(self.period_changed(index));
        }
        self.current = Some(index);
        events
    }

    /// Consume the pending-action mailbox, exactly once per tick.
    fn apply_pending(&mut self, events: &mut Vec<TimerEvent>) {
        match std::mem::take(&mut self.action) {
            PendingAction::None => {}
            PendingAction::Run => {
                // A run against an unconfigured timer has nothing to do.
                if self.schedule.is_empty() {
                    return;
                }
                if matches!(self.state, TimerState::Stopped | TimerState::Paused) {
                    self.state = TimerState::Running;
                    if self.current.is_none() {
                        self.current = Some(0);
                        self.elapsed = 0;
                    }
                    if let Some(index) = self.current {
                        if let Some(period) = self.schedule.get(index) {
                            debug!(index, period = %period.name, "timer running");
                            events.push(TimerEvent::Running {
                                index,
                                name: period.name.clone(),
                            });
                        }
                    }
                }
            }
            PendingAction::Pause => {
                if self.state == TimerState::Running {
                    self.state = TimerState::Paused;
                    events.push(TimerEvent::Paused);
                }
            }
            PendingAction::Stop => {
                self.halt();
                events.push(TimerEvent::Stopped);
            }
        }
    }

    /// Stop and clear position, elapsed time and the mailbox.
    fn halt(&mut self) {
        self.state = TimerState::Stopped;
        self.action = PendingAction::None;
        self.current = None;
        self.elapsed = 0;
    }

    fn period_changed(&self, index: usize) -> TimerEvent {
        let name = self
            .schedule
            .get(index)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        TimerEvent::PeriodChanged { index, name }
    }

    /// `true` iff a schedule has been set
    pub fn is_configured(&self) -> bool {
        !self.schedule.is_empty()
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn pending(&self) -> PendingAction {
        self.action
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_period(&self) -> Option<&Period> {
        self.current.and_then(|index| self.schedule.get(index))
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed
    }

    pub fn repeats(&self) -> bool {
        self.repeat
    }

    pub fn counts_down(&self) -> bool {
        self.countdown
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
