// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! marinara-core: scheduling core of a cyclic interval timer
//!
//! This crate provides:
//! - A parser for the compact period format (`Work:25,Break:5`, with
//!   `(N x ...)` repetition groups)
//! - The timer state machine: pending-action mailbox, per-tick
//!   advancement, period rollover and looping
//! - Pure renderers projecting timer state into display strings

pub mod format;
pub mod render;
pub mod timer;

// Re-exports
pub use format::{parse_schedule, FormatError, Period, Schedule};
pub use timer::{PendingAction, SetupError, Timer, TimerEvent, TimerState};
