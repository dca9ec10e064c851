// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Display rendering
//!
//! Pure projections of timer state into the strings the front-end
//! shows: a status line, a time line and the period list. No mutation.

use crate::timer::{PendingAction, Timer, TimerState};

/// Describe the lifecycle state and any pending action.
pub fn status(timer: &Timer) -> String {
    let mut out = format!("Currently {}", timer.state().as_str());
    if timer.is_configured() {
        out.push('.');
    } else {
        out.push_str(" and not properly set up.");
    }
    match timer.pending() {
        PendingAction::None => {}
        PendingAction::Run => out.push_str(" Will soon start running."),
        PendingAction::Pause => out.push_str(" Will soon pause."),
        PendingAction::Stop => out.push_str(" Will soon stop."),
    }
    out
}

/// Render the current period and its remaining or elapsed time.
///
/// `extended` appends the period's total duration. Shows remaining time
/// in countdown mode, elapsed time otherwise, always as `HH:MM:SS`.
pub fn time(timer: &Timer, extended: bool) -> String {
    if timer.state() == TimerState::Stopped {
        return "Currently not running.".to_string();
    }
    let Some(period) = timer.current_period() else {
        return "Currently not running.".to_string();
    };

    let mut out = format!("**On {} period** ", period.name);
    if extended {
        out.push_str(&format!(
            "(Duration: {})",
            pluralize(u64::from(period.minutes), "minute")
        ));
    }

    let seconds = if timer.counts_down() {
        out.push_str("\nRemaining:\t");
        period.seconds().saturating_sub(timer.elapsed_seconds())
    } else {
        out.push_str("\nElapsed:\t");
        timer.elapsed_seconds()
    };
    out.push_str(&hms(seconds));

    if timer.state() == TimerState::Paused {
        out.push_str("\t**(PAUSED)**");
    }
    out
}

/// Render every period with its duration, flagging the current one.
pub fn list_periods(timer: &Timer) -> String {
    let mut out = format!(
        "**Period list (Loop is {}):**",
        if timer.repeats() { "ON" } else { "OFF" }
    );
    for (index, period) in timer.schedule().periods().iter().enumerate() {
        out.push_str(&format!(
            "\n{}: {}",
            period.name,
            pluralize(u64::from(period.minutes), "minute")
        ));
        if timer.current_index() == Some(index) {
            out.push_str("\t-> _You are here!_");
        }
    }
    out
}

/// `1 minute`, `5 minutes`
pub fn pluralize(count: u64, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// `HH:MM:SS`, hours unbounded
pub fn hms(total_seconds: u64) -> String {
    let (minutes, seconds) = (total_seconds / 60, total_seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
