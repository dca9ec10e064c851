// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Period format parsing
//!
//! A schedule is written on a single line as comma-separated
//! `Name:Minutes` segments. A segment may also be a repetition group,
//! `(N x A:10,B:5)`, which expands round-robin: `A,B,A,B,...` repeated
//! `N` times, not `N` copies of `A` followed by `N` copies of `B`.
//! Underscores in names read as spaces; zero-minute periods are dropped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Substituted for commas inside a repetition group so the top-level
/// comma split leaves groups intact.
const GROUP_SEPARATOR: char = '.';

/// Errors that can occur while parsing a period format string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("segment '{0}' needs exactly one ':'")]
    MissingSeparator(String),
    #[error("'{0}' is not a whole number of minutes")]
    NonIntegerDuration(String),
    #[error("malformed repetition group: {0}")]
    MalformedGroup(String),
    #[error("unmatched parentheses")]
    UnmatchedParentheses,
    #[error("format yields no periods")]
    Empty,
}

/// A named, fixed-duration phase of a schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub name: String,
    pub minutes: u32,
}

impl Period {
    pub fn seconds(&self) -> u64 {
        u64::from(self.minutes) * 60
    }
}

/// An ordered list of periods produced by a successful parse.
///
/// Immutable once built; a timer holds one for its whole configured
/// lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    periods: Vec<Period>,
}

impl Schedule {
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Period> {
        self.periods.get(index)
    }

    /// Comma-joined list of durations, used for confirmation messages
    pub fn summary(&self) -> String {
        self.periods
            .iter()
            .map(|p| p.minutes.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Parse a period format string into a schedule.
///
/// Pure and deterministic; no side effects.
pub fn parse_schedule(input: &str) -> Result<Schedule, FormatError> {
    let mut periods = Vec::new();

    if !input.contains(',') && !input.contains('(') && !input.contains(')') {
        // A lone `Name:Minutes` pair skips the group machinery.
        if let Some(period) = parse_pair(input)? {
            periods.push(period);
        }
    } else {
        let normalized = normalize_group_commas(input)?;
        for segment in normalized.split(',') {
            let segment = segment.trim();
            if segment.starts_with('(') && segment.ends_with(')') {
                expand_group(segment, &mut periods)?;
            } else if let Some(period) = parse_pair(segment)? {
                periods.push(period);
            }
        }
    }

    if periods.is_empty() {
        return Err(FormatError::Empty);
    }
    Ok(Schedule { periods })
}

/// Replace commas nested in parentheses with [`GROUP_SEPARATOR`],
/// rejecting unbalanced input.
fn normalize_group_commas(input: &str) -> Result<String, FormatError> {
    let mut depth: u32 = 0;
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '(' => {
                depth += 1;
                out.push(ch);
            }
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(FormatError::UnmatchedParentheses)?;
                out.push(ch);
            }
            ',' if depth > 0 => out.push(GROUP_SEPARATOR),
            _ => out.push(ch),
        }
    }
    if depth != 0 {
        return Err(FormatError::UnmatchedParentheses);
    }
    Ok(out)
}

/// Expand a `(N x A:10.B:5)` group into `periods`, round-robin.
fn expand_group(segment: &str, periods: &mut Vec<Period>) -> Result<(), FormatError> {
    let body = segment.replace(['(', ')'], "");
    let (count, rest) = body
        .split_once('x')
        .ok_or_else(|| FormatError::MalformedGroup(body.clone()))?;
    let count: u32 = count
        .trim()
        .parse()
        .map_err(|_| FormatError::MalformedGroup(body.clone()))?;

    let mut subs: Vec<(String, u32)> = Vec::new();
    for sub in rest.trim().split(GROUP_SEPARATOR) {
        let sub = sub.trim();
        let (name, raw_minutes) =
            split_pair(sub).ok_or_else(|| FormatError::MalformedGroup(sub.to_string()))?;
        let minutes = parse_minutes(raw_minutes)?;
        subs.push((display_name(name), minutes));
    }

    for i in 0..(count as usize) * subs.len() {
        let (name, minutes) = &subs[i % subs.len()];
        if *minutes == 0 {
            continue;
        }
        periods.push(Period {
            name: name.clone(),
            minutes: *minutes,
        });
    }
    Ok(())
}

/// Parse a plain `Name:Minutes` segment; a zero-minute period drops to
/// `None`.
fn parse_pair(segment: &str) -> Result<Option<Period>, FormatError> {
    let segment = segment.trim();
    let (name, raw_minutes) =
        split_pair(segment).ok_or_else(|| FormatError::MissingSeparator(segment.to_string()))?;
    let minutes = parse_minutes(raw_minutes)?;
    if minutes == 0 {
        return Ok(None);
    }
    Ok(Some(Period {
        name: display_name(name),
        minutes,
    }))
}

/// Split on `:`, requiring exactly one occurrence.
fn split_pair(segment: &str) -> Option<(&str, &str)> {
    let mut parts = segment.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(minutes), None) => Some((name, minutes)),
        _ => None,
    }
}

fn parse_minutes(raw: &str) -> Result<u32, FormatError> {
    let raw = raw.trim();
    raw.parse()
        .map_err(|_| FormatError::NonIntegerDuration(raw.to_string()))
}

fn display_name(raw: &str) -> String {
    raw.trim().replace('_', " ")
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
