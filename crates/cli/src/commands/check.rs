// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `marinara check [format]` - validate a period format string

use anyhow::Result;
use clap::Args;
use marinara_core::{parse_schedule, render};

use crate::config::Defaults;

#[derive(Args)]
pub struct CheckArgs {
    /// Period format string; omit to check the configured default
    pub format: Option<String>,
}

pub fn check(args: CheckArgs, defaults: &Defaults) -> Result<()> {
    let format = args.format.as_deref().unwrap_or(&defaults.format);
    let schedule =
        parse_schedule(format).map_err(|e| anyhow::anyhow!("invalid format: {e}"))?;

    for (index, period) in schedule.periods().iter().enumerate() {
        println!(
            "{}. {}: {}",
            index + 1,
            period.name,
            render::pluralize(u64::from(period.minutes), "minute")
        );
    }
    println!("Summary: {}", schedule.summary());
    Ok(())
}
