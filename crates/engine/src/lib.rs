// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! marinara-engine: multi-timer registry and tick driver
//!
//! The registry keeps one independently locked timer per opaque id; the
//! driver is a single task that ticks every registered timer once per
//! fixed step and fans the resulting events out over a channel.

pub mod driver;
pub mod registry;

// Re-exports
pub use driver::Driver;
pub use registry::{RegistryError, TimerId, TimerRegistry};
