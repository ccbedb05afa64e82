//! nutrilog - streaks and achievements for a nutrition diary
//!
//! The host app owns meals, exercise and water entries. This crate turns
//! that event log into per-day totals, a logging streak and a set of newly
//! unlocked achievements.
//!
//! ## Layers
//!
//! 1. **Engine (pure)**: [`stats::aggregate_by_day`],
//!    [`stats::achievements::current_streak`] and
//!    [`stats::achievements::evaluate`] are deterministic functions of
//!    their inputs.
//!
//! 2. **Storage**: [`stats::UserStore`] keeps the unlocked set;
//!    [`stats::achievements::AchievementManager`] evaluates and records
//!    the delta in one call.

pub mod config;
pub mod domain;
pub mod stats;

pub use domain::*;
