//! Ranges offered by the input controls.
//!
//! The simulator accepts any positive value; these bounds belong to the
//! presentation layer and to project validation.

use std::ops::RangeInclusive;

pub const SERIES_RANGE: RangeInclusive<u32> = 1..=10;
pub const PARALLEL_RANGE: RangeInclusive<u32> = 1..=5;
pub const DURATION_RANGE_S: RangeInclusive<u32> = 10..=100;
pub const SPEED_MULTIPLIER_RANGE: RangeInclusive<u32> = 1..=10;

pub const DEFAULT_SERIES: u32 = 3;
pub const DEFAULT_PARALLEL: u32 = 2;
pub const DEFAULT_DURATION_S: u32 = 60;
pub const DEFAULT_SPEED_MULTIPLIER: u32 = 1;

/// Number of cell tabs in the tabbed dashboard.
pub const TAB_COUNT: usize = 8;

pub fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}
