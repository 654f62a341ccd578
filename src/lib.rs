//! Running min/max statistics for energy-monitor sensor readings.
//!
//! Two plain records, each carrying the latest reading plus running
//! minimum and maximum fields, and one in-place update routine per record.
//! A caller sets the latest reading on its record and calls the update;
//! everything else (acquisition, display, storage) lives outside this
//! crate.
//!
//! The statistics use `0` as a sentinel for "no reading recorded yet", so
//! a genuine zero reading is skipped rather than folded into min/max. See
//! the record docs for the details of that convention.

mod sensors;

pub use sensors::{CurrentPowerSensor, ScalarSensor, NOMINAL_VOLTAGE};
