//! Host-side scheduling.
//!
//! The engine reacts to discrete calls only. `RoundDriver` supplies the
//! timing a host would: clock ticks on a fixed cadence and hold releases
//! after their display delay.

mod driver;

pub use driver::RoundDriver;
