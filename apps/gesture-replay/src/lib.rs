//! Replay recorded overlay gestures through the engine
//!
//! Used to reproduce bug reports: a scenario captured from the browser viewer
//! is replayed headlessly and the committed host updates are printed.

pub mod scenario;

pub use scenario::{replay, ReplayReport, ReplayStep, Scenario, StepRecord};
