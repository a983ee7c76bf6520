//! Headless simulation of TavernCraft shifts.

pub mod policy;
pub mod reports;
pub mod simulation;

pub use policy::{BarkeepPolicy, BarkeepStrategy};
pub use reports::{generate_console_report, generate_json_report};
pub use simulation::{DayReport, ShiftRunner, ShiftSummary, SimulationConfig};
