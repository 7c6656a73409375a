//! Payment schedule computation and output structures

mod engine;
mod rows;

pub use engine::ScheduleEngine;
pub use rows::{SchedulePeriod, ScheduleResult, ScheduleSummary};
