//! Core step navigation types.
//!
//! This module contains the I/O-free part of the synchronizer:
//! - Step identifiers and step discovery
//! - The ordered step registry with its circular navigation
//! - Bounded in-memory navigation history

mod history;
mod registry;
mod step;

pub use history::{NavigationHistory, NavigationRecord, Origin, DEFAULT_HISTORY_CAPACITY};
pub use registry::StepRegistry;
pub use step::{discover_steps, StepElement, StepId};
