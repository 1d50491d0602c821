//! Stepsync: presentation step navigation kept in agreement across viewers
//!
//! A presentation is an ordered list of steps. Each viewer (audience screen,
//! presenter console, presenter preview) runs its own [`Synchronizer`]. Local
//! navigation is announced on a shared goto channel; goto events from the
//! channel move every viewer, optionally running a fixed number of steps
//! ahead for preview panes.
//!
//! # Core Concepts
//!
//! - **Steps**: opaque identifiers in a fixed, circular order
//! - **Channel**: fire-and-forget announcements of `{step, duration}`
//! - **Host**: the presentation library whose navigation is taken over
//! - **Fragment**: `#/step-id` deep links, with loop suppression
//!
//! # Example
//!
//! ```rust
//! use stepsync::builder::SynchronizerBuilder;
//! use stepsync::sync::MemoryChannel;
//! use stepsync::steps;
//! use serde_json::json;
//!
//! let channel = MemoryChannel::new();
//! let mut preview = SynchronizerBuilder::new()
//!     .channel(channel.clone())
//!     .steps(steps!["a", "b", "c"])
//!     .standalone(true)
//!     .offset(1)
//!     .build()
//!     .unwrap();
//!
//! // The presenter moved to "b"; the preview shows what comes next.
//! preview.on_goto(&json!({"step": "b"}));
//! assert_eq!(preview.active().unwrap(), "c");
//! ```

pub mod builder;
pub mod core;
pub mod fragment;
pub mod host;
pub mod input;
pub mod sync;

// Re-export commonly used types
pub use crate::builder::{BuildError, SyncOptions, SynchronizerBuilder};
pub use crate::core::{StepId, StepRegistry};
pub use crate::sync::{GotoChannel, GotoEvent, Synchronizer};
