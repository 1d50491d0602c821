//! Builder API for constructing synchronizers.
//!
//! Provides the fluent [`SynchronizerBuilder`], the serde-loadable
//! [`SyncOptions`], step sequence validation and the [`steps!`] macro.
//!
//! [`steps!`]: crate::steps

pub mod error;
pub mod macros;
pub mod options;
pub mod synchronizer;

pub use error::{BuildError, ConfigError};
pub use options::{validate_steps, SyncOptions};
pub use synchronizer::SynchronizerBuilder;
