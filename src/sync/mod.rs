//! Cross-viewer synchronization.
//!
//! This module is the imperative shell around [`crate::core`]: it announces
//! local navigation on the goto channel, applies remote goto events, drives
//! the host library and keeps the address-bar fragment current.
//!
//! # Key Concepts
//!
//! - **Local navigation** is validated, then announced
//! - **Remote navigation** is trusted, shifted by the viewer's offset and
//!   never announced again
//! - **Own fragment writes** are remembered so they are not re-processed

mod channel;
mod event;
pub(crate) mod synchronizer;
mod viewer;

pub use channel::{GotoChannel, MemoryChannel};
pub use event::{GotoEvent, PayloadError};
pub use synchronizer::{Phase, Synchronizer};
pub use viewer::ViewerId;
