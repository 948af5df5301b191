//! Public API for the epd-frame crate.
//!
//! This module provides the high-level API: the [`FramePipeline`] builder
//! and the [`FrameError`] unified error type.

mod builder;
mod error;

pub use builder::FramePipeline;
pub use error::{ErrorKind, FrameError};
