//! CLI library components for the nightly split tool.

pub mod logging;
pub mod pipeline;
