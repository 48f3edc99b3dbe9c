//! Shared API, exported to `tabstrip-workspace` and `tabstrip`
//!
//! Tab descriptors, the location codec, configuration and logging are described in this crate.

pub mod clock;
pub mod config;
pub mod location;
pub mod log;
pub mod tab;
