//! The tabstrip document workspace.
//!
//! `TabRegistry` owns the open tabs, the active tab, and the closed history.
//! `TabStateStore` holds caller-defined state for each tab.
//! `Synchronizer` keeps the host's navigation stack in step with the active tab.
//!
//! `Workspace` drives all three synchronously.  `WorkspaceService` runs a workspace on a lifeline bus,
//! applying one `WorkspaceRecv` message at a time.

pub mod bus;
pub mod history;
pub mod message;
mod prelude;
pub mod registry;
pub mod service;
pub mod state;
pub mod store;
pub mod utils;
pub mod workspace;

pub use bus::{HistoryResource, WorkspaceBus};
pub use service::WorkspaceService;
pub use workspace::Workspace;
