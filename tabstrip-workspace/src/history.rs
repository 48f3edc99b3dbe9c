//! Synchronization between the active tab and the host's navigation stack.

mod provider;
mod synchronizer;

pub use provider::{HistoryProvider, MemoryHistory, NavigationEvent};
pub use synchronizer::{Outbound, Synchronizer};
