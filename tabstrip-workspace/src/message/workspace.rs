use crate::{history::NavigationEvent, store::TabValue};
use std::collections::HashMap;
use tabstrip_api::tab::{TabDescriptor, TabId};

/// A single workspace transition.  Messages are applied in order, one at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkspaceRecv {
    /// Runs the one-time startup against the host location, then arms outbound sync
    Mount,
    Open(TabDescriptor),
    Close(TabId),
    Activate(TabId),
    CloseAll,
    ClearClosedHistory,
    /// Reopens the named closed tab, or the most recently closed
    ReopenClosed(Option<TabId>),
    Write {
        tab: TabId,
        key: String,
        value: TabValue,
    },
    WriteMany {
        tab: TabId,
        values: HashMap<String, TabValue>,
    },
    Purge(TabId),
    PurgeAll,
    /// A back/forward navigation raised by the host
    Navigate(NavigationEvent),
}
