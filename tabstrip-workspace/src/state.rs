use crate::{
    history::HistoryProvider,
    registry::ActiveTab,
    store::{Bucket, TabValue},
    workspace::Workspace,
};
use tabstrip_api::{
    clock::Clock,
    location::Location,
    tab::{ClosedTab, Tab, TabId},
};

/// The collaborators' view of the workspace, published after every transition
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceState {
    /// The number of transitions applied by the service
    pub revision: u64,
    pub tabs: Vec<Tab>,
    pub active: Option<TabId>,
    /// Newest first
    pub closed: Vec<ClosedTab>,
    /// The ephemeral state of the active tab
    pub active_state: Bucket<TabValue>,
    pub location: Location,
}

impl WorkspaceState {
    pub fn new<H: HistoryProvider, C: Clock>(revision: u64, workspace: &Workspace<H, C>) -> Self {
        let active_state = workspace
            .active_id()
            .and_then(|id| workspace.store().bucket(id))
            .cloned()
            .unwrap_or_default();

        Self {
            revision,
            tabs: workspace.tabs().to_vec(),
            active: workspace.active_id().cloned(),
            closed: workspace.closed().cloned().collect(),
            active_state,
            location: workspace.location(),
        }
    }

    pub fn get(&self, id: &TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == *id)
    }

    pub fn active_tab(&self) -> ActiveTab<'_> {
        match self.active {
            Some(ref id) => match self.get(id) {
                Some(tab) => ActiveTab::Open(tab),
                None => ActiveTab::Dangling(id),
            },
            None => ActiveTab::None,
        }
    }
}
