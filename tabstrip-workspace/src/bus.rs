use crate::{
    history::HistoryProvider,
    message::{
        scroll::{ScrollRequest, ScrollRestore},
        workspace::WorkspaceRecv,
    },
    prelude::*,
    state::WorkspaceState,
};
use lifeline::impl_storage_take;
use postage::{broadcast, mpsc, watch};
use tabstrip_api::config::WorkspaceConfig;

lifeline_bus!(pub struct WorkspaceBus);

impl Message<WorkspaceBus> for WorkspaceRecv {
    type Channel = mpsc::Sender<Self>;
}

impl Message<WorkspaceBus> for Option<WorkspaceState> {
    type Channel = watch::Sender<Self>;
}

impl Message<WorkspaceBus> for ScrollRequest {
    type Channel = mpsc::Sender<Self>;
}

impl Message<WorkspaceBus> for ScrollRestore {
    type Channel = broadcast::Sender<Self>;
}

/// The host's navigation stack, taken by the WorkspaceService when it spawns
pub struct HistoryResource(pub Box<dyn HistoryProvider + Send>);

impl HistoryResource {
    pub fn new(history: impl HistoryProvider + Send + 'static) -> Self {
        Self(Box::new(history))
    }
}

impl std::fmt::Debug for HistoryResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HistoryResource")
            .field(&self.0.location().to_string())
            .finish()
    }
}

impl_storage_take!(HistoryResource);

impl Resource<WorkspaceBus> for HistoryResource {}
impl Resource<WorkspaceBus> for WorkspaceConfig {}
