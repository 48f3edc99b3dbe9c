use super::scroll::ScrollRestoreService;
use crate::{
    bus::HistoryResource,
    history::HistoryProvider,
    message::{scroll::ScrollRequest, workspace::WorkspaceRecv},
    prelude::*,
    state::WorkspaceState,
    workspace::Workspace,
};
use std::time::Duration;
use tabstrip_api::{clock::SystemClock, config::WorkspaceConfig, tab::TabId};

type HostWorkspace = Workspace<Box<dyn HistoryProvider + Send>, SystemClock>;

/// Owns the workspace, and applies WorkspaceRecv messages in order.
/// Publishes a WorkspaceState after every message, and schedules scroll restores on activation.
///
/// Requires the WorkspaceConfig and HistoryResource resources.
pub struct WorkspaceService {
    _run: Lifeline,
    _scroll: ScrollRestoreService,
}

impl Service for WorkspaceService {
    type Bus = WorkspaceBus;
    type Lifeline = anyhow::Result<Self>;

    fn spawn(bus: &Self::Bus) -> Self::Lifeline {
        let _scroll = ScrollRestoreService::spawn(bus)?;

        let config = bus.resource::<WorkspaceConfig>()?;
        let HistoryResource(history) = bus.resource::<HistoryResource>()?;

        let rx = bus.rx::<WorkspaceRecv>()?;
        let tx_state = bus.tx::<Option<WorkspaceState>>()?;
        let tx_scroll = bus.tx::<ScrollRequest>()?;

        let _run = Self::try_task("run", Self::run(config, history, rx, tx_state, tx_scroll));

        Ok(Self { _run, _scroll })
    }
}

impl WorkspaceService {
    async fn run(
        config: WorkspaceConfig,
        history: Box<dyn HistoryProvider + Send>,
        mut rx: impl Stream<Item = WorkspaceRecv> + Unpin,
        mut tx_state: impl Sink<Item = Option<WorkspaceState>> + Unpin,
        mut tx_scroll: impl Sink<Item = ScrollRequest> + Unpin,
    ) -> anyhow::Result<()> {
        let mut workspace = Workspace::new(&config, history);
        let delay = Duration::from_millis(config.scroll_restore_delay_ms);
        let mut revision = 0u64;

        let state = WorkspaceState::new(revision, &workspace);
        tx_state.send(Some(state)).await?;

        while let Some(msg) = rx.recv().await {
            let previous = workspace.active_id().cloned();
            Self::apply(&mut workspace, msg);
            revision += 1;

            let scroll = Self::scroll_request(&workspace, previous, &config, delay);
            if let Some(request) = scroll {
                tx_scroll.send(request).await?;
            }

            let state = WorkspaceState::new(revision, &workspace);
            tx_state.send(Some(state)).await?;
        }

        Ok(())
    }

    fn apply(workspace: &mut HostWorkspace, msg: WorkspaceRecv) {
        match msg {
            WorkspaceRecv::Mount => {
                if let Some(id) = workspace.mount() {
                    info!("mounted on tab {}", id);
                }
            }
            WorkspaceRecv::Open(descriptor) => {
                info!("open or activate tab {}", descriptor.id);
                workspace.open_or_activate(descriptor);
            }
            WorkspaceRecv::Close(id) => {
                info!("close tab {}", id);
                if !workspace.close(&id) {
                    debug!("tab {} is not open", id);
                }
            }
            WorkspaceRecv::Activate(id) => {
                if !workspace.registry().contains(&id) {
                    warn!("activating tab {}, which is not open", id);
                }

                workspace.activate(id);
            }
            WorkspaceRecv::CloseAll => {
                info!("close all tabs");
                workspace.close_all();
            }
            WorkspaceRecv::ClearClosedHistory => {
                workspace.clear_closed_history();
            }
            WorkspaceRecv::ReopenClosed(id) => match workspace.reopen_closed(id.as_ref()) {
                Some(id) => info!("reopened tab {}", id),
                None => debug!("no closed tab to reopen"),
            },
            WorkspaceRecv::Write { tab, key, value } => {
                workspace.write(tab, key, value);
            }
            WorkspaceRecv::WriteMany { tab, values } => {
                workspace.write_many(tab, values);
            }
            WorkspaceRecv::Purge(tab) => {
                workspace.purge(&tab);
            }
            WorkspaceRecv::PurgeAll => {
                workspace.purge_all();
            }
            WorkspaceRecv::Navigate(event) => {
                let id = workspace.navigate(&event);
                info!("navigated to {}, active tab {}", event.location, id);
            }
        }
    }

    /// A restore is scheduled when the active tab changes to an open tab with a stored scroll offset
    fn scroll_request(
        workspace: &HostWorkspace,
        previous: Option<TabId>,
        config: &WorkspaceConfig,
        delay: Duration,
    ) -> Option<ScrollRequest> {
        let active = &workspace.active().tab()?.id;
        if previous.as_ref() == Some(active) {
            return None;
        }

        let value = workspace.store().get(active, config.scroll_key.as_str())?;

        Some(ScrollRequest {
            tab: active.clone(),
            value: value.clone(),
            delay,
        })
    }
}
