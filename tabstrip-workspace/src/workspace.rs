//! The registry, the ephemeral state store, and the history synchronizer, driven as one unit.
//!
//! Each operation mutates the registry, applies the store lifecycle, then runs the outbound sync.
use crate::{
    history::{HistoryProvider, NavigationEvent, Outbound, Synchronizer},
    registry::{ActiveTab, Opened, TabRegistry},
    store::{TabStateStore, TabValue},
};
use log::debug;
use tabstrip_api::{
    clock::{Clock, SystemClock},
    config::{PurgePolicy, WorkspaceConfig},
    location::Location,
    tab::{ClosedTab, Tab, TabDescriptor, TabId},
};

pub struct Workspace<H, C = SystemClock> {
    registry: TabRegistry<C>,
    store: TabStateStore<TabValue>,
    synchronizer: Synchronizer,
    history: H,
    purge: PurgePolicy,
}

impl<H: HistoryProvider> Workspace<H, SystemClock> {
    pub fn new(config: &WorkspaceConfig, history: H) -> Self {
        Self::with_clock(config, history, SystemClock)
    }
}

impl<H: HistoryProvider, C: Clock> Workspace<H, C> {
    pub fn with_clock(config: &WorkspaceConfig, history: H, clock: C) -> Self {
        Self {
            registry: TabRegistry::with_closed_limit(clock, config.closed_history_limit),
            store: TabStateStore::new(),
            synchronizer: Synchronizer::new(config.base_path.clone(), config.fallback_tab.clone()),
            history,
            purge: config.purge_on_close,
        }
    }

    pub fn registry(&self) -> &TabRegistry<C> {
        &self.registry
    }

    pub fn store(&self) -> &TabStateStore<TabValue> {
        &self.store
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn tabs(&self) -> &[Tab] {
        self.registry.tabs()
    }

    pub fn active_id(&self) -> Option<&TabId> {
        self.registry.active_id()
    }

    pub fn active(&self) -> ActiveTab<'_> {
        self.registry.active()
    }

    pub fn closed(&self) -> impl Iterator<Item = &ClosedTab> {
        self.registry.closed()
    }

    pub fn location(&self) -> Location {
        self.history.location()
    }

    pub fn is_mounted(&self) -> bool {
        self.synchronizer.is_mounted()
    }

    /// Runs the one-time startup, then arms outbound sync.
    pub fn mount(&mut self) -> Option<TabId> {
        let activated = self.synchronizer.mount(&mut self.registry, &self.history);
        self.sync();
        activated
    }

    pub fn open_or_activate(&mut self, descriptor: TabDescriptor) -> Opened {
        let opened = self.registry.open_or_activate(descriptor);
        self.sync();
        opened
    }

    pub fn close(&mut self, id: &TabId) -> bool {
        let closed = self.registry.close(id);

        if closed {
            match self.purge {
                PurgePolicy::All => self.store.purge_all(),
                PurgePolicy::Tab => self.store.purge(id),
            }
        }

        self.sync();
        closed
    }

    pub fn activate(&mut self, id: TabId) {
        self.registry.activate(id);
        self.sync();
    }

    pub fn close_all(&mut self) {
        self.registry.close_all();
        self.store.purge_all();
        self.sync();
    }

    pub fn clear_closed_history(&mut self) {
        self.registry.clear_closed_history();
    }

    pub fn reopen_closed(&mut self, id: Option<&TabId>) -> Option<TabId> {
        let reopened = self.registry.reopen_closed(id);
        self.sync();
        reopened
    }

    /// Handles a back/forward navigation raised by the host
    pub fn navigate(&mut self, event: &NavigationEvent) -> TabId {
        let id = self.synchronizer.navigate(&mut self.registry, event);
        self.sync();
        id
    }

    pub fn write(&mut self, tab: TabId, key: impl Into<String>, value: TabValue) {
        self.store.write(tab, key, value);
    }

    pub fn write_many(&mut self, tab: TabId, values: impl IntoIterator<Item = (String, TabValue)>) {
        self.store.write_many(tab, values);
    }

    pub fn purge(&mut self, tab: &TabId) {
        self.store.purge(tab);
    }

    pub fn purge_all(&mut self) {
        self.store.purge_all();
    }

    fn sync(&mut self) -> Outbound {
        let outbound = self.synchronizer.sync(&self.registry, &mut self.history);
        if let Outbound::Pushed(ref location) = outbound {
            debug!("location is now {}", location);
        }

        outbound
    }
}

#[cfg(test)]
mod tests {
    use super::Workspace;
    use crate::{history::MemoryHistory, registry::Opened};
    use pretty_assertions::assert_eq;
    use tabstrip_api::{
        clock::ManualClock,
        config::{PurgePolicy, WorkspaceConfig},
        location::Location,
        tab::{TabDescriptor, TabId},
    };

    fn descriptor(id: &str) -> TabDescriptor {
        TabDescriptor::builder()
            .id(id)
            .title(id)
            .component(format!("{}-view", id))
            .url(format!("/{}", id))
            .build()
    }

    fn workspace(purge: PurgePolicy) -> (Workspace<MemoryHistory, ManualClock>, MemoryHistory) {
        let config = WorkspaceConfig {
            base_path: "/app".into(),
            purge_on_close: purge,
            ..WorkspaceConfig::default()
        };

        let history = MemoryHistory::new(Location::new("/app"));
        let mut workspace = Workspace::with_clock(&config, history.clone(), ManualClock::new(0));
        workspace.mount();
        (workspace, history)
    }

    #[test]
    fn open_pushes_location() {
        let (mut workspace, history) = workspace(PurgePolicy::All);

        assert_eq!(Opened::Created, workspace.open_or_activate(descriptor("a")));
        assert_eq!("/app#tab=a", workspace.location().to_string());
        assert_eq!(1, history.pushes());
    }

    #[test]
    fn repeated_activation_pushes_once() {
        let (mut workspace, history) = workspace(PurgePolicy::All);
        workspace.open_or_activate(descriptor("a"));

        workspace.activate("a".into());
        workspace.open_or_activate(descriptor("a"));
        workspace.activate("a".into());

        assert_eq!(1, history.pushes());
    }

    #[test]
    fn close_purges_every_bucket_by_default() {
        let (mut workspace, _history) = workspace(PurgePolicy::All);
        workspace.open_or_activate(descriptor("a"));
        workspace.open_or_activate(descriptor("b"));
        workspace.write("a".into(), "scroll", 10.into());
        workspace.write("b".into(), "scroll", 20.into());

        workspace.close(&"b".into());

        assert!(workspace.store().is_empty());
    }

    #[test]
    fn close_purges_own_bucket_when_scoped() {
        let (mut workspace, _history) = workspace(PurgePolicy::Tab);
        workspace.open_or_activate(descriptor("a"));
        workspace.open_or_activate(descriptor("b"));
        workspace.write("a".into(), "scroll", 10.into());
        workspace.write("b".into(), "scroll", 20.into());

        workspace.close(&"b".into());

        assert_eq!(
            Some(&10.into()),
            workspace.store().get(&"a".into(), "scroll")
        );
        assert_eq!(None, workspace.store().bucket(&"b".into()));
    }

    #[test]
    fn close_missing_keeps_store() {
        let (mut workspace, _history) = workspace(PurgePolicy::All);
        workspace.open_or_activate(descriptor("a"));
        workspace.write("a".into(), "scroll", 10.into());

        assert!(!workspace.close(&"zzz".into()));
        assert!(!workspace.store().is_empty());
    }

    #[test]
    fn close_all_purges_and_clears_location() {
        let (mut workspace, _history) = workspace(PurgePolicy::Tab);
        workspace.open_or_activate(descriptor("a"));
        workspace.write("a".into(), "scroll", 10.into());

        workspace.close_all();

        assert!(workspace.tabs().is_empty());
        assert!(workspace.store().is_empty());
        assert_eq!(Location::new("/app"), workspace.location());
        assert_eq!(0, workspace.closed().count());
    }

    #[test]
    fn navigate_activates_and_skips_push() {
        let (mut workspace, history) = workspace(PurgePolicy::All);
        workspace.open_or_activate(descriptor("a"));
        workspace.open_or_activate(descriptor("b"));

        let event = history.back().expect("back");
        assert_eq!(TabId::from("a"), workspace.navigate(&event));
        assert_eq!(Some(&TabId::from("a")), workspace.active_id());
        assert_eq!(2, history.pushes());
    }

    #[test]
    fn mount_is_silent_until_called() {
        let config = WorkspaceConfig::default();
        let history = MemoryHistory::new("/#tab=b".parse().unwrap());
        let mut workspace = Workspace::with_clock(&config, history.clone(), ManualClock::new(0));

        workspace.open_or_activate(descriptor("a"));
        workspace.open_or_activate(descriptor("b"));
        workspace.activate("a".into());
        assert_eq!(0, history.pushes());

        assert_eq!(Some(TabId::from("b")), workspace.mount());
        assert_eq!(Some(&TabId::from("b")), workspace.active_id());
        assert_eq!(0, history.pushes());
    }
}
