use super::provider::{HistoryProvider, NavigationEvent};
use crate::registry::TabRegistry;
use log::{debug, warn};
use tabstrip_api::{clock::Clock, location::Location, tab::TabId};

/// Keeps the host location in step with the active tab, and turns back/forward navigation into activations.
///
/// The outbound direction is disarmed until `mount` has run.
#[derive(Debug, Clone)]
pub struct Synchronizer {
    base_path: String,
    fallback: TabId,
    mounted: bool,
}

/// What the outbound direction did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    /// The synchronizer has not been mounted
    Disarmed,
    /// The host location already matched
    Unchanged,
    Pushed(Location),
}

impl Synchronizer {
    pub fn new(base_path: impl Into<String>, fallback: TabId) -> Self {
        Self {
            base_path: base_path.into(),
            fallback,
            mounted: false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn fallback(&self) -> &TabId {
        &self.fallback
    }

    /// The location which reflects the registry's active tab
    pub fn target<C: Clock>(&self, registry: &TabRegistry<C>) -> Location {
        match registry.active().tab() {
            Some(tab) => Location::for_tab(self.base_path.as_str(), &tab.id),
            None => Location::new(self.base_path.clone()),
        }
    }

    /// One-time startup.  If the initial location names an open tab, it is activated.  Never opens tabs.
    ///
    /// Returns the activated id.
    pub fn mount<C: Clock>(
        &mut self,
        registry: &mut TabRegistry<C>,
        history: &impl HistoryProvider,
    ) -> Option<TabId> {
        if self.mounted {
            return None;
        }

        self.mounted = true;

        let initial = history.location().tab_id()?;
        if !registry.contains(&initial) {
            debug!("initial location names tab {}, which is not open", initial);
            return None;
        }

        debug!("mounted on tab {}", initial);
        registry.activate(initial.clone());
        Some(initial)
    }

    /// Writes the active tab to the host, unless the host location already matches.
    pub fn sync<C: Clock>(
        &self,
        registry: &TabRegistry<C>,
        history: &mut impl HistoryProvider,
    ) -> Outbound {
        if !self.mounted {
            return Outbound::Disarmed;
        }

        let target = self.target(registry);
        if target.to_string() == history.location().to_string() {
            return Outbound::Unchanged;
        }

        debug!("pushing location {}", target);
        let state = registry.active().tab().map(|tab| tab.id.clone());
        history.push(target.clone(), state);

        Outbound::Pushed(target)
    }

    /// Handles a host navigation.  Activates the named tab if it is open, otherwise the fallback tab.
    ///
    /// Returns the activated id.  The fallback is activated even if it is not open.
    pub fn navigate<C: Clock>(
        &self,
        registry: &mut TabRegistry<C>,
        event: &NavigationEvent,
    ) -> TabId {
        let target = event
            .tab_id()
            .filter(|candidate| registry.contains(candidate));

        let id = match target {
            Some(id) => id,
            None => {
                warn!(
                    "navigation to {} names no open tab, falling back to {}",
                    event.location, self.fallback
                );
                self.fallback.clone()
            }
        };

        registry.activate(id.clone());
        id
    }
}
