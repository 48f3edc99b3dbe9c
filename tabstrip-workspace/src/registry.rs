//! The ordered set of open tabs, the active tab, and the recently closed history.
//!
//! Every operation is total.  Unknown ids are no-ops, and `activate` accepts ids which are not open.
use log::debug;
use std::collections::VecDeque;
use tabstrip_api::{
    clock::{Clock, SystemClock},
    config::DEFAULT_CLOSED_HISTORY_LIMIT,
    tab::{ClosedTab, Tab, TabDescriptor, TabId},
};

/// The active tab, as seen by rendering code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveTab<'a> {
    None,
    Open(&'a Tab),
    /// The active id names no open tab.  Render nothing.
    Dangling(&'a TabId),
}

impl<'a> ActiveTab<'a> {
    pub fn tab(&self) -> Option<&'a Tab> {
        match self {
            ActiveTab::Open(tab) => Some(tab),
            _ => None,
        }
    }
}

/// The result of a registry transition which may have created a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opened {
    Created,
    /// An open tab matched by id, or by component & url
    Existing,
}

pub struct TabRegistry<C = SystemClock> {
    open: Vec<Tab>,
    active: Option<TabId>,
    closed: VecDeque<ClosedTab>,
    closed_limit: usize,
    clock: C,
}

impl Default for TabRegistry<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> TabRegistry<C> {
    pub fn new(clock: C) -> Self {
        Self::with_closed_limit(clock, DEFAULT_CLOSED_HISTORY_LIMIT)
    }

    pub fn with_closed_limit(clock: C, closed_limit: usize) -> Self {
        Self {
            open: Vec::new(),
            active: None,
            closed: VecDeque::new(),
            closed_limit,
            clock,
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        self.open.as_slice()
    }

    pub fn get(&self, id: &TabId) -> Option<&Tab> {
        self.open.iter().find(|tab| tab.id == *id)
    }

    pub fn contains(&self, id: &TabId) -> bool {
        self.get(id).is_some()
    }

    pub fn active_id(&self) -> Option<&TabId> {
        self.active.as_ref()
    }

    pub fn active(&self) -> ActiveTab<'_> {
        match self.active {
            Some(ref id) => match self.get(id) {
                Some(tab) => ActiveTab::Open(tab),
                None => ActiveTab::Dangling(id),
            },
            None => ActiveTab::None,
        }
    }

    /// Recently closed tabs, newest first
    pub fn closed(&self) -> impl Iterator<Item = &ClosedTab> {
        self.closed.iter()
    }

    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// Activates an open tab matching the descriptor, or opens a new one at the end of the strip.
    ///
    /// Matches are checked by id first, then by the (component, url) pair.
    pub fn open_or_activate(&mut self, descriptor: TabDescriptor) -> Opened {
        let existing = self
            .get(&descriptor.id)
            .or_else(|| {
                self.open
                    .iter()
                    .find(|tab| tab.same_target(&descriptor.component, &descriptor.url))
            })
            .map(|tab| tab.id.clone());

        if let Some(id) = existing {
            debug!("tab {} already open for {}", id, descriptor.id);
            self.active = Some(id);
            return Opened::Existing;
        }

        self.closed.retain(|closed| closed.tab.id != descriptor.id);

        let tab = Tab::open(descriptor, self.clock.now_millis());
        debug!("opening tab {} at {}", tab.id, tab.opened_at);

        self.active = Some(tab.id.clone());
        self.open.push(tab);

        Opened::Created
    }

    /// Closes the tab, moving it into the closed history.  Returns false if the tab was not open.
    ///
    /// If the closed tab was active, the tab to its left becomes active, else the first tab.
    pub fn close(&mut self, id: &TabId) -> bool {
        let index = match self.open.iter().position(|tab| tab.id == *id) {
            Some(index) => index,
            None => return false,
        };

        let tab = self.open.remove(index);
        let closed_at = self.clock.now_millis();
        debug!("closing tab {} at {}", tab.id, closed_at);

        self.closed.push_front(ClosedTab { tab, closed_at });
        while self.closed.len() > self.closed_limit {
            if let Some(evicted) = self.closed.pop_back() {
                debug!("evicted closed tab {}", evicted.tab.id);
            }
        }

        if self.active.as_ref() == Some(id) {
            self.active = index
                .checked_sub(1)
                .and_then(|left| self.open.get(left))
                .or_else(|| self.open.first())
                .map(|tab| tab.id.clone());
        }

        true
    }

    /// Sets the active id, without checking that the tab is open.
    pub fn activate(&mut self, id: TabId) {
        self.active = Some(id);
    }

    /// Closes every open tab.  Closed history is not touched.
    pub fn close_all(&mut self) {
        self.open.clear();
        self.active = None;
    }

    pub fn clear_closed_history(&mut self) {
        self.closed.clear();
    }

    /// Reopens the named closed tab, or the most recently closed when `id` is None.
    pub fn reopen_closed(&mut self, id: Option<&TabId>) -> Option<TabId> {
        let index = match id {
            Some(id) => self.closed.iter().position(|closed| closed.tab.id == *id)?,
            None if self.closed.is_empty() => return None,
            None => 0,
        };

        let closed = self.closed.remove(index)?;
        self.open_or_activate(closed.tab.descriptor());

        self.active.clone()
    }
}
