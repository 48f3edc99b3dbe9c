use std::{
    fmt::Debug,
    sync::{Arc, Mutex, MutexGuard},
};
use tabstrip_api::{location::Location, tab::TabId};

/// The host's navigation stack.
///
/// `push` must only rewrite state.  It must never raise a `NavigationEvent`.
pub trait HistoryProvider {
    fn location(&self) -> Location;

    fn push(&mut self, location: Location, state: Option<TabId>);
}

impl<T: HistoryProvider + ?Sized> HistoryProvider for Box<T> {
    fn location(&self) -> Location {
        (**self).location()
    }

    fn push(&mut self, location: Location, state: Option<TabId>) {
        (**self).push(location, state)
    }
}

/// Raised by the host when the user moves back or forward through the navigation stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    pub location: Location,
    /// The state attached when the entry was pushed, if any
    pub state: Option<TabId>,
}

impl NavigationEvent {
    pub fn new(location: Location, state: Option<TabId>) -> Self {
        Self { location, state }
    }

    /// The tab named by the attached state, else by the location fragment
    pub fn tab_id(&self) -> Option<TabId> {
        self.state.clone().or_else(|| self.location.tab_id())
    }
}

#[derive(Debug, Clone)]
struct Entry {
    location: Location,
    state: Option<TabId>,
}

#[derive(Debug)]
struct Stack {
    entries: Vec<Entry>,
    index: usize,
    pushes: usize,
}

/// An in-process navigation stack.  Clones share the same stack.
///
/// Used by the command-line host, and by tests in place of a browser.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    stack: Arc<Mutex<Stack>>,
}

impl MemoryHistory {
    pub fn new(initial: Location) -> Self {
        let stack = Stack {
            entries: vec![Entry {
                location: initial,
                state: None,
            }],
            index: 0,
            pushes: 0,
        };

        Self {
            stack: Arc::new(Mutex::new(stack)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Stack> {
        // a panic while holding the lock leaves the stack intact
        match self.stack.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// The number of entries written through `push`
    pub fn pushes(&self) -> usize {
        self.lock().pushes
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn entries(&self) -> Vec<Location> {
        self.lock()
            .entries
            .iter()
            .map(|entry| entry.location.clone())
            .collect()
    }

    /// Moves back one entry, returning the navigation event the host would raise
    pub fn back(&self) -> Option<NavigationEvent> {
        let mut stack = self.lock();
        if stack.index == 0 {
            return None;
        }

        stack.index -= 1;
        Some(stack.current_event())
    }

    /// Moves forward one entry, returning the navigation event the host would raise
    pub fn forward(&self) -> Option<NavigationEvent> {
        let mut stack = self.lock();
        if stack.index + 1 >= stack.entries.len() {
            return None;
        }

        stack.index += 1;
        Some(stack.current_event())
    }
}

impl Stack {
    fn current_event(&self) -> NavigationEvent {
        let entry = &self.entries[self.index];
        NavigationEvent::new(entry.location.clone(), entry.state.clone())
    }
}

impl HistoryProvider for MemoryHistory {
    fn location(&self) -> Location {
        let stack = self.lock();
        stack.entries[stack.index].location.clone()
    }

    fn push(&mut self, location: Location, state: Option<TabId>) {
        let mut stack = self.lock();

        let next = stack.index + 1;
        stack.entries.truncate(next);
        stack.entries.push(Entry { location, state });
        stack.index = next;
        stack.pushes += 1;
    }
}
