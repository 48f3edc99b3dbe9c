use log::trace;
use std::collections::HashMap;
use tabstrip_api::tab::TabId;

/// Opaque per-tab UI state, such as scroll offsets or unsaved form edits
pub type TabValue = serde_yaml::Value;

pub type Bucket<V> = HashMap<String, V>;

/// Caller-defined key/value state, bucketed by tab id.
#[derive(Debug, Clone)]
pub struct TabStateStore<V = TabValue> {
    buckets: HashMap<TabId, Bucket<V>>,
}

impl<V> Default for TabStateStore<V> {
    fn default() -> Self {
        Self {
            buckets: HashMap::new(),
        }
    }
}

impl<V> TabStateStore<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tab: &TabId, key: &str) -> Option<&V> {
        self.buckets.get(tab).and_then(|bucket| bucket.get(key))
    }

    pub fn bucket(&self, tab: &TabId) -> Option<&Bucket<V>> {
        self.buckets.get(tab)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn write(&mut self, tab: TabId, key: impl Into<String>, value: V) {
        let key = key.into();
        trace!("write {}/{}", tab, key);

        self.buckets.entry(tab).or_default().insert(key, value);
    }

    /// Merges the batch into the tab's bucket, in a single step.
    pub fn write_many(&mut self, tab: TabId, values: impl IntoIterator<Item = (String, V)>) {
        trace!("write batch {}", tab);
        self.buckets.entry(tab).or_default().extend(values);
    }

    pub fn purge(&mut self, tab: &TabId) {
        if self.buckets.remove(tab).is_some() {
            trace!("purged {}", tab);
        }
    }

    pub fn purge_all(&mut self) {
        trace!("purged {} buckets", self.buckets.len());
        self.buckets.clear();
    }
}
