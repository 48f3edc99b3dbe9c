use serde::{Deserialize, Serialize};
use std::fmt::Display;
use typed_builder::TypedBuilder;

/// Identifies a tab in the workspace.  Supplied by the caller, typically derived from a menu entry.
#[derive(Serialize, Deserialize, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TabId(pub String);

impl TabId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        TabId(id.to_string())
    }
}

impl From<String> for TabId {
    fn from(id: String) -> Self {
        TabId(id)
    }
}

/// A request to open a tab.  Produced by menu or search selection.
#[derive(TypedBuilder, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TabDescriptor {
    #[builder(setter(into))]
    pub id: TabId,
    #[builder(setter(into))]
    pub title: String,
    /// The content renderer mounted for this tab.  Opaque to the workspace.
    #[builder(setter(into))]
    pub component: String,
    #[builder(setter(into))]
    pub url: String,
    /// Advisory only, the registry never enforces it.
    #[builder(default = true)]
    #[serde(default = "default_closable")]
    pub closable: bool,
    #[builder(default, setter(strip_option, into))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_icon: Option<String>,
}

fn default_closable() -> bool {
    true
}

/// An open workspace entry
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    pub component: String,
    pub url: String,
    pub closable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_icon: Option<String>,
    /// Epoch millis, stamped when the tab moves from absent or closed to open
    pub opened_at: u64,
}

impl Tab {
    pub fn open(descriptor: TabDescriptor, opened_at: u64) -> Self {
        Self {
            id: descriptor.id,
            title: descriptor.title,
            component: descriptor.component,
            url: descriptor.url,
            closable: descriptor.closable,
            menu_icon: descriptor.menu_icon,
            opened_at,
        }
    }

    /// True if this tab renders the same component at the same url
    pub fn same_target(&self, component: &str, url: &str) -> bool {
        self.component == component && self.url == url
    }

    pub fn descriptor(&self) -> TabDescriptor {
        TabDescriptor {
            id: self.id.clone(),
            title: self.title.clone(),
            component: self.component.clone(),
            url: self.url.clone(),
            closable: self.closable,
            menu_icon: self.menu_icon.clone(),
        }
    }
}

/// A snapshot of a tab which has moved into the closed history
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClosedTab {
    #[serde(flatten)]
    pub tab: Tab,
    pub closed_at: u64,
}

impl ClosedTab {
    pub fn id(&self) -> &TabId {
        &self.tab.id
    }
}

#[cfg(test)]
mod tests {
    use super::{Tab, TabDescriptor, TabId};
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_defaults() {
        let descriptor = TabDescriptor::builder()
            .id("orders")
            .title("Orders")
            .component("OrderGrid")
            .url("/orders")
            .build();

        assert_eq!(TabId::from("orders"), descriptor.id);
        assert!(descriptor.closable);
        assert_eq!(None, descriptor.menu_icon);
    }

    #[test]
    fn open_preserves_descriptor() {
        let descriptor = TabDescriptor::builder()
            .id("orders")
            .title("Orders")
            .component("OrderGrid")
            .url("/orders")
            .closable(false)
            .menu_icon("icon-cart")
            .build();

        let tab = Tab::open(descriptor.clone(), 42);
        assert_eq!(42, tab.opened_at);
        assert_eq!(descriptor, tab.descriptor());
        assert!(tab.same_target("OrderGrid", "/orders"));
        assert!(!tab.same_target("OrderGrid", "/orders/1"));
    }

    #[test]
    fn descriptor_yaml_closable_default() {
        let yaml = "id: users\ntitle: Users\ncomponent: UserGrid\nurl: /users\n";
        let descriptor: TabDescriptor = serde_yaml::from_str(yaml).expect("valid yaml");
        assert!(descriptor.closable);
        assert_eq!("users", descriptor.id.as_str());
    }
}
