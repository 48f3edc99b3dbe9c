use std::fmt::Write;
use tabstrip_workspace::{registry::ActiveTab, state::WorkspaceState};

/// The open tabs, in order, with the active tab marked
pub fn tabs(state: &WorkspaceState) -> String {
    let mut out = String::new();

    if state.tabs.is_empty() {
        out.push_str("no open tabs\n");
    }

    for tab in state.tabs.iter() {
        let marker = if state.active.as_ref() == Some(&tab.id) {
            '*'
        } else {
            ' '
        };

        let lock = if tab.closable { "" } else { " [pinned]" };
        let _ = writeln!(
            out,
            "{} {}  {}  ({} {}){}",
            marker, tab.id, tab.title, tab.component, tab.url, lock
        );
    }

    if let ActiveTab::Dangling(id) = state.active_tab() {
        let _ = writeln!(out, "active: {} (not open)", id);
    }

    for (key, value) in sorted(state) {
        let _ = writeln!(out, "  {} = {}", key, value);
    }

    out
}

/// The closed history, newest first
pub fn closed(state: &WorkspaceState) -> String {
    if state.closed.is_empty() {
        return "no closed tabs\n".to_string();
    }

    let mut out = String::new();
    for (index, closed) in state.closed.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}: {}  {}  (closed at {})",
            index,
            closed.id(),
            closed.tab.title,
            closed.closed_at
        );
    }

    out
}

/// A one-line summary, printed after every transition
pub fn status(state: &WorkspaceState) -> String {
    let active = match state.active_tab() {
        ActiveTab::Open(tab) => tab.id.to_string(),
        ActiveTab::Dangling(id) => format!("{} (not open)", id),
        ActiveTab::None => "none".to_string(),
    };

    format!(
        "[{}] {} open, {} closed, active {}, location {}",
        state.revision,
        state.tabs.len(),
        state.closed.len(),
        active,
        state.location
    )
}

fn sorted(state: &WorkspaceState) -> Vec<(&String, String)> {
    let mut entries: Vec<_> = state
        .active_state
        .iter()
        .map(|(key, value)| (key, inline(value)))
        .collect();

    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

fn inline(value: &serde_yaml::Value) -> String {
    match serde_yaml::to_string(value) {
        Ok(yaml) => yaml.trim_start_matches("---").trim().to_string(),
        Err(_) => format!("{:?}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::{closed, status, tabs};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use tabstrip_api::{
        location::Location,
        tab::{ClosedTab, Tab, TabDescriptor, TabId},
    };
    use tabstrip_workspace::state::WorkspaceState;

    fn tab(id: &str, closable: bool) -> Tab {
        let descriptor = TabDescriptor::builder()
            .id(id)
            .title(id.to_uppercase())
            .component("View")
            .url(format!("/{}", id))
            .closable(closable)
            .build();

        Tab::open(descriptor, 0)
    }

    fn state() -> WorkspaceState {
        let mut active_state = HashMap::new();
        active_state.insert("scrollTop".to_string(), 120.into());
        active_state.insert("filter".to_string(), "open".into());

        WorkspaceState {
            revision: 4,
            tabs: vec![tab("a", true), tab("b", false)],
            active: Some(TabId::from("b")),
            closed: vec![ClosedTab {
                tab: tab("c", true),
                closed_at: 1000,
            }],
            active_state,
            location: Location::for_tab("/app", &"b".into()),
        }
    }

    #[test]
    fn renders_tabs() {
        assert_eq!(
            "  a  A  (View /a)\n* b  B  (View /b) [pinned]\n  filter = open\n  scrollTop = 120\n",
            tabs(&state())
        );
    }

    #[test]
    fn renders_dangling_active() {
        let mut state = state();
        state.active = Some("dashboard".into());
        state.active_state.clear();

        assert_eq!(
            "  a  A  (View /a)\n  b  B  (View /b) [pinned]\nactive: dashboard (not open)\n",
            tabs(&state)
        );
    }

    #[test]
    fn renders_closed() {
        assert_eq!("0: c  C  (closed at 1000)\n", closed(&state()));

        let mut state = state();
        state.closed.clear();
        assert_eq!("no closed tabs\n", closed(&state));
    }

    #[test]
    fn renders_status() {
        assert_eq!(
            "[4] 2 open, 1 closed, active b, location /app#tab=b",
            status(&state())
        );
    }
}
