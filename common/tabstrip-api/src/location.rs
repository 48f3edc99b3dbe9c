//! The wire contract with the host's navigation stack.
//!
//! A location is `<path>` when no tab is active, or `<path>#tab=<id>` when one is.
//! Tab ids are written verbatim, and the whole fragment after `tab=` is the id.
use crate::tab::TabId;
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

const TAB_PREFIX: &str = "tab=";

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub fragment: Option<String>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            fragment: None,
        }
    }

    /// The location which points at the given tab, beneath the base path
    pub fn for_tab(base_path: &str, id: &TabId) -> Self {
        Self {
            path: base_path.to_string(),
            fragment: Some(format!("{}{}", TAB_PREFIX, id)),
        }
    }

    /// Resolves the tab id named by the fragment, if any
    pub fn tab_id(&self) -> Option<TabId> {
        let fragment = self.fragment.as_deref()?;
        let id = fragment.strip_prefix(TAB_PREFIX)?;

        if id.is_empty() {
            return None;
        }

        Some(TabId::from(id))
    }

    /// The same path, with the fragment removed
    pub fn without_fragment(&self) -> Self {
        Self::new(self.path.clone())
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.fragment {
            Some(ref fragment) => write!(f, "{}#{}", self.path, fragment),
            None => f.write_str(self.path.as_str()),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("location has an empty path: {0:?}")]
pub struct ParseLocationError(pub String);

impl FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut split = s.splitn(2, '#');
        let path = split.next().unwrap_or_default();

        if path.is_empty() {
            return Err(ParseLocationError(s.to_string()));
        }

        let fragment = split
            .next()
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string);

        Ok(Self {
            path: path.to_string(),
            fragment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Location, ParseLocationError};
    use crate::tab::TabId;
    use pretty_assertions::assert_eq;

    #[test]
    fn format_tab() {
        let location = Location::for_tab("/app", &"orders".into());
        assert_eq!("/app#tab=orders", location.to_string());
    }

    #[test]
    fn format_no_tab() {
        assert_eq!("/app", Location::new("/app").to_string());
    }

    #[test]
    fn parse_tab() -> anyhow::Result<()> {
        let location: Location = "/app#tab=orders".parse()?;
        assert_eq!("/app", location.path);
        assert_eq!(Some(TabId::from("orders")), location.tab_id());
        Ok(())
    }

    #[test]
    fn ids_with_separators_round_trip() -> anyhow::Result<()> {
        for id in &["a&b", "key=value", "a#b", "tab=x&y=z#w"] {
            let id = TabId::from(*id);
            let location: Location = Location::for_tab("/app", &id).to_string().parse()?;

            assert_eq!("/app", location.path);
            assert_eq!(Some(id), location.tab_id());
        }

        Ok(())
    }

    #[test]
    fn parse_without_tab() -> anyhow::Result<()> {
        let location: Location = "/app#other=1".parse()?;
        assert_eq!(None, location.tab_id());

        let location: Location = "/app#mode=edit&tab=users".parse()?;
        assert_eq!(None, location.tab_id());

        let location: Location = "/app#tab=".parse()?;
        assert_eq!(None, location.tab_id());

        let location: Location = "/app#".parse()?;
        assert_eq!(None, location.fragment);
        Ok(())
    }

    #[test]
    fn parse_empty_path() {
        let err = "#tab=orders".parse::<Location>();
        assert_eq!(Err(ParseLocationError("#tab=orders".into())), err);
    }

    #[test]
    fn without_fragment() {
        let location = Location::for_tab("/app", &"orders".into());
        assert_eq!(Location::new("/app"), location.without_fragment());
    }
}
