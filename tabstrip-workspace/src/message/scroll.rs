use crate::store::TabValue;
use std::time::Duration;
use tabstrip_api::tab::TabId;

/// Schedules a scroll restore for a newly active tab
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub tab: TabId,
    pub value: TabValue,
    pub delay: Duration,
}

/// Emitted after the restore delay.  Tab content applies the value, if it is still mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRestore {
    pub tab: TabId,
    pub value: TabValue,
}
