//! Change reporting toward the host's attribute store.
//!
//! The host already knows any value it handed in (mount payload, undo/redo
//! replacement). Only attribute sets it has not seen are reported back, so a
//! host replacement is never echoed as a fresh edit.

#[cfg(test)]
#[path = "host_sync_test.rs"]
mod host_sync_test;

/// Last attribute JSON the host is known to hold.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostSync {
    last_known: Option<String>,
}

impl HostSync {
    /// Record a value that came from the host.
    pub fn acknowledge(&mut self, json: String) {
        self.last_known = Some(json);
    }

    /// Whether `json` must be sent to the host. Marks it known when it does.
    pub fn should_notify(&mut self, json: &str) -> bool {
        if self.last_known.as_deref() == Some(json) {
            return false;
        }
        self.last_known = Some(json.to_owned());
        true
    }
}
