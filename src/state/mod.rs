//! Editor state modules.
//!
//! DESIGN
//! ======
//! Persisted block data (`attributes`) is kept apart from transient editor
//! chrome (`ui`) so only the former ever reaches the host's storage.

pub mod attributes;
pub mod host_sync;
pub mod ui;
