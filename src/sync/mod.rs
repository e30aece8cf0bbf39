//! Keeping independently rendered views consistent with the saved collection.
//!
//! There is no shared live copy of the collection. Views hold snapshots and
//! converge by re-reading the store when told to (`bridge`) or when they
//! become visible again (`focus`).

mod bridge;
mod focus;

pub(crate) use bridge::{ChangeBridge, ChangeEvent};
pub(crate) use focus::FocusTracker;
