//! State marker trait.

use std::fmt::Debug;

/// Snapshot type held by a store.
///
/// Snapshots are replaced rather than edited: `Clone` hands copies to
/// readers, `PartialEq` lets callers compare two snapshots, and `Default`
/// lets the store move the current value into the reducer.
pub trait UiState: Clone + Debug + PartialEq + Default + Send + 'static {}
