//! Intent marker trait.

use std::fmt::Debug;

/// A message submitted to a store.
pub trait Intent: Debug + Send + 'static {
    /// Stable tag identifying the kind of message, used by middleware
    /// that records dispatches without knowing the concrete type.
    fn kind(&self) -> &'static str;
}
