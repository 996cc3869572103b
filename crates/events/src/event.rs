use chrono::{DateTime, Utc};

/// A domain-agnostic change event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
///
/// The session model is synchronous and single-threaded, so no `Send`/`Sync`
/// bounds are imposed here.
pub trait Event: Clone + core::fmt::Debug {
    /// Stable event name/type identifier (e.g. "catalog.product.registered").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
