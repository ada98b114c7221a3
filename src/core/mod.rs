//! In-memory catalog, registry, lending coordinator, and aggregate.

/// Item catalog keyed by identifier.
pub mod catalog;
/// Borrow/return transactions across catalog and registry.
pub mod lending;
/// Aggregate owning catalog, registry, and the member counter.
pub mod library;
/// Member registry with sequential identifier assignment.
pub mod registry;
