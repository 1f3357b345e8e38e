//! Records Module
//!
//! The application state layer: an append-only in-memory record store and the
//! page handlers that serve the list view, the entry form, and the form
//! submission.
//!
//! ## Core Concepts
//! - **Store**: `RecordStore` is the sole state shared across requests. It is
//!   created empty at startup, owned by `main`, and injected into handlers as
//!   an `Extension`. Records are never mutated or removed once appended.
//! - **Identifiers**: each record gets `id = current size + 1`, so ids are
//!   unique and strictly increasing in insertion order.
//! - **Display**: the list view joins record codes against the reference name
//!   maps, falling back to the raw code when a lookup misses.

pub mod handlers;
pub mod store;
pub mod types;
