//! Reference Data Module
//!
//! Loads the static department and town datasets used for code resolution
//! and filtering.
//!
//! ## Core Concepts
//! - **Datasets**: Two read-only JSON files (`departments.json`, `towns.json`),
//!   each an array of coded entries. The application never writes them.
//! - **Loading**: `ReferenceLoader` re-reads the file on every call. The
//!   datasets are small and static per process, so freshness is traded for
//!   simplicity instead of adding a cache layer.
//! - **Resolution**: Lookup maps go from code to display name. A code missing
//!   from the map is not an error; callers fall back to showing the raw code.

pub mod handlers;
pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;
