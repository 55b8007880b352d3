//! Immutable book catalog for the bookplayer workspace.
//!
//! The catalog is an explicitly constructed value that gets injected into
//! the view-state holders; there is no global data store. Once built it
//! is read-only.

mod store;

pub use store::Catalog;
