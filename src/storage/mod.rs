//! In-memory storage
//!
//! Nothing here touches the disk: ledger data lives for a single run.

pub mod keyed;

pub use keyed::{Describable, Identifiable, KeyedStore};
