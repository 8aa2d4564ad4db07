#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Ordered secondary indexes over the record store.
//!
//! # Purpose
//!
//! The registry keeps every [`Record`](crate::Record) exactly once, in a store keyed by a stable
//! [`RecordId`](crate::record::RecordId). Each index is a vector of ids kept sorted by one
//! composite key, so lookups and insertion points are found by binary search through the store.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`OrderedIndex`] | Sorted id vector for one key order. |
//! | [`KeyOrder`] | Extracts and compares the composite key of a record. |
//! | [`ByAddress`] | `(city, address)` ascending. |
//! | [`ByCadastre`] | `(region, parcel_id)` ascending. |
//!
//! # Invariants
//!
//! - Ids in an index are strictly ascending by that index's key (no duplicates).
//!   - Enforced in: [`OrderedIndex::insert_at`] callers, which insert only at a vacant search position.
//!   - Tested by: `registry::invariants::test_dual_index_consistency`
//!   - Failure symptom: binary search misses present records or admits duplicate keys.
//!
//! - Every id held by an index resolves in the store.
//!   - Enforced in: [`crate::Registry::remove`] (drops the id from both indexes before the store).
//!   - Tested by: `registry::invariants::prop_random_ops_keep_indexes_consistent`
//!   - Failure symptom: panic on store lookup during search.

mod order;
mod ordered;

pub use order::KeyKind;
pub(crate) use order::{ByAddress, ByCadastre, KeyOrder};
pub(crate) use ordered::{OrderedIndex, RecordStore};
