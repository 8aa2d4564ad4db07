//! Sorted id vector for a single key order.
//!
//! # Role
//!
//! An index stores no record data of its own. Every comparison resolves the id through the
//! [`RecordStore`], so owner changes made through the store are visible through every index.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::KeyOrder;
use crate::Record;
use crate::record::RecordId;

/// Primary store; the only place record data lives.
pub(crate) type RecordStore = FxHashMap<RecordId, Arc<Record>>;

/// Ids sorted ascending by `K`.
pub(crate) struct OrderedIndex<K: KeyOrder> {
	ids: Vec<RecordId>,
	_order: PhantomData<K>,
}

impl<K: KeyOrder> Clone for OrderedIndex<K> {
	fn clone(&self) -> Self {
		Self {
			ids: self.ids.clone(),
			_order: PhantomData,
		}
	}
}

impl<K: KeyOrder> fmt::Debug for OrderedIndex<K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OrderedIndex")
			.field("kind", &K::KIND)
			.field("len", &self.ids.len())
			.finish()
	}
}

impl<K: KeyOrder> OrderedIndex<K> {
	pub(crate) fn with_capacity(capacity: usize) -> Self {
		Self {
			ids: Vec::with_capacity(capacity),
			_order: PhantomData,
		}
	}

	#[inline]
	fn resolve<'s>(store: &'s RecordStore, id: &RecordId) -> &'s Record {
		&store[id]
	}

	/// Binary search for `probe`.
	///
	/// `Ok` holds the position of the matching id, `Err` the position at which a record with
	/// this key would be inserted.
	pub(crate) fn search<'s>(
		&self,
		store: &'s RecordStore,
		probe: K::Probe<'s>,
	) -> Result<usize, usize> {
		self.ids
			.binary_search_by(|id| K::probe(Self::resolve(store, id)).cmp(&probe))
	}

	/// Returns the id of the record whose key equals `probe`.
	#[inline]
	pub(crate) fn find<'s>(&self, store: &'s RecordStore, probe: K::Probe<'s>) -> Option<RecordId> {
		self.search(store, probe).ok().map(|pos| self.ids[pos])
	}

	/// Position of `id`, located through the record's own key.
	pub(crate) fn position_of(&self, store: &RecordStore, id: RecordId) -> Option<usize> {
		let record = store.get(&id)?;
		let pos = self.search(store, K::probe(record)).ok()?;
		(self.ids[pos] == id).then_some(pos)
	}

	/// Inserts `id` at a position previously returned as `Err` by [`Self::search`].
	#[inline]
	pub(crate) fn insert_at(&mut self, pos: usize, id: RecordId) {
		self.ids.insert(pos, id);
	}

	#[inline]
	pub(crate) fn remove_at(&mut self, pos: usize) -> RecordId {
		self.ids.remove(pos)
	}

	/// Ids in ascending key order.
	#[cfg(test)]
	pub(crate) fn ids(&self) -> &[RecordId] {
		&self.ids
	}

	/// Records in ascending key order.
	pub(crate) fn records<'s>(
		&'s self,
		store: &'s RecordStore,
	) -> impl Iterator<Item = &'s Arc<Record>> + 's {
		self.ids.iter().map(move |id| &store[id])
	}

	#[inline]
	pub(crate) fn len(&self) -> usize {
		self.ids.len()
	}
}
