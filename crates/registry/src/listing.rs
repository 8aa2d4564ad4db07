//! Point-in-time record listings.
//!
//! # Role
//!
//! A [`Listing`] is a forward-only cursor over records captured when the listing was taken.
//! It holds no reference into the registry: later adds, removals and transfers are not visible
//! through it, and the registry can be mutated or dropped while listings are alive.
//!
//! # States
//!
//! A listing is either positioned at a record or exhausted. It starts exhausted when nothing was
//! captured. [`Listing::advance`] on an exhausted listing does nothing.
//!
//! Field accessors never fail. While exhausted they return `""` or `0`.

use std::iter::FusedIterator;
use std::sync::Arc;

use crate::Record;

/// Snapshot cursor produced by [`Registry`](crate::Registry) iteration methods.
#[derive(Debug, Clone)]
pub struct Listing {
	records: Arc<[Arc<Record>]>,
	cursor: usize,
}

impl Listing {
	pub(crate) fn new(records: Arc<[Arc<Record>]>) -> Self {
		Self { records, cursor: 0 }
	}

	/// True once every captured record has been passed.
	#[inline]
	pub fn is_exhausted(&self) -> bool {
		self.cursor >= self.records.len()
	}

	/// Moves to the next record, or to the exhausted state after the last one.
	#[inline]
	pub fn advance(&mut self) {
		if !self.is_exhausted() {
			self.cursor += 1;
		}
	}

	/// The record under the cursor.
	#[inline]
	pub fn current(&self) -> Option<&Record> {
		self.records.get(self.cursor).map(Arc::as_ref)
	}

	pub fn city(&self) -> &str {
		self.current().map_or("", Record::city)
	}

	pub fn address(&self) -> &str {
		self.current().map_or("", Record::address)
	}

	pub fn region(&self) -> &str {
		self.current().map_or("", Record::region)
	}

	pub fn parcel_id(&self) -> u64 {
		self.current().map_or(0, Record::parcel_id)
	}

	pub fn owner(&self) -> &str {
		self.current().map_or("", Record::owner)
	}

	/// Records not yet passed, including the current one.
	#[inline]
	pub fn remaining(&self) -> usize {
		self.records.len().saturating_sub(self.cursor)
	}
}

/// Yields the current record, then advances.
impl Iterator for Listing {
	type Item = Arc<Record>;

	fn next(&mut self) -> Option<Self::Item> {
		let record = self.records.get(self.cursor).cloned()?;
		self.cursor += 1;
		Some(record)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let n = self.remaining();
		(n, Some(n))
	}
}

impl ExactSizeIterator for Listing {}

impl FusedIterator for Listing {}
