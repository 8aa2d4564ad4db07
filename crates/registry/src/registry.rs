//! The dual-indexed land register.
//!
//! # Role
//!
//! [`Registry`] owns the record store and both [`OrderedIndex`]es and is the only code that
//! mutates them. Each mutating operation resolves every position it needs before it touches
//! any structure, so a rejected call leaves the store, both indexes and the acquisition counter
//! exactly as they were.
//!
//! # Invariants
//!
//! - The store and both indexes hold the same set of ids.
//!   - Enforced in: [`Registry::add`], [`Registry::remove`].
//!   - Tested by: `invariants::test_dual_index_consistency`, `invariants::prop_random_ops_keep_indexes_consistent`
//!   - Failure symptom: a record reachable by one key but not the other.
//!
//! - Acquisition orders strictly increase and are consumed only by successful transfers.
//!   - Enforced in: [`Registry::transfer`].
//!   - Tested by: `invariants::test_acquisition_monotonicity`
//!   - Failure symptom: two transfers compare equal or out of sequence.
//!
//! - A [`Listing`] never observes mutations made after it was taken.
//!   - Enforced in: [`Registry::transfer`] (`Arc::make_mut` copies records still shared with a listing).
//!   - Tested by: `invariants::test_listing_isolation`
//!   - Failure symptom: a listing reports an owner it did not have when captured.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{RegistryError, Result};
use crate::index::{ByAddress, ByCadastre, OrderedIndex, RecordStore};
use crate::listing::Listing;
use crate::record::{AcquisitionOrder, PropertyKey, Record, RecordId};
use crate::RegistryConfig;

/// In-memory register of properties addressable by `(city, address)` and by
/// `(region, parcel_id)`.
#[derive(Debug, Clone)]
pub struct Registry {
	label: &'static str,
	store: RecordStore,
	by_address: OrderedIndex<ByAddress>,
	by_cadastre: OrderedIndex<ByCadastre>,
	next_id: u64,
	next_acquisition: u64,
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

impl Registry {
	/// Creates an empty registry with the default configuration.
	pub fn new() -> Self {
		Self::with_config(RegistryConfig::default())
	}

	pub fn with_config(config: RegistryConfig) -> Self {
		let mut store = RecordStore::default();
		store.reserve(config.capacity);
		Self {
			label: config.label,
			store,
			by_address: OrderedIndex::with_capacity(config.capacity),
			by_cadastre: OrderedIndex::with_capacity(config.capacity),
			next_id: 0,
			next_acquisition: config.first_acquisition,
		}
	}

	/// Registers a new property with no owner.
	///
	/// Rejected when either key is already taken, even if the other one is free.
	pub fn add(&mut self, city: &str, address: &str, region: &str, parcel_id: u64) -> Result<()> {
		let address_pos = match self.by_address.search(&self.store, (city, address)) {
			Ok(_) => {
				trace!(registry = self.label, city, address, "add rejected: address taken");
				return Err(RegistryError::DuplicateAddress {
					city: city.to_owned(),
					address: address.to_owned(),
				});
			}
			Err(pos) => pos,
		};
		let cadastre_pos = match self.by_cadastre.search(&self.store, (region, parcel_id)) {
			Ok(_) => {
				trace!(registry = self.label, region, parcel_id, "add rejected: parcel taken");
				return Err(RegistryError::DuplicateCadastral {
					region: region.to_owned(),
					parcel_id,
				});
			}
			Err(pos) => pos,
		};

		let id = RecordId(self.next_id);
		self.next_id += 1;
		self.store
			.insert(id, Arc::new(Record::new(city, address, region, parcel_id)));
		self.by_address.insert_at(address_pos, id);
		self.by_cadastre.insert_at(cadastre_pos, id);
		debug_assert_eq!(self.by_address.len(), self.store.len());
		debug_assert_eq!(self.by_cadastre.len(), self.store.len());

		debug!(
			registry = self.label,
			city,
			address,
			region,
			parcel_id,
			len = self.store.len(),
			"property added"
		);
		Ok(())
	}

	/// Removes the property under `key` from both orders and returns it.
	pub fn remove<'k>(&mut self, key: impl Into<PropertyKey<'k>>) -> Result<Record> {
		let key = key.into();
		let Some(id) = self.locate(key) else {
			trace!(registry = self.label, %key, "remove rejected: not found");
			return Err(RegistryError::not_found(key));
		};

		let Some((address_pos, cadastre_pos)) = self
			.by_address
			.position_of(&self.store, id)
			.zip(self.by_cadastre.position_of(&self.store, id))
		else {
			unreachable!(
				"record located by {} key is missing from an index (registry={}, id={:?})",
				key.kind(),
				self.label,
				id
			);
		};

		let Some(record) = self.store.remove(&id) else {
			unreachable!(
				"record located by {} key is missing from the store (registry={}, id={:?})",
				key.kind(),
				self.label,
				id
			);
		};
		self.by_address.remove_at(address_pos);
		self.by_cadastre.remove_at(cadastre_pos);
		debug_assert_eq!(self.by_address.len(), self.store.len());
		debug_assert_eq!(self.by_cadastre.len(), self.store.len());

		debug!(registry = self.label, %key, len = self.store.len(), "property removed");
		Ok(Arc::unwrap_or_clone(record))
	}

	/// Returns the owner of the property under `key`; empty when unassigned.
	pub fn owner<'k>(&self, key: impl Into<PropertyKey<'k>>) -> Result<&str> {
		let key = key.into();
		self.get(key)
			.map(Record::owner)
			.ok_or_else(|| RegistryError::not_found(key))
	}

	/// Hands the property under `key` to `new_owner`.
	///
	/// Rejected when nothing matches `key`, or when `new_owner` already owns it (exact
	/// comparison). On success the record receives the next acquisition order, which is
	/// returned. The counter never wraps: once it reaches `u64::MAX` every transfer fails
	/// with [`RegistryError::AcquisitionExhausted`].
	pub fn transfer<'k>(
		&mut self,
		key: impl Into<PropertyKey<'k>>,
		new_owner: &str,
	) -> Result<AcquisitionOrder> {
		let key = key.into();
		let slot = match self.locate(key) {
			Some(id) => self.store.get_mut(&id),
			None => None,
		};
		let Some(slot) = slot else {
			trace!(registry = self.label, %key, "transfer rejected: not found");
			return Err(RegistryError::not_found(key));
		};
		if slot.owner == new_owner {
			trace!(registry = self.label, %key, owner = new_owner, "transfer rejected: owner unchanged");
			return Err(RegistryError::OwnerUnchanged {
				owner: new_owner.to_owned(),
			});
		}

		let Some(following) = self.next_acquisition.checked_add(1) else {
			trace!(registry = self.label, %key, "transfer rejected: acquisition orders exhausted");
			return Err(RegistryError::AcquisitionExhausted {
				at: self.next_acquisition,
			});
		};

		let order = AcquisitionOrder(self.next_acquisition);
		self.next_acquisition = following;

		let record = Arc::make_mut(slot);
		record.owner = new_owner.to_owned();
		record.acquisition = Some(order);

		debug!(registry = self.label, %key, owner = new_owner, %order, "ownership transferred");
		Ok(order)
	}

	/// Counts properties whose owner equals `owner` under ASCII case folding.
	///
	/// The empty string counts properties that have no owner.
	pub fn count_by_owner(&self, owner: &str) -> usize {
		self.store
			.values()
			.filter(|record| record.owner.eq_ignore_ascii_case(owner))
			.count()
	}

	/// Snapshot of every property in ascending `(city, address)` order.
	pub fn iter_by_address(&self) -> Listing {
		Listing::new(self.by_address.records(&self.store).cloned().collect())
	}

	/// Snapshot of every property in ascending `(region, parcel_id)` order.
	pub fn iter_by_cadastre(&self) -> Listing {
		Listing::new(self.by_cadastre.records(&self.store).cloned().collect())
	}

	/// Snapshot of properties owned by exactly `owner`, in `(city, address)` order.
	///
	/// Matching is case-sensitive, unlike [`Self::count_by_owner`].
	pub fn iter_by_owner(&self, owner: &str) -> Listing {
		Listing::new(
			self.by_address
				.records(&self.store)
				.filter(|record| record.owner == owner)
				.cloned()
				.collect(),
		)
	}

	/// Returns the property under `key`.
	pub fn get<'k>(&self, key: impl Into<PropertyKey<'k>>) -> Option<&Record> {
		let id = self.locate(key.into())?;
		self.store.get(&id).map(Arc::as_ref)
	}

	/// Returns true if a property is registered under `key`.
	pub fn contains<'k>(&self, key: impl Into<PropertyKey<'k>>) -> bool {
		self.locate(key.into()).is_some()
	}

	/// Acquisition order the next successful transfer will receive.
	pub fn next_acquisition(&self) -> AcquisitionOrder {
		AcquisitionOrder(self.next_acquisition)
	}

	pub fn len(&self) -> usize {
		self.store.len()
	}

	pub fn is_empty(&self) -> bool {
		self.store.is_empty()
	}

	/// Resolves `key` through the index matching its shape.
	fn locate(&self, key: PropertyKey<'_>) -> Option<RecordId> {
		match key {
			PropertyKey::Address { city, address } => {
				self.by_address.find(&self.store, (city, address))
			}
			PropertyKey::Cadastral { region, parcel_id } => {
				self.by_cadastre.find(&self.store, (region, parcel_id))
			}
		}
	}
}
