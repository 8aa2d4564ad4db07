//! Property records and the key shapes used to address them.

use std::fmt;

use crate::index::KeyKind;

/// Sequence number handed out by a successful ownership transfer.
///
/// Orders are strictly increasing within one registry and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AcquisitionOrder(pub(crate) u64);

impl AcquisitionOrder {
	/// Returns the raw sequence number.
	#[inline]
	pub fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for AcquisitionOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Store slot identifier. Assigned from a monotonic counter, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct RecordId(pub(crate) u64);

/// One registered property.
///
/// Key fields are fixed at creation. Only the owner and the acquisition order
/// change over the life of a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
	pub(crate) city: String,
	pub(crate) address: String,
	pub(crate) region: String,
	pub(crate) parcel_id: u64,
	/// Empty means no owner has been assigned.
	pub(crate) owner: String,
	pub(crate) acquisition: Option<AcquisitionOrder>,
}

impl Record {
	pub(crate) fn new(city: &str, address: &str, region: &str, parcel_id: u64) -> Self {
		Self {
			city: city.to_owned(),
			address: address.to_owned(),
			region: region.to_owned(),
			parcel_id,
			owner: String::new(),
			acquisition: None,
		}
	}

	pub fn city(&self) -> &str {
		&self.city
	}

	pub fn address(&self) -> &str {
		&self.address
	}

	pub fn region(&self) -> &str {
		&self.region
	}

	pub fn parcel_id(&self) -> u64 {
		self.parcel_id
	}

	/// Current owner; empty when none was ever assigned.
	pub fn owner(&self) -> &str {
		&self.owner
	}

	/// Order of the last transfer, `None` if the record was never transferred.
	pub fn acquisition(&self) -> Option<AcquisitionOrder> {
		self.acquisition
	}

	/// The `(city, address)` key of this record.
	pub fn address_key(&self) -> PropertyKey<'_> {
		PropertyKey::address(&self.city, &self.address)
	}

	/// The `(region, parcel_id)` key of this record.
	pub fn cadastral_key(&self) -> PropertyKey<'_> {
		PropertyKey::cadastral(&self.region, self.parcel_id)
	}
}

/// Either of the two unique keys of a record.
///
/// Tuples convert directly: `("Prague", "Thakurova")` is an address key and
/// `("Dejvice", 12345u64)` a cadastral key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKey<'a> {
	/// `(city, address)`.
	Address { city: &'a str, address: &'a str },
	/// `(region, parcel_id)`.
	Cadastral { region: &'a str, parcel_id: u64 },
}

impl<'a> PropertyKey<'a> {
	#[inline]
	pub fn address(city: &'a str, address: &'a str) -> Self {
		Self::Address { city, address }
	}

	#[inline]
	pub fn cadastral(region: &'a str, parcel_id: u64) -> Self {
		Self::Cadastral { region, parcel_id }
	}

	/// Which index answers lookups for this key.
	pub fn kind(&self) -> KeyKind {
		match self {
			Self::Address { .. } => KeyKind::Address,
			Self::Cadastral { .. } => KeyKind::Cadastral,
		}
	}
}

impl fmt::Display for PropertyKey<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Address { city, address } => write!(f, "{city:?}/{address:?}"),
			Self::Cadastral { region, parcel_id } => write!(f, "{region:?}#{parcel_id}"),
		}
	}
}

impl<'a> From<(&'a str, &'a str)> for PropertyKey<'a> {
	fn from((city, address): (&'a str, &'a str)) -> Self {
		Self::address(city, address)
	}
}

impl<'a> From<(&'a str, u64)> for PropertyKey<'a> {
	fn from((region, parcel_id): (&'a str, u64)) -> Self {
		Self::cadastral(region, parcel_id)
	}
}
