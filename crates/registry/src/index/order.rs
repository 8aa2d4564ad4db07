//! Composite key orders.

use std::fmt;

use crate::Record;

/// The two key shapes a record can be addressed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
	/// `(city, address)`.
	Address,
	/// `(region, parcel_id)`.
	Cadastral,
}

impl fmt::Display for KeyKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Address => write!(f, "address"),
			Self::Cadastral => write!(f, "cadastral"),
		}
	}
}

/// A total order over records, defined by a borrowed composite key.
///
/// `Probe` is the key as callers supply it, so lookups do not allocate.
pub(crate) trait KeyOrder {
	type Probe<'a>: Copy + Ord + fmt::Debug;

	const KIND: KeyKind;

	fn probe(record: &Record) -> Self::Probe<'_>;
}

/// Lexicographic by city, then address.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ByAddress;

impl KeyOrder for ByAddress {
	type Probe<'a> = (&'a str, &'a str);

	const KIND: KeyKind = KeyKind::Address;

	#[inline]
	fn probe(record: &Record) -> Self::Probe<'_> {
		(record.city.as_str(), record.address.as_str())
	}
}

/// Lexicographic by region, then numeric by parcel id.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ByCadastre;

impl KeyOrder for ByCadastre {
	type Probe<'a> = (&'a str, u64);

	const KIND: KeyKind = KeyKind::Cadastral;

	#[inline]
	fn probe(record: &Record) -> Self::Probe<'_> {
		(record.region.as_str(), record.parcel_id)
	}
}
