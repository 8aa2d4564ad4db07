//! Errors returned by registry operations.

use thiserror::Error;

use crate::index::KeyKind;
use crate::record::PropertyKey;

/// Why a registry operation was not applied.
///
/// Every variant is a recoverable outcome; the registry is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
	/// Another record already uses this `(city, address)`.
	#[error("address already registered: city={city:?} address={address:?}")]
	DuplicateAddress { city: String, address: String },

	/// Another record already uses this `(region, parcel_id)`.
	#[error("parcel already registered: region={region:?} parcel_id={parcel_id}")]
	DuplicateCadastral { region: String, parcel_id: u64 },

	/// No record matches the key.
	#[error("no property under {kind} key {key}")]
	NotFound { kind: KeyKind, key: String },

	/// The transfer target already owns the record.
	#[error("property already owned by {owner:?}")]
	OwnerUnchanged { owner: String },

	/// The acquisition counter has no further values to hand out.
	#[error("acquisition counter exhausted at {at}")]
	AcquisitionExhausted { at: u64 },
}

impl RegistryError {
	pub(crate) fn not_found(key: PropertyKey<'_>) -> Self {
		Self::NotFound {
			kind: key.kind(),
			key: key.to_string(),
		}
	}
}

pub type Result<T> = std::result::Result<T, RegistryError>;
