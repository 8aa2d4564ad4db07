//! In-memory land register with two unique keys per property.
//!
//! Every property is addressable by its `(city, address)` and by its `(region, parcel_id)`.
//! The [`Registry`] keeps one copy of each [`Record`] and two sorted indexes over it, one per
//! key, so lookups, insertion points and removals are found by binary search.
//!
//! # Operations
//!
//! | Operation | Key shape | Fails when |
//! |-----------|-----------|------------|
//! | [`Registry::add`] | both | either key is taken |
//! | [`Registry::remove`] | either | no match |
//! | [`Registry::owner`] | either | no match |
//! | [`Registry::transfer`] | either | no match, or owner unchanged |
//! | [`Registry::count_by_owner`] | - | never |
//! | [`Registry::iter_by_address`], [`Registry::iter_by_owner`] | - | never |
//!
//! Failures are reported as [`RegistryError`] and never leave partial state behind.
//!
//! # Listings
//!
//! Iteration returns a [`Listing`]: a snapshot taken at call time. Mutations made afterwards are
//! not reflected in it.
//!
//! ```
//! use cadastre_registry::Registry;
//!
//! let mut reg = Registry::new();
//! reg.add("Prague", "Thakurova", "Dejvice", 12345).unwrap();
//! reg.add("Liberec", "Evropska", "Librec", 4552).unwrap();
//! reg.transfer(("Dejvice", 12345u64), "Alice").unwrap();
//!
//! let mut listing = reg.iter_by_address();
//! assert_eq!(listing.city(), "Liberec");
//! listing.advance();
//! assert_eq!(listing.owner(), "Alice");
//! assert_eq!(reg.count_by_owner("ALICE"), 1);
//! ```

mod config;
mod error;
mod index;
mod listing;
mod record;
mod registry;

pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use index::KeyKind;
pub use listing::Listing;
pub use record::{AcquisitionOrder, PropertyKey, Record};
pub use registry::Registry;
