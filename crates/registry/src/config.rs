/// Construction parameters for a [`Registry`](crate::Registry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
	/// Reported as the `registry` field of every log event.
	pub label: &'static str,
	/// Number of records the store and both indexes are pre-sized for.
	pub capacity: usize,
	/// Acquisition order handed to the first successful transfer.
	pub first_acquisition: u64,
}

impl Default for RegistryConfig {
	fn default() -> Self {
		Self {
			label: "cadastre",
			capacity: 0,
			first_acquisition: 1,
		}
	}
}

impl RegistryConfig {
	pub fn with_label(mut self, label: &'static str) -> Self {
		self.label = label;
		self
	}

	pub fn with_capacity(mut self, capacity: usize) -> Self {
		self.capacity = capacity;
		self
	}

	pub fn with_first_acquisition(mut self, first: u64) -> Self {
		self.first_acquisition = first;
		self
	}
}
