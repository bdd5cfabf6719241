/// Construction-time settings for a [`MetadataStorage`](crate::MetadataStorage).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageOptions {
	/// Name attached to every log event from this storage.
	pub label: &'static str,
}

impl StorageOptions {
	pub const fn new(label: &'static str) -> Self {
		Self { label }
	}
}

impl Default for StorageOptions {
	fn default() -> Self {
		Self::new("metadata")
	}
}
