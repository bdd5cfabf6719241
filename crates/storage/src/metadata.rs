/// Metadata attached to a whole type.
///
/// `payload` is opaque to the registry; only `target` is used as a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMetadata<T, C = ()> {
	/// The type this record describes.
	pub target: T,
	/// Caller-defined contents.
	pub payload: C,
}

impl<T, C> ClassMetadata<T, C> {
	pub fn new(target: T, payload: C) -> Self {
		Self { target, payload }
	}
}

impl<T> ClassMetadata<T> {
	/// Creates a record carrying no payload.
	pub fn marker(target: T) -> Self {
		Self { target, payload: () }
	}
}

/// Metadata attached to one named member of a type.
///
/// `target` and `property_name` together form the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPropertyMetadata<T, P = ()> {
	/// The type declaring the property.
	pub target: T,
	/// The member name.
	pub property_name: String,
	/// Caller-defined contents.
	pub payload: P,
}

impl<T, P> ClassPropertyMetadata<T, P> {
	pub fn new(target: T, property_name: impl Into<String>, payload: P) -> Self {
		Self {
			target,
			property_name: property_name.into(),
			payload,
		}
	}
}

impl<T> ClassPropertyMetadata<T> {
	/// Creates a record carrying no payload.
	pub fn marker(target: T, property_name: impl Into<String>) -> Self {
		Self::new(target, property_name, ())
	}
}
