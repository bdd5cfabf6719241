/// Which of the two metadata universes an operation addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Universe {
	/// Class-level metadata, one record per target.
	Class,
	/// Property-level metadata, one record per target and property name.
	Property,
}

impl std::fmt::Display for Universe {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Universe::Class => write!(f, "class"),
			Universe::Property => write!(f, "class property"),
		}
	}
}

/// Lookup failures reported by the `get_*` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
	/// The namespace was never registered in this universe.
	#[error("could not find registered {universe} store: {key}")]
	NamespaceNotFound { universe: Universe, key: String },

	/// The namespace exists but nothing resolved for the target or property.
	#[error("could not find {universe} metadata in namespace {key}")]
	MetadataNotFound {
		universe: Universe,
		key: String,
		property: Option<String>,
	},
}

impl MetadataError {
	pub(crate) fn namespace_not_found(universe: Universe, key: &str) -> Self {
		Self::NamespaceNotFound {
			universe,
			key: key.to_owned(),
		}
	}

	pub(crate) fn class_not_found(key: &str) -> Self {
		Self::MetadataNotFound {
			universe: Universe::Class,
			key: key.to_owned(),
			property: None,
		}
	}

	pub(crate) fn property_not_found(key: &str, property: &str) -> Self {
		Self::MetadataNotFound {
			universe: Universe::Property,
			key: key.to_owned(),
			property: Some(property.to_owned()),
		}
	}
}

pub type Result<T> = std::result::Result<T, MetadataError>;
