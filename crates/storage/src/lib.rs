//! Namespaced metadata registry for types and their properties.
//!
//! Annotation mechanisms attach records to type descriptors under a
//! namespace key of their choosing; consumers later ask whether a type, or
//! a named property of a type, carries a record in that namespace.
//!
//! - [`MetadataStorage`]: the registry handle, cheap to clone and share
//! - [`ClassMetadata`] / [`ClassPropertyMetadata`]: stored records
//! - [`MetadataError`]: lookup failures
//! - [`WritePolicy`] / [`InsertAction`]: how repeated writes resolve
//!
//! # Resolution rules
//!
//! | operation | target used |
//! |-----------|-------------|
//! | `add_class_metadata`, `add_property_metadata` | as given |
//! | `get_class_metadata`, `has_class_metadata` | ancestor only |
//! | `get_property_metadata` | ancestor only |
//! | `has_property_metadata` | as given only |
//! | `get_property_metadatas` | as given, else ancestor |
//!
//! The ancestor is always exactly one step up; lookups never walk further.

pub use classmeta_types::{Target, TypeDescriptor, TypeRef};

mod error;
mod metadata;
mod options;
mod policy;
mod storage;

pub use error::{MetadataError, Result, Universe};
pub use metadata::{ClassMetadata, ClassPropertyMetadata};
pub use options::StorageOptions;
pub use policy::{InsertAction, WritePolicy};
pub use storage::MetadataStorage;
