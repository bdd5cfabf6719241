//! Target identities for the metadata registry.
//!
//! Metadata is keyed by the identity of a type descriptor, never by its
//! contents. This crate provides:
//! - [`Target`]: the trait every storage key implements
//! - [`TypeDescriptor`]: a `'static` descriptor with an optional supertype
//! - [`TypeRef`]: a pointer-identity handle to a descriptor
//! - [`TypeTable`]: runtime declaration of descriptors by name

use std::fmt::Debug;
use std::hash::Hash;

/// Static type descriptors and their identity handle.
pub mod descriptor;
/// Runtime descriptor declarations.
pub mod table;

pub use descriptor::{Lineage, TypeDescriptor, TypeRef};
pub use table::{TypeError, TypeTable};

/// An identity-comparable key that metadata can be attached to.
///
/// Two values are the same target only if they denote the identical
/// descriptor. Implementations must not compare structurally.
pub trait Target: Copy + Eq + Hash + Debug + Send + Sync + 'static {
	/// Returns the immediate supertype, if any.
	///
	/// This is a single step. Callers that resolve through the ancestor do
	/// exactly one hop and never walk further.
	fn ancestor(self) -> Option<Self>;
}
