use std::hash::{Hash, Hasher};

use crate::Target;

/// Describes one type: its display name and the type it extends.
///
/// Descriptors are compared by address through [`TypeRef`]. Two descriptors
/// with the same name are unrelated targets.
#[derive(Debug)]
pub struct TypeDescriptor {
	name: &'static str,
	parent: Option<&'static TypeDescriptor>,
}

impl TypeDescriptor {
	/// Creates a descriptor with no supertype.
	pub const fn root(name: &'static str) -> Self {
		Self { name, parent: None }
	}

	/// Creates a descriptor extending `parent`.
	pub const fn derived(name: &'static str, parent: &'static TypeDescriptor) -> Self {
		Self {
			name,
			parent: Some(parent),
		}
	}

	/// Returns the display name.
	pub const fn name(&self) -> &'static str {
		self.name
	}

	/// Returns the supertype descriptor, if any.
	pub const fn parent(&self) -> Option<&'static TypeDescriptor> {
		self.parent
	}
}

/// Identity handle to a `'static` [`TypeDescriptor`].
///
/// Zero-cost wrapper around a static reference. Equality and hashing use the
/// descriptor's address only.
pub struct TypeRef(&'static TypeDescriptor);

impl Copy for TypeRef {}

impl Clone for TypeRef {
	fn clone(&self) -> Self {
		*self
	}
}

impl TypeRef {
	/// Creates a handle from a static descriptor.
	pub const fn new(def: &'static TypeDescriptor) -> Self {
		Self(def)
	}

	/// Returns the underlying descriptor.
	pub const fn def(self) -> &'static TypeDescriptor {
		self.0
	}

	/// Returns the descriptor's display name.
	pub const fn name(self) -> &'static str {
		self.0.name
	}

	/// Returns the handle of the supertype, if any.
	pub fn parent(self) -> Option<TypeRef> {
		self.0.parent.map(TypeRef)
	}

	/// Iterates this type and its supertypes, nearest first.
	pub fn lineage(self) -> Lineage {
		Lineage { next: Some(self) }
	}
}

impl From<&'static TypeDescriptor> for TypeRef {
	fn from(def: &'static TypeDescriptor) -> Self {
		Self(def)
	}
}

impl PartialEq for TypeRef {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.0, other.0)
	}
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
	fn hash<H: Hasher>(&self, state: &mut H) {
		std::ptr::hash(self.0, state);
	}
}

impl std::fmt::Debug for TypeRef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("TypeRef").field(&self.0.name).finish()
	}
}

impl std::fmt::Display for TypeRef {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.0.name)
	}
}

impl Target for TypeRef {
	fn ancestor(self) -> Option<Self> {
		self.parent()
	}
}

/// Iterator returned by [`TypeRef::lineage`].
#[derive(Debug, Clone)]
pub struct Lineage {
	next: Option<TypeRef>,
}

impl Iterator for Lineage {
	type Item = TypeRef;

	fn next(&mut self) -> Option<TypeRef> {
		let current = self.next?;
		self.next = current.parent();
		Some(current)
	}
}
