use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;
use tracing::debug;

use crate::descriptor::{TypeDescriptor, TypeRef};

/// Errors from runtime type declaration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
	/// A descriptor with this name was already declared in the table.
	#[error("type already declared: {0}")]
	AlreadyDeclared(String),
}

/// Runtime table of type descriptors, keyed by name.
///
/// Declared descriptors are leaked and live for the rest of the process, so
/// the returned [`TypeRef`]s stay valid after the table is dropped. Names are
/// unique within one table; separate tables may reuse a name, and the
/// resulting descriptors are distinct targets.
#[derive(Debug, Default, Clone)]
pub struct TypeTable {
	inner: Arc<RwLock<HashMap<&'static str, TypeRef>>>,
}

impl TypeTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Declares a new descriptor named `name` extending `parent`.
	pub fn declare(&self, name: &str, parent: Option<TypeRef>) -> Result<TypeRef, TypeError> {
		let mut types = self.inner.write();
		if types.contains_key(name) {
			return Err(TypeError::AlreadyDeclared(name.to_string()));
		}

		let name: &'static str = Box::leak(name.to_owned().into_boxed_str());
		let def: &'static TypeDescriptor = Box::leak(Box::new(match parent {
			Some(parent) => TypeDescriptor::derived(name, parent.def()),
			None => TypeDescriptor::root(name),
		}));
		let ty = TypeRef::new(def);
		types.insert(name, ty);

		debug!(name, parent = ?parent, "type declared");
		Ok(ty)
	}

	/// Returns the descriptor declared under `name`.
	pub fn get(&self, name: &str) -> Option<TypeRef> {
		self.inner.read().get(name).copied()
	}

	/// Returns the number of declared descriptors.
	pub fn len(&self) -> usize {
		self.inner.read().len()
	}

	/// Returns true if nothing has been declared.
	pub fn is_empty(&self) -> bool {
		self.inner.read().is_empty()
	}

	/// Returns declared names, sorted.
	pub fn names(&self) -> Vec<&'static str> {
		let mut names: Vec<_> = self.inner.read().keys().copied().collect();
		names.sort_unstable();
		names
	}
}
