use std::sync::Arc;

use tracing::trace;

use super::{MetadataStorage, ensure_namespace};
use crate::Target;
use crate::error::{MetadataError, Result, Universe};
use crate::metadata::ClassMetadata;

impl<T: Target, C, P> MetadataStorage<T, C, P> {
	/// Stores `metadata` under `key` unless its target already has a record.
	///
	/// Registers `key` if needed. A second write for the same target is
	/// ignored; the first record stays.
	pub fn add_class_metadata(&self, key: &str, metadata: ClassMetadata<T, C>) {
		let mut universe = self.inner.classes.write();
		let store = ensure_namespace(&mut *universe, key, self.label(), Universe::Class);

		let target = metadata.target;
		let action = Self::CLASS_WRITE_POLICY.action_for(store.contains_key(&target));
		if action.stores_new() {
			store.insert(target, Arc::new(metadata));
		}

		trace!(registry = self.label(), namespace = key, ?target, ?action, "class metadata write");
	}

	/// Returns the record stored for the ancestor of `target`.
	///
	/// The lookup always uses `target.ancestor()`, never `target` itself.
	pub fn get_class_metadata(&self, key: &str, target: T) -> Result<Arc<ClassMetadata<T, C>>> {
		let universe = self.inner.classes.read();
		let store = universe
			.get(key)
			.ok_or_else(|| MetadataError::namespace_not_found(Universe::Class, key))?;

		target
			.ancestor()
			.and_then(|lookup| store.get(&lookup))
			.cloned()
			.ok_or_else(|| MetadataError::class_not_found(key))
	}

	/// Like [`get_class_metadata`](Self::get_class_metadata), but reports
	/// any miss as `false`.
	pub fn has_class_metadata(&self, key: &str, target: T) -> bool {
		let universe = self.inner.classes.read();
		let Some(store) = universe.get(key) else {
			return false;
		};
		target.ancestor().is_some_and(|lookup| store.contains_key(&lookup))
	}
}
