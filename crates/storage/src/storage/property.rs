use std::sync::Arc;

use tracing::trace;

use super::{MetadataStorage, PropertyMap, PropertyStore, ensure_namespace};
use crate::Target;
use crate::error::{MetadataError, Result, Universe};
use crate::metadata::ClassPropertyMetadata;

impl<T: Target, C, P> MetadataStorage<T, C, P> {
	/// Stores `metadata` under `key`, replacing any record with the same
	/// target and property name.
	///
	/// Registers `key` if needed. The target is used exactly as given. A
	/// replaced property keeps its original position.
	pub fn add_property_metadata(&self, key: &str, metadata: ClassPropertyMetadata<T, P>) {
		let mut universe = self.inner.properties.write();
		let store = ensure_namespace(&mut *universe, key, self.label(), Universe::Property);

		let target = metadata.target;
		let properties = store.entry(target).or_default();
		let action = Self::PROPERTY_WRITE_POLICY
			.action_for(properties.contains_key(metadata.property_name.as_str()));

		trace!(
			registry = self.label(),
			namespace = key,
			?target,
			property = %metadata.property_name,
			?action,
			"property metadata write"
		);

		if action.stores_new() {
			properties.insert(metadata.property_name.clone(), Arc::new(metadata));
		}
	}

	/// Returns the record for `property_name` on the ancestor of `target`.
	pub fn get_property_metadata(
		&self,
		key: &str,
		target: T,
		property_name: &str,
	) -> Result<Arc<ClassPropertyMetadata<T, P>>> {
		let universe = self.inner.properties.read();
		let store = universe
			.get(key)
			.ok_or_else(|| MetadataError::namespace_not_found(Universe::Property, key))?;

		resolve_ancestor_only(store, target)
			.and_then(|properties| properties.get(property_name))
			.cloned()
			.ok_or_else(|| MetadataError::property_not_found(key, property_name))
	}

	/// Returns every property record for `target`, in insertion order.
	///
	/// Uses the records stored for `target` itself when there are any, and
	/// falls back to its ancestor otherwise. Yields an empty vector when
	/// neither has records.
	pub fn get_property_metadatas(
		&self,
		key: &str,
		target: T,
	) -> Result<Vec<Arc<ClassPropertyMetadata<T, P>>>> {
		let universe = self.inner.properties.read();
		let store = universe
			.get(key)
			.ok_or_else(|| MetadataError::namespace_not_found(Universe::Property, key))?;

		Ok(resolve_exact_then_ancestor(store, target)
			.map(|properties| properties.values().cloned().collect())
			.unwrap_or_default())
	}

	/// Returns true if `target` itself carries `property_name` under `key`.
	///
	/// No ancestor step is taken.
	pub fn has_property_metadata(&self, key: &str, target: T, property_name: &str) -> bool {
		let universe = self.inner.properties.read();
		let Some(store) = universe.get(key) else {
			return false;
		};
		resolve_exact_only(store, target)
			.is_some_and(|properties| properties.contains_key(property_name))
	}
}

fn resolve_ancestor_only<T: Target, P>(
	store: &PropertyStore<T, P>,
	target: T,
) -> Option<&PropertyMap<T, P>> {
	store.get(&target.ancestor()?)
}

fn resolve_exact_only<T: Target, P>(
	store: &PropertyStore<T, P>,
	target: T,
) -> Option<&PropertyMap<T, P>> {
	store.get(&target)
}

fn resolve_exact_then_ancestor<T: Target, P>(
	store: &PropertyStore<T, P>,
	target: T,
) -> Option<&PropertyMap<T, P>> {
	match store.get(&target) {
		Some(properties) => Some(properties),
		None => store.get(&target.ancestor()?),
	}
}
