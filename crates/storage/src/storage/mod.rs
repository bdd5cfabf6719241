//! The registry handle and namespace bookkeeping.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;
use tracing::debug;

use crate::error::Universe;
use crate::metadata::{ClassMetadata, ClassPropertyMetadata};
use crate::options::StorageOptions;
use crate::policy::WritePolicy;
use crate::{Target, TypeRef};

mod class;
mod property;


/// Records for one namespace's class universe, keyed by target.
type ClassStore<T, C> = HashMap<T, Arc<ClassMetadata<T, C>>>;
/// Records for one target, keyed by property name in first-insertion order.
type PropertyMap<T, P> = IndexMap<String, Arc<ClassPropertyMetadata<T, P>>>;
/// Records for one namespace's property universe, keyed by target.
type PropertyStore<T, P> = HashMap<T, PropertyMap<T, P>>;

struct StorageInner<T, C, P> {
	options: StorageOptions,
	classes: RwLock<HashMap<String, ClassStore<T, C>>>,
	properties: RwLock<HashMap<String, PropertyStore<T, P>>>,
}

/// Namespaced metadata registry.
///
/// Cloning yields another handle to the same registry. Construct one
/// instance per process (or per test) and pass it to every consumer.
///
/// Each universe is guarded by its own lock, so every public operation is a
/// critical section. [`clear`](Self::clear) holds both locks at once.
pub struct MetadataStorage<T = TypeRef, C = (), P = ()> {
	inner: Arc<StorageInner<T, C, P>>,
}

impl<T, C, P> Clone for MetadataStorage<T, C, P> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<T: Target, C, P> Default for MetadataStorage<T, C, P> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T, C, P> std::fmt::Debug for MetadataStorage<T, C, P> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let class_namespaces = self.inner.classes.read().len();
		let property_namespaces = self.inner.properties.read().len();
		f.debug_struct("MetadataStorage")
			.field("label", &self.inner.options.label)
			.field("class_namespaces", &class_namespaces)
			.field("property_namespaces", &property_namespaces)
			.finish()
	}
}

impl<T: Target, C, P> MetadataStorage<T, C, P> {
	/// How repeated class writes resolve.
	pub const CLASS_WRITE_POLICY: WritePolicy = WritePolicy::FirstWins;
	/// How repeated property writes resolve.
	pub const PROPERTY_WRITE_POLICY: WritePolicy = WritePolicy::LastWins;

	/// Creates an empty registry with default options.
	pub fn new() -> Self {
		Self::with_options(StorageOptions::default())
	}

	/// Creates an empty registry with the given options.
	pub fn with_options(options: StorageOptions) -> Self {
		Self {
			inner: Arc::new(StorageInner {
				options,
				classes: RwLock::new(HashMap::default()),
				properties: RwLock::new(HashMap::default()),
			}),
		}
	}

	/// Returns the options this registry was built with.
	pub fn options(&self) -> StorageOptions {
		self.inner.options
	}

	/// Registers `key` in the class universe.
	///
	/// Returns `false` without side effects if it already exists.
	pub fn register_class_metadata_namespace(&self, key: &str) -> bool {
		let mut universe = self.inner.classes.write();
		register_namespace(&mut *universe, key, self.label(), Universe::Class)
	}

	/// Registers `key` in the property universe.
	///
	/// Returns `false` without side effects if it already exists.
	pub fn register_property_metadata_namespace(&self, key: &str) -> bool {
		let mut universe = self.inner.properties.write();
		register_namespace(&mut *universe, key, self.label(), Universe::Property)
	}

	/// Returns true if `key` is registered in the class universe.
	pub fn has_class_metadata_namespace(&self, key: &str) -> bool {
		self.inner.classes.read().contains_key(key)
	}

	/// Returns true if `key` is registered in the property universe.
	pub fn has_property_metadata_namespace(&self, key: &str) -> bool {
		self.inner.properties.read().contains_key(key)
	}

	/// Returns registered class namespaces, sorted.
	pub fn class_namespaces(&self) -> Vec<String> {
		sorted_keys(&*self.inner.classes.read())
	}

	/// Returns registered property namespaces, sorted.
	pub fn property_namespaces(&self) -> Vec<String> {
		sorted_keys(&*self.inner.properties.read())
	}

	/// Drops every namespace in both universes.
	pub fn clear(&self) {
		let mut classes = self.inner.classes.write();
		let mut properties = self.inner.properties.write();

		let dropped_classes = classes.len();
		let dropped_properties = properties.len();
		classes.clear();
		properties.clear();

		debug!(
			registry = self.label(),
			dropped_classes, dropped_properties, "metadata cleared"
		);
	}

	fn label(&self) -> &'static str {
		self.inner.options.label
	}
}

fn register_namespace<S: Default>(
	universe: &mut HashMap<String, S>,
	key: &str,
	label: &'static str,
	kind: Universe,
) -> bool {
	if universe.contains_key(key) {
		return false;
	}
	universe.insert(key.to_owned(), S::default());
	debug!(registry = label, namespace = key, universe = %kind, "namespace registered");
	true
}

/// Returns the store for `key`, registering it if absent.
fn ensure_namespace<'a, S: Default>(
	universe: &'a mut HashMap<String, S>,
	key: &str,
	label: &'static str,
	kind: Universe,
) -> &'a mut S {
	universe.entry(key.to_owned()).or_insert_with(|| {
		debug!(registry = label, namespace = key, universe = %kind, "namespace registered implicitly");
		S::default()
	})
}

fn sorted_keys<S>(universe: &HashMap<String, S>) -> Vec<String> {
	let mut keys: Vec<_> = universe.keys().cloned().collect();
	keys.sort_unstable();
	keys
}
