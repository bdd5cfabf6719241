//! Integration tests for the metadata registry.
//!
//! These exercise the public surface the way an annotation framework would:
//! types declared at runtime, one namespace per kind of annotation, and a
//! shared registry handle across threads.

use std::sync::{Arc, Barrier};
use std::thread;

use classmeta_storage::{
	ClassMetadata, ClassPropertyMetadata, MetadataError, MetadataStorage, StorageOptions, Universe,
};
use classmeta_types::{TypeRef, TypeTable};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
enum Rule {
	Required,
	MaxLength(usize),
}

type Registry = MetadataStorage<TypeRef, &'static str, Rule>;

#[test]
fn test_validate_scenario() {
	let types = TypeTable::new();
	let dog = types.declare("Dog", None).unwrap();
	let registry = Registry::new();

	assert!(registry.register_property_metadata_namespace("validate"));
	registry.add_property_metadata(
		"validate",
		ClassPropertyMetadata::new(dog, "name", Rule::Required),
	);

	assert!(registry.has_property_metadata("validate", dog, "name"));
	assert!(!registry.has_property_metadata("validate", dog, "age"));

	let all = registry.get_property_metadatas("validate", dog).unwrap();
	assert_eq!(all.len(), 1);
	assert_eq!(all[0].property_name, "name");
	assert_eq!(all[0].payload, Rule::Required);
}

#[test]
fn test_instance_style_lookup() {
	// Records are written against a class and read through a descriptor
	// whose single ancestor is that class.
	let types = TypeTable::new();
	let user = types.declare("User", None).unwrap();
	let user_instance = types.declare("User#instance", Some(user)).unwrap();
	let registry = Registry::with_options(StorageOptions::new("orm"));

	registry.add_class_metadata("entity", ClassMetadata::new(user, "users"));
	registry.add_property_metadata(
		"column",
		ClassPropertyMetadata::new(user, "email", Rule::MaxLength(255)),
	);

	assert_eq!(
		registry
			.get_class_metadata("entity", user_instance)
			.unwrap()
			.payload,
		"users"
	);
	assert_eq!(
		registry
			.get_property_metadata("column", user_instance, "email")
			.unwrap()
			.payload,
		Rule::MaxLength(255)
	);
	assert!(registry.has_property_metadata("column", user, "email"));
	assert_eq!(
		registry.get_property_metadatas("column", user_instance).unwrap().len(),
		1
	);
}

#[test]
fn test_unknown_namespace_errors() {
	let registry = Registry::new();
	let dog = TypeTable::new().declare("Dog", None).unwrap();

	let err = registry.get_class_metadata("entity", dog).unwrap_err();
	assert_eq!(
		err,
		MetadataError::NamespaceNotFound {
			universe: Universe::Class,
			key: "entity".into(),
		}
	);
	assert_eq!(err.to_string(), "could not find registered class store: entity");

	let err = registry.get_property_metadatas("validate", dog).unwrap_err();
	assert_eq!(
		err.to_string(),
		"could not find registered class property store: validate"
	);
}

#[test]
fn test_concurrent_first_write_wins() {
	let types = TypeTable::new();
	let base = types.declare("Base", None).unwrap();
	let derived = types.declare("Derived", Some(base)).unwrap();
	let registry = Registry::new();

	const WRITERS: usize = 8;
	let barrier = Arc::new(Barrier::new(WRITERS));
	let payloads = ["a", "b", "c", "d", "e", "f", "g", "h"];

	let handles: Vec<_> = payloads
		.into_iter()
		.map(|payload| {
			let registry = registry.clone();
			let barrier = Arc::clone(&barrier);
			thread::spawn(move || {
				barrier.wait();
				registry.add_class_metadata("entity", ClassMetadata::new(base, payload));
				registry.add_property_metadata(
					"validate",
					ClassPropertyMetadata::new(base, payload, Rule::Required),
				);
			})
		})
		.collect();
	for handle in handles {
		handle.join().unwrap();
	}

	// Exactly one class write landed and it never changes afterwards.
	let winner = registry.get_class_metadata("entity", derived).unwrap();
	assert!(payloads.contains(&winner.payload));
	registry.add_class_metadata("entity", ClassMetadata::new(base, "late"));
	assert!(Arc::ptr_eq(
		&winner,
		&registry.get_class_metadata("entity", derived).unwrap()
	));

	// Every property write landed under its own name.
	assert_eq!(
		registry.get_property_metadatas("validate", base).unwrap().len(),
		WRITERS
	);
}

#[test]
fn test_clear_is_atomic_across_universes() {
	let types = TypeTable::new();
	let base = types.declare("Base", None).unwrap();
	let derived = types.declare("Derived", Some(base)).unwrap();
	let registry = Registry::new();

	let writer = {
		let registry = registry.clone();
		thread::spawn(move || {
			for _ in 0..1_000 {
				registry.add_class_metadata("entity", ClassMetadata::new(base, "x"));
				registry.add_property_metadata(
					"validate",
					ClassPropertyMetadata::new(base, "id", Rule::Required),
				);
			}
		})
	};

	for _ in 0..100 {
		registry.clear();
		// Readers only ever see complete states, never a panic or torn map.
		let _ = registry.has_class_metadata("entity", derived);
		let _ = registry.get_property_metadatas("validate", base);
	}
	writer.join().unwrap();

	registry.clear();
	assert!(!registry.has_class_metadata("entity", derived));
	assert!(!registry.has_property_metadata("validate", base, "id"));
	assert!(registry.register_class_metadata_namespace("entity"));
}
