//! The SBOL object model: identity fields shared by every class, extension
//! annotations, and the ordered stores that hold owned objects.

/// ComponentDefinition and its owned structural classes.
pub mod component_definition;
/// Component, FunctionalComponent, and MapsTo instance classes.
pub mod component;
/// Sequence.
pub mod sequence;
/// SequenceAnnotation and its locations.
pub mod sequence_annotation;
/// SequenceConstraint.
pub mod sequence_constraint;
/// ModuleDefinition and its owned behavioral classes.
pub mod module_definition;
/// Model.
pub mod model;
/// Collection.
pub mod collection;
/// GenericTopLevel for extension classes.
pub mod generic;
/// Attachment.
pub mod attachment;
/// Implementation.
pub mod implementation;
/// CombinatorialDerivation and VariableComponent.
pub mod combinatorial;
/// PROV-O provenance classes.
pub mod provenance;

use std::collections::BTreeMap;

use crate::config;
use crate::error::{Result, SbolError};

/// Fields common to every SBOL object.
///
/// The identity is minted at construction time and never changes; mutable
/// descriptive fields are public.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Identified {
	pub(crate) identity: String,
	pub(crate) persistent_identity: Option<String>,
	pub(crate) display_id: Option<String>,
	pub(crate) version: Option<String>,
	/// Human-readable name, serialized as the Dublin Core title.
	pub name: Option<String>,
	/// Free-text description, serialized as the Dublin Core description.
	pub description: Option<String>,
	/// Identities of objects this one was derived from.
	pub was_derived_from: Vec<String>,
	/// Identities of provenance activities that generated this object.
	pub was_generated_by: Vec<String>,
	/// Identities of file attachments associated with this object.
	pub attachments: Vec<String>,
	/// Properties outside the core data model, preserved through
	/// serialization round-trips.
	pub annotations: Vec<Annotation>,
}

impl Identified {
	/// The object's identity URI.
	pub fn identity(&self) -> &str {
		&self.identity
	}

	/// The object's displayId, present for compliant identities.
	pub fn display_id(&self) -> Option<&str> {
		self.display_id.as_deref()
	}

	/// Mints the identity fields for a new object of `class_name`.
	///
	/// In compliant mode `uri` is a displayId and the full URI is derived
	/// from the homespace; otherwise `uri` is taken verbatim.
	pub(crate) fn create(class_name: &str, uri: &str, version: &str) -> Result<Self> {
		config::validate_version(version)?;
		let mut identified = Self::default();
		if config::compliant_uris_enabled() {
			config::validate_display_id(uri)?;
			identified.identity = config::compliant_uri(class_name, uri, version);
			identified.persistent_identity = Some(config::compliant_uri(class_name, uri, ""));
			identified.display_id = Some(uri.to_string());
		} else {
			identified.identity = uri.to_string();
			identified.persistent_identity = Some(uri.to_string());
		}
		if !version.is_empty() {
			identified.version = Some(version.to_string());
		}
		Ok(identified)
	}

	/// Re-scopes a compliant identity beneath `parent`, the owner of this
	/// object. Children of an object live under its persistent identity
	/// rather than directly under the homespace.
	pub(crate) fn scope_under(&mut self, parent: &Identified) {
		let (Some(parent_pid), Some(display_id)) =
			(parent.persistent_identity.as_deref(), self.display_id.as_deref())
		else {
			return;
		};
		let pid = format!("{parent_pid}/{display_id}");
		self.identity = match self.version.as_deref() {
			Some(version) => format!("{pid}/{version}"),
			None => pid.clone(),
		};
		self.persistent_identity = Some(pid);
	}
}

/// A property outside the core data model attached to an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
	/// Full predicate URI of the property.
	pub predicate: String,
	/// The property's value.
	pub value: AnnotationValue,
}

/// The value of an extension property.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationValue {
	/// A literal string value.
	Literal(String),
	/// A reference to another resource.
	Uri(String),
	/// A nested object in a foreign namespace.
	Nested(NestedObject),
}

/// An object of a class outside the data model, kept intact so custom
/// annotations survive a read/write cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedObject {
	/// RDF type URI of the nested object.
	pub rdf_type: String,
	/// Identity URI of the nested object.
	pub identity: String,
	/// The nested object's own properties.
	pub annotations: Vec<Annotation>,
}

/// Behavior shared by every object in the data model.
pub trait SbolObject {
	/// Borrows the common identity fields.
	fn identified(&self) -> &Identified;
	/// Mutably borrows the common identity fields.
	fn identified_mut(&mut self) -> &mut Identified;

	/// The object's identity URI.
	fn identity(&self) -> &str {
		&self.identified().identity
	}

	/// The identity shared by all versions of this object.
	fn persistent_identity(&self) -> Option<&str> {
		self.identified().persistent_identity.as_deref()
	}

	/// The object's displayId, present for compliant identities.
	fn display_id(&self) -> Option<&str> {
		self.identified().display_id.as_deref()
	}

	/// The object's version string.
	fn version(&self) -> Option<&str> {
		self.identified().version.as_deref()
	}

	/// The object's human-readable name.
	fn name(&self) -> Option<&str> {
		self.identified().name.as_deref()
	}

	/// Sets the human-readable name.
	fn set_name(&mut self, name: &str) {
		self.identified_mut().name = Some(name.to_string());
	}

	/// The object's description.
	fn description(&self) -> Option<&str> {
		self.identified().description.as_deref()
	}

	/// Sets the description.
	fn set_description(&mut self, description: &str) {
		self.identified_mut().description = Some(description.to_string());
	}

	/// Attaches an extension property.
	fn add_annotation(&mut self, predicate: &str, value: AnnotationValue) {
		self.identified_mut().annotations.push(Annotation {
			predicate: predicate.to_string(),
			value,
		});
	}

	/// Returns the literal and reference values recorded for `predicate`.
	fn annotation_values(&self, predicate: &str) -> Vec<&str> {
		self.identified()
			.annotations
			.iter()
			.filter(|annotation| annotation.predicate == predicate)
			.filter_map(|annotation| match &annotation.value {
				AnnotationValue::Literal(value) | AnnotationValue::Uri(value) => Some(value.as_str()),
				AnnotationValue::Nested(_) => None,
			})
			.collect()
	}
}

/// A concrete SBOL class: ties an RDF type URI to its Rust type.
pub trait SbolClass: SbolObject + Sized {
	/// The RDF type emitted when objects of this class are serialized.
	const RDF_TYPE: &'static str;

	/// Constructs an object from a displayId (compliant mode) or full URI.
	fn with_identity(uri: &str) -> Result<Self>;

	/// The class name segment used in compliant URIs.
	fn class_name() -> &'static str {
		config::class_name_of(Self::RDF_TYPE)
	}
}

/// Marker for classes a Document holds directly.
pub trait TopLevel: SbolClass {}

/// An ordered set of objects keyed by identity.
///
/// Iteration order is identity order, which keeps serialization
/// deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectStore<T> {
	objects: BTreeMap<String, T>,
}

impl<T> Default for ObjectStore<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> ObjectStore<T> {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self { objects: BTreeMap::new() }
	}

	/// Number of objects in the store.
	pub fn len(&self) -> usize {
		self.objects.len()
	}

	/// Whether the store holds no objects.
	pub fn is_empty(&self) -> bool {
		self.objects.is_empty()
	}

	/// Iterates the stored objects in identity order.
	pub fn iter(&self) -> impl Iterator<Item = &T> {
		self.objects.values()
	}

	/// Iterates the stored objects mutably.
	pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
		self.objects.values_mut()
	}
}

impl<T: SbolClass> ObjectStore<T> {
	/// Adds an object, rejecting identity collisions.
	pub fn add(&mut self, object: T) -> Result<()> {
		let identity = object.identity().to_string();
		if self.objects.contains_key(&identity) {
			return Err(SbolError::DuplicateUri(identity));
		}
		self.objects.insert(identity, object);
		Ok(())
	}

	/// Constructs an object from `uri` (a displayId in compliant mode) and
	/// adds it, returning a mutable handle.
	pub fn create(&mut self, uri: &str) -> Result<&mut T> {
		let object = T::with_identity(uri)?;
		let identity = object.identity().to_string();
		self.add(object)?;
		Ok(self.objects.get_mut(&identity).ok_or_else(|| SbolError::NotFound(identity))?)
	}

	/// Constructs a child object scoped beneath `parent` and adds it.
	///
	/// Compliant child identities take the form
	/// `{parent persistent identity}/{displayId}/{version}`.
	pub fn create_in(&mut self, parent: &Identified, uri: &str) -> Result<&mut T> {
		let mut object = T::with_identity(uri)?;
		object.identified_mut().scope_under(parent);
		let identity = object.identity().to_string();
		self.add(object)?;
		Ok(self.objects.get_mut(&identity).ok_or_else(|| SbolError::NotFound(identity))?)
	}

	/// Whether an object with this identity, persistent identity, or
	/// displayId is present.
	pub fn contains(&self, id: &str) -> bool {
		self.get(id).is_some()
	}

	/// Looks up an object by identity, persistent identity, or displayId.
	pub fn get(&self, id: &str) -> Option<&T> {
		if let Some(object) = self.objects.get(id) {
			return Some(object);
		}
		self.objects
			.values()
			.find(|object| object.display_id() == Some(id) || object.persistent_identity() == Some(id))
	}

	/// Mutable variant of [`Self::get`].
	pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
		let identity = self.get(id)?.identity().to_string();
		self.objects.get_mut(&identity)
	}

	/// Removes an object, returning it if present.
	pub fn remove(&mut self, id: &str) -> Option<T> {
		let identity = self.get(id)?.identity().to_string();
		self.objects.remove(&identity)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::component_definition::ComponentDefinition;
	use super::*;
	use crate::config;

	#[test]
	fn compliant_identity_construction() {
		let _guard = config::test_support::lock();
		let cd = ComponentDefinition::new("BB0001").unwrap();
		assert_eq!(cd.identity(), "http://examples.org/ComponentDefinition/BB0001/1.0.0");
		assert_eq!(cd.persistent_identity(), Some("http://examples.org/ComponentDefinition/BB0001"));
		assert_eq!(cd.display_id(), Some("BB0001"));
		assert_eq!(cd.version(), Some("1.0.0"));
	}

	#[test]
	fn noncompliant_identity_is_verbatim() {
		let _guard = config::test_support::lock();
		config::set_option("sbol_compliant_uris", "false").unwrap();
		let cd = ComponentDefinition::new("http://parts.igem.org/BBa_R0010").unwrap();
		assert_eq!(cd.identity(), "http://parts.igem.org/BBa_R0010");
		assert_eq!(cd.display_id(), None);
		config::set_option("sbol_compliant_uris", "true").unwrap();
	}

	#[test]
	fn invalid_display_id_is_rejected() {
		let _guard = config::test_support::lock();
		assert!(ComponentDefinition::new("not a displayId").is_err());
	}

	#[test]
	fn store_rejects_duplicates() {
		let _guard = config::test_support::lock();
		let mut store = ObjectStore::new();
		store.add(ComponentDefinition::new("BB0001").unwrap()).unwrap();
		let duplicate = store.add(ComponentDefinition::new("BB0001").unwrap());
		assert!(matches!(duplicate, Err(SbolError::DuplicateUri(_))));
	}

	#[test]
	fn store_resolves_display_ids() {
		let _guard = config::test_support::lock();
		let mut store: ObjectStore<ComponentDefinition> = ObjectStore::new();
		store.create("BB0001").unwrap();
		assert!(store.get("BB0001").is_some());
		assert!(store.get("http://examples.org/ComponentDefinition/BB0001/1.0.0").is_some());
		assert!(store.get("http://examples.org/ComponentDefinition/BB0001").is_some());
		assert!(store.get("BB0002").is_none());
	}

	#[test]
	fn children_scope_under_parent() {
		let _guard = config::test_support::lock();
		let mut cd = ComponentDefinition::new("gene").unwrap();
		let annotation = cd.create_sequence_annotation("sa1").unwrap();
		assert_eq!(
			annotation.identity(),
			"http://examples.org/ComponentDefinition/gene/sa1/1.0.0"
		);
	}

	#[test]
	fn annotations_round_trip_accessors() {
		let _guard = config::test_support::lock();
		let mut cd = ComponentDefinition::new("annotated").unwrap();
		cd.add_annotation(
			"http://partsregistry.org/terms#partStatus",
			AnnotationValue::Literal("Released HQ".to_string()),
		);
		assert_eq!(
			cd.annotation_values("http://partsregistry.org/terms#partStatus"),
			vec!["Released HQ"]
		);
	}
}
