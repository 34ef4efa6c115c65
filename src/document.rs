//! Document, the in-memory container for a set of top level objects.

use std::fs;
use std::path::Path;

use crate::constants::{PROV_URI, PURL_URI, RDF_URI, SBOL_URI};
use crate::core::attachment::Attachment;
use crate::core::collection::Collection;
use crate::core::combinatorial::CombinatorialDerivation;
use crate::core::component_definition::ComponentDefinition;
use crate::core::generic::GenericTopLevel;
use crate::core::implementation::Implementation;
use crate::core::model::Model;
use crate::core::module_definition::ModuleDefinition;
use crate::core::provenance::{Activity, Agent, Plan};
use crate::core::sequence::Sequence;
use crate::core::{Identified, ObjectStore, SbolObject, TopLevel};
use crate::dbtl::{Analysis, Build, Design, Test};
use crate::error::{Result, SbolError};
use crate::io;

/// A Document holds the complete object graph of a design: one store per
/// top level class, plus the namespace prefixes used when serializing.
///
/// Objects are keyed by identity URI and no identity may appear twice in a
/// document, regardless of class.
#[derive(Debug, Clone, Default)]
pub struct Document {
	/// Structural part definitions.
	pub component_definitions: ObjectStore<ComponentDefinition>,
	/// Functional module definitions.
	pub module_definitions: ObjectStore<ModuleDefinition>,
	/// External quantitative models.
	pub models: ObjectStore<Model>,
	/// Raw sequences.
	pub sequences: ObjectStore<Sequence>,
	/// Groupings of other top levels.
	pub collections: ObjectStore<Collection>,
	/// Pointers to supporting files.
	pub attachments: ObjectStore<Attachment>,
	/// Templates for design variant libraries.
	pub combinatorial_derivations: ObjectStore<CombinatorialDerivation>,
	/// Realized physical constructs.
	pub implementations: ObjectStore<Implementation>,
	/// Provenance activities.
	pub activities: ObjectStore<Activity>,
	/// Provenance agents.
	pub agents: ObjectStore<Agent>,
	/// Provenance plans.
	pub plans: ObjectStore<Plan>,
	/// Design stage objects of the design-build-test-learn cycle.
	pub designs: ObjectStore<Design>,
	/// Build stage objects.
	pub builds: ObjectStore<Build>,
	/// Test stage objects.
	pub tests: ObjectStore<Test>,
	/// Learn stage objects.
	pub analyses: ObjectStore<Analysis>,
	/// Top levels of classes outside the core data model.
	pub generic_top_levels: ObjectStore<GenericTopLevel>,
	pub(crate) namespaces: Vec<(String, String)>,
}

/// Ties a top level class to the Document store that holds it, so documents
/// can add and look up objects generically.
pub trait TopLevelStore: TopLevel {
	/// Borrows this class's store.
	fn store(document: &Document) -> &ObjectStore<Self>;
	/// Mutably borrows this class's store.
	fn store_mut(document: &mut Document) -> &mut ObjectStore<Self>;
}

macro_rules! top_level_stores {
	($($class:ty => $field:ident),* $(,)?) => {
		$(impl TopLevelStore for $class {
			fn store(document: &Document) -> &ObjectStore<Self> {
				&document.$field
			}

			fn store_mut(document: &mut Document) -> &mut ObjectStore<Self> {
				&mut document.$field
			}
		})*
	};
}

top_level_stores! {
	ComponentDefinition => component_definitions,
	ModuleDefinition => module_definitions,
	Model => models,
	Sequence => sequences,
	Collection => collections,
	Attachment => attachments,
	CombinatorialDerivation => combinatorial_derivations,
	Implementation => implementations,
	Activity => activities,
	Agent => agents,
	Plan => plans,
	Design => designs,
	Build => builds,
	Test => tests,
	Analysis => analyses,
	GenericTopLevel => generic_top_levels,
}

impl Document {
	/// Creates an empty document with the default namespace prefixes.
	pub fn new() -> Self {
		Self {
			namespaces: vec![
				("rdf".to_string(), RDF_URI.to_string()),
				("dcterms".to_string(), PURL_URI.to_string()),
				("prov".to_string(), format!("{PROV_URI}#")),
				("sbol".to_string(), format!("{SBOL_URI}#")),
			],
			..Self::default()
		}
	}

	/// Registers a namespace prefix for serialization, replacing any
	/// earlier binding of the same prefix.
	pub fn add_namespace(&mut self, prefix: &str, uri: &str) {
		if let Some(entry) = self.namespaces.iter_mut().find(|(p, _)| p == prefix) {
			entry.1 = uri.to_string();
		} else {
			self.namespaces.push((prefix.to_string(), uri.to_string()));
		}
	}

	/// The registered namespace prefixes, in declaration order.
	pub fn namespaces(&self) -> &[(String, String)] {
		&self.namespaces
	}

	/// Adds a top level object, rejecting identities already present in any
	/// store of the document.
	pub fn add<T: TopLevelStore>(&mut self, object: T) -> Result<()> {
		if self.contains(object.identity()) {
			return Err(SbolError::DuplicateUri(object.identity().to_string()));
		}
		T::store_mut(self).add(object)
	}

	/// Constructs a top level object from `uri` (a displayId in compliant
	/// mode) and adds it, returning a mutable handle.
	pub fn create<T: TopLevelStore>(&mut self, uri: &str) -> Result<&mut T> {
		let object = T::with_identity(uri)?;
		let identity = object.identity().to_string();
		self.add(object)?;
		T::store_mut(self)
			.get_mut(&identity)
			.ok_or(SbolError::NotFound(identity))
	}

	/// Looks up a top level of a known class by identity, persistent
	/// identity, or displayId.
	pub fn get<T: TopLevelStore>(&self, id: &str) -> Option<&T> {
		T::store(self).get(id)
	}

	/// Mutable variant of [`Self::get`].
	pub fn get_mut<T: TopLevelStore>(&mut self, id: &str) -> Option<&mut T> {
		T::store_mut(self).get_mut(id)
	}

	/// Whether any top level object matches `id`, in any store.
	pub fn contains(&self, id: &str) -> bool {
		self.component_definitions.contains(id)
			|| self.module_definitions.contains(id)
			|| self.models.contains(id)
			|| self.sequences.contains(id)
			|| self.collections.contains(id)
			|| self.attachments.contains(id)
			|| self.combinatorial_derivations.contains(id)
			|| self.implementations.contains(id)
			|| self.activities.contains(id)
			|| self.agents.contains(id)
			|| self.plans.contains(id)
			|| self.designs.contains(id)
			|| self.builds.contains(id)
			|| self.tests.contains(id)
			|| self.analyses.contains(id)
			|| self.generic_top_levels.contains(id)
	}

	/// Number of top level objects across all stores.
	pub fn len(&self) -> usize {
		self.counts().iter().map(|(_, count)| count).sum()
	}

	/// Whether the document holds no top level objects.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Compares the object graphs of two documents, ignoring namespace
	/// prefix bindings. Equal graphs serialize identically.
	pub fn compare(&self, other: &Self) -> bool {
		self.component_definitions == other.component_definitions
			&& self.module_definitions == other.module_definitions
			&& self.models == other.models
			&& self.sequences == other.sequences
			&& self.collections == other.collections
			&& self.attachments == other.attachments
			&& self.combinatorial_derivations == other.combinatorial_derivations
			&& self.implementations == other.implementations
			&& self.activities == other.activities
			&& self.agents == other.agents
			&& self.plans == other.plans
			&& self.designs == other.designs
			&& self.builds == other.builds
			&& self.tests == other.tests
			&& self.analyses == other.analyses
			&& self.generic_top_levels == other.generic_top_levels
	}

	/// Per-class object counts followed by a total, one line each, in the
	/// style of a registry manifest.
	pub fn summary(&self) -> String {
		let mut out = String::new();
		for (label, count) in self.counts() {
			out.push_str(&format!("{label:.<28}{count}\n"));
		}
		out.push_str("---\n");
		out.push_str(&format!("Total: {}\n", self.len()));
		out
	}

	/// Every top level object paired with its class label, in store order.
	pub fn manifest(&self) -> Vec<(&'static str, &Identified)> {
		let mut entries: Vec<(&'static str, &Identified)> = Vec::new();
		entries.extend(self.component_definitions.iter().map(|o| ("ComponentDefinition", o.identified())));
		entries.extend(self.module_definitions.iter().map(|o| ("ModuleDefinition", o.identified())));
		entries.extend(self.models.iter().map(|o| ("Model", o.identified())));
		entries.extend(self.sequences.iter().map(|o| ("Sequence", o.identified())));
		entries.extend(self.collections.iter().map(|o| ("Collection", o.identified())));
		entries.extend(self.attachments.iter().map(|o| ("Attachment", o.identified())));
		entries.extend(self.combinatorial_derivations.iter().map(|o| ("CombinatorialDerivation", o.identified())));
		entries.extend(self.implementations.iter().map(|o| ("Implementation", o.identified())));
		entries.extend(self.activities.iter().map(|o| ("Activity", o.identified())));
		entries.extend(self.agents.iter().map(|o| ("Agent", o.identified())));
		entries.extend(self.plans.iter().map(|o| ("Plan", o.identified())));
		entries.extend(self.designs.iter().map(|o| ("Design", o.identified())));
		entries.extend(self.builds.iter().map(|o| ("Build", o.identified())));
		entries.extend(self.tests.iter().map(|o| ("Test", o.identified())));
		entries.extend(self.analyses.iter().map(|o| ("Analysis", o.identified())));
		entries.extend(self.generic_top_levels.iter().map(|o| ("GenericTopLevel", o.identified())));
		entries
	}

	fn counts(&self) -> Vec<(&'static str, usize)> {
		vec![
			("ComponentDefinition", self.component_definitions.len()),
			("ModuleDefinition", self.module_definitions.len()),
			("Model", self.models.len()),
			("Sequence", self.sequences.len()),
			("Collection", self.collections.len()),
			("Attachment", self.attachments.len()),
			("CombinatorialDerivation", self.combinatorial_derivations.len()),
			("Implementation", self.implementations.len()),
			("Activity", self.activities.len()),
			("Agent", self.agents.len()),
			("Plan", self.plans.len()),
			("Design", self.designs.len()),
			("Build", self.builds.len()),
			("Test", self.tests.len()),
			("Analysis", self.analyses.len()),
			("GenericTopLevel", self.generic_top_levels.len()),
		]
	}

	/// Parses an RDF/XML file into a new document.
	pub fn read(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let xml = fs::read_to_string(path)
			.map_err(|_| SbolError::FileNotFound(path.display().to_string()))?;
		Self::read_string(&xml)
	}

	/// Parses RDF/XML text into a new document.
	pub fn read_string(xml: &str) -> Result<Self> {
		let mut document = Self::new();
		io::reader::parse_into(xml, &mut document)?;
		Ok(document)
	}

	/// Parses an RDF/XML file into this document, keeping existing objects.
	pub fn append(&mut self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		let xml = fs::read_to_string(path)
			.map_err(|_| SbolError::FileNotFound(path.display().to_string()))?;
		self.append_string(&xml)
	}

	/// Parses RDF/XML text into this document, keeping existing objects.
	pub fn append_string(&mut self, xml: &str) -> Result<()> {
		io::reader::parse_into(xml, self)
	}

	/// Serializes the document to RDF/XML.
	pub fn write_string(&self) -> Result<String> {
		io::writer::serialize(self)
	}

	/// Serializes the document to a file and returns the validation report
	/// for its contents.
	pub fn write(&self, path: impl AsRef<Path>) -> Result<String> {
		let xml = self.write_string()?;
		fs::write(path, xml)?;
		Ok(self.validation_report())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::config;
	use crate::core::SbolClass;

	#[test]
	fn create_and_get_by_display_id() {
		let _guard = config::test_support::lock();
		let mut doc = Document::new();
		doc.create::<ComponentDefinition>("TetR").unwrap();
		let cd = doc.get::<ComponentDefinition>("TetR").unwrap();
		assert_eq!(cd.display_id(), Some("TetR"));
		assert_eq!(doc.len(), 1);
	}

	#[test]
	fn duplicate_identities_rejected_across_stores() {
		let _guard = config::test_support::lock();
		config::set_option("sbol_compliant_uris", "false").unwrap();
		let mut doc = Document::new();
		let uri = "http://examples.org/everything";
		doc.add(Collection::new(uri).unwrap()).unwrap();
		let clash = doc.add(GenericTopLevel::new(uri, GenericTopLevel::RDF_TYPE).unwrap());
		assert!(matches!(clash, Err(SbolError::DuplicateUri(_))));
		config::set_option("sbol_compliant_uris", "true").unwrap();
	}

	#[test]
	fn namespace_bindings_replace_by_prefix() {
		let mut doc = Document::new();
		doc.add_namespace("igem", "http://partsregistry.org/terms#");
		doc.add_namespace("igem", "http://wiki.synbiohub.org/terms#");
		let bound = doc
			.namespaces()
			.iter()
			.filter(|(prefix, _)| prefix == "igem")
			.count();
		assert_eq!(bound, 1);
	}

	#[test]
	fn summary_counts_objects() {
		let _guard = config::test_support::lock();
		let mut doc = Document::new();
		doc.create::<ComponentDefinition>("p1").unwrap();
		doc.create::<Sequence>("p1_seq").unwrap();
		let summary = doc.summary();
		assert!(summary.contains("ComponentDefinition"));
		assert!(summary.contains("Total: 2"));
	}
}
