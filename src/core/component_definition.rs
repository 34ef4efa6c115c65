//! The structural heart of a design: ComponentDefinition.

use crate::config::VERSION_STRING;
use crate::constants::{BIOPAX_DNA, SBOL_COMPONENT_DEFINITION};
use crate::core::component::Component;
use crate::core::sequence::Sequence;
use crate::core::sequence_annotation::SequenceAnnotation;
use crate::core::sequence_constraint::SequenceConstraint;
use crate::core::{Identified, ObjectStore, SbolClass, SbolObject, TopLevel};
use crate::error::Result;

/// A ComponentDefinition describes the structure of a designed entity: a DNA
/// region, RNA, protein, small molecule, or complex. Substructure is captured
/// by Component instances, their relative order by SequenceConstraints, and
/// exact positions by SequenceAnnotations.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDefinition {
	pub(crate) ident: Identified,
	/// Molecular types, typically BioPAX terms. Defaults to DNA.
	pub types: Vec<String>,
	/// Functional roles, typically Sequence Ontology terms.
	pub roles: Vec<String>,
	/// Identities of Sequence objects specifying this definition's elements.
	pub sequences: Vec<String>,
	/// Instantiated subcomponents.
	pub components: ObjectStore<Component>,
	/// Positional annotations over the sequence.
	pub sequence_annotations: ObjectStore<SequenceAnnotation>,
	/// Ordering restrictions between subcomponents.
	pub sequence_constraints: ObjectStore<SequenceConstraint>,
}

impl ComponentDefinition {
	/// Creates a DNA-typed definition with the default version.
	pub fn new(uri: &str) -> Result<Self> {
		Self::with_type(uri, BIOPAX_DNA)
	}

	/// Creates a definition with an explicit molecular type.
	pub fn with_type(uri: &str, molecular_type: &str) -> Result<Self> {
		Self::with_type_and_version(uri, molecular_type, VERSION_STRING)
	}

	/// Creates a definition with an explicit type and version.
	pub fn with_type_and_version(uri: &str, molecular_type: &str, version: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, version)?,
			types: vec![molecular_type.to_string()],
			roles: Vec::new(),
			sequences: Vec::new(),
			components: ObjectStore::new(),
			sequence_annotations: ObjectStore::new(),
			sequence_constraints: ObjectStore::new(),
		})
	}

	/// Instantiates a subcomponent scoped under this definition.
	pub fn create_component(&mut self, uri: &str) -> Result<&mut Component> {
		self.components.create_in(&self.ident, uri)
	}

	/// Creates a positional annotation scoped under this definition.
	pub fn create_sequence_annotation(&mut self, uri: &str) -> Result<&mut SequenceAnnotation> {
		self.sequence_annotations.create_in(&self.ident, uri)
	}

	/// Creates an ordering constraint scoped under this definition.
	pub fn create_sequence_constraint(&mut self, uri: &str) -> Result<&mut SequenceConstraint> {
		self.sequence_constraints.create_in(&self.ident, uri)
	}

	/// Records `sequence` as this definition's primary sequence.
	pub fn add_sequence(&mut self, sequence: &Sequence) {
		let identity = sequence.identity().to_string();
		if !self.sequences.contains(&identity) {
			self.sequences.push(identity);
		}
	}
}

impl SbolObject for ComponentDefinition {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for ComponentDefinition {
	const RDF_TYPE: &'static str = SBOL_COMPONENT_DEFINITION;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}

impl TopLevel for ComponentDefinition {}
