//! CombinatorialDerivation, a template for enumerating design variants.

use crate::config::VERSION_STRING;
use crate::constants::{SBOL_COMBINATORIAL_DERIVATION, SBOL_ONE, SBOL_VARIABLE_COMPONENT};
use crate::core::{Identified, ObjectStore, SbolClass, SbolObject, TopLevel};
use crate::error::Result;

/// A CombinatorialDerivation describes a family of designs by naming a
/// template ComponentDefinition and, per variable slot, the alternatives
/// that may fill it.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinatorialDerivation {
	pub(crate) ident: Identified,
	/// Identity of the template ComponentDefinition being varied.
	pub master_template: String,
	/// How derived designs are produced, enumerate or sample, if stated.
	pub strategy: Option<String>,
	/// The variable slots of the template.
	pub variable_components: ObjectStore<VariableComponent>,
}

impl CombinatorialDerivation {
	/// Creates a derivation over the given template identity.
	pub fn new(uri: &str, master_template: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			master_template: master_template.to_string(),
			strategy: None,
			variable_components: ObjectStore::new(),
		})
	}

	/// Creates a VariableComponent scoped under this derivation.
	pub fn create_variable_component(&mut self, uri: &str) -> Result<&mut VariableComponent> {
		self.variable_components.create_in(&self.ident, uri)
	}
}

impl SbolObject for CombinatorialDerivation {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for CombinatorialDerivation {
	const RDF_TYPE: &'static str = SBOL_COMBINATORIAL_DERIVATION;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri, "")
	}
}

impl TopLevel for CombinatorialDerivation {}

/// A VariableComponent names one variable slot of a template and the
/// definitions, collections, or further derivations that can fill it.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableComponent {
	pub(crate) ident: Identified,
	/// How many variants may fill the slot at once. Defaults to exactly one.
	pub operator: String,
	/// Identity of the template Component being varied.
	pub variable: String,
	/// Identities of ComponentDefinitions that can fill the slot.
	pub variants: Vec<String>,
	/// Identities of Collections whose members can fill the slot.
	pub variant_collections: Vec<String>,
	/// Identities of CombinatorialDerivations whose outputs can fill the slot.
	pub variant_derivations: Vec<String>,
}

impl VariableComponent {
	/// Creates a slot bound to the given template component identity.
	pub fn new(uri: &str, variable: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			operator: SBOL_ONE.to_string(),
			variable: variable.to_string(),
			variants: Vec::new(),
			variant_collections: Vec::new(),
			variant_derivations: Vec::new(),
		})
	}
}

impl SbolObject for VariableComponent {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for VariableComponent {
	const RDF_TYPE: &'static str = SBOL_VARIABLE_COMPONENT;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri, "")
	}
}
