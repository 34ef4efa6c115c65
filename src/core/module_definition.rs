//! ModuleDefinition and the functional layer it composes.

use crate::config::{self, VERSION_STRING};
use crate::constants::{
	SBOL_DIRECTION_IN, SBOL_DIRECTION_OUT, SBOL_INTERACTION, SBOL_MODULE,
	SBOL_MODULE_DEFINITION, SBOL_PARTICIPATION, SBO_INTERACTION,
};
use crate::core::component::{FunctionalComponent, MapsTo};
use crate::core::component_definition::ComponentDefinition;
use crate::core::model::Model;
use crate::core::{Identified, ObjectStore, SbolClass, SbolObject, TopLevel};
use crate::error::{Result, SbolError};

/// A ModuleDefinition describes a functional unit of a design: the
/// components that take part, the interactions between them, and any
/// submodules or quantitative models attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDefinition {
	pub(crate) ident: Identified,
	/// What the module is for, drawn from ontologies such as SBO.
	pub roles: Vec<String>,
	/// Identities of Models that simulate this module.
	pub models: Vec<String>,
	/// Instantiations of component definitions in a functional context.
	pub functional_components: ObjectStore<FunctionalComponent>,
	/// Submodule instantiations.
	pub modules: ObjectStore<Module>,
	/// Interactions between the functional components.
	pub interactions: ObjectStore<Interaction>,
}

impl ModuleDefinition {
	/// Creates an empty module definition.
	pub fn new(uri: &str) -> Result<Self> {
		Self::with_version(uri, VERSION_STRING)
	}

	/// Creates an empty module definition with an explicit version.
	pub fn with_version(uri: &str, version: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, version)?,
			roles: Vec::new(),
			models: Vec::new(),
			functional_components: ObjectStore::new(),
			modules: ObjectStore::new(),
			interactions: ObjectStore::new(),
		})
	}

	/// Creates a FunctionalComponent scoped under this definition.
	pub fn create_functional_component(&mut self, uri: &str) -> Result<&mut FunctionalComponent> {
		self.functional_components.create_in(&self.ident, uri)
	}

	/// Creates a submodule instantiation scoped under this definition.
	pub fn create_module(&mut self, uri: &str) -> Result<&mut Module> {
		self.modules.create_in(&self.ident, uri)
	}

	/// Creates an Interaction scoped under this definition.
	pub fn create_interaction(&mut self, uri: &str) -> Result<&mut Interaction> {
		self.interactions.create_in(&self.ident, uri)
	}

	/// Marks a component definition as an input of this module by
	/// instantiating it as a FunctionalComponent with inward direction.
	pub fn set_input(&mut self, input: &ComponentDefinition) -> Result<&mut FunctionalComponent> {
		self.instantiate_port(input, SBOL_DIRECTION_IN)
	}

	/// Marks a component definition as an output of this module by
	/// instantiating it as a FunctionalComponent with outward direction.
	pub fn set_output(&mut self, output: &ComponentDefinition) -> Result<&mut FunctionalComponent> {
		self.instantiate_port(output, SBOL_DIRECTION_OUT)
	}

	fn instantiate_port(
		&mut self,
		definition: &ComponentDefinition,
		direction: &str,
	) -> Result<&mut FunctionalComponent> {
		let Some(display_id) = definition.display_id() else {
			return Err(SbolError::Compliance(
				"cannot instantiate a port from a noncompliant definition".to_string(),
			));
		};
		if !config::compliant_uris_enabled() {
			return Err(SbolError::Compliance(
				"ports require compliant URIs; enable the sbol_compliant_uris option".to_string(),
			));
		}
		let display_id = display_id.to_string();
		let fc = self.create_functional_component(&display_id)?;
		fc.definition = definition.identity().to_string();
		fc.direction = direction.to_string();
		Ok(fc)
	}

	/// References a Model that simulates this module.
	pub fn add_model(&mut self, model: &Model) {
		let identity = model.identity().to_string();
		if !self.models.contains(&identity) {
			self.models.push(identity);
		}
	}
}

impl SbolObject for ModuleDefinition {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for ModuleDefinition {
	const RDF_TYPE: &'static str = SBOL_MODULE_DEFINITION;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}

impl TopLevel for ModuleDefinition {}

/// A Module instantiates another ModuleDefinition as a subsystem.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
	pub(crate) ident: Identified,
	/// Identity of the instantiated ModuleDefinition.
	pub definition: String,
	/// Mappings between this module's components and the parent's.
	pub maps_tos: ObjectStore<MapsTo>,
}

impl Module {
	/// Creates a module instantiating the given definition identity.
	pub fn new(uri: &str, definition: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			definition: definition.to_string(),
			maps_tos: ObjectStore::new(),
		})
	}

	/// Creates a MapsTo scoped under this module.
	pub fn create_maps_to(&mut self, uri: &str) -> Result<&mut MapsTo> {
		self.maps_tos.create_in(&self.ident, uri)
	}
}

impl SbolObject for Module {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Module {
	const RDF_TYPE: &'static str = SBOL_MODULE;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri, "")
	}
}

/// An Interaction captures how functional components affect one another,
/// typed by systems biology ontology terms such as inhibition or genetic
/// production.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
	pub(crate) ident: Identified,
	/// The kinds of interaction. Defaults to the generic SBO interaction.
	pub types: Vec<String>,
	/// The components taking part and their roles.
	pub participations: ObjectStore<Participation>,
}

impl Interaction {
	/// Creates an interaction of the generic SBO type.
	pub fn new(uri: &str) -> Result<Self> {
		Self::with_type(uri, SBO_INTERACTION)
	}

	/// Creates an interaction of the given SBO type.
	pub fn with_type(uri: &str, interaction_type: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			types: vec![interaction_type.to_string()],
			participations: ObjectStore::new(),
		})
	}

	/// Creates a Participation scoped under this interaction.
	pub fn create_participation(&mut self, uri: &str) -> Result<&mut Participation> {
		self.participations.create_in(&self.ident, uri)
	}
}

impl SbolObject for Interaction {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Interaction {
	const RDF_TYPE: &'static str = SBOL_INTERACTION;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}

/// A Participation names the role one functional component plays inside an
/// interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Participation {
	pub(crate) ident: Identified,
	/// How the participant behaves, drawn from SBO.
	pub roles: Vec<String>,
	/// Identity of the participating FunctionalComponent.
	pub participant: String,
}

impl Participation {
	/// Creates a participation with no roles.
	pub fn new(uri: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			roles: Vec::new(),
			participant: String::new(),
		})
	}
}

impl SbolObject for Participation {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Participation {
	const RDF_TYPE: &'static str = SBOL_PARTICIPATION;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}
