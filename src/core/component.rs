//! Component instances: the usage of one definition inside another.

use crate::config::VERSION_STRING;
use crate::constants::{
	SBOL_ACCESS_PRIVATE, SBOL_COMPONENT, SBOL_DIRECTION_NONE, SBOL_FUNCTIONAL_COMPONENT,
	SBOL_MAPS_TO, SBOL_REFINEMENT_VERIFY_IDENTICAL,
};
use crate::core::{Identified, ObjectStore, SbolClass, SbolObject};
use crate::error::Result;

/// A Component instantiates a ComponentDefinition as structural
/// substructure of another definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
	pub(crate) ident: Identified,
	/// Whether the instance may be referenced from outside its parent.
	pub access: String,
	/// Identity of the instantiated ComponentDefinition.
	pub definition: String,
	/// Identity correspondences into nested instances.
	pub maps_tos: ObjectStore<MapsTo>,
}

impl Component {
	/// Creates a private-access instance with no definition set.
	pub fn new(uri: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			access: SBOL_ACCESS_PRIVATE.to_string(),
			definition: String::new(),
			maps_tos: ObjectStore::new(),
		})
	}

	/// Creates an identity correspondence scoped under this instance.
	pub fn create_maps_to(&mut self, uri: &str) -> Result<&mut MapsTo> {
		self.maps_tos.create_in(&self.ident, uri)
	}
}

impl SbolObject for Component {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Component {
	const RDF_TYPE: &'static str = SBOL_COMPONENT;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}

/// A FunctionalComponent instantiates a ComponentDefinition inside a
/// ModuleDefinition, adding a direction for its role in module interfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionalComponent {
	pub(crate) ident: Identified,
	/// Whether the instance may be referenced from outside its parent.
	pub access: String,
	/// Identity of the instantiated ComponentDefinition.
	pub definition: String,
	/// Input/output behavior with respect to the enclosing module.
	pub direction: String,
	/// Identity correspondences into nested instances.
	pub maps_tos: ObjectStore<MapsTo>,
}

impl FunctionalComponent {
	/// Creates a private, directionless instance with no definition set.
	pub fn new(uri: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			access: SBOL_ACCESS_PRIVATE.to_string(),
			definition: String::new(),
			direction: SBOL_DIRECTION_NONE.to_string(),
			maps_tos: ObjectStore::new(),
		})
	}

	/// Creates an identity correspondence scoped under this instance.
	pub fn create_maps_to(&mut self, uri: &str) -> Result<&mut MapsTo> {
		self.maps_tos.create_in(&self.ident, uri)
	}
}

impl SbolObject for FunctionalComponent {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for FunctionalComponent {
	const RDF_TYPE: &'static str = SBOL_FUNCTIONAL_COMPONENT;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}

/// A MapsTo asserts that a local instance and an instance inside a nested
/// definition or module refer to the same entity.
#[derive(Debug, Clone, PartialEq)]
pub struct MapsTo {
	pub(crate) ident: Identified,
	/// How the two instances are reconciled.
	pub refinement: String,
	/// Instance identity in the enclosing context.
	pub local: String,
	/// Instance identity in the nested context.
	pub remote: String,
}

impl MapsTo {
	/// Creates a correspondence with the verify-identical refinement.
	pub fn new(uri: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			refinement: SBOL_REFINEMENT_VERIFY_IDENTICAL.to_string(),
			local: String::new(),
			remote: String::new(),
		})
	}
}

impl SbolObject for MapsTo {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for MapsTo {
	const RDF_TYPE: &'static str = SBOL_MAPS_TO;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}
