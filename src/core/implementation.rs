//! Implementation, a realized physical instance of a design.

use crate::config::VERSION_STRING;
use crate::constants::SBOL_IMPLEMENTATION;
use crate::core::{Identified, SbolClass, SbolObject, TopLevel};
use crate::error::Result;

/// An Implementation stands for a constructed artifact, such as a plasmid
/// in a freezer, and can point back at the design it realizes.
#[derive(Debug, Clone, PartialEq)]
pub struct Implementation {
	pub(crate) ident: Identified,
	/// Identity of the ComponentDefinition or ModuleDefinition this
	/// artifact was built from, if linked.
	pub built: Option<String>,
}

impl Implementation {
	/// Creates an implementation not yet linked to a design.
	pub fn new(uri: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			built: None,
		})
	}
}

impl SbolObject for Implementation {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Implementation {
	const RDF_TYPE: &'static str = SBOL_IMPLEMENTATION;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}

impl TopLevel for Implementation {}
