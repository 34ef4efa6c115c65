//! Model, a pointer to an external quantitative description of a module.

use crate::config::VERSION_STRING;
use crate::constants::{EDAM_SBML, SBOL_MODEL, SBO_CONTINUOUS};
use crate::core::{Identified, SbolClass, SbolObject, TopLevel};
use crate::error::Result;

/// A Model links a design to a simulatable description hosted elsewhere,
/// recording where it lives, what language it is written in, and the
/// modeling framework it assumes.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
	pub(crate) ident: Identified,
	/// Where the model file can be fetched from.
	pub source: String,
	/// The language of the model. Defaults to SBML.
	pub language: String,
	/// The modeling framework. Defaults to continuous.
	pub framework: String,
}

impl Model {
	/// Creates a continuous SBML model with an empty source.
	pub fn new(uri: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			source: String::new(),
			language: EDAM_SBML.to_string(),
			framework: SBO_CONTINUOUS.to_string(),
		})
	}
}

impl SbolObject for Model {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Model {
	const RDF_TYPE: &'static str = SBOL_MODEL;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}

impl TopLevel for Model {}
