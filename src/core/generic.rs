//! GenericTopLevel, the catch-all for top level objects of foreign types.

use crate::config::VERSION_STRING;
use crate::constants::SBOL_GENERIC_TOP_LEVEL;
use crate::core::{Identified, SbolClass, SbolObject, TopLevel};
use crate::error::Result;

/// A GenericTopLevel holds a top level object whose RDF type is not part of
/// the core data model. Its properties live entirely in annotations, so
/// foreign data survives a read and write unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericTopLevel {
	pub(crate) ident: Identified,
	/// The RDF type this object serializes under.
	pub rdf_type: String,
}

impl GenericTopLevel {
	/// Creates a generic top level of the given RDF type.
	pub fn new(uri: &str, rdf_type: &str) -> Result<Self> {
		let class_name = crate::config::class_name_of(rdf_type).to_string();
		Ok(Self {
			ident: Identified::create(&class_name, uri, VERSION_STRING)?,
			rdf_type: rdf_type.to_string(),
		})
	}
}

impl SbolObject for GenericTopLevel {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for GenericTopLevel {
	const RDF_TYPE: &'static str = SBOL_GENERIC_TOP_LEVEL;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri, SBOL_GENERIC_TOP_LEVEL)
	}
}

impl TopLevel for GenericTopLevel {}
