//! Sequence: the elements a definition is made of.

use crate::config::VERSION_STRING;
use crate::constants::{SBOL_ENCODING_IUPAC, SBOL_SEQUENCE};
use crate::core::{Identified, SbolClass, SbolObject, TopLevel};
use crate::error::Result;

/// A Sequence holds the ordered elements (residues, bases, or atoms in
/// SMILES notation) of a ComponentDefinition, together with their encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
	pub(crate) ident: Identified,
	/// The sequence characters.
	pub elements: String,
	/// Encoding of the elements. Defaults to IUPAC DNA.
	pub encoding: String,
}

impl Sequence {
	/// Creates an empty IUPAC DNA sequence.
	pub fn new(uri: &str) -> Result<Self> {
		Self::with_elements(uri, "")
	}

	/// Creates an IUPAC DNA sequence with the given elements.
	pub fn with_elements(uri: &str, elements: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			elements: elements.to_string(),
			encoding: SBOL_ENCODING_IUPAC.to_string(),
		})
	}

	/// Length of the stored elements.
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	/// Whether the sequence has no elements.
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}
}

impl SbolObject for Sequence {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Sequence {
	const RDF_TYPE: &'static str = SBOL_SEQUENCE;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}

impl TopLevel for Sequence {}
