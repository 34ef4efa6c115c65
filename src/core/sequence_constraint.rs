//! SequenceConstraint, a relative ordering assertion between components.

use crate::config::VERSION_STRING;
use crate::constants::{SBOL_RESTRICTION_PRECEDES, SBOL_SEQUENCE_CONSTRAINT};
use crate::core::{Identified, SbolClass, SbolObject};
use crate::error::Result;

/// A SequenceConstraint asserts how two sibling Components relate when their
/// exact positions are unknown, for example that one precedes the other.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceConstraint {
	pub(crate) ident: Identified,
	/// Identity of the Component the restriction applies to.
	pub subject: String,
	/// Identity of the Component the subject is constrained against.
	pub object: String,
	/// The kind of restriction. Defaults to precedes.
	pub restriction: String,
}

impl SequenceConstraint {
	/// Creates a precedes constraint between two component identities.
	pub fn new(uri: &str, subject: &str, object: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			subject: subject.to_string(),
			object: object.to_string(),
			restriction: SBOL_RESTRICTION_PRECEDES.to_string(),
		})
	}
}

impl SbolObject for SequenceConstraint {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for SequenceConstraint {
	const RDF_TYPE: &'static str = SBOL_SEQUENCE_CONSTRAINT;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri, "", "")
	}
}
