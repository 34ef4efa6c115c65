//! Collection, an unordered grouping of top level objects.

use crate::config::VERSION_STRING;
use crate::constants::SBOL_COLLECTION;
use crate::core::{Identified, SbolClass, SbolObject, TopLevel};
use crate::error::Result;

/// A Collection groups arbitrary top level objects under one identity, for
/// example the parts making up a library or the files of an experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
	pub(crate) ident: Identified,
	/// Identities of the collected top level objects.
	pub members: Vec<String>,
}

impl Collection {
	/// Creates an empty collection.
	pub fn new(uri: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			members: Vec::new(),
		})
	}

	/// Adds a member identity, ignoring repeats.
	pub fn add_member(&mut self, identity: &str) {
		if !self.members.iter().any(|member| member == identity) {
			self.members.push(identity.to_string());
		}
	}
}

impl SbolObject for Collection {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Collection {
	const RDF_TYPE: &'static str = SBOL_COLLECTION;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}

impl TopLevel for Collection {}
