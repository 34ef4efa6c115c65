//! Attachment, a pointer to a supporting file.

use crate::config::VERSION_STRING;
use crate::constants::SBOL_ATTACHMENT;
use crate::core::{Identified, SbolClass, SbolObject, TopLevel};
use crate::error::Result;

/// An Attachment records a file associated with a design, such as a gel
/// image or a datasheet, along with optional format and integrity metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
	pub(crate) ident: Identified,
	/// Where the file lives.
	pub source: String,
	/// The file format as an EDAM term, if known.
	pub format: Option<String>,
	/// The file size in bytes, if known.
	pub size: Option<i64>,
	/// A hash of the file contents, if known.
	pub hash: Option<String>,
}

impl Attachment {
	/// Creates an attachment pointing at the given source.
	pub fn new(uri: &str, source: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			source: source.to_string(),
			format: None,
			size: None,
			hash: None,
		})
	}
}

impl SbolObject for Attachment {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Attachment {
	const RDF_TYPE: &'static str = SBOL_ATTACHMENT;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri, "")
	}
}

impl TopLevel for Attachment {}
