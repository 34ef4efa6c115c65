//! SequenceAnnotation and the locations it points at.

use crate::config::VERSION_STRING;
use crate::constants::{SBOL_CUT, SBOL_INLINE, SBOL_RANGE, SBOL_SEQUENCE_ANNOTATION};
use crate::core::{Identified, SbolClass, SbolObject};
use crate::error::Result;

/// A SequenceAnnotation marks where a feature sits on a definition's
/// sequence, either tying a subcomponent to its position or describing an
/// unattributed region through roles.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceAnnotation {
	pub(crate) ident: Identified,
	/// Identity of the sibling Component this annotation describes, if any.
	pub component: Option<String>,
	/// Feature roles used when no component is referenced.
	pub roles: Vec<String>,
	/// Where on the sequence the feature sits.
	pub locations: Vec<Location>,
}

impl SequenceAnnotation {
	/// Creates an annotation with no locations.
	pub fn new(uri: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			component: None,
			roles: Vec::new(),
			locations: Vec::new(),
		})
	}

	/// Adds a Range location spanning `start..=end`, scoped under this
	/// annotation, and returns a mutable handle to it.
	pub fn create_range(&mut self, uri: &str, start: i64, end: i64) -> Result<&mut Range> {
		let mut range = Range::new(uri, start, end)?;
		range.ident.scope_under(&self.ident);
		self.locations.push(Location::Range(range));
		match self.locations.last_mut() {
			Some(Location::Range(range)) => Ok(range),
			_ => unreachable!("range was just pushed"),
		}
	}

	/// Adds a Cut location between positions `at` and `at + 1`, scoped under
	/// this annotation, and returns a mutable handle to it.
	pub fn create_cut(&mut self, uri: &str, at: i64) -> Result<&mut Cut> {
		let mut cut = Cut::new(uri, at)?;
		cut.ident.scope_under(&self.ident);
		self.locations.push(Location::Cut(cut));
		match self.locations.last_mut() {
			Some(Location::Cut(cut)) => Ok(cut),
			_ => unreachable!("cut was just pushed"),
		}
	}
}

impl SbolObject for SequenceAnnotation {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for SequenceAnnotation {
	const RDF_TYPE: &'static str = SBOL_SEQUENCE_ANNOTATION;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}

/// One location of a feature on a sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
	/// A contiguous region with explicit start and end.
	Range(Range),
	/// A position between two bases.
	Cut(Cut),
}

impl Location {
	/// Borrows the identity fields of whichever location kind this is.
	pub fn identified(&self) -> &Identified {
		match self {
			Self::Range(range) => &range.ident,
			Self::Cut(cut) => &cut.ident,
		}
	}

	/// The location's identity URI.
	pub fn identity(&self) -> &str {
		&self.identified().identity
	}

	/// The strand orientation of the located feature.
	pub fn orientation(&self) -> &str {
		match self {
			Self::Range(range) => &range.orientation,
			Self::Cut(cut) => &cut.orientation,
		}
	}
}

/// An inclusive, 1-based region of a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
	pub(crate) ident: Identified,
	/// Strand orientation. Defaults to inline.
	pub orientation: String,
	/// First position of the region, 1-based.
	pub start: i64,
	/// Last position of the region, inclusive.
	pub end: i64,
}

impl Range {
	/// Creates an inline range over `start..=end`.
	pub fn new(uri: &str, start: i64, end: i64) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			orientation: SBOL_INLINE.to_string(),
			start,
			end,
		})
	}
}

impl SbolObject for Range {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Range {
	const RDF_TYPE: &'static str = SBOL_RANGE;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri, 1, 1)
	}
}

/// A zero-width position between bases `at` and `at + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cut {
	pub(crate) ident: Identified,
	/// Strand orientation. Defaults to inline.
	pub orientation: String,
	/// The position immediately before the cut, 1-based.
	pub at: i64,
}

impl Cut {
	/// Creates an inline cut after position `at`.
	pub fn new(uri: &str, at: i64) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			orientation: SBOL_INLINE.to_string(),
			at,
		})
	}
}

impl SbolObject for Cut {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Cut {
	const RDF_TYPE: &'static str = SBOL_CUT;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri, 1)
	}
}
