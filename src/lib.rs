//! Build, validate, and exchange SBOL 2 synthetic biology designs.
//!
//! The crate models the SBOL 2 classes as plain Rust structs collected in a
//! [`Document`], reads and writes the RDF/XML exchange serialization,
//! applies the standard's validation rules, assembles composite designs
//! from parts, and talks to SynBioHub-style repositories over HTTP with
//! [`PartShop`].
//!
//! New objects mint compliant URIs under the configured homespace; see the
//! [`config`] module for the construction-time options.

/// Hierarchical assembly: primary structures and sequence compilation.
pub mod assembly;

/// Global configuration consulted when objects are constructed.
pub mod config;

/// URI constants for the SBOL, PROV-O, and Dublin Core vocabularies.
pub mod constants;

/// The SBOL object model and its shared identity machinery.
pub mod core;

/// Design-build-test-learn workflow classes and provenance-linked generation.
pub mod dbtl;

/// The Document container holding every top-level object.
pub mod document;

/// The crate error type.
pub mod error;

/// RDF/XML reading and writing.
pub mod io;

/// HTTP client for SynBioHub-style part repositories.
pub mod partshop;

/// Structural validation rules.
pub mod validation;

// Re-export the object model and entry points at the crate root so a single
// `use sbol2::*` brings the whole data model into scope.
pub use crate::core::attachment::Attachment;
pub use crate::core::collection::Collection;
pub use crate::core::combinatorial::{CombinatorialDerivation, VariableComponent};
pub use crate::core::component::{Component, FunctionalComponent, MapsTo};
pub use crate::core::component_definition::ComponentDefinition;
pub use crate::core::generic::GenericTopLevel;
pub use crate::core::implementation::Implementation;
pub use crate::core::model::Model;
pub use crate::core::module_definition::{Interaction, Module, ModuleDefinition, Participation};
pub use crate::core::provenance::{Activity, Agent, Association, Plan, Usage};
pub use crate::core::sequence::Sequence;
pub use crate::core::sequence_annotation::{Cut, Location, Range, SequenceAnnotation};
pub use crate::core::sequence_constraint::SequenceConstraint;
pub use crate::core::{
	Annotation, AnnotationValue, Identified, NestedObject, ObjectStore, SbolClass, SbolObject,
	TopLevel,
};
pub use crate::dbtl::{Analysis, Build, Design, Test};
pub use crate::document::{Document, TopLevelStore};
pub use crate::error::{Result, SbolError};
pub use crate::partshop::{PartShop, SearchQuery, SearchRecord, Submission};
