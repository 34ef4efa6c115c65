//! Serializes a Document to RDF/XML.
//!
//! Objects nest inside the property elements that own them, references are
//! `rdf:resource` attributes, and property order is fixed per class so the
//! same document always serializes to the same text.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::constants::*;
use crate::core::component::{Component, FunctionalComponent, MapsTo};
use crate::core::component_definition::ComponentDefinition;
use crate::core::module_definition::{Interaction, Module, ModuleDefinition};
use crate::core::provenance::Activity;
use crate::core::sequence_annotation::{Location, SequenceAnnotation};
use crate::core::{Annotation, AnnotationValue, Identified, ObjectStore, SbolObject};
use crate::document::Document;
use crate::error::{Result, SbolError};

/// Maps namespace URIs to prefixes, minting `ns1`, `ns2`, .. bindings for
/// namespaces the document has not registered.
struct Prefixes {
	bindings: Vec<(String, String)>,
	minted: usize,
}

impl Prefixes {
	fn seeded(document: &Document) -> Self {
		Self { bindings: document.namespaces().to_vec(), minted: 0 }
	}

	/// Splits a URI into its namespace (through the final `#` or `/`) and
	/// local name.
	fn split(uri: &str) -> (&str, &str) {
		match uri.rfind(['#', '/']) {
			Some(pos) => (&uri[..=pos], &uri[pos + 1..]),
			None => ("", uri),
		}
	}

	fn qname(&mut self, uri: &str) -> Result<String> {
		let (namespace, local) = Self::split(uri);
		if namespace.is_empty() || local.is_empty() {
			return Err(SbolError::Parse(format!("cannot form an XML name for {uri}")));
		}
		if let Some((prefix, _)) = self.bindings.iter().find(|(_, bound)| bound == namespace) {
			return Ok(format!("{prefix}:{local}"));
		}
		let prefix = loop {
			self.minted += 1;
			let candidate = format!("ns{}", self.minted);
			if !self.bindings.iter().any(|(p, _)| *p == candidate) {
				break candidate;
			}
		};
		self.bindings.push((prefix.clone(), namespace.to_string()));
		Ok(format!("{prefix}:{local}"))
	}
}

struct XmlOut<'a> {
	writer: Writer<Vec<u8>>,
	prefixes: &'a mut Prefixes,
}

impl XmlOut<'_> {
	/// Opens a property or class element, returning the name to close with.
	fn start(&mut self, uri: &str) -> Result<String> {
		let qname = self.prefixes.qname(uri)?;
		self.writer.write_event(Event::Start(BytesStart::new(qname.as_str())))?;
		Ok(qname)
	}

	/// Opens a class element carrying the object's identity.
	fn start_about(&mut self, rdf_type: &str, identity: &str) -> Result<String> {
		let qname = self.prefixes.qname(rdf_type)?;
		let mut element = BytesStart::new(qname.as_str());
		if !identity.is_empty() {
			element.push_attribute(("rdf:about", identity));
		}
		self.writer.write_event(Event::Start(element))?;
		Ok(qname)
	}

	fn end(&mut self, qname: String) -> Result<()> {
		self.writer.write_event(Event::End(BytesEnd::new(qname)))?;
		Ok(())
	}

	/// Writes a reference-valued property as an empty element.
	fn uri_property(&mut self, predicate: &str, value: &str) -> Result<()> {
		let qname = self.prefixes.qname(predicate)?;
		let mut element = BytesStart::new(qname.as_str());
		element.push_attribute(("rdf:resource", value));
		self.writer.write_event(Event::Empty(element))?;
		Ok(())
	}

	/// Writes a literal-valued property with escaped text content.
	fn literal_property(&mut self, predicate: &str, value: &str) -> Result<()> {
		let qname = self.start(predicate)?;
		self.writer.write_event(Event::Text(BytesText::new(value)))?;
		self.end(qname)
	}
}

/// Serializes the document, resolving namespace prefixes in a first pass so
/// every binding appears on the root element.
pub(crate) fn serialize(document: &Document) -> Result<String> {
	let mut prefixes = Prefixes::seeded(document);
	render(document, &mut prefixes)?;
	let bytes = render(document, &mut prefixes)?;
	String::from_utf8(bytes).map_err(|_| SbolError::Parse("serializer produced invalid UTF-8".to_string()))
}

fn render(document: &Document, prefixes: &mut Prefixes) -> Result<Vec<u8>> {
	let mut out = XmlOut {
		writer: Writer::new_with_indent(Vec::new(), b' ', 2),
		prefixes,
	};
	out.writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

	let mut root = BytesStart::new("rdf:RDF");
	for (prefix, namespace) in &out.prefixes.bindings {
		root.push_attribute((format!("xmlns:{prefix}").as_str(), namespace.as_str()));
	}
	out.writer.write_event(Event::Start(root))?;

	for cd in document.component_definitions.iter() {
		write_component_definition(&mut out, cd)?;
	}
	for md in document.module_definitions.iter() {
		write_module_definition(&mut out, md)?;
	}
	for model in document.models.iter() {
		write_object(&mut out, SBOL_MODEL, model.identified(), |out| {
			out.uri_property(SBOL_SOURCE, &model.source)?;
			out.uri_property(SBOL_LANGUAGE, &model.language)?;
			out.uri_property(SBOL_FRAMEWORK, &model.framework)
		})?;
	}
	for sequence in document.sequences.iter() {
		write_object(&mut out, SBOL_SEQUENCE, sequence.identified(), |out| {
			out.literal_property(SBOL_ELEMENTS, &sequence.elements)?;
			out.uri_property(SBOL_ENCODING, &sequence.encoding)
		})?;
	}
	for collection in document.collections.iter() {
		write_object(&mut out, SBOL_COLLECTION, collection.identified(), |out| {
			for member in &collection.members {
				out.uri_property(SBOL_MEMBERS, member)?;
			}
			Ok(())
		})?;
	}
	for attachment in document.attachments.iter() {
		write_object(&mut out, SBOL_ATTACHMENT, attachment.identified(), |out| {
			out.uri_property(SBOL_SOURCE, &attachment.source)?;
			if let Some(format) = &attachment.format {
				out.uri_property(SBOL_FORMAT, format)?;
			}
			if let Some(size) = attachment.size {
				out.literal_property(SBOL_SIZE, &size.to_string())?;
			}
			if let Some(hash) = &attachment.hash {
				out.literal_property(SBOL_HASH, hash)?;
			}
			Ok(())
		})?;
	}
	for derivation in document.combinatorial_derivations.iter() {
		write_object(&mut out, SBOL_COMBINATORIAL_DERIVATION, derivation.identified(), |out| {
			out.uri_property(SBOL_TEMPLATE, &derivation.master_template)?;
			if let Some(strategy) = &derivation.strategy {
				out.uri_property(SBOL_STRATEGY, strategy)?;
			}
			for variable in derivation.variable_components.iter() {
				let property = out.start(SBOL_VARIABLE_COMPONENTS)?;
				write_object(out, SBOL_VARIABLE_COMPONENT, variable.identified(), |out| {
					out.uri_property(SBOL_OPERATOR, &variable.operator)?;
					out.uri_property(SBOL_VARIABLE, &variable.variable)?;
					for variant in &variable.variants {
						out.uri_property(SBOL_VARIANTS, variant)?;
					}
					for collection in &variable.variant_collections {
						out.uri_property(SBOL_VARIANT_COLLECTIONS, collection)?;
					}
					for derivation in &variable.variant_derivations {
						out.uri_property(SBOL_VARIANT_DERIVATIONS, derivation)?;
					}
					Ok(())
				})?;
				out.end(property)?;
			}
			Ok(())
		})?;
	}
	for implementation in document.implementations.iter() {
		write_object(&mut out, SBOL_IMPLEMENTATION, implementation.identified(), |out| {
			if let Some(built) = &implementation.built {
				out.uri_property(SBOL_BUILT, built)?;
			}
			Ok(())
		})?;
	}
	for activity in document.activities.iter() {
		write_activity(&mut out, activity)?;
	}
	for agent in document.agents.iter() {
		write_object(&mut out, PROVO_AGENT, agent.identified(), |_| Ok(()))?;
	}
	for plan in document.plans.iter() {
		write_object(&mut out, PROVO_PLAN, plan.identified(), |_| Ok(()))?;
	}
	for design in document.designs.iter() {
		write_object(&mut out, SYSBIO_DESIGN, design.identified(), |out| {
			if let Some(structure) = &design.structure {
				out.uri_property(SYSBIO_STRUCTURE, structure)?;
			}
			if let Some(function) = &design.function {
				out.uri_property(SYSBIO_FUNCTION, function)?;
			}
			for analysis in &design.characterization {
				out.uri_property(SYSBIO_CHARACTERIZATION, analysis)?;
			}
			Ok(())
		})?;
	}
	for build in document.builds.iter() {
		write_object(&mut out, SBOL_IMPLEMENTATION, build.identified(), |out| {
			out.uri_property(SYSBIO_TYPE, SYSBIO_BUILD)?;
			if let Some(design) = &build.design {
				out.uri_property(SYSBIO_DESIGN_PROPERTY, design)?;
			}
			if let Some(structure) = &build.structure {
				out.uri_property(SYSBIO_STRUCTURE, structure)?;
			}
			if let Some(behavior) = &build.behavior {
				out.uri_property(SBOL_BUILT, behavior)?;
			}
			Ok(())
		})?;
	}
	for test in document.tests.iter() {
		write_object(&mut out, SBOL_COLLECTION, test.identified(), |out| {
			out.uri_property(SYSBIO_TYPE, SYSBIO_TEST)?;
			for sample in &test.samples {
				out.uri_property(SYSBIO_SAMPLES, sample)?;
			}
			for data_file in &test.data_files {
				out.uri_property(SBOL_MEMBERS, data_file)?;
			}
			Ok(())
		})?;
	}
	for analysis in document.analyses.iter() {
		write_object(&mut out, SYSBIO_ANALYSIS, analysis.identified(), |out| {
			if let Some(raw_data) = &analysis.raw_data {
				out.uri_property(SYSBIO_RAW_DATA, raw_data)?;
			}
			if let Some(data_sheet) = &analysis.data_sheet {
				out.uri_property(SYSBIO_DATA_SHEET, data_sheet)?;
			}
			if let Some(consensus) = &analysis.consensus_sequence {
				out.uri_property(SYSBIO_CONSENSUS_SEQUENCE, consensus)?;
			}
			if let Some(model) = &analysis.fitted_model {
				out.uri_property(SYSBIO_MODEL, model)?;
			}
			Ok(())
		})?;
	}
	for generic in document.generic_top_levels.iter() {
		write_object(&mut out, &generic.rdf_type, generic.identified(), |_| Ok(()))?;
	}

	out.writer.write_event(Event::End(BytesEnd::new("rdf:RDF")))?;
	Ok(out.writer.into_inner())
}

/// Writes one object element: identity attributes, the fields every class
/// shares, the class-specific body, then extension annotations.
fn write_object<F>(out: &mut XmlOut, rdf_type: &str, ident: &Identified, body: F) -> Result<()>
where
	F: FnOnce(&mut XmlOut) -> Result<()>,
{
	let element = out.start_about(rdf_type, &ident.identity)?;
	if let Some(persistent_identity) = &ident.persistent_identity {
		out.uri_property(SBOL_PERSISTENT_IDENTITY, persistent_identity)?;
	}
	if let Some(display_id) = &ident.display_id {
		out.literal_property(SBOL_DISPLAY_ID, display_id)?;
	}
	if let Some(version) = &ident.version {
		out.literal_property(SBOL_VERSION, version)?;
	}
	if let Some(name) = &ident.name {
		out.literal_property(SBOL_NAME, name)?;
	}
	if let Some(description) = &ident.description {
		out.literal_property(SBOL_DESCRIPTION, description)?;
	}
	for derived_from in &ident.was_derived_from {
		out.uri_property(SBOL_WAS_DERIVED_FROM, derived_from)?;
	}
	for generated_by in &ident.was_generated_by {
		out.uri_property(SBOL_WAS_GENERATED_BY, generated_by)?;
	}
	for attachment in &ident.attachments {
		out.uri_property(SBOL_ATTACHMENTS, attachment)?;
	}
	body(out)?;
	write_annotations(out, &ident.annotations)?;
	out.end(element)
}

fn write_annotations(out: &mut XmlOut, annotations: &[Annotation]) -> Result<()> {
	for annotation in annotations {
		match &annotation.value {
			AnnotationValue::Literal(value) => out.literal_property(&annotation.predicate, value)?,
			AnnotationValue::Uri(value) => out.uri_property(&annotation.predicate, value)?,
			AnnotationValue::Nested(nested) => {
				let property = out.start(&annotation.predicate)?;
				let object = out.start_about(&nested.rdf_type, &nested.identity)?;
				write_annotations(out, &nested.annotations)?;
				out.end(object)?;
				out.end(property)?;
			}
		}
	}
	Ok(())
}

fn write_maps_tos(out: &mut XmlOut, maps_tos: &ObjectStore<MapsTo>) -> Result<()> {
	for maps_to in maps_tos.iter() {
		let property = out.start(SBOL_MAPS_TOS)?;
		write_object(out, SBOL_MAPS_TO, maps_to.identified(), |out| {
			out.uri_property(SBOL_REFINEMENT, &maps_to.refinement)?;
			out.uri_property(SBOL_LOCAL, &maps_to.local)?;
			out.uri_property(SBOL_REMOTE, &maps_to.remote)
		})?;
		out.end(property)?;
	}
	Ok(())
}

fn write_component(out: &mut XmlOut, component: &Component) -> Result<()> {
	write_object(out, SBOL_COMPONENT, component.identified(), |out| {
		out.uri_property(SBOL_ACCESS, &component.access)?;
		out.uri_property(SBOL_DEFINITION, &component.definition)?;
		write_maps_tos(out, &component.maps_tos)
	})
}

fn write_functional_component(out: &mut XmlOut, component: &FunctionalComponent) -> Result<()> {
	write_object(out, SBOL_FUNCTIONAL_COMPONENT, component.identified(), |out| {
		out.uri_property(SBOL_ACCESS, &component.access)?;
		out.uri_property(SBOL_DIRECTION, &component.direction)?;
		out.uri_property(SBOL_DEFINITION, &component.definition)?;
		write_maps_tos(out, &component.maps_tos)
	})
}

fn write_sequence_annotation(out: &mut XmlOut, annotation: &SequenceAnnotation) -> Result<()> {
	write_object(out, SBOL_SEQUENCE_ANNOTATION, annotation.identified(), |out| {
		if let Some(component) = &annotation.component {
			out.uri_property(SBOL_COMPONENTS, component)?;
		}
		for role in &annotation.roles {
			out.uri_property(SBOL_ROLES, role)?;
		}
		for location in &annotation.locations {
			let property = out.start(SBOL_LOCATIONS)?;
			match location {
				Location::Range(range) => {
					write_object(out, SBOL_RANGE, &range.ident, |out| {
						out.literal_property(SBOL_START, &range.start.to_string())?;
						out.literal_property(SBOL_END, &range.end.to_string())?;
						out.uri_property(SBOL_ORIENTATION, &range.orientation)
					})?;
				}
				Location::Cut(cut) => {
					write_object(out, SBOL_CUT, &cut.ident, |out| {
						out.literal_property(SBOL_AT, &cut.at.to_string())?;
						out.uri_property(SBOL_ORIENTATION, &cut.orientation)
					})?;
				}
			}
			out.end(property)?;
		}
		Ok(())
	})
}

fn write_component_definition(out: &mut XmlOut, cd: &ComponentDefinition) -> Result<()> {
	write_object(out, SBOL_COMPONENT_DEFINITION, cd.identified(), |out| {
		for component_type in &cd.types {
			out.uri_property(SBOL_TYPES, component_type)?;
		}
		for role in &cd.roles {
			out.uri_property(SBOL_ROLES, role)?;
		}
		for sequence in &cd.sequences {
			out.uri_property(SBOL_SEQUENCE_PROPERTY, sequence)?;
		}
		for component in cd.components.iter() {
			let property = out.start(SBOL_COMPONENTS)?;
			write_component(out, component)?;
			out.end(property)?;
		}
		for annotation in cd.sequence_annotations.iter() {
			let property = out.start(SBOL_SEQUENCE_ANNOTATIONS)?;
			write_sequence_annotation(out, annotation)?;
			out.end(property)?;
		}
		for constraint in cd.sequence_constraints.iter() {
			let property = out.start(SBOL_SEQUENCE_CONSTRAINTS)?;
			write_object(out, SBOL_SEQUENCE_CONSTRAINT, constraint.identified(), |out| {
				out.uri_property(SBOL_RESTRICTION, &constraint.restriction)?;
				out.uri_property(SBOL_SUBJECT, &constraint.subject)?;
				out.uri_property(SBOL_OBJECT, &constraint.object)
			})?;
			out.end(property)?;
		}
		Ok(())
	})
}

fn write_module(out: &mut XmlOut, module: &Module) -> Result<()> {
	write_object(out, SBOL_MODULE, module.identified(), |out| {
		out.uri_property(SBOL_DEFINITION, &module.definition)?;
		write_maps_tos(out, &module.maps_tos)
	})
}

fn write_interaction(out: &mut XmlOut, interaction: &Interaction) -> Result<()> {
	write_object(out, SBOL_INTERACTION, interaction.identified(), |out| {
		for interaction_type in &interaction.types {
			out.uri_property(SBOL_TYPES, interaction_type)?;
		}
		for participation in interaction.participations.iter() {
			let property = out.start(SBOL_PARTICIPATIONS)?;
			write_object(out, SBOL_PARTICIPATION, participation.identified(), |out| {
				for role in &participation.roles {
					out.uri_property(SBOL_ROLES, role)?;
				}
				out.uri_property(SBOL_PARTICIPANT, &participation.participant)
			})?;
			out.end(property)?;
		}
		Ok(())
	})
}

fn write_module_definition(out: &mut XmlOut, md: &ModuleDefinition) -> Result<()> {
	write_object(out, SBOL_MODULE_DEFINITION, md.identified(), |out| {
		for role in &md.roles {
			out.uri_property(SBOL_ROLES, role)?;
		}
		for model in &md.models {
			out.uri_property(SBOL_MODELS, model)?;
		}
		for component in md.functional_components.iter() {
			let property = out.start(SBOL_FUNCTIONAL_COMPONENTS)?;
			write_functional_component(out, component)?;
			out.end(property)?;
		}
		for module in md.modules.iter() {
			let property = out.start(SBOL_MODULES)?;
			write_module(out, module)?;
			out.end(property)?;
		}
		for interaction in md.interactions.iter() {
			let property = out.start(SBOL_INTERACTIONS)?;
			write_interaction(out, interaction)?;
			out.end(property)?;
		}
		Ok(())
	})
}

fn write_activity(out: &mut XmlOut, activity: &Activity) -> Result<()> {
	write_object(out, PROVO_ACTIVITY, activity.identified(), |out| {
		if let Some(started) = &activity.started_at_time {
			out.literal_property(PROVO_STARTED_AT_TIME, started)?;
		}
		if let Some(ended) = &activity.ended_at_time {
			out.literal_property(PROVO_ENDED_AT_TIME, ended)?;
		}
		for informant in &activity.was_informed_by {
			out.uri_property(PROVO_WAS_INFORMED_BY, informant)?;
		}
		for association in activity.associations.iter() {
			let property = out.start(PROVO_QUALIFIED_ASSOCIATION)?;
			write_object(out, PROVO_ASSOCIATION, association.identified(), |out| {
				for role in &association.roles {
					out.uri_property(PROVO_HAD_ROLE, role)?;
				}
				if let Some(plan) = &association.plan {
					out.uri_property(PROVO_HAD_PLAN, plan)?;
				}
				out.uri_property(PROVO_AGENT_PROPERTY, &association.agent)
			})?;
			out.end(property)?;
		}
		for usage in activity.usages.iter() {
			let property = out.start(PROVO_QUALIFIED_USAGE)?;
			write_object(out, PROVO_USAGE, usage.identified(), |out| {
				out.uri_property(PROVO_ENTITY, &usage.entity)?;
				for role in &usage.roles {
					out.uri_property(PROVO_HAD_ROLE, role)?;
				}
				Ok(())
			})?;
			out.end(property)?;
		}
		Ok(())
	})
}
