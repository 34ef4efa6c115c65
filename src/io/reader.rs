//! Parses RDF/XML into a Document.
//!
//! Parsing happens in two stages: the XML event stream is folded into a tree
//! of RDF nodes, then each top level node is dispatched to a class reader.
//! Properties outside the data model become extension annotations, and top
//! levels of unknown classes become GenericTopLevels, so foreign content
//! survives a read/write cycle.

use std::str;

use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{LocalName, ResolveResult};

use crate::constants::*;
use crate::core::attachment::Attachment;
use crate::core::collection::Collection;
use crate::core::combinatorial::{CombinatorialDerivation, VariableComponent};
use crate::core::component::{Component, FunctionalComponent, MapsTo};
use crate::core::component_definition::ComponentDefinition;
use crate::core::generic::GenericTopLevel;
use crate::core::implementation::Implementation;
use crate::core::model::Model;
use crate::core::module_definition::{Interaction, Module, ModuleDefinition, Participation};
use crate::core::provenance::{Activity, Agent, Association, Plan, Usage};
use crate::core::sequence::Sequence;
use crate::core::sequence_annotation::{Cut, Location, Range, SequenceAnnotation};
use crate::core::sequence_constraint::SequenceConstraint;
use crate::core::{Annotation, AnnotationValue, Identified, NestedObject, ObjectStore};
use crate::dbtl::{Analysis, Build, Design, Test};
use crate::document::Document;
use crate::error::{Result, SbolError};

/// One RDF node: a class element with its identity and properties.
struct RdfNode {
	rdf_type: String,
	identity: String,
	properties: Vec<RdfProperty>,
}

struct RdfProperty {
	predicate: String,
	value: RdfValue,
}

enum RdfValue {
	Literal(String),
	Resource(String),
	Node(RdfNode),
}

/// A property element still waiting for its closing tag.
struct PendingProperty {
	predicate: String,
	text: String,
	resource: Option<String>,
	child: Option<RdfNode>,
}

/// Parses RDF/XML text, adding every top level object it describes to
/// `document`.
pub(crate) fn parse_into(xml: &str, document: &mut Document) -> Result<()> {
	let mut reader = NsReader::from_str(xml);
	reader.config_mut().trim_text(true);

	let mut top_levels: Vec<RdfNode> = Vec::new();
	let mut node_stack: Vec<RdfNode> = Vec::new();
	let mut property_stack: Vec<PendingProperty> = Vec::new();
	let mut saw_root = false;

	loop {
		let (resolve, event) = reader.read_resolved_event()?;
		match event {
			Event::Start(element) => {
				if !saw_root {
					let name = expanded_name(resolve, element.local_name())?;
					if name != format!("{RDF_URI}RDF") {
						return Err(SbolError::Parse(format!(
							"expected an rdf:RDF root element, found {name}"
						)));
					}
					collect_namespaces(document, &element)?;
					saw_root = true;
				} else if node_stack.len() == property_stack.len() {
					let rdf_type = expanded_name(resolve, element.local_name())?;
					let identity = rdf_attribute(&reader, &element, b"about")?.unwrap_or_default();
					node_stack.push(RdfNode { rdf_type, identity, properties: Vec::new() });
				} else {
					let predicate = expanded_name(resolve, element.local_name())?;
					let resource = rdf_attribute(&reader, &element, b"resource")?;
					property_stack.push(PendingProperty {
						predicate,
						text: String::new(),
						resource,
						child: None,
					});
				}
			}
			Event::Empty(element) => {
				if !saw_root {
					return Err(SbolError::Parse("missing rdf:RDF root element".to_string()));
				}
				if node_stack.len() == property_stack.len() {
					// A childless object inside a property element.
					let rdf_type = expanded_name(resolve, element.local_name())?;
					let identity = rdf_attribute(&reader, &element, b"about")?.unwrap_or_default();
					let node = RdfNode { rdf_type, identity, properties: Vec::new() };
					match property_stack.last_mut() {
						Some(property) => property.child = Some(node),
						None => top_levels.push(node),
					}
				} else {
					let predicate = expanded_name(resolve, element.local_name())?;
					let value = match rdf_attribute(&reader, &element, b"resource")? {
						Some(uri) => RdfValue::Resource(uri),
						None => RdfValue::Literal(String::new()),
					};
					let node = node_stack
						.last_mut()
						.ok_or_else(|| SbolError::Parse(format!("property {predicate} outside an object")))?;
					node.properties.push(RdfProperty { predicate, value });
				}
			}
			Event::Text(text) => {
				if node_stack.len() == property_stack.len() {
					if let Some(property) = property_stack.last_mut() {
						property.text.push_str(&text.unescape()?);
					}
				}
			}
			Event::End(_) => {
				if node_stack.len() > property_stack.len() {
					let node = match node_stack.pop() {
						Some(node) => node,
						None => continue,
					};
					match property_stack.last_mut() {
						Some(property) => property.child = Some(node),
						None => top_levels.push(node),
					}
				} else if let Some(property) = property_stack.pop() {
					let value = if let Some(child) = property.child {
						RdfValue::Node(child)
					} else if let Some(resource) = property.resource {
						RdfValue::Resource(resource)
					} else {
						RdfValue::Literal(property.text)
					};
					let node = node_stack.last_mut().ok_or_else(|| {
						SbolError::Parse(format!("property {} outside an object", property.predicate))
					})?;
					node.properties.push(RdfProperty { predicate: property.predicate, value });
				}
				// Otherwise this closes rdf:RDF itself.
			}
			Event::Eof => break,
			_ => {}
		}
	}

	for node in top_levels {
		instantiate(document, node)?;
	}
	Ok(())
}

/// Joins a resolved namespace and local name back into a full URI.
fn expanded_name(resolve: ResolveResult, local: LocalName) -> Result<String> {
	let local = str::from_utf8(local.as_ref())
		.map_err(|_| SbolError::Parse("element name is not valid UTF-8".to_string()))?;
	match resolve {
		ResolveResult::Bound(namespace) => {
			let namespace = str::from_utf8(namespace.as_ref())
				.map_err(|_| SbolError::Parse("namespace is not valid UTF-8".to_string()))?;
			Ok(format!("{namespace}{local}"))
		}
		_ => Err(SbolError::Parse(format!("element {local} has no namespace binding"))),
	}
}

/// Reads an attribute from the RDF namespace, such as rdf:about.
fn rdf_attribute(reader: &NsReader<&[u8]>, element: &BytesStart, local: &[u8]) -> Result<Option<String>> {
	for attribute in element.attributes() {
		let attribute = attribute.map_err(|err| SbolError::Parse(err.to_string()))?;
		let (resolve, name) = reader.resolve_attribute(attribute.key);
		if name.as_ref() != local {
			continue;
		}
		if let ResolveResult::Bound(namespace) = resolve {
			if namespace.as_ref() == RDF_URI.as_bytes() {
				return Ok(Some(attribute.unescape_value()?.into_owned()));
			}
		}
	}
	Ok(None)
}

/// Records the prefix bindings declared on the root element so they survive
/// a write.
fn collect_namespaces(document: &mut Document, element: &BytesStart) -> Result<()> {
	for attribute in element.attributes() {
		let attribute = attribute.map_err(|err| SbolError::Parse(err.to_string()))?;
		let key = attribute.key.as_ref();
		if let Some(prefix) = key.strip_prefix(b"xmlns:") {
			let prefix = str::from_utf8(prefix)
				.map_err(|_| SbolError::Parse("namespace prefix is not valid UTF-8".to_string()))?;
			let uri = attribute.unescape_value()?;
			document.add_namespace(prefix, &uri);
		}
	}
	Ok(())
}

fn instantiate(document: &mut Document, node: RdfNode) -> Result<()> {
	if node.identity.is_empty() {
		return Err(SbolError::Parse(format!(
			"top level {} element is missing rdf:about",
			node.rdf_type
		)));
	}
	match node.rdf_type.as_str() {
		SBOL_COMPONENT_DEFINITION => document.add(read_component_definition(node)?),
		SBOL_SEQUENCE => document.add(read_sequence(node)?),
		SBOL_MODULE_DEFINITION => document.add(read_module_definition(node)?),
		SBOL_MODEL => document.add(read_model(node)?),
		SBOL_COLLECTION if stage_marker(&node, SYSBIO_TEST) => document.add(read_test(node)?),
		SBOL_COLLECTION => document.add(read_collection(node)?),
		SBOL_ATTACHMENT => document.add(read_attachment(node)?),
		SBOL_IMPLEMENTATION if stage_marker(&node, SYSBIO_BUILD) => document.add(read_build(node)?),
		SBOL_IMPLEMENTATION => document.add(read_implementation(node)?),
		SBOL_COMBINATORIAL_DERIVATION => document.add(read_combinatorial_derivation(node)?),
		PROVO_ACTIVITY => document.add(read_activity(node)?),
		PROVO_AGENT => document.add(read_agent(node)?),
		PROVO_PLAN => document.add(read_plan(node)?),
		SYSBIO_DESIGN => document.add(read_design(node)?),
		SYSBIO_ANALYSIS => document.add(read_analysis(node)?),
		_ => document.add(read_generic_top_level(node)?),
	}
}

/// Whether a node carries the workflow stage marker `marker`.
fn stage_marker(node: &RdfNode, marker: &str) -> bool {
	node.properties.iter().any(|property| {
		property.predicate == SYSBIO_TYPE
			&& matches!(&property.value, RdfValue::Resource(uri) if uri == marker)
	})
}

fn identified_shell(node: &RdfNode) -> Identified {
	Identified { identity: node.identity.clone(), ..Identified::default() }
}

/// Consumes a property shared by every class, or hands the value back.
fn take_identified(ident: &mut Identified, predicate: &str, value: RdfValue) -> Option<RdfValue> {
	match (predicate, value) {
		(SBOL_PERSISTENT_IDENTITY, RdfValue::Resource(uri)) => {
			ident.persistent_identity = Some(uri);
			None
		}
		(SBOL_DISPLAY_ID, RdfValue::Literal(text)) => {
			ident.display_id = Some(text);
			None
		}
		(SBOL_VERSION, RdfValue::Literal(text)) => {
			ident.version = Some(text);
			None
		}
		(SBOL_NAME, RdfValue::Literal(text)) => {
			ident.name = Some(text);
			None
		}
		(SBOL_DESCRIPTION, RdfValue::Literal(text)) => {
			ident.description = Some(text);
			None
		}
		(SBOL_WAS_DERIVED_FROM, RdfValue::Resource(uri)) => {
			ident.was_derived_from.push(uri);
			None
		}
		(SBOL_WAS_GENERATED_BY, RdfValue::Resource(uri)) => {
			ident.was_generated_by.push(uri);
			None
		}
		(SBOL_ATTACHMENTS, RdfValue::Resource(uri)) => {
			ident.attachments.push(uri);
			None
		}
		(_, value) => Some(value),
	}
}

/// Stores a property outside the data model as an extension annotation.
fn annotate(ident: &mut Identified, predicate: &str, value: RdfValue) {
	let value = match value {
		RdfValue::Literal(text) => AnnotationValue::Literal(text),
		RdfValue::Resource(uri) => AnnotationValue::Uri(uri),
		RdfValue::Node(node) => AnnotationValue::Nested(nested_object(node)),
	};
	ident.annotations.push(Annotation { predicate: predicate.to_string(), value });
}

fn nested_object(node: RdfNode) -> NestedObject {
	let mut nested = NestedObject {
		rdf_type: node.rdf_type,
		identity: node.identity,
		annotations: Vec::new(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let value = match value {
			RdfValue::Literal(text) => AnnotationValue::Literal(text),
			RdfValue::Resource(uri) => AnnotationValue::Uri(uri),
			RdfValue::Node(child) => AnnotationValue::Nested(nested_object(child)),
		};
		nested.annotations.push(Annotation { predicate, value });
	}
	nested
}

fn parse_integer(predicate: &str, text: &str) -> Result<i64> {
	text.parse::<i64>()
		.map_err(|_| SbolError::Parse(format!("{predicate} expects an integer, found {text:?}")))
}

fn read_component_definition(node: RdfNode) -> Result<ComponentDefinition> {
	let mut cd = ComponentDefinition {
		ident: identified_shell(&node),
		types: Vec::new(),
		roles: Vec::new(),
		sequences: Vec::new(),
		components: ObjectStore::new(),
		sequence_annotations: ObjectStore::new(),
		sequence_constraints: ObjectStore::new(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut cd.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_TYPES, RdfValue::Resource(uri)) => cd.types.push(uri),
			(SBOL_ROLES, RdfValue::Resource(uri)) => cd.roles.push(uri),
			(SBOL_SEQUENCE_PROPERTY, RdfValue::Resource(uri)) => cd.sequences.push(uri),
			(SBOL_COMPONENTS, RdfValue::Node(child)) => cd.components.add(read_component(child)?)?,
			(SBOL_SEQUENCE_ANNOTATIONS, RdfValue::Node(child)) => {
				cd.sequence_annotations.add(read_sequence_annotation(child)?)?;
			}
			(SBOL_SEQUENCE_CONSTRAINTS, RdfValue::Node(child)) => {
				cd.sequence_constraints.add(read_sequence_constraint(child)?)?;
			}
			(other, value) => annotate(&mut cd.ident, other, value),
		}
	}
	Ok(cd)
}

fn read_component(node: RdfNode) -> Result<Component> {
	let mut component = Component {
		ident: identified_shell(&node),
		access: SBOL_ACCESS_PRIVATE.to_string(),
		definition: String::new(),
		maps_tos: ObjectStore::new(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut component.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_ACCESS, RdfValue::Resource(uri)) => component.access = uri,
			(SBOL_DEFINITION, RdfValue::Resource(uri)) => component.definition = uri,
			(SBOL_MAPS_TOS, RdfValue::Node(child)) => component.maps_tos.add(read_maps_to(child)?)?,
			(other, value) => annotate(&mut component.ident, other, value),
		}
	}
	Ok(component)
}

fn read_maps_to(node: RdfNode) -> Result<MapsTo> {
	let mut maps_to = MapsTo {
		ident: identified_shell(&node),
		refinement: SBOL_REFINEMENT_VERIFY_IDENTICAL.to_string(),
		local: String::new(),
		remote: String::new(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut maps_to.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_REFINEMENT, RdfValue::Resource(uri)) => maps_to.refinement = uri,
			(SBOL_LOCAL, RdfValue::Resource(uri)) => maps_to.local = uri,
			(SBOL_REMOTE, RdfValue::Resource(uri)) => maps_to.remote = uri,
			(other, value) => annotate(&mut maps_to.ident, other, value),
		}
	}
	Ok(maps_to)
}

fn read_sequence_annotation(node: RdfNode) -> Result<SequenceAnnotation> {
	let mut annotation = SequenceAnnotation {
		ident: identified_shell(&node),
		component: None,
		roles: Vec::new(),
		locations: Vec::new(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut annotation.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_COMPONENTS, RdfValue::Resource(uri)) => annotation.component = Some(uri),
			(SBOL_ROLES, RdfValue::Resource(uri)) => annotation.roles.push(uri),
			(SBOL_LOCATIONS, RdfValue::Node(child)) if child.rdf_type == SBOL_RANGE => {
				annotation.locations.push(Location::Range(read_range(child)?));
			}
			(SBOL_LOCATIONS, RdfValue::Node(child)) if child.rdf_type == SBOL_CUT => {
				annotation.locations.push(Location::Cut(read_cut(child)?));
			}
			(other, value) => annotate(&mut annotation.ident, other, value),
		}
	}
	Ok(annotation)
}

fn read_range(node: RdfNode) -> Result<Range> {
	let mut range = Range {
		ident: identified_shell(&node),
		orientation: SBOL_INLINE.to_string(),
		start: 1,
		end: 1,
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut range.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_START, RdfValue::Literal(text)) => range.start = parse_integer(SBOL_START, &text)?,
			(SBOL_END, RdfValue::Literal(text)) => range.end = parse_integer(SBOL_END, &text)?,
			(SBOL_ORIENTATION, RdfValue::Resource(uri)) => range.orientation = uri,
			(other, value) => annotate(&mut range.ident, other, value),
		}
	}
	Ok(range)
}

fn read_cut(node: RdfNode) -> Result<Cut> {
	let mut cut = Cut {
		ident: identified_shell(&node),
		orientation: SBOL_INLINE.to_string(),
		at: 1,
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut cut.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_AT, RdfValue::Literal(text)) => cut.at = parse_integer(SBOL_AT, &text)?,
			(SBOL_ORIENTATION, RdfValue::Resource(uri)) => cut.orientation = uri,
			(other, value) => annotate(&mut cut.ident, other, value),
		}
	}
	Ok(cut)
}

fn read_sequence_constraint(node: RdfNode) -> Result<SequenceConstraint> {
	let mut constraint = SequenceConstraint {
		ident: identified_shell(&node),
		subject: String::new(),
		object: String::new(),
		restriction: SBOL_RESTRICTION_PRECEDES.to_string(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut constraint.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_SUBJECT, RdfValue::Resource(uri)) => constraint.subject = uri,
			(SBOL_OBJECT, RdfValue::Resource(uri)) => constraint.object = uri,
			(SBOL_RESTRICTION, RdfValue::Resource(uri)) => constraint.restriction = uri,
			(other, value) => annotate(&mut constraint.ident, other, value),
		}
	}
	Ok(constraint)
}

fn read_sequence(node: RdfNode) -> Result<Sequence> {
	let mut sequence = Sequence {
		ident: identified_shell(&node),
		elements: String::new(),
		encoding: SBOL_ENCODING_IUPAC.to_string(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut sequence.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_ELEMENTS, RdfValue::Literal(text)) => sequence.elements = text,
			(SBOL_ENCODING, RdfValue::Resource(uri)) => sequence.encoding = uri,
			(other, value) => annotate(&mut sequence.ident, other, value),
		}
	}
	Ok(sequence)
}

fn read_module_definition(node: RdfNode) -> Result<ModuleDefinition> {
	let mut md = ModuleDefinition {
		ident: identified_shell(&node),
		roles: Vec::new(),
		models: Vec::new(),
		functional_components: ObjectStore::new(),
		modules: ObjectStore::new(),
		interactions: ObjectStore::new(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut md.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_ROLES, RdfValue::Resource(uri)) => md.roles.push(uri),
			(SBOL_MODELS, RdfValue::Resource(uri)) => md.models.push(uri),
			(SBOL_FUNCTIONAL_COMPONENTS, RdfValue::Node(child)) => {
				md.functional_components.add(read_functional_component(child)?)?;
			}
			(SBOL_MODULES, RdfValue::Node(child)) => md.modules.add(read_module(child)?)?,
			(SBOL_INTERACTIONS, RdfValue::Node(child)) => md.interactions.add(read_interaction(child)?)?,
			(other, value) => annotate(&mut md.ident, other, value),
		}
	}
	Ok(md)
}

fn read_functional_component(node: RdfNode) -> Result<FunctionalComponent> {
	let mut component = FunctionalComponent {
		ident: identified_shell(&node),
		access: SBOL_ACCESS_PRIVATE.to_string(),
		definition: String::new(),
		direction: SBOL_DIRECTION_NONE.to_string(),
		maps_tos: ObjectStore::new(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut component.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_ACCESS, RdfValue::Resource(uri)) => component.access = uri,
			(SBOL_DIRECTION, RdfValue::Resource(uri)) => component.direction = uri,
			(SBOL_DEFINITION, RdfValue::Resource(uri)) => component.definition = uri,
			(SBOL_MAPS_TOS, RdfValue::Node(child)) => component.maps_tos.add(read_maps_to(child)?)?,
			(other, value) => annotate(&mut component.ident, other, value),
		}
	}
	Ok(component)
}

fn read_module(node: RdfNode) -> Result<Module> {
	let mut module = Module {
		ident: identified_shell(&node),
		definition: String::new(),
		maps_tos: ObjectStore::new(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut module.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_DEFINITION, RdfValue::Resource(uri)) => module.definition = uri,
			(SBOL_MAPS_TOS, RdfValue::Node(child)) => module.maps_tos.add(read_maps_to(child)?)?,
			(other, value) => annotate(&mut module.ident, other, value),
		}
	}
	Ok(module)
}

fn read_interaction(node: RdfNode) -> Result<Interaction> {
	let mut interaction = Interaction {
		ident: identified_shell(&node),
		types: Vec::new(),
		participations: ObjectStore::new(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut interaction.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_TYPES, RdfValue::Resource(uri)) => interaction.types.push(uri),
			(SBOL_PARTICIPATIONS, RdfValue::Node(child)) => {
				interaction.participations.add(read_participation(child)?)?;
			}
			(other, value) => annotate(&mut interaction.ident, other, value),
		}
	}
	Ok(interaction)
}

fn read_participation(node: RdfNode) -> Result<Participation> {
	let mut participation = Participation {
		ident: identified_shell(&node),
		roles: Vec::new(),
		participant: String::new(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut participation.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_ROLES, RdfValue::Resource(uri)) => participation.roles.push(uri),
			(SBOL_PARTICIPANT, RdfValue::Resource(uri)) => participation.participant = uri,
			(other, value) => annotate(&mut participation.ident, other, value),
		}
	}
	Ok(participation)
}

fn read_model(node: RdfNode) -> Result<Model> {
	let mut model = Model {
		ident: identified_shell(&node),
		source: String::new(),
		language: EDAM_SBML.to_string(),
		framework: SBO_CONTINUOUS.to_string(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut model.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_SOURCE, RdfValue::Resource(uri)) => model.source = uri,
			(SBOL_LANGUAGE, RdfValue::Resource(uri)) => model.language = uri,
			(SBOL_FRAMEWORK, RdfValue::Resource(uri)) => model.framework = uri,
			(other, value) => annotate(&mut model.ident, other, value),
		}
	}
	Ok(model)
}

fn read_collection(node: RdfNode) -> Result<Collection> {
	let mut collection = Collection { ident: identified_shell(&node), members: Vec::new() };
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut collection.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_MEMBERS, RdfValue::Resource(uri)) => collection.members.push(uri),
			(other, value) => annotate(&mut collection.ident, other, value),
		}
	}
	Ok(collection)
}

fn read_attachment(node: RdfNode) -> Result<Attachment> {
	let mut attachment = Attachment {
		ident: identified_shell(&node),
		source: String::new(),
		format: None,
		size: None,
		hash: None,
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut attachment.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_SOURCE, RdfValue::Resource(uri)) => attachment.source = uri,
			(SBOL_FORMAT, RdfValue::Resource(uri)) => attachment.format = Some(uri),
			(SBOL_SIZE, RdfValue::Literal(text)) => {
				attachment.size = Some(parse_integer(SBOL_SIZE, &text)?);
			}
			(SBOL_HASH, RdfValue::Literal(text)) => attachment.hash = Some(text),
			(other, value) => annotate(&mut attachment.ident, other, value),
		}
	}
	Ok(attachment)
}

fn read_implementation(node: RdfNode) -> Result<Implementation> {
	let mut implementation = Implementation { ident: identified_shell(&node), built: None };
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut implementation.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_BUILT, RdfValue::Resource(uri)) => implementation.built = Some(uri),
			(other, value) => annotate(&mut implementation.ident, other, value),
		}
	}
	Ok(implementation)
}

fn read_combinatorial_derivation(node: RdfNode) -> Result<CombinatorialDerivation> {
	let mut derivation = CombinatorialDerivation {
		ident: identified_shell(&node),
		master_template: String::new(),
		strategy: None,
		variable_components: ObjectStore::new(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut derivation.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_TEMPLATE, RdfValue::Resource(uri)) => derivation.master_template = uri,
			(SBOL_STRATEGY, RdfValue::Resource(uri)) => derivation.strategy = Some(uri),
			(SBOL_VARIABLE_COMPONENTS, RdfValue::Node(child)) => {
				derivation.variable_components.add(read_variable_component(child)?)?;
			}
			(other, value) => annotate(&mut derivation.ident, other, value),
		}
	}
	Ok(derivation)
}

fn read_variable_component(node: RdfNode) -> Result<VariableComponent> {
	let mut variable = VariableComponent {
		ident: identified_shell(&node),
		operator: SBOL_ONE.to_string(),
		variable: String::new(),
		variants: Vec::new(),
		variant_collections: Vec::new(),
		variant_derivations: Vec::new(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut variable.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SBOL_OPERATOR, RdfValue::Resource(uri)) => variable.operator = uri,
			(SBOL_VARIABLE, RdfValue::Resource(uri)) => variable.variable = uri,
			(SBOL_VARIANTS, RdfValue::Resource(uri)) => variable.variants.push(uri),
			(SBOL_VARIANT_COLLECTIONS, RdfValue::Resource(uri)) => variable.variant_collections.push(uri),
			(SBOL_VARIANT_DERIVATIONS, RdfValue::Resource(uri)) => variable.variant_derivations.push(uri),
			(other, value) => annotate(&mut variable.ident, other, value),
		}
	}
	Ok(variable)
}

fn read_activity(node: RdfNode) -> Result<Activity> {
	let mut activity = Activity {
		ident: identified_shell(&node),
		started_at_time: None,
		ended_at_time: None,
		was_informed_by: Vec::new(),
		associations: ObjectStore::new(),
		usages: ObjectStore::new(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut activity.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(PROVO_STARTED_AT_TIME, RdfValue::Literal(text)) => activity.started_at_time = Some(text),
			(PROVO_ENDED_AT_TIME, RdfValue::Literal(text)) => activity.ended_at_time = Some(text),
			(PROVO_WAS_INFORMED_BY, RdfValue::Resource(uri)) => activity.was_informed_by.push(uri),
			(PROVO_QUALIFIED_ASSOCIATION, RdfValue::Node(child)) => {
				activity.associations.add(read_association(child)?)?;
			}
			(PROVO_QUALIFIED_USAGE, RdfValue::Node(child)) => activity.usages.add(read_usage(child)?)?,
			(other, value) => annotate(&mut activity.ident, other, value),
		}
	}
	Ok(activity)
}

fn read_association(node: RdfNode) -> Result<Association> {
	let mut association = Association {
		ident: identified_shell(&node),
		agent: String::new(),
		roles: Vec::new(),
		plan: None,
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut association.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(PROVO_AGENT_PROPERTY, RdfValue::Resource(uri)) => association.agent = uri,
			(PROVO_HAD_ROLE, RdfValue::Resource(uri)) => association.roles.push(uri),
			(PROVO_HAD_PLAN, RdfValue::Resource(uri)) => association.plan = Some(uri),
			(other, value) => annotate(&mut association.ident, other, value),
		}
	}
	Ok(association)
}

fn read_usage(node: RdfNode) -> Result<Usage> {
	let mut usage = Usage { ident: identified_shell(&node), entity: String::new(), roles: Vec::new() };
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut usage.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(PROVO_ENTITY, RdfValue::Resource(uri)) => usage.entity = uri,
			(PROVO_HAD_ROLE, RdfValue::Resource(uri)) => usage.roles.push(uri),
			(other, value) => annotate(&mut usage.ident, other, value),
		}
	}
	Ok(usage)
}

fn read_agent(node: RdfNode) -> Result<Agent> {
	let mut agent = Agent { ident: identified_shell(&node) };
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut agent.ident, &predicate, value) else { continue };
		annotate(&mut agent.ident, &predicate, value);
	}
	Ok(agent)
}

fn read_plan(node: RdfNode) -> Result<Plan> {
	let mut plan = Plan { ident: identified_shell(&node) };
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut plan.ident, &predicate, value) else { continue };
		annotate(&mut plan.ident, &predicate, value);
	}
	Ok(plan)
}

fn read_design(node: RdfNode) -> Result<Design> {
	let mut design = Design {
		ident: identified_shell(&node),
		structure: None,
		function: None,
		characterization: Vec::new(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut design.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SYSBIO_STRUCTURE, RdfValue::Resource(uri)) => design.structure = Some(uri),
			(SYSBIO_FUNCTION, RdfValue::Resource(uri)) => design.function = Some(uri),
			(SYSBIO_CHARACTERIZATION, RdfValue::Resource(uri)) => design.characterization.push(uri),
			(other, value) => annotate(&mut design.ident, other, value),
		}
	}
	Ok(design)
}

fn read_build(node: RdfNode) -> Result<Build> {
	let mut build = Build {
		ident: identified_shell(&node),
		design: None,
		structure: None,
		behavior: None,
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut build.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SYSBIO_TYPE, RdfValue::Resource(_)) => {}
			(SYSBIO_DESIGN_PROPERTY, RdfValue::Resource(uri)) => build.design = Some(uri),
			(SYSBIO_STRUCTURE, RdfValue::Resource(uri)) => build.structure = Some(uri),
			(SBOL_BUILT, RdfValue::Resource(uri)) => build.behavior = Some(uri),
			(other, value) => annotate(&mut build.ident, other, value),
		}
	}
	Ok(build)
}

fn read_test(node: RdfNode) -> Result<Test> {
	let mut test = Test {
		ident: identified_shell(&node),
		samples: Vec::new(),
		data_files: Vec::new(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut test.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SYSBIO_TYPE, RdfValue::Resource(_)) => {}
			(SYSBIO_SAMPLES, RdfValue::Resource(uri)) => test.samples.push(uri),
			(SBOL_MEMBERS, RdfValue::Resource(uri)) => test.data_files.push(uri),
			(other, value) => annotate(&mut test.ident, other, value),
		}
	}
	Ok(test)
}

fn read_analysis(node: RdfNode) -> Result<Analysis> {
	let mut analysis = Analysis {
		ident: identified_shell(&node),
		raw_data: None,
		data_sheet: None,
		consensus_sequence: None,
		fitted_model: None,
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut analysis.ident, &predicate, value) else { continue };
		match (predicate.as_str(), value) {
			(SYSBIO_RAW_DATA, RdfValue::Resource(uri)) => analysis.raw_data = Some(uri),
			(SYSBIO_DATA_SHEET, RdfValue::Resource(uri)) => analysis.data_sheet = Some(uri),
			(SYSBIO_CONSENSUS_SEQUENCE, RdfValue::Resource(uri)) => {
				analysis.consensus_sequence = Some(uri);
			}
			(SYSBIO_MODEL, RdfValue::Resource(uri)) => analysis.fitted_model = Some(uri),
			(other, value) => annotate(&mut analysis.ident, other, value),
		}
	}
	Ok(analysis)
}

fn read_generic_top_level(node: RdfNode) -> Result<GenericTopLevel> {
	let mut generic = GenericTopLevel {
		ident: identified_shell(&node),
		rdf_type: node.rdf_type.clone(),
	};
	for RdfProperty { predicate, value } in node.properties {
		let Some(value) = take_identified(&mut generic.ident, &predicate, value) else { continue };
		annotate(&mut generic.ident, &predicate, value);
	}
	Ok(generic)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::core::SbolObject;

	const PROMOTER_DOC: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:sbol="http://sbols.org/v2#" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:igem="http://partsregistry.org/terms#">
  <sbol:ComponentDefinition rdf:about="http://examples.org/ComponentDefinition/R0010/1.0.0">
    <sbol:persistentIdentity rdf:resource="http://examples.org/ComponentDefinition/R0010"/>
    <sbol:displayId>R0010</sbol:displayId>
    <sbol:version>1.0.0</sbol:version>
    <dcterms:title>pLac promoter</dcterms:title>
    <sbol:type rdf:resource="http://www.biopax.org/release/biopax-level3.owl#DnaRegion"/>
    <sbol:role rdf:resource="http://identifiers.org/so/SO:0000167"/>
    <sbol:sequence rdf:resource="http://examples.org/Sequence/R0010_seq/1.0.0"/>
    <igem:partStatus>Released HQ</igem:partStatus>
  </sbol:ComponentDefinition>
  <sbol:Sequence rdf:about="http://examples.org/Sequence/R0010_seq/1.0.0">
    <sbol:persistentIdentity rdf:resource="http://examples.org/Sequence/R0010_seq"/>
    <sbol:displayId>R0010_seq</sbol:displayId>
    <sbol:version>1.0.0</sbol:version>
    <sbol:elements>caatacgcaaaccgcctctc</sbol:elements>
    <sbol:encoding rdf:resource="www.chem.qmul.ac.uk/iubmb/misc/naseq.html"/>
  </sbol:Sequence>
</rdf:RDF>"#;

	#[test]
	fn parses_component_definition_fields() {
		let doc = Document::read_string(PROMOTER_DOC).unwrap();
		let cd = doc
			.get::<ComponentDefinition>("http://examples.org/ComponentDefinition/R0010/1.0.0")
			.unwrap();
		assert_eq!(cd.display_id(), Some("R0010"));
		assert_eq!(cd.name(), Some("pLac promoter"));
		assert_eq!(cd.types, vec![BIOPAX_DNA.to_string()]);
		assert_eq!(cd.roles, vec![SO_PROMOTER.to_string()]);
		assert_eq!(cd.sequences, vec!["http://examples.org/Sequence/R0010_seq/1.0.0".to_string()]);
	}

	#[test]
	fn unknown_predicates_become_annotations() {
		let doc = Document::read_string(PROMOTER_DOC).unwrap();
		let cd = doc
			.get::<ComponentDefinition>("http://examples.org/ComponentDefinition/R0010/1.0.0")
			.unwrap();
		assert_eq!(
			cd.annotation_values("http://partsregistry.org/terms#partStatus"),
			vec!["Released HQ"]
		);
	}

	#[test]
	fn sequence_elements_survive_parsing() {
		let doc = Document::read_string(PROMOTER_DOC).unwrap();
		let seq = doc.get::<Sequence>("http://examples.org/Sequence/R0010_seq/1.0.0").unwrap();
		assert_eq!(seq.elements, "caatacgcaaaccgcctctc");
		assert_eq!(seq.encoding, SBOL_ENCODING_IUPAC);
	}

	#[test]
	fn unknown_top_levels_become_generic() {
		let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:obo="http://purl.obolibrary.org/obo/">
  <obo:Datasheet rdf:about="http://examples.org/datasheet1">
    <obo:rating>0.93</obo:rating>
  </obo:Datasheet>
</rdf:RDF>"#;
		let doc = Document::read_string(xml).unwrap();
		let generic = doc.get::<GenericTopLevel>("http://examples.org/datasheet1").unwrap();
		assert_eq!(generic.rdf_type, "http://purl.obolibrary.org/obo/Datasheet");
		assert_eq!(generic.annotation_values("http://purl.obolibrary.org/obo/rating"), vec!["0.93"]);
	}

	#[test]
	fn duplicate_identities_fail_to_parse() {
		let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:sbol="http://sbols.org/v2#">
  <sbol:Collection rdf:about="http://examples.org/c1"/>
  <sbol:Collection rdf:about="http://examples.org/c1"/>
</rdf:RDF>"#;
		let parsed = Document::read_string(xml);
		assert!(matches!(parsed, Err(SbolError::DuplicateUri(_))));
	}

	#[test]
	fn missing_about_is_rejected() {
		let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:sbol="http://sbols.org/v2#">
  <sbol:Collection/>
</rdf:RDF>"#;
		let parsed = Document::read_string(xml);
		assert!(matches!(parsed, Err(SbolError::Parse(_))));
	}
}
