//! Structural validation rules.
//!
//! Each rule is a plain function appending human-readable messages, run as a
//! batch by [`Document::validate`]. Identity uniqueness is also enforced
//! eagerly when objects are added, so rule sbol-10202 only fires on documents
//! assembled outside the usual entry points.

use std::collections::BTreeSet;

use crate::config;
use crate::constants::{
	SBOL_ENCODING_IUPAC, SBOL_ENCODING_IUPAC_PROTEIN, SBOL_ENCODING_SMILES, SBOL_URI,
};
use crate::core::component_definition::ComponentDefinition;
use crate::core::{Identified, SbolObject};
use crate::document::Document;

type ValidationRule = fn(&Document, &mut Vec<String>);

const RULES: [ValidationRule; 9] = [
	rule_10101,
	rule_10102,
	rule_10202,
	rule_10204,
	rule_10206,
	rule_10522,
	rule_sibling_components,
	rule_sibling_participants,
	rule_libsbol_1,
];

impl Document {
	/// Runs every validation rule and returns the collected messages.
	///
	/// An empty list means the document passed.
	pub fn validate(&self) -> Vec<String> {
		let mut messages = Vec::new();
		for rule in RULES {
			rule(self, &mut messages);
		}
		messages
	}

	/// The report returned by [`Document::write`]: either `Valid.`, the rule
	/// messages, or a notice that validation is switched off.
	pub(crate) fn validation_report(&self) -> String {
		if !config::validation_enabled() {
			return "Validation disabled.".to_string();
		}
		let messages = self.validate();
		if messages.is_empty() { "Valid.".to_string() } else { messages.join("\n") }
	}
}

/// Collects the identity fields of every object in the document, owned
/// children included.
fn all_identified(document: &Document) -> Vec<&Identified> {
	let mut all: Vec<&Identified> = Vec::new();
	for cd in document.component_definitions.iter() {
		all.push(cd.identified());
		for component in cd.components.iter() {
			all.push(component.identified());
			for maps_to in component.maps_tos.iter() {
				all.push(maps_to.identified());
			}
		}
		for annotation in cd.sequence_annotations.iter() {
			all.push(annotation.identified());
			for location in &annotation.locations {
				all.push(location.identified());
			}
		}
		for constraint in cd.sequence_constraints.iter() {
			all.push(constraint.identified());
		}
	}
	for md in document.module_definitions.iter() {
		all.push(md.identified());
		for fc in md.functional_components.iter() {
			all.push(fc.identified());
			for maps_to in fc.maps_tos.iter() {
				all.push(maps_to.identified());
			}
		}
		for module in md.modules.iter() {
			all.push(module.identified());
			for maps_to in module.maps_tos.iter() {
				all.push(maps_to.identified());
			}
		}
		for interaction in md.interactions.iter() {
			all.push(interaction.identified());
			for participation in interaction.participations.iter() {
				all.push(participation.identified());
			}
		}
	}
	for model in document.models.iter() {
		all.push(model.identified());
	}
	for sequence in document.sequences.iter() {
		all.push(sequence.identified());
	}
	for collection in document.collections.iter() {
		all.push(collection.identified());
	}
	for attachment in document.attachments.iter() {
		all.push(attachment.identified());
	}
	for derivation in document.combinatorial_derivations.iter() {
		all.push(derivation.identified());
		for variable in derivation.variable_components.iter() {
			all.push(variable.identified());
		}
	}
	for implementation in document.implementations.iter() {
		all.push(implementation.identified());
	}
	for activity in document.activities.iter() {
		all.push(activity.identified());
		for association in activity.associations.iter() {
			all.push(association.identified());
		}
		for usage in activity.usages.iter() {
			all.push(usage.identified());
		}
	}
	for agent in document.agents.iter() {
		all.push(agent.identified());
	}
	for plan in document.plans.iter() {
		all.push(plan.identified());
	}
	for design in document.designs.iter() {
		all.push(design.identified());
	}
	for build in document.builds.iter() {
		all.push(build.identified());
	}
	for test in document.tests.iter() {
		all.push(test.identified());
	}
	for analysis in document.analyses.iter() {
		all.push(analysis.identified());
	}
	for generic in document.generic_top_levels.iter() {
		all.push(generic.identified());
	}
	all
}

/// An SBOL document MUST declare the SBOL namespace.
fn rule_10101(document: &Document, messages: &mut Vec<String>) {
	let sbol_ns = format!("{SBOL_URI}#");
	if !document.namespaces().iter().any(|(_, uri)| *uri == sbol_ns) {
		messages.push(format!("sbol-10101: missing namespace declaration for {sbol_ns}"));
	}
}

/// An SBOL document MUST declare the RDF namespace.
fn rule_10102(document: &Document, messages: &mut Vec<String>) {
	let rdf_ns = crate::constants::RDF_URI;
	if !document.namespaces().iter().any(|(_, uri)| uri == rdf_ns) {
		messages.push(format!("sbol-10102: missing namespace declaration for {rdf_ns}"));
	}
}

/// The identity of every object MUST be unique within the document.
fn rule_10202(document: &Document, messages: &mut Vec<String>) {
	let mut seen = BTreeSet::new();
	for identified in all_identified(document) {
		if !seen.insert(identified.identity.as_str()) {
			messages.push(format!("sbol-10202: duplicate identity {}", identified.identity));
		}
	}
}

/// A displayId MUST be composed of alphanumerics and underscores and begin
/// with a letter or underscore.
fn rule_10204(document: &Document, messages: &mut Vec<String>) {
	for identified in all_identified(document) {
		if let Some(display_id) = &identified.display_id {
			if config::validate_display_id(display_id).is_err() {
				messages.push(format!(
					"sbol-10204: {} has a malformed displayId {display_id:?}",
					identified.identity
				));
			}
		}
	}
}

/// A version MUST begin with a digit.
fn rule_10206(document: &Document, messages: &mut Vec<String>) {
	for identified in all_identified(document) {
		if let Some(version) = &identified.version {
			if config::validate_version(version).is_err() {
				messages.push(format!(
					"sbol-10206: {} has a malformed version {version:?}",
					identified.identity
				));
			}
		}
	}
}

/// A Sequence encoding SHOULD be one of the encodings the data model names.
fn rule_10522(document: &Document, messages: &mut Vec<String>) {
	const KNOWN: [&str; 3] = [SBOL_ENCODING_IUPAC, SBOL_ENCODING_IUPAC_PROTEIN, SBOL_ENCODING_SMILES];
	for sequence in document.sequences.iter() {
		if !KNOWN.contains(&sequence.encoding.as_str()) {
			messages.push(format!(
				"sbol-10522: Sequence {} uses an unrecognized encoding {}",
				sequence.identity(),
				sequence.encoding
			));
		}
	}
}

/// SequenceConstraints and SequenceAnnotations MUST refer to Components of
/// the ComponentDefinition that contains them.
fn rule_sibling_components(document: &Document, messages: &mut Vec<String>) {
	for cd in document.component_definitions.iter() {
		for constraint in cd.sequence_constraints.iter() {
			if !cd.components.contains(&constraint.subject) {
				messages.push(format!(
					"sbol-11402: the subject of {} is not a Component of {}",
					constraint.identity(),
					cd.identity()
				));
			}
			if !cd.components.contains(&constraint.object) {
				messages.push(format!(
					"sbol-11403: the object of {} is not a Component of {}",
					constraint.identity(),
					cd.identity()
				));
			}
		}
		for annotation in cd.sequence_annotations.iter() {
			if let Some(component) = &annotation.component {
				if !cd.components.contains(component) {
					messages.push(format!(
						"sbol-10905: the component of {} is not a Component of {}",
						annotation.identity(),
						cd.identity()
					));
				}
			}
		}
	}
}

/// A Participation participant MUST refer to a FunctionalComponent of the
/// ModuleDefinition that contains its Interaction.
fn rule_sibling_participants(document: &Document, messages: &mut Vec<String>) {
	for md in document.module_definitions.iter() {
		for interaction in md.interactions.iter() {
			for participation in interaction.participations.iter() {
				if !md.functional_components.contains(&participation.participant) {
					messages.push(format!(
						"sbol-12003: the participant of {} is not a FunctionalComponent of {}",
						participation.identity(),
						md.identity()
					));
				}
			}
		}
	}
}

/// A ComponentDefinition MUST NOT instantiate itself, directly or through a
/// chain of Component definitions.
fn rule_libsbol_1(document: &Document, messages: &mut Vec<String>) {
	for cd in document.component_definitions.iter() {
		let mut visited = BTreeSet::new();
		if instantiates(document, cd, cd.identity(), &mut visited) {
			messages.push(format!(
				"libsbol-1: {} instantiates itself through its component definitions",
				cd.identity()
			));
		}
	}
}

fn instantiates(
	document: &Document,
	cd: &ComponentDefinition,
	target: &str,
	visited: &mut BTreeSet<String>,
) -> bool {
	for component in cd.components.iter() {
		if component.definition == target {
			return true;
		}
		if !visited.insert(component.definition.clone()) {
			continue;
		}
		if let Some(definition) = document.component_definitions.get(&component.definition) {
			if instantiates(document, definition, target, visited) {
				return true;
			}
		}
	}
	false
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::core::sequence::Sequence;

	fn well_formed() -> Document {
		let mut doc = Document::new();
		let cd = doc.create::<ComponentDefinition>("gene").unwrap();
		let promoter = cd.create_component("promoter").unwrap();
		promoter.definition = "http://examples.org/ComponentDefinition/R0010/1.0.0".to_string();
		doc.create::<Sequence>("gene_seq").unwrap().elements = "atgc".to_string();
		doc
	}

	#[test]
	fn well_formed_document_passes() {
		let _guard = crate::config::test_support::lock();
		assert_eq!(well_formed().validate(), Vec::<String>::new());
	}

	#[test]
	fn dangling_constraint_endpoints_are_flagged() {
		let _guard = crate::config::test_support::lock();
		let mut doc = well_formed();
		{
			let cd = doc.get_mut::<ComponentDefinition>("gene").unwrap();
			let constraint = cd.create_sequence_constraint("constraint1").unwrap();
			constraint.subject = "http://examples.org/nowhere".to_string();
			constraint.object = "http://examples.org/ComponentDefinition/gene/promoter/1.0.0".to_string();
		}
		let messages = doc.validate();
		assert_eq!(messages.len(), 1);
		assert!(messages[0].starts_with("sbol-11402"));
	}

	#[test]
	fn malformed_display_id_is_flagged() {
		let _guard = crate::config::test_support::lock();
		let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#" xmlns:sbol="http://sbols.org/v2#">
  <sbol:Collection rdf:about="http://examples.org/Collection/9lives/1">
    <sbol:displayId>9lives</sbol:displayId>
  </sbol:Collection>
</rdf:RDF>"#;
		let doc = Document::read_string(xml).unwrap();
		let messages = doc.validate();
		assert!(messages.iter().any(|message| message.starts_with("sbol-10204")));
	}

	#[test]
	fn unknown_sequence_encoding_is_flagged() {
		let _guard = crate::config::test_support::lock();
		let mut doc = Document::new();
		doc.create::<Sequence>("seq1").unwrap().encoding = "http://example.com/base64".to_string();
		let messages = doc.validate();
		assert!(messages.iter().any(|message| message.starts_with("sbol-10522")));
	}

	#[test]
	fn component_definition_cycles_are_flagged() {
		let _guard = crate::config::test_support::lock();
		let mut doc = Document::new();
		let outer_identity;
		let inner_identity;
		{
			let outer = doc.create::<ComponentDefinition>("outer").unwrap();
			outer_identity = outer.identity().to_string();
		}
		{
			let inner = doc.create::<ComponentDefinition>("inner").unwrap();
			inner_identity = inner.identity().to_string();
			inner.create_component("back").unwrap().definition = outer_identity.clone();
		}
		doc.get_mut::<ComponentDefinition>("outer")
			.unwrap()
			.create_component("forward")
			.unwrap()
			.definition = inner_identity.clone();
		let messages = doc.validate();
		assert_eq!(
			messages,
			vec![
				format!("libsbol-1: {inner_identity} instantiates itself through its component definitions"),
				format!("libsbol-1: {outer_identity} instantiates itself through its component definitions"),
			]
		);
	}

	#[test]
	fn report_reflects_validation_toggle() {
		let _guard = crate::config::test_support::lock();
		let doc = well_formed();
		assert_eq!(doc.validation_report(), "Valid.");
		crate::config::set_option("validate", "false").unwrap();
		assert_eq!(doc.validation_report(), "Validation disabled.");
		crate::config::set_option("validate", "true").unwrap();
	}
}
