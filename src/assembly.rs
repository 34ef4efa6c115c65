//! Hierarchical assembly of designs: building a primary structure out of
//! parts, walking its precedes constraints, and compiling the full sequence.

use std::collections::BTreeSet;

use crate::config;
use crate::constants::SBOL_RESTRICTION_PRECEDES;
use crate::core::component_definition::ComponentDefinition;
use crate::core::sequence::Sequence;
use crate::core::SbolObject;
use crate::document::Document;
use crate::error::{Result, SbolError};

impl Document {
	/// Assembles `part_ids` into the primary structure of `parent_id`.
	///
	/// Each part gets a Component instance under the parent, and adjacent
	/// instances are chained with `precedes` SequenceConstraints named
	/// `constraint1..constraintN`. Using the same part twice numbers the
	/// later instances' displayIds.
	pub fn assemble_primary_structure(&mut self, parent_id: &str, part_ids: &[&str]) -> Result<()> {
		if !config::compliant_uris_enabled() {
			return Err(SbolError::Compliance(
				"assembly requires SBOL-compliant URIs; enable the sbol_compliant_uris option"
					.to_string(),
			));
		}
		if part_ids.len() < 2 {
			return Err(SbolError::InvalidArgument(
				"a primary structure needs at least two parts".to_string(),
			));
		}
		let mut parts: Vec<(String, String)> = Vec::with_capacity(part_ids.len());
		for part_id in part_ids {
			let part = self
				.component_definitions
				.get(part_id)
				.ok_or_else(|| SbolError::NotFound((*part_id).to_string()))?;
			let display_id = part.display_id().ok_or_else(|| {
				SbolError::Compliance(format!("{} has no displayId to instantiate", part.identity()))
			})?;
			parts.push((part.identity().to_string(), display_id.to_string()));
		}
		let parent = self
			.component_definitions
			.get_mut(parent_id)
			.ok_or_else(|| SbolError::NotFound(parent_id.to_string()))?;

		let mut instances = Vec::with_capacity(parts.len());
		for (definition, display_id) in &parts {
			let mut instance_id = display_id.clone();
			let mut repeat = 0;
			while parent.components.contains(&instance_id) {
				repeat += 1;
				instance_id = format!("{display_id}_{repeat}");
			}
			let component = parent.create_component(&instance_id)?;
			component.definition = definition.clone();
			instances.push(component.identity().to_string());
		}
		for (joint, pair) in instances.windows(2).enumerate() {
			let constraint = parent.create_sequence_constraint(&format!("constraint{}", joint + 1))?;
			constraint.subject = pair[0].clone();
			constraint.object = pair[1].clone();
			constraint.restriction = SBOL_RESTRICTION_PRECEDES.to_string();
		}
		Ok(())
	}

	/// Whether some sibling precedes `component_id` within `parent_id`.
	pub fn has_upstream_component(&self, parent_id: &str, component_id: &str) -> Result<bool> {
		let (parent, component) = self.structure_context(parent_id, component_id)?;
		Ok(upstream_of(parent, &component).is_some())
	}

	/// Whether `component_id` precedes some sibling within `parent_id`.
	pub fn has_downstream_component(&self, parent_id: &str, component_id: &str) -> Result<bool> {
		let (parent, component) = self.structure_context(parent_id, component_id)?;
		Ok(downstream_of(parent, &component).is_some())
	}

	/// The identity of the Component immediately preceding `component_id`.
	pub fn upstream_component(&self, parent_id: &str, component_id: &str) -> Result<String> {
		let (parent, component) = self.structure_context(parent_id, component_id)?;
		upstream_of(parent, &component).ok_or_else(|| {
			SbolError::InvalidArgument(format!("{component} has no upstream component"))
		})
	}

	/// The identity of the Component immediately following `component_id`.
	pub fn downstream_component(&self, parent_id: &str, component_id: &str) -> Result<String> {
		let (parent, component) = self.structure_context(parent_id, component_id)?;
		downstream_of(parent, &component).ok_or_else(|| {
			SbolError::InvalidArgument(format!("{component} has no downstream component"))
		})
	}

	/// Orders the components of `parent_id` by their precedes constraints
	/// and returns the referenced definitions' identities, upstream first.
	pub fn get_primary_structure(&self, parent_id: &str) -> Result<Vec<String>> {
		let parent = self
			.component_definitions
			.get(parent_id)
			.ok_or_else(|| SbolError::NotFound(parent_id.to_string()))?;
		let Some(seed) = parent.components.iter().next() else {
			return Err(SbolError::InvalidArgument(format!(
				"{} has no components to order",
				parent.identity()
			)));
		};

		let mut visited = BTreeSet::new();
		let mut current = seed.identity().to_string();
		while let Some(upstream) = upstream_of(parent, &current) {
			if !visited.insert(upstream.clone()) {
				return Err(cycle_error(parent));
			}
			current = upstream;
		}

		visited.clear();
		let mut order = Vec::new();
		loop {
			let component = parent
				.components
				.get(&current)
				.ok_or_else(|| SbolError::NotFound(current.clone()))?;
			order.push(component.definition.clone());
			match downstream_of(parent, &current) {
				Some(next) => {
					if !visited.insert(next.clone()) {
						return Err(cycle_error(parent));
					}
					current = next;
				}
				None => break,
			}
		}
		Ok(order)
	}

	/// Concatenates part sequences in primary-structure order, stores the
	/// result as the parent's `{displayId}_seq` Sequence, and returns the
	/// compiled elements.
	pub fn compile_sequence(&mut self, parent_id: &str) -> Result<String> {
		let definitions = self.get_primary_structure(parent_id)?;
		let mut elements = String::new();
		for definition_id in &definitions {
			let definition = self
				.component_definitions
				.get(definition_id)
				.ok_or_else(|| SbolError::NotFound(definition_id.clone()))?;
			let sequence_id = definition.sequences.first().ok_or_else(|| {
				SbolError::NotFound(format!("{} has no sequence to compile", definition.identity()))
			})?;
			let sequence = self
				.sequences
				.get(sequence_id)
				.ok_or_else(|| SbolError::NotFound(sequence_id.clone()))?;
			elements.push_str(&sequence.elements);
		}

		let parent = self
			.component_definitions
			.get(parent_id)
			.ok_or_else(|| SbolError::NotFound(parent_id.to_string()))?;
		let parent_identity = parent.identity().to_string();
		let display_id = parent.display_id().ok_or_else(|| {
			SbolError::Compliance(format!("{} has no displayId to name its sequence", parent_identity))
		})?;
		let sequence_id = format!("{display_id}_seq");

		let sequence_identity = match self.sequences.get_mut(&sequence_id) {
			Some(sequence) => {
				sequence.elements = elements.clone();
				sequence.identity().to_string()
			}
			None => {
				let sequence = self.sequences.create(&sequence_id)?;
				sequence.elements = elements.clone();
				sequence.identity().to_string()
			}
		};
		let parent = self
			.component_definitions
			.get_mut(&parent_identity)
			.ok_or_else(|| SbolError::NotFound(parent_identity.clone()))?;
		if !parent.sequences.contains(&sequence_identity) {
			parent.sequences.push(sequence_identity);
		}
		Ok(elements)
	}

	fn structure_context(
		&self,
		parent_id: &str,
		component_id: &str,
	) -> Result<(&ComponentDefinition, String)> {
		let parent = self
			.component_definitions
			.get(parent_id)
			.ok_or_else(|| SbolError::NotFound(parent_id.to_string()))?;
		let component = parent
			.components
			.get(component_id)
			.ok_or_else(|| SbolError::NotFound(component_id.to_string()))?;
		Ok((parent, component.identity().to_string()))
	}
}

fn upstream_of(parent: &ComponentDefinition, component_identity: &str) -> Option<String> {
	parent.sequence_constraints.iter().find_map(|constraint| {
		(constraint.object == component_identity
			&& constraint.restriction == SBOL_RESTRICTION_PRECEDES)
			.then(|| constraint.subject.clone())
	})
}

fn downstream_of(parent: &ComponentDefinition, component_identity: &str) -> Option<String> {
	parent.sequence_constraints.iter().find_map(|constraint| {
		(constraint.subject == component_identity
			&& constraint.restriction == SBOL_RESTRICTION_PRECEDES)
			.then(|| constraint.object.clone())
	})
}

fn cycle_error(parent: &ComponentDefinition) -> SbolError {
	SbolError::InvalidArgument(format!(
		"the sequence constraints of {} do not describe a linear structure",
		parent.identity()
	))
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::config;
	use crate::constants::SO_CDS;

	/// Seeds a promoter, RBS, CDS, and terminator with sequences.
	fn seeded() -> Document {
		let mut doc = Document::new();
		for (display_id, elements) in
			[("R0010", "caat"), ("B0032", "tcac"), ("E0040", "atgc"), ("B0012", "tcta")]
		{
			let sequence_identity = {
				let sequence = doc.create::<Sequence>(&format!("{display_id}_seq")).unwrap();
				sequence.elements = elements.to_string();
				sequence.identity().to_string()
			};
			let part = doc.create::<ComponentDefinition>(display_id).unwrap();
			part.sequences.push(sequence_identity);
		}
		doc.create::<ComponentDefinition>("gene").unwrap();
		doc
	}

	#[test]
	fn assembles_parts_in_order() {
		let _guard = config::test_support::lock();
		let mut doc = seeded();
		doc.assemble_primary_structure("gene", &["R0010", "B0032", "E0040", "B0012"]).unwrap();

		let gene = doc.get::<ComponentDefinition>("gene").unwrap();
		assert_eq!(gene.components.len(), 4);
		assert_eq!(gene.sequence_constraints.len(), 3);

		let order = doc.get_primary_structure("gene").unwrap();
		let expected: Vec<String> = ["R0010", "B0032", "E0040", "B0012"]
			.iter()
			.map(|id| doc.get::<ComponentDefinition>(id).unwrap().identity().to_string())
			.collect();
		assert_eq!(order, expected);
	}

	#[test]
	fn upstream_and_downstream_queries() {
		let _guard = config::test_support::lock();
		let mut doc = seeded();
		doc.assemble_primary_structure("gene", &["R0010", "B0032", "E0040", "B0012"]).unwrap();

		assert!(!doc.has_upstream_component("gene", "R0010").unwrap());
		assert!(doc.has_downstream_component("gene", "R0010").unwrap());
		assert!(doc.has_upstream_component("gene", "B0012").unwrap());
		assert!(!doc.has_downstream_component("gene", "B0012").unwrap());

		let downstream = doc.downstream_component("gene", "B0032").unwrap();
		assert_eq!(downstream, "http://examples.org/ComponentDefinition/gene/E0040/1.0.0");
		let upstream = doc.upstream_component("gene", "E0040").unwrap();
		assert_eq!(upstream, "http://examples.org/ComponentDefinition/gene/B0032/1.0.0");
		assert!(doc.upstream_component("gene", "R0010").is_err());
	}

	#[test]
	fn compiles_concatenated_sequence() {
		let _guard = config::test_support::lock();
		let mut doc = seeded();
		doc.assemble_primary_structure("gene", &["R0010", "B0032", "E0040", "B0012"]).unwrap();

		let elements = doc.compile_sequence("gene").unwrap();
		assert_eq!(elements, "caattcacatgctcta");

		let gene = doc.get::<ComponentDefinition>("gene").unwrap();
		let compiled = doc.get::<Sequence>("gene_seq").unwrap();
		assert_eq!(gene.sequences, vec![compiled.identity().to_string()]);
		assert_eq!(compiled.elements, "caattcacatgctcta");
	}

	#[test]
	fn repeated_parts_get_numbered_instances() {
		let _guard = config::test_support::lock();
		let mut doc = seeded();
		doc.assemble_primary_structure("gene", &["R0010", "E0040", "R0010"]).unwrap();

		let gene = doc.get::<ComponentDefinition>("gene").unwrap();
		assert!(gene.components.contains("R0010"));
		assert!(gene.components.contains("R0010_1"));
		assert_eq!(doc.compile_sequence("gene").unwrap(), "caatatgccaat");
	}

	#[test]
	fn assembly_needs_at_least_two_parts() {
		let _guard = config::test_support::lock();
		let mut doc = seeded();
		let result = doc.assemble_primary_structure("gene", &["R0010"]);
		assert!(matches!(result, Err(SbolError::InvalidArgument(_))));
	}

	#[test]
	fn compiling_without_part_sequence_fails() {
		let _guard = config::test_support::lock();
		let mut doc = seeded();
		doc.create::<ComponentDefinition>("orphan").unwrap().roles.push(SO_CDS.to_string());
		doc.assemble_primary_structure("gene", &["R0010", "orphan"]).unwrap();
		let result = doc.compile_sequence("gene");
		assert!(matches!(result, Err(SbolError::NotFound(_))));
	}
}
