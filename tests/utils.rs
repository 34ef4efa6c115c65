//! Shared fixtures for integration tests.

use sbol2::constants::{SO_CDS, SO_ENGINEERED_REGION, SO_PROMOTER, SO_RBS, SO_TERMINATOR};
use sbol2::{ComponentDefinition, Document, SbolObject, Sequence};

/// Seeds promoter, RBS, CDS, and terminator parts with sequences, assembles
/// them into a `gene` definition, and compiles the full cassette sequence.
pub fn gene_cassette() -> Document {
	let mut doc = Document::new();
	for (display_id, role, elements) in [
		("R0010", SO_PROMOTER, "caat"),
		("B0032", SO_RBS, "tcac"),
		("E0040", SO_CDS, "atgc"),
		("B0012", SO_TERMINATOR, "tcta"),
	] {
		let sequence_identity = {
			let sequence = doc
				.create::<Sequence>(&format!("{display_id}_seq"))
				.expect("create part sequence");
			sequence.elements = elements.to_string();
			sequence.identity().to_string()
		};
		let part = doc.create::<ComponentDefinition>(display_id).expect("create part");
		part.roles.push(role.to_string());
		part.sequences.push(sequence_identity);
	}

	doc.create::<ComponentDefinition>("gene")
		.expect("create gene")
		.roles
		.push(SO_ENGINEERED_REGION.to_string());
	doc.assemble_primary_structure("gene", &["R0010", "B0032", "E0040", "B0012"])
		.expect("assemble cassette");
	doc.compile_sequence("gene").expect("compile cassette");
	doc
}
