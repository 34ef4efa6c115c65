//! End-to-end workflow integration: assemble a cassette, then walk it through
//! design, build, test, and analysis with provenance.

mod utils;

use pretty_assertions::assert_eq;
use sbol2::{
	Activity, Agent, Analysis, Build, ComponentDefinition, Design, Document, Plan, SbolObject,
	Sequence,
};
use utils::*;

#[test]
fn designs_travel_the_full_workflow() {
	let mut doc = gene_cassette();
	let gene_identity = doc
		.get::<ComponentDefinition>("gene")
		.expect("gene")
		.identity()
		.to_string();

	{
		let design = doc.create::<Design>("cassette_design").expect("create design");
		design.structure = Some(gene_identity);
	}
	let agent_identity = doc.create::<Agent>("lab_robot").expect("agent").identity().to_string();
	let plan_identity = doc.create::<Plan>("gibson_protocol").expect("plan").identity().to_string();

	doc.generate_build_with("clone1", "cassette_design", &agent_identity, &plan_identity, &[])
		.expect("generate build");
	doc.generate_test("sequencing_run", "clone1").expect("generate test");
	doc.generate_analysis("consensus_call", "sequencing_run").expect("generate analysis");

	// The consensus from sequencing matches the compiled cassette exactly.
	let compiled = doc.get::<Sequence>("gene_seq").expect("compiled").elements.clone();
	{
		let consensus = doc.create::<Sequence>("clone1_consensus").expect("consensus");
		consensus.elements = compiled;
	}
	doc.verify_target("consensus_call", "clone1_consensus").expect("verify");

	let consensus_identity = doc
		.get::<Sequence>("clone1_consensus")
		.expect("consensus")
		.identity()
		.to_string();
	let build = doc.get::<Build>("clone1").expect("build");
	let structure_id = build.structure.clone().expect("verified structure");
	let structure = doc.component_definitions.get(&structure_id).expect("minted definition");
	assert_eq!(structure.sequences, vec![consensus_identity]);

	let activity = doc.get::<Activity>("clone1_generation").expect("activity");
	let association = activity.associations.iter().next().expect("association");
	assert_eq!(association.agent, agent_identity);
	assert_eq!(association.plan.as_deref(), Some(plan_identity.as_str()));

	// And the full history still parses after an exchange round trip.
	let xml = doc.write_string().expect("serialize");
	let reread = Document::read_string(&xml).expect("parse");
	assert!(doc.compare(&reread));
}

#[test]
fn characterization_feeds_the_next_design() {
	let mut doc = gene_cassette();
	let gene_identity = doc
		.get::<ComponentDefinition>("gene")
		.expect("gene")
		.identity()
		.to_string();
	{
		let design = doc.create::<Design>("cassette_design").expect("create design");
		design.structure = Some(gene_identity);
	}
	doc.generate_build("clone1", "cassette_design").expect("generate build");
	doc.generate_test("run1", "clone1").expect("generate test");
	doc.generate_analysis("fit1", "run1").expect("generate analysis");

	let analysis_identity = doc.get::<Analysis>("fit1").expect("analysis").identity().to_string();
	let design = doc.generate_design("cassette_design_v2", "fit1").expect("second design");
	assert_eq!(design.characterization, vec![analysis_identity.clone()]);
	assert_eq!(design.identified().was_derived_from, vec![analysis_identity]);
}
