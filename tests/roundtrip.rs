//! Round-trip integration tests: documents written to RDF/XML read back with
//! the same object graph.

mod utils;

use pretty_assertions::assert_eq;
use sbol2::{Activity, AnnotationValue, Build, ComponentDefinition, Design, Document, SbolObject};
use tempfile::TempDir;
use utils::*;

#[test]
fn gene_cassettes_round_trip_through_xml() {
	let doc = gene_cassette();
	let xml = doc.write_string().expect("serialize");
	let reread = Document::read_string(&xml).expect("parse");

	assert!(doc.compare(&reread));
	assert_eq!(xml, reread.write_string().expect("reserialize"));

	let order = reread.get_primary_structure("gene").expect("ordered structure");
	let expected: Vec<String> = ["R0010", "B0032", "E0040", "B0012"]
		.iter()
		.map(|id| reread.get::<ComponentDefinition>(id).expect("part").identity().to_string())
		.collect();
	assert_eq!(order, expected);
}

#[test]
fn documents_round_trip_through_files() {
	let temp_dir = TempDir::new().expect("tempdir");
	let path = temp_dir.path().join("gene_cassette.xml");

	let doc = gene_cassette();
	let report = doc.write(&path).expect("write file");
	assert_eq!(report, "Valid.");

	let reread = Document::read(&path).expect("read file");
	assert!(doc.compare(&reread));
}

#[test]
fn extension_annotations_survive_round_trips() {
	let mut doc = Document::new();
	doc.add_namespace("igem", "http://wiki.synbiohub.org/wiki/Terms/igem#");
	{
		let part = doc.create::<ComponentDefinition>("BBa_K174004").expect("create part");
		part.add_annotation(
			"http://wiki.synbiohub.org/wiki/Terms/igem#group",
			AnnotationValue::Literal("iGEM07_Paris".to_string()),
		);
		part.add_annotation(
			"http://wiki.synbiohub.org/wiki/Terms/igem#entry",
			AnnotationValue::Uri("http://parts.igem.org/Part:BBa_K174004".to_string()),
		);
	}

	let xml = doc.write_string().expect("serialize");
	let reread = Document::read_string(&xml).expect("parse");

	let part = reread.get::<ComponentDefinition>("BBa_K174004").expect("part survives");
	assert_eq!(
		part.annotation_values("http://wiki.synbiohub.org/wiki/Terms/igem#group"),
		vec!["iGEM07_Paris"]
	);
	assert_eq!(
		part.annotation_values("http://wiki.synbiohub.org/wiki/Terms/igem#entry"),
		vec!["http://parts.igem.org/Part:BBa_K174004"]
	);
	assert!(doc.compare(&reread));
}

#[test]
fn workflow_provenance_round_trips() {
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
	doc.generate_test("plate_reader_run", "clone1").expect("generate test");
	doc.generate_analysis("curve_fit", "plate_reader_run").expect("generate analysis");

	let xml = doc.write_string().expect("serialize");
	let reread = Document::read_string(&xml).expect("parse");
	assert!(doc.compare(&reread));

	let design_identity = reread.get::<Design>("cassette_design").expect("design").identity();
	let build = reread.get::<Build>("clone1").expect("build survives");
	assert_eq!(build.design.as_deref(), Some(design_identity));

	let activity = reread.get::<Activity>("clone1_generation").expect("activity survives");
	assert_eq!(activity.usages.len(), 1);
	let usage = activity.usages.iter().next().expect("usage");
	assert_eq!(usage.entity, design_identity);
}
