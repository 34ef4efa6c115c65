//! Design-build-test-learn workflow classes and the generation methods that
//! link one stage to the next with provenance.

use crate::config::{self, VERSION_STRING};
use crate::constants::{
	SBOL_BUILD, SBOL_COLLECTION, SBOL_DESIGN, SBOL_IMPLEMENTATION, SBOL_LEARN, SBOL_TEST,
	SYSBIO_ANALYSIS, SYSBIO_DESIGN,
};
use crate::core::component_definition::ComponentDefinition;
use crate::core::provenance::Activity;
use crate::core::{Identified, SbolClass, SbolObject, TopLevel};
use crate::document::Document;
use crate::error::{Result, SbolError};

/// A Design pairs the intended structure of a construct with its intended
/// function, and points at the analyses that informed it.
#[derive(Debug, Clone, PartialEq)]
pub struct Design {
	pub(crate) ident: Identified,
	/// Identity of the ComponentDefinition to be synthesized.
	pub structure: Option<String>,
	/// Identity of the ModuleDefinition predicting the design's behavior.
	pub function: Option<String>,
	/// Identities of Analyses carrying prior characterization data.
	pub characterization: Vec<String>,
}

impl Design {
	/// Creates a design with structure and function unset.
	pub fn new(uri: &str) -> Result<Self> {
		Self::with_version(uri, VERSION_STRING)
	}

	/// Creates a design with an explicit version.
	pub fn with_version(uri: &str, version: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, version)?,
			structure: None,
			function: None,
			characterization: Vec::new(),
		})
	}
}

impl SbolObject for Design {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Design {
	const RDF_TYPE: &'static str = SYSBIO_DESIGN;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}

impl TopLevel for Design {}

/// A Build is a laboratory realization of a Design, such as a clone or a
/// plasmid prep. It serializes as an Implementation carrying a workflow
/// stage marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Build {
	pub(crate) ident: Identified,
	/// Identity of the Design this artifact realizes.
	pub design: Option<String>,
	/// Identity of the sequence-verified structure, once known.
	pub structure: Option<String>,
	/// Identity of the ModuleDefinition describing observed behavior.
	pub behavior: Option<String>,
}

impl Build {
	/// Creates a build not yet linked to a design.
	pub fn new(uri: &str) -> Result<Self> {
		Self::with_version(uri, VERSION_STRING)
	}

	/// Creates a build with an explicit version.
	pub fn with_version(uri: &str, version: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, version)?,
			design: None,
			structure: None,
			behavior: None,
		})
	}
}

impl SbolObject for Build {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Build {
	const RDF_TYPE: &'static str = SBOL_IMPLEMENTATION;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}

	fn class_name() -> &'static str {
		"Build"
	}
}

impl TopLevel for Build {}

/// A Test gathers the experimental data collected from one or more Builds.
/// It serializes as a Collection carrying a workflow stage marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Test {
	pub(crate) ident: Identified,
	/// Identities of the Builds measured in the experiment.
	pub samples: Vec<String>,
	/// Identities of Attachments holding the data sets.
	pub data_files: Vec<String>,
}

impl Test {
	/// Creates a test with no samples.
	pub fn new(uri: &str) -> Result<Self> {
		Self::with_version(uri, VERSION_STRING)
	}

	/// Creates a test with an explicit version.
	pub fn with_version(uri: &str, version: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, version)?,
			samples: Vec::new(),
			data_files: Vec::new(),
		})
	}
}

impl SbolObject for Test {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Test {
	const RDF_TYPE: &'static str = SBOL_COLLECTION;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}

	fn class_name() -> &'static str {
		"Test"
	}
}

impl TopLevel for Test {}

/// An Analysis interprets the raw data of a Test: consensus sequences from
/// sequencing runs, fitted models, and processed data sheets.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
	pub(crate) ident: Identified,
	/// Identity of the Test holding the raw data.
	pub raw_data: Option<String>,
	/// Identity of an Attachment holding a datasheet.
	pub data_sheet: Option<String>,
	/// Identity of the consensus Sequence recovered from sequencing data.
	pub consensus_sequence: Option<String>,
	/// Identity of a Model fitted to the data.
	pub fitted_model: Option<String>,
}

impl Analysis {
	/// Creates an analysis with no data links.
	pub fn new(uri: &str) -> Result<Self> {
		Self::with_version(uri, VERSION_STRING)
	}

	/// Creates an analysis with an explicit version.
	pub fn with_version(uri: &str, version: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, version)?,
			raw_data: None,
			data_sheet: None,
			consensus_sequence: None,
			fitted_model: None,
		})
	}

	/// Identities of Attachments holding processed data sets. Data files
	/// ride on the common attachment list.
	pub fn data_files(&self) -> &[String] {
		&self.ident.attachments
	}

	/// Records a processed data set attachment.
	pub fn add_data_file(&mut self, identity: &str) {
		self.ident.attachments.push(identity.to_string());
	}
}

impl SbolObject for Analysis {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Analysis {
	const RDF_TYPE: &'static str = SYSBIO_ANALYSIS;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}

impl TopLevel for Analysis {}

/// The resolved identity of a workflow progenitor and the stage it belongs
/// to, gathered before any mutation starts.
struct Progenitor {
	identity: String,
	display_id: String,
	stage: Stage,
}

#[derive(Clone, Copy, PartialEq)]
enum Stage {
	Design,
	Build,
	Test,
	Analysis,
}

impl Document {
	fn require_compliant_generation(&self) -> Result<()> {
		if !config::compliant_uris_enabled() {
			return Err(SbolError::Compliance(
				"generation requires compliant URIs; enable the sbol_compliant_uris option"
					.to_string(),
			));
		}
		if !config::typed_uris_enabled() {
			return Err(SbolError::Compliance(
				"generation requires typed URIs; enable the sbol_typed_uris option".to_string(),
			));
		}
		Ok(())
	}

	fn resolve_progenitor(&self, id: &str) -> Result<Progenitor> {
		let found = if let Some(design) = self.designs.get(id) {
			(design.identified(), Stage::Design)
		} else if let Some(build) = self.builds.get(id) {
			(build.identified(), Stage::Build)
		} else if let Some(implementation) = self.implementations.get(id) {
			(implementation.identified(), Stage::Build)
		} else if let Some(test) = self.tests.get(id) {
			(test.identified(), Stage::Test)
		} else if let Some(analysis) = self.analyses.get(id) {
			(analysis.identified(), Stage::Analysis)
		} else {
			return Err(SbolError::NotFound(id.to_string()));
		};
		let (ident, stage) = found;
		let Some(display_id) = ident.display_id.as_deref() else {
			return Err(SbolError::Compliance(format!(
				"progenitor {} has no displayId; generation requires compliant identities",
				ident.identity
			)));
		};
		Ok(Progenitor {
			identity: ident.identity.clone(),
			display_id: display_id.to_string(),
			stage,
		})
	}

	/// Records the Activity and progenitor Usage for a generation step and
	/// returns the activity's identity.
	fn record_generation(&mut self, product_id: &str, progenitor: &Progenitor, role: &str) -> Result<String> {
		let activity = self.create::<Activity>(&format!("{product_id}_generation"))?;
		let activity_identity = activity.identity().to_string();
		let usage = activity.create_usage(&format!("{}_usage", progenitor.display_id))?;
		usage.entity = progenitor.identity.clone();
		usage.roles.push(role.to_string());
		Ok(activity_identity)
	}

	/// Generates a Design from an Analysis or another Design, recording the
	/// step as a provenance Activity with a Usage of the progenitor.
	pub fn generate_design(&mut self, uri: &str, progenitor_id: &str) -> Result<&mut Design> {
		self.require_compliant_generation()?;
		let progenitor = self.resolve_progenitor(progenitor_id)?;
		let characterization = match progenitor.stage {
			Stage::Analysis => vec![progenitor.identity.clone()],
			Stage::Design => self
				.designs
				.get(progenitor_id)
				.map(|parent| parent.characterization.clone())
				.unwrap_or_default(),
			_ => {
				return Err(SbolError::InvalidArgument(format!(
					"object {} cannot generate a Design; only an Analysis or another Design can",
					progenitor.identity
				)));
			}
		};
		let role = match progenitor.stage {
			Stage::Analysis => SBOL_LEARN,
			_ => SBOL_DESIGN,
		};

		let mut design = Design::new(uri)?;
		design.characterization = characterization;
		design.ident.was_derived_from.push(progenitor.identity.clone());
		design.ident.was_generated_by.push(self.record_generation(uri, &progenitor, role)?);
		let identity = design.identity().to_string();
		self.add(design)?;
		self.designs.get_mut(&identity).ok_or(SbolError::NotFound(identity))
	}

	/// Generates a Design and additionally records who performed the step,
	/// the plan they followed, and any further objects consulted.
	pub fn generate_design_with(
		&mut self,
		uri: &str,
		progenitor_id: &str,
		agent: &str,
		plan: &str,
		usages: &[&str],
	) -> Result<&mut Design> {
		let consulted = self.resolve_usages(
			usages,
			&[Stage::Analysis, Stage::Design],
			"a Design may only use Analyses or other Designs for generation",
		)?;
		let identity = self.generate_design(uri, progenitor_id)?.identity().to_string();
		let activity_identity = self.record_association(&identity, SBOL_DESIGN, agent, plan)?;
		for used in &consulted {
			let role = match used.stage {
				Stage::Analysis => SBOL_LEARN,
				_ => SBOL_DESIGN,
			};
			self.record_usage(&activity_identity, used, role)?;
			if used.stage == Stage::Analysis {
				if let Some(design) = self.designs.get_mut(&identity) {
					design.characterization.push(used.identity.clone());
				}
			}
		}
		self.designs.get_mut(&identity).ok_or(SbolError::NotFound(identity))
	}

	/// Generates a Build from a Design or another Build.
	pub fn generate_build(&mut self, uri: &str, progenitor_id: &str) -> Result<&mut Build> {
		self.require_compliant_generation()?;
		let progenitor = self.resolve_progenitor(progenitor_id)?;
		let design_ref = match progenitor.stage {
			Stage::Design => Some(progenitor.identity.clone()),
			Stage::Build => self.builds.get(progenitor_id).and_then(|parent| parent.design.clone()),
			_ => {
				return Err(SbolError::InvalidArgument(format!(
					"object {} cannot generate a Build; only a Design or another Build can",
					progenitor.identity
				)));
			}
		};
		let role = match progenitor.stage {
			Stage::Design => SBOL_DESIGN,
			_ => SBOL_BUILD,
		};

		let mut build = Build::new(uri)?;
		build.design = design_ref;
		build.ident.was_derived_from.push(progenitor.identity.clone());
		build.ident.was_generated_by.push(self.record_generation(uri, &progenitor, role)?);
		let identity = build.identity().to_string();
		self.add(build)?;
		self.builds.get_mut(&identity).ok_or(SbolError::NotFound(identity))
	}

	/// Generates a Build and additionally records the agent, plan, and any
	/// further Builds consulted.
	pub fn generate_build_with(
		&mut self,
		uri: &str,
		progenitor_id: &str,
		agent: &str,
		plan: &str,
		usages: &[&str],
	) -> Result<&mut Build> {
		let consulted =
			self.resolve_usages(usages, &[Stage::Build], "a Build may only use other Builds for generation")?;
		let identity = self.generate_build(uri, progenitor_id)?.identity().to_string();
		let activity_identity = self.record_association(&identity, SBOL_BUILD, agent, plan)?;
		for used in &consulted {
			self.record_usage(&activity_identity, used, SBOL_BUILD)?;
		}
		self.builds.get_mut(&identity).ok_or(SbolError::NotFound(identity))
	}

	/// Generates a Test from a Build or another Test. A Build progenitor
	/// becomes the test's sample; a Test progenitor passes its samples on.
	pub fn generate_test(&mut self, uri: &str, progenitor_id: &str) -> Result<&mut Test> {
		self.require_compliant_generation()?;
		let progenitor = self.resolve_progenitor(progenitor_id)?;
		let samples = match progenitor.stage {
			Stage::Build => vec![progenitor.identity.clone()],
			Stage::Test => self
				.tests
				.get(progenitor_id)
				.map(|parent| parent.samples.clone())
				.unwrap_or_default(),
			_ => {
				return Err(SbolError::InvalidArgument(format!(
					"object {} cannot generate a Test; only a Build or another Test can",
					progenitor.identity
				)));
			}
		};
		let role = match progenitor.stage {
			Stage::Build => SBOL_BUILD,
			_ => SBOL_TEST,
		};

		let mut test = Test::new(uri)?;
		test.samples = samples;
		test.ident.was_derived_from.push(progenitor.identity.clone());
		test.ident.was_generated_by.push(self.record_generation(uri, &progenitor, role)?);
		let identity = test.identity().to_string();
		self.add(test)?;
		self.tests.get_mut(&identity).ok_or(SbolError::NotFound(identity))
	}

	/// Generates a Test and additionally records the agent, plan, and any
	/// further Builds or Tests consulted. Consulted Builds are added to the
	/// test's samples.
	pub fn generate_test_with(
		&mut self,
		uri: &str,
		progenitor_id: &str,
		agent: &str,
		plan: &str,
		usages: &[&str],
	) -> Result<&mut Test> {
		let consulted = self.resolve_usages(
			usages,
			&[Stage::Build, Stage::Test],
			"a Test may only use Builds or other Tests for generation",
		)?;
		let identity = self.generate_test(uri, progenitor_id)?.identity().to_string();
		let activity_identity = self.record_association(&identity, SBOL_TEST, agent, plan)?;
		for used in &consulted {
			let role = match used.stage {
				Stage::Build => SBOL_BUILD,
				_ => SBOL_TEST,
			};
			self.record_usage(&activity_identity, used, role)?;
			if used.stage == Stage::Build {
				if let Some(test) = self.tests.get_mut(&identity) {
					if !test.samples.contains(&used.identity) {
						test.samples.push(used.identity.clone());
					}
				}
			}
		}
		self.tests.get_mut(&identity).ok_or(SbolError::NotFound(identity))
	}

	/// Generates an Analysis from a Test or another Analysis.
	pub fn generate_analysis(&mut self, uri: &str, progenitor_id: &str) -> Result<&mut Analysis> {
		self.require_compliant_generation()?;
		let progenitor = self.resolve_progenitor(progenitor_id)?;
		let raw_data = match progenitor.stage {
			Stage::Test => Some(progenitor.identity.clone()),
			Stage::Analysis => self
				.analyses
				.get(progenitor_id)
				.and_then(|parent| parent.raw_data.clone()),
			_ => {
				return Err(SbolError::InvalidArgument(format!(
					"object {} cannot generate an Analysis; only a Test or another Analysis can",
					progenitor.identity
				)));
			}
		};
		let role = match progenitor.stage {
			Stage::Test => SBOL_TEST,
			_ => SBOL_LEARN,
		};

		let mut analysis = Analysis::new(uri)?;
		analysis.raw_data = raw_data;
		analysis.ident.was_derived_from.push(progenitor.identity.clone());
		analysis.ident.was_generated_by.push(self.record_generation(uri, &progenitor, role)?);
		let identity = analysis.identity().to_string();
		self.add(analysis)?;
		self.analyses.get_mut(&identity).ok_or(SbolError::NotFound(identity))
	}

	/// Generates an Analysis and additionally records the agent, plan, and
	/// any further Analyses consulted.
	pub fn generate_analysis_with(
		&mut self,
		uri: &str,
		progenitor_id: &str,
		agent: &str,
		plan: &str,
		usages: &[&str],
	) -> Result<&mut Analysis> {
		let consulted = self.resolve_usages(
			usages,
			&[Stage::Analysis],
			"an Analysis may only use other Analyses for generation",
		)?;
		let identity = self.generate_analysis(uri, progenitor_id)?.identity().to_string();
		let activity_identity = self.record_association(&identity, SBOL_LEARN, agent, plan)?;
		for used in &consulted {
			self.record_usage(&activity_identity, used, SBOL_LEARN)?;
		}
		self.analyses.get_mut(&identity).ok_or(SbolError::NotFound(identity))
	}

	fn resolve_usages(
		&self,
		usages: &[&str],
		allowed: &[Stage],
		message: &str,
	) -> Result<Vec<Progenitor>> {
		usages
			.iter()
			.map(|id| {
				let used = self.resolve_progenitor(id)?;
				if !allowed.contains(&used.stage) {
					return Err(SbolError::InvalidArgument(format!("{message}: {}", used.identity)));
				}
				Ok(used)
			})
			.collect()
	}

	fn record_association(
		&mut self,
		product_identity: &str,
		role: &str,
		agent: &str,
		plan: &str,
	) -> Result<String> {
		let product = self.resolve_progenitor(product_identity)?;
		let activity_id = format!("{}_generation", product.display_id);
		let activity = self
			.activities
			.get_mut(&activity_id)
			.ok_or(SbolError::NotFound(activity_id))?;
		let activity_identity = activity.identity().to_string();
		let association =
			activity.create_association(&format!("{}_generation_association", product.display_id))?;
		association.roles.push(role.to_string());
		association.agent = agent.to_string();
		association.plan = Some(plan.to_string());
		Ok(activity_identity)
	}

	fn record_usage(&mut self, activity_identity: &str, used: &Progenitor, role: &str) -> Result<()> {
		let activity = self
			.activities
			.get_mut(activity_identity)
			.ok_or_else(|| SbolError::NotFound(activity_identity.to_string()))?;
		let usage = activity.create_usage(&format!("{}_usage", used.display_id))?;
		usage.entity = used.identity.clone();
		usage.roles.push(role.to_string());
		Ok(())
	}

	/// Checks a consensus sequence against the target sequence of the Design
	/// reached by walking back from `analysis_id` through its Test and Build,
	/// then records the consensus on both the Analysis and the Build.
	///
	/// The consensus must already be aligned: it is rejected unless it has
	/// the same length as the target.
	pub fn verify_target(&mut self, analysis_id: &str, consensus_id: &str) -> Result<()> {
		let consensus = self
			.sequences
			.get(consensus_id)
			.ok_or_else(|| SbolError::NotFound(consensus_id.to_string()))?;
		let consensus_identity = consensus.identity().to_string();
		let consensus_len = consensus.elements.len();

		let analysis = self
			.analyses
			.get(analysis_id)
			.ok_or_else(|| SbolError::NotFound(analysis_id.to_string()))?;
		let analysis_identity = analysis.identity().to_string();
		if analysis.consensus_sequence.is_some() {
			return Err(SbolError::InvalidArgument(format!(
				"analysis {analysis_identity} already records a consensus sequence; start a new analysis or remove it"
			)));
		}

		let not_linked = || {
			SbolError::InvalidArgument(format!(
				"analysis {analysis_identity} does not trace back to a Design through a Test and Build"
			))
		};
		let test_id = analysis.raw_data.clone().ok_or_else(not_linked)?;
		let test = self.tests.get(&test_id).ok_or_else(not_linked)?;
		let build_id = test.samples.first().cloned().ok_or_else(not_linked)?;
		let build = self.builds.get(&build_id).ok_or_else(not_linked)?;
		let build_identity = build.identity().to_string();
		let build_display_id = build.display_id().map(str::to_string);
		let build_structure = build.structure.clone();
		let design_id = build.design.clone().ok_or_else(not_linked)?;
		let design = self.designs.get(&design_id).ok_or_else(not_linked)?;

		let no_target = || {
			SbolError::InvalidArgument(format!(
				"design {design_id} does not name a target sequence present in the document"
			))
		};
		let structure_id = design.structure.clone().ok_or_else(no_target)?;
		let structure = self.component_definitions.get(&structure_id).ok_or_else(no_target)?;
		let target_id = structure.sequences.first().cloned().ok_or_else(no_target)?;
		let target = self.sequences.get(&target_id).ok_or_else(no_target)?;
		if target.elements.len() != consensus_len {
			return Err(SbolError::InvalidArgument(
				"target and consensus sequences differ in length; align them first".to_string(),
			));
		}

		if let Some(analysis) = self.analyses.get_mut(&analysis_identity) {
			analysis.consensus_sequence = Some(consensus_identity.clone());
		}

		// Record the verified structure on the Build, minting a definition
		// for it the first time through.
		let verified_structure = match build_structure {
			Some(identity) => identity,
			None => {
				let uri = build_display_id.unwrap_or(build_identity.clone());
				let definition = self.create::<ComponentDefinition>(&uri)?;
				let identity = definition.identity().to_string();
				if let Some(build) = self.builds.get_mut(&build_identity) {
					build.structure = Some(identity.clone());
				}
				identity
			}
		};
		if let Some(definition) = self.component_definitions.get_mut(&verified_structure) {
			definition.sequences = vec![consensus_identity];
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::core::module_definition::ModuleDefinition;
	use crate::core::sequence::Sequence;

	fn seeded_document() -> Document {
		let mut doc = Document::new();
		let target = doc.create::<Sequence>("target_seq").unwrap();
		target.elements = "atgc".to_string();
		let target_identity = target.identity().to_string();
		let cd = doc.create::<ComponentDefinition>("gene").unwrap();
		cd.sequences.push(target_identity);
		let cd_identity = cd.identity().to_string();
		let md = doc.create::<ModuleDefinition>("gene_fn").unwrap();
		let md_identity = md.identity().to_string();
		let design = doc.create::<Design>("design1").unwrap();
		design.structure = Some(cd_identity);
		design.function = Some(md_identity);
		doc
	}

	#[test]
	fn build_generated_from_design_links_provenance() {
		let _guard = crate::config::test_support::lock();
		let mut doc = seeded_document();
		let design_identity = doc.get::<Design>("design1").unwrap().identity().to_string();

		let build = doc.generate_build("build1", "design1").unwrap();
		assert_eq!(build.design.as_deref(), Some(design_identity.as_str()));
		assert_eq!(build.identified().was_derived_from, vec![design_identity.clone()]);

		let activity = doc.get::<Activity>("build1_generation").unwrap();
		let usage = activity.usages.iter().next().unwrap();
		assert_eq!(usage.entity, design_identity);
		assert_eq!(usage.roles, vec![SBOL_DESIGN.to_string()]);
	}

	#[test]
	fn workflow_stages_chain_through_generate() {
		let _guard = crate::config::test_support::lock();
		let mut doc = seeded_document();
		doc.generate_build("build1", "design1").unwrap();
		doc.generate_test("test1", "build1").unwrap();
		doc.generate_analysis("analysis1", "test1").unwrap();

		let build_identity = doc.get::<Build>("build1").unwrap().identity().to_string();
		let test = doc.get::<Test>("test1").unwrap();
		assert_eq!(test.samples, vec![build_identity]);
		let test_identity = test.identity().to_string();
		let analysis = doc.get::<Analysis>("analysis1").unwrap();
		assert_eq!(analysis.raw_data.as_deref(), Some(test_identity.as_str()));
	}

	#[test]
	fn generation_rejects_wrong_stage() {
		let _guard = crate::config::test_support::lock();
		let mut doc = seeded_document();
		let err = doc.generate_test("test1", "design1");
		assert!(matches!(err, Err(SbolError::InvalidArgument(_))));
	}

	#[test]
	fn generation_with_agent_records_association() {
		let _guard = crate::config::test_support::lock();
		let mut doc = seeded_document();
		let agent = doc.create::<crate::core::provenance::Agent>("mwaite").unwrap();
		let agent_identity = agent.identity().to_string();
		let plan = doc.create::<crate::core::provenance::Plan>("golden_gate").unwrap();
		let plan_identity = plan.identity().to_string();

		doc.generate_build_with("build1", "design1", &agent_identity, &plan_identity, &[])
			.unwrap();

		let activity = doc.get::<Activity>("build1_generation").unwrap();
		let association = activity.associations.iter().next().unwrap();
		assert_eq!(association.agent, agent_identity);
		assert_eq!(association.plan.as_deref(), Some(plan_identity.as_str()));
		assert_eq!(association.roles, vec![SBOL_BUILD.to_string()]);
	}

	#[test]
	fn verify_target_records_consensus_on_build() {
		let _guard = crate::config::test_support::lock();
		let mut doc = seeded_document();
		doc.generate_build("build1", "design1").unwrap();
		doc.generate_test("test1", "build1").unwrap();
		doc.generate_analysis("analysis1", "test1").unwrap();
		let consensus = doc.create::<Sequence>("consensus_seq").unwrap();
		consensus.elements = "atgg".to_string();
		let consensus_identity = consensus.identity().to_string();

		doc.verify_target("analysis1", "consensus_seq").unwrap();

		let analysis = doc.get::<Analysis>("analysis1").unwrap();
		assert_eq!(analysis.consensus_sequence.as_deref(), Some(consensus_identity.as_str()));
		let build = doc.get::<Build>("build1").unwrap();
		let structure = build.structure.clone().unwrap();
		let definition = doc.component_definitions.get(&structure).unwrap();
		assert_eq!(definition.sequences, vec![consensus_identity]);
	}

	#[test]
	fn verify_target_rejects_unaligned_consensus() {
		let _guard = crate::config::test_support::lock();
		let mut doc = seeded_document();
		doc.generate_build("build1", "design1").unwrap();
		doc.generate_test("test1", "build1").unwrap();
		doc.generate_analysis("analysis1", "test1").unwrap();
		let consensus = doc.create::<Sequence>("consensus_seq").unwrap();
		consensus.elements = "atggatgg".to_string();

		let err = doc.verify_target("analysis1", "consensus_seq");
		assert!(matches!(err, Err(SbolError::InvalidArgument(_))));
	}
}
