//! Namespace, class, property, and ontology-term URIs for the SBOL 2 data model.
//!
//! These values appear verbatim in serialized RDF/XML and in part-shop query
//! strings, so they are fixed by the exchange standard rather than by this
//! crate.

/// Namespace for new objects when no homespace has been configured.
pub const DEFAULT_NS: &str = "http://examples.org/";

/// The SBOL 2 namespace.
pub const SBOL_URI: &str = "http://sbols.org/v2";
/// The RDF syntax namespace.
pub const RDF_URI: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// The Dublin Core terms namespace (title and description properties).
pub const PURL_URI: &str = "http://purl.org/dc/terms/";
/// The PROV-O provenance namespace.
pub const PROV_URI: &str = "http://www.w3.org/ns/prov";
/// Namespace for the design-build-test-learn extension classes.
pub const SYSBIO_URI: &str = "http://sys-bio.org";

/* Class URIs */

/// Identified class URI.
pub const SBOL_IDENTIFIED: &str = "http://sbols.org/v2#Identified";
/// TopLevel class URI.
pub const SBOL_TOP_LEVEL: &str = "http://sbols.org/v2#TopLevel";
/// GenericTopLevel class URI.
pub const SBOL_GENERIC_TOP_LEVEL: &str = "http://sbols.org/v2#GenericTopLevel";
/// ComponentDefinition class URI.
pub const SBOL_COMPONENT_DEFINITION: &str = "http://sbols.org/v2#ComponentDefinition";
/// Sequence class URI.
pub const SBOL_SEQUENCE: &str = "http://sbols.org/v2#Sequence";
/// SequenceAnnotation class URI.
pub const SBOL_SEQUENCE_ANNOTATION: &str = "http://sbols.org/v2#SequenceAnnotation";
/// SequenceConstraint class URI.
pub const SBOL_SEQUENCE_CONSTRAINT: &str = "http://sbols.org/v2#SequenceConstraint";
/// Component class URI.
pub const SBOL_COMPONENT: &str = "http://sbols.org/v2#Component";
/// FunctionalComponent class URI.
pub const SBOL_FUNCTIONAL_COMPONENT: &str = "http://sbols.org/v2#FunctionalComponent";
/// MapsTo class URI.
pub const SBOL_MAPS_TO: &str = "http://sbols.org/v2#MapsTo";
/// Location class URI.
pub const SBOL_LOCATION: &str = "http://sbols.org/v2#Location";
/// Range class URI.
pub const SBOL_RANGE: &str = "http://sbols.org/v2#Range";
/// Cut class URI.
pub const SBOL_CUT: &str = "http://sbols.org/v2#Cut";
/// ModuleDefinition class URI.
pub const SBOL_MODULE_DEFINITION: &str = "http://sbols.org/v2#ModuleDefinition";
/// Module class URI.
pub const SBOL_MODULE: &str = "http://sbols.org/v2#Module";
/// Interaction class URI.
pub const SBOL_INTERACTION: &str = "http://sbols.org/v2#Interaction";
/// Participation class URI.
pub const SBOL_PARTICIPATION: &str = "http://sbols.org/v2#Participation";
/// Model class URI.
pub const SBOL_MODEL: &str = "http://sbols.org/v2#Model";
/// Collection class URI.
pub const SBOL_COLLECTION: &str = "http://sbols.org/v2#Collection";
/// Attachment class URI.
pub const SBOL_ATTACHMENT: &str = "http://sbols.org/v2#Attachment";
/// Implementation class URI.
pub const SBOL_IMPLEMENTATION: &str = "http://sbols.org/v2#Implementation";
/// CombinatorialDerivation class URI.
pub const SBOL_COMBINATORIAL_DERIVATION: &str = "http://sbols.org/v2#CombinatorialDerivation";
/// VariableComponent class URI.
pub const SBOL_VARIABLE_COMPONENT: &str = "http://sbols.org/v2#VariableComponent";
/// Document class URI.
pub const SBOL_DOCUMENT: &str = "http://sbols.org/v2#Document";
/// Placeholder URI for unset typed values.
pub const SBOL_UNDEFINED: &str = "http://sbols.org/v2#Undefined";

/* Property URIs */

/// persistentIdentity property URI.
pub const SBOL_PERSISTENT_IDENTITY: &str = "http://sbols.org/v2#persistentIdentity";
/// displayId property URI.
pub const SBOL_DISPLAY_ID: &str = "http://sbols.org/v2#displayId";
/// version property URI.
pub const SBOL_VERSION: &str = "http://sbols.org/v2#version";
/// Name property URI (Dublin Core title).
pub const SBOL_NAME: &str = "http://purl.org/dc/terms/title";
/// Description property URI (Dublin Core description).
pub const SBOL_DESCRIPTION: &str = "http://purl.org/dc/terms/description";
/// type property URI.
pub const SBOL_TYPES: &str = "http://sbols.org/v2#type";
/// role property URI.
pub const SBOL_ROLES: &str = "http://sbols.org/v2#role";
/// start property URI.
pub const SBOL_START: &str = "http://sbols.org/v2#start";
/// end property URI.
pub const SBOL_END: &str = "http://sbols.org/v2#end";
/// at property URI (Cut locations).
pub const SBOL_AT: &str = "http://sbols.org/v2#at";
/// orientation property URI.
pub const SBOL_ORIENTATION: &str = "http://sbols.org/v2#orientation";
/// elements property URI.
pub const SBOL_ELEMENTS: &str = "http://sbols.org/v2#elements";
/// encoding property URI.
pub const SBOL_ENCODING: &str = "http://sbols.org/v2#encoding";
/// sequence reference property URI.
pub const SBOL_SEQUENCE_PROPERTY: &str = "http://sbols.org/v2#sequence";
/// sequenceAnnotation ownership property URI.
pub const SBOL_SEQUENCE_ANNOTATIONS: &str = "http://sbols.org/v2#sequenceAnnotation";
/// sequenceConstraint ownership property URI.
pub const SBOL_SEQUENCE_CONSTRAINTS: &str = "http://sbols.org/v2#sequenceConstraint";
/// component ownership/reference property URI.
pub const SBOL_COMPONENTS: &str = "http://sbols.org/v2#component";
/// location ownership property URI.
pub const SBOL_LOCATIONS: &str = "http://sbols.org/v2#location";
/// definition reference property URI.
pub const SBOL_DEFINITION: &str = "http://sbols.org/v2#definition";
/// access property URI.
pub const SBOL_ACCESS: &str = "http://sbols.org/v2#access";
/// direction property URI.
pub const SBOL_DIRECTION: &str = "http://sbols.org/v2#direction";
/// mapsTo ownership property URI.
pub const SBOL_MAPS_TOS: &str = "http://sbols.org/v2#mapsTo";
/// local reference property URI.
pub const SBOL_LOCAL: &str = "http://sbols.org/v2#local";
/// remote reference property URI.
pub const SBOL_REMOTE: &str = "http://sbols.org/v2#remote";
/// refinement property URI.
pub const SBOL_REFINEMENT: &str = "http://sbols.org/v2#refinement";
/// module ownership property URI.
pub const SBOL_MODULES: &str = "http://sbols.org/v2#module";
/// model reference property URI.
pub const SBOL_MODELS: &str = "http://sbols.org/v2#model";
/// functionalComponent ownership property URI.
pub const SBOL_FUNCTIONAL_COMPONENTS: &str = "http://sbols.org/v2#functionalComponent";
/// interaction ownership property URI.
pub const SBOL_INTERACTIONS: &str = "http://sbols.org/v2#interaction";
/// participation ownership property URI.
pub const SBOL_PARTICIPATIONS: &str = "http://sbols.org/v2#participation";
/// participant reference property URI.
pub const SBOL_PARTICIPANT: &str = "http://sbols.org/v2#participant";
/// subject reference property URI.
pub const SBOL_SUBJECT: &str = "http://sbols.org/v2#subject";
/// object reference property URI.
pub const SBOL_OBJECT: &str = "http://sbols.org/v2#object";
/// restriction property URI.
pub const SBOL_RESTRICTION: &str = "http://sbols.org/v2#restriction";
/// member reference property URI.
pub const SBOL_MEMBERS: &str = "http://sbols.org/v2#member";
/// source property URI.
pub const SBOL_SOURCE: &str = "http://sbols.org/v2#source";
/// language property URI.
pub const SBOL_LANGUAGE: &str = "http://sbols.org/v2#language";
/// framework property URI.
pub const SBOL_FRAMEWORK: &str = "http://sbols.org/v2#framework";
/// format property URI.
pub const SBOL_FORMAT: &str = "http://sbols.org/v2#format";
/// size property URI.
pub const SBOL_SIZE: &str = "http://sbols.org/v2#size";
/// hash property URI.
pub const SBOL_HASH: &str = "http://sbols.org/v2#hash";
/// built reference property URI.
pub const SBOL_BUILT: &str = "http://sbols.org/v2#built";
/// template reference property URI.
pub const SBOL_TEMPLATE: &str = "http://sbols.org/v2#template";
/// strategy property URI.
pub const SBOL_STRATEGY: &str = "http://sbols.org/v2#strategy";
/// operator property URI.
pub const SBOL_OPERATOR: &str = "http://sbols.org/v2#operator";
/// variable reference property URI.
pub const SBOL_VARIABLE: &str = "http://sbols.org/v2#variable";
/// variant reference property URI.
pub const SBOL_VARIANTS: &str = "http://sbols.org/v2#variant";
/// variantCollection reference property URI.
pub const SBOL_VARIANT_COLLECTIONS: &str = "http://sbols.org/v2#variantCollection";
/// variantDerivation reference property URI.
pub const SBOL_VARIANT_DERIVATIONS: &str = "http://sbols.org/v2#variantDerivation";
/// variableComponent ownership property URI.
pub const SBOL_VARIABLE_COMPONENTS: &str = "http://sbols.org/v2#variableComponent";
/// attachment reference property URI.
pub const SBOL_ATTACHMENTS: &str = "http://sbols.org/v2#attachment";
/// wasDerivedFrom property URI (PROV-O).
pub const SBOL_WAS_DERIVED_FROM: &str = "http://www.w3.org/ns/prov#wasDerivedFrom";
/// wasGeneratedBy property URI (PROV-O).
pub const SBOL_WAS_GENERATED_BY: &str = "http://www.w3.org/ns/prov#wasGeneratedBy";

/* PROV-O classes and properties */

/// Activity class URI.
pub const PROVO_ACTIVITY: &str = "http://www.w3.org/ns/prov#Activity";
/// Agent class URI.
pub const PROVO_AGENT: &str = "http://www.w3.org/ns/prov#Agent";
/// Plan class URI.
pub const PROVO_PLAN: &str = "http://www.w3.org/ns/prov#Plan";
/// Association class URI.
pub const PROVO_ASSOCIATION: &str = "http://www.w3.org/ns/prov#Association";
/// Usage class URI.
pub const PROVO_USAGE: &str = "http://www.w3.org/ns/prov#Usage";
/// startedAtTime property URI.
pub const PROVO_STARTED_AT_TIME: &str = "http://www.w3.org/ns/prov#startedAtTime";
/// endedAtTime property URI.
pub const PROVO_ENDED_AT_TIME: &str = "http://www.w3.org/ns/prov#endedAtTime";
/// wasInformedBy property URI.
pub const PROVO_WAS_INFORMED_BY: &str = "http://www.w3.org/ns/prov#wasInformedBy";
/// qualifiedAssociation ownership property URI.
pub const PROVO_QUALIFIED_ASSOCIATION: &str = "http://www.w3.org/ns/prov#qualifiedAssociation";
/// qualifiedUsage ownership property URI.
pub const PROVO_QUALIFIED_USAGE: &str = "http://www.w3.org/ns/prov#qualifiedUsage";
/// agent reference property URI.
pub const PROVO_AGENT_PROPERTY: &str = "http://www.w3.org/ns/prov#agent";
/// hadRole property URI.
pub const PROVO_HAD_ROLE: &str = "http://www.w3.org/ns/prov#hadRole";
/// hadPlan reference property URI.
pub const PROVO_HAD_PLAN: &str = "http://www.w3.org/ns/prov#hadPlan";
/// entity reference property URI.
pub const PROVO_ENTITY: &str = "http://www.w3.org/ns/prov#entity";

/* Design-build-test-learn extension classes and properties */

/// Design class URI.
pub const SYSBIO_DESIGN: &str = "http://sys-bio.org#Design";
/// Build class URI (serialized as an sbol:Implementation carrying this type).
pub const SYSBIO_BUILD: &str = "http://sys-bio.org#Build";
/// Test class URI (serialized as an sbol:Collection carrying this type).
pub const SYSBIO_TEST: &str = "http://sys-bio.org#Test";
/// Analysis class URI.
pub const SYSBIO_ANALYSIS: &str = "http://sys-bio.org#Analysis";
/// Extension type marker property URI.
pub const SYSBIO_TYPE: &str = "http://sys-bio.org#type";
/// Design/Build structure reference property URI.
pub const SYSBIO_STRUCTURE: &str = "http://sys-bio.org#_structure";
/// Design function reference property URI.
pub const SYSBIO_FUNCTION: &str = "http://sys-bio.org#_function";
/// Build design back-reference property URI.
pub const SYSBIO_DESIGN_PROPERTY: &str = "http://sys-bio.org#design";
/// Design characterization reference property URI.
pub const SYSBIO_CHARACTERIZATION: &str = "http://sys-bio.org#characterization";
/// Test samples reference property URI.
pub const SYSBIO_SAMPLES: &str = "http://sys-bio.org#samples";
/// Analysis rawData reference property URI.
pub const SYSBIO_RAW_DATA: &str = "http://sys-bio.org#rawData";
/// Analysis dataSheet reference property URI.
pub const SYSBIO_DATA_SHEET: &str = "http://sys-bio.org#dataSheet";
/// Analysis consensus sequence reference property URI.
pub const SYSBIO_CONSENSUS_SEQUENCE: &str = "http://sys-bio.org#consensusSequence";
/// Analysis fitted model reference property URI.
pub const SYSBIO_MODEL: &str = "http://sys-bio.org#model";

/* Term URIs used as property values */

/// Private component access.
pub const SBOL_ACCESS_PRIVATE: &str = "http://sbols.org/v2#private";
/// Public component access.
pub const SBOL_ACCESS_PUBLIC: &str = "http://sbols.org/v2#public";
/// Input direction.
pub const SBOL_DIRECTION_IN: &str = "http://sbols.org/v2#in";
/// Output direction.
pub const SBOL_DIRECTION_OUT: &str = "http://sbols.org/v2#out";
/// Bidirectional direction.
pub const SBOL_DIRECTION_IN_OUT: &str = "http://sbols.org/v2#inout";
/// No direction.
pub const SBOL_DIRECTION_NONE: &str = "http://sbols.org/v2#none";
/// Constraint restriction: subject precedes object.
pub const SBOL_RESTRICTION_PRECEDES: &str = "http://sbols.org/v2#precedes";
/// Constraint restriction: subject and object share orientation.
pub const SBOL_RESTRICTION_SAME_ORIENTATION_AS: &str = "http://sbols.org/v2#sameOrientationAs";
/// Constraint restriction: subject and object have opposite orientation.
pub const SBOL_RESTRICTION_OPPOSITE_ORIENTATION_AS: &str =
	"http://sbols.org/v2#oppositeOrientationAs";
/// MapsTo refinement: references resolve to the remote instance.
pub const SBOL_REFINEMENT_USE_REMOTE: &str = "http://sbols.org/v2#useRemote";
/// MapsTo refinement: references resolve to the local instance.
pub const SBOL_REFINEMENT_USE_LOCAL: &str = "http://sbols.org/v2#useLocal";
/// MapsTo refinement: local and remote definitions must match.
pub const SBOL_REFINEMENT_VERIFY_IDENTICAL: &str = "http://sbols.org/v2#verifyIdentical";
/// MapsTo refinement: descriptions of both instances are merged.
pub const SBOL_REFINEMENT_MERGE_DESCRIPTION: &str = "http://sbols.org/v2#mergeDescription";
/// Forward strand orientation.
pub const SBOL_INLINE: &str = "http://sbols.org/v2#inline";
/// Reverse complement orientation.
pub const SBOL_REVERSE_COMPLEMENT: &str = "http://sbols.org/v2#reverseComplement";
/// IUPAC DNA/RNA sequence encoding.
pub const SBOL_ENCODING_IUPAC: &str = "www.chem.qmul.ac.uk/iubmb/misc/naseq.html";
/// IUPAC protein sequence encoding.
pub const SBOL_ENCODING_IUPAC_PROTEIN: &str = "www.chem.qmul.ac.uk/iupac/AminoAcid/";
/// SMILES small-molecule encoding.
pub const SBOL_ENCODING_SMILES: &str = "www.opensmiles.org/opensmiles.html";
/// Combinatorial strategy: derive every unique variant.
pub const SBOL_ENUMERATE: &str = "http://sbols.org/v2#enumerate";
/// Combinatorial strategy: derive a subset of variants.
pub const SBOL_SAMPLE: &str = "http://sbols.org/v2#sample";
/// Variable operator: zero or one derived component.
pub const SBOL_ZERO_OR_ONE: &str = "http://sbols.org/v2#zeroOrOne";
/// Variable operator: exactly one derived component.
pub const SBOL_ONE: &str = "http://sbols.org/v2#one";
/// Variable operator: any number of derived components.
pub const SBOL_ZERO_OR_MORE: &str = "http://sbols.org/v2#zeroOrMore";
/// Variable operator: at least one derived component.
pub const SBOL_ONE_OR_MORE: &str = "http://sbols.org/v2#oneOrMore";
/// Usage role for the design stage of a workflow.
pub const SBOL_DESIGN: &str = "http://sbols.org/v2#design";
/// Usage role for the build stage of a workflow.
pub const SBOL_BUILD: &str = "http://sbols.org/v2#build";
/// Usage role for the test stage of a workflow.
pub const SBOL_TEST: &str = "http://sbols.org/v2#test";
/// Usage role for the learn stage of a workflow.
pub const SBOL_LEARN: &str = "http://sbols.org/v2#learn";

/* Systems Biology Ontology terms (Interaction types) */

/// SBO term prefix.
pub const SBO: &str = "http://identifiers.org/biomodels.sbo/SBO:";
/// Generic biochemical interaction.
pub const SBO_INTERACTION: &str = "http://identifiers.org/biomodels.sbo/SBO:0000343";
/// Inhibition.
pub const SBO_INHIBITION: &str = "http://identifiers.org/biomodels.sbo/SBO:0000169";
/// Genetic production.
pub const SBO_GENETIC_PRODUCTION: &str = "http://identifiers.org/biomodels.sbo/SBO:0000170";
/// Stimulation.
pub const SBO_STIMULATION: &str = "http://identifiers.org/biomodels.sbo/SBO:0000589";
/// Non-covalent binding.
pub const SBO_NONCOVALENT_BINDING: &str = "http://identifiers.org/biomodels.sbo/SBO:0000177";
/// Degradation.
pub const SBO_DEGRADATION: &str = "http://identifiers.org/biomodels.sbo/SBO:0000179";
/// Control.
pub const SBO_CONTROL: &str = "http://identifiers.org/biomodels.sbo/SBO:0000168";
/// Promoter binding region.
pub const SBO_PROMOTER: &str = "http://identifiers.org/biomodels.sbo/SBO:0000598";

/* Systems Biology Ontology terms (Participation roles) */

/// Inhibitor role.
pub const SBO_INHIBITOR: &str = "http://identifiers.org/biomodels.sbo/SBO:0000020";
/// Stimulator role.
pub const SBO_STIMULATOR: &str = "http://identifiers.org/biomodels.sbo/SBO:0000459";
/// Reactant role.
pub const SBO_REACTANT: &str = "http://identifiers.org/biomodels.sbo/SBO:0000010";
/// Product role.
pub const SBO_PRODUCT: &str = "http://identifiers.org/biomodels.sbo/SBO:0000011";
/// Ligand role.
pub const SBO_LIGAND: &str = "http://identifiers.org/biomodels.sbo/SBO:0000280";
/// Non-covalent complex role.
pub const SBO_NONCOVALENT_COMPLEX: &str = "http://identifiers.org/biomodels.sbo/SBO:0000253";
/// Continuous modeling framework.
pub const SBO_CONTINUOUS: &str = "http://identifiers.org/biomodels.sbo/SBO:0000062";

/* Sequence Ontology terms */

/// SO term prefix.
pub const SO: &str = "http://identifiers.org/so/SO:";
/// Unspecified sequence feature.
pub const SO_MISC: &str = "http://identifiers.org/so/SO:0000001";
/// Promoter.
pub const SO_PROMOTER: &str = "http://identifiers.org/so/SO:0000167";
/// Ribosome binding site.
pub const SO_RBS: &str = "http://identifiers.org/so/SO:0000139";
/// Coding sequence.
pub const SO_CDS: &str = "http://identifiers.org/so/SO:0000316";
/// Transcription terminator.
pub const SO_TERMINATOR: &str = "http://identifiers.org/so/SO:0000141";
/// Gene.
pub const SO_GENE: &str = "http://identifiers.org/so/SO:0000704";
/// Engineered region.
pub const SO_ENGINEERED_REGION: &str = "http://identifiers.org/so/SO:0000804";

/* BioPAX molecular types (ComponentDefinition types) */

/// DNA region.
pub const BIOPAX_DNA: &str = "http://www.biopax.org/release/biopax-level3.owl#DnaRegion";
/// RNA region.
pub const BIOPAX_RNA: &str = "http://www.biopax.org/release/biopax-level3.owl#RnaRegion";
/// Protein.
pub const BIOPAX_PROTEIN: &str = "http://www.biopax.org/release/biopax-level3.owl#Protein";
/// Small molecule.
pub const BIOPAX_SMALL_MOLECULE: &str =
	"http://www.biopax.org/release/biopax-level3.owl#SmallMolecule";
/// Molecular complex.
pub const BIOPAX_COMPLEX: &str = "http://www.biopax.org/release/biopax-level3.owl#Complex";

/* Model languages (EDAM formats) */

/// SBML model language.
pub const EDAM_SBML: &str = "http://identifiers.org/edam/format_2585";
/// CellML model language.
pub const EDAM_CELLML: &str = "http://identifiers.org/edam/format_3240";
/// BioPAX model language.
pub const EDAM_BIOPAX: &str = "http://identifiers.org/edam/format_3156";
