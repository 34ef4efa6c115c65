//! PROV-O provenance classes: Activity, Agent, Plan, Association, Usage.

use crate::config::VERSION_STRING;
use crate::constants::{
	PROVO_ACTIVITY, PROVO_AGENT, PROVO_ASSOCIATION, PROVO_PLAN, PROVO_USAGE,
};
use crate::core::{Identified, ObjectStore, SbolClass, SbolObject, TopLevel};
use crate::error::Result;

/// An Activity records how an object came to be: when the work ran, which
/// agents carried it out, and which earlier objects it used.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
	pub(crate) ident: Identified,
	/// When the activity started, as an ISO 8601 timestamp.
	pub started_at_time: Option<String>,
	/// When the activity ended, as an ISO 8601 timestamp.
	pub ended_at_time: Option<String>,
	/// Identities of activities whose outputs fed this one.
	pub was_informed_by: Vec<String>,
	/// Who or what performed the activity, and under which plan.
	pub associations: ObjectStore<Association>,
	/// The objects the activity consumed.
	pub usages: ObjectStore<Usage>,
}

impl Activity {
	/// Creates an activity with no timestamps or participants.
	pub fn new(uri: &str) -> Result<Self> {
		Self::with_version(uri, VERSION_STRING)
	}

	/// Creates an activity with an explicit version.
	pub fn with_version(uri: &str, version: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, version)?,
			started_at_time: None,
			ended_at_time: None,
			was_informed_by: Vec::new(),
			associations: ObjectStore::new(),
			usages: ObjectStore::new(),
		})
	}

	/// Creates an Association scoped under this activity.
	pub fn create_association(&mut self, uri: &str) -> Result<&mut Association> {
		self.associations.create_in(&self.ident, uri)
	}

	/// Creates a Usage scoped under this activity.
	pub fn create_usage(&mut self, uri: &str) -> Result<&mut Usage> {
		self.usages.create_in(&self.ident, uri)
	}
}

impl SbolObject for Activity {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Activity {
	const RDF_TYPE: &'static str = PROVO_ACTIVITY;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}

impl TopLevel for Activity {}

/// An Association binds an agent, and optionally a plan, to an activity
/// along with the roles the agent played.
#[derive(Debug, Clone, PartialEq)]
pub struct Association {
	pub(crate) ident: Identified,
	/// Identity of the responsible Agent.
	pub agent: String,
	/// What the agent did, as role URIs.
	pub roles: Vec<String>,
	/// Identity of the Plan that was followed, if any.
	pub plan: Option<String>,
}

impl Association {
	/// Creates an association with no agent or roles.
	pub fn new(uri: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			agent: String::new(),
			roles: Vec::new(),
			plan: None,
		})
	}
}

impl SbolObject for Association {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Association {
	const RDF_TYPE: &'static str = PROVO_ASSOCIATION;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}

/// A Usage names an object an activity consumed and how it was used.
#[derive(Debug, Clone, PartialEq)]
pub struct Usage {
	pub(crate) ident: Identified,
	/// Identity of the consumed object.
	pub entity: String,
	/// How the entity was used, as role URIs.
	pub roles: Vec<String>,
}

impl Usage {
	/// Creates a usage of the given entity identity.
	pub fn new(uri: &str, entity: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
			entity: entity.to_string(),
			roles: Vec::new(),
		})
	}
}

impl SbolObject for Usage {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Usage {
	const RDF_TYPE: &'static str = PROVO_USAGE;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri, "")
	}
}

/// An Agent is a person, organization, or piece of software responsible for
/// an activity.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
	pub(crate) ident: Identified,
}

impl Agent {
	/// Creates an agent.
	pub fn new(uri: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
		})
	}
}

impl SbolObject for Agent {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Agent {
	const RDF_TYPE: &'static str = PROVO_AGENT;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}

impl TopLevel for Agent {}

/// A Plan is a recorded protocol or procedure an agent followed.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
	pub(crate) ident: Identified,
}

impl Plan {
	/// Creates a plan.
	pub fn new(uri: &str) -> Result<Self> {
		Ok(Self {
			ident: Identified::create(Self::class_name(), uri, VERSION_STRING)?,
		})
	}
}

impl SbolObject for Plan {
	fn identified(&self) -> &Identified {
		&self.ident
	}

	fn identified_mut(&mut self) -> &mut Identified {
		&mut self.ident
	}
}

impl SbolClass for Plan {
	const RDF_TYPE: &'static str = PROVO_PLAN;

	fn with_identity(uri: &str) -> Result<Self> {
		Self::new(uri)
	}
}

impl TopLevel for Plan {}
