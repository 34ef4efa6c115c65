//! Global library configuration: the homespace, URI-compliance modes, and
//! behavior toggles consulted when objects are constructed.
//!
//! New objects mint their identities from the configuration active at
//! construction time. In compliant mode a constructor argument is a bare
//! displayId and the full URI is derived from the homespace; otherwise the
//! argument is taken as a complete URI.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::DEFAULT_NS;
use crate::error::{Result, SbolError};

/// Version assigned to new objects when the caller does not supply one.
pub const VERSION_STRING: &str = "1.0.0";

static CONFIG: Lazy<Mutex<Config>> = Lazy::new(|| Mutex::new(Config::new()));

static DISPLAY_ID_PATTERN: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").expect("display id pattern"));
static VERSION_PATTERN: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^[0-9]+[a-zA-Z0-9_.-]*$").expect("version pattern"));

/// String-keyed configuration options.
///
/// Boolean options take the values `"true"` and `"false"`.
#[derive(Debug, Clone)]
pub struct Config {
	options: BTreeMap<String, String>,
}

impl Default for Config {
	fn default() -> Self {
		Self::new()
	}
}

impl Config {
	/// Creates a configuration with the library defaults: compliant, typed
	/// URIs under the example homespace, validation on write enabled, and
	/// quiet network operations.
	pub fn new() -> Self {
		let mut options = BTreeMap::new();
		options.insert("homespace".to_string(), DEFAULT_NS.trim_end_matches('/').to_string());
		options.insert("sbol_compliant_uris".to_string(), "true".to_string());
		options.insert("sbol_typed_uris".to_string(), "true".to_string());
		options.insert("validate".to_string(), "true".to_string());
		options.insert("verbose".to_string(), "false".to_string());
		Self { options }
	}

	/// Returns the value of `option`, or `InvalidArgument` for unknown names.
	pub fn option(&self, option: &str) -> Result<String> {
		self.options
			.get(option)
			.cloned()
			.ok_or_else(|| SbolError::InvalidArgument(format!("{option} is not a valid configuration option")))
	}

	/// Sets `option` to `value`, validating both the name and, for boolean
	/// options, the value.
	pub fn set(&mut self, option: &str, value: &str) -> Result<()> {
		if !self.options.contains_key(option) {
			return Err(SbolError::InvalidArgument(format!(
				"{option} is not a valid configuration option"
			)));
		}
		let value = if option == "homespace" {
			let trimmed = value.trim_end_matches('/');
			if trimmed.is_empty() {
				return Err(SbolError::InvalidArgument(
					"homespace must be a non-empty URI prefix".to_string(),
				));
			}
			trimmed.to_string()
		} else {
			if value != "true" && value != "false" {
				return Err(SbolError::InvalidArgument(format!(
					"{value} is not a valid value for option {option}; expected true or false"
				)));
			}
			value.to_string()
		};
		self.options.insert(option.to_string(), value);
		Ok(())
	}

	fn flag(&self, option: &str) -> bool {
		self.options.get(option).map(String::as_str) == Some("true")
	}
}

fn config() -> MutexGuard<'static, Config> {
	CONFIG.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Sets the default namespace for newly constructed objects.
///
/// A trailing `/` is stripped so compliant URIs join cleanly.
pub fn set_homespace(homespace: &str) -> Result<()> {
	config().set("homespace", homespace)
}

/// Returns the current homespace.
pub fn get_homespace() -> String {
	config().options.get("homespace").cloned().unwrap_or_default()
}

/// Sets a configuration option by name.
pub fn set_option(option: &str, value: &str) -> Result<()> {
	config().set(option, value)
}

/// Returns a configuration option by name.
pub fn get_option(option: &str) -> Result<String> {
	config().option(option)
}

pub(crate) fn compliant_uris_enabled() -> bool {
	config().flag("sbol_compliant_uris")
}

pub(crate) fn typed_uris_enabled() -> bool {
	config().flag("sbol_typed_uris")
}

pub(crate) fn validation_enabled() -> bool {
	config().flag("validate")
}

pub(crate) fn verbose() -> bool {
	config().flag("verbose")
}

/// Extracts the class name from an RDF type URI: the fragment after `#`,
/// or the final path segment when there is no fragment.
pub fn class_name_of(rdf_type: &str) -> &str {
	match rdf_type.rsplit_once('#') {
		Some((_, name)) => name,
		None => rdf_type.rsplit('/').next().unwrap_or(rdf_type),
	}
}

/// Builds a compliant URI for an object of `class_name` under the current
/// homespace: `{homespace}/{class_name}/{display_id}/{version}` with typed
/// URIs enabled, `{homespace}/{display_id}/{version}` without. An empty
/// version omits the final segment.
pub(crate) fn compliant_uri(class_name: &str, display_id: &str, version: &str) -> String {
	let homespace = get_homespace();
	let mut uri = if typed_uris_enabled() {
		format!("{homespace}/{class_name}/{display_id}")
	} else {
		format!("{homespace}/{display_id}")
	};
	if !version.is_empty() {
		uri.push('/');
		uri.push_str(version);
	}
	uri
}

/// Checks a displayId against the compliant identifier pattern.
pub(crate) fn validate_display_id(display_id: &str) -> Result<()> {
	if DISPLAY_ID_PATTERN.is_match(display_id) {
		Ok(())
	} else {
		Err(SbolError::Compliance(format!(
			"{display_id} is not a valid displayId; ids begin with a letter or underscore and contain only alphanumerics and underscores"
		)))
	}
}

/// Checks a version string against the Maven-style convention.
pub(crate) fn validate_version(version: &str) -> Result<()> {
	if version.is_empty() || VERSION_PATTERN.is_match(version) {
		Ok(())
	} else {
		Err(SbolError::NoncompliantVersion(version.to_string()))
	}
}

#[cfg(test)]
pub(crate) mod test_support {
	use std::sync::{Mutex, MutexGuard, PoisonError};

	use once_cell::sync::Lazy;

	static LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

	/// Serializes tests that mutate the global configuration.
	pub(crate) fn lock() -> MutexGuard<'static, ()> {
		LOCK.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn defaults_are_compliant_and_typed() {
		let _guard = test_support::lock();
		assert_eq!(get_option("sbol_compliant_uris").unwrap(), "true");
		assert_eq!(get_option("sbol_typed_uris").unwrap(), "true");
		assert_eq!(get_homespace(), "http://examples.org");
	}

	#[test]
	fn homespace_strips_trailing_slash() {
		let _guard = test_support::lock();
		set_homespace("http://sbols.org/CRISPR_Example/").unwrap();
		assert_eq!(get_homespace(), "http://sbols.org/CRISPR_Example");
		set_homespace(DEFAULT_NS).unwrap();
	}

	#[test]
	fn unknown_option_is_rejected() {
		let _guard = test_support::lock();
		assert!(set_option("shoelace_color", "true").is_err());
		assert!(get_option("shoelace_color").is_err());
	}

	#[test]
	fn boolean_options_reject_other_values() {
		let _guard = test_support::lock();
		assert!(set_option("sbol_typed_uris", "True").is_err());
		assert_eq!(get_option("sbol_typed_uris").unwrap(), "true");
	}

	#[test]
	fn compliant_uri_shapes() {
		let _guard = test_support::lock();
		assert_eq!(
			compliant_uri("ComponentDefinition", "BB0001", "1.0.0"),
			"http://examples.org/ComponentDefinition/BB0001/1.0.0"
		);
		set_option("sbol_typed_uris", "false").unwrap();
		assert_eq!(compliant_uri("ComponentDefinition", "BB0001", "1.0.0"), "http://examples.org/BB0001/1.0.0");
		assert_eq!(compliant_uri("ComponentDefinition", "BB0001", ""), "http://examples.org/BB0001");
		set_option("sbol_typed_uris", "true").unwrap();
	}

	#[test]
	fn display_id_pattern_enforced() {
		assert!(validate_display_id("pIKE_Toggle_1").is_ok());
		assert!(validate_display_id("_hidden").is_ok());
		assert!(validate_display_id("8oops").is_err());
		assert!(validate_display_id("has space").is_err());
		assert!(validate_display_id("").is_err());
	}

	#[test]
	fn version_pattern_enforced() {
		assert!(validate_version("1.0.0").is_ok());
		assert!(validate_version("2.1-beta").is_ok());
		assert!(validate_version("").is_ok());
		assert!(validate_version("beta").is_err());
	}
}
