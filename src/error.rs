//! Error type shared by every fallible operation in the crate.

use std::fmt;

use serde_json::Error as SerdeError;

/// Aggregate errors produced by the sbol2 library.
#[derive(Debug)]
pub enum SbolError {
	/// An object with the same identity already exists in the target document or store.
	DuplicateUri(String),
	/// The requested object, property, or file entry does not exist.
	NotFound(String),
	/// A caller supplied an argument the data model rejects.
	InvalidArgument(String),
	/// An operation required SBOL-compliant or typed URIs and the configuration disables them.
	Compliance(String),
	/// A document is missing a namespace the standard requires.
	MissingNamespace(String),
	/// A version string does not follow the Maven-style convention.
	NoncompliantVersion(String),
	/// An operation required the object to belong to a document.
	MissingDocument(String),
	/// A file path could not be opened for reading.
	FileNotFound(String),
	/// Serialized SBOL could not be interpreted.
	Parse(String),
	/// A part-shop request failed; carries the HTTP status (0 when the
	/// request never completed) and the reason.
	Http(u16, String),
	/// Failed to perform IO operations.
	Io(std::io::Error),
	/// Failed to read or write XML.
	Xml(quick_xml::Error),
	/// Failed to decode a JSON response.
	Json(SerdeError),
}

impl fmt::Display for SbolError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DuplicateUri(uri) => write!(f, "an object with URI {uri} already exists"),
			Self::NotFound(id) => write!(f, "{id} not found"),
			Self::InvalidArgument(message) => write!(f, "{message}"),
			Self::Compliance(message) => write!(f, "{message}"),
			Self::MissingNamespace(ns) => write!(f, "document does not declare namespace {ns}"),
			Self::NoncompliantVersion(version) => {
				write!(f, "version {version} is not Maven compliant")
			}
			Self::MissingDocument(message) => write!(f, "{message}"),
			Self::FileNotFound(path) => write!(f, "file {path} not found"),
			Self::Parse(message) => write!(f, "{message}"),
			Self::Http(status, reason) => write!(f, "request failed with status {status}: {reason}"),
			Self::Io(err) => write!(f, "{err}"),
			Self::Xml(err) => write!(f, "{err}"),
			Self::Json(err) => write!(f, "{err}"),
		}
	}
}

impl std::error::Error for SbolError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io(err) => Some(err),
			Self::Xml(err) => Some(err),
			Self::Json(err) => Some(err),
			_ => None,
		}
	}
}

impl From<std::io::Error> for SbolError {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<quick_xml::Error> for SbolError {
	fn from(err: quick_xml::Error) -> Self {
		Self::Xml(err)
	}
}

impl From<SerdeError> for SbolError {
	fn from(err: SerdeError) -> Self {
		Self::Json(err)
	}
}

/// Result type returned by the sbol2 library.
pub type Result<T> = std::result::Result<T, SbolError>;
