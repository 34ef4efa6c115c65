//! Client for SynBioHub-style part repositories.
//!
//! All requests are blocking. Authenticated calls send the token obtained by
//! [`PartShop::login`] in the `X-authorization` header; anonymous pulls work
//! against public repositories with the header left empty.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;
use ureq::http;

use crate::config;
use crate::constants::SBOL_COMPONENT_DEFINITION;
use crate::document::Document;
use crate::error::{Result, SbolError};

/// A remote part repository.
#[derive(Debug, Clone)]
pub struct PartShop {
	resource: String,
	key: String,
}

/// Criteria for an exact search: object class plus property/value pairs.
#[derive(Debug, Clone)]
pub struct SearchQuery {
	/// RDF type of the objects to search for.
	pub object_type: String,
	/// Index of the first record to return.
	pub offset: usize,
	/// Maximum number of records to return.
	pub limit: usize,
	/// Property URI and value pairs all matches must carry. Values starting
	/// with `http` are matched as URIs, anything else as literals.
	pub criteria: Vec<(String, String)>,
}

impl Default for SearchQuery {
	fn default() -> Self {
		Self::new()
	}
}

impl SearchQuery {
	/// Creates a query for ComponentDefinitions with the default paging.
	pub fn new() -> Self {
		Self {
			object_type: SBOL_COMPONENT_DEFINITION.to_string(),
			offset: 0,
			limit: 25,
			criteria: Vec::new(),
		}
	}

	/// Sets the RDF type of the objects to search for.
	pub fn with_object_type(mut self, object_type: &str) -> Self {
		self.object_type = object_type.to_string();
		self
	}

	/// Sets the paging window.
	pub fn with_paging(mut self, offset: usize, limit: usize) -> Self {
		self.offset = offset;
		self.limit = limit;
		self
	}

	/// Adds a property/value criterion.
	pub fn with_criterion(mut self, property: &str, value: &str) -> Self {
		self.criteria.push((property.to_string(), value.to_string()));
		self
	}

	/// Renders the criteria in the repository's query syntax: property URIs
	/// in angle brackets, URI values likewise, literal values single-quoted,
	/// each criterion terminated by `&`.
	fn criteria_string(&self) -> String {
		let mut criteria = format!("objectType={}&", config::class_name_of(&self.object_type));
		for (property, value) in &self.criteria {
			criteria.push_str(&format!("<{property}>="));
			if value.starts_with("http") {
				criteria.push_str(&format!("<{value}>&"));
			} else {
				criteria.push_str(&format!("'{value}'&"));
			}
		}
		criteria
	}
}

/// One row of a search result.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRecord {
	/// Identity of the matched object.
	#[serde(rename = "uri")]
	pub identity: String,
	/// The object's displayId, when the repository reports one.
	#[serde(rename = "displayId", default)]
	pub display_id: Option<String>,
	/// Human-readable name.
	#[serde(default)]
	pub name: Option<String>,
	/// Free-text description.
	#[serde(default)]
	pub description: Option<String>,
	/// Version string.
	#[serde(default)]
	pub version: Option<String>,
}

/// Metadata accompanying a document submission.
#[derive(Debug, Clone)]
pub struct Submission {
	/// Identifier of the submission's root collection.
	pub id: String,
	/// Version of the submission.
	pub version: String,
	/// Display name shown by the repository.
	pub name: String,
	/// Description shown by the repository.
	pub description: String,
	/// Citation list, comma-separated PubMed identifiers.
	pub citations: String,
	/// Whether an existing submission with the same identifier is replaced.
	pub overwrite: bool,
}

impl Submission {
	/// Creates a submission titled after its identifier.
	pub fn new(id: &str, version: &str) -> Self {
		Self {
			id: id.to_string(),
			version: version.to_string(),
			name: id.to_string(),
			description: id.to_string(),
			citations: String::new(),
			overwrite: false,
		}
	}

	/// Sets the display name.
	pub fn with_name(mut self, name: &str) -> Self {
		self.name = name.to_string();
		self
	}

	/// Sets the description.
	pub fn with_description(mut self, description: &str) -> Self {
		self.description = description.to_string();
		self
	}

	/// Replaces an existing submission instead of failing on collision.
	pub fn with_overwrite(mut self) -> Self {
		self.overwrite = true;
		self
	}
}

impl PartShop {
	/// Points the client at a repository URL.
	///
	/// A single trailing `/` is stripped; only http and https URLs are
	/// accepted.
	pub fn new(url: &str) -> Result<Self> {
		let resource = url.strip_suffix('/').unwrap_or(url);
		if !resource.starts_with("http://") && !resource.starts_with("https://") {
			return Err(SbolError::InvalidArgument(format!(
				"{url} is not an http or https repository URL"
			)));
		}
		Ok(Self { resource: resource.to_string(), key: String::new() })
	}

	/// The repository URL this client talks to.
	pub fn resource(&self) -> &str {
		&self.resource
	}

	/// Uses a previously issued session token instead of [`PartShop::login`].
	pub fn with_token(mut self, token: &str) -> Self {
		self.key = token.to_string();
		self
	}

	/// Authenticates and stores the session token used by later requests.
	pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
		let url = format!("{}/remoteLogin", self.resource);
		if config::verbose() {
			eprintln!("POST {url}");
		}
		let mut response = ureq::post(&url)
			.header("Accept", "text/plain")
			.send_form([("email", email), ("password", password)])
			.map_err(|err| request_failed(&url, err))?;
		self.key = read_body(&mut response)?.trim().to_string();
		Ok(())
	}

	/// Fetches the object at `uri` (and everything serialized with it) into
	/// a fresh document.
	pub fn pull(&self, uri: &str) -> Result<Document> {
		let mut document = Document::new();
		self.pull_into(uri, &mut document)?;
		Ok(document)
	}

	/// Fetches the object at `uri` into an existing document.
	///
	/// Relative URIs are resolved against the repository URL. Pulling a
	/// collection returns every member the server chooses to inline.
	pub fn pull_into(&self, uri: &str, document: &mut Document) -> Result<()> {
		let url = format!("{}/sbol", self.absolute(uri));
		let body = self.fetch(&url, "text/plain")?;
		document.append_string(&body)
	}

	/// Free-text search over the repository.
	pub fn search(&self, text: &str, offset: usize, limit: usize) -> Result<Vec<SearchRecord>> {
		let url = format!(
			"{}/remoteSearch/{}/?offset={offset}&limit={limit}",
			self.resource,
			encode_http(text)
		);
		self.fetch_records(&url)
	}

	/// Search constrained to an object class and exact property values.
	pub fn search_exact(&self, query: &SearchQuery) -> Result<Vec<SearchRecord>> {
		let url = format!(
			"{}/remoteSearch/{}/?offset={}&limit={}",
			self.resource,
			encode_http(&query.criteria_string()),
			query.offset,
			query.limit
		);
		self.fetch_records(&url)
	}

	/// Total number of records matching `query`, ignoring paging.
	pub fn search_count(&self, query: &SearchQuery) -> Result<usize> {
		let url =
			format!("{}/searchCount/{}", self.resource, encode_http(&query.criteria_string()));
		let body = self.fetch(&url, "text/plain")?;
		body.trim()
			.parse::<usize>()
			.map_err(|_| SbolError::Parse(format!("searchCount returned {body:?}")))
	}

	/// Submits `document` to the repository and returns the server message.
	pub fn submit(&self, document: &Document, submission: &Submission) -> Result<String> {
		let url = format!("{}/submit", self.resource);
		let xml = document.write_string()?;
		let overwrite = if submission.overwrite { "1" } else { "0" };
		let fields = [
			("id", submission.id.as_str()),
			("version", submission.version.as_str()),
			("name", submission.name.as_str()),
			("description", submission.description.as_str()),
			("citations", submission.citations.as_str()),
			("overwrite_merge", overwrite),
			("user", self.key.as_str()),
		];
		let boundary = boundary();
		let body = multipart(&boundary, &fields, Some(("file", "document.xml", xml.as_bytes())));
		self.post_multipart(&url, &boundary, &body)
	}

	/// Uploads a file as an Attachment of the object at `top_level_uri`.
	pub fn attach_file(&self, top_level_uri: &str, path: impl AsRef<Path>) -> Result<String> {
		let path = path.as_ref();
		let bytes =
			fs::read(path).map_err(|_| SbolError::FileNotFound(path.display().to_string()))?;
		let filename = path.file_name().and_then(|name| name.to_str()).unwrap_or("attachment");
		let url = format!("{}/attach", self.absolute(top_level_uri));
		let boundary = boundary();
		let body = multipart(&boundary, &[], Some(("file", filename, &bytes)));
		self.post_multipart(&url, &boundary, &body)
	}

	/// Downloads the file behind an Attachment into `target`.
	///
	/// When `target` is a directory the server's Content-Disposition
	/// filename is used. Returns the path written.
	pub fn download_attachment(
		&self,
		attachment_uri: &str,
		target: impl AsRef<Path>,
	) -> Result<PathBuf> {
		let url = format!("{}/download", self.absolute(attachment_uri));
		if config::verbose() {
			eprintln!("GET {url}");
		}
		let mut response = ureq::get(&url)
			.header("X-authorization", self.key.as_str())
			.call()
			.map_err(|err| request_failed(&url, err))?;

		let target = target.as_ref();
		let path = if target.is_dir() {
			let filename = response
				.headers()
				.get("Content-Disposition")
				.and_then(|value| value.to_str().ok())
				.and_then(disposition_filename)
				.unwrap_or_else(|| "attachment".to_string());
			target.join(filename)
		} else {
			target.to_path_buf()
		};

		let mut bytes = Vec::new();
		response.body_mut().as_reader().read_to_end(&mut bytes)?;
		fs::write(&path, bytes)?;
		Ok(path)
	}

	fn absolute(&self, uri: &str) -> String {
		if uri.starts_with("http://") || uri.starts_with("https://") {
			uri.to_string()
		} else {
			format!("{}/{uri}", self.resource)
		}
	}

	fn fetch(&self, url: &str, accept: &str) -> Result<String> {
		if config::verbose() {
			eprintln!("GET {url}");
		}
		let mut response = ureq::get(url)
			.header("Accept", accept)
			.header("X-authorization", self.key.as_str())
			.call()
			.map_err(|err| request_failed(url, err))?;
		read_body(&mut response)
	}

	fn fetch_records(&self, url: &str) -> Result<Vec<SearchRecord>> {
		let body = self.fetch(url, "application/json")?;
		Ok(serde_json::from_str(&body)?)
	}

	fn post_multipart(&self, url: &str, boundary: &str, body: &[u8]) -> Result<String> {
		if config::verbose() {
			eprintln!("POST {url}");
		}
		let content_type = format!("multipart/form-data; boundary={boundary}");
		let mut response = ureq::post(url)
			.header("X-authorization", self.key.as_str())
			.header("Content-Type", content_type.as_str())
			.send(body)
			.map_err(|err| request_failed(url, err))?;
		read_body(&mut response)
	}
}

fn request_failed(url: &str, err: ureq::Error) -> SbolError {
	match err {
		ureq::Error::StatusCode(code) => {
			SbolError::Http(code, format!("the repository rejected {url}"))
		}
		err => SbolError::Http(0, format!("request to {url} failed: {err}")),
	}
}

fn read_body(response: &mut http::Response<ureq::Body>) -> Result<String> {
	let mut body = String::new();
	response.body_mut().as_reader().read_to_string(&mut body)?;
	Ok(body)
}

/// Percent-encodes the characters the repository's query router reserves.
fn encode_http(text: &str) -> String {
	text.replace('&', "%26")
		.replace('=', "%3D")
		.replace('<', "%3C")
		.replace('>', "%3E")
		.replace(':', "%3A")
		.replace('#', "%23")
		.replace('\'', "%27")
		.replace(' ', "%20")
		.replace('/', "%2F")
}

fn boundary() -> String {
	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map(|elapsed| elapsed.as_nanos())
		.unwrap_or_default();
	format!("----sbol2-{nanos:x}")
}

/// Assembles a multipart/form-data body by hand.
fn multipart(boundary: &str, fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> Vec<u8> {
	let mut body = Vec::new();
	for (name, value) in fields {
		body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
		body.extend_from_slice(
			format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
		);
		body.extend_from_slice(value.as_bytes());
		body.extend_from_slice(b"\r\n");
	}
	if let Some((name, filename, bytes)) = file {
		body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
		body.extend_from_slice(
			format!(
				"Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
			)
			.as_bytes(),
		);
		body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
		body.extend_from_slice(bytes);
		body.extend_from_slice(b"\r\n");
	}
	body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
	body
}

/// Extracts the filename parameter from a Content-Disposition header.
fn disposition_filename(header: &str) -> Option<String> {
	let start = header.find("filename=")? + "filename=".len();
	let rest = header[start..].trim_start();
	let filename = if let Some(quoted) = rest.strip_prefix('"') {
		quoted.split('"').next().unwrap_or_default()
	} else {
		rest.split(';').next().unwrap_or_default().trim()
	};
	if filename.is_empty() { None } else { Some(filename.to_string()) }
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::constants::SO_CDS;

	#[test]
	fn resource_url_is_normalized() {
		let shop = PartShop::new("https://synbiohub.org/").unwrap();
		assert_eq!(shop.resource(), "https://synbiohub.org");
		assert!(PartShop::new("ftp://synbiohub.org").is_err());
	}

	#[test]
	fn relative_uris_resolve_against_the_resource() {
		let shop = PartShop::new("https://synbiohub.org").unwrap();
		assert_eq!(
			shop.absolute("public/igem/BBa_R0010/1"),
			"https://synbiohub.org/public/igem/BBa_R0010/1"
		);
		assert_eq!(
			shop.absolute("https://synbiohub.org/public/igem/BBa_R0010/1"),
			"https://synbiohub.org/public/igem/BBa_R0010/1"
		);
	}

	#[test]
	fn reserved_characters_are_encoded() {
		assert_eq!(
			encode_http("<http://identifiers.org/so/SO:0000167>"),
			"%3Chttp%3A%2F%2Fidentifiers.org%2Fso%2FSO%3A0000167%3E"
		);
		assert_eq!(encode_http("pLac promoter"), "pLac%20promoter");
		assert_eq!(encode_http("a&b='c'"), "a%26b%3D%27c%27");
	}

	#[test]
	fn criteria_render_uris_and_literals_differently() {
		let query = SearchQuery::new()
			.with_criterion("http://sbols.org/v2#role", SO_CDS)
			.with_criterion("http://purl.org/dc/terms/title", "GFP");
		assert_eq!(
			query.criteria_string(),
			format!(
				"objectType=ComponentDefinition&<http://sbols.org/v2#role>=<{SO_CDS}>&<http://purl.org/dc/terms/title>='GFP'&"
			)
		);
	}

	#[test]
	fn multipart_bodies_carry_fields_and_file() {
		let body = multipart(
			"XX",
			&[("id", "demo"), ("version", "1")],
			Some(("file", "doc.xml", b"<rdf/>")),
		);
		let text = String::from_utf8(body).unwrap();
		assert_eq!(
			text,
			"--XX\r\nContent-Disposition: form-data; name=\"id\"\r\n\r\ndemo\r\n\
			 --XX\r\nContent-Disposition: form-data; name=\"version\"\r\n\r\n1\r\n\
			 --XX\r\nContent-Disposition: form-data; name=\"file\"; filename=\"doc.xml\"\r\n\
			 Content-Type: application/octet-stream\r\n\r\n<rdf/>\r\n--XX--\r\n"
		);
	}

	#[test]
	fn disposition_filenames_are_extracted() {
		assert_eq!(
			disposition_filename("attachment; filename=\"results.csv\""),
			Some("results.csv".to_string())
		);
		assert_eq!(
			disposition_filename("attachment; filename=results.csv; size=10"),
			Some("results.csv".to_string())
		);
		assert_eq!(disposition_filename("inline"), None);
	}
}
