//! CLI entrypoint.

use std::error::Error;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use sbol2::{Document, PartShop, config};

#[derive(Args, Clone)]
struct CommonArgs {
	/// Show network requests as they are made
	#[arg(short = 'v', long, default_value_t = false)]
	verbose: bool,

	/// Disable ANSI colors in CLI output
	#[arg(long, default_value_t = false)]
	no_color: bool,
}

#[derive(Args, Clone)]
struct RepoArgs {
	/// Repository URL, e.g. https://synbiohub.org
	#[arg(short = 'u', long = "url")]
	url: String,

	/// Session token from an earlier login
	#[arg(short = 't', long)]
	token: Option<String>,
}

#[derive(Args, Clone)]
struct ValidateArgs {
	/// RDF/XML file to check
	file: PathBuf,

	#[command(flatten)]
	common: CommonArgs,
}

#[derive(Args, Clone)]
struct InfoArgs {
	/// RDF/XML file to summarize
	file: PathBuf,

	#[command(flatten)]
	common: CommonArgs,
}

#[derive(Args, Clone)]
struct PullArgs {
	/// Identity URI (or repository-relative path) of the object to fetch
	uri: String,

	/// File to write; prints to stdout when omitted
	#[arg(short = 'o', long)]
	output: Option<PathBuf>,

	#[command(flatten)]
	repo: RepoArgs,

	#[command(flatten)]
	common: CommonArgs,
}

#[derive(Args, Clone)]
struct SearchArgs {
	/// Free-text search term
	text: String,

	/// Index of the first record to return
	#[arg(long, default_value_t = 0)]
	offset: usize,

	/// Maximum number of records to return
	#[arg(long, default_value_t = 25)]
	limit: usize,

	#[command(flatten)]
	repo: RepoArgs,

	#[command(flatten)]
	common: CommonArgs,
}

#[derive(Subcommand, Clone)]
enum Command {
	/// Check a document against the SBOL validation rules.
	Validate(ValidateArgs),
	/// Summarize the objects in a document.
	Info(InfoArgs),
	/// Fetch an object and everything serialized with it from a repository.
	Pull(PullArgs),
	/// Free-text search over a repository.
	Search(SearchArgs),
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options for the sbol2 CLI.
struct Cli {
	#[command(subcommand)]
	command: Command,
}

/// Apply flags that configure the library before a command runs.
fn apply_common(common: &CommonArgs) -> Result<(), Box<dyn Error>> {
	if common.verbose {
		config::set_option("verbose", "true")?;
	}
	Ok(())
}

/// Build a repository client, applying any session token.
fn build_part_shop(repo: &RepoArgs) -> Result<PartShop, Box<dyn Error>> {
	let mut shop = PartShop::new(&repo.url)?;
	if let Some(token) = &repo.token {
		shop = shop.with_token(token);
	}
	Ok(shop)
}

/// Read a document and print its validation messages.
///
/// Returns whether the document passed every rule.
fn run_validate(args: &ValidateArgs) -> Result<bool, Box<dyn Error>> {
	let document = Document::read(&args.file)?;
	let messages = document.validate();
	let color = should_color_output(&args.common);

	if messages.is_empty() {
		if color {
			println!("{}", "Valid.".green());
		} else {
			println!("Valid.");
		}
		return Ok(true);
	}

	for message in &messages {
		if color {
			println!("{}", message.red());
		} else {
			println!("{message}");
		}
	}
	Ok(false)
}

/// Print per-class counts followed by a listing of every top level.
fn run_info(args: &InfoArgs) -> Result<(), Box<dyn Error>> {
	let document = Document::read(&args.file)?;
	print!("{}", document.summary());

	let entries = document.manifest();
	if entries.is_empty() {
		return Ok(());
	}

	let label_width = entries
		.iter()
		.map(|(label, _)| label.len())
		.max()
		.unwrap_or(0);

	println!();
	for (label, identified) in entries {
		match &identified.name {
			Some(name) => println!("{label:<label_width$} {} ({name})", identified.identity()),
			None => println!("{label:<label_width$} {}", identified.identity()),
		}
	}
	Ok(())
}

/// Fetch an object from a repository and write or print the document.
fn run_pull(args: &PullArgs) -> Result<(), Box<dyn Error>> {
	let shop = build_part_shop(&args.repo)?;
	let document = shop.pull(&args.uri)?;

	match &args.output {
		Some(path) => {
			document.write(path)?;
			eprintln!("Wrote {} objects to {}", document.len(), path.display());
		}
		None => print!("{}", document.write_string()?),
	}
	Ok(())
}

/// Search a repository and print the matching records.
fn run_search(args: &SearchArgs) -> Result<(), Box<dyn Error>> {
	let shop = build_part_shop(&args.repo)?;
	let records = shop.search(&args.text, args.offset, args.limit)?;

	if records.is_empty() {
		println!("No matches found for \"{}\".", args.text);
		return Ok(());
	}

	let display_width = records
		.iter()
		.map(|record| record.display_id.as_deref().unwrap_or("-").len())
		.max()
		.unwrap_or(0);
	let identity_width = records
		.iter()
		.map(|record| record.identity.len())
		.max()
		.unwrap_or(0);

	let mut buffer = String::new();
	for record in &records {
		let display_id = record.display_id.as_deref().unwrap_or("-");
		let name = record.name.as_deref().unwrap_or("-");
		let line = format!(
			"{display_id:<display_width$} {identity:<identity_width$} {name}\n",
			identity = record.identity
		);
		let highlighted_line = if should_color_output(&args.common) {
			highlight_matches(&line, &args.text)
		} else {
			line
		};
		buffer.push_str(&highlighted_line);
	}

	print!("{}", buffer);
	Ok(())
}

fn should_color_output(common: &CommonArgs) -> bool {
	if common.no_color {
		return false;
	}
	if std::env::var_os("NO_COLOR").is_some() {
		return false;
	}
	if std::env::var("TERM").ok().as_deref() == Some("dumb") {
		return false;
	}
	std::io::stdout().is_terminal()
}

/// Highlight all occurrences of the search term in the given text.
///
/// Matching is case-insensitive, like the server's own free-text search.
/// Matches are highlighted in bright green and bold using ANSI escape codes.
fn highlight_matches(text: &str, query: &str) -> String {
	if query.is_empty() {
		return text.to_string();
	}
	let search_text = text.to_lowercase();
	let search_query = query.to_lowercase();

	let mut result = String::with_capacity(text.len() * 2);
	let mut last_end = 0;
	let mut search_start = 0;

	while let Some(pos) = search_text[search_start..].find(&search_query) {
		let absolute_pos = search_start + pos;
		result.push_str(&text[last_end..absolute_pos]);
		let match_end = absolute_pos + query.len();
		let matched_text = &text[absolute_pos..match_end];
		result.push_str(&matched_text.to_string().bright_green().bold().to_string());
		last_end = match_end;
		search_start = match_end;
	}

	result.push_str(&text[last_end..]);
	result
}

fn main() {
	let cli = Cli::parse();

	match run(cli) {
		Ok(true) => {}
		Ok(false) => process::exit(1),
		Err(e) => {
			eprintln!("{e}");
			process::exit(1);
		}
	}
}

/// Dispatch the parsed command line; the returned flag is process success.
fn run(cli: Cli) -> Result<bool, Box<dyn Error>> {
	match cli.command {
		Command::Validate(args) => {
			apply_common(&args.common)?;
			run_validate(&args)
		}
		Command::Info(args) => {
			apply_common(&args.common)?;
			run_info(&args)?;
			Ok(true)
		}
		Command::Pull(args) => {
			apply_common(&args.common)?;
			run_pull(&args)?;
			Ok(true)
		}
		Command::Search(args) => {
			apply_common(&args.common)?;
			run_search(&args)?;
			Ok(true)
		}
	}
}
