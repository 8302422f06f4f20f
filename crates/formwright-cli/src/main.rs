//! Formwright CLI
//!
//! Command-line shell around the `formwright` library: reads an XML
//! form definition, applies styling from flags and/or a JSON file, and
//! writes the generated HTML document.
//!
//! ## Usage
//!
//! ```bash
//! formwright contact.xml
//! formwright contact.xml -o contact.html --font georgia
//! formwright - --stdout < contact.xml
//! formwright contact.xml --styling brand.json --button-color "#336699"
//! ```

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use formwright::StylingOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "formwright")]
#[command(about = "Convert XML form definitions into styled HTML documents", long_about = None)]
#[command(version)]
struct Cli {
	/// XML form definition to convert ("-" reads standard input)
	#[arg(value_name = "INPUT")]
	input: PathBuf,

	/// Where to write the generated HTML
	#[arg(short, long, value_name = "PATH", default_value = "generated_form.html")]
	output: PathBuf,

	/// Print the document to standard output instead of writing a file
	#[arg(long)]
	stdout: bool,

	/// JSON file with styling options (individual flags override it)
	#[arg(long, value_name = "PATH")]
	styling: Option<PathBuf>,

	/// Font for the generated stylesheet
	#[arg(long, value_enum)]
	font: Option<Font>,

	/// Page background color
	#[arg(long, value_name = "COLOR")]
	background_color: Option<String>,

	/// Body text color
	#[arg(long, value_name = "COLOR")]
	text_color: Option<String>,

	/// Form title color
	#[arg(long, value_name = "COLOR")]
	title_color: Option<String>,

	/// Input background color
	#[arg(long, value_name = "COLOR")]
	input_background_color: Option<String>,

	/// Input text color
	#[arg(long, value_name = "COLOR")]
	input_text_color: Option<String>,

	/// Submit button color
	#[arg(long, value_name = "COLOR")]
	button_color: Option<String>,

	/// Submit button text color
	#[arg(long, value_name = "COLOR")]
	button_text_color: Option<String>,

	/// Submit button hover color
	#[arg(long, value_name = "COLOR")]
	button_hover_color: Option<String>,

	/// Print the parsed form model as JSON and exit
	#[arg(long)]
	dump_model: bool,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

/// Built-in font choices for the generated stylesheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Font {
	Arial,
	Verdana,
	TimesNewRoman,
	CourierNew,
	Georgia,
}

impl Font {
	fn family(self) -> &'static str {
		match self {
			Font::Arial => "Arial",
			Font::Verdana => "Verdana",
			Font::TimesNewRoman => "Times New Roman",
			Font::CourierNew => "Courier New",
			Font::Georgia => "Georgia",
		}
	}
}

fn main() {
	let cli = Cli::parse();

	init_tracing(cli.verbose);

	if let Err(e) = run(cli) {
		eprintln!("Error: {:#}", e);
		process::exit(1);
	}
}

/// Log to stderr so `--stdout` output stays clean. `RUST_LOG` overrides
/// the verbosity flags.
fn init_tracing(verbose: u8) {
	let default_level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};

	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::new(
			std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
		))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();
}

fn run(cli: Cli) -> Result<()> {
	let xml = read_input(&cli.input)?;
	let styling = resolve_styling(&cli)?;

	if cli.dump_model {
		let model = formwright::parse(&xml)?;
		let json =
			serde_json::to_string_pretty(&model).context("failed to serialize form model")?;
		println!("{}", json);
		return Ok(());
	}

	let html = formwright::convert(&xml, &styling)?;

	if cli.stdout {
		print!("{}", html);
	} else {
		fs::write(&cli.output, &html)
			.with_context(|| format!("failed to write {}", cli.output.display()))?;
		tracing::info!(path = %cli.output.display(), bytes = html.len(), "wrote HTML form");
	}

	Ok(())
}

fn read_input(path: &Path) -> Result<String> {
	if path.as_os_str() == "-" {
		let mut buf = String::new();
		std::io::stdin()
			.read_to_string(&mut buf)
			.context("failed to read standard input")?;
		Ok(buf)
	} else {
		fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
	}
}

/// Styling file first, then individual flags on top.
fn resolve_styling(cli: &Cli) -> Result<StylingOptions> {
	let mut styling = match &cli.styling {
		Some(path) => {
			let raw = fs::read_to_string(path)
				.with_context(|| format!("failed to read {}", path.display()))?;
			serde_json::from_str(&raw)
				.with_context(|| format!("invalid styling file {}", path.display()))?
		}
		None => StylingOptions::default(),
	};

	if let Some(font) = cli.font {
		styling.font = font.family().to_string();
	}
	if let Some(color) = &cli.background_color {
		styling.background_color = color.clone();
	}
	if let Some(color) = &cli.text_color {
		styling.text_color = color.clone();
	}
	if let Some(color) = &cli.title_color {
		styling.title_color = color.clone();
	}
	if let Some(color) = &cli.input_background_color {
		styling.input_background_color = color.clone();
	}
	if let Some(color) = &cli.input_text_color {
		styling.input_text_color = color.clone();
	}
	if let Some(color) = &cli.button_color {
		styling.button_color = color.clone();
	}
	if let Some(color) = &cli.button_text_color {
		styling.button_text_color = color.clone();
	}
	if let Some(color) = &cli.button_hover_color {
		styling.button_hover_color = color.clone();
	}

	Ok(styling)
}
