// entry-content: run the entry content pipeline from the command line
//
// Reads an entry body from a file (or stdin) and writes the result to
// stdout: the annotated HTML plus TOC as JSON, the bionic HTML, or the
// recovered code blocks as JSON. Logs go to stderr, filtered by RUST_LOG.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use entry_content::{ContentOptions, ContentProcessor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Feed entry content pipeline")]
struct Cli {
    /// JSON options file (camelCase keys; omitted keys keep their defaults)
    #[arg(long, global = true, value_name = "JSON")]
    options: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Annotate headings and print `{ html, tocItems }` as JSON
    Toc {
        /// Input HTML file (default: stdin)
        input: Option<PathBuf>,
    },
    /// Print the body with bionic reading emphasis applied
    Bionic {
        /// Input HTML file (default: stdin)
        input: Option<PathBuf>,
    },
    /// Print every recovered code block as JSON
    CodeBlocks {
        /// Input HTML file (default: stdin)
        input: Option<PathBuf>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .context("Failed to read HTML from stdin")?;
            Ok(html)
        }
    }
}

fn load_options(path: Option<&Path>) -> Result<ContentOptions> {
    match path {
        Some(path) => ContentOptions::from_json_file(path)
            .with_context(|| format!("Failed to load options from {}", path.display())),
        None => Ok(ContentOptions::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let options = load_options(cli.options.as_deref())?;
    let processor = ContentProcessor::new(options).context("Invalid content options")?;

    let output = match &cli.command {
        Command::Toc { input } => {
            let html = read_input(input.as_deref())?;
            let result = processor.build_entry_content_with_toc(&html);
            tracing::info!("Built TOC with {} items", result.toc_items.len());
            serde_json::to_string_pretty(&result).context("Failed to serialize TOC")?
        }
        Command::Bionic { input } => {
            let html = read_input(input.as_deref())?;
            processor.apply_bionic_reading_to_html(&html)
        }
        Command::CodeBlocks { input } => {
            let html = read_input(input.as_deref())?;
            let blocks = processor.extract_code_blocks(&html);
            tracing::info!("Recovered {} code blocks", blocks.len());
            serde_json::to_string_pretty(&blocks).context("Failed to serialize code blocks")?
        }
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}").context("Failed to write output")?;
    Ok(())
}
