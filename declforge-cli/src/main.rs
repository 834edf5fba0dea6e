//! declforge CLI
//!
//! Compiles a JSON schema document into TypeScript declarations and writes
//! them under an output folder. Nothing is written unless the whole
//! universe compiles.

mod writer;

use anyhow::{Context, Result};
use clap::Parser;
use declforge_codegen::{Compiler, CompilerConfig, OutputMode};
use declforge_schema::{TableLookup, load_document};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "declforge")]
#[command(about = "Compile schema entities into TypeScript classes or interfaces")]
struct Cli {
    /// Schema document (JSON)
    input: PathBuf,

    /// Folder generated files are written under
    out_dir: PathBuf,

    /// Output mode: class or interface
    #[arg(short, long, default_value = "class", value_parser = parse_mode)]
    mode: OutputMode,

    /// Extra table/enum lookup (JSON object of name to logical path)
    #[arg(short, long)]
    tables: Option<PathBuf>,

    /// Logical subdirectory for generated schema files
    #[arg(long, default_value = "ts-schema")]
    output_dir: String,

    /// Extension of generated files
    #[arg(long, default_value = "ts")]
    extension: String,

    /// Keep the later entity when names repeat instead of failing
    #[arg(long)]
    allow_duplicate_names: bool,

    /// Import enum types through the lookup
    #[arg(long)]
    import_enums: bool,

    /// Print target paths without writing
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn config(&self) -> CompilerConfig {
        CompilerConfig::new()
            .with_mode(self.mode)
            .with_output_dir(&self.output_dir)
            .with_extension(&self.extension)
            .allow_duplicate_names(self.allow_duplicate_names)
            .import_enums(self.import_enums)
    }
}

fn parse_mode(s: &str) -> Result<OutputMode, String> {
    OutputMode::parse(s).ok_or_else(|| format!("unknown mode '{s}', expected class or interface"))
}

fn load_tables(path: &Path) -> Result<TableLookup> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tables {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("invalid tables {}", path.display()))
}

fn run(cli: Cli) -> Result<()> {
    let mut document = load_document(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    if let Some(path) = &cli.tables {
        document.merge_tables(load_tables(path)?);
    }

    let output = Compiler::new(cli.config()).compile_document(&document)?;

    if cli.dry_run {
        for file in output.all_files() {
            println!("{}", file.filename);
        }
        return Ok(());
    }

    let written = writer::write_output(&output, &cli.out_dir)
        .with_context(|| format!("failed to write into {}", cli.out_dir.display()))?;
    tracing::info!("Wrote {} files to {}", written.len(), cli.out_dir.display());

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
