//! CLI commands and argument parsing

use crate::render::Language;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// typeforge - generate type declarations from sample JSON
#[derive(Parser, Debug)]
#[command(name = "typeforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate type declarations from a JSON file
    Generate(GenerateArgs),

    /// Watch a JSON file and regenerate on every change
    Watch(GenerateArgs),

    /// List supported target languages
    Languages,

    /// Validate that a JSON file parses
    Validate {
        /// Path to the JSON file
        input: PathBuf,
    },
}

/// Arguments shared by `generate` and `watch`
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the JSON file to analyze
    pub input: PathBuf,

    /// Target language
    #[arg(short, long, value_enum)]
    pub lang: Option<Language>,

    /// Output file path (defaults to types.generated.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sample size for array inference
    #[arg(short, long)]
    pub sample: Option<usize>,

    /// Enable nullable types
    #[arg(short, long)]
    pub nullable: bool,

    /// Preserve mixed array element types as a union
    #[arg(short = 't', long)]
    pub strict: bool,

    /// Recursion depth ceiling
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Name for the root record
    #[arg(long)]
    pub root_name: Option<String>,

    /// Delimiter separating hand-written from generated content
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Show output without writing to file
    #[arg(short, long)]
    pub dry_run: bool,

    /// Create a backup before overwriting
    #[arg(short, long)]
    pub backup: bool,
}
