//! Command-line argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser)]
#[command(
    name = "decant",
    version,
    about = "Inspect a directory of frontmatter content files",
    long_about = "decant treats a directory of text files as a collection of records, each \
                  split into a YAML frontmatter block and a body. List slugs, show records, \
                  read frontmatter fields, or glob the directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List every entry of a collection
    List(ListArgs),
    /// Show the frontmatter (and body) of one entry
    Show(ShowArgs),
    /// Print frontmatter fields of one entry
    Get(GetArgs),
    /// List files matching a glob, without the collection extension
    Glob(GlobArgs),
}

/// Options identifying a collection
#[derive(Args, Debug, Clone)]
pub struct CollectionOptions {
    /// Root directory of the collection
    pub dir: PathBuf,

    /// Extension specifier, e.g. md, .html.erb, .{md,markdown}
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Follow symbolic links when walking the directory
    #[arg(long)]
    pub follow_links: bool,

    /// Include hidden files (starting with .)
    #[arg(long)]
    pub include_hidden: bool,

    /// Maximum file size to read, in bytes
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,
}

/// Output formats for structured values
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// YAML output
    #[default]
    Yaml,
    /// JSON output
    Json,
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub collection: CollectionOptions,

    /// Print relative paths instead of slugs
    #[arg(long)]
    pub paths: bool,
}

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub collection: CollectionOptions,

    /// Path pattern of the entry, without extension
    pub pattern: String,

    /// Output format for the frontmatter
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Also print the body
    #[arg(long)]
    pub body: bool,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    #[command(flatten)]
    pub collection: CollectionOptions,

    /// Path pattern of the entry, without extension
    pub pattern: String,

    /// Frontmatter keys to print
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Output format for the values
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

/// Arguments for the glob command
#[derive(Args, Debug)]
pub struct GlobArgs {
    #[command(flatten)]
    pub collection: CollectionOptions,

    /// Glob pattern relative to the root, e.g. "**/*.{md,txt}"
    pub pattern: String,
}
