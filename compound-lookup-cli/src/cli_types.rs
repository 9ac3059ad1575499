//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use compound_lookup_catalog::{AromaFilter, CompoundFilter};
use compound_lookup_lib::OutputFormat;

#[derive(Parser)]
#[command(name = "compound-lookup")]
#[command(
    about = "Search a compound database by partial fields or by a list of CAS numbers",
    long_about = None,
    version
)]
pub(crate) struct Cli {
    /// Compound database (SQLite). Defaults to $COMPOUND_LOOKUP_DB, the settings file, or ./compounds.db
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Directory of structure images named <CAS>.png (defaults to ./img)
    #[arg(long, global = true)]
    pub images: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FormatArg {
    /// Aligned text table
    Table,
    /// Pretty-printed JSON array
    Json,
    /// CSV with a header row
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

/// Aroma constraint accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum AromaArg {
    /// No constraint
    #[value(alias = "all")]
    Any,
    /// Only compounds flagged as aromatic
    #[value(aliases = ["yes", "with"])]
    Aromatic,
    /// Compounds flagged false or with no flag
    #[value(aliases = ["no", "without"])]
    NotAromatic,
}

impl From<AromaArg> for AromaFilter {
    fn from(value: AromaArg) -> Self {
        match value {
            AromaArg::Any => AromaFilter::Any,
            AromaArg::Aromatic => AromaFilter::Aromatic,
            AromaArg::NotAromatic => AromaFilter::NotAromatic,
        }
    }
}

/// Common arguments for commands that print result rows.
#[derive(Args, Clone)]
pub(crate) struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Table)]
    pub format: FormatArg,

    /// Table columns by name (e.g., cas_number,odor,threshold_detection)
    #[arg(long, value_delimiter = ',', conflicts_with = "all_columns")]
    pub columns: Option<Vec<String>>,

    /// Show every column in the table
    #[arg(long)]
    pub all_columns: bool,

    /// Maximum characters per table cell
    #[arg(long, default_value_t = 30)]
    pub width: usize,

    /// Also print the detail view and structure image status for each row
    #[arg(long)]
    pub detail: bool,
}

/// Search filters. Omitted or blank fields impose no constraint.
#[derive(Args, Clone)]
pub(crate) struct SearchArgs {
    /// CAS number contains
    #[arg(long)]
    pub cas: Option<String>,

    /// Chinese name contains
    #[arg(long = "cn")]
    pub name_cn: Option<String>,

    /// Category contains
    #[arg(long)]
    pub category: Option<String>,

    /// English name contains
    #[arg(long = "en")]
    pub name_en: Option<String>,

    /// Aroma flag
    #[arg(long, value_enum, default_value_t = AromaArg::Any)]
    pub aroma: AromaArg,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl OutputArgs {
    pub fn output_format(&self) -> OutputFormat {
        self.format.into()
    }
}

impl SearchArgs {
    /// Build a fresh filter for this request.
    pub fn to_filter(&self) -> CompoundFilter {
        CompoundFilter {
            cas_number: self.cas.clone(),
            compound_name_cn: self.name_cn.clone(),
            category: self.category.clone(),
            compound_name_en: self.name_en.clone(),
            aroma: self.aroma.into(),
        }
        .normalized()
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Search by partial CAS number, names, category, and aroma flag
    Search(SearchArgs),

    /// Look up a list of CAS numbers from a text file (one per line, "-" for stdin)
    Batch {
        /// Batch file path
        file: PathBuf,

        /// Only print the identifiers that were not found
        #[arg(long)]
        missing_only: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show all fields and the structure image status for one CAS number
    Detail {
        /// Exact CAS number
        cas: String,
    },

    /// Show record counts
    Stats {
        /// Also list categories with their record counts
        #[arg(long)]
        categories: bool,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl Commands {
    /// Whether this command writes machine-readable data to stdout.
    pub fn machine_output(&self) -> bool {
        match self {
            Commands::Search(args) => args.output.output_format().is_machine_readable(),
            Commands::Batch {
                output,
                missing_only,
                ..
            } => *missing_only || output.output_format().is_machine_readable(),
            _ => false,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and where each value came from
    Show,

    /// Print the settings file path
    Path,

    /// Save the default database path
    SetDb {
        /// Path to the compound database
        path: PathBuf,
    },

    /// Save the default structure image directory
    SetImages {
        /// Directory containing <CAS>.png files
        dir: PathBuf,
    },

    /// Remove saved database and image paths
    Clear,
}
