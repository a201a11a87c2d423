use clap::{Args, Parser, Subcommand};
use excavate::logging::LogFormat;
use excavate::repo::files::DEFAULT_CHUNK_MAX_CHARS;
use excavate::repo::listing::DEFAULT_LIST_MAX_FILES;
use excavate::scan::ScanDomain;
use excavate::stories::StoryLanguage;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "excavate")]
#[command(about = "Scan a repository for evidence and generate traceable stories", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Config file (defaults to $EXCAVATE_CONFIG, then ./excavate.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset (e.g. warn, info, excavate=debug)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log output format on stderr
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    /// Indent JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a domain scanner (db-schema, endpoints, ui-routes, visual-identity, validators, api-contracts)
    Scan {
        /// Scan domain
        domain: ScanDomain,

        /// Repository root
        #[arg(env = "REPO_ROOT", default_value = ".")]
        root: PathBuf,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Search for regex patterns, line by line
    Search {
        /// Repository root
        #[arg(env = "REPO_ROOT", default_value = ".")]
        root: PathBuf,

        /// Regex to search for (repeatable)
        #[arg(short = 'p', long = "pattern", required = true)]
        patterns: Vec<String>,

        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Search from a loosely structured payload (JSON, JSON array, or free text; `-` for stdin)
    SearchLenient {
        /// Payload text
        payload: String,
    },

    /// List repository files with extension counts
    ListFiles {
        /// Repository root
        #[arg(env = "REPO_ROOT", default_value = ".")]
        root: PathBuf,

        /// Glob to include (repeatable, default **/*)
        #[arg(long)]
        include: Vec<String>,

        /// Glob to exclude (repeatable)
        #[arg(long)]
        exclude: Vec<String>,

        /// Maximum number of files listed
        #[arg(long, default_value_t = DEFAULT_LIST_MAX_FILES)]
        max_files: usize,

        /// Write the full listing here and print only a summary
        #[arg(long)]
        output_file: Option<PathBuf>,
    },

    /// Show size and line count of a file
    FileInfo {
        path: PathBuf,
    },

    /// Read a range of lines as JSON
    ReadChunk {
        path: PathBuf,

        /// 1-based first line
        start_line: usize,

        /// Number of lines to read
        num_lines: usize,

        /// Character cap of the returned snippet
        #[arg(long, default_value_t = DEFAULT_CHUNK_MAX_CHARS)]
        max_chars: usize,
    },

    /// Print a file, optionally a 1-based inclusive line range
    ReadFile {
        path: PathBuf,

        #[arg(long)]
        start: Option<usize>,

        #[arg(long)]
        end: Option<usize>,
    },

    /// Print an analysis document as stored ({} when missing)
    ShowAnalysis {
        #[arg(env = "ANALYSIS_JSON", default_value = "analysis.json")]
        path: PathBuf,
    },

    /// Generate Gherkin story files from an analysis document
    Stories {
        /// Analysis document
        #[arg(env = "ANALYSIS_JSON", default_value = "analysis.json")]
        analysis: PathBuf,

        /// Output directory (default: [stories] output_dir, then ./user_stories)
        #[arg(env = "USER_STORIES_DIR")]
        output_dir: Option<PathBuf>,

        /// Write every module file directly in the output directory
        #[arg(long)]
        flat: bool,

        /// Also embed the cited code snippets as comments
        #[arg(long)]
        with_snippets: bool,

        /// Language of persona labels and scenario steps (en, pt)
        #[arg(long)]
        language: Option<StoryLanguage>,
    },
}

/// Scan limits shared by `scan` and `search`; unset values come from the config file
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Glob to include (repeatable, replaces the domain defaults)
    #[arg(long)]
    pub include: Vec<String>,

    /// Glob to exclude (repeatable, replaces the domain defaults)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Maximum number of files opened
    #[arg(long)]
    pub max_files: Option<usize>,

    /// Maximum matches per file (pattern search only)
    #[arg(long)]
    pub max_matches_per_file: Option<usize>,

    /// Lines of context around each match (pattern search only)
    #[arg(long)]
    pub context_lines: Option<usize>,

    /// Skip files larger than this many bytes
    #[arg(long)]
    pub max_file_bytes: Option<u64>,

    /// Truncate snippets to this many characters
    #[arg(long)]
    pub max_snippet_chars: Option<usize>,

    /// Follow symlinked directories
    #[arg(long)]
    pub follow_symlinks: bool,
}
