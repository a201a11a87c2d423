use anyhow::Result;
use excavate::commands::{files, list, scan, search, stories};
use excavate::config::ProjectConfig;
use excavate::repo::ListOptions;
use excavate::scan::ScanConfig;
use std::path::{Path, PathBuf};

use super::types::{Commands, ScanArgs};

/// Output directory used when neither the command line nor the config names one
const DEFAULT_STORIES_DIR: &str = "user_stories";

pub fn dispatch(command: Commands, config: &ProjectConfig, pretty: bool) -> Result<()> {
    match command {
        Commands::Scan {
            domain,
            root,
            scan: args,
        } => scan::execute(domain, &scan_config(config, &root, args), pretty),
        Commands::Search {
            root,
            patterns,
            scan: args,
        } => search::execute(&scan_config(config, &root, args), &patterns, pretty),
        Commands::SearchLenient { payload } => search::execute_lenient(&payload, pretty),
        Commands::ListFiles {
            root,
            include,
            exclude,
            max_files,
            output_file,
        } => {
            let opts = ListOptions {
                include,
                exclude,
                max_files,
                output_file,
            };
            list::execute(&root, &opts, pretty)
        }
        Commands::FileInfo { path } => files::info(&path, pretty),
        Commands::ReadChunk {
            path,
            start_line,
            num_lines,
            max_chars,
        } => files::chunk(&path, start_line, num_lines, max_chars, pretty),
        Commands::ReadFile { path, start, end } => files::read(&path, start, end),
        Commands::ShowAnalysis { path } => files::show_analysis(&path),
        Commands::Stories {
            analysis,
            output_dir,
            flat,
            with_snippets,
            language,
        } => {
            let mut opts = config.story_options();
            if flat {
                opts.group_by_persona = false;
            }
            if with_snippets {
                opts.strict_mode = false;
            }
            if let Some(language) = language {
                opts.language = language;
            }
            let output_dir = output_dir
                .or_else(|| config.stories.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORIES_DIR));
            stories::execute(&analysis, &output_dir, &opts, pretty)
        }
    }
}

/// Config file values overlaid with command-line flags
fn scan_config(config: &ProjectConfig, root: &Path, args: ScanArgs) -> ScanConfig {
    let mut scan = config
        .scan_config(root)
        .with_include(args.include)
        .with_exclude(args.exclude);
    if let Some(v) = args.max_files {
        scan.max_files = v;
    }
    if let Some(v) = args.max_matches_per_file {
        scan.max_matches_per_file = v;
    }
    if let Some(v) = args.context_lines {
        scan.context_lines = v;
    }
    if let Some(v) = args.max_file_bytes {
        scan.max_file_bytes = v;
    }
    if let Some(v) = args.max_snippet_chars {
        scan.max_snippet_chars = v;
    }
    if args.follow_symlinks {
        scan.follow_symlinks = true;
    }
    scan
}
