mod cli;

use anyhow::Result;
use clap::Parser;
use excavate::config::ProjectConfig;
use excavate::logging::{init_tracing, DEFAULT_LOG_LEVEL};

use cli::{dispatch, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ProjectConfig::discover(cli.config.as_deref())?;

    let level = cli
        .log_level
        .clone()
        .or_else(|| config.log.level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let format = cli.log_format.or(config.log.format).unwrap_or_default();
    init_tracing(&level, format)?;

    dispatch(cli.command, &config, cli.pretty)
}
