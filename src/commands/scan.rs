//! `excavate scan <domain> <root>`

use anyhow::{Context, Result};
use tracing::debug;

use super::output::print_json;
use crate::scan::{ScanConfig, ScanDomain};

/// Run one domain scanner and print its report
pub fn execute(domain: ScanDomain, config: &ScanConfig, pretty: bool) -> Result<()> {
    config
        .validate()
        .with_context(|| format!("Invalid scan configuration for {domain}"))?;
    debug!(%domain, root = %config.root.display(), "starting scan");

    let report = domain.run(config);
    print_json(&report, pretty)
}
