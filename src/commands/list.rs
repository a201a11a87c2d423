//! `excavate list-files <root>`

use anyhow::Result;
use std::path::Path;

use super::output::print_json;
use crate::repo::{list_repository_files, ListOptions};

/// List repository files with extension statistics
pub fn execute(root: &Path, opts: &ListOptions, pretty: bool) -> Result<()> {
    let result = list_repository_files(root, opts);
    print_json(&result, pretty)
}
