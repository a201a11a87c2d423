pub mod commands;
pub mod config;
pub mod error;
pub mod evidence;
pub mod filter;
pub mod logging;
pub mod patterns;
pub mod repo;
pub mod scan;
pub mod stories;
pub mod walker;

pub use error::ExcavateError;
pub use evidence::Evidence;
pub use scan::{ScanConfig, ScanDomain};
