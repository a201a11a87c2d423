//! Plain repository access: file listing and bounded file reads.

pub mod files;
pub mod listing;

pub use files::{file_info, read_analysis_json, read_file_chunk, read_repository_file, FileChunk, FileInfo};
pub use listing::{list_repository_files, FileListing, ListOptions, ListResult, ListingSummary};
