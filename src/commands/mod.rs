pub mod files;
pub mod list;
pub mod output;
pub mod scan;
pub mod search;
pub mod stories;
