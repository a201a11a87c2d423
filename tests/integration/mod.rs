//! Integration tests for excavate
//!
//! These tests run the scanners, the lenient search front-end, and the story
//! generator against small repositories built in temporary directories.

pub mod helpers;
pub mod lenient;
pub mod scan_invariants;
pub mod stories;
