//! Library components of the catalog explorer command line.

pub mod config;
pub mod logging;
pub mod summary;
