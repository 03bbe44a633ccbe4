//! Winpkg Discover - package-declaration discovery for PowerShell setup scripts
//!
//! This crate is responsible for:
//! - Recovering `$name = @{ ... }` container literals with balanced braces
//! - Attributing each container to the installer loop that consumes it
//! - Extracting winget, choco, scoop, module and sideload declarations
//! - Deduplicating per file and concatenating results across files
//!
//! Everything here is a pure function of the script text; nothing is
//! installed, spawned or written.

mod aggregator;
mod config;
mod extractor;
mod sources;
mod stats;
pub mod parsers;

pub use aggregator::{discover_all, Discoverer};
pub use config::DiscoveryConfig;
pub use extractor::{
    apply_rules, extract_packages, extract_packages_with, Extraction, FileReport, Rule,
};
pub use parsers::{classify_iteration, extract_blocks};
pub use sources::{collect_sources, SourceFilter};
pub use stats::DiscoveryStats;
