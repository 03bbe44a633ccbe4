//! Per-file package extraction
//!
//! Rules run in a fixed order and share one set of seen keys
//! (`installer_type:package_id`), so when two rules find the same package
//! the earlier rule's record is kept.

use std::collections::HashSet;
use std::fmt;
use winpkg_core::PackageDefinition;

use crate::config::DiscoveryConfig;
use crate::parsers::{
    extract_container_entries, extract_module_installs, extract_piped_arrays, extract_sideload,
    extract_standalone_choco, extract_standalone_winget,
};

/// One install idiom the extractor recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `$apps = @{ ... Id = '...' ... }` consumed by `$apps.Values | ...`
    ContainerEntries,
    /// `'a', 'b' | ForEach-Object { choco install $_ }`
    PipedArray,
    /// `choco install <name>`
    StandaloneChoco,
    /// `winget install <Publisher.Product>`
    StandaloneWinget,
    /// `Install-Module <name>`
    ModuleInstall,
    /// `Add-AppxPackage` on a downloaded file
    Sideload,
}

impl Rule {
    /// Application order; earlier rules win on key collision
    pub const ORDER: [Rule; 6] = [
        Rule::ContainerEntries,
        Rule::PipedArray,
        Rule::StandaloneChoco,
        Rule::StandaloneWinget,
        Rule::ModuleInstall,
        Rule::Sideload,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Rule::ContainerEntries => "containers",
            Rule::PipedArray => "piped-array",
            Rule::StandaloneChoco => "choco",
            Rule::StandaloneWinget => "winget",
            Rule::ModuleInstall => "module",
            Rule::Sideload => "sideload",
        }
    }

    fn candidates(
        &self,
        text: &str,
        source: &str,
        config: &DiscoveryConfig,
        report: &mut FileReport,
    ) -> Vec<PackageDefinition> {
        match self {
            Rule::ContainerEntries => extract_container_entries(text, source, config, report),
            Rule::PipedArray => extract_piped_arrays(text, source),
            Rule::StandaloneChoco => extract_standalone_choco(text, source),
            Rule::StandaloneWinget => extract_standalone_winget(text, source),
            Rule::ModuleInstall => extract_module_installs(text, source),
            Rule::Sideload => extract_sideload(text, source, config, report),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Side observations made while extracting one file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReport {
    /// Containers with an `Id = ...` field
    pub containers_found: usize,
    /// Of those, containers no install loop consumes
    pub containers_unclassified: usize,
    /// Candidates dropped because an earlier rule already produced the key
    pub duplicates: usize,
    /// More than one `Add-AppxPackage` in the file
    pub multi_sideload: bool,
}

/// Packages found in one file plus what was observed along the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub packages: Vec<PackageDefinition>,
    pub report: FileReport,
}

/// Runs `rules` in order over one file, skipping candidates whose key is
/// already in `seen` and adding the keys of everything kept.
pub fn apply_rules(
    rules: &[Rule],
    text: &str,
    source: &str,
    config: &DiscoveryConfig,
    seen: &mut HashSet<String>,
) -> Extraction {
    let mut extraction = Extraction::default();

    for rule in rules {
        let candidates = rule.candidates(text, source, config, &mut extraction.report);
        let found = candidates.len();
        let before = extraction.packages.len();

        for def in candidates {
            if seen.insert(def.key()) {
                extraction.packages.push(def);
            } else {
                extraction.report.duplicates += 1;
            }
        }

        if found > 0 {
            log::debug!(
                "[{}] '{}': {} found, {} new",
                rule,
                source,
                found,
                extraction.packages.len() - before
            );
        }
    }

    extraction
}

/// Extracts the deduplicated packages declared in one script.
pub fn extract_packages_with(text: &str, source: &str, config: &DiscoveryConfig) -> Extraction {
    let mut seen = HashSet::new();
    apply_rules(&Rule::ORDER, text, source, config, &mut seen)
}

/// [`extract_packages_with`] using the default windows, returning only the packages.
pub fn extract_packages(text: &str, source: &str) -> Vec<PackageDefinition> {
    extract_packages_with(text, source, &DiscoveryConfig::default()).packages
}
