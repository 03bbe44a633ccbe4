//! Discovery across many scripts

use std::time::Instant;
use winpkg_core::{PackageDefinition, SourceText};

use crate::config::DiscoveryConfig;
use crate::extractor::extract_packages_with;
use crate::stats::DiscoveryStats;

/// Runs per-file extraction over a list of scripts
pub struct Discoverer {
    config: DiscoveryConfig,
}

impl Discoverer {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Concatenates each script's packages in input order.
    ///
    /// Deduplication is per file only: a package declared in two scripts
    /// yields two records, one per `source_script`.
    pub fn discover_all(&self, sources: &[SourceText]) -> Vec<PackageDefinition> {
        self.discover_all_with_stats(sources).0
    }

    /// Like [`Discoverer::discover_all`], also returning run statistics
    pub fn discover_all_with_stats(
        &self,
        sources: &[SourceText],
    ) -> (Vec<PackageDefinition>, DiscoveryStats) {
        let start_time = Instant::now();
        let mut stats = DiscoveryStats::default();
        let mut packages = Vec::new();

        for source in sources {
            let extraction = extract_packages_with(&source.text, &source.name, &self.config);
            log::debug!("'{}': {} package(s)", source.name, extraction.packages.len());

            stats.record(extraction.packages.len(), &extraction.report);
            packages.extend(extraction.packages);
        }

        stats.elapsed_time = start_time.elapsed();
        log::info!("{}", stats);
        (packages, stats)
    }
}

impl Default for Discoverer {
    fn default() -> Self {
        Self::new(DiscoveryConfig::default())
    }
}

/// [`Discoverer::discover_all`] with the default windows
pub fn discover_all(sources: &[SourceText]) -> Vec<PackageDefinition> {
    Discoverer::default().discover_all(sources)
}
