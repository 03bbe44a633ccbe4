//! Summary command implementation

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use winpkg_discover::{collect_sources, Discoverer, DiscoveryConfig, SourceFilter};

use crate::helpers::{count_by_installer, count_by_source};

/// Displays package counts per installer and per script
pub fn cmd_summary(dir: PathBuf, filter: SourceFilter, config: DiscoveryConfig) -> Result<()> {
    let sources = collect_sources(&dir, &filter)?;
    let (packages, stats) = Discoverer::new(config).discover_all_with_stats(&sources);

    println!("{}", "By installer:".bright_cyan().bold());
    for (installer, count) in count_by_installer(&packages) {
        println!("  {}: {}", installer.to_string().bright_yellow(), count.to_string().bold());
    }

    println!("{}", "By script:".bright_cyan().bold());
    for (source, count) in count_by_source(&packages) {
        println!("  {}: {}", source.bright_yellow(), count.to_string().bold());
    }

    println!("\n{}", stats.to_string().dimmed());
    if stats.containers_unclassified > 0 {
        println!(
            "{} {} container(s) had no install loop and were skipped",
            "⚠".yellow(),
            stats.containers_unclassified
        );
    }
    Ok(())
}
