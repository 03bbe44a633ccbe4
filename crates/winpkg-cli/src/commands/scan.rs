//! Scan command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use tabled::{Table, settings::{Style, Color, Modify, object::Rows}};
use winpkg_discover::{collect_sources, Discoverer, DiscoveryConfig, SourceFilter};

use crate::helpers::{load_skip_list, truncate};
use crate::output::PackageRow;

/// Discovers packages in a script directory and prints them
pub fn cmd_scan(
    dir: PathBuf,
    filter: SourceFilter,
    config: DiscoveryConfig,
    json: bool,
    skip_list: Option<PathBuf>,
) -> Result<()> {
    let skip = load_skip_list(skip_list.as_deref())?;
    let sources = collect_sources(&dir, &filter)?;
    let packages = Discoverer::new(config).discover_all(&sources);

    if json {
        let out = serde_json::to_string_pretty(&packages)
            .context("Failed to serialize package list")?;
        println!("{}", out);
        return Ok(());
    }

    if packages.is_empty() {
        println!("{} No package declarations found in {:?}", "❌".red(), dir);
        return Ok(());
    }

    let rows: Vec<PackageRow> = packages
        .iter()
        .map(|def| PackageRow {
            name: def.name.clone(),
            package_id: truncate(&def.package_id, 60),
            installer: def.installer_type.to_string(),
            scope: def.scope.clone(),
            args: def.additional_args.clone(),
            source: def.source_script.clone(),
            skip: skip.reason_for(def).unwrap_or("-").to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Color::FG_BRIGHT_CYAN));
    println!("{}", table);

    let skipped = packages.iter().filter(|d| skip.reason_for(d).is_some()).count();
    println!(
        "\n{} {} package(s) in {} script(s)",
        "📦".bright_cyan(),
        packages.len().to_string().bold(),
        sources.len().to_string().bold()
    );
    if skipped > 0 {
        println!("{} {} marked untested by the skip list", "⏭".yellow(), skipped.to_string().bold());
    }

    Ok(())
}
