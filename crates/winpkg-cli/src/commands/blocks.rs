//! Blocks command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use tabled::{Table, settings::{Style, Color, Modify, object::Rows}};
use winpkg_discover::parsers::declares_packages;
use winpkg_discover::{classify_iteration, extract_blocks, DiscoveryConfig};

use crate::output::BlockRow;

/// Lists container literals in one script with their consuming installer
pub fn cmd_blocks(file: PathBuf, config: DiscoveryConfig) -> Result<()> {
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read script {:?}", file))?;

    let blocks = extract_blocks(&text);
    if blocks.is_empty() {
        println!("{} No container literals in {:?}", "❌".red(), file);
        return Ok(());
    }

    let rows: Vec<BlockRow> = blocks
        .iter()
        .map(|block| {
            let iteration = classify_iteration(&block.variable_name, &text, config.iteration_lookahead);
            BlockRow {
                variable: format!("${}", block.variable_name),
                end_offset: block.end_offset,
                has_id: if declares_packages(&block.inner_text) { "yes" } else { "no" }.to_string(),
                consumer: iteration.installer_type.to_string(),
                scope: iteration.scope,
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Color::FG_BRIGHT_CYAN));
    println!("{}", table);
    Ok(())
}
