//! Helper functions for CLI operations

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;
use winpkg_core::{InstallerType, PackageDefinition, SkipList};
use winpkg_discover::SourceFilter;

pub fn source_filter(extension: String, excluded: Vec<String>) -> SourceFilter {
    SourceFilter {
        extension: extension.trim_start_matches('.').to_string(),
        excluded,
    }
}

/// Loads a skip list, or an empty one when no path is given
pub fn load_skip_list(path: Option<&Path>) -> Result<SkipList> {
    let Some(path) = path else {
        return Ok(SkipList::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read skip list {:?}", path))?;
    let skip = SkipList::from_json(&json)
        .with_context(|| format!("Failed to parse skip list {:?}", path))?;
    log::info!("Loaded {} skip list entries", skip.len());
    Ok(skip)
}

/// Package counts per installer type, in `InstallerType::ALL` order
pub fn count_by_installer(defs: &[PackageDefinition]) -> Vec<(InstallerType, usize)> {
    InstallerType::ALL
        .into_iter()
        .map(|t| (t, defs.iter().filter(|d| d.installer_type == t).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

/// Package counts per script, sorted by script name
pub fn count_by_source(defs: &[PackageDefinition]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for def in defs {
        *counts.entry(def.source_script.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Shortens long values (URLs mostly) for table display
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let kept: String = value.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(id: &str, installer: InstallerType, source: &str) -> PackageDefinition {
        PackageDefinition::new(id, id, installer, source).unwrap()
    }

    #[test]
    fn test_counts() {
        let defs = vec![
            def("a", InstallerType::Choco, "b.ps1"),
            def("B.c", InstallerType::Winget, "a.ps1"),
            def("d", InstallerType::Choco, "a.ps1"),
        ];
        assert_eq!(
            count_by_installer(&defs),
            vec![(InstallerType::Winget, 1), (InstallerType::Choco, 2)]
        );
        let by_source: Vec<_> = count_by_source(&defs).into_iter().collect();
        assert_eq!(by_source, vec![("a.ps1", 2), ("b.ps1", 1)]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("https://example.com/x", 10), "https://e…");
    }
}
