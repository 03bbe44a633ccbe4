//! Enumeration of the install scripts in a directory

use anyhow::{Context, Result};
use std::path::Path;
use winpkg_core::SourceText;

/// Which files in a directory count as declaration scripts
#[derive(Debug, Clone)]
pub struct SourceFilter {
    /// File extension without the dot, matched case-insensitively
    pub extension: String,

    /// File names that are helpers rather than declarations
    pub excluded: Vec<String>,
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self {
            extension: "ps1".to_string(),
            excluded: Vec::new(),
        }
    }
}

impl SourceFilter {
    /// Names starting with `_` are always excluded
    pub fn accepts(&self, file_name: &str) -> bool {
        if file_name.starts_with('_') {
            return false;
        }
        if self.excluded.iter().any(|e| e.eq_ignore_ascii_case(file_name)) {
            return false;
        }
        Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension))
    }
}

/// Reads every accepted script in `dir` (not recursive), sorted by file name.
pub fn collect_sources<P: AsRef<Path>>(dir: P, filter: &SourceFilter) -> Result<Vec<SourceText>> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read script directory {:?}", dir))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {:?}", dir))?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if filter.accepts(&name) {
            names.push(name);
        } else {
            log::debug!("Skipping '{}'", name);
        }
    }
    names.sort();

    let mut sources = Vec::with_capacity(names.len());
    for name in names {
        let path = dir.join(&name);
        let bytes = std::fs::read(&path)
            .with_context(|| format!("Failed to read script {:?}", path))?;
        let text = String::from_utf8_lossy(&bytes);
        let text = text.strip_prefix('\u{feff}').unwrap_or(&*text).to_string();
        sources.push(SourceText::new(name, text));
    }

    log::info!("Found {} script(s) in {:?}", sources.len(), dir);
    Ok(sources)
}
