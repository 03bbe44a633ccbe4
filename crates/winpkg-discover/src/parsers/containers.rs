//! Rule 1: entries of a `$name = @{ ... }` container consumed by an installer loop
//!
//! ```powershell
//! $apps = @{
//!     'Git'  = @{ Name = 'Git';     Id = 'Git.Git' }
//!     'Code' = @{ Name = 'VS Code'; Id = 'Microsoft.VisualStudioCode' }
//! }
//! $apps.Values | ForEach-Object { winget install --id $_.Id --scope machine }
//! ```

use regex::Regex;
use std::sync::LazyLock;
use winpkg_core::PackageDefinition;

use super::blocks::extract_blocks;
use super::iteration::classify_iteration;
use super::patterns::is_comment;
use crate::config::DiscoveryConfig;
use crate::extractor::FileReport;

/// A container only holds packages if some entry has an `Id = ...` field
static ID_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bId\s*=").expect("Invalid regex pattern"));

static ID_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bId\s*=\s*['"]([^'"\r\n]+)['"]"#).expect("Invalid regex pattern")
});

static NAME_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bName\s*=\s*['"]([^'"\r\n]*)['"]"#).expect("Invalid regex pattern")
});

/// Whether a container's body declares packages at all
pub fn declares_packages(inner_text: &str) -> bool {
    ID_MARKER.is_match(inner_text)
}

fn field<'t>(re: &Regex, line: &'t str) -> Option<&'t str> {
    re.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str())
}

pub(crate) fn extract_container_entries(
    text: &str,
    source: &str,
    config: &DiscoveryConfig,
    report: &mut FileReport,
) -> Vec<PackageDefinition> {
    let mut result = Vec::new();

    for block in extract_blocks(text) {
        if !declares_packages(&block.inner_text) {
            continue;
        }
        report.containers_found += 1;

        let iteration = classify_iteration(&block.variable_name, text, config.iteration_lookahead);
        if iteration.is_unknown() {
            report.containers_unclassified += 1;
            log::warn!(
                "No install loop consumes '${}' in '{}', skipping its entries",
                block.variable_name,
                source
            );
            continue;
        }

        for line in block.inner_text.lines() {
            if is_comment(line) {
                continue;
            }
            let Some(id) = field(&ID_FIELD, line) else { continue };
            let name = field(&NAME_FIELD, line).unwrap_or_default();

            if let Ok(def) = PackageDefinition::new(name, id, iteration.installer_type, source) {
                result.push(def.with_scope(iteration.scope.clone()));
            }
        }
    }

    result
}
