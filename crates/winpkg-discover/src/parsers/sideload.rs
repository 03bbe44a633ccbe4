//! Rule 6: app packages downloaded and installed with `Add-AppxPackage`
//!
//! Only the first marker in a file is inspected. The app name comes from the
//! closest "Installing <name>" announcement before it and the package id
//! from a download command near it.

use regex::Regex;
use std::sync::LazyLock;
use winpkg_core::{InstallerType, PackageDefinition};

use super::window;
use crate::config::DiscoveryConfig;
use crate::extractor::FileReport;

pub const UNKNOWN_SIDELOAD_NAME: &str = "Unknown Sideload App";
pub const UNKNOWN_SIDELOAD_URL: &str = "unknown-sideload-url";

static SIDELOAD_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bAdd-AppxPackage\b").expect("Invalid regex pattern"));

static ANNOUNCEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bInstalling\s+([^"'`\r\n]+?)\s*(?:\.\.\.|…|["'`\r\n]|$)"#)
        .expect("Invalid regex pattern")
});

static DOWNLOAD_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\b(?:Invoke-WebRequest|Invoke-RestMethod|Start-BitsTransfer|iwr|irm|curl(?:\.exe)?|wget)\b[^\r\n]*?(https?://[^\s'"`)]+)"#,
    )
    .expect("Invalid regex pattern")
});

pub(crate) fn extract_sideload(
    text: &str,
    source: &str,
    config: &DiscoveryConfig,
    report: &mut FileReport,
) -> Vec<PackageDefinition> {
    let mut markers = SIDELOAD_MARKER.find_iter(text);
    let Some(marker) = markers.next() else {
        return vec![];
    };

    let extra = markers.count();
    if extra > 0 {
        report.multi_sideload = true;
        log::warn!(
            "'{}' has {} sideload installs; only the first is reported",
            source,
            extra + 1
        );
    }

    let lookback = window::before(text, marker.start(), config.sideload_name_lookback);
    let name = ANNOUNCEMENT
        .captures_iter(lookback)
        .filter_map(|c| c.get(1))
        .last()
        .map(|m| m.as_str().trim().trim_end_matches(['.', ':']).trim())
        .filter(|n| !n.is_empty())
        .unwrap_or(UNKNOWN_SIDELOAD_NAME);

    let nearby = window::around(
        text,
        marker.start(),
        config.sideload_url_before,
        config.sideload_url_after,
    );
    let url = DOWNLOAD_URL
        .captures(nearby)
        .and_then(|c| c.get(1))
        .map_or(UNKNOWN_SIDELOAD_URL, |m| m.as_str());

    PackageDefinition::new(name, url, InstallerType::Sideload, source)
        .into_iter()
        .collect()
}
