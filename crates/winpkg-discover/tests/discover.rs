//! Tests for multi-script discovery and script enumeration

use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use winpkg_core::{InstallerType, SourceText};
use winpkg_discover::{collect_sources, discover_all, Discoverer, DiscoveryConfig, SourceFilter};

// ── fixtures ─────────────────────────────────────────────────────────────────

const APPS: &str = r#"
$apps = @{
    'Git'  = @{ Name = 'Git'; Id = 'Git.Git' }
    'Code' = @{ Name = 'VS Code'; Id = 'Microsoft.VisualStudioCode' }
}
$apps.Values | ForEach-Object { winget install --id $_.Id --scope machine }
"#;

const TOOLS: &str = r#"
"git", "jq" | ForEach-Object { choco install $_ -y }
winget install Git.Git
"#;

fn sources() -> Vec<SourceText> {
    vec![SourceText::new("apps.ps1", APPS), SourceText::new("tools.ps1", TOOLS)]
}

// ── aggregation ──────────────────────────────────────────────────────────────

#[test]
fn test_results_follow_input_order() {
    let defs = discover_all(&sources());
    let summary: Vec<(&str, &str)> = defs
        .iter()
        .map(|d| (d.source_script.as_str(), d.package_id.as_str()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("apps.ps1", "Git.Git"),
            ("apps.ps1", "Microsoft.VisualStudioCode"),
            ("tools.ps1", "git"),
            ("tools.ps1", "jq"),
            ("tools.ps1", "Git.Git"),
        ]
    );
}

#[test]
fn test_no_cross_file_deduplication() {
    let defs = discover_all(&sources());
    let git = defs
        .iter()
        .filter(|d| d.installer_type == InstallerType::Winget && d.package_id == "Git.Git")
        .count();
    assert_eq!(git, 2);
}

#[test]
fn test_deterministic() {
    let discoverer = Discoverer::default();
    assert_eq!(discoverer.discover_all(&sources()), discoverer.discover_all(&sources()));
}

#[test]
fn test_stats() {
    let broken = SourceText::new("broken.ps1", "$x = @{ Id = 'A.B' }\n");
    let mut all = sources();
    all.push(broken);

    let (defs, stats) = Discoverer::new(DiscoveryConfig::default()).discover_all_with_stats(&all);

    assert_eq!(stats.sources_scanned, 3);
    assert_eq!(stats.packages_found, defs.len());
    assert_eq!(stats.containers_found, 2);
    assert_eq!(stats.containers_unclassified, 1);
    assert!(stats.to_string().starts_with("Scripts: 3 scanned | Packages: 5 found"));
}

#[test]
fn test_empty_input() {
    assert!(discover_all(&[]).is_empty());
}

// ── collect_sources ──────────────────────────────────────────────────────────

#[test]
fn test_collect_sources_sorted_and_filtered() -> Result<()> {
    let tmp = TempDir::new()?;
    fs::write(tmp.path().join("b-tools.ps1"), TOOLS)?;
    fs::write(tmp.path().join("a-apps.ps1"), format!("\u{feff}{}", APPS))?;
    fs::write(tmp.path().join("_common.ps1"), "choco install hidden")?;
    fs::write(tmp.path().join("run-all.ps1"), "choco install hidden")?;
    fs::write(tmp.path().join("notes.txt"), "choco install hidden")?;
    fs::create_dir(tmp.path().join("nested.ps1"))?;

    let filter = SourceFilter {
        excluded: vec!["run-all.ps1".to_string()],
        ..SourceFilter::default()
    };
    let found = collect_sources(tmp.path(), &filter)?;

    let names: Vec<&str> = found.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["a-apps.ps1", "b-tools.ps1"]);
    assert!(found[0].text.starts_with('\n'), "BOM should be stripped");

    let defs = discover_all(&found);
    assert!(defs.iter().all(|d| d.package_id != "hidden"));
    Ok(())
}

#[test]
fn test_collect_sources_missing_dir() {
    let tmp = TempDir::new().unwrap();
    assert!(collect_sources(tmp.path().join("missing"), &SourceFilter::default()).is_err());
}
