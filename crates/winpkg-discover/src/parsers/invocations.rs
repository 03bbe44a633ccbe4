//! Rules 2-5: install invocations written directly in the script
//!
//! - piped string arrays feeding a `ForEach-Object { choco|scoop install $_ }` loop
//! - standalone `choco install <name>`
//! - standalone `winget install ... <Publisher.Product>`
//! - `Install-Module <name> ...`

use regex::Regex;
use std::sync::LazyLock;
use winpkg_core::{InstallerType, PackageDefinition, DEFAULT_SCOPE};

use super::blocks::find_closing_brace;
use super::patterns::{
    is_comment, scope_flag, CHOCO_INSTALL, IMPLICIT_VARIABLE, MSSTORE_SOURCE, SCOOP_INSTALL,
    WINGET_INSTALL,
};

/// `'a', "b" | ForEach-Object {`, optionally wrapped in `@( )`. The list
/// must open an expression (line start, `=`, `;` or `(`), so a quoted
/// command argument never counts. Group 1 is the literal list; the match
/// ends at the body's opening brace.
static PIPED_ARRAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?im)(?:^|[=;(])\s*(?:@\(\s*)?((?:['"][^'"\r\n]+['"]\s*,\s*)*['"][^'"\r\n]+['"])\s*\)?\s*\|\s*(?:ForEach-Object|ForEach|%)\s*\{"#,
    )
    .expect("Invalid regex pattern")
});

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]([^'"\r\n]+)['"]"#).expect("Invalid regex pattern"));

/// `choco install [flags] <name>`; flags known to take a value skip it too
static CHOCO_PACKAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bchoco(?:\.exe)?\s+install(?:\s+(?:--?(?:version|source|s|params|package-parameters|install-arguments|ia)[\s=]+\S+|-{1,2}[\w\-]+(?:=\S+)?))*\s+([A-Za-z0-9][\w.+\-]*)",
    )
    .expect("Invalid regex pattern")
});

/// Group 1 is the module name, group 2 the remaining flags
static INSTALL_MODULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bInstall-Module\s+(?:-Name\s+)?['"]?([A-Za-z][\w.\-]*)['"]?([^\r\n]*)"#)
        .expect("Invalid regex pattern")
});

static ALLOW_PRERELEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)-AllowPrerelease\b").expect("Invalid regex pattern"));

static REPOSITORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)-Repository\s+['"]?([\w.\-]+)['"]?"#).expect("Invalid regex pattern")
});

/// winget flags that consume the following token
const WINGET_VALUE_FLAGS: &[&str] = &[
    "version", "v", "source", "s", "scope", "override", "custom", "location", "l",
    "architecture", "a", "locale", "log", "o", "manifest", "m", "moniker", "installer-type",
    "header", "rename",
];

/// winget flags whose value is the package itself
const WINGET_ID_FLAGS: &[&str] = &["id", "query", "q", "name"];

/// Lines that are neither comments nor part of a `ForEach` body
fn standalone_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .filter(|line| !is_comment(line) && !IMPLICIT_VARIABLE.is_match(line))
}

fn starts_commented_line(text: &str, offset: usize) -> bool {
    let line_start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    is_comment(&text[line_start..offset])
}

// ─── Rule 2 – piped literal arrays ───────────────────────────────────────────

pub(crate) fn extract_piped_arrays(text: &str, source: &str) -> Vec<PackageDefinition> {
    let mut result = Vec::new();

    for caps in PIPED_ARRAY.captures_iter(text) {
        let (Some(whole), Some(list)) = (caps.get(0), caps.get(1)) else { continue };
        if starts_commented_line(text, list.start()) {
            continue;
        }

        let body_start = whole.end();
        let Some(close) = find_closing_brace(&text[body_start..]) else {
            log::debug!("[piped-array] unbalanced ForEach body skipped");
            continue;
        };
        let body = &text[body_start..body_start + close];

        let installer = if CHOCO_INSTALL.is_match(body) {
            InstallerType::Choco
        } else if SCOOP_INSTALL.is_match(body) {
            InstallerType::Scoop
        } else {
            continue;
        };

        for lit in QUOTED.captures_iter(list.as_str()).filter_map(|c| c.get(1)) {
            if let Ok(def) = PackageDefinition::new(lit.as_str(), lit.as_str(), installer, source) {
                result.push(def);
            }
        }
    }

    result
}

// ─── Rule 3 – standalone choco ───────────────────────────────────────────────

pub(crate) fn extract_standalone_choco(text: &str, source: &str) -> Vec<PackageDefinition> {
    standalone_lines(text)
        .filter_map(|line| CHOCO_PACKAGE.captures(line)?.get(1))
        .filter_map(|m| {
            PackageDefinition::new(m.as_str(), m.as_str(), InstallerType::Choco, source).ok()
        })
        .collect()
}

// ─── Rule 4 – standalone winget ──────────────────────────────────────────────

pub(crate) fn extract_standalone_winget(text: &str, source: &str) -> Vec<PackageDefinition> {
    let mut result = Vec::new();

    for line in standalone_lines(text) {
        let Some(args) = WINGET_INSTALL.captures(line).and_then(|c| c.get(1)) else { continue };
        let args = args.as_str();
        let Some(id) = winget_package_id(args) else { continue };

        let installer = if MSSTORE_SOURCE.is_match(args) {
            InstallerType::WingetStore
        } else {
            InstallerType::Winget
        };
        let scope = scope_flag(args).unwrap_or(DEFAULT_SCOPE);

        if let Ok(def) = PackageDefinition::new(&id, &id, installer, source) {
            result.push(def.with_scope(scope));
        }
    }

    result
}

/// Picks the `Publisher.Product`-shaped token out of winget arguments,
/// skipping flags and the values of flags that take one.
pub fn winget_package_id(args: &str) -> Option<String> {
    let tokens = shlex::split(args)
        .unwrap_or_else(|| args.split_whitespace().map(String::from).collect());
    let mut tokens = tokens
        .into_iter()
        .map(|t| t.trim_end_matches([';', '|', ')', '}']).to_string());

    while let Some(token) = tokens.next() {
        let Some(flag) = token.strip_prefix('-') else {
            if looks_like_winget_id(&token) {
                return Some(token);
            }
            continue;
        };

        let flag = flag.trim_start_matches('-').to_ascii_lowercase();
        if let Some((name, value)) = flag.split_once('=') {
            // the lowercased copy is only used to match the flag name
            if WINGET_ID_FLAGS.contains(&name) {
                let value = &token[token.len() - value.len()..];
                if looks_like_winget_id(value) {
                    return Some(value.to_string());
                }
            }
            continue;
        }

        if WINGET_ID_FLAGS.contains(&flag.as_str()) {
            match tokens.next() {
                Some(value) if looks_like_winget_id(&value) => return Some(value),
                _ => continue,
            }
        }
        if WINGET_VALUE_FLAGS.contains(&flag.as_str()) {
            tokens.next();
        }
    }

    None
}

/// `Publisher.Product`: alphanumeric start, a letter somewhere, at least one dot
fn looks_like_winget_id(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_alphanumeric())
        && token.contains('.')
        && token.chars().any(|c| c.is_ascii_alphabetic())
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '+'))
}

// ─── Rule 5 – Install-Module ─────────────────────────────────────────────────

pub(crate) fn extract_module_installs(text: &str, source: &str) -> Vec<PackageDefinition> {
    let mut result = Vec::new();

    for line in text.lines().filter(|l| !is_comment(l)) {
        let Some(caps) = INSTALL_MODULE.captures(line) else { continue };
        let Some(module) = caps.get(1) else { continue };
        let rest = caps.get(2).map_or("", |m| m.as_str());

        if let Ok(def) =
            PackageDefinition::new(module.as_str(), module.as_str(), InstallerType::PsModule, source)
        {
            result.push(def.with_additional_args(retained_module_flags(rest)));
        }
    }

    result
}

/// Keeps `-AllowPrerelease` and `-Repository <name>`; the installer layer
/// adds `-Force`, `-AllowClobber` and `-Scope` itself.
pub(crate) fn retained_module_flags(rest: &str) -> String {
    let mut kept = Vec::new();
    if ALLOW_PRERELEASE.is_match(rest) {
        kept.push("-AllowPrerelease".to_string());
    }
    if let Some(repo) = REPOSITORY.captures(rest).and_then(|c| c.get(1)) {
        kept.push(format!("-Repository {}", repo.as_str()));
    }
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winget_id_positional() {
        assert_eq!(winget_package_id(" Git.Git -e --silent").as_deref(), Some("Git.Git"));
        assert_eq!(winget_package_id(" 7zip.7zip").as_deref(), Some("7zip.7zip"));
    }

    #[test]
    fn test_winget_id_flag_forms() {
        assert_eq!(winget_package_id(" --id Mozilla.Firefox -e").as_deref(), Some("Mozilla.Firefox"));
        assert_eq!(winget_package_id(" --id=Mozilla.Firefox").as_deref(), Some("Mozilla.Firefox"));
        assert_eq!(winget_package_id(r#" --id "Mozilla.Firefox";"#).as_deref(), Some("Mozilla.Firefox"));
    }

    #[test]
    fn test_winget_id_skips_flag_values() {
        assert_eq!(
            winget_package_id(" --version 1.2.3 Vendor.Tool").as_deref(),
            Some("Vendor.Tool")
        );
        assert_eq!(winget_package_id(" --id $app.Id"), None);
        assert_eq!(winget_package_id(" --source msstore 9NBLGGH4NNS1"), None);
    }

    #[test]
    fn test_choco_name_after_leading_flags() {
        let name = |line: &str| {
            CHOCO_PACKAGE
                .captures(line)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
        };
        assert_eq!(name("choco install -y git").as_deref(), Some("git"));
        assert_eq!(name("choco install --version 1.2.0 -y jq").as_deref(), Some("jq"));
        assert_eq!(name("choco install --source=internal -y vlc").as_deref(), Some("vlc"));
        assert_eq!(name("choco install nodejs-lts --version 20").as_deref(), Some("nodejs-lts"));
        assert_eq!(name("choco install -y $pkg"), None);
    }

    #[test]
    fn test_module_flags_are_filtered() {
        assert_eq!(
            retained_module_flags(" -Force -AllowClobber -Scope AllUsers -AllowPrerelease"),
            "-AllowPrerelease"
        );
        assert_eq!(
            retained_module_flags(" -Repository 'PSGallery' -Force"),
            "-Repository PSGallery"
        );
        assert_eq!(retained_module_flags(" -Force"), "");
    }

    #[test]
    fn test_commented_line_detection() {
        let text = "x\n  # 'a', 'b' | % { choco install $_ }";
        let at = text.find('\'').unwrap();
        assert!(starts_commented_line(text, at));
        assert!(!starts_commented_line(text, 0));
    }
}
