//! Shared regex vocabulary for PowerShell install idioms

use regex::Regex;
use std::sync::LazyLock;

/// `winget install <args>`; group 1 is the rest of the line
pub(crate) static WINGET_INSTALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bwinget(?:\.exe)?\s+install\b([^\r\n]*)").expect("Invalid regex pattern")
});

pub(crate) static CHOCO_INSTALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bchoco(?:\.exe)?\s+install\b").expect("Invalid regex pattern")
});

pub(crate) static SCOOP_INSTALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bscoop\s+install\b").expect("Invalid regex pattern"));

/// `--source msstore` selects the Microsoft Store catalog
pub(crate) static MSSTORE_SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:--source|-s)[\s=]+['"]?msstore\b"#).expect("Invalid regex pattern")
});

pub(crate) static SCOPE_FLAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)--scope[\s=]+['"]?(\w+)"#).expect("Invalid regex pattern")
});

/// `$_` / `$PSItem`: the line sits inside a ForEach body
pub(crate) static IMPLICIT_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\$(?:_|PSItem)\b").expect("Invalid regex pattern"));

pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Scope passed with `--scope`, if any
pub(crate) fn scope_flag(args: &str) -> Option<&str> {
    SCOPE_FLAG
        .captures(args)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
