//! Core data models for package discovery

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Scope assumed for winget installs when the script does not pass `--scope`
pub const DEFAULT_SCOPE: &str = "machine";

/// Package-manager mechanism responsible for installing a package
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum InstallerType {
    Winget,
    WingetStore,
    Choco,
    Scoop,
    PsModule,
    Sideload,
    Unknown,
}

impl InstallerType {
    /// Every installer type, in report order
    pub const ALL: [InstallerType; 7] = [
        InstallerType::Winget,
        InstallerType::WingetStore,
        InstallerType::Choco,
        InstallerType::Scoop,
        InstallerType::PsModule,
        InstallerType::Sideload,
        InstallerType::Unknown,
    ];

    /// Tag used in dedup keys, JSON output and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallerType::Winget => "winget",
            InstallerType::WingetStore => "winget-store",
            InstallerType::Choco => "choco",
            InstallerType::Scoop => "scoop",
            InstallerType::PsModule => "ps-module",
            InstallerType::Sideload => "sideload",
            InstallerType::Unknown => "unknown",
        }
    }

    /// Whether the installer layer understands `--scope` for this type
    pub fn has_scope(&self) -> bool {
        matches!(self, InstallerType::Winget)
    }
}

impl fmt::Display for InstallerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstallerType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InstallerType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownInstallerType(s.to_string()))
    }
}

/// A discovered "install this package with this installer" declaration
///
/// `name` and `package_id` are never empty; use [`PackageDefinition::new`]
/// to build one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageDefinition {
    /// Human label (defaults to the package id)
    pub name: String,

    /// Install-time identity: winget id, choco/scoop name, module name or download URL
    pub package_id: String,

    pub installer_type: InstallerType,

    /// File the declaration was found in
    pub source_script: String,

    /// Installer-specific scope, may be empty
    pub scope: String,

    /// Opaque flag fragment passed through to the installer, may be empty
    pub additional_args: String,
}

impl PackageDefinition {
    /// Creates a new definition with empty scope and args
    ///
    /// An empty (or whitespace-only) `name` falls back to `package_id`.
    pub fn new(
        name: &str,
        package_id: &str,
        installer_type: InstallerType,
        source_script: &str,
    ) -> Result<Self, CoreError> {
        let package_id = package_id.trim();
        if package_id.is_empty() {
            return Err(CoreError::EmptyField("package_id"));
        }
        let name = match name.trim() {
            "" => package_id,
            n => n,
        };

        Ok(Self {
            name: name.to_string(),
            package_id: package_id.to_string(),
            installer_type,
            source_script: source_script.to_string(),
            scope: String::new(),
            additional_args: String::new(),
        })
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn with_additional_args(mut self, args: impl Into<String>) -> Self {
        self.additional_args = args.into();
        self
    }

    /// Deduplication key within one source file
    /// Format: "installer_type:package_id"
    pub fn key(&self) -> String {
        format!("{}:{}", self.installer_type, self.package_id)
    }

    /// Identity the skip list is keyed by (choco entries go by name)
    pub fn skip_key(&self) -> &str {
        match self.installer_type {
            InstallerType::Choco => &self.name,
            _ => &self.package_id,
        }
    }
}

impl fmt::Display for PackageDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) via {}", self.name, self.package_id, self.installer_type)?;
        if !self.scope.is_empty() {
            write!(f, " [{}]", self.scope)?;
        }
        write!(f, " @ {}", self.source_script)
    }
}

/// One script handed to discovery: file name plus its full text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub name: String,
    pub text: String,
}

impl SourceText {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A balanced `$name = @{ ... }` literal found in script text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerBlock {
    pub variable_name: String,

    /// Text between the opening `{` and its matching `}`
    pub inner_text: String,

    /// Byte offset just past the closing `}`
    pub end_offset: usize,
}

/// Which installer consumes a container's values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationResult {
    pub installer_type: InstallerType,
    pub scope: String,
}

impl IterationResult {
    /// No consuming iteration was found
    pub fn unknown() -> Self {
        Self::consumed(InstallerType::Unknown, DEFAULT_SCOPE)
    }

    pub fn consumed(installer_type: InstallerType, scope: &str) -> Self {
        Self {
            installer_type,
            scope: scope.to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.installer_type == InstallerType::Unknown
    }
}
