//! Output formatting structures for CLI display

use tabled::Tabled;

/// Table row for displaying a discovered package
#[derive(Tabled)]
pub struct PackageRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Package ID")]
    pub package_id: String,
    #[tabled(rename = "Installer")]
    pub installer: String,
    #[tabled(rename = "Scope")]
    pub scope: String,
    #[tabled(rename = "Args")]
    pub args: String,
    #[tabled(rename = "Source")]
    pub source: String,
    #[tabled(rename = "Skip")]
    pub skip: String,
}

/// Table row for a container literal in one script
#[derive(Tabled)]
pub struct BlockRow {
    #[tabled(rename = "Variable")]
    pub variable: String,
    #[tabled(rename = "Ends at")]
    pub end_offset: usize,
    #[tabled(rename = "Has Id")]
    pub has_id: String,
    #[tabled(rename = "Consumer")]
    pub consumer: String,
    #[tabled(rename = "Scope")]
    pub scope: String,
}
