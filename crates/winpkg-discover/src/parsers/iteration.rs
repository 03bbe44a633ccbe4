//! Attributes a container to the installer that consumes its values

use regex::Regex;
use winpkg_core::{InstallerType, IterationResult, DEFAULT_SCOPE};

use super::patterns::{scope_flag, CHOCO_INSTALL, MSSTORE_SOURCE, SCOOP_INSTALL, WINGET_INSTALL};
use super::window;

/// Finds the first `$<variable>.Values |` and inspects the install
/// invocation within `lookahead` bytes after it.
///
/// winget beats choco beats scoop when several appear in the window.
/// Returns `unknown` when there is no consuming iteration.
pub fn classify_iteration(variable_name: &str, text: &str, lookahead: usize) -> IterationResult {
    let pattern = format!(r"(?i)\${}\.Values\s*\|", regex::escape(variable_name));
    let consumer = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            log::debug!("[iteration] cannot build pattern for '${}': {}", variable_name, e);
            return IterationResult::unknown();
        }
    };

    let Some(found) = consumer.find(text) else {
        return IterationResult::unknown();
    };
    let body = window::after(text, found.start(), lookahead);

    if let Some(args) = WINGET_INSTALL.captures(body).and_then(|c| c.get(1)) {
        let args = args.as_str();
        let scope = scope_flag(args).unwrap_or(DEFAULT_SCOPE);
        let installer = if MSSTORE_SOURCE.is_match(args) {
            InstallerType::WingetStore
        } else {
            InstallerType::Winget
        };
        return IterationResult::consumed(installer, scope);
    }

    if CHOCO_INSTALL.is_match(body) {
        return IterationResult::consumed(InstallerType::Choco, "");
    }

    if SCOOP_INSTALL.is_match(body) {
        return IterationResult::consumed(InstallerType::Scoop, "");
    }

    IterationResult::unknown()
}
