//! Recovery of `$name = @{ ... }` container literals
//!
//! A depth counter finds the matching close brace, so a container whose
//! values are themselves `@{ ... }` literals comes back as one block.
//! Braces inside string literals are counted like any other brace.

use regex::Regex;
use std::sync::LazyLock;
use winpkg_core::ContainerBlock;

static BLOCK_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\w+)\s*=\s*@\{").expect("Invalid regex pattern"));

/// Extracts every balanced container literal in source order.
///
/// Unbalanced (truncated) containers are dropped.
pub fn extract_blocks(text: &str) -> Vec<ContainerBlock> {
    let mut blocks = Vec::new();

    for caps in BLOCK_OPENER.captures_iter(text) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else { continue };
        let start = whole.end();

        match find_closing_brace(&text[start..]) {
            Some(close) => blocks.push(ContainerBlock {
                variable_name: name.as_str().to_string(),
                inner_text: text[start..start + close].to_string(),
                end_offset: start + close + 1,
            }),
            None => {
                log::debug!("[blocks] unbalanced container '${}' dropped", name.as_str());
            }
        }
    }

    blocks
}

/// Byte offset of the `}` that closes an already-opened brace
pub(crate) fn find_closing_brace(rest: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, b) in rest.bytes().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
