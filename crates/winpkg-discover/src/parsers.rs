//! PowerShell install-script scanners
//!
//! Primary entry points: [`extract_blocks`], [`classify_iteration`]
//!
//! There is no PowerShell parser here. A depth-counting scanner recovers
//! container literals and each install idiom has its own matcher; the
//! extractor runs the matchers in a fixed order (see [`crate::Rule`]).

mod blocks;
mod containers;
mod invocations;
mod iteration;
mod patterns;
mod sideload;
mod window;

pub use blocks::extract_blocks;
pub use containers::declares_packages;
pub use iteration::classify_iteration;
pub use invocations::winget_package_id;
pub use sideload::{UNKNOWN_SIDELOAD_NAME, UNKNOWN_SIDELOAD_URL};

pub(crate) use containers::extract_container_entries;
pub(crate) use invocations::{
    extract_module_installs, extract_piped_arrays, extract_standalone_choco,
    extract_standalone_winget,
};
pub(crate) use sideload::extract_sideload;
