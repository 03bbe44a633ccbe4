//! Tunable text windows used by the discovery heuristics

/// Bounded windows trade recall (find related text that is a few lines
/// away) against precision (don't leak into an unrelated later block).
/// All sizes are in bytes and are clamped to char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// How far past `$Var.Values |` to look for the install invocation
    pub iteration_lookahead: usize,

    /// How far before the sideload marker to look for an "Installing ..." line
    pub sideload_name_lookback: usize,

    /// Download-URL search window before the sideload marker
    pub sideload_url_before: usize,

    /// Download-URL search window after the sideload marker
    pub sideload_url_after: usize,
}

impl DiscoveryConfig {
    pub const DEFAULT_ITERATION_LOOKAHEAD: usize = 500;
    pub const DEFAULT_SIDELOAD_NAME_LOOKBACK: usize = 500;
    pub const DEFAULT_SIDELOAD_URL_WINDOW: usize = 300;
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            iteration_lookahead: Self::DEFAULT_ITERATION_LOOKAHEAD,
            sideload_name_lookback: Self::DEFAULT_SIDELOAD_NAME_LOOKBACK,
            sideload_url_before: Self::DEFAULT_SIDELOAD_URL_WINDOW,
            sideload_url_after: Self::DEFAULT_SIDELOAD_URL_WINDOW,
        }
    }
}
