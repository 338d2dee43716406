/// How a revisited open node is treated when a new route to it is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum UpdatePolicy {
    /// Replace costs and parent only when the new `g` is strictly lower.
    #[default]
    ImproveOnly,
    /// Always replace costs and parent with the latest route, even a worse
    /// one. The resulting path is still connected but may not be the
    /// shortest.
    LastWriteWins,
}

/// Engine tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub update_policy: UpdatePolicy,
    /// Stop with [`SearchState::Exhausted`](crate::SearchState::Exhausted)
    /// instead of expanding again once this many expansions have run.
    /// `None` means unlimited.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Config with the given update policy and no expansion limit.
    pub fn with_policy(update_policy: UpdatePolicy) -> Self {
        Self {
            update_policy,
            ..Self::default()
        }
    }
}
