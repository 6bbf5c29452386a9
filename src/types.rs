use serde::Serialize;

/// Registry view of a single directory.
///
/// `is_watched` and `is_ignored` on the registry are both `false` for
/// `Unknown`; callers that need to tell "ignored" apart from "never seen"
/// should match on this instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderStatus {
    /// Tracked and eligible for downstream processing.
    Active,
    /// Tracked but excluded from downstream processing.
    Ignored,
    /// Not tracked at all.
    Unknown,
}

impl FolderStatus {
    pub fn is_tracked(self) -> bool {
        !matches!(self, FolderStatus::Unknown)
    }
}
