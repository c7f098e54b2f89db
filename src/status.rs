use serde::{Deserialize, Serialize};

/// Synchronization state reported by the daemon monitor.
///
/// `Unknown` is the initial value before the first snapshot arrives;
/// `None` means the daemon is not running at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Unknown,
    Idle,
    Index,
    Busy,
    None,
    Paused,
    Error,
}

impl Status {
    /// Human-readable label used in the status menu line.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Unknown => "unknown",
            Status::Idle => "idle",
            Status::Index => "index",
            Status::Busy => "busy",
            Status::None => "none",
            Status::Paused => "paused",
            Status::Error => "error",
        }
    }

    /// True while the daemon is actively synchronizing or indexing.
    pub fn is_syncing(&self) -> bool {
        matches!(self, Status::Busy | Status::Index)
    }
}

/// Maximum number of recent items carried in a snapshot and shown in the menu.
pub const RECENT_LIMIT: usize = 10;

/// One immutable status report from the daemon monitor.
///
/// `recent` holds up to [`RECENT_LIMIT`] sync-folder-relative paths,
/// most recent first; `recent_changed` is set when that list differs from
/// the previous snapshot so the menu projection is only rebuilt on change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusSnapshot {
    pub status: Status,
    pub progress: String,
    pub error_message: String,
    pub error_path: String,
    pub used_space: String,
    pub total_space: String,
    pub free_space: String,
    pub trash_size: String,
    pub recent: Vec<String>,
    pub recent_changed: bool,
}
