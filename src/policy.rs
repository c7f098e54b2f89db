//! Pure transition policy: maps a status snapshot (and the previously
//! recorded status) to icon selection, control visibility, menu text and an
//! optional notification. No I/O here except the point-in-time existence
//! check for recent items.

use std::path::Path;

use crate::helpers::{short_name, RECENT_TITLE_LIMIT, STATUS_PATH_LIMIT};
use crate::icons::{IconAnimator, IconKind};
use crate::menu::{ControlFlags, MenuPatch, RecentProjection, RecentSlot};
use crate::status::{Status, StatusSnapshot, RECENT_LIMIT};

/// Fixed URL of the cloud disk web UI.
pub const SITE_URL: &str = "https://disk.yandex.com";
/// Fixed URL of the support / FAQ page.
pub const HELP_URL: &str = "https://yandex.com/support/disk";
/// Fixed URL of the project donations page.
pub const DONATIONS_URL: &str = "https://github.com/yd-indicator/yd-indicator/wiki/Donations";

/// Desktop notification derived from a status transition. At most one fires
/// per transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    DaemonStopped,
    DaemonStarted,
    SyncStarted,
    SyncFinished,
}

impl Notification {
    pub fn title(&self) -> &'static str {
        "Yandex.Disk"
    }

    pub fn body(&self) -> &'static str {
        match self {
            Notification::DaemonStopped => "Daemon stopped",
            Notification::DaemonStarted => "Daemon started",
            Notification::SyncStarted => "Synchronization started",
            Notification::SyncFinished => "Synchronization finished",
        }
    }
}

/// Selects the icon for `status`, advancing the busy animation when the
/// daemon is busy or indexing. Evaluated on every snapshot, not only on
/// status change.
pub fn select_icon(status: Status, animator: &mut IconAnimator) -> IconKind {
    match status {
        Status::Idle => IconKind::Idle,
        Status::Busy | Status::Index => IconKind::Busy(animator.advance()),
        Status::None | Status::Paused => IconKind::Paused,
        Status::Unknown | Status::Error => IconKind::Error,
    }
}

/// Control visibility for `status`: only a stopped daemon shows the start
/// entry, everything else shows stop and enables the output entry.
pub fn controls_for(status: Status) -> ControlFlags {
    if status == Status::None {
        ControlFlags {
            start_visible: true,
            stop_visible: false,
            output_enabled: false,
        }
    } else {
        ControlFlags {
            start_visible: false,
            stop_visible: true,
            output_enabled: true,
        }
    }
}

/// Decides the notification for a status transition.
///
/// The rules are checked in this fixed order and the first match wins; the
/// conditions are not mutually exclusive (busy -> none matches both the
/// stopped and the syncing rules), so the order is the tie-break.
pub fn decide_notification(prev: Status, new: Status) -> Option<Notification> {
    if new == Status::None && prev != Status::Unknown {
        Some(Notification::DaemonStopped)
    } else if prev == Status::None {
        Some(Notification::DaemonStarted)
    } else if new.is_syncing() && !prev.is_syncing() {
        Some(Notification::SyncStarted)
    } else if matches!(new, Status::Idle | Status::Error) && prev.is_syncing() {
        Some(Notification::SyncFinished)
    } else {
        None
    }
}

/// Composes the status menu line from the snapshot, skipping empty parts.
/// The error path is middle-elided to [`STATUS_PATH_LIMIT`] characters.
pub fn compose_status_line(snapshot: &StatusSnapshot) -> String {
    let short_path = short_name(&snapshot.error_path, STATUS_PATH_LIMIT);
    let parts = [
        snapshot.status.label(),
        snapshot.progress.as_str(),
        snapshot.error_message.as_str(),
        short_path.as_str(),
    ];
    let detail = parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    format!("Status: {detail}")
}

/// Error tooltip: message and full path while in error, empty otherwise.
pub fn compose_tooltip(snapshot: &StatusSnapshot) -> String {
    if snapshot.status == Status::Error {
        format!("{}\nPath: {}", snapshot.error_message, snapshot.error_path)
    } else {
        String::new()
    }
}

/// Projects the snapshot's recent list into the ten menu slots.
///
/// Each provided entry is joined against `sync_dir`, its display text
/// elided to [`RECENT_TITLE_LIMIT`] characters and its slot enabled iff
/// the resolved path exists right now. Slots beyond the list are hidden.
pub fn project_recent(recent: &[String], sync_dir: &Path) -> RecentProjection {
    let mut slots = vec![RecentSlot::default(); RECENT_LIMIT];
    for (slot, entry) in slots.iter_mut().zip(recent.iter()) {
        let resolved = sync_dir.join(entry);
        slot.title = short_name(entry, RECENT_TITLE_LIMIT);
        slot.enabled = resolved.exists();
        slot.path = resolved;
        slot.visible = true;
    }
    RecentProjection {
        slots,
        parent_enabled: !recent.is_empty(),
    }
}

/// Builds the menu patch for one received snapshot.
///
/// Text is always recomposed; the recent list only when the snapshot says
/// it changed; the controls only when the status itself changed.
pub fn snapshot_patch(snapshot: &StatusSnapshot, prev: Status, sync_dir: &Path) -> MenuPatch {
    let mut patch = MenuPatch {
        status_line: Some(compose_status_line(snapshot)),
        status_tooltip: Some(compose_tooltip(snapshot)),
        quota_usage: Some(format!(
            "Used: {}/{}",
            snapshot.used_space, snapshot.total_space
        )),
        quota_free: Some(format!(
            "Free: {} Trash: {}",
            snapshot.free_space, snapshot.trash_size
        )),
        ..Default::default()
    };
    if snapshot.recent_changed {
        patch.recent = Some(project_recent(&snapshot.recent, sync_dir));
    }
    if snapshot.status != prev {
        patch.controls = Some(controls_for(snapshot.status));
    }
    patch
}

/// Text of the about notification, with the crate version and the current
/// year substituted.
pub fn about_text() -> String {
    format!(
        "yd-indicator is the panel indicator for the Yandex.Disk daemon.\n\n\
         Version: {}\n\nCopyleft 2017-{}\n\nLicense: MIT",
        env!("CARGO_PKG_VERSION"),
        chrono::Utc::now().format("%Y")
    )
}
