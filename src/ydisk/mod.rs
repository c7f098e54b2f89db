//! Concrete daemon monitor for the `yandex-disk` console client.
//!
//! Polls `yandex-disk status`, keeps the raw output for the "show output"
//! menu entry and delivers a [`StatusSnapshot`] on the channel whenever
//! something changed. This is plumbing around the controller core; the
//! controller only sees the [`DaemonMonitor`] trait and the channel.

mod parser;

pub use parser::parse_status;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::monitor::{DaemonMonitor, SnapshotReceiver};
use crate::notify::run_command;
use crate::status::{Status, StatusSnapshot};
use crate::types::IndicatorError;

/// How often the daemon is polled for status.
const POLL_INTERVAL: Duration = Duration::from_secs(2);

pub struct YandexDiskMonitor {
    output: Mutex<String>,
}

impl YandexDiskMonitor {
    /// Verifies the daemon is set up and starts the polling task.
    ///
    /// Fails when the daemon's own configuration file is missing; the
    /// caller treats that as fatal and aborts before any UI state exists.
    pub fn start(config: &Config) -> Result<(Arc<Self>, SnapshotReceiver), IndicatorError> {
        let daemon_config = daemon_config_path();
        if !daemon_config.exists() {
            return Err(IndicatorError::DaemonNotFound(format!(
                "missing daemon configuration at {}",
                daemon_config.display()
            )));
        }
        info!(
            daemon_config = %daemon_config.display(),
            sync_dir = %config.sync_dir.display(),
            "Starting yandex-disk monitor"
        );

        let monitor = Arc::new(YandexDiskMonitor {
            output: Mutex::new(String::new()),
        });
        // One-in-flight buffering towards the controller.
        let (tx, rx) = mpsc::channel(1);
        tokio::spawn(poll_loop(Arc::clone(&monitor), tx));
        Ok((monitor, rx))
    }

    async fn capture_status(&self) -> StatusSnapshot {
        match Command::new("yandex-disk").arg("status").output().await {
            Ok(output) => {
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                if text.trim().is_empty() {
                    text = String::from_utf8_lossy(&output.stderr).into_owned();
                }
                if let Ok(mut captured) = self.output.lock() {
                    *captured = text.clone();
                }
                if output.status.success() {
                    parse_status(&text)
                } else {
                    // The client exits non-zero while the daemon is down.
                    StatusSnapshot {
                        status: Status::None,
                        ..Default::default()
                    }
                }
            }
            Err(err) => {
                warn!(error = ?err, "Failed to invoke yandex-disk status");
                StatusSnapshot {
                    status: Status::None,
                    ..Default::default()
                }
            }
        }
    }
}

#[async_trait]
impl DaemonMonitor for YandexDiskMonitor {
    async fn request_start(&self) -> Result<(), IndicatorError> {
        debug!("Requesting daemon start");
        run_command("yandex-disk", &["start"]).await
    }

    async fn request_stop(&self) -> Result<(), IndicatorError> {
        debug!("Requesting daemon stop");
        run_command("yandex-disk", &["stop"]).await
    }

    fn output(&self) -> String {
        self.output
            .lock()
            .map(|captured| captured.clone())
            .unwrap_or_default()
    }
}

async fn poll_loop(monitor: Arc<YandexDiskMonitor>, tx: mpsc::Sender<StatusSnapshot>) {
    debug!("Poll loop started");
    let mut interval = tokio::time::interval(POLL_INTERVAL);
    let mut last: Option<StatusSnapshot> = None;
    loop {
        interval.tick().await;
        let mut snapshot = monitor.capture_status().await;
        if mark_changes(last.as_ref(), &mut snapshot) {
            if tx.send(snapshot.clone()).await.is_err() {
                break;
            }
            last = Some(snapshot);
        }
    }
    debug!("Poll loop exited");
}

/// Sets `recent_changed` on `next` and reports whether anything differs
/// from the previously delivered snapshot.
fn mark_changes(prev: Option<&StatusSnapshot>, next: &mut StatusSnapshot) -> bool {
    let Some(prev) = prev else {
        next.recent_changed = true;
        return true;
    };
    next.recent_changed = prev.recent != next.recent;
    next.recent_changed
        || prev.status != next.status
        || prev.progress != next.progress
        || prev.error_message != next.error_message
        || prev.error_path != next.error_path
        || prev.used_space != next.used_space
        || prev.total_space != next.total_space
        || prev.free_space != next.free_space
        || prev.trash_size != next.trash_size
}

/// The daemon's own configuration file, `~/.config/yandex-disk/config.cfg`.
fn daemon_config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_default();
    PathBuf::from(home)
        .join(".config")
        .join("yandex-disk")
        .join("config.cfg")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(status: Status) -> StatusSnapshot {
        StatusSnapshot {
            status,
            ..Default::default()
        }
    }

    #[test]
    fn first_snapshot_always_counts_as_change() {
        let mut next = snapshot(Status::None);
        assert!(mark_changes(None, &mut next));
        assert!(next.recent_changed);
    }

    #[test]
    fn identical_snapshot_is_not_a_change() {
        let prev = snapshot(Status::Idle);
        let mut next = snapshot(Status::Idle);
        assert!(!mark_changes(Some(&prev), &mut next));
        assert!(!next.recent_changed);
    }

    #[test]
    fn status_change_is_detected() {
        let prev = snapshot(Status::Idle);
        let mut next = snapshot(Status::Busy);
        assert!(mark_changes(Some(&prev), &mut next));
        assert!(!next.recent_changed);
    }

    #[test]
    fn recent_list_change_sets_the_flag() {
        let prev = snapshot(Status::Idle);
        let mut next = snapshot(Status::Idle);
        next.recent = vec!["new.txt".to_string()];
        assert!(mark_changes(Some(&prev), &mut next));
        assert!(next.recent_changed);
    }

    #[test]
    fn quota_change_is_detected_without_recent_flag() {
        let prev = snapshot(Status::Idle);
        let mut next = snapshot(Status::Idle);
        next.used_space = "2.0 GB".to_string();
        assert!(mark_changes(Some(&prev), &mut next));
        assert!(!next.recent_changed);
    }
}
