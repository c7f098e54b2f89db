use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::status::StatusSnapshot;
use crate::types::IndicatorError;

/// Channel on which the daemon monitor delivers status snapshots.
pub type SnapshotReceiver = mpsc::Receiver<StatusSnapshot>;

/// Command side of the daemon monitor.
///
/// Snapshots arrive separately on a [`SnapshotReceiver`] handed to the
/// controller at construction; closing that channel is the monitor's way of
/// signaling termination and makes the controller shut down gracefully.
#[async_trait]
pub trait DaemonMonitor: Send + Sync {
    /// Asks the daemon to start. Does not wait for the resulting status
    /// change, which arrives later as a snapshot.
    async fn request_start(&self) -> Result<(), IndicatorError>;

    /// Asks the daemon to stop.
    async fn request_stop(&self) -> Result<(), IndicatorError>;

    /// Last captured raw daemon output, for the "show output" menu entry.
    fn output(&self) -> String;
}
