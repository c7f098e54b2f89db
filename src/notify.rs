//! Process-backed notification and opener collaborators.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::icons::IconRef;
use crate::surface::{Notifier, Opener};
use crate::types::IndicatorError;

/// Sends desktop notifications through `notify-send`.
pub struct CommandNotifier {
    icon: IconRef,
}

impl CommandNotifier {
    pub fn new(icon: IconRef) -> Self {
        Self { icon }
    }
}

#[async_trait]
impl Notifier for CommandNotifier {
    async fn send(&self, title: &str, body: &str) -> Result<(), IndicatorError> {
        debug!(title, body, "Sending notification");
        run_command("notify-send", &["-i", self.icon.as_str(), title, body]).await
    }
}

/// Opens paths and URLs with the desktop default handler via `xdg-open`.
pub struct XdgOpener;

#[async_trait]
impl Opener for XdgOpener {
    async fn open(&self, target: &str) -> Result<(), IndicatorError> {
        debug!(target, "Opening externally");
        run_command("xdg-open", &[target]).await
    }
}

/// Runs a command to completion, mapping a non-zero exit to a
/// [`IndicatorError::Command`] carrying stderr.
pub(crate) async fn run_command(command: &str, args: &[&str]) -> Result<(), IndicatorError> {
    let output = Command::new(command).args(args).output().await?;
    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    Err(IndicatorError::Command(if stderr.is_empty() {
        format!("`{}` exited with status {}", command, output.status)
    } else {
        format!("`{}` failed: {}", command, stderr)
    }))
}
