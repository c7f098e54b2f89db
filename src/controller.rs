//! The indicator's single decision point: one tokio task that multiplexes
//! daemon snapshots, menu clicks and the animation timer, applies the
//! transition policy and issues commands to the collaborators.
//!
//! The controller is the only writer of [`MenuState`] and the animation
//! state; every potentially blocking side effect (open, notify, daemon
//! start/stop) is spawned fire-and-forget so the loop never waits on it.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::icons::{IconAnimator, IconKind, IconSet, FRAME_INTERVAL};
use crate::menu::MenuState;
use crate::monitor::{DaemonMonitor, SnapshotReceiver};
use crate::policy;
use crate::status::{Status, StatusSnapshot};
use crate::surface::{MenuId, Notifier, Opener, TraySurface};

pub struct Controller {
    config: Config,
    icons: IconSet,
    menu: MenuState,
    animator: IconAnimator,
    status: Status,
    current_icon: Option<IconKind>,
    snapshots: SnapshotReceiver,
    clicks: mpsc::Receiver<MenuId>,
    monitor: Arc<dyn DaemonMonitor>,
    surface: Arc<dyn TraySurface>,
    notifier: Arc<dyn Notifier>,
    opener: Arc<dyn Opener>,
}

impl Controller {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: Config,
        icons: IconSet,
        snapshots: SnapshotReceiver,
        clicks: mpsc::Receiver<MenuId>,
        monitor: Arc<dyn DaemonMonitor>,
        surface: Arc<dyn TraySurface>,
        notifier: Arc<dyn Notifier>,
        opener: Arc<dyn Opener>,
    ) -> Self {
        Self {
            config,
            icons,
            menu: MenuState::default(),
            animator: IconAnimator::default(),
            status: Status::Unknown,
            current_icon: None,
            snapshots,
            clicks,
            monitor,
            surface,
            notifier,
            opener,
        }
    }

    /// Runs the event loop until a quit click arrives or an event source
    /// terminates, then performs the shutdown actions.
    ///
    /// Events are processed strictly one at a time; the animation timer is
    /// reset on every frame advance rather than ticking at a fixed rate, so
    /// a snapshot-driven advance pushes the next tick a full interval out.
    /// The timer keeps firing in every status; its effect on the icon is
    /// gated on the daemon being busy or indexing.
    pub async fn run(mut self) {
        debug!(locale = %self.config.locale, "Event loop started");
        self.set_icon(IconKind::Paused);
        if self.config.start_daemon {
            self.spawn_start();
        }

        let tick = sleep(FRAME_INTERVAL);
        tokio::pin!(tick);

        loop {
            tokio::select! {
                maybe_click = self.clicks.recv() => {
                    match maybe_click {
                        Some(MenuId::Quit) => {
                            debug!("Exit requested");
                            break;
                        }
                        Some(id) => self.handle_click(id),
                        None => {
                            info!("Click channel closed");
                            break;
                        }
                    }
                }
                maybe_snapshot = self.snapshots.recv() => {
                    match maybe_snapshot {
                        Some(snapshot) => {
                            if self.handle_snapshot(snapshot) {
                                tick.as_mut().reset(Instant::now() + FRAME_INTERVAL);
                            }
                        }
                        None => {
                            info!("Daemon monitor stream ended");
                            break;
                        }
                    }
                }
                _ = &mut tick => {
                    if self.status.is_syncing() {
                        let frame = self.animator.advance();
                        self.set_icon(IconKind::Busy(frame));
                    }
                    tick.as_mut().reset(Instant::now() + FRAME_INTERVAL);
                }
            }
        }

        self.shutdown().await;
    }

    /// Returns whether the animation advanced, so the caller can rearm the
    /// frame timer for a full interval.
    fn handle_snapshot(&mut self, snapshot: StatusSnapshot) -> bool {
        let prev = self.status;
        self.status = snapshot.status;

        let patch = policy::snapshot_patch(&snapshot, prev, &self.config.sync_dir);
        for (id, update) in self.menu.apply(patch) {
            self.surface.set_menu_item(id, update);
        }

        let kind = policy::select_icon(snapshot.status, &mut self.animator);
        self.set_icon(kind);

        if snapshot.status != prev && self.config.notifications {
            if let Some(note) = policy::decide_notification(prev, snapshot.status) {
                self.spawn_notify(note.title().to_string(), note.body().to_string());
            }
        }
        debug!(status = ?snapshot.status, "Snapshot handled");
        matches!(kind, IconKind::Busy(_))
    }

    fn handle_click(&self, id: MenuId) {
        match id {
            MenuId::Recent(index) => {
                let Some(slot) = self.menu.recent_slot(index) else {
                    warn!(index, "Click for out-of-range recent slot");
                    return;
                };
                if slot.visible && slot.enabled {
                    self.spawn_open(slot.path.display().to_string());
                } else {
                    debug!(index, "Ignored click on hidden or disabled recent slot");
                }
            }
            MenuId::StartDaemon => self.spawn_start(),
            MenuId::StopDaemon => self.spawn_stop(),
            MenuId::DaemonOutput => self.spawn_notify(
                "Yandex.Disk daemon output".to_string(),
                self.monitor.output(),
            ),
            MenuId::OpenPath => self.spawn_open(self.config.sync_dir.display().to_string()),
            MenuId::OpenSite => self.spawn_open(policy::SITE_URL.to_string()),
            MenuId::Help => self.spawn_open(policy::HELP_URL.to_string()),
            MenuId::About => self.spawn_notify("yd-indicator".to_string(), policy::about_text()),
            MenuId::Donations => self.spawn_open(policy::DONATIONS_URL.to_string()),
            // Quit is intercepted in the loop; the rest are informational
            // items that produce no click action.
            other => debug!(id = ?other, "Click on non-interactive item ignored"),
        }
    }

    fn set_icon(&mut self, kind: IconKind) {
        if self.current_icon != Some(kind) {
            self.surface.set_icon(self.icons.resolve(kind));
            self.current_icon = Some(kind);
        }
    }

    async fn shutdown(self) {
        if self.config.stop_daemon {
            if let Err(err) = self.monitor.request_stop().await {
                warn!(error = ?err, "Failed to stop daemon on exit");
            }
        }
        self.surface.shutdown();
        debug!("Event loop exited");
    }

    fn spawn_start(&self) {
        let monitor = Arc::clone(&self.monitor);
        tokio::spawn(async move {
            if let Err(err) = monitor.request_start().await {
                warn!(error = ?err, "Failed to request daemon start");
            }
        });
    }

    fn spawn_stop(&self) {
        let monitor = Arc::clone(&self.monitor);
        tokio::spawn(async move {
            if let Err(err) = monitor.request_stop().await {
                warn!(error = ?err, "Failed to request daemon stop");
            }
        });
    }

    fn spawn_notify(&self, title: String, body: String) {
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            if let Err(err) = notifier.send(&title, &body).await {
                warn!(error = ?err, title, "Failed to send notification");
            }
        });
    }

    fn spawn_open(&self, target: String) {
        let opener = Arc::clone(&self.opener);
        tokio::spawn(async move {
            if let Err(err) = opener.open(&target).await {
                warn!(error = ?err, target, "Failed to open");
            }
        });
    }
}
