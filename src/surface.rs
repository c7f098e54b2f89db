//! Trait seams towards the rendering surface, the notification sender and
//! the path/URL opener.
//!
//! The controller talks to the tray through commands ([`TraySurface`]) and
//! receives clicks back on a channel of [`MenuId`] values. Notifications
//! and opens are fire-and-forget from the loop's point of view: the
//! controller spawns them and logs failures without awaiting delivery.

use async_trait::async_trait;

use crate::icons::IconRef;
use crate::types::IndicatorError;

/// Identity of a menu item, shared between commands and click events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    /// Status line (disabled, informational).
    Status,
    /// First quota line: used/total space.
    SizeUsage,
    /// Second quota line: free space and trash size.
    SizeFree,
    /// Parent entry of the recent-items submenu.
    LastSynced,
    /// Recent-item slot, index in `0..RECENT_LIMIT`.
    Recent(usize),
    StartDaemon,
    StopDaemon,
    DaemonOutput,
    OpenPath,
    OpenSite,
    Help,
    About,
    Donations,
    Quit,
}

/// Partial update for one menu item; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemUpdate {
    pub title: Option<String>,
    pub tooltip: Option<String>,
    pub enabled: Option<bool>,
    pub visible: Option<bool>,
}

/// Commands the controller issues towards the tray rendering surface.
///
/// Implementations must be cheap and non-blocking; the controller calls
/// them synchronously between events.
pub trait TraySurface: Send + Sync {
    fn set_icon(&self, icon: &IconRef);
    fn set_menu_item(&self, id: MenuId, update: MenuItemUpdate);
    /// Signals the surface to terminate; called once on shutdown.
    fn shutdown(&self);
}

/// Desktop notification sender.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, title: &str, body: &str) -> Result<(), IndicatorError>;
}

/// Opens a filesystem path or URL with the desktop default handler.
#[async_trait]
pub trait Opener: Send + Sync {
    async fn open(&self, target: &str) -> Result<(), IndicatorError>;
}
