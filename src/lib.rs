//! Status-driven UI controller for a Yandex.Disk panel indicator.
//!
//! The crate owns the single event loop that consumes status snapshots from
//! the daemon monitor and click events from the tray surface, and derives
//! the icon, the menu state and the desktop notifications that an outer
//! rendering layer must apply.
//!
//! The tray surface, the notification sender and the "open path/URL" helper
//! stay behind traits ([`surface`]); the crate ships process-backed
//! implementations for the latter two ([`notify`]) and a concrete
//! `yandex-disk` monitor ([`ydisk`]).

pub mod config;
pub mod controller;
pub mod helpers;
pub mod icons;
pub mod menu;
pub mod monitor;
pub mod notify;
pub mod policy;
pub mod status;
pub mod surface;
pub mod types;
pub mod ydisk;

pub use config::Config;
pub use controller::Controller;
pub use icons::{IconAnimator, IconKind, IconRef, IconSet};
pub use menu::{ControlFlags, MenuPatch, MenuState, RecentProjection, RecentSlot};
pub use monitor::DaemonMonitor;
pub use status::{Status, StatusSnapshot};
pub use surface::{MenuId, MenuItemUpdate, Notifier, Opener, TraySurface};
pub use types::IndicatorError;
