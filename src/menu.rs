//! Declarative menu state owned by the controller.
//!
//! [`MenuState`] is the single source of truth for what the tray menu shows.
//! It is mutated only through [`MenuState::apply`], which takes a batch of
//! field updates and returns the surface commands that batch implies, so
//! rendering stays synchronous with the mutation that produced it.

use std::path::PathBuf;

use crate::status::RECENT_LIMIT;
use crate::surface::{MenuId, MenuItemUpdate};

/// One recent-item slot. Unused slots are hidden, not merely empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecentSlot {
    /// Truncated display text.
    pub title: String,
    /// Absolute path the click opens.
    pub path: PathBuf,
    /// Set iff the resolved path existed when the list was projected.
    pub enabled: bool,
    pub visible: bool,
}

/// Full projection of the recent-items submenu.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentProjection {
    /// Always exactly [`RECENT_LIMIT`] slots; trailing ones hidden.
    pub slots: Vec<RecentSlot>,
    /// Whether the parent "Last synchronized" entry is clickable.
    pub parent_enabled: bool,
}

/// Visibility of the start/stop/output controls.
///
/// Exactly one of `start_visible` / `stop_visible` holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlFlags {
    pub start_visible: bool,
    pub stop_visible: bool,
    pub output_enabled: bool,
}

/// Batch of menu field updates; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct MenuPatch {
    pub status_line: Option<String>,
    pub status_tooltip: Option<String>,
    pub quota_usage: Option<String>,
    pub quota_free: Option<String>,
    pub recent: Option<RecentProjection>,
    pub controls: Option<ControlFlags>,
}

#[derive(Debug, Clone)]
pub struct MenuState {
    pub status_line: String,
    pub status_tooltip: String,
    pub quota_usage: String,
    pub quota_free: String,
    pub recent: Vec<RecentSlot>,
    pub recent_enabled: bool,
    pub controls: ControlFlags,
}

impl Default for MenuState {
    fn default() -> Self {
        // The initial status is `unknown`, which is not `none`, so the stop
        // control starts visible and output starts enabled.
        MenuState {
            status_line: String::new(),
            status_tooltip: String::new(),
            quota_usage: String::new(),
            quota_free: String::new(),
            recent: vec![RecentSlot::default(); RECENT_LIMIT],
            recent_enabled: false,
            controls: ControlFlags {
                start_visible: false,
                stop_visible: true,
                output_enabled: true,
            },
        }
    }
}

impl MenuState {
    /// Applies `patch` and returns the surface updates it implies.
    pub fn apply(&mut self, patch: MenuPatch) -> Vec<(MenuId, MenuItemUpdate)> {
        let mut updates = Vec::new();

        if patch.status_line.is_some() || patch.status_tooltip.is_some() {
            if let Some(line) = patch.status_line {
                self.status_line = line;
            }
            if let Some(tooltip) = patch.status_tooltip {
                self.status_tooltip = tooltip;
            }
            updates.push((
                MenuId::Status,
                MenuItemUpdate {
                    title: Some(self.status_line.clone()),
                    tooltip: Some(self.status_tooltip.clone()),
                    ..Default::default()
                },
            ));
        }

        if let Some(usage) = patch.quota_usage {
            self.quota_usage = usage;
            updates.push((
                MenuId::SizeUsage,
                MenuItemUpdate {
                    title: Some(self.quota_usage.clone()),
                    ..Default::default()
                },
            ));
        }

        if let Some(free) = patch.quota_free {
            self.quota_free = free;
            updates.push((
                MenuId::SizeFree,
                MenuItemUpdate {
                    title: Some(self.quota_free.clone()),
                    ..Default::default()
                },
            ));
        }

        if let Some(projection) = patch.recent {
            debug_assert_eq!(projection.slots.len(), RECENT_LIMIT);
            self.recent = projection.slots;
            self.recent_enabled = projection.parent_enabled;
            for (index, slot) in self.recent.iter().enumerate() {
                updates.push((
                    MenuId::Recent(index),
                    MenuItemUpdate {
                        title: Some(slot.title.clone()),
                        enabled: Some(slot.enabled),
                        visible: Some(slot.visible),
                        ..Default::default()
                    },
                ));
            }
            updates.push((
                MenuId::LastSynced,
                MenuItemUpdate {
                    enabled: Some(self.recent_enabled),
                    ..Default::default()
                },
            ));
        }

        if let Some(controls) = patch.controls {
            debug_assert!(controls.start_visible != controls.stop_visible);
            self.controls = controls;
            updates.push((
                MenuId::StartDaemon,
                MenuItemUpdate {
                    visible: Some(controls.start_visible),
                    ..Default::default()
                },
            ));
            updates.push((
                MenuId::StopDaemon,
                MenuItemUpdate {
                    visible: Some(controls.stop_visible),
                    ..Default::default()
                },
            ));
            updates.push((
                MenuId::DaemonOutput,
                MenuItemUpdate {
                    enabled: Some(controls.output_enabled),
                    ..Default::default()
                },
            ));
        }

        updates
    }

    /// The recent slot for `index`, if it is within bounds.
    pub fn recent_slot(&self, index: usize) -> Option<&RecentSlot> {
        self.recent.get(index)
    }
}
