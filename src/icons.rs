use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Number of frames in the busy animation.
pub const BUSY_FRAMES: usize = 5;

/// Interval between busy-animation frames. The timer is self-rescheduling:
/// it is reset to `now + FRAME_INTERVAL` after every expiry.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(333);

/// Cheap cloneable reference to a resolved icon file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRef(Arc<str>);

impl IconRef {
    fn new(path: impl AsRef<Path>) -> Self {
        IconRef(Arc::from(path.as_ref().to_string_lossy().as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Policy-level icon selection, resolved to an [`IconRef`] via [`IconSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Idle,
    Busy(usize),
    Paused,
    Error,
}

/// The themed icon files, resolved once at startup and passed into the
/// controller. No process-wide mutable theme state.
#[derive(Debug, Clone)]
pub struct IconSet {
    pub idle: IconRef,
    pub busy: [IconRef; BUSY_FRAMES],
    pub paused: IconRef,
    pub error: IconRef,
    pub notify: IconRef,
}

impl IconSet {
    /// Resolves the icon files for `theme` under `app_home`.
    pub fn new(app_home: &Path, theme: &str) -> Self {
        let themed = app_home.join(theme);
        IconSet {
            idle: IconRef::new(themed.join("idle.png")),
            busy: [
                IconRef::new(themed.join("busy1.png")),
                IconRef::new(themed.join("busy2.png")),
                IconRef::new(themed.join("busy3.png")),
                IconRef::new(themed.join("busy4.png")),
                IconRef::new(themed.join("busy5.png")),
            ],
            paused: IconRef::new(themed.join("pause.png")),
            error: IconRef::new(themed.join("error.png")),
            notify: IconRef::new(app_home.join("yd-128.png")),
        }
    }

    pub fn resolve(&self, kind: IconKind) -> &IconRef {
        match kind {
            IconKind::Idle => &self.idle,
            IconKind::Busy(frame) => &self.busy[frame % BUSY_FRAMES],
            IconKind::Paused => &self.paused,
            IconKind::Error => &self.error,
        }
    }
}

/// Cursor over the busy-animation frames.
///
/// The controller owns the timer; this only tracks which frame is current.
#[derive(Debug, Default)]
pub struct IconAnimator {
    current: usize,
}

impl IconAnimator {
    /// Advances to the next frame and returns its index.
    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % BUSY_FRAMES;
        self.current
    }
}
