//! Transient, self-dismissing notifications.
//!
//! Each toast owns its own scheduled cleanup: after a fixed dwell the exit
//! animation begins, and the node is detached shortly after. Toasts coexist
//! freely; there is no queue and no cap. Dropping the tray aborts every
//! outstanding cleanup so a torn-down surface is never touched again.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::render;
use crate::surface::Surface;

/// How long a toast stays fully visible.
pub const TOAST_DWELL: Duration = Duration::from_secs(4);

/// Duration of the reverse-entrance animation before the node is detached.
pub const TOAST_EXIT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "\u{2705}",
            ToastKind::Error => "\u{274C}",
            ToastKind::Warning => "\u{26A0}\u{FE0F}",
        }
    }
}

/// Owns every live toast's cleanup task.
pub struct ToastTray {
    surface: Arc<dyn Surface>,
    cleanups: Mutex<Vec<JoinHandle<()>>>,
}

impl ToastTray {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self {
            surface,
            cleanups: Mutex::new(Vec::new()),
        }
    }

    /// Mounts a toast and schedules its removal. Must be called from within
    /// a tokio runtime.
    pub fn push(&self, message: &str, kind: ToastKind) {
        let id = Uuid::new_v4().to_string();
        self.surface.mount_toast(&id, &render::toast_markup(message, kind));

        let surface = Arc::clone(&self.surface);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(TOAST_DWELL).await;
            surface.begin_toast_exit(&id);
            tokio::time::sleep(TOAST_EXIT).await;
            surface.remove_toast(&id);
        });

        let mut cleanups = self.cleanups.lock().unwrap();
        cleanups.retain(|task| !task.is_finished());
        cleanups.push(handle);
    }
}

impl Drop for ToastTray {
    fn drop(&mut self) {
        for task in self.cleanups.lock().unwrap().drain(..) {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingSurface, SurfaceEvent};

    #[tokio::test(start_paused = true)]
    async fn toast_is_detached_shortly_after_its_dwell() {
        let surface = Arc::new(RecordingSurface::default());
        let tray = ToastTray::new(surface.clone());

        tray.push("something went wrong", ToastKind::Error);
        assert_eq!(surface.count(|e| matches!(e, SurfaceEvent::ToastMounted { .. })), 1);

        // Just before the dwell elapses the toast is still fully visible.
        tokio::time::sleep(Duration::from_millis(3_900)).await;
        assert_eq!(surface.count(|e| matches!(e, SurfaceEvent::ToastExit(_))), 0);

        // Dwell passed: exit animation starts, node not yet detached.
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(surface.count(|e| matches!(e, SurfaceEvent::ToastExit(_))), 1);
        assert_eq!(surface.count(|e| matches!(e, SurfaceEvent::ToastRemoved(_))), 0);

        // 4.3s after creation the node is gone.
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(surface.count(|e| matches!(e, SurfaceEvent::ToastRemoved(_))), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn toasts_manage_their_lifecycles_independently() {
        let surface = Arc::new(RecordingSurface::default());
        let tray = ToastTray::new(surface.clone());

        tray.push("first", ToastKind::Success);
        tokio::time::sleep(Duration::from_secs(2)).await;
        tray.push("second", ToastKind::Warning);

        // First toast expires while the second is still in its dwell.
        tokio::time::sleep(Duration::from_millis(2_400)).await;
        assert_eq!(surface.count(|e| matches!(e, SurfaceEvent::ToastRemoved(_))), 1);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(surface.count(|e| matches!(e, SurfaceEvent::ToastRemoved(_))), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_tray_cancels_pending_cleanups() {
        let surface = Arc::new(RecordingSurface::default());
        let tray = ToastTray::new(surface.clone());

        tray.push("short lived", ToastKind::Success);
        drop(tray);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(surface.count(|e| matches!(e, SurfaceEvent::ToastExit(_))), 0);
        assert_eq!(surface.count(|e| matches!(e, SurfaceEvent::ToastRemoved(_))), 0);
    }
}
