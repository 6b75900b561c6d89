//! Copy-share-link session — the page's only stateful piece.
#![allow(dead_code)]
//!
//! States: `Idle` ("Copy Link") and `Confirmed` ("Copied!").
//! - Idle/Confirmed → Confirmed when the clipboard write succeeds.
//! - Confirmed → Idle when the revert timer fires, `REVERT_AFTER` later.
//! - A failed write shows a blocking notice and leaves the label alone.
//!
//! A new successful copy aborts the pending revert and arms a fresh one, so
//! the label always reverts `REVERT_AFTER` after the *last* success.
//!
//! In the served page these transitions run in `render::assets::site_js`,
//! built from the constants below. `ShareSession` is the reference model
//! for that script; the server itself only renders `ShareState`.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, warn};

use crate::actions::location::{normalize, LocationHost};

pub const COPY_LABEL_IDLE: &str = "Copy Link";
pub const COPY_LABEL_CONFIRMED: &str = "Copied!";
pub const COPY_FAILED_NOTICE: &str = "Failed to copy link.";
pub const REVERT_AFTER: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyLabel {
    #[default]
    Idle,
    Confirmed,
}

impl CopyLabel {
    pub fn text(&self) -> &'static str {
        match self {
            CopyLabel::Idle => COPY_LABEL_IDLE,
            CopyLabel::Confirmed => COPY_LABEL_CONFIRMED,
        }
    }
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard is not available")]
    Unavailable,

    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
}

/// Host clipboard. Completion is reported through the returned future.
#[async_trait]
pub trait ClipboardHost: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Blocking user-visible notice (an alert box in the browser).
pub trait NoticeHost: Send + Sync {
    fn alert(&self, message: &str);
}

/// What the renderer needs to know about the share session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareState {
    pub label: CopyLabel,
    pub current_address: Option<String>,
}

impl ShareState {
    /// State right after mount: idle label, address as resolved by the host.
    pub fn mounted(location: &dyn LocationHost) -> Self {
        ShareState {
            label: CopyLabel::Idle,
            current_address: normalize(location.current_address()),
        }
    }
}

/// Local UI state for one rendering session.
pub struct ShareSession {
    clipboard: Arc<dyn ClipboardHost>,
    notice: Arc<dyn NoticeHost>,
    label: Arc<Mutex<CopyLabel>>,
    pending_revert: Mutex<Option<JoinHandle<()>>>,
    current_address: Option<String>,
}

impl ShareSession {
    /// An unmounted session: idle label, address unknown.
    pub fn new(clipboard: Arc<dyn ClipboardHost>, notice: Arc<dyn NoticeHost>) -> Self {
        ShareSession {
            clipboard,
            notice,
            label: Arc::new(Mutex::new(CopyLabel::Idle)),
            pending_revert: Mutex::new(None),
            current_address: None,
        }
    }

    /// Reads the current address from the host. Called once per session.
    pub fn mount(&mut self, location: &dyn LocationHost) {
        self.current_address = normalize(location.current_address());
        debug!(address = ?self.current_address, "Share session mounted");
    }

    pub fn current_address(&self) -> Option<&str> {
        self.current_address.as_deref()
    }

    pub fn label(&self) -> CopyLabel {
        *lock(&self.label)
    }

    pub fn state(&self) -> ShareState {
        ShareState {
            label: self.label(),
            current_address: self.current_address.clone(),
        }
    }

    /// Writes `address` to the clipboard and updates the label.
    pub async fn request_copy_share_link(&self, address: &str) {
        match self.clipboard.write_text(address).await {
            Ok(()) => {
                debug!("Share link copied");
                *lock(&self.label) = CopyLabel::Confirmed;
                self.arm_revert();
            }
            Err(e) => {
                warn!("Failed to copy share link: {e}");
                self.notice.alert(COPY_FAILED_NOTICE);
            }
        }
    }

    fn arm_revert(&self) {
        let deadline = Instant::now() + REVERT_AFTER;
        let label = Arc::clone(&self.label);
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            *lock(&label) = CopyLabel::Idle;
        });
        if let Some(previous) = lock(&self.pending_revert).replace(handle) {
            previous.abort();
        }
    }
}

impl Drop for ShareSession {
    fn drop(&mut self) {
        if let Some(pending) = lock(&self.pending_revert).take() {
            pending.abort();
        }
    }
}

/// The guarded values stay consistent even if a holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
