use image::RgbaImage;
use parking_lot::Mutex;
use serde::Serialize;

use crate::stream::status::StreamStatus;

/// Where the capture flow currently stands. Transitions are driven by the
/// capture button and by the flow's outcome; nothing moves the machine
/// backwards to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CapturePhase {
    #[default]
    Idle,
    Capturing,
    Captured,
    Errored,
}

#[derive(Default)]
struct Session {
    api_key: Option<String>,
    captured_image: Option<RgbaImage>,
    stream: Option<StreamStatus>,
    phase: CapturePhase,
    last_error: Option<String>,
}

/// Serializable view of the session for the page to re-render from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub phase: CapturePhase,
    pub has_api_key: bool,
    pub has_captured_image: bool,
    pub last_error: Option<String>,
    pub stream: Option<StreamStatus>,
}

/// Session state shared across re-renders.
///
/// A single-writer slot guarded by one mutex, managed by Tauri rather than
/// living in an ambient global. The captured-image slot is overwritten on
/// each successful capture and never cleared.
pub struct SessionState {
    inner: Mutex<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Session::default()),
        }
    }

    /// Idempotent initializer: only fields that are still unset receive
    /// their starting value. Values written by earlier interactions survive
    /// re-initialization.
    pub fn init(&self) {
        let mut s = self.inner.lock();
        if s.api_key.is_none() {
            s.api_key = Some(String::new());
        }
        // captured_image, stream, and last_error start absent and stay
        // untouched here; phase already defaults to Idle.
    }

    /// Whether a non-empty API key has been supplied.
    pub fn has_api_key(&self) -> bool {
        self.inner
            .lock()
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    pub fn set_api_key(&self, key: String) {
        self.inner.lock().api_key = Some(key);
    }

    pub fn phase(&self) -> CapturePhase {
        self.inner.lock().phase
    }

    /// Button pressed with the precondition satisfied.
    pub fn begin_capture(&self) {
        self.inner.lock().phase = CapturePhase::Capturing;
    }

    /// Capture flow finished; overwrite the image slot and clear the error.
    pub fn complete_capture(&self, image: RgbaImage) {
        let mut s = self.inner.lock();
        s.captured_image = Some(image);
        s.phase = CapturePhase::Captured;
        s.last_error = None;
    }

    /// Capture flow failed; the image slot keeps its previous contents.
    pub fn fail_capture(&self, message: String) {
        let mut s = self.inner.lock();
        s.last_error = Some(message);
        s.phase = CapturePhase::Errored;
    }

    /// The last captured image, if any.
    pub fn captured_image(&self) -> Option<RgbaImage> {
        self.inner.lock().captured_image.clone()
    }

    pub fn last_error(&self) -> Option<String> {
        self.inner.lock().last_error.clone()
    }

    pub fn set_stream_status(&self, status: StreamStatus) {
        self.inner.lock().stream = Some(status);
    }

    pub fn stream_status(&self) -> Option<StreamStatus> {
        self.inner.lock().stream
    }

    /// Take a serializable snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        let s = self.inner.lock();
        SessionSnapshot {
            phase: s.phase,
            has_api_key: s.api_key.as_deref().is_some_and(|k| !k.trim().is_empty()),
            has_captured_image: s.captured_image.is_some(),
            last_error: s.last_error.clone(),
            stream: s.stream,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
