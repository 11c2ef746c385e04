use std::path::Path;
use std::sync::Arc;

use image::codecs::png::PngEncoder;
use image::RgbaImage;
use serde::Serialize;
use tauri::{AppHandle, Emitter, State};
use tracing::{error, info, warn};

use super::flow;
use crate::camera::backend::CameraBackend;
use crate::session::state::SessionState;

/// Shared camera state managed by Tauri.
pub struct CameraState {
    pub backend: Box<dyn CameraBackend>,
}

/// Callback for surfacing a capture failure to the frontend banner.
/// Argument: error message. Invoked at most once per button press.
pub type ErrorCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Payload emitted via the `capture-error` Tauri event when the flow fails.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureErrorPayload {
    pub error: String,
}

/// PNG image encoded for IPC.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedImage {
    /// Base64-encoded PNG bytes.
    pub data: String,
    pub width: u32,
    pub height: u32,
}

/// Result of a capture button press.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaptureOutcome {
    /// The session has no API key; the camera was never touched and the
    /// frontend shows a transient notification.
    MissingApiKey,
    Captured(EncodedImage),
}

/// Encode an RGBA image as base64 PNG for the display region.
fn encode_png(image: &RgbaImage) -> Result<EncodedImage, String> {
    let mut png = Vec::new();
    image
        .write_with_encoder(PngEncoder::new(&mut png))
        .map_err(|e| e.to_string())?;
    Ok(EncodedImage {
        data: base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &png),
        width: image.width(),
        height: image.height(),
    })
}

/// Button-press entry point.
///
/// Checks the API key precondition, runs the capture flow, and applies the
/// uniform failure policy: log the error, record it in session state, fire
/// `on_error` exactly once, and hand the message to the IPC layer. The
/// captured-image slot is only written on success.
pub fn press_capture(
    backend: &dyn CameraBackend,
    session: &SessionState,
    snapshot_path: &Path,
    on_error: Option<&ErrorCallback>,
) -> Result<CaptureOutcome, String> {
    if !session.has_api_key() {
        warn!("capture requested without an API key");
        return Ok(CaptureOutcome::MissingApiKey);
    }

    session.begin_capture();
    let result = flow::capture_image(backend, snapshot_path)
        .map_err(|e| e.to_string())
        .and_then(|image| {
            let encoded = encode_png(&image)?;
            session.complete_capture(image);
            Ok(encoded)
        });

    match result {
        Ok(encoded) => {
            info!("image captured successfully ({}x{})", encoded.width, encoded.height);
            Ok(CaptureOutcome::Captured(encoded))
        }
        Err(message) => {
            error!("capture failed: {message}");
            session.fail_capture(message.clone());
            if let Some(cb) = on_error {
                cb(&message);
            }
            Err(message)
        }
    }
}

/// Capture one frame from the webcam into the session's image slot.
#[tauri::command]
pub async fn capture_image(
    app: AppHandle,
    camera: State<'_, CameraState>,
    session: State<'_, SessionState>,
) -> Result<CaptureOutcome, String> {
    let on_error: ErrorCallback = Arc::new(move |message| {
        let payload = CaptureErrorPayload {
            error: message.to_string(),
        };
        if let Err(e) = app.emit("capture-error", payload) {
            error!("failed to emit capture-error: {e}");
        }
    });

    press_capture(
        camera.backend.as_ref(),
        &session,
        Path::new(flow::SNAPSHOT_FILE),
        Some(&on_error),
    )
}

/// Return the last captured image, if any.
#[tauri::command]
pub async fn get_captured_image(
    session: State<'_, SessionState>,
) -> Result<Option<EncodedImage>, String> {
    session
        .captured_image()
        .map(|image| encode_png(&image))
        .transpose()
}
