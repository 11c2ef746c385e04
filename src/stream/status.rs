use serde::{Deserialize, Serialize};
use tracing::info;

/// Connection state of the live media widget, reported by the frontend.
///
/// The stream itself (device negotiation, transport) is owned and scheduled
/// by the webview; the backend only reads this for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamStatus {
    pub playing: bool,
    pub audio_receiver_ready: bool,
    pub video_receiver_ready: bool,
}

/// Log the widget's connection state.
pub fn log_stream_status(status: &StreamStatus) {
    info!("media stream playing: {}", status.playing);
    info!("audio receiver ready: {}", status.audio_receiver_ready);
    info!("video receiver ready: {}", status.video_receiver_ready);
}
