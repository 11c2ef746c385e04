use tauri::State;

use crate::session::state::SessionState;
use crate::stream::status::{log_stream_status, StreamStatus};

/// The media widget's connection state changed; log it and remember it.
#[tauri::command]
pub async fn stream_state_changed(
    session: State<'_, SessionState>,
    status: StreamStatus,
) -> Result<(), String> {
    log_stream_status(&status);
    session.set_stream_status(status);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_status_is_stored_in_session() {
        let session = SessionState::new();
        let status = StreamStatus {
            playing: true,
            audio_receiver_ready: true,
            video_receiver_ready: true,
        };
        log_stream_status(&status);
        session.set_stream_status(status);

        assert_eq!(session.stream_status(), Some(status));
        assert!(session.snapshot().stream.is_some());
    }

    #[test]
    fn latest_report_wins() {
        let session = SessionState::new();
        session.set_stream_status(StreamStatus {
            playing: true,
            audio_receiver_ready: false,
            video_receiver_ready: true,
        });
        session.set_stream_status(StreamStatus {
            playing: false,
            audio_receiver_ready: false,
            video_receiver_ready: false,
        });

        assert!(!session.stream_status().unwrap().playing);
    }
}
