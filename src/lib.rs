#[allow(dead_code)]
mod camera;
mod capture;
#[allow(dead_code)]
mod session;
mod stream;

use tauri::Manager;

use camera::dummy::DummyBackend;
use capture::commands::{capture_image, get_captured_image, CameraState};
use session::commands::{get_session, set_api_key};
use session::state::SessionState;
use stream::commands::stream_state_changed;

/// Create the camera backend for this process.
///
/// When `DUMMY_CAMERA=1` is set, a simulated camera is used instead.
fn create_camera_state() -> CameraState {
    if DummyBackend::is_enabled() {
        return CameraState {
            backend: Box::new(DummyBackend::new()),
        };
    }

    CameraState {
        backend: Box::new(NullBackend),
    }
}

/// No-op backend used when no camera integration is wired up; every grab
/// reports the device as unavailable.
struct NullBackend;

impl camera::backend::CameraBackend for NullBackend {
    fn device_name(&self) -> &str {
        "none"
    }

    fn grab_frame(&self) -> camera::error::Result<Option<camera::types::RawFrame>> {
        Err(camera::error::CaptureError::DeviceUnavailable(
            "no camera backend on this platform".to_string(),
        ))
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .manage(create_camera_state())
        .manage(SessionState::new())
        .invoke_handler(tauri::generate_handler![
            capture_image,
            get_captured_image,
            set_api_key,
            get_session,
            stream_state_changed,
        ])
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::new()
                        .targets([
                            tauri_plugin_log::Target::new(tauri_plugin_log::TargetKind::Stdout),
                            tauri_plugin_log::Target::new(tauri_plugin_log::TargetKind::Webview),
                            tauri_plugin_log::Target::new(tauri_plugin_log::TargetKind::LogDir {
                                file_name: None,
                            }),
                        ])
                        .level(log::LevelFilter::Debug)
                        .build(),
                )?;
            }

            // Session slots that earlier interactions set survive this call.
            app.state::<SessionState>().init();
            tracing::info!("session state initialised");

            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
