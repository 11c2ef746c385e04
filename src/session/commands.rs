use tauri::State;
use tracing::debug;

use crate::session::state::{SessionSnapshot, SessionState};

/// Store the API key for this session. The key lives in memory only and is
/// never persisted or logged.
#[tauri::command]
pub async fn set_api_key(
    session: State<'_, SessionState>,
    api_key: String,
) -> Result<(), String> {
    debug!("api key updated ({} chars)", api_key.chars().count());
    session.set_api_key(api_key);
    Ok(())
}

/// Serializable view of the session for the page to re-render from.
#[tauri::command]
pub async fn get_session(session: State<'_, SessionState>) -> Result<SessionSnapshot, String> {
    Ok(session.snapshot())
}
