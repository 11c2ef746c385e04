use crate::camera::error::Result;
use crate::camera::types::RawFrame;

/// Camera collaborator seam.
///
/// The application never touches capture hardware directly; a backend
/// produces at most one frame per request. `Ok(None)` means the device was
/// reachable but had no frame to hand over, which the capture flow treats as
/// a failed capture.
pub trait CameraBackend: Send + Sync {
    /// Human-readable device name, used in logs.
    fn device_name(&self) -> &str;

    /// Acquire a single frame from the device. Blocks until the collaborator
    /// answers; there is no timeout or retry.
    fn grab_frame(&self) -> Result<Option<RawFrame>>;
}
