use crate::camera::backend::CameraBackend;
use crate::camera::error::Result;
use crate::camera::types::RawFrame;

const DUMMY_DEVICE_NAME: &str = "Dummy Test Camera";
const DUMMY_WIDTH: u32 = 640;
const DUMMY_HEIGHT: u32 = 480;

/// A fake camera backend for running without real hardware.
///
/// Every grab produces a synthetic 640x480 RGB gradient so the full capture
/// flow (conversion, snapshot write, display) can be exercised end to end.
///
/// Enable via `DUMMY_CAMERA=1` environment variable.
pub struct DummyBackend;

impl DummyBackend {
    pub fn new() -> Self {
        Self
    }

    /// Whether the dummy camera is enabled via environment variable.
    pub fn is_enabled() -> bool {
        std::env::var("DUMMY_CAMERA").is_ok_and(|v| v == "1" || v == "true")
    }

    /// A fixed 2x2 RGB frame with distinct per-pixel values, for tests.
    pub fn test_frame() -> RawFrame {
        RawFrame {
            data: vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120],
            width: 2,
            height: 2,
        }
    }
}

impl Default for DummyBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Synthetic RGB gradient pattern.
fn gradient_rgb(width: u32, height: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push((x % 256) as u8); // R
            data.push((y % 256) as u8); // G
            data.push(128); // B
        }
    }
    data
}

impl CameraBackend for DummyBackend {
    fn device_name(&self) -> &str {
        DUMMY_DEVICE_NAME
    }

    fn grab_frame(&self) -> Result<Option<RawFrame>> {
        Ok(Some(RawFrame {
            data: gradient_rgb(DUMMY_WIDTH, DUMMY_HEIGHT),
            width: DUMMY_WIDTH,
            height: DUMMY_HEIGHT,
        }))
    }
}
