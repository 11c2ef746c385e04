use std::path::Path;

use image::{DynamicImage, ImageBuffer, RgbImage, RgbaImage};
use tracing::{debug, error, info};

use crate::camera::backend::CameraBackend;
use crate::camera::error::{CaptureError, Result};

/// Fixed relative path the snapshot is written to, overwritten per capture.
pub const SNAPSHOT_FILE: &str = "web_image.png";

/// Acquire one frame, convert it to 4-channel RGBA, persist it as PNG, and
/// hand the image back.
///
/// The write to `snapshot_path` and the exists-after-write validation are
/// part of the contract; the returned image is the in-memory conversion, not
/// a re-decode of the file. The API key precondition is the caller's job,
/// not checked here.
pub fn capture_image(backend: &dyn CameraBackend, snapshot_path: &Path) -> Result<RgbaImage> {
    info!("capturing frame from '{}'", backend.device_name());

    let frame = backend.grab_frame()?.ok_or(CaptureError::NoFrame)?;
    let (width, height) = (frame.width, frame.height);
    let rgb: RgbImage = ImageBuffer::from_raw(width, height, frame.data)
        .ok_or(CaptureError::BadFrame { width, height })?;

    // Force the 4-channel representation before anything touches disk.
    let rgba = DynamicImage::ImageRgb8(rgb).into_rgba8();

    rgba.save(snapshot_path)?;
    validate_snapshot(snapshot_path)?;
    debug!("snapshot written to {}", snapshot_path.display());

    Ok(rgba)
}

/// Check that the snapshot actually landed on disk.
pub fn validate_snapshot(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        error!("could not find snapshot: {}", path.display());
        Err(CaptureError::MissingFile(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::dummy::DummyBackend;
    use crate::camera::types::RawFrame;
    use tempfile::TempDir;

    /// Backend serving one fixed frame, or nothing.
    struct StubBackend {
        frame: Option<RawFrame>,
    }

    impl CameraBackend for StubBackend {
        fn device_name(&self) -> &str {
            "Stub Camera"
        }

        fn grab_frame(&self) -> Result<Option<RawFrame>> {
            Ok(self.frame.clone())
        }
    }

    fn snapshot_path(dir: &TempDir) -> std::path::PathBuf {
        dir.path().join(SNAPSHOT_FILE)
    }

    #[test]
    fn capture_returns_four_channel_image() {
        let dir = TempDir::new().unwrap();
        let backend = StubBackend {
            frame: Some(DummyBackend::test_frame()),
        };

        let image = capture_image(&backend, &snapshot_path(&dir)).unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        // RgbaImage is 4 bytes per pixel by construction
        assert_eq!(image.as_raw().len(), 2 * 2 * 4);
    }

    #[test]
    fn capture_preserves_pixel_data_with_opaque_alpha() {
        let dir = TempDir::new().unwrap();
        let backend = StubBackend {
            frame: Some(DummyBackend::test_frame()),
        };

        let image = capture_image(&backend, &snapshot_path(&dir)).unwrap();
        assert_eq!(image.get_pixel(0, 0).0, [10, 20, 30, 255]);
        assert_eq!(image.get_pixel(1, 0).0, [40, 50, 60, 255]);
        assert_eq!(image.get_pixel(0, 1).0, [70, 80, 90, 255]);
        assert_eq!(image.get_pixel(1, 1).0, [100, 110, 120, 255]);
    }

    #[test]
    fn capture_writes_snapshot_file() {
        let dir = TempDir::new().unwrap();
        let path = snapshot_path(&dir);
        let backend = StubBackend {
            frame: Some(DummyBackend::test_frame()),
        };

        capture_image(&backend, &path).unwrap();
        assert!(path.exists());

        // The file round-trips as a decodable 4-channel PNG.
        let reloaded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(reloaded.get_pixel(1, 1).0, [100, 110, 120, 255]);
    }

    #[test]
    fn capture_overwrites_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = snapshot_path(&dir);

        let first = StubBackend {
            frame: Some(RawFrame {
                data: vec![1; 2 * 2 * 3],
                width: 2,
                height: 2,
            }),
        };
        capture_image(&first, &path).unwrap();

        let second = StubBackend {
            frame: Some(DummyBackend::test_frame()),
        };
        capture_image(&second, &path).unwrap();

        let reloaded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(reloaded.get_pixel(0, 0).0, [10, 20, 30, 255]);
    }

    #[test]
    fn capture_fails_with_no_frame_when_backend_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = snapshot_path(&dir);
        let backend = StubBackend { frame: None };

        let err = capture_image(&backend, &path).unwrap_err();
        assert!(matches!(err, CaptureError::NoFrame));
        assert!(!path.exists(), "failed capture must not leave a snapshot");
    }

    #[test]
    fn capture_rejects_frame_with_mismatched_buffer() {
        let dir = TempDir::new().unwrap();
        let backend = StubBackend {
            frame: Some(RawFrame {
                data: vec![0; 5],
                width: 2,
                height: 2,
            }),
        };

        let err = capture_image(&backend, &snapshot_path(&dir)).unwrap_err();
        assert!(matches!(
            err,
            CaptureError::BadFrame {
                width: 2,
                height: 2
            }
        ));
    }

    #[test]
    fn validate_snapshot_accepts_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = snapshot_path(&dir);
        std::fs::write(&path, b"png").unwrap();
        assert!(validate_snapshot(&path).is_ok());
    }

    #[test]
    fn snapshot_deleted_after_write_reports_missing_file() {
        // Simulates the race where the file vanishes between the write and
        // the validation step.
        let dir = TempDir::new().unwrap();
        let path = snapshot_path(&dir);
        std::fs::write(&path, b"png").unwrap();
        std::fs::remove_file(&path).unwrap();

        let err = validate_snapshot(&path).unwrap_err();
        match err {
            CaptureError::MissingFile(missing) => assert_eq!(missing, path),
            other => panic!("expected MissingFile, got {other:?}"),
        }
    }

    #[test]
    fn capture_surfaces_io_failure_from_unwritable_path() {
        let dir = TempDir::new().unwrap();
        // A directory at the target path makes the PNG write fail.
        let path = dir.path().join("web_image.png");
        std::fs::create_dir(&path).unwrap();
        let backend = StubBackend {
            frame: Some(DummyBackend::test_frame()),
        };

        assert!(capture_image(&backend, &path).is_err());
    }
}
