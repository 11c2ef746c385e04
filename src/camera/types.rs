/// A single frame delivered by a camera backend.
///
/// Pixel data is tightly packed 8-bit RGB, row-major, no padding.
#[derive(Clone)]
pub struct RawFrame {
    pub data: Vec<u8>,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

impl RawFrame {
    /// Number of bytes a well-formed frame of these dimensions must hold.
    pub fn expected_len(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 3
    }

    /// Whether the pixel buffer matches the declared dimensions.
    pub fn is_well_formed(&self) -> bool {
        self.data.len() == self.expected_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_frame_matches_dimensions() {
        let frame = RawFrame {
            data: vec![0u8; 10 * 10 * 3],
            width: 10,
            height: 10,
        };
        assert!(frame.is_well_formed());
        assert_eq!(frame.expected_len(), 300);
    }

    #[test]
    fn truncated_frame_is_not_well_formed() {
        let frame = RawFrame {
            data: vec![0u8; 299],
            width: 10,
            height: 10,
        };
        assert!(!frame.is_well_formed());
    }

    #[test]
    fn zero_sized_frame_is_well_formed_when_empty() {
        let frame = RawFrame {
            data: vec![],
            width: 0,
            height: 0,
        };
        assert!(frame.is_well_formed());
    }
}
