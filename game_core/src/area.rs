use crate::Params;

/// Size of the on-screen canvas, in device pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySize {
    pub width: f32,
    pub height: f32,
}

impl DisplaySize {
    /// Uniform scale from the logical play area to this size
    pub fn scale(&self) -> f32 {
        self.width / Params::AREA_WIDTH
    }
}

/// Largest 4:3 size that fits in 90% of the viewport width and 70% of its
/// height. Width-limited first, then height-limited.
///
/// Returns `None` for a degenerate viewport; callers keep the previous size.
pub fn fit_display(viewport_width: f32, viewport_height: f32) -> Option<DisplaySize> {
    let aspect = Params::AREA_WIDTH / Params::AREA_HEIGHT;
    let max_width = viewport_width * Params::VIEWPORT_WIDTH_FRACTION;
    let max_height = viewport_height * Params::VIEWPORT_HEIGHT_FRACTION;

    let mut width = max_width;
    let mut height = max_width / aspect;
    if height > max_height {
        height = max_height;
        width = max_height * aspect;
    }

    let usable = |v: f32| v.is_finite() && v > 0.0;
    if usable(width) && usable(height) {
        Some(DisplaySize { width, height })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{a} != {b}");
    }

    #[test]
    fn test_width_limited_viewport() {
        // 90% of 1000 = 900 wide -> 675 high, 70% of 2000 = 1400 allows it
        let size = fit_display(1000.0, 2000.0).unwrap();
        assert_close(size.width, 900.0);
        assert_close(size.height, 675.0);
    }

    #[test]
    fn test_height_limited_viewport() {
        // 70% of 800 = 560 high -> 746.67 wide
        let size = fit_display(1920.0, 800.0).unwrap();
        assert_close(size.height, 560.0);
        assert_close(size.width, 560.0 * 4.0 / 3.0);
    }

    #[test]
    fn test_aspect_ratio_preserved() {
        for (w, h) in [(320.0, 480.0), (1280.0, 720.0), (3840.0, 2160.0), (500.0, 500.0)] {
            let size = fit_display(w, h).unwrap();
            assert_close(size.width / size.height, 800.0 / 600.0);
            assert!(size.width <= w * 0.9 + 1e-3);
            assert!(size.height <= h * 0.7 + 1e-3);
        }
    }

    #[test]
    fn test_scale() {
        let size = fit_display(1000.0, 2000.0).unwrap();
        assert_close(size.scale(), 900.0 / 800.0);
    }

    #[test]
    fn test_degenerate_viewport_is_ignored() {
        assert_eq!(fit_display(0.0, 0.0), None);
        assert_eq!(fit_display(1024.0, 0.0), None);
        assert_eq!(fit_display(-5.0, 600.0), None);
        assert_eq!(fit_display(f32::NAN, 600.0), None);
    }
}
