/// An in-progress pointer drag on a marquee strip.
///
/// Dragging right moves the strip right, which means the scroll offset goes
/// down by the same amount the pointer travelled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    start_x: f32,
    baseline_offset: f32,
}

impl DragGesture {
    pub fn begin(start_x: f32, baseline_offset: f32) -> Self {
        Self {
            start_x,
            baseline_offset,
        }
    }

    /// Unwrapped scroll offset for a pointer at `x`.
    pub fn offset_at(&self, x: f32) -> f32 {
        self.baseline_offset - (x - self.start_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulling_right_scrolls_back() {
        let drag = DragGesture::begin(100.0, 300.0);
        assert_eq!(drag.offset_at(150.0), 250.0);
    }

    #[test]
    fn pulling_left_scrolls_forward() {
        let drag = DragGesture::begin(100.0, 300.0);
        assert_eq!(drag.offset_at(40.0), 360.0);
    }

    #[test]
    fn no_motion_keeps_baseline() {
        let drag = DragGesture::begin(-12.5, 42.0);
        assert_eq!(drag.offset_at(-12.5), 42.0);
    }
}
