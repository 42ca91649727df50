use std::time::{Duration, Instant};

/// Measured widths of a marquee's scroll container.
///
/// `content_width` covers both copies of the item list, so one logical pass
/// is [`half`](Self::half) pixels wide.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    pub content_width: f32,
    pub viewport_width: f32,
}

impl Geometry {
    pub fn new(content_width: f32, viewport_width: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            content_width: sanitize(content_width),
            viewport_width: sanitize(viewport_width),
        }
    }

    pub fn half(&self) -> f32 {
        self.content_width / 2.0
    }

    /// `false` when one pass is narrower than the viewport, in which case the
    /// repetition becomes visible.
    pub fn loops_seamlessly(&self) -> bool {
        self.half() >= self.viewport_width
    }
}

/// Folds `offset` into `[0, half)`.
///
/// With no measured width (`half == 0`) the offset is returned untouched.
pub fn wrap_offset(offset: f32, half: f32) -> f32 {
    if !offset.is_finite() {
        return 0.0;
    }
    if !half.is_finite() || half <= 0.0 {
        return offset;
    }
    let wrapped = offset.rem_euclid(half);
    // rem_euclid can round up to `half` for tiny negative inputs.
    if wrapped >= half { 0.0 } else { wrapped }
}

/// Holds back geometry updates while the window is being resized.
#[derive(Debug, Clone)]
pub struct ResizeDebounce {
    delay: Duration,
    deadline: Option<Instant>,
    pending: Option<Geometry>,
}

impl ResizeDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            pending: None,
        }
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns the geometry straight back when nothing is armed, otherwise
    /// parks it until the deadline passes.
    pub fn offer(&mut self, geometry: Geometry) -> Option<Geometry> {
        if self.deadline.is_none() {
            return Some(geometry);
        }
        self.pending = Some(geometry);
        None
    }

    pub fn poll(&mut self, now: Instant) -> Option<Geometry> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_values_inside_one_pass() {
        assert_eq!(wrap_offset(0.0, 500.0), 0.0);
        assert_eq!(wrap_offset(499.0, 500.0), 499.0);
        assert_eq!(wrap_offset(500.0, 500.0), 0.0);
        assert_eq!(wrap_offset(1_250.0, 500.0), 250.0);
        assert_eq!(wrap_offset(-50.0, 500.0), 450.0);
    }

    #[test]
    fn wrap_never_returns_half() {
        let wrapped = wrap_offset(-1e-9, 100.0);
        assert!(
            (0.0..100.0).contains(&wrapped),
            "expected value in [0, 100), got {wrapped}"
        );
    }

    #[test]
    fn wrap_is_skipped_without_width() {
        assert_eq!(wrap_offset(1_234.0, 0.0), 1_234.0);
        assert_eq!(wrap_offset(f32::NAN, 100.0), 0.0);
    }

    #[test]
    fn geometry_sanitizes_bad_measurements() {
        let geometry = Geometry::new(f32::NAN, -20.0);
        assert_eq!(geometry, Geometry::default());
        assert_eq!(geometry.half(), 0.0);
    }

    #[test]
    fn narrow_content_is_flagged() {
        assert!(Geometry::new(2_000.0, 800.0).loops_seamlessly());
        assert!(!Geometry::new(1_000.0, 800.0).loops_seamlessly());
    }

    #[test]
    fn debounce_passes_through_when_idle() {
        let mut debounce = ResizeDebounce::new(Duration::from_millis(150));
        let geometry = Geometry::new(1_000.0, 400.0);
        assert_eq!(debounce.offer(geometry), Some(geometry));
    }

    #[test]
    fn debounce_releases_latest_after_deadline() {
        let base = Instant::now();
        let mut debounce = ResizeDebounce::new(Duration::from_millis(150));
        debounce.arm(base);

        assert_eq!(debounce.offer(Geometry::new(1_000.0, 400.0)), None);
        assert_eq!(debounce.offer(Geometry::new(1_200.0, 500.0)), None);
        assert_eq!(debounce.poll(base + Duration::from_millis(100)), None);

        // A second resize pushes the deadline out.
        debounce.arm(base + Duration::from_millis(100));
        assert_eq!(debounce.poll(base + Duration::from_millis(200)), None);
        assert_eq!(
            debounce.poll(base + Duration::from_millis(250)),
            Some(Geometry::new(1_200.0, 500.0))
        );
        assert!(!debounce.is_armed());
    }
}
