//! Frame-driven animation helpers
//!
//! Each animation is fed animation-frame timestamps (milliseconds) and
//! reports the style for that frame plus whether another frame is needed.
//! The first timestamp seen marks the start.

/// Records the first frame timestamp
#[derive(Debug, Clone, Copy, Default)]
struct FrameClock {
    start: Option<f64>,
}

impl FrameClock {
    fn elapsed(&mut self, timestamp: f64) -> f64 {
        let start = *self.start.get_or_insert(timestamp);
        (timestamp - start).max(0.0)
    }
}

fn progress(elapsed: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        1.0
    } else {
        (elapsed / duration_ms).min(1.0)
    }
}

/// Opacity for one frame of a fade-in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeFrame {
    pub opacity: f64,
    pub finished: bool,
}

/// Opacity ramp from 0 to 1
#[derive(Debug, Clone)]
pub struct FadeIn {
    duration_ms: f64,
    clock: FrameClock,
}

impl FadeIn {
    pub const DEFAULT_DURATION_MS: f64 = 300.0;

    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            clock: FrameClock::default(),
        }
    }

    pub fn frame(&mut self, timestamp: f64) -> FadeFrame {
        let elapsed = self.clock.elapsed(timestamp);
        FadeFrame {
            opacity: progress(elapsed, self.duration_ms),
            finished: elapsed >= self.duration_ms,
        }
    }
}

impl Default for FadeIn {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION_MS)
    }
}

/// Height for one frame of a slide-down
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideHeight {
    /// Fixed pixel height while animating, overflow hidden
    Px(f64),
    /// Natural height once finished, overflow visible
    Auto,
}

/// Height ramp from 0 to the content height
#[derive(Debug, Clone)]
pub struct SlideDown {
    duration_ms: f64,
    target_height: f64,
    clock: FrameClock,
}

impl SlideDown {
    pub const DEFAULT_DURATION_MS: f64 = 300.0;

    /// `target_height` is the element's full content height in pixels
    pub fn new(target_height: f64, duration_ms: f64) -> Self {
        Self {
            duration_ms,
            target_height,
            clock: FrameClock::default(),
        }
    }

    pub fn frame(&mut self, timestamp: f64) -> SlideHeight {
        let elapsed = self.clock.elapsed(timestamp);
        if elapsed >= self.duration_ms {
            SlideHeight::Auto
        } else {
            SlideHeight::Px(self.target_height * progress(elapsed, self.duration_ms))
        }
    }
}

/// Scroll position that puts an element `offset` pixels below the top
pub fn scroll_target(offset_top: f64, offset: f64) -> f64 {
    offset_top - offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_in_ramp() {
        let mut fade = FadeIn::default();

        assert_eq!(fade.frame(1000.0), FadeFrame { opacity: 0.0, finished: false });
        assert_eq!(fade.frame(1150.0), FadeFrame { opacity: 0.5, finished: false });
        assert_eq!(fade.frame(1300.0), FadeFrame { opacity: 1.0, finished: true });
        assert_eq!(fade.frame(1900.0).opacity, 1.0);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut fade = FadeIn::new(0.0);
        assert_eq!(fade.frame(5.0), FadeFrame { opacity: 1.0, finished: true });
    }

    #[test]
    fn test_slide_down() {
        let mut slide = SlideDown::new(200.0, 400.0);

        assert_eq!(slide.frame(0.0), SlideHeight::Px(0.0));
        assert_eq!(slide.frame(100.0), SlideHeight::Px(50.0));
        assert_eq!(slide.frame(300.0), SlideHeight::Px(150.0));
        assert_eq!(slide.frame(400.0), SlideHeight::Auto);
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(1200.0, 80.0), 1120.0);
        assert_eq!(scroll_target(40.0, 0.0), 40.0);
    }
}
