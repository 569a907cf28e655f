use std::time::{Duration, Instant};

/// Weight of the previous estimate when folding in a new frame interval.
const SMOOTHING: f32 = 0.95;

/// A frames per second (FPS) counter with exponential smoothing.
///
/// # Examples
///
/// ```
/// use lumaline_io::fps_counter::FpsCounter;
///
/// let mut fps_counter = FpsCounter::new();
///
/// for _ in 0..100 {
///    fps_counter.update();
/// }
///
/// assert_eq!(fps_counter.frame_count(), 100);
/// ```
#[derive(Debug)]
pub struct FpsCounter {
    started: Instant,
    last_time: Instant,
    frame_count: u64,
    fps: f32,
}

impl FpsCounter {
    /// Creates a new `FpsCounter`.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_time: now,
            frame_count: 0,
            fps: 0.0,
        }
    }

    /// Returns the smoothed FPS.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Returns the number of frames counted so far.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Returns the time since the counter was created.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Counts one frame and folds its interval into the FPS estimate.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.record(now.duration_since(self.last_time));
        self.last_time = now;
    }

    fn record(&mut self, interval: Duration) {
        self.frame_count += 1;

        let secs = interval.as_secs_f32();
        if secs <= 0.0 {
            return;
        }

        let instant_fps = 1.0 / secs;
        self.fps = if self.fps == 0.0 {
            instant_fps
        } else {
            self.fps * SMOOTHING + instant_fps * (1.0 - SMOOTHING)
        };
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}
