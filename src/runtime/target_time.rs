use std::thread::sleep;
use std::time::{Duration, Instant};

/// Paces the windowed loop to a target frame rate, sleeping away any slack,
/// and keeps the duration of the last frame's work for logging.
pub struct TargetTime {
    target_frame_time: Duration,
    last_frame_start_time: Instant,
    last_frame_duration: Duration,
}

impl TargetTime {
    /// Create a new target time from frames/sec
    pub fn new(target_fps: u64) -> Self {
        Self {
            target_frame_time: Duration::from_micros(1_000_000 / target_fps.max(1)),
            last_frame_start_time: Instant::now(),
            last_frame_duration: Duration::default(),
        }
    }

    /// Start a new frame
    pub fn start_frame(&mut self) {
        self.last_frame_start_time = Instant::now();
    }

    /// End a frame, and wait any slack time we have. Returns how long the frame's work took.
    pub fn end_frame(&mut self) -> Duration {
        let frame_duration = self.last_frame_start_time.elapsed();
        self.last_frame_duration = frame_duration;
        if frame_duration < self.target_frame_time {
            sleep(self.target_frame_time - frame_duration);
        } else {
            log::trace!(
                "Frame took {:?}, over the {:?} budget",
                frame_duration,
                self.target_frame_time
            );
        }
        frame_duration
    }

    pub fn last_frame_duration(&self) -> Duration {
        self.last_frame_duration
    }
}

impl Default for TargetTime {
    fn default() -> Self {
        Self::new(60)
    }
}
