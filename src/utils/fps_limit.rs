use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Keeps a fixed delay between frames and measures the resulting frame rate.
pub struct FramePacer {
    target_frametime: Duration,
    /// Added to the next frame only; excluded from the measured frame time.
    extra_wait: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FramePacer {
    pub fn new(target_frametime: Duration) -> Self {
        Self {
            target_frametime,
            extra_wait: Duration::ZERO,
            frame_timer: Instant::now(),
            frametime_smoothed: target_frametime.as_secs_f64(),
        }
    }

    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    /// Makes the next [`FramePacer::delay`] wait `duration` longer.
    pub fn pause(&mut self, duration: Duration) {
        self.extra_wait += duration;
    }

    /// Sleeps until the current frame (plus any pending pause) is over.
    pub fn delay(&mut self) {
        let extra = std::mem::take(&mut self.extra_wait);
        let frame_end = self.target_frametime + extra;
        if let Some(rest) = frame_end.checked_sub(self.frame_timer.elapsed()) {
            sleep(rest);
        }

        let frametime = self.frame_timer.elapsed().saturating_sub(extra);
        self.frametime_smoothed += (frametime.as_secs_f64() - self.frametime_smoothed) * 0.1;
        self.frame_timer = Instant::now();
    }
}
