//! Release velocity estimation over a short trailing window

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::config::GestureConfig;
use crate::constants::gesture as cfg;

#[derive(Debug, Clone, Copy)]
struct Sample {
    at: Instant,
    position: f32,
}

/// Least-squares velocity over the most recent samples.
///
/// Only samples within `horizon` of the newest one count, and the walk back
/// stops at the first gap longer than `assume_stopped`: a long slow drag
/// followed by a flick reports the flick.
#[derive(Debug, Clone)]
pub struct VelocityTracker {
    samples: VecDeque<Sample>,
    horizon: Duration,
    assume_stopped: Duration,
    max_velocity: f32,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(&GestureConfig::default())
    }
}

impl VelocityTracker {
    /// Empty tracker using the window settings of `config`.
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            samples: VecDeque::with_capacity(cfg::HISTORY_SIZE),
            horizon: Duration::from_millis(config.velocity_horizon_ms),
            assume_stopped: Duration::from_millis(config.assume_stopped_ms),
            max_velocity: config.max_velocity,
        }
    }

    /// Record the axis position at `at`. Out-of-order samples are dropped.
    pub fn add(&mut self, at: Instant, position: f32) {
        if let Some(last) = self.samples.back()
            && at < last.at
        {
            return;
        }
        if self.samples.len() == cfg::HISTORY_SIZE {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { at, position });
    }

    /// Forget every sample.
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// No samples recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Velocity in units per second; zero when fewer than two usable
    /// samples exist.
    pub fn velocity(&self) -> f32 {
        let Some(newest) = self.samples.back().copied() else {
            return 0.0;
        };

        let mut window: Vec<(f32, f32)> = Vec::with_capacity(self.samples.len());
        let mut previous = newest;
        for sample in self.samples.iter().rev() {
            let age = newest.at.saturating_duration_since(sample.at);
            let gap = previous.at.saturating_duration_since(sample.at);
            if age > self.horizon || gap > self.assume_stopped {
                break;
            }
            // Seconds relative to the newest sample (non-positive).
            window.push((-age.as_secs_f32(), sample.position));
            previous = *sample;
        }

        if window.len() < 2 {
            return 0.0;
        }

        let n = window.len() as f32;
        let mean_t = window.iter().map(|(t, _)| t).sum::<f32>() / n;
        let mean_x = window.iter().map(|(_, x)| x).sum::<f32>() / n;
        let (num, den) = window.iter().fold((0.0_f32, 0.0_f32), |(num, den), (t, x)| {
            let dt = t - mean_t;
            (num + dt * (x - mean_x), den + dt * dt)
        });

        if den <= 0.0 {
            return 0.0;
        }

        (num / den).clamp(-self.max_velocity, self.max_velocity)
    }
}
