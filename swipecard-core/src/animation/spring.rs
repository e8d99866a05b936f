//! Velocity-seeded spring used to snap a card back to rest

use std::time::Duration;

use crate::config::SettleConfig;
use crate::constants::settle as cfg;

/// Closed-form damped spring (unit mass) pulling a value toward `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleSpring {
    /// Value at release.
    pub start: f32,
    /// Rest value.
    pub target: f32,
    /// Initial velocity in units per second.
    pub velocity: f32,
    /// Spring constant; the natural frequency is its square root.
    pub stiffness: f32,
    /// Below 1.0 bounces, above 1.0 creeps.
    pub damping_ratio: f32,
}

impl SettleSpring {
    /// Spring from `start` to `target` with the tuning in `settle`.
    pub fn new(start: f32, target: f32, velocity: f32, settle: &SettleConfig) -> Self {
        Self {
            start,
            target,
            velocity,
            stiffness: settle.stiffness,
            damping_ratio: settle.damping_ratio,
        }
    }

    /// Position and velocity at `elapsed`.
    pub fn sample(&self, elapsed: Duration) -> (f32, f32) {
        let t = elapsed.as_secs_f32();
        let x0 = self.start - self.target;
        let v0 = self.velocity;
        let omega = self.stiffness.sqrt();
        let zeta = self.damping_ratio;

        let (x, v) = if (zeta - 1.0).abs() < 1e-4 {
            let b = v0 + omega * x0;
            let decay = (-omega * t).exp();
            ((x0 + b * t) * decay, (v0 - omega * b * t) * decay)
        } else if zeta < 1.0 {
            let a = zeta * omega;
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let c = x0;
            let d = (v0 + a * x0) / omega_d;
            let decay = (-a * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            (
                decay * (c * cos + d * sin),
                decay * ((d * omega_d - a * c) * cos - (a * d + c * omega_d) * sin),
            )
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        };

        (self.target + x, v)
    }

    /// Whether the spring is close enough to rest to stop animating.
    pub fn is_settled(&self, elapsed: Duration) -> bool {
        let (position, velocity) = self.sample(elapsed);
        (position - self.target).abs() < cfg::POSITION_THRESHOLD
            && velocity.abs() < cfg::VELOCITY_THRESHOLD
    }
}
