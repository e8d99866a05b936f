//! Easing curves

use crate::constants::dismiss::EASE_IN_OUT;

/// CSS-style cubic bezier timing curve through (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// First control point, x in `[0, 1]`.
    pub x1: f32,
    /// First control point, y.
    pub y1: f32,
    /// Second control point, x in `[0, 1]`.
    pub x2: f32,
    /// Second control point, y.
    pub y2: f32,
}

impl CubicBezier {
    /// Symmetric ease-in-ease-out, `(0.42, 0, 0.58, 1)`.
    pub const EASE_IN_OUT: Self =
        Self::new(EASE_IN_OUT.0, EASE_IN_OUT.1, EASE_IN_OUT.2, EASE_IN_OUT.3);

    /// Curve with control points `(x1, y1)` and `(x2, y2)`.
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn component(p1: f32, p2: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    fn x_derivative(&self, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * self.x1
            + 6.0 * inv * s * (self.x2 - self.x1)
            + 3.0 * s * s * (1.0 - self.x2)
    }

    /// Curve parameter whose x equals `x`: Newton steps, falling back to
    /// bisection when the slope flattens.
    fn solve_parameter(&self, x: f32) -> f32 {
        let mut s = x;
        for _ in 0..8 {
            let error = Self::component(self.x1, self.x2, s) - x;
            if error.abs() < 1e-6 {
                return s;
            }
            let slope = self.x_derivative(s);
            if slope.abs() < 1e-6 {
                break;
            }
            s -= error / slope;
        }

        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        s = x;
        for _ in 0..32 {
            let value = Self::component(self.x1, self.x2, s);
            if (value - x).abs() < 1e-6 {
                break;
            }
            if value < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }

    /// Eased value at progress `t`.
    pub fn transform(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        Self::component(self.y1, self.y2, self.solve_parameter(t))
    }
}

/// Easing applied to a normalized progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Identity.
    Linear,
    /// `1 - (1 - t)^3`
    EaseOutCubic,
    /// Arbitrary cubic bezier.
    Bezier(CubicBezier),
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            EasingFunction::Bezier(curve) => curve.transform(t),
        }
    }
}
