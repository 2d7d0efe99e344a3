/// Rotation angle advanced once per frame
use std::f64::consts::TAU;

/// How the angle behaves once it passes a full turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Keep growing without bound.
    Unbounded,
    /// Subtract 2π once when the advanced angle reaches 2π.
    ///
    /// This is not a true modulo: an increment larger than 2π is only
    /// partially normalized. Per-frame increments are small, so the angle
    /// stays in `[0, 2π)` in practice.
    SingleSubtraction,
}

/// Rotation state in radians.
///
/// Accumulated in `f64` and narrowed to `f32` only for the uniform, so an
/// unbounded angle keeps advancing for the lifetime of the page.
#[derive(Debug, Clone, Copy)]
pub struct RotationState {
    theta: f64,
    increment: f64,
    wrap: WrapMode,
}

impl RotationState {
    pub fn new(increment: f64, wrap: WrapMode) -> Self {
        Self {
            theta: 0.0,
            increment,
            wrap,
        }
    }

    /// Start from an arbitrary angle instead of zero
    pub fn with_theta(mut self, theta: f64) -> Self {
        self.theta = theta;
        self
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Advance by one frame's increment and return the new angle
    pub fn advance(&mut self) -> f64 {
        self.theta += self.increment;
        if self.wrap == WrapMode::SingleSubtraction && self.theta >= TAU {
            self.theta -= TAU;
            log::trace!("rotation wrapped to {:.4}", self.theta);
        }
        self.theta
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new(0.01, WrapMode::Unbounded)
    }
}
