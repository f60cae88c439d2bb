//! Force source — velocity tracker for one moving landmark.

use glam::Vec2;

/// One moving influence point. Its velocity estimate drives the
/// deformation of nearby grid points.
///
/// # Update ordering
///
/// [`observe`](Self::observe) computes velocity *before* refreshing the
/// remembered previous position, so the reported velocity lags the newest
/// observation by one tick: after a call, `velocity()` is the displacement
/// between the position held two calls ago and the one just handed in.
/// Downstream force propagation timing depends on this lag.
#[derive(Debug, Clone, Copy)]
pub struct ForceSource {
    pos: Vec2,
    last: Vec2,
    vel: Vec2,
    radius: f32,
}

impl ForceSource {
    /// Creates a source at `pos` with the given influence diameter.
    /// Initial velocity is zero.
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            last: pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    /// Feeds a new observed position. See the type docs for the
    /// velocity lag this ordering produces.
    pub fn observe(&mut self, next: Vec2) {
        self.vel = next - self.last;
        self.last = self.pos;
        self.pos = next;
    }

    /// Current position (the most recent observation).
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Lagged velocity estimate (see type docs).
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    /// Influence diameter.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}
