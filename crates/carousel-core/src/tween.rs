use crate::ease::Ease;

/// One-shot scalar tween: `from` to `to` over `duration` wall seconds.
#[derive(Clone, Copy, Debug)]
pub struct ScalarTween {
    from: f64,
    to: f64,
    duration: f64,
    ease: Ease,
    elapsed: f64,
}

impl ScalarTween {
    pub fn new(from: f64, to: f64, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(1e-6),
            ease,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds and return the current value.
    pub fn step(&mut self, dt: f64) -> f64 {
        self.elapsed += dt.max(0.0);
        self.value()
    }

    pub fn value(&self) -> f64 {
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn done(&self) -> bool {
        self.elapsed >= self.duration
    }
}
