use std::time::Duration;

/// Where a timed effect is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    /// `progress` is eased-input in `[0.0, 1.0)`.
    Running { progress: f32 },
    Completed,
}

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Ease-out cubic: fast start, gentle settle.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[derive(Debug, Clone)]
pub(crate) struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub(crate) fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub(crate) fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub(crate) fn phase(&self) -> AnimPhase {
        if self.is_finished() {
            AnimPhase::Completed
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimPhase, EffectTimer, ease_out_cubic};
    use std::time::Duration;

    #[test]
    fn ease_is_clamped_at_both_ends() {
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(4.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn timer_runs_then_completes() {
        let mut timer = EffectTimer::new(Duration::from_millis(100));
        assert!(matches!(timer.phase(), AnimPhase::Running { progress } if progress == 0.0));
        timer.advance(Duration::from_millis(50));
        assert!(matches!(timer.phase(), AnimPhase::Running { progress } if (progress - 0.5).abs() < 1e-6));
        timer.advance(Duration::from_millis(60));
        assert_eq!(timer.phase(), AnimPhase::Completed);
    }

    #[test]
    fn zero_duration_immediately_completed() {
        let timer = EffectTimer::new(Duration::ZERO);
        assert_eq!(timer.phase(), AnimPhase::Completed);
        assert_eq!(timer.progress(), 1.0);
    }
}
