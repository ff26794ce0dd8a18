//! Timed interpolation of a single animated value
//!
//! A [`Timeline`] holds one `f32` and can be sent through a chain of
//! [`Phase`]s, each moving the value to a target over a fixed duration.
//! Time is supplied by the caller in seconds (egui's frame clock), so the
//! timeline never sleeps and is easy to drive from tests.

use std::time::Duration;

/// Interpolation curve applied within one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out, the default curve for timed animations
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear phase time `t` in [0, 1] onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Move the value to `target` over `duration`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    pub target: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl Phase {
    pub fn to(target: f32, duration: Duration) -> Self {
        Self {
            target,
            duration,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// A value that is either at rest or running through a sequence of phases.
///
/// Starting a new sequence while one is in flight replaces it. The new
/// sequence begins from whatever value the old one had reached.
#[derive(Debug, Clone)]
pub struct Timeline {
    resting: f32,
    start_value: f32,
    started_at: Option<f64>,
    phases: Vec<Phase>,
}

impl Timeline {
    pub fn new(value: f32) -> Self {
        Self {
            resting: value,
            start_value: value,
            started_at: None,
            phases: Vec::new(),
        }
    }

    /// Run `phases` back to back starting at time `now`.
    /// Returns true if a running sequence was replaced.
    pub fn start(&mut self, phases: Vec<Phase>, now: f64) -> bool {
        let interrupted = self.is_animating(now);
        self.start_value = self.sample(now);
        self.resting = phases.last().map(|p| p.target).unwrap_or(self.start_value);
        self.phases = phases;
        self.started_at = Some(now);
        interrupted
    }

    /// Current value at time `now`
    pub fn sample(&self, now: f64) -> f32 {
        let Some(started_at) = self.started_at else {
            return self.resting;
        };

        let mut elapsed = (now - started_at).max(0.0);
        let mut from = self.start_value;
        for phase in &self.phases {
            let duration = phase.duration.as_secs_f64();
            if elapsed < duration {
                let t = (elapsed / duration) as f32;
                return lerp(from, phase.target, phase.easing.apply(t));
            }
            elapsed -= duration;
            from = phase.target;
        }
        self.resting
    }

    pub fn is_animating(&self, now: f64) -> bool {
        match self.started_at {
            Some(started_at) => now - started_at < self.total_duration().as_secs_f64(),
            None => false,
        }
    }

    /// Drop a finished sequence so the timeline is at rest again.
    /// Returns the value at `now`.
    pub fn settle(&mut self, now: f64) -> f32 {
        if self.started_at.is_some() && !self.is_animating(now) {
            self.started_at = None;
            self.phases.clear();
            self.start_value = self.resting;
        }
        self.sample(now)
    }

    pub fn total_duration(&self) -> Duration {
        self.phases.iter().map(|p| p.duration).sum()
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
