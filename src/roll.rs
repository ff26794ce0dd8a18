//! Roll controller: owns the current face and the animation progress

use crate::animation::{Phase, Timeline};
use crate::constants::*;
use crate::types::Face;
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::debug;

pub struct RollController<R: Rng = ThreadRng> {
    face: Face,
    progress: Timeline,
    rng: R,
    roll_count: u64,
}

impl RollController<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for RollController<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RollController<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            face: Face::default(),
            progress: Timeline::new(REST_PROGRESS),
            rng,
            roll_count: 0,
        }
    }

    /// Play the squash-and-spin pulse and draw a new face.
    ///
    /// The face changes immediately; the pulse replaces any pulse still
    /// running at `now`.
    pub fn roll(&mut self, now: f64) -> Face {
        let interrupted = self.progress.start(
            vec![
                Phase::to(SQUASH_PROGRESS, ROLL_PHASE_DURATION),
                Phase::to(REST_PROGRESS, ROLL_PHASE_DURATION),
            ],
            now,
        );

        self.face = Face::from_unit(self.rng.gen::<f64>());
        self.roll_count += 1;

        debug!(
            face = self.face.value(),
            roll = self.roll_count,
            interrupted,
            "Rolled die"
        );
        self.face
    }

    pub fn face(&self) -> Face {
        self.face
    }

    /// Animation progress at `now`; settles the timeline once the pulse ends.
    pub fn progress(&mut self, now: f64) -> f32 {
        self.progress.settle(now)
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.progress.is_animating(now)
    }

    pub fn roll_count(&self) -> u64 {
        self.roll_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_initial_state_is_idle_on_face_one() {
        let mut ctl = RollController::with_rng(StdRng::seed_from_u64(7));
        assert_eq!(ctl.face(), Face::One);
        assert_eq!(ctl.progress(0.0), 1.0);
        assert!(!ctl.is_animating(0.0));
        assert_eq!(ctl.roll_count(), 0);
    }

    #[test]
    fn test_thousand_rolls_stay_in_range() {
        let mut ctl = RollController::with_rng(StdRng::seed_from_u64(42));
        let mut seen = HashSet::new();
        for i in 0..1000 {
            let face = ctl.roll(i as f64);
            assert!((1..=6).contains(&face.value()));
            assert_eq!(ctl.face(), face);
            seen.insert(face);
        }
        assert_eq!(seen.len(), 6);
        assert_eq!(ctl.roll_count(), 1000);
    }

    #[test]
    fn test_roll_uses_floor_of_scaled_sample() {
        // StepRng yields a constant u64; the top 53 bits become the f64 sample
        let cases = [(0u64, Face::One), (1u64 << 63, Face::Four), (u64::MAX, Face::Six)];
        for (raw, expected) in cases {
            let mut ctl = RollController::with_rng(StepRng::new(raw, 0));
            assert_eq!(ctl.roll(0.0), expected);
        }
    }

    #[test]
    fn test_repeated_face_is_allowed() {
        let mut ctl = RollController::with_rng(StepRng::new(0, 0));
        assert_eq!(ctl.roll(0.0), Face::One);
        assert_eq!(ctl.roll(1.0), Face::One);
    }

    #[test]
    fn test_roll_pulses_one_half_one() {
        let mut ctl = RollController::with_rng(StdRng::seed_from_u64(1));
        ctl.roll(0.0);
        assert!(ctl.is_animating(0.0));
        assert!(approx(ctl.progress(0.0), 1.0));
        assert!(approx(ctl.progress(0.15), 0.5));
        assert!(ctl.is_animating(0.2));
        assert!(approx(ctl.progress(0.3), 1.0));
        assert!(!ctl.is_animating(0.3));
    }

    #[test]
    fn test_face_updates_before_animation_finishes() {
        let mut ctl = RollController::with_rng(StepRng::new(u64::MAX, 0));
        ctl.roll(0.0);
        assert!(ctl.is_animating(0.01));
        assert_eq!(ctl.face(), Face::Six);
    }

    #[test]
    fn test_rapid_rolls_second_sequence_wins() {
        let mut ctl = RollController::with_rng(StdRng::seed_from_u64(3));
        ctl.roll(0.0);
        let _ = ctl.progress(0.05);
        ctl.roll(0.1);

        // First sequence would have ended at 0.3
        assert!(ctl.is_animating(0.35));
        assert!(approx(ctl.progress(0.25), 0.5));
        assert!(approx(ctl.progress(0.45), 1.0));
        assert!(!ctl.is_animating(0.45));
        assert_eq!(ctl.roll_count(), 2);
    }
}
