//! Application constants and configuration

use std::time::Duration;

pub const APP_NAME: &str = "Dice Roller";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Length of each half of the roll pulse (squash, then spring back)
pub const ROLL_PHASE_DURATION: Duration = Duration::from_millis(150);

/// Progress value the pulse squashes down to before springing back
pub const SQUASH_PROGRESS: f32 = 0.5;

/// Progress value of a die at rest
pub const REST_PROGRESS: f32 = 1.0;

/// Rotation in degrees at progress 1.0 (two full turns)
pub const FULL_SPIN_DEGREES: f32 = 720.0;
