//! Common types and data structures

use std::fmt;

/// One of the six faces of the die
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Face {
    #[default]
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::One,
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
    ];

    /// Pip count shown on this face (1-6)
    pub fn value(self) -> u8 {
        match self {
            Face::One => 1,
            Face::Two => 2,
            Face::Three => 3,
            Face::Four => 4,
            Face::Five => 5,
            Face::Six => 6,
        }
    }

    /// Map a uniform sample in [0, 1) to a face: `floor(r * 6) + 1`.
    /// Samples outside the range are clamped to the nearest face.
    pub fn from_unit(r: f64) -> Face {
        let idx = (r * Self::ALL.len() as f64).floor();
        let idx = if idx.is_nan() { 0.0 } else { idx.clamp(0.0, 5.0) };
        Self::ALL[idx as usize]
    }

    /// Index into per-face tables (0-5)
    pub fn index(self) -> usize {
        self.value() as usize - 1
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
