//! Wheel geometry.
//!
//! Angles are degrees. A wheel rotation is the accumulated, unbounded angle
//! the wheel has turned clockwise since the game started. Segment centers sit
//! at `segment * 90` relative to the top of the wheel; the pointer is fixed
//! `pointer_offset` degrees clockwise from the top.
use protocol::Color;
use rand::Rng;

use crate::consts::SEGMENT_ARC;

/// Reduce any angle into `[0, 360)`.
pub fn normalize(angle: f64) -> f64 {
    let r = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest distance between two angles, in `[0, 180]`.
pub fn separation(a: f64, b: f64) -> f64 {
    let d = normalize(a - b);
    d.min(360.0 - d)
}

pub fn segment_center(color: Color) -> f64 {
    color.segment() as f64 * SEGMENT_ARC
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub target: Color,
    pub revolutions: u32,
    pub from: f64,
    /// Extra turn past the full revolutions that aligns the target.
    pub align: f64,
    pub to: f64,
}

impl SpinPlan {
    pub fn total(&self) -> f64 {
        self.to - self.from
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    pub color: Color,
    pub rotation: f64,
    pub snapped: bool,
}

#[derive(Debug, Clone)]
pub struct Wheel {
    pub pointer_offset: f64,
    pub min_spins: u32,
    pub max_spins: u32,
    pub snap_tolerance: f64,
}

impl Wheel {
    /// Normalized rotation at which `color`'s center rests under the pointer.
    fn resting_angle(&self, color: Color) -> f64 {
        normalize(360.0 - (segment_center(color) + self.pointer_offset))
    }

    /// Wheel angle currently under the pointer.
    pub fn pointer_angle(&self, rotation: f64) -> f64 {
        let from_top = normalize(360.0 - normalize(rotation));
        normalize(from_top - self.pointer_offset)
    }

    pub fn compute_spin(&self, current: f64, target: Color, revolutions: u32) -> SpinPlan {
        let align = normalize(self.resting_angle(target) - normalize(current));
        SpinPlan {
            target,
            revolutions,
            from: current,
            align,
            to: current + 360.0 * revolutions as f64 + align,
        }
    }

    /// Random target, random whole number of revolutions.
    pub fn spin<R: Rng>(&self, rng: &mut R, current: f64) -> SpinPlan {
        let target = Color::ALL[rng.gen_range(0..Color::ALL.len())];
        let revolutions = rng.gen_range(self.min_spins..=self.max_spins);
        self.compute_spin(current, target, revolutions)
    }

    /// Find the segment under the pointer once the wheel stops at `rotation`,
    /// snapping forward to its center when the drift exceeds the tolerance.
    /// The returned rotation is never below `rotation`.
    pub fn settle(&self, rotation: f64) -> Landing {
        let pointer = self.pointer_angle(rotation);
        let segment = (pointer / SEGMENT_ARC).round() as usize % Color::ALL.len();
        let color = Color::from_segment(segment);

        let correction = normalize(self.resting_angle(color) - normalize(rotation));
        if correction.min(360.0 - correction) <= self.snap_tolerance {
            return Landing { color, rotation, snapped: false };
        }
        Landing { color, rotation: rotation + correction, snapped: true }
    }
}
