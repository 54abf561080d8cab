//! Uniform plate pressure

use serde::{Deserialize, Serialize};

use super::PressureField;
use crate::math::Vec3;

/// A uniform surface pressure on a plate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformPressure {
    /// Pressure magnitude (positive = in the positive deflection direction)
    pub pressure: f64,
}

impl UniformPressure {
    /// Create a new pressure load
    pub fn new(pressure: f64) -> Self {
        Self { pressure }
    }

    /// Create a downward pressure (for horizontal plates)
    pub fn downward(pressure: f64) -> Self {
        Self::new(-pressure.abs())
    }

    /// Create an upward pressure (for horizontal plates)
    pub fn upward(pressure: f64) -> Self {
        Self::new(pressure.abs())
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.pressure * factor)
    }
}

impl PressureField for UniformPressure {
    fn value(&self, _x: &Vec3) -> f64 {
        self.pressure
    }
}
