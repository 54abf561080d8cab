//! Pressure loads on plates

mod plate_load;

pub use plate_load::UniformPressure;

use crate::math::Vec3;

/// A scalar surface pressure field, positive in the deflection direction
pub trait PressureField: Send + Sync {
    /// Pressure at `x`
    fn value(&self, x: &Vec3) -> f64;
}

impl<F> PressureField for F
where
    F: Fn(&Vec3) -> f64 + Send + Sync,
{
    fn value(&self, x: &Vec3) -> f64 {
        self(x)
    }
}
