//! Analytical reference solutions for norm evaluation

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::loads::PressureField;
use crate::math::Vec3;

/// An analytical stress resultant field `[M_xx, M_yy, M_xy]`.
///
/// Beam problems only use the first component.
pub trait AnalyticalField: Send + Sync {
    /// Stress resultants at `x`
    fn value(&self, x: &Vec3) -> Vec3;
}

impl<F> AnalyticalField for F
where
    F: Fn(&Vec3) -> Vec3 + Send + Sync,
{
    fn value(&self, x: &Vec3) -> Vec3 {
        self(x)
    }
}

/// Navier solution of a simply supported rectangular plate
/// `[0, a] x [0, b]` loaded by `q0 sin(pi x/a) sin(pi y/b)`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NavierPlate {
    /// Plate length in x direction
    pub a: f64,
    /// Plate length in y direction
    pub b: f64,
    /// Load amplitude
    pub q0: f64,
    /// Flexural rigidity E t³ / (12 (1 - nu²))
    pub rigidity: f64,
    /// Poisson's ratio
    pub nu: f64,
}

impl NavierPlate {
    pub fn new(a: f64, b: f64, q0: f64, rigidity: f64, nu: f64) -> Self {
        Self {
            a,
            b,
            q0,
            rigidity,
            nu,
        }
    }

    /// Midpoint deflection amplitude
    pub fn amplitude(&self) -> f64 {
        let k2 = (1.0 / (self.a * self.a) + 1.0 / (self.b * self.b)) * PI * PI;
        self.q0 / (self.rigidity * k2 * k2)
    }

    /// Deflection and its gradient `(w, dw/dx, dw/dy)` at `x`
    pub fn deflection(&self, x: &Vec3) -> (f64, f64, f64) {
        let (sx, cx, sy, cy, pa, pb) = self.trig(x);
        let w0 = self.amplitude();
        (w0 * sx * sy, w0 * pa * cx * sy, w0 * pb * sx * cy)
    }

    fn trig(&self, x: &Vec3) -> (f64, f64, f64, f64, f64, f64) {
        let pa = PI / self.a;
        let pb = PI / self.b;
        let (sx, cx) = (pa * x[0]).sin_cos();
        let (sy, cy) = (pb * x[1]).sin_cos();
        (sx, cx, sy, cy, pa, pb)
    }
}

impl PressureField for NavierPlate {
    fn value(&self, x: &Vec3) -> f64 {
        let (sx, _, sy, _, _, _) = self.trig(x);
        self.q0 * sx * sy
    }
}

impl AnalyticalField for NavierPlate {
    fn value(&self, x: &Vec3) -> Vec3 {
        let (sx, cx, sy, cy, pa, pb) = self.trig(x);
        let dw0 = self.rigidity * self.amplitude();
        Vec3::new(
            dw0 * (pa * pa + self.nu * pb * pb) * sx * sy,
            dw0 * (self.nu * pa * pa + pb * pb) * sx * sy,
            -dw0 * (1.0 - self.nu) * pa * pb * cx * cy,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_navier_satisfies_plate_equation_at_centre() {
        // D (w,xxxx + 2 w,xxyy + w,yyyy) = q
        let plate = NavierPlate::new(2.0, 1.0, 1000.0, 1500.0, 0.3);
        let x = Vec3::new(1.0, 0.5, 0.0);
        let (w, _, _) = plate.deflection(&x);
        let k2 = (PI / 2.0).powi(2) + PI.powi(2);
        let lhs = plate.rigidity * k2 * k2 * w;
        assert_relative_eq!(lhs, PressureField::value(&plate, &x), max_relative = 1e-12);
    }

    #[test]
    fn test_navier_moments_vanish_on_edges() {
        let plate = NavierPlate::new(1.0, 1.0, 1.0, 1.0, 0.3);
        let m = AnalyticalField::value(&plate, &Vec3::new(0.0, 0.4, 0.0));
        assert_relative_eq!(m[0], 0.0, epsilon = 1e-14);
        assert_relative_eq!(m[1], 0.0, epsilon = 1e-14);
        // twisting moment is largest at the corners
        let corner = AnalyticalField::value(&plate, &Vec3::new(0.0, 0.0, 0.0));
        assert!(corner[2].abs() > 0.0);
    }
}
