//! Beam element - 2-node Hermite cubic Euler-Bernoulli beam
//!
//! Nodal unknowns are `[w, r]` at each end, with `r = dw/dx`.

use serde::{Deserialize, Serialize};

use crate::error::PlateResult;
use crate::integrand::IntegrationPoint;
use crate::math::gauss::gauss_1d;
use crate::math::{Mat2, Vec as FEVec, Vec3};

/// A straight beam along the x-axis
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HermiteBeam {
    /// x-coordinate of the i-node (start)
    pub x0: f64,
    /// Beam length
    pub length: f64,
}

impl HermiteBeam {
    pub fn new(x0: f64, length: f64) -> Self {
        Self { x0, length }
    }

    /// Node coordinates [i, j]
    pub fn nodes(&self) -> [Vec3; 2] {
        [self.position(-1.0), self.position(1.0)]
    }

    /// Cartesian coordinates of the natural point `xi`
    pub fn position(&self, xi: f64) -> Vec3 {
        Vec3::new(self.x0 + 0.5 * self.length * (1.0 + xi), 0.0, 0.0)
    }

    /// Evaluates the basis at the natural point `xi`
    pub fn point(&self, xi: f64, weight: f64, ip: usize) -> IntegrationPoint {
        let h = 0.5 * self.length;
        let curvatures = [
            1.5 * xi / (h * h),
            (3.0 * xi - 1.0) / (2.0 * h),
            -1.5 * xi / (h * h),
            (3.0 * xi + 1.0) / (2.0 * h),
        ];

        IntegrationPoint {
            x: self.position(xi),
            n: FEVec::from_vec(vec![0.5 * (1.0 - xi), 0.5 * (1.0 + xi)]),
            d2ndx2: curvatures
                .iter()
                .map(|&c| Mat2::new(c, 0.0, 0.0, 0.0))
                .collect(),
            det_jxw: h * weight,
            ip,
        }
    }

    /// All points of an `ng`-point Gauss rule, numbered from `first_ip`
    pub fn gauss_points(&self, ng: usize, first_ip: usize) -> PlateResult<Vec<IntegrationPoint>> {
        Ok(gauss_1d(ng)?
            .into_iter()
            .enumerate()
            .map(|(k, (xi, w))| self.point(xi, w, first_ip + k))
            .collect())
    }

    /// Nodal interpolant of a deflection field returning `(w, dw/dx)`
    pub fn interpolant<F>(&self, field: F) -> FEVec
    where
        F: Fn(&Vec3) -> (f64, f64),
    {
        let mut ev = FEVec::zeros(4);
        for (i, x) in self.nodes().iter().enumerate() {
            let (w, w_x) = field(x);
            ev[2 * i] = w;
            ev[2 * i + 1] = w_x;
        }
        ev
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cubic_curvature_is_exact() {
        // w = x³, w'' = 6x
        let beam = HermiteBeam::new(1.0, 2.0);
        let ev = beam.interpolant(|x| (x[0].powi(3), 3.0 * x[0] * x[0]));
        for xi in [-1.0, -0.3, 0.5, 1.0] {
            let p = beam.point(xi, 1.0, 0);
            let w_xx: f64 = p.d2ndx2.iter().zip(ev.iter()).map(|(h, u)| h[(0, 0)] * u).sum();
            assert_relative_eq!(w_xx, 6.0 * p.x[0], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_gauss_points_cover_length() {
        let beam = HermiteBeam::new(0.0, 3.0);
        let len: f64 = beam.gauss_points(3, 0).unwrap().iter().map(|p| p.det_jxw).sum();
        assert_relative_eq!(len, 3.0, epsilon = 1e-14);
    }
}
