//! Rectangle element - Adini (ACM) 12-DOF thin plate rectangle
//!
//! Nodal unknowns are `[w, rx, ry]` at each of the 4 corners, with
//! `rx = dw/dy` and `ry = -dw/dx`. The deflection is interpolated by the
//! 12-term polynomial (complete cubic plus x³y and xy³), which gives the
//! second derivatives the Kirchhoff-Love integrand needs. Basis values
//! reported for mass and load terms are the bilinear corner functions.

use serde::{Deserialize, Serialize};

use crate::error::PlateResult;
use crate::integrand::IntegrationPoint;
use crate::math::gauss::gauss_quad;
use crate::math::{Mat2, Vec as FEVec, Vec3};

/// Natural coordinates of the corners, counter-clockwise from the i-node
const CORNERS: [(f64, f64); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

/// An axis-aligned rectangular plate element
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rectangle {
    /// x-coordinate of the i-node (lower left corner)
    pub x0: f64,
    /// y-coordinate of the i-node (lower left corner)
    pub y0: f64,
    /// Width (i to j distance)
    pub width: f64,
    /// Height (j to m distance)
    pub height: f64,
}

impl Rectangle {
    /// Create a new rectangle with its lower left corner at `(x0, y0)`
    pub fn new(x0: f64, y0: f64, width: f64, height: f64) -> Self {
        Self {
            x0,
            y0,
            width,
            height,
        }
    }

    /// The unit square with its lower left corner at the origin
    pub fn unit() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Element area
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Corner coordinates [i, j, m, n]
    pub fn nodes(&self) -> [Vec3; 4] {
        CORNERS.map(|(s, t)| self.position(s, t))
    }

    /// Cartesian coordinates of the natural point `(xi, eta)`
    pub fn position(&self, xi: f64, eta: f64) -> Vec3 {
        Vec3::new(
            self.x0 + 0.5 * self.width * (1.0 + xi),
            self.y0 + 0.5 * self.height * (1.0 + eta),
            0.0,
        )
    }

    /// Evaluates the basis at the natural point `(xi, eta)`
    ///
    /// # Arguments
    /// * `weight` - Quadrature weight on the reference square
    /// * `ip` - Global integration point counter
    pub fn point(&self, xi: f64, eta: f64, weight: f64, ip: usize) -> IntegrationPoint {
        let a = 0.5 * self.width;
        let b = 0.5 * self.height;

        let mut n = FEVec::zeros(4);
        let mut d2ndx2 = Vec::with_capacity(12);

        for (i, &(si, ti)) in CORNERS.iter().enumerate() {
            let u = si * xi;
            let v = ti * eta;
            n[i] = 0.25 * (1.0 + u) * (1.0 + v);

            // Deflection function
            let w_xx = -0.75 * u * (1.0 + v);
            let w_yy = -0.75 * v * (1.0 + u);
            let w_xy = si * ti * (4.0 - 3.0 * u * u - 3.0 * v * v) / 8.0;
            d2ndx2.push(Mat2::new(
                w_xx / (a * a),
                w_xy / (a * b),
                w_xy / (a * b),
                w_yy / (b * b),
            ));

            // Rotation about x, i.e. b times the function of (dw/deta)_i
            let r_yy = ti * hermite_dd(v) * (1.0 + u) / 8.0;
            let r_xy = si * hermite_d(v) / 8.0;
            d2ndx2.push(Mat2::new(0.0, r_xy / a, r_xy / a, r_yy / b));

            // Rotation about y, i.e. -a times the function of (dw/dxi)_i
            let r_xx = si * hermite_dd(u) * (1.0 + v) / 8.0;
            let r_xy = ti * hermite_d(u) / 8.0;
            d2ndx2.push(Mat2::new(-r_xx / a, -r_xy / b, -r_xy / b, 0.0));
        }

        IntegrationPoint {
            x: self.position(xi, eta),
            n,
            d2ndx2,
            det_jxw: a * b * weight,
            ip,
        }
    }

    /// All points of an `ng x ng` Gauss rule, numbered from `first_ip`
    pub fn gauss_points(&self, ng: usize, first_ip: usize) -> PlateResult<Vec<IntegrationPoint>> {
        Ok(gauss_quad(ng)?
            .into_iter()
            .enumerate()
            .map(|(k, ([xi, eta], w))| self.point(xi, eta, w, first_ip + k))
            .collect())
    }

    /// Nodal interpolant of a deflection field.
    ///
    /// `field` returns `(w, dw/dx, dw/dy)` at a point; the result is the
    /// 12-component element vector `[w, rx, ry]` per node.
    pub fn interpolant<F>(&self, field: F) -> FEVec
    where
        F: Fn(&Vec3) -> (f64, f64, f64),
    {
        let mut ev = FEVec::zeros(12);
        for (i, x) in self.nodes().iter().enumerate() {
            let (w, w_x, w_y) = field(x);
            ev[3 * i] = w;
            ev[3 * i + 1] = w_y;
            ev[3 * i + 2] = -w_x;
        }
        ev
    }
}

/// First derivative of (u+1)²(u-1)
fn hermite_d(u: f64) -> f64 {
    3.0 * u * u + 2.0 * u - 1.0
}

/// Second derivative of (u+1)²(u-1)
fn hermite_dd(u: f64) -> f64 {
    6.0 * u + 2.0
}
