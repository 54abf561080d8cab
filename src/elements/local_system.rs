//! Local coordinate systems for stress resultant output

use serde::{Deserialize, Serialize};

use crate::math::{resultant_rotation, Mat3, Vec3};

/// A local coordinate system, given as the transformation of the
/// resultant vector `[M_xx, M_yy, M_xy]` from global to local axes
pub trait LocalSystem: Send + Sync {
    /// The 3x3 transformation matrix at `x`
    fn transform(&self, x: &Vec3) -> Mat3;
}

/// Local axes rotated by a fixed angle about the plate normal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AngleSystem {
    /// Rotation angle in radians, counter-clockwise from the global x-axis
    pub angle: f64,
}

impl AngleSystem {
    pub fn new(angle: f64) -> Self {
        Self { angle }
    }

    /// Create from an angle in degrees
    pub fn degrees(angle: f64) -> Self {
        Self::new(angle.to_radians())
    }
}

impl LocalSystem for AngleSystem {
    fn transform(&self, _x: &Vec3) -> Mat3 {
        resultant_rotation(self.angle)
    }
}

/// Radial/tangential axes about a centre point.
///
/// The local x-axis points away from the centre, so the output is
/// `[M_rr, M_tt, M_rt]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PolarSystem {
    /// Centre x-coordinate
    pub xc: f64,
    /// Centre y-coordinate
    pub yc: f64,
}

impl PolarSystem {
    pub fn new(xc: f64, yc: f64) -> Self {
        Self { xc, yc }
    }
}

impl LocalSystem for PolarSystem {
    fn transform(&self, x: &Vec3) -> Mat3 {
        let dx = x[0] - self.xc;
        let dy = x[1] - self.yc;
        // At the centre itself any direction will do
        let angle = if dx.abs() < 1e-14 && dy.abs() < 1e-14 {
            0.0
        } else {
            dy.atan2(dx)
        };
        resultant_rotation(angle)
    }
}
