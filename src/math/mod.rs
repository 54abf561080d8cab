//! Mathematical utilities for plate integrand calculations

pub mod gauss;
pub mod plate;

use nalgebra::{DMatrix, DVector, Matrix2, Matrix3, Vector3};

use crate::error::{PlateError, PlateResult};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;
pub type Mat2 = Matrix2<f64>;
pub type Mat3 = Matrix3<f64>;
pub type Vec3 = Vector3<f64>;

// Re-export plate kernels
pub use plate::{
    add_btdb, add_nn, add_n, curvature_matrix, plane_stress_compliance, plane_stress_matrix,
    resultant_rotation,
};

/// Extracts the element vector from a global nodal vector.
///
/// # Arguments
/// * `global` - Global vector with `npv` consecutive values per node
/// * `mnpc` - Element-to-global node numbers (0-based)
/// * `npv` - Number of values per node
pub fn gather(global: &Vec, mnpc: &[usize], npv: usize) -> PlateResult<Vec> {
    let num_nodes = global.len() / npv.max(1);
    let mut ev = Vec::zeros(mnpc.len() * npv);
    for (a, &node) in mnpc.iter().enumerate() {
        if node >= num_nodes {
            return Err(PlateError::IndexOutOfRange {
                index: node,
                size: num_nodes,
            });
        }
        for k in 0..npv {
            ev[npv * a + k] = global[npv * node + k];
        }
    }
    Ok(ev)
}
