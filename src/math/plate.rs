//! Plate bending kernels shared by the integrands
//!
//! Sign conventions:
//! - curvatures are `[kappa_xx, kappa_yy, kappa_xy] = -[w,xx, w,yy, 2 w,xy]`,
//!   so the stress resultants `[M_xx, M_yy, M_xy] = D * kappa` come out with
//!   the classical Kirchhoff signs
//! - element vectors are node-major with `npv` unknowns per node, the
//!   deflection `w` being the first one

use nalgebra::DVector;

use super::{Mat, Mat2, Mat3};
use crate::error::{PlateError, PlateResult};

/// Compute the plane stress constitutive matrix [C] (orthotropic)
///
/// # Arguments
/// * `e` - Modulus of elasticity
/// * `nu` - Poisson's ratio
/// * `kx_mod` - Stiffness modifier in local x direction (1.0 = isotropic)
/// * `ky_mod` - Stiffness modifier in local y direction (1.0 = isotropic)
pub fn plane_stress_matrix(e: f64, nu: f64, kx_mod: f64, ky_mod: f64) -> Mat3 {
    let ex = e * kx_mod;
    let ey = e * ky_mod;
    let nu_xy = nu;
    let nu_yx = nu * ey / ex;
    let g = e / (2.0 * (1.0 + nu));

    let denom = 1.0 - nu_xy * nu_yx;

    Mat3::new(
        ex / denom,          nu_xy * ey / denom,  0.0,
        nu_xy * ey / denom,  ey / denom,          0.0,
        0.0,                 0.0,                 g,
    )
}

/// Compute the plane stress compliance matrix, the inverse of
/// [`plane_stress_matrix`] in closed form
pub fn plane_stress_compliance(e: f64, nu: f64, kx_mod: f64, ky_mod: f64) -> Mat3 {
    let ex = e * kx_mod;
    let ey = e * ky_mod;
    let g = e / (2.0 * (1.0 + nu));

    Mat3::new(
        1.0 / ex,   -nu / ex,  0.0,
        -nu / ex,   1.0 / ey,  0.0,
        0.0,        0.0,       1.0 / g,
    )
}

/// Compute the curvature-displacement matrix [B]
///
/// # Arguments
/// * `d2ndx2` - Second derivatives of the basis functions, one 2x2 Hessian
///   per element unknown (only the (0,0) entry is used when `nsd == 1`)
/// * `nsd` - Number of space dimensions (1 = beam, 2 = plate)
/// * `ndof` - Expected number of element unknowns
///
/// # Returns
/// `ncmp x ndof` matrix, `ncmp` being 1 for beams and 3 for plates
pub fn curvature_matrix(d2ndx2: &[Mat2], nsd: usize, ndof: usize) -> PlateResult<Mat> {
    if d2ndx2.len() != ndof {
        return Err(PlateError::DegenerateGeometry(format!(
            "expected {} basis function second derivatives, got {}",
            ndof,
            d2ndx2.len()
        )));
    }

    let mut bmat = match nsd {
        1 => Mat::zeros(1, ndof),
        2 => Mat::zeros(3, ndof),
        _ => {
            return Err(PlateError::Configuration(format!(
                "invalid number of space dimensions {nsd}"
            )))
        }
    };

    for (j, h) in d2ndx2.iter().enumerate() {
        if !h.iter().all(|v| v.is_finite()) {
            return Err(PlateError::DegenerateGeometry(format!(
                "non-finite second derivatives for basis function {}",
                j + 1
            )));
        }
        bmat[(0, j)] = -h[(0, 0)];
        if nsd == 2 {
            bmat[(1, j)] = -h[(1, 1)];
            bmat[(2, j)] = -(h[(0, 1)] + h[(1, 0)]);
        }
    }

    if bmat.iter().all(|v| *v == 0.0) {
        return Err(PlateError::DegenerateGeometry(
            "all basis function second derivatives vanish".to_string(),
        ));
    }

    Ok(bmat)
}

/// Adds `scale * B^T * D * B` to the element matrix `em`.
///
/// `D` must be symmetric; only the upper triangle is computed and then
/// mirrored.
pub fn add_btdb(em: &mut Mat, bmat: &Mat, dmat: &Mat, scale: f64) {
    let db = dmat * bmat;
    let n = bmat.ncols();
    for i in 0..n {
        let bi = bmat.column(i);
        for j in i..n {
            let v = scale * bi.dot(&db.column(j));
            em[(i, j)] += v;
            if i != j {
                em[(j, i)] += v;
            }
        }
    }
}

/// Adds `scale * N^T * N` to the `dof`-th unknown of each node.
pub fn add_nn(em: &mut Mat, n: &DVector<f64>, npv: usize, dof: usize, scale: f64) {
    for (a, na) in n.iter().enumerate() {
        for (b, nb) in n.iter().enumerate() {
            em[(npv * a + dof, npv * b + dof)] += scale * na * nb;
        }
    }
}

/// Adds `scale * N` to the `dof`-th unknown of each node.
pub fn add_n(es: &mut DVector<f64>, n: &DVector<f64>, npv: usize, dof: usize, scale: f64) {
    for (a, na) in n.iter().enumerate() {
        es[npv * a + dof] += scale * na;
    }
}

/// Transformation of `[M_xx, M_yy, M_xy]` into axes rotated by `angle`
/// (radians, counter-clockwise) about the plate normal
pub fn resultant_rotation(angle: f64) -> Mat3 {
    let c = angle.cos();
    let s = angle.sin();

    Mat3::new(
        c * c,   s * s,   2.0 * c * s,
        s * s,   c * c,   -2.0 * c * s,
        -c * s,  c * s,   c * c - s * s,
    )
}
