//! Integrand interfaces and the per-element data they operate on
//!
//! An integrand defines what is computed at each integration point of an
//! element. The caller (the assembly loop) owns the quadrature, the basis
//! function evaluation and the element accumulators; the integrand only adds
//! its point contributions into the accumulator it is handed.

pub mod norm;
pub mod plate;

use std::ops::BitOr;

use crate::analysis::TimeDomain;
use crate::error::PlateResult;
use crate::math::{Mat, Mat2, Vec as FEVec, Vec3};

pub use norm::KirchhoffLovePlateNorm;
pub use plate::KirchhoffLovePlate;

/// Flags telling the caller which finite element quantities to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntegrandType(u8);

impl IntegrandType {
    /// Basis function values and first derivatives only
    pub const STANDARD: Self = Self(0);
    /// Basis function second derivatives are required
    pub const SECOND_DERIVATIVES: Self = Self(1);
    /// The element solution vector must be available at each point
    pub const ELEMENT_SOLUTION: Self = Self(2);
    /// Integration point coordinates must be evaluated
    pub const POINT_COORDINATES: Self = Self(4);

    /// Whether all flags of `other` are set
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for IntegrandType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Finite element data at one integration point
#[derive(Debug, Clone)]
pub struct IntegrationPoint {
    /// Cartesian coordinates of the point
    pub x: Vec3,
    /// Basis function values, one per element node
    pub n: FEVec,
    /// Second derivatives of the basis functions w.r.t. physical
    /// coordinates, one Hessian per element unknown (node-major)
    pub d2ndx2: Vec<Mat2>,
    /// Jacobian determinant times integration point weight
    pub det_jxw: f64,
    /// Global integration point counter, unique over the whole model
    pub ip: usize,
}

impl IntegrationPoint {
    /// Number of element nodes
    pub fn nen(&self) -> usize {
        self.n.len()
    }

    /// Set the global integration point counter
    pub fn with_index(mut self, ip: usize) -> Self {
        self.ip = ip;
        self
    }
}

/// Element matrices and vectors addressed by 1-based slot handles
#[derive(Debug, Clone, Default)]
pub struct ElementMatrices {
    /// Element matrices (stiffness, mass, ...)
    pub a: Vec<Mat>,
    /// Element vectors (loads, ...)
    pub b: Vec<FEVec>,
}

impl ElementMatrices {
    /// Create `nmat` zero matrices and `nvec` zero vectors of size `ndof`
    pub fn new(nmat: usize, nvec: usize, ndof: usize) -> Self {
        Self {
            a: vec![Mat::zeros(ndof, ndof); nmat],
            b: vec![FEVec::zeros(ndof); nvec],
        }
    }

    /// Element matrix for a 1-based handle (`None` for handle 0)
    pub fn matrix(&self, handle: u16) -> Option<&Mat> {
        handle.checked_sub(1).and_then(|i| self.a.get(i as usize))
    }

    /// Mutable element matrix for a 1-based handle
    pub fn matrix_mut(&mut self, handle: u16) -> Option<&mut Mat> {
        handle.checked_sub(1).and_then(|i| self.a.get_mut(i as usize))
    }

    /// Element vector for a 1-based handle (`None` for handle 0)
    pub fn vector(&self, handle: u16) -> Option<&FEVec> {
        handle.checked_sub(1).and_then(|i| self.b.get(i as usize))
    }

    /// Mutable element vector for a 1-based handle
    pub fn vector_mut(&mut self, handle: u16) -> Option<&mut FEVec> {
        handle.checked_sub(1).and_then(|i| self.b.get_mut(i as usize))
    }
}

/// Element norm accumulator
///
/// Holds the element solution vector the norms are evaluated for, and
/// optionally a recovered (projected) stress resultant field given as
/// nodal values, used as the a posteriori error estimate.
#[derive(Debug, Clone)]
pub struct ElementNorm {
    /// Norm quantities, in the order of the norm integrand's name table
    pub values: Vec<f64>,
    /// Element solution vector
    pub solution: FEVec,
    /// Recovered resultants, `ncmp x nen`
    pub projection: Option<Mat>,
    /// Squared estimated error norm
    pub estimate: f64,
}

impl ElementNorm {
    pub fn new(num_values: usize, solution: FEVec) -> Self {
        Self {
            values: vec![0.0; num_values],
            solution,
            projection: None,
            estimate: 0.0,
        }
    }

    /// Attach recovered nodal stress resultants
    pub fn with_projection(mut self, projection: Mat) -> Self {
        self.projection = Some(projection);
        self
    }
}

/// Interface of all integrands.
///
/// All evaluation methods take `&self`: the configuration is set up before
/// the assembly starts and is only read while elements are integrated,
/// possibly by several threads at once.
pub trait Integrand: Send + Sync {
    /// Per-element accumulator type
    type Local: Send;

    /// Defines which finite element quantities are needed
    fn integrand_type(&self) -> IntegrandType;

    /// Returns a new accumulator for an element with `nen` nodes
    fn local_integral(&self, nen: usize, neumann: bool) -> Self::Local;

    /// Evaluates the integrand at an interior point
    fn eval_int(&self, elm: &mut Self::Local, fe: &IntegrationPoint) -> PlateResult<()>;

    /// Evaluates the integrand at a boundary point
    fn eval_bou(
        &self,
        _elm: &mut Self::Local,
        _fe: &IntegrationPoint,
        _normal: &Vec3,
    ) -> PlateResult<()> {
        Ok(())
    }

    /// Finalizes the element quantities after the numerical integration
    fn finalize_element(&self, _elm: &mut Self::Local, _time: &TimeDomain) -> PlateResult<()> {
        Ok(())
    }

    /// Whether the integrand has explicit boundary contributions
    fn has_boundary_terms(&self) -> bool {
        false
    }

    /// Number of field components (integrand specific meaning of `which`)
    fn no_fields(&self, which: usize) -> usize;
}

/// Interface of norm integrands
pub trait NormIntegrand: Integrand<Local = ElementNorm> {
    /// Name of norm `field` in `group` (both 1-based), decorated by `prefix`
    fn name(&self, group: usize, field: usize, prefix: Option<&str>) -> String;

    /// Returns a new norm accumulator for the given element solution
    fn element_norm(&self, solution: FEVec) -> ElementNorm;
}

/// Prepends `prefix` to `name`, separated by a space
pub(crate) fn decorate(name: &str, prefix: Option<&str>) -> String {
    match prefix {
        Some(p) if !p.is_empty() => format!("{p} {name}"),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrand_type_flags() {
        let t = IntegrandType::SECOND_DERIVATIVES | IntegrandType::ELEMENT_SOLUTION;
        assert!(t.contains(IntegrandType::SECOND_DERIVATIVES));
        assert!(t.contains(IntegrandType::ELEMENT_SOLUTION));
        assert!(!t.contains(IntegrandType::POINT_COORDINATES));
        assert!(t.contains(IntegrandType::STANDARD));
    }

    #[test]
    fn test_slot_handles_are_one_based() {
        let mut em = ElementMatrices::new(2, 1, 6);
        assert!(em.matrix(0).is_none());
        assert!(em.matrix(3).is_none());
        assert_eq!(em.matrix(2).map(|m| m.shape()), Some((6, 6)));
        em.vector_mut(1).unwrap()[4] = 2.0;
        assert_eq!(em.vector(1).unwrap()[4], 2.0);
        assert!(em.vector_mut(0).is_none());
    }

    #[test]
    fn test_decorate() {
        assert_eq!(decorate("w", None), "w");
        assert_eq!(decorate("w", Some("")), "w");
        assert_eq!(decorate("M_xx", Some("FE")), "FE M_xx");
    }
}
