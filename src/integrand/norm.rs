//! Energy norms of Kirchhoff-Love plate solutions
//!
//! All energy quantities are accumulated squared over the integration
//! points, so element contributions can simply be summed into global norms.

use crate::analysis::TimeDomain;
use crate::analytical::AnalyticalField;
use crate::error::{PlateError, PlateResult};
use crate::math::{Mat, Vec as FEVec, Vec3};

use super::{
    decorate, ElementNorm, Integrand, IntegrandType, IntegrationPoint, KirchhoffLovePlate,
    NormIntegrand,
};

/// Index of the squared finite element energy norm
pub const FE_ENERGY: usize = 0;
/// Index of the external energy (work of pressure and gravity)
pub const EXTERNAL_ENERGY: usize = 1;
/// Index of the squared analytical energy norm
pub const EXACT_ENERGY: usize = 2;
/// Index of the squared energy norm of the error
pub const ERROR_ENERGY: usize = 3;
/// Index of the relative error in percent
pub const RELATIVE_ERROR: usize = 4;
/// Index of the effectivity index
pub const EFFECTIVITY: usize = 5;

/// Relative magnitude below which a squared norm counts as zero
pub const NORM_TOL: f64 = 1.0e-16;

const NORM_NAMES: [&str; 6] = [
    "a(w^h,w^h)^0.5",
    "(q,w^h)^0.5",
    "a(w,w)^0.5",
    "a(e,e)^0.5, e=w-w^h",
    "a(e,e)^0.5/a(w,w)^0.5 [%]",
    "effectivity index",
];

fn is_negligible(value: f64, scale: f64) -> bool {
    scale <= 0.0 || value.abs() <= NORM_TOL * scale
}

/// Relative error `100 sqrt(err²/exact²)` in percent, zero if either the
/// exact norm or the error vanishes. `scale` is the magnitude used to judge
/// what vanishes.
pub fn relative_error(error2: f64, exact2: f64, scale: f64) -> f64 {
    if is_negligible(exact2, scale) || is_negligible(error2, scale) {
        0.0
    } else {
        100.0 * (error2 / exact2).sqrt()
    }
}

/// Effectivity index `sqrt(est²/err²)`.
///
/// Returns 1 if both the exact and the estimated error vanish, and 0 if
/// only the exact error does.
pub fn effectivity(error2: f64, estimate2: f64, scale: f64) -> f64 {
    match (is_negligible(error2, scale), is_negligible(estimate2, scale)) {
        (true, true) => 1.0,
        (true, false) => 0.0,
        _ => (estimate2 / error2).sqrt(),
    }
}

/// Norm integrand bound to a [`KirchhoffLovePlate`] problem.
///
/// Without an analytical field only the finite element energy norm and the
/// external energy are computed.
pub struct KirchhoffLovePlateNorm<'a> {
    plate: &'a KirchhoffLovePlate<'a>,
    anasol: Option<&'a dyn AnalyticalField>,
}

impl<'a> KirchhoffLovePlateNorm<'a> {
    /// # Arguments
    /// * `plate` - The plate problem to evaluate norms for
    /// * `anasol` - Analytical stress resultant field (optional)
    pub fn new(plate: &'a KirchhoffLovePlate<'a>, anasol: Option<&'a dyn AnalyticalField>) -> Self {
        Self { plate, anasol }
    }

    /// Number of norm quantities in the (single) norm group
    pub fn num_norms(&self) -> usize {
        if self.anasol.is_some() {
            NORM_NAMES.len()
        } else {
            2
        }
    }

    fn ncmp(&self) -> usize {
        self.plate.config().num_resultants()
    }

    /// Energy density `s^T D^-1 s`
    fn energy(dinv: &Mat, s: &FEVec) -> f64 {
        s.dot(&(dinv * s))
    }

    /// Analytical stress resultants at `x`, restricted to the leading
    /// `ncmp` components
    fn exact_resultants(anasol: &dyn AnalyticalField, x: &Vec3, ncmp: usize) -> FEVec {
        let s = anasol.value(x);
        FEVec::from_iterator(ncmp, s.iter().take(ncmp).copied())
    }
}

impl Integrand for KirchhoffLovePlateNorm<'_> {
    type Local = ElementNorm;

    fn integrand_type(&self) -> IntegrandType {
        IntegrandType::SECOND_DERIVATIVES | IntegrandType::ELEMENT_SOLUTION
    }

    fn local_integral(&self, nen: usize, _neumann: bool) -> ElementNorm {
        let ndof = self.plate.config().dofs_per_node() * nen;
        self.element_norm(FEVec::zeros(ndof))
    }

    fn eval_int(&self, pnorm: &mut ElementNorm, fe: &IntegrationPoint) -> PlateResult<()> {
        let sh = self.plate.eval_sol(&pnorm.solution, fe, false)?;
        let dinv = self.plate.form_c_matrix(&fe.x, true)?;

        pnorm.values[FE_ENERGY] += Self::energy(&dinv, &sh) * fe.det_jxw;

        let config = self.plate.config();
        if config.gravity != 0.0 {
            let rho = self.plate.material()?.mass_density(&fe.x);
            let wh = self.plate.deflection(&pnorm.solution, fe);
            pnorm.values[EXTERNAL_ENERGY] +=
                rho * config.thickness * config.gravity * wh * fe.det_jxw;
        }

        if let Some(anasol) = self.anasol {
            let s = Self::exact_resultants(anasol, &fe.x, self.ncmp());
            let e = &s - &sh;
            pnorm.values[EXACT_ENERGY] += Self::energy(&dinv, &s) * fe.det_jxw;
            pnorm.values[ERROR_ENERGY] += Self::energy(&dinv, &e) * fe.det_jxw;
        }

        if let Some(proj) = &pnorm.projection {
            if proj.ncols() != fe.nen() || proj.nrows() != sh.len() {
                return Err(PlateError::DimensionMismatch {
                    expected: sh.len() * fe.nen(),
                    actual: proj.len(),
                });
            }
            let e_star = proj * &fe.n - &sh;
            pnorm.estimate += Self::energy(&dinv, &e_star) * fe.det_jxw;
        }

        Ok(())
    }

    fn eval_bou(
        &self,
        pnorm: &mut ElementNorm,
        fe: &IntegrationPoint,
        _normal: &Vec3,
    ) -> PlateResult<()> {
        let p = self.plate.pressure(&fe.x);
        if p != 0.0 {
            let wh = self.plate.deflection(&pnorm.solution, fe);
            pnorm.values[EXTERNAL_ENERGY] += p * wh * fe.det_jxw;
        }
        Ok(())
    }

    fn finalize_element(&self, pnorm: &mut ElementNorm, _time: &TimeDomain) -> PlateResult<()> {
        if pnorm.values.len() <= EFFECTIVITY {
            return Ok(());
        }

        let v = &mut pnorm.values;
        let scale = v[FE_ENERGY].max(v[EXACT_ENERGY]);
        v[RELATIVE_ERROR] = relative_error(v[ERROR_ENERGY], v[EXACT_ENERGY], scale);
        v[EFFECTIVITY] = effectivity(v[ERROR_ENERGY], pnorm.estimate, scale);
        Ok(())
    }

    fn has_boundary_terms(&self) -> bool {
        true
    }

    /// Returns the number of norm groups (`which == 0`) or the number of
    /// norms in group `which`
    fn no_fields(&self, which: usize) -> usize {
        match which {
            0 => 1,
            1 => self.num_norms(),
            _ => 0,
        }
    }
}

impl NormIntegrand for KirchhoffLovePlateNorm<'_> {
    fn name(&self, group: usize, field: usize, prefix: Option<&str>) -> String {
        if group != 1 || field == 0 || field > self.num_norms() {
            return String::new();
        }
        decorate(NORM_NAMES[field - 1], prefix)
    }

    fn element_norm(&self, solution: FEVec) -> ElementNorm {
        ElementNorm::new(self.num_norms(), solution)
    }
}
