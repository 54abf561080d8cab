//! Result types for plate analysis

use serde::{Deserialize, Serialize};

use crate::integrand::norm::{
    effectivity, relative_error, EFFECTIVITY, ERROR_ENERGY, EXACT_ENERGY, EXTERNAL_ENERGY,
    FE_ENERGY,
};
use crate::integrand::{ElementNorm, NormIntegrand};
use crate::math::{Vec as FEVec, Vec3};

/// Surface pressure recorded at a boundary integration point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressureValue {
    /// Point coordinates
    pub x: Vec3,
    /// Pressure value
    pub pressure: f64,
}

impl PressureValue {
    pub fn new(x: Vec3, pressure: f64) -> Self {
        Self { x, pressure }
    }
}

/// Bending and twisting moments per unit length in a plate
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StressResultants {
    /// Bending moment about the y axis (bending in x direction)
    pub mxx: f64,
    /// Bending moment about the x axis (bending in y direction)
    pub myy: f64,
    /// Twisting moment
    pub mxy: f64,
    /// Maximum principal moment
    pub m1: f64,
    /// Minimum principal moment
    pub m2: f64,
}

impl StressResultants {
    /// Create from moment components
    pub fn from_components(mxx: f64, myy: f64, mxy: f64) -> Self {
        let m_avg = (mxx + myy) / 2.0;
        let r = ((mxx - myy).powi(2) / 4.0 + mxy.powi(2)).sqrt();

        Self {
            mxx,
            myy,
            mxy,
            m1: m_avg + r,
            m2: m_avg - r,
        }
    }

    /// Create from a resultant vector `[M_xx, M_yy, M_xy]`, or `[M_xx]` for
    /// beams
    pub fn from_vector(s: &FEVec) -> Self {
        let get = |i: usize| s.get(i).copied().unwrap_or(0.0);
        Self::from_components(get(0), get(1), get(2))
    }

    /// Largest bending stress at the plate surfaces, `6 |M| / t²` for the
    /// principal moments
    pub fn surface_stress(&self, thickness: f64) -> f64 {
        6.0 * self.m1.abs().max(self.m2.abs()) / (thickness * thickness)
    }
}

/// A named global norm value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormValue {
    pub name: String,
    pub value: f64,
}

/// Global norms summed over all elements of a model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormSummary {
    /// Number of elements added
    pub num_elements: usize,
    /// Squared finite element energy norm
    pub fe_energy2: f64,
    /// External energy
    pub external: f64,
    /// Squared analytical energy norm, if an analytical field was given
    pub exact_energy2: Option<f64>,
    /// Squared energy norm of the error, if an analytical field was given
    pub error_energy2: Option<f64>,
    /// Squared estimated error norm
    pub estimate2: f64,
}

impl NormSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the contributions of one element
    pub fn add(&mut self, elm: &ElementNorm) {
        self.num_elements += 1;
        self.fe_energy2 += elm.values[FE_ENERGY];
        self.external += elm.values[EXTERNAL_ENERGY];
        self.estimate2 += elm.estimate;
        if elm.values.len() > ERROR_ENERGY {
            *self.exact_energy2.get_or_insert(0.0) += elm.values[EXACT_ENERGY];
            *self.error_energy2.get_or_insert(0.0) += elm.values[ERROR_ENERGY];
        }
    }

    /// Merges a partial summary, e.g. from another worker thread
    pub fn merge(mut self, other: Self) -> Self {
        self.num_elements += other.num_elements;
        self.fe_energy2 += other.fe_energy2;
        self.external += other.external;
        self.estimate2 += other.estimate2;
        for (mine, theirs) in [
            (&mut self.exact_energy2, other.exact_energy2),
            (&mut self.error_energy2, other.error_energy2),
        ] {
            if let Some(v) = theirs {
                *mine.get_or_insert(0.0) += v;
            }
        }
        self
    }

    /// Energy norm of the finite element solution
    pub fn energy_norm(&self) -> f64 {
        self.fe_energy2.sqrt()
    }

    /// Square root of the external energy
    pub fn external_norm(&self) -> f64 {
        self.external.abs().sqrt()
    }

    /// Energy norm of the analytical solution
    pub fn exact_norm(&self) -> Option<f64> {
        self.exact_energy2.map(f64::sqrt)
    }

    /// Energy norm of the error
    pub fn error_norm(&self) -> Option<f64> {
        self.error_energy2.map(f64::sqrt)
    }

    /// Relative error in percent
    pub fn relative_error(&self) -> Option<f64> {
        let exact2 = self.exact_energy2?;
        let error2 = self.error_energy2?;
        Some(relative_error(error2, exact2, self.fe_energy2.max(exact2)))
    }

    /// Global effectivity index of the estimated error
    pub fn effectivity(&self) -> Option<f64> {
        let exact2 = self.exact_energy2?;
        let error2 = self.error_energy2?;
        Some(effectivity(error2, self.estimate2, self.fe_energy2.max(exact2)))
    }

    /// Global norm values in the order of the norm group, named by
    /// `integrand`
    pub fn named(&self, integrand: &dyn NormIntegrand, prefix: Option<&str>) -> Vec<NormValue> {
        let mut values = vec![self.energy_norm(), self.external_norm()];
        if let (Some(exact), Some(error), Some(rel), Some(eff)) = (
            self.exact_norm(),
            self.error_norm(),
            self.relative_error(),
            self.effectivity(),
        ) {
            values.extend([exact, error, rel, eff]);
        }

        let n = integrand.no_fields(1).min(values.len()).min(EFFECTIVITY + 1);
        values
            .into_iter()
            .take(n)
            .enumerate()
            .map(|(i, value)| NormValue {
                name: integrand.name(1, i + 1, prefix),
                value,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_principal_moments() {
        let m = StressResultants::from_components(3.0, 1.0, 0.0);
        assert_relative_eq!(m.m1, 3.0);
        assert_relative_eq!(m.m2, 1.0);

        let m = StressResultants::from_components(0.0, 0.0, 2.0);
        assert_relative_eq!(m.m1, 2.0);
        assert_relative_eq!(m.m2, -2.0);
        assert_relative_eq!(m.surface_stress(0.1), 1200.0, max_relative = 1e-12);
    }

    #[test]
    fn test_beam_resultant_vector() {
        let m = StressResultants::from_vector(&FEVec::from_vec(vec![5.0]));
        assert_relative_eq!(m.mxx, 5.0);
        assert_relative_eq!(m.myy, 0.0);
    }

    #[test]
    fn test_summary_accumulates_squares() {
        let mut a = ElementNorm::new(6, FEVec::zeros(12));
        a.values = vec![9.0, 1.0, 16.0, 1.0, 0.0, 0.0];
        let mut b = ElementNorm::new(6, FEVec::zeros(12));
        b.values = vec![7.0, 3.0, 9.0, 3.0, 0.0, 0.0];
        b.estimate = 4.0;

        let mut s1 = NormSummary::new();
        s1.add(&a);
        let mut s2 = NormSummary::new();
        s2.add(&b);
        let s = s1.merge(s2);

        assert_eq!(s.num_elements, 2);
        assert_relative_eq!(s.energy_norm(), 4.0);
        assert_relative_eq!(s.external_norm(), 2.0);
        assert_relative_eq!(s.exact_norm().unwrap(), 5.0);
        assert_relative_eq!(s.error_norm().unwrap(), 2.0);
        assert_relative_eq!(s.relative_error().unwrap(), 40.0);
        assert_relative_eq!(s.effectivity().unwrap(), 1.0);
    }

    #[test]
    fn test_summary_without_analytical_field() {
        let mut elm = ElementNorm::new(2, FEVec::zeros(12));
        elm.values = vec![4.0, 4.0];
        let mut s = NormSummary::new();
        s.add(&elm);
        assert!(s.exact_norm().is_none());
        assert!(s.relative_error().is_none());
        assert_relative_eq!(s.energy_norm(), 2.0);
    }

    #[test]
    fn test_pressure_value_json() {
        let pv = PressureValue::new(Vec3::new(1.0, 2.0, 0.0), -3.5);
        let json = serde_json::to_string(&pv).unwrap();
        assert!(json.contains("-3.5"));
        let back: PressureValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pv);
    }
}
